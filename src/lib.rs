//! # ordset
//!
//! An insertion-ordered hash set.
//!
//! ## Overview
//!
//! [`OrderedSet`] keeps unique elements in an explicit positional order. It
//! pairs a doubly linked sequence, stored in a slot arena, with a hash index
//! from each element to its node. Together they give:
//!
//! - O(1) membership tests
//! - O(1) append, prepend and removal that preserve the order of everything else
//! - O(1) insertion and repositioning relative to any existing member
//! - Front-to-back and back-to-front traversal with early exit
//!
//! Think of it as a queue of its own keys, where each key can be found in
//! constant time.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` as a sequence in set order
//! - `fxhash`: use `rustc-hash` for the membership index
//! - `ahash`: use `ahash` for the membership index
//! - `full`: enable `serde`
//!
//! ## Example
//!
//! ```rust
//! use ordset::prelude::*;
//!
//! let mut set = OrderedSet::from_values([10, 20, 30, 50, 60]);
//!
//! // Insert 40 in front of 50
//! assert_eq!(set.insert(40, &50, Position::Before), Ok(true));
//! assert_eq!(set.to_vec(), vec![10, 20, 30, 40, 50, 60]);
//!
//! // Remove keeps everyone else in place
//! set.remove(&20);
//! assert_eq!(set.to_vec(), vec![10, 30, 40, 50, 60]);
//!
//! // Unknown marks are reported, never guessed at
//! assert_eq!(
//!     set.move_to(&10, &99, Position::After),
//!     Err(OrderedSetError::MarkNotFound)
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use ordset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::OrderedSetError;
    pub use crate::ordered_set::{OrderedSet, Position};
}

mod error;
pub mod hash;
mod ordered_set;

pub use error::OrderedSetError;
pub use ordered_set::{IntoIter, Iter, OrderedSet, Position};
