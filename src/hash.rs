//! Hasher selection for the membership index.
//!
//! The index of an [`OrderedSet`](crate::OrderedSet) is a `HashMap` keyed by
//! element. Its default `BuildHasher` is picked at compile time:
//!
//! | Feature   | `DefaultHashBuilder`            |
//! |-----------|---------------------------------|
//! | `fxhash`  | `rustc_hash::FxBuildHasher`     |
//! | `ahash`   | `ahash::RandomState`            |
//! | (none)    | `std::hash::RandomState`        |
//!
//! `fxhash` wins when both features are enabled. Any other hasher can still
//! be supplied through [`OrderedSet::with_hasher`](crate::OrderedSet::with_hasher).

/// The hasher used when none is named explicitly.
#[cfg(feature = "fxhash")]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// The hasher used when none is named explicitly.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultHashBuilder = ahash::RandomState;

/// The hasher used when none is named explicitly.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultHashBuilder = std::hash::RandomState;
