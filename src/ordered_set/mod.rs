//! Insertion-ordered hash set.
//!
//! This module provides [`OrderedSet`], a collection of unique elements that
//! keeps them in an explicit positional order.
//!
//! # Overview
//!
//! An `OrderedSet` is made of two cooperating halves:
//!
//! - a doubly linked sequence of nodes, stored in a slot arena, which defines
//!   front-to-back order;
//! - a hash index from each element to the arena handle of its node.
//!
//! The index answers membership and finds the node to splice next to; the
//! sequence is the only source of ordering. Every mutation checks the index
//! first, then relinks the sequence, then updates the index, so both halves
//! always describe exactly the same members.
//!
//! # Time Complexity
//!
//! | Operation                        | Complexity      |
//! |----------------------------------|-----------------|
//! | `contains`                       | O(1)            |
//! | `append` / `prepend`             | O(1) amortized  |
//! | `insert` (relative to a mark)    | O(1) amortized  |
//! | `move_to` (relative to a mark)   | O(1)            |
//! | `remove` / `take`                | O(1)            |
//! | `pop` / `shift`                  | O(1)            |
//! | `front` / `back` / `len`         | O(1)            |
//! | `range` / `iter` / `to_vec`      | O(n)            |
//!
//! # Examples
//!
//! ```rust
//! use ordset::{OrderedSet, Position};
//!
//! let mut set = OrderedSet::new();
//! set.append(1);
//! set.append(2);
//! set.append(3);
//! set.prepend(0);
//! set.prepend(0);
//!
//! assert!(set.contains(&1));
//! assert_eq!(set.len(), 4);
//! assert_eq!(set.to_vec(), vec![0, 1, 2, 3]);
//!
//! assert_eq!(set.pop(), Some(3));
//! assert_eq!(set.to_vec(), vec![0, 1, 2]);
//!
//! // Positional insert and reposition relative to an existing member
//! set.insert(5, &1, Position::After).unwrap();
//! set.move_to(&0, &2, Position::After).unwrap();
//! assert_eq!(set.to_vec(), vec![1, 5, 2, 0]);
//! ```

mod iter;
mod sequence;

use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::convert::Infallible;
use std::fmt;
use std::hash::{BuildHasher, Hash, Hasher};

use tracing::trace;

use crate::error::OrderedSetError;
use crate::hash::DefaultHashBuilder;

pub use iter::{IntoIter, Iter};
use sequence::{Handle, Sequence};

/// Where to place a value relative to a mark in [`OrderedSet::insert`] and
/// [`OrderedSet::move_to`].
///
/// `Position` converts from `bool`, with `true` meaning [`Position::After`].
///
/// ```rust
/// use ordset::Position;
///
/// assert_eq!(Position::from(true), Position::After);
/// assert_eq!(Position::from(false), Position::Before);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// Immediately in front of the mark.
    Before,
    /// Immediately behind the mark.
    After,
}

impl From<bool> for Position {
    #[inline]
    fn from(after: bool) -> Self {
        if after { Self::After } else { Self::Before }
    }
}

/// A set of unique elements that preserves a positional order.
///
/// Elements are kept in a doubly linked sequence and indexed by value, so
/// membership tests, insertion next to an existing member, repositioning and
/// removal all run in constant time while iteration follows the sequence.
///
/// The set is not internally synchronized. It is `Send`/`Sync` whenever `T`
/// and `S` are; concurrent writers need external locking.
///
/// # Type Parameters
///
/// * `T` - The element type. Lookups need `Hash + Eq`; operations that add a
///   node also need `Clone`, since the value is kept both in its node and as
///   its index key.
/// * `S` - The `BuildHasher` of the index. Defaults to
///   [`DefaultHashBuilder`].
///
/// # Examples
///
/// ```rust
/// use ordset::OrderedSet;
///
/// // Later duplicates are dropped, the first occurrence keeps its place
/// let set = OrderedSet::from_values([0, 3, 4, 1, 19, 21, 4, 3, 0]);
/// assert_eq!(set.to_vec(), vec![0, 3, 4, 1, 19, 21]);
/// ```
#[derive(Clone)]
pub struct OrderedSet<T, S = DefaultHashBuilder> {
    sequence: Sequence<T>,
    index: HashMap<T, Handle, S>,
}

// The set holds no interior mutability or shared ownership.
static_assertions::assert_impl_all!(OrderedSet<i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(OrderedSet<String>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(OrderedSet<std::rc::Rc<i32>>: Send, Sync);

// =============================================================================
// Construction
// =============================================================================

impl<T> OrderedSet<T> {
    /// Creates an empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordset::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = OrderedSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Creates an empty set with room for at least `capacity` members before
    /// reallocating.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }

    /// Creates a set from `values`, appending each in order.
    ///
    /// Later duplicates are dropped; each member keeps the position of its
    /// first occurrence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordset::OrderedSet;
    ///
    /// let set = OrderedSet::from_values(["b", "a", "b"]);
    /// assert_eq!(set.to_vec(), vec!["b", "a"]);
    /// ```
    #[must_use]
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Hash + Eq + Clone,
    {
        values.into_iter().collect()
    }
}

impl<T, S> OrderedSet<T, S> {
    /// Creates an empty set whose index uses `hasher`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordset::OrderedSet;
    /// use std::hash::RandomState;
    ///
    /// let mut set = OrderedSet::with_hasher(RandomState::new());
    /// set.append("a");
    /// assert!(set.contains("a"));
    /// ```
    #[inline]
    #[must_use]
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            sequence: Sequence::new(),
            index: HashMap::with_hasher(hasher),
        }
    }

    /// Creates an empty set with the given capacity whose index uses `hasher`.
    #[inline]
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            sequence: Sequence::with_capacity(capacity),
            index: HashMap::with_capacity_and_hasher(capacity, hasher),
        }
    }

    /// Returns the number of members.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Returns `true` if the set has no members.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.sequence.len() == 0
    }

    /// Returns how many members the set can hold without reallocating.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.sequence.capacity().min(self.index.capacity())
    }

    /// Returns a reference to the index's `BuildHasher`.
    #[inline]
    #[must_use]
    pub fn hasher(&self) -> &S {
        self.index.hasher()
    }

    /// Returns the first member, or `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordset::OrderedSet;
    ///
    /// let set = OrderedSet::from_values([1, 2, 3]);
    /// assert_eq!(set.front(), Some(&1));
    ///
    /// let empty: OrderedSet<i32> = OrderedSet::new();
    /// assert_eq!(empty.front(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.sequence.head().map(|handle| self.sequence.get(handle))
    }

    /// Returns the last member, or `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordset::OrderedSet;
    ///
    /// let set = OrderedSet::from_values([1, 2, 3]);
    /// assert_eq!(set.back(), Some(&3));
    /// ```
    #[inline]
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.sequence.tail().map(|handle| self.sequence.get(handle))
    }

    /// Returns an iterator over the members, front to back.
    ///
    /// The iterator is double-ended, so `.rev()` walks back to front.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordset::OrderedSet;
    ///
    /// let set = OrderedSet::from_values(["a", "b", "c"]);
    /// let forward: Vec<&&str> = set.iter().collect();
    /// let backward: Vec<&&str> = set.iter().rev().collect();
    ///
    /// assert_eq!(forward, vec![&"a", &"b", &"c"]);
    /// assert_eq!(backward, vec![&"c", &"b", &"a"]);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.sequence)
    }

    /// Visits every member front to back with its zero-based position.
    ///
    /// Traversal stops at the first `Err` returned by `visit`, and that error
    /// is returned unchanged. Members after it are not visited.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `visit`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordset::OrderedSet;
    ///
    /// let set = OrderedSet::from_values(["zero", "one", "two", "three"]);
    /// let mut visited = Vec::new();
    ///
    /// let result = set.range(|position, value| {
    ///     visited.push(position);
    ///     if *value == "two" {
    ///         return Err("reached two, giving up now");
    ///     }
    ///     Ok(())
    /// });
    ///
    /// assert_eq!(result, Err("reached two, giving up now"));
    /// assert_eq!(visited, vec![0, 1, 2]);
    /// ```
    pub fn range<E, F>(&self, mut visit: F) -> Result<(), E>
    where
        F: FnMut(usize, &T) -> Result<(), E>,
    {
        for (position, value) in self.iter().enumerate() {
            visit(position, value)?;
        }
        Ok(())
    }

    /// Visits every member back to front.
    ///
    /// Positions count from 0 at the back. Traversal stops at the first `Err`
    /// returned by `visit`, which is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `visit`.
    pub fn range_reverse<E, F>(&self, mut visit: F) -> Result<(), E>
    where
        F: FnMut(usize, &T) -> Result<(), E>,
    {
        for (position, value) in self.iter().rev().enumerate() {
            visit(position, value)?;
        }
        Ok(())
    }

    /// Removes every member, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.sequence.clear();
        self.index.clear();
    }
}

// =============================================================================
// Lookup, removal and reordering
// =============================================================================

impl<T, S> OrderedSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    /// Returns `true` if `value` is a member.
    ///
    /// Accepts any borrowed form of `T`, so an `OrderedSet<String>` can be
    /// queried with `&str`.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordset::OrderedSet;
    ///
    /// let set = OrderedSet::from_values(["hello".to_string(), "world".to_string()]);
    /// assert!(set.contains("hello"));
    /// assert!(!set.contains("goodbye"));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(value)
    }

    /// Reserves room for at least `additional` more members.
    pub fn reserve(&mut self, additional: usize) {
        self.sequence.reserve(additional);
        self.index.reserve(additional);
    }

    /// Releases as much unused capacity as possible.
    pub fn shrink_to_fit(&mut self) {
        self.sequence.shrink_to_fit();
        self.index.shrink_to_fit();
    }

    /// Repositions `value` immediately after or before `mark`.
    ///
    /// The mark is checked first. If `value` is not a member, or is the mark
    /// itself, nothing happens and `Ok(())` is returned. Moving never creates
    /// members; use [`insert`](Self::insert) for that.
    ///
    /// # Errors
    ///
    /// Returns [`OrderedSetError::MarkNotFound`] if `mark` is not a member.
    /// The set is left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordset::{OrderedSet, Position};
    ///
    /// let mut set = OrderedSet::from_values([100, 200, 150, 250]);
    /// set.move_to(&150, &200, Position::Before).unwrap();
    /// assert_eq!(set.to_vec(), vec![100, 150, 200, 250]);
    /// ```
    pub fn move_to<Q>(&mut self, value: &Q, mark: &Q, position: Position) -> Result<(), OrderedSetError>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(&anchor) = self.index.get(mark) else {
            trace!(?position, "move rejected: mark is not a member");
            return Err(OrderedSetError::MarkNotFound);
        };
        let Some(&handle) = self.index.get(value) else {
            return Ok(());
        };
        if handle == anchor {
            return Ok(());
        }

        let moved = match position {
            Position::After => self.sequence.move_after(handle, anchor),
            Position::Before => self.sequence.move_before(handle, anchor),
        };
        if moved {
            trace!(?position, len = self.len(), "member relinked next to mark");
        }
        Ok(())
    }

    /// Moves `value` to the front. Returns `false` if it is not a member.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordset::OrderedSet;
    ///
    /// let mut set = OrderedSet::from_values([1, 2, 3]);
    /// assert!(set.move_to_front(&3));
    /// assert!(!set.move_to_front(&9));
    /// assert_eq!(set.to_vec(), vec![3, 1, 2]);
    /// ```
    pub fn move_to_front<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.index.get(value) {
            Some(&handle) => {
                self.sequence.move_to_front(handle);
                true
            }
            None => false,
        }
    }

    /// Moves `value` to the back. Returns `false` if it is not a member.
    pub fn move_to_back<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.index.get(value) {
            Some(&handle) => {
                self.sequence.move_to_back(handle);
                true
            }
            None => false,
        }
    }

    /// Removes `value`, returning `true` if it was a member.
    ///
    /// The relative order of the remaining members is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordset::OrderedSet;
    ///
    /// let mut set = OrderedSet::from_values([0, 10, 20]);
    /// assert!(set.remove(&10));
    /// assert!(!set.remove(&10));
    /// assert_eq!(set.to_vec(), vec![0, 20]);
    /// ```
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.take(value).is_some()
    }

    /// Removes `value` and returns the stored member, if there was one.
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let handle = self.index.remove(value)?;
        Some(self.sequence.remove(handle))
    }

    /// Removes and returns the last member, or `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordset::OrderedSet;
    ///
    /// let mut set = OrderedSet::from_values([1, 2]);
    /// assert_eq!(set.pop(), Some(2));
    /// assert_eq!(set.pop(), Some(1));
    /// assert_eq!(set.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        let value = self.sequence.pop_back()?;
        self.index.remove(&value);
        Some(value)
    }

    /// Removes and returns the first member, or `None` if the set is empty.
    pub fn shift(&mut self) -> Option<T> {
        let value = self.sequence.pop_front()?;
        self.index.remove(&value);
        Some(value)
    }

    /// Keeps only the members for which `predicate` returns `true`.
    ///
    /// Members are visited front to back and survivors keep their order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordset::OrderedSet;
    ///
    /// let mut set: OrderedSet<i32> = (1..=6).collect();
    /// set.retain(|value| value % 2 == 0);
    /// assert_eq!(set.to_vec(), vec![2, 4, 6]);
    /// ```
    pub fn retain<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&T) -> bool,
    {
        let mut cursor = self.sequence.head();
        while let Some(handle) = cursor {
            cursor = self.sequence.next(handle);
            if !predicate(self.sequence.get(handle)) {
                let value = self.sequence.remove(handle);
                self.index.remove(&value);
            }
        }
    }
}

// =============================================================================
// Node-creating operations
// =============================================================================

impl<T, S> OrderedSet<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher,
{
    /// Adds `value` at the back. Returns `false` if it was already a member,
    /// in which case the set is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordset::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    /// assert!(set.append(3));
    /// assert!(set.append(5));
    /// assert!(!set.append(3));
    /// assert_eq!(set.to_vec(), vec![3, 5]);
    /// ```
    pub fn append(&mut self, value: T) -> bool {
        match self.index.entry(value) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                let handle = self.sequence.push_back(entry.key().clone());
                entry.insert(handle);
                true
            }
        }
    }

    /// Adds `value` at the front. Returns `false` if it was already a member,
    /// in which case the set is unchanged.
    pub fn prepend(&mut self, value: T) -> bool {
        match self.index.entry(value) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                let handle = self.sequence.push_front(entry.key().clone());
                entry.insert(handle);
                true
            }
        }
    }

    /// Inserts `value` immediately after or before `mark`.
    ///
    /// Returns `Ok(true)` if `value` was added and `Ok(false)` if it was
    /// already a member. An existing member is never repositioned; use
    /// [`move_to`](Self::move_to) for that.
    ///
    /// # Errors
    ///
    /// Returns [`OrderedSetError::MarkNotFound`] if `mark` is not a member.
    /// The set is left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordset::{OrderedSet, OrderedSetError, Position};
    ///
    /// let mut set = OrderedSet::from_values([10, 20, 30, 50, 60]);
    ///
    /// assert_eq!(set.insert(40, &50, Position::Before), Ok(true));
    /// assert_eq!(set.to_vec(), vec![10, 20, 30, 40, 50, 60]);
    ///
    /// // Already a member: no-op
    /// assert_eq!(set.insert(40, &10, Position::After), Ok(false));
    /// assert_eq!(set.to_vec(), vec![10, 20, 30, 40, 50, 60]);
    ///
    /// assert_eq!(
    ///     set.insert(40, &9999, Position::After),
    ///     Err(OrderedSetError::MarkNotFound)
    /// );
    /// ```
    pub fn insert<Q>(&mut self, value: T, mark: &Q, position: Position) -> Result<bool, OrderedSetError>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(&anchor) = self.index.get(mark) else {
            trace!(?position, "insert rejected: mark is not a member");
            return Err(OrderedSetError::MarkNotFound);
        };
        match self.index.entry(value) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(entry) => {
                let value = entry.key().clone();
                let handle = match position {
                    Position::After => self.sequence.insert_after(anchor, value),
                    Position::Before => self.sequence.insert_before(anchor, value),
                };
                entry.insert(handle);
                Ok(true)
            }
        }
    }

    /// Returns the members front to back as a `Vec`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordset::OrderedSet;
    ///
    /// let set = OrderedSet::from_values([3, 1, 2]);
    /// assert_eq!(set.to_vec(), vec![3, 1, 2]);
    /// ```
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        let mut values = Vec::with_capacity(self.len());
        let Ok(()) = self.range(|_, value| {
            values.push(value.clone());
            Ok::<(), Infallible>(())
        });
        values
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T, S: Default> Default for OrderedSet<T, S> {
    #[inline]
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T: fmt::Debug, S> fmt::Debug for OrderedSet<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display, S> fmt::Display for OrderedSet<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

/// Two sets are equal when they hold equal members in the same order.
impl<T: PartialEq, S> PartialEq for OrderedSet<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, S> Eq for OrderedSet<T, S> {}

impl<T: Hash, S> Hash for OrderedSet<T, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for element in self {
            element.hash(state);
        }
    }
}

impl<T, S> FromIterator<T> for OrderedSet<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut set = Self::with_capacity_and_hasher(iter.size_hint().0, S::default());
        set.extend(iter);
        set
    }
}

impl<T, const N: usize> From<[T; N]> for OrderedSet<T>
where
    T: Hash + Eq + Clone,
{
    fn from(values: [T; N]) -> Self {
        Self::from_values(values)
    }
}

impl<T> From<Vec<T>> for OrderedSet<T>
where
    T: Hash + Eq + Clone,
{
    fn from(values: Vec<T>) -> Self {
        Self::from_values(values)
    }
}

impl<T, S> Extend<T> for OrderedSet<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<'a, T, S> Extend<&'a T> for OrderedSet<T, S>
where
    T: 'a + Hash + Eq + Copy,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<'a, T, S> IntoIterator for &'a OrderedSet<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, S> IntoIterator for OrderedSet<T, S> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.sequence)
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize, S> serde::Serialize for OrderedSet<T, S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct OrderedSetVisitor<T, S> {
    marker: std::marker::PhantomData<OrderedSet<T, S>>,
}

#[cfg(feature = "serde")]
impl<T, S> OrderedSetVisitor<T, S> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T, S> serde::de::Visitor<'de> for OrderedSetVisitor<T, S>
where
    T: serde::Deserialize<'de> + Hash + Eq + Clone,
    S: BuildHasher + Default,
{
    type Value = OrderedSet<T, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        // Untrusted size hints are capped; the set grows past this as needed.
        let capacity = seq.size_hint().unwrap_or(0).min(4096);
        let mut set = OrderedSet::with_capacity_and_hasher(capacity, S::default());
        while let Some(element) = seq.next_element()? {
            set.append(element);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T, S> serde::Deserialize<'de> for OrderedSet<T, S>
where
    T: serde::Deserialize<'de> + Hash + Eq + Clone,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(OrderedSetVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;
    use tracing_test::traced_test;

    /// Checks that index and sequence describe the same members and that each
    /// index entry addresses the node holding its key.
    fn assert_consistent<T, S>(set: &OrderedSet<T, S>)
    where
        T: Hash + Eq + fmt::Debug,
        S: BuildHasher,
    {
        assert_eq!(set.index.len(), set.sequence.len());
        let mut seen = HashSet::new();
        let mut cursor = set.sequence.head();
        while let Some(handle) = cursor {
            let value = set.sequence.get(handle);
            assert!(seen.insert(handle), "handle {handle} linked twice");
            assert_eq!(set.index.get(value), Some(&handle), "index entry for {value:?}");
            cursor = set.sequence.next(handle);
        }
        assert_eq!(seen.len(), set.len());
    }

    #[rstest]
    fn test_new_is_consistent() {
        let set: OrderedSet<i32> = OrderedSet::new();
        assert_consistent(&set);
        assert_eq!(set.capacity(), 0);
    }

    #[rstest]
    fn test_append_prepend_keep_bijection() {
        let mut set = OrderedSet::new();
        set.append(3);
        set.append(5);
        set.prepend(1);
        set.append(5);
        set.prepend(1);

        assert_eq!(set.to_vec(), vec![1, 3, 5]);
        assert_consistent(&set);
    }

    #[rstest]
    fn test_insert_and_move_keep_bijection() {
        let mut set = OrderedSet::from_values([1, 2, 3, 5]);
        set.insert(4, &3, Position::After).unwrap();
        set.insert(0, &1, Position::Before).unwrap();
        set.move_to(&5, &0, Position::Before).unwrap();

        assert_eq!(set.to_vec(), vec![5, 0, 1, 2, 3, 4]);
        assert_consistent(&set);
    }

    #[rstest]
    fn test_move_keeps_handle() {
        let mut set = OrderedSet::from_values([1, 2, 3]);
        let before = set.index[&1];
        set.move_to(&1, &3, Position::After).unwrap();

        assert_eq!(set.index[&1], before);
        assert_eq!(set.to_vec(), vec![2, 3, 1]);
    }

    #[rstest]
    fn test_removal_paths_keep_bijection() {
        let mut set: OrderedSet<i32> = (0..10).collect();
        set.remove(&4);
        set.pop();
        set.shift();
        set.retain(|value| value % 3 != 0);

        assert_eq!(set.to_vec(), vec![1, 2, 5, 7, 8]);
        assert_consistent(&set);
    }

    #[rstest]
    fn test_slot_reuse_after_remove_keeps_bijection() {
        let mut set = OrderedSet::from_values(["a", "b", "c"]);
        let freed = set.index["b"];
        set.remove("b");
        set.prepend("d");

        assert_eq!(set.index["d"], freed);
        assert_eq!(set.to_vec(), vec!["d", "a", "c"]);
        assert_consistent(&set);
    }

    #[rstest]
    fn test_shrink_to_fit_keeps_members() {
        let mut set: OrderedSet<i32> = (0..100).collect();
        set.retain(|value| *value < 10);
        set.shrink_to_fit();

        assert_eq!(set.to_vec(), (0..10).collect::<Vec<_>>());
        assert_consistent(&set);
    }

    #[rstest]
    fn test_reserve_grows_capacity() {
        let mut set: OrderedSet<i32> = OrderedSet::new();
        set.reserve(32);
        assert!(set.capacity() >= 32);
    }

    #[test]
    #[traced_test]
    fn test_insert_with_missing_mark_is_traced() {
        let mut set = OrderedSet::from_values([1, 2]);
        assert_eq!(
            set.insert(3, &7, Position::After),
            Err(OrderedSetError::MarkNotFound)
        );
        assert!(logs_contain("insert rejected: mark is not a member"));
    }

    #[test]
    #[traced_test]
    fn test_move_is_traced_only_when_relinked() {
        let mut set = OrderedSet::from_values([1, 2, 3]);
        set.move_to(&2, &1, Position::After).unwrap();
        assert!(!logs_contain("member relinked next to mark"));

        set.move_to(&1, &3, Position::After).unwrap();
        assert!(logs_contain("member relinked next to mark"));
    }
}
