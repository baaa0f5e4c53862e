//! Unordered collection of unique elements.
//!
//! This module provides [`Set`], the container every set algebra operation
//! in this crate produces. A `Set` is derived from a collection by dropping
//! duplicates; neither the insertion order nor the multiplicity of the
//! source collection is retained.
//!
//! # Examples
//!
//! ```rust
//! use setalgebra::Set;
//!
//! let mut set: Set<i32> = [1, 2, 3].into_iter().collect();
//! assert!(set.contains(&1));
//!
//! // Adding an element that is already present changes nothing
//! assert!(!set.insert(3));
//! assert_eq!(set.len(), 3);
//!
//! set.extend([7, 8, 9]);
//! assert_eq!(set.len(), 6);
//! ```
//!
//! # Set Operators
//!
//! ```rust
//! use setalgebra::Set;
//!
//! let a = Set::from([1, 2, 3]);
//! let b = Set::from([3, 4, 5]);
//!
//! assert_eq!(&a | &b, Set::from([1, 2, 3, 4, 5]));
//! assert_eq!(&a & &b, Set::from([3]));
//! assert_eq!(&a - &b, Set::from([1, 2]));
//! assert_eq!(&a ^ &b, Set::from([1, 2, 4, 5]));
//! ```

use std::borrow::Borrow;
use std::collections::HashSet;
use std::collections::hash_set;
use std::fmt;
use std::hash::Hash;
use std::ops::{BitAnd, BitOr, BitXor, Sub};

use crate::error::{Result, SetAlgebraError};

// =============================================================================
// Element Hasher Selection
// =============================================================================

/// Hasher builder used for set elements.
///
/// With the `fxhash` feature this is `rustc_hash::FxBuildHasher`, with the
/// `ahash` feature `ahash::RandomState`, and otherwise the standard library's
/// `RandomState`. If both fast-hash features are enabled, `fxhash` wins.
#[cfg(feature = "fxhash")]
pub type ElementHasher = rustc_hash::FxBuildHasher;

/// Hasher builder used for set elements (`ahash` feature).
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type ElementHasher = ahash::RandomState;

/// Hasher builder used for set elements (standard library default).
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type ElementHasher = std::hash::RandomState;

// =============================================================================
// Set Definition
// =============================================================================

/// An unordered collection of unique elements.
///
/// # Time Complexity
///
/// | Operation              | Complexity        |
/// |------------------------|-------------------|
/// | `new`                  | O(1)              |
/// | `contains`             | O(1) average      |
/// | `insert`               | O(1) average      |
/// | `remove` / `discard`   | O(1) average      |
/// | `len`                  | O(1)              |
/// | `union`                | O(n + m)          |
/// | `intersection`         | O(min(n, m))      |
/// | `difference`           | O(n)              |
/// | `symmetric_difference` | O(n + m)          |
///
/// # Examples
///
/// ```rust
/// use setalgebra::Set;
///
/// let set = Set::singleton(42);
/// assert!(set.contains(&42));
/// assert!(!set.contains(&0));
/// ```
#[derive(Clone)]
pub struct Set<T> {
    inner: HashSet<T, ElementHasher>,
}

static_assertions::assert_impl_all!(Set<i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Set<String>: Send, Sync, Clone);

impl<T> Set<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setalgebra::Set;
    ///
    /// let set: Set<i32> = Set::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: HashSet::with_hasher(ElementHasher::default()),
        }
    }

    /// Creates an empty set with room for at least `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: HashSet::with_capacity_and_hasher(capacity, ElementHasher::default()),
        }
    }

    /// Returns the number of elements in the set.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the set contains no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setalgebra::Set;
    ///
    /// let mut set: Set<i32> = Set::new();
    /// assert!(set.is_empty());
    ///
    /// set.insert(42);
    /// assert!(!set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns an iterator over the elements in unspecified order.
    #[inline]
    pub fn iter(&self) -> SetIterator<'_, T> {
        SetIterator {
            inner: self.inner.iter(),
        }
    }

    /// Materializes the set as a vector, in unspecified order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setalgebra::Set;
    ///
    /// let mut elements = Set::from([3, 1, 2]).into_vec();
    /// elements.sort_unstable();
    /// assert_eq!(elements, vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.inner.into_iter().collect()
    }
}

impl<T: Hash + Eq> Set<T> {
    /// Creates a set containing a single element.
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        let mut set = Self::with_capacity(1);
        set.insert(element);
        set
    }

    /// Returns `true` if the set contains the specified element.
    ///
    /// The element may be any borrowed form of the set's element type,
    /// but `Hash` and `Eq` on the borrowed form must match those for
    /// the element type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setalgebra::Set;
    ///
    /// let set: Set<String> = ["apple".to_string()].into_iter().collect();
    /// assert!(set.contains("apple"));
    /// assert!(!set.contains("pear"));
    /// ```
    #[inline]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains(element)
    }

    /// Adds an element to the set.
    ///
    /// Returns `true` if the element was not already present.
    #[inline]
    pub fn insert(&mut self, element: T) -> bool {
        self.inner.insert(element)
    }

    /// Removes an element, returning the stored value.
    ///
    /// # Errors
    ///
    /// Returns [`SetAlgebraError::ElementNotFound`] if the element is not a
    /// member of the set. The set is left unchanged in that case. Use
    /// [`Set::discard`] to remove an element that may be absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setalgebra::{Set, SetAlgebraError};
    ///
    /// let mut set = Set::from([6, 7]);
    /// assert_eq!(set.remove(&6), Ok(6));
    /// assert!(matches!(
    ///     set.remove(&6),
    ///     Err(SetAlgebraError::ElementNotFound { .. })
    /// ));
    /// ```
    pub fn remove<Q>(&mut self, element: &Q) -> Result<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.take(element).ok_or_else(|| {
            tracing::debug!(operation = "Set::remove", "element not found");
            SetAlgebraError::ElementNotFound {
                operation: "Set::remove",
            }
        })
    }

    /// Removes an element if it is present.
    ///
    /// Returns `true` if the element was a member of the set.
    #[inline]
    pub fn discard<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(element)
    }

    /// Returns `true` if every element of `self` is in `other`.
    #[inline]
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.inner.is_subset(&other.inner)
    }

    /// Returns `true` if every element of `other` is in `self`.
    #[inline]
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        self.inner.is_superset(&other.inner)
    }

    /// Returns `true` if `self` and `other` share no element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setalgebra::Set;
    ///
    /// assert!(Set::from([1, 2]).is_disjoint(&Set::from([3, 4])));
    /// assert!(!Set::from([1, 2, 3]).is_disjoint(&Set::from([3, 4, 5])));
    /// ```
    #[inline]
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.inner.is_disjoint(&other.inner)
    }

    /// Keeps only the elements for which `predicate` returns `true`.
    pub fn retain<P>(&mut self, predicate: P)
    where
        P: FnMut(&T) -> bool,
    {
        self.inner.retain(predicate);
    }
}

impl<T: Clone + Hash + Eq> Set<T> {
    /// Returns the elements present in `self`, `other`, or both.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let (larger, smaller) = if self.len() >= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        let mut result = larger.clone();
        result.extend(smaller.iter().cloned());
        result
    }

    /// Returns the elements present in both `self` and `other`.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        self.inner.intersection(&other.inner).cloned().collect()
    }

    /// Returns the elements of `self` that are not in `other`.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        self.inner.difference(&other.inner).cloned().collect()
    }

    /// Returns the elements in exactly one of `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setalgebra::Set;
    ///
    /// let a = Set::from([1, 2, 3]);
    /// let b = Set::from([3, 4, 5]);
    /// assert_eq!(a.symmetric_difference(&b), Set::from([1, 2, 4, 5]));
    /// ```
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        self.inner
            .symmetric_difference(&other.inner)
            .cloned()
            .collect()
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Borrowing iterator over the elements of a [`Set`].
pub struct SetIterator<'a, T> {
    inner: hash_set::Iter<'a, T>,
}

impl<'a, T> Iterator for SetIterator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for SetIterator<'_, T> {}

/// Owning iterator over the elements of a [`Set`].
pub struct SetIntoIterator<T> {
    inner: hash_set::IntoIter<T>,
}

impl<T> Iterator for SetIntoIterator<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for SetIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Set<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Hash + Eq> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for Set<T> {
    fn from(elements: [T; N]) -> Self {
        elements.into_iter().collect()
    }
}

impl<T: Hash + Eq> From<Vec<T>> for Set<T> {
    fn from(elements: Vec<T>) -> Self {
        elements.into_iter().collect()
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = SetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        SetIntoIterator {
            inner: self.inner.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = SetIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Hash + Eq> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T: Hash + Eq> Eq for Set<T> {}

impl<T: fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Set<T> {
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

// =============================================================================
// Operators
// =============================================================================

impl<T: Clone + Hash + Eq> BitOr for &Set<T> {
    type Output = Set<T>;

    fn bitor(self, other: Self) -> Set<T> {
        self.union(other)
    }
}

impl<T: Clone + Hash + Eq> BitAnd for &Set<T> {
    type Output = Set<T>;

    fn bitand(self, other: Self) -> Set<T> {
        self.intersection(other)
    }
}

impl<T: Clone + Hash + Eq> Sub for &Set<T> {
    type Output = Set<T>;

    fn sub(self, other: Self) -> Set<T> {
        self.difference(other)
    }
}

impl<T: Clone + Hash + Eq> BitXor for &Set<T> {
    type Output = Set<T>;

    fn bitxor(self, other: Self) -> Set<T> {
        self.symmetric_difference(other)
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Set<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
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
struct SetVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> SetVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for SetVisitor<T>
where
    T: serde::Deserialize<'de> + Hash + Eq,
{
    type Value = Set<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut set = Set::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(element) = seq.next_element()? {
            set.insert(element);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Set<T>
where
    T: serde::Deserialize<'de> + Hash + Eq,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SetVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
