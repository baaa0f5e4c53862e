//! Newtype wrappers selecting a combining operation for [`Set`].
//!
//! A set can be combined with another set in more than one lawful way, so
//! each operation gets its own wrapper, the same way numeric types get
//! `Sum` and `Product` wrappers:
//!
//! - [`Union`]: monoid, identity is the empty set
//! - [`SymmetricDifference`]: monoid, identity is the empty set
//! - [`Intersection`]: semigroup only; its identity would be the universe
//!
//! A bare [`Set`] combines by union.

use std::fmt;
use std::hash::Hash;

use crate::set::Set;
use crate::typeclass::{Monoid, Semigroup};

macro_rules! set_wrapper {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $name<T>(pub Set<T>);

        impl<T> $name<T> {
            /// Wraps the given set.
            #[inline]
            pub const fn new(set: Set<T>) -> Self {
                Self(set)
            }

            /// Consumes the wrapper and returns the inner set.
            #[inline]
            pub fn into_inner(self) -> Set<T> {
                self.0
            }

            /// Returns a reference to the inner set.
            #[inline]
            pub const fn as_inner(&self) -> &Set<T> {
                &self.0
            }
        }

        impl<T: Hash + Eq> $name<T> {
            /// Deduplicates a collection into a wrapped set.
            pub fn from_collection<C>(collection: C) -> Self
            where
                C: IntoIterator<Item = T>,
            {
                Self(collection.into_iter().collect())
            }
        }

        impl<T> From<Set<T>> for $name<T> {
            fn from(set: Set<T>) -> Self {
                Self(set)
            }
        }

        impl<T: Hash + Eq> PartialEq for $name<T> {
            fn eq(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }

        impl<T: Hash + Eq> Eq for $name<T> {}

        impl<T: fmt::Debug> fmt::Debug for $name<T> {
            fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.debug_tuple(stringify!($name)).field(&self.0).finish()
            }
        }
    };
}

set_wrapper! {
    /// Combines sets by union.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setalgebra::Set;
    /// use setalgebra::algebra::Union;
    /// use setalgebra::typeclass::Semigroup;
    ///
    /// let left = Union(Set::from([1, 2, 3]));
    /// let right = Union(Set::from([3, 4, 5]));
    /// assert_eq!(left.combine(right).into_inner(), Set::from([1, 2, 3, 4, 5]));
    /// ```
    Union
}

set_wrapper! {
    /// Combines sets by intersection.
    ///
    /// There is no `Monoid` instance: the identity of intersection is the
    /// set of every possible element, which cannot be represented.
    Intersection
}

set_wrapper! {
    /// Combines sets by symmetric difference (set XOR).
    ///
    /// Folding any number of sets keeps exactly the elements that occur in
    /// an odd number of them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setalgebra::Set;
    /// use setalgebra::algebra::SymmetricDifference;
    /// use setalgebra::typeclass::Semigroup;
    ///
    /// let left = SymmetricDifference(Set::from([1, 2, 3]));
    /// let right = SymmetricDifference(Set::from([3, 4, 5]));
    /// assert_eq!(left.combine(right).into_inner(), Set::from([1, 2, 4, 5]));
    /// ```
    SymmetricDifference
}

/// Orders two sets as `(larger, smaller)`.
fn by_size<T>(left: Set<T>, right: Set<T>) -> (Set<T>, Set<T>) {
    if left.len() >= right.len() {
        (left, right)
    } else {
        (right, left)
    }
}

impl<T: Hash + Eq> Semigroup for Union<T> {
    fn combine(self, other: Self) -> Self {
        let (mut larger, smaller) = by_size(self.0, other.0);
        larger.extend(smaller);
        Self(larger)
    }
}

impl<T: Hash + Eq> Monoid for Union<T> {
    fn empty() -> Self {
        Self(Set::new())
    }
}

impl<T: Hash + Eq> Semigroup for Intersection<T> {
    fn combine(self, other: Self) -> Self {
        let (larger, mut smaller) = by_size(self.0, other.0);
        smaller.retain(|element| larger.contains(element));
        Self(smaller)
    }
}

impl<T: Hash + Eq> Semigroup for SymmetricDifference<T> {
    fn combine(self, other: Self) -> Self {
        let (mut larger, smaller) = by_size(self.0, other.0);
        for element in smaller {
            if !larger.discard(&element) {
                larger.insert(element);
            }
        }
        Self(larger)
    }
}

impl<T: Hash + Eq> Monoid for SymmetricDifference<T> {
    fn empty() -> Self {
        Self(Set::new())
    }
}

// =============================================================================
// Set Implementation
// =============================================================================

/// A bare set combines by union.
impl<T: Hash + Eq> Semigroup for Set<T> {
    fn combine(self, other: Self) -> Self {
        Union(self).combine(Union(other)).into_inner()
    }
}

impl<T: Hash + Eq> Monoid for Set<T> {
    fn empty() -> Self {
        Self::new()
    }
}
