//! Monoid type class - semigroups with an identity element.
//!
//! A monoid is a semigroup with an identity element. In other words, a type `T`
//! is a monoid if it has:
//!
//! 1. An associative binary operation `combine: (T, T) -> T` (from Semigroup)
//! 2. An identity element `empty: T` such that for all `a`:
//!    - `empty.combine(a) == a` (left identity)
//!    - `a.combine(empty) == a` (right identity)
//!
//! # Examples
//!
//! ```rust
//! use setalgebra::Set;
//! use setalgebra::algebra::Union;
//! use setalgebra::typeclass::{Monoid, Semigroup};
//!
//! let value = Union(Set::from([1, 2]));
//! assert_eq!(Union::empty().combine(value.clone()), value);
//! assert_eq!(value.clone().combine(Union::empty()), value);
//! ```

use super::semigroup::Semigroup;

/// A type class for semigroups with an identity element.
///
/// # Laws
///
/// All implementations must satisfy (in addition to Semigroup laws):
///
/// ## Left Identity
///
/// For all `a`:
/// ```text
/// Self::empty().combine(a) == a
/// ```
///
/// ## Right Identity
///
/// For all `a`:
/// ```text
/// a.combine(Self::empty()) == a
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    fn empty() -> Self;

    /// Combines all elements in an iterator, starting from the identity element.
    ///
    /// Unlike [`Semigroup::reduce_all`], this method always returns a value
    /// (the identity element for empty iterators).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setalgebra::Set;
    /// use setalgebra::algebra::SymmetricDifference;
    /// use setalgebra::typeclass::Monoid;
    ///
    /// let sets = vec![
    ///     SymmetricDifference(Set::from([1, 2])),
    ///     SymmetricDifference(Set::from([2, 3])),
    ///     SymmetricDifference(Set::from([3, 4])),
    /// ];
    /// assert_eq!(
    ///     SymmetricDifference::combine_all(sets).into_inner(),
    ///     Set::from([1, 4])
    /// );
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }
}
