//! Semigroup type class - types with an associative binary operation.
//!
//! A semigroup is an algebraic structure consisting of a set together with
//! an associative binary operation. In programming terms, a type `T` is a
//! semigroup if there exists a function `combine: (T, T) -> T` that is
//! associative.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use setalgebra::Set;
//! use setalgebra::algebra::Intersection;
//! use setalgebra::typeclass::Semigroup;
//!
//! let left = Intersection(Set::from([1, 2, 3]));
//! let right = Intersection(Set::from([2, 3, 4]));
//! assert_eq!(left.combine(right).into_inner(), Set::from([2, 3]));
//! ```

/// A type class for types with an associative binary operation.
///
/// # Laws
///
/// All implementations must satisfy:
///
/// ## Associativity
///
/// For all `a`, `b`, `c`:
/// ```text
/// (a.combine(b)).combine(c) == a.combine(b.combine(c))
/// ```
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Reduces all elements in an iterator using the semigroup operation,
    /// folding from the left in iteration order.
    ///
    /// Returns `None` if the iterator is empty.
    /// For a version that returns a default value for empty iterators, see
    /// [`Monoid::combine_all`](super::Monoid::combine_all).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setalgebra::Set;
    /// use setalgebra::algebra::Intersection;
    /// use setalgebra::typeclass::Semigroup;
    ///
    /// let sets = vec![
    ///     Intersection(Set::from([1, 2, 3])),
    ///     Intersection(Set::from([2, 3])),
    ///     Intersection(Set::from([3, 4])),
    /// ];
    /// let common = Intersection::reduce_all(sets).map(Intersection::into_inner);
    /// assert_eq!(common, Some(Set::from([3])));
    ///
    /// let none: Vec<Intersection<i32>> = vec![];
    /// assert!(Intersection::reduce_all(none).is_none());
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}
