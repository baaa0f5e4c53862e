//! Set operations over plain collections.
//!
//! Every function here accepts collections as any `IntoIterator`, removes
//! duplicates on the way in, and returns either a [`Set`] or a `bool`.
//! The n-ary forms (`*_all`, [`unique_across_collections`]) are left folds
//! over the wrappers in [`super::combine`], in the order the collections
//! are given.

use std::borrow::Borrow;
use std::hash::Hash;

use super::combine::{Intersection, SymmetricDifference, Union};
use crate::set::Set;
use crate::typeclass::{Monoid, Semigroup};

/// Returns the elements present in at least one of the two collections.
///
/// # Examples
///
/// ```rust
/// use setalgebra::Set;
/// use setalgebra::algebra::union;
///
/// assert_eq!(union([1, 2, 3], [3, 4, 5]), Set::from([1, 2, 3, 4, 5]));
/// ```
pub fn union<T, A, B>(first: A, second: B) -> Set<T>
where
    T: Hash + Eq,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    first.into_iter().chain(second).collect()
}

/// Returns the elements present in at least one of the collections.
///
/// An empty list of collections yields the empty set.
///
/// # Examples
///
/// ```rust
/// use setalgebra::Set;
/// use setalgebra::algebra::union_all;
///
/// let lists = vec![vec![1, 2], vec![2, 3], vec![5]];
/// assert_eq!(union_all(lists), Set::from([1, 2, 3, 5]));
/// ```
pub fn union_all<T, I, C>(collections: I) -> Set<T>
where
    T: Hash + Eq,
    I: IntoIterator<Item = C>,
    C: IntoIterator<Item = T>,
{
    let mut folded = 0_usize;
    let result = Union::combine_all(collections.into_iter().map(|collection| {
        folded += 1;
        Union::from_collection(collection)
    }));
    tracing::trace!(operation = "union_all", collections = folded, "folded");
    result.into_inner()
}

/// Returns the elements present in both collections.
///
/// # Examples
///
/// ```rust
/// use setalgebra::Set;
/// use setalgebra::algebra::intersection;
///
/// assert_eq!(intersection([1, 2, 3], [3, 4, 5]), Set::from([3]));
/// ```
pub fn intersection<T, A, B>(first: A, second: B) -> Set<T>
where
    T: Hash + Eq,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    let second: Set<T> = second.into_iter().collect();
    first
        .into_iter()
        .filter(|element| second.contains(element))
        .collect()
}

/// Returns the elements present in every collection.
///
/// The result is empty if any collection is empty, and also when no
/// collection is given at all.
///
/// # Examples
///
/// ```rust
/// use setalgebra::Set;
/// use setalgebra::algebra::intersection_all;
///
/// let lists = vec![vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 5]];
/// assert_eq!(intersection_all(lists), Set::from([3]));
/// ```
pub fn intersection_all<T, I, C>(collections: I) -> Set<T>
where
    T: Hash + Eq,
    I: IntoIterator<Item = C>,
    C: IntoIterator<Item = T>,
{
    let mut folded = 0_usize;
    let result = Intersection::reduce_all(collections.into_iter().map(|collection| {
        folded += 1;
        Intersection::from_collection(collection)
    }));
    tracing::trace!(operation = "intersection_all", collections = folded, "folded");
    result.map_or_else(Set::new, Intersection::into_inner)
}

/// Returns the elements of `first` that are not in `second`.
///
/// # Examples
///
/// ```rust
/// use setalgebra::Set;
/// use setalgebra::algebra::difference;
///
/// assert_eq!(difference([1, 2, 3], [3, 4, 5]), Set::from([1, 2]));
/// assert_eq!(difference([3, 4, 5], [1, 2, 3]), Set::from([4, 5]));
/// ```
pub fn difference<T, A, B>(first: A, second: B) -> Set<T>
where
    T: Hash + Eq,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    let second: Set<T> = second.into_iter().collect();
    first
        .into_iter()
        .filter(|element| !second.contains(element))
        .collect()
}

/// Returns the elements present in exactly one of the two collections.
///
/// # Examples
///
/// ```rust
/// use setalgebra::Set;
/// use setalgebra::algebra::symmetric_difference;
///
/// assert_eq!(
///     symmetric_difference([1, 2, 3, 4], [3, 4, 5, 6]),
///     Set::from([1, 2, 5, 6])
/// );
/// ```
pub fn symmetric_difference<T, A, B>(first: A, second: B) -> Set<T>
where
    T: Hash + Eq,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    SymmetricDifference::from_collection(first)
        .combine(SymmetricDifference::from_collection(second))
        .into_inner()
}

/// Folds set XOR over the collections in the order given.
///
/// Each collection is deduplicated before folding, so the result holds the
/// elements that belong to an odd number of the collections. Repeats inside
/// a single collection do not count.
///
/// # Examples
///
/// ```rust
/// use setalgebra::Set;
/// use setalgebra::algebra::symmetric_difference_all;
///
/// let lists = vec![vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 5]];
/// assert_eq!(symmetric_difference_all(lists), Set::from([1, 3, 5]));
/// ```
pub fn symmetric_difference_all<T, I, C>(collections: I) -> Set<T>
where
    T: Hash + Eq,
    I: IntoIterator<Item = C>,
    C: IntoIterator<Item = T>,
{
    let mut folded = 0_usize;
    let result = SymmetricDifference::combine_all(collections.into_iter().map(|collection| {
        folded += 1;
        SymmetricDifference::from_collection(collection)
    }));
    tracing::trace!(
        operation = "symmetric_difference_all",
        collections = folded,
        "folded"
    );
    result.into_inner()
}

/// Returns `true` if the two collections share no element.
///
/// # Examples
///
/// ```rust
/// use setalgebra::algebra::is_disjoint;
///
/// assert!(!is_disjoint([1, 2, 3], [3, 4, 5]));
/// assert!(is_disjoint([1, 2], [4, 5]));
/// ```
pub fn is_disjoint<T, A, B>(first: A, second: B) -> bool
where
    T: Hash + Eq,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    let second: Set<T> = second.into_iter().collect();
    !first.into_iter().any(|element| second.contains(&element))
}

/// Returns `true` if every element of `first` is in `second`.
///
/// # Examples
///
/// ```rust
/// use setalgebra::algebra::is_subset;
///
/// assert!(is_subset([1, 2], [1, 2, 3]));
/// assert!(!is_subset([1, 4], [1, 2, 3]));
/// ```
pub fn is_subset<T, A, B>(first: A, second: B) -> bool
where
    T: Hash + Eq,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    let second: Set<T> = second.into_iter().collect();
    first.into_iter().all(|element| second.contains(&element))
}

/// Returns `true` if every element of `second` is in `first`.
///
/// # Examples
///
/// ```rust
/// use setalgebra::algebra::{is_subset, is_superset};
///
/// assert!(is_superset([1, 2, 3, 4], [2, 4]));
/// assert!(is_subset([2, 4], [1, 2, 3, 4]));
/// ```
pub fn is_superset<T, A, B>(first: A, second: B) -> bool
where
    T: Hash + Eq,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    is_subset(second, first)
}

/// Returns `true` if `element` is a member of `set`.
#[inline]
pub fn contains<T, Q>(set: &Set<T>, element: &Q) -> bool
where
    T: Hash + Eq + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
{
    set.contains(element)
}

/// Returns `true` if some element occurs more than once in the collection.
///
/// Equivalent to comparing the size of the deduplicated set with the length
/// of the collection, but stops at the first repeat.
///
/// # Examples
///
/// ```rust
/// use setalgebra::algebra::has_duplicates;
///
/// assert!(has_duplicates([1, 2, 3, 3]));
/// assert!(!has_duplicates([1, 2, 3]));
/// ```
pub fn has_duplicates<T, C>(collection: C) -> bool
where
    T: Hash + Eq,
    C: IntoIterator<Item = T>,
{
    let mut seen = Set::new();
    collection.into_iter().any(|element| !seen.insert(element))
}

/// Returns the elements that are not common to every collection.
///
/// This is the union of the collections minus their intersection. Given a
/// single collection the result is empty, since every element is common to
/// all (one) inputs.
///
/// # Examples
///
/// ```rust
/// use setalgebra::Set;
/// use setalgebra::algebra::unique_across_collections;
///
/// let lists = vec![vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 5]];
/// assert_eq!(unique_across_collections(lists), Set::from([1, 2, 4, 5]));
/// ```
pub fn unique_across_collections<T, I, C>(collections: I) -> Set<T>
where
    T: Clone + Hash + Eq,
    I: IntoIterator<Item = C>,
    C: IntoIterator<Item = T>,
{
    let sets: Vec<Set<T>> = collections
        .into_iter()
        .map(|collection| collection.into_iter().collect())
        .collect();
    tracing::trace!(
        operation = "unique_across_collections",
        collections = sets.len(),
        "folded"
    );

    let common = Intersection::reduce_all(sets.iter().cloned().map(Intersection))
        .map_or_else(Set::new, Intersection::into_inner);
    let mut result = Union::combine_all(sets.into_iter().map(Union)).into_inner();
    result.retain(|element| !common.contains(element));
    result
}
