//! Filtering and deduplicating collections with set lookups.
//!
//! Membership is checked against a [`Set`] built once from the reference
//! collection, so each filter runs in O(n + m) instead of the O(n * m) of a
//! linear search per element.

use std::hash::Hash;

use num_traits::{CheckedRem, Zero};

use crate::error::{Result, SetAlgebraError};
use crate::set::Set;

/// Whether a filter keeps the positional order of its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderPolicy {
    /// Keep surviving elements in input order, repeats included.
    Preserve,
    /// Return the surviving elements once each, in unspecified order.
    #[default]
    Unordered,
}

/// Keeps the elements of `collection` that are `keep_members` of `lookup`.
fn retain_by_membership<T, C>(
    collection: C,
    lookup: &Set<T>,
    keep_members: bool,
    order: OrderPolicy,
) -> Vec<T>
where
    T: Hash + Eq,
    C: IntoIterator<Item = T>,
{
    let kept = collection
        .into_iter()
        .filter(|element| lookup.contains(element) == keep_members);
    match order {
        OrderPolicy::Preserve => kept.collect(),
        OrderPolicy::Unordered => kept.collect::<Set<T>>().into_vec(),
    }
}

/// Keeps the elements of `collection` that appear in `allowed`.
///
/// With [`OrderPolicy::Preserve`] the result follows the input order and
/// keeps repeated elements. With [`OrderPolicy::Unordered`] the result is
/// the intersection of the two collections, one entry per element.
///
/// # Examples
///
/// ```rust
/// use setalgebra::algebra::{OrderPolicy, filter_allowed};
///
/// let data = [1, 2, 3, 4, 5, 6, 7, 8];
/// let allowed = [2, 4, 6, 8];
/// assert_eq!(
///     filter_allowed(data, allowed, OrderPolicy::Preserve),
///     vec![2, 4, 6, 8]
/// );
///
/// let mut unordered = filter_allowed(data, allowed, OrderPolicy::Unordered);
/// unordered.sort_unstable();
/// assert_eq!(unordered, vec![2, 4, 6, 8]);
/// ```
pub fn filter_allowed<T, C, A>(collection: C, allowed: A, order: OrderPolicy) -> Vec<T>
where
    T: Hash + Eq,
    C: IntoIterator<Item = T>,
    A: IntoIterator<Item = T>,
{
    let allowed: Set<T> = allowed.into_iter().collect();
    retain_by_membership(collection, &allowed, true, order)
}

/// Drops the elements of `collection` that appear in `disallowed`.
///
/// Order semantics are the same as [`filter_allowed`].
///
/// # Examples
///
/// ```rust
/// use setalgebra::algebra::{OrderPolicy, filter_disallowed};
///
/// let words = ["spam", "ham", "eggs", "spam"];
/// assert_eq!(
///     filter_disallowed(words, ["spam"], OrderPolicy::Preserve),
///     vec!["ham", "eggs"]
/// );
/// ```
pub fn filter_disallowed<T, C, D>(collection: C, disallowed: D, order: OrderPolicy) -> Vec<T>
where
    T: Hash + Eq,
    C: IntoIterator<Item = T>,
    D: IntoIterator<Item = T>,
{
    let disallowed: Set<T> = disallowed.into_iter().collect();
    retain_by_membership(collection, &disallowed, false, order)
}

/// Removes repeated elements, keeping each at the position of its first
/// occurrence.
///
/// # Examples
///
/// ```rust
/// use setalgebra::algebra::deduplicate_preserving_order;
///
/// let list = [1, 2, 2, 3, 4, 4, 5, 6, 6, 7];
/// assert_eq!(deduplicate_preserving_order(list), vec![1, 2, 3, 4, 5, 6, 7]);
/// ```
pub fn deduplicate_preserving_order<T, C>(collection: C) -> Vec<T>
where
    T: Clone + Hash + Eq,
    C: IntoIterator<Item = T>,
{
    let mut seen = Set::new();
    collection
        .into_iter()
        .filter(|element| seen.insert(element.clone()))
        .collect()
}

/// Keeps, in input order, every element that `divisor` divides evenly.
///
/// Negative elements count when their remainder is zero. A remainder that
/// would overflow (`MIN % -1`) is zero.
///
/// # Errors
///
/// Returns [`SetAlgebraError::InvalidArgument`] if `divisor` is zero.
///
/// # Examples
///
/// ```rust
/// use setalgebra::SetAlgebraError;
/// use setalgebra::algebra::filter_multiples_preserving_order;
///
/// let numbers = 1..=10;
/// assert_eq!(filter_multiples_preserving_order(numbers, 3), Ok(vec![3, 6, 9]));
///
/// assert!(matches!(
///     filter_multiples_preserving_order([1, 2, 3], 0),
///     Err(SetAlgebraError::InvalidArgument { .. })
/// ));
/// ```
pub fn filter_multiples_preserving_order<T, C>(collection: C, divisor: T) -> Result<Vec<T>>
where
    T: Zero + CheckedRem,
    C: IntoIterator<Item = T>,
{
    if divisor.is_zero() {
        tracing::debug!(
            operation = "filter_multiples_preserving_order",
            "rejecting zero divisor"
        );
        return Err(SetAlgebraError::InvalidArgument {
            operation: "filter_multiples_preserving_order",
            reason: "divisor must not be zero",
        });
    }

    Ok(collection
        .into_iter()
        .filter(|element| {
            element
                .checked_rem(&divisor)
                .is_none_or(|remainder| remainder.is_zero())
        })
        .collect())
}
