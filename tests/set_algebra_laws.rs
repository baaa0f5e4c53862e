//! Property-based tests for set algebra laws.
//!
//! These tests verify that the collection-level operations satisfy the
//! mathematical properties expected of set union, intersection, difference
//! and symmetric difference.

use proptest::prelude::*;
use setalgebra::Set;
use setalgebra::algebra::{
    Intersection, SymmetricDifference, Union, deduplicate_preserving_order, difference,
    has_duplicates, intersection, intersection_all, is_disjoint, is_subset, is_superset,
    symmetric_difference, symmetric_difference_all, union, union_all, unique_across_collections,
};
use setalgebra::typeclass::{Monoid, Semigroup};

/// Small element domain so that generated collections overlap often.
fn collection() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(0..20_i32, 0..30)
}

fn collections() -> impl Strategy<Value = Vec<Vec<i32>>> {
    prop::collection::vec(collection(), 0..6)
}

// =============================================================================
// Union Commutativity Law
// Description: A ∪ B = B ∪ A
// =============================================================================

proptest! {
    #[test]
    fn prop_union_commutativity_law(a in collection(), b in collection()) {
        prop_assert_eq!(union(a.clone(), b.clone()), union(b, a));
    }
}

// =============================================================================
// Union Associativity Law
// Description: (A ∪ B) ∪ C = A ∪ (B ∪ C)
// =============================================================================

proptest! {
    #[test]
    fn prop_union_associativity_law(a in collection(), b in collection(), c in collection()) {
        let left = union(union(a.clone(), b.clone()), c.clone());
        let right = union(a, union(b, c));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Intersection Commutativity Law
// Description: A ∩ B = B ∩ A
// =============================================================================

proptest! {
    #[test]
    fn prop_intersection_commutativity_law(a in collection(), b in collection()) {
        prop_assert_eq!(intersection(a.clone(), b.clone()), intersection(b, a));
    }
}

// =============================================================================
// Intersection Associativity Law
// Description: (A ∩ B) ∩ C = A ∩ (B ∩ C)
// =============================================================================

proptest! {
    #[test]
    fn prop_intersection_associativity_law(
        a in collection(),
        b in collection(),
        c in collection()
    ) {
        let left = intersection(intersection(a.clone(), b.clone()), c.clone());
        let right = intersection(a, intersection(b, c));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Idempotence Laws
// Description: A ∪ A = Set(A) and A ∩ A = Set(A)
// =============================================================================

proptest! {
    #[test]
    fn prop_idempotence_law(a in collection()) {
        let expected: Set<i32> = a.iter().copied().collect();
        prop_assert_eq!(union(a.clone(), a.clone()), expected.clone());
        prop_assert_eq!(intersection(a.clone(), a), expected);
    }
}

// =============================================================================
// Symmetric Difference Law
// Description: A △ B = (A ∪ B) - (A ∩ B)
// =============================================================================

proptest! {
    #[test]
    fn prop_symmetric_difference_law(a in collection(), b in collection()) {
        let expected = difference(
            union(a.clone(), b.clone()),
            intersection(a.clone(), b.clone()),
        );
        prop_assert_eq!(symmetric_difference(a, b), expected);
    }
}

// =============================================================================
// Symmetric Difference Parity Law
// Description: the N-ary fold keeps elements found in an odd number of inputs
// =============================================================================

proptest! {
    #[test]
    fn prop_symmetric_difference_all_parity_law(lists in collections()) {
        let result = symmetric_difference_all(lists.clone());
        for element in 0..20 {
            let occurrences = lists.iter().filter(|list| list.contains(&element)).count();
            prop_assert_eq!(result.contains(&element), occurrences % 2 == 1);
        }
    }
}

// =============================================================================
// Symmetric Difference Fold Order Law
// Description: reversing the inputs does not change the folded result
// =============================================================================

proptest! {
    #[test]
    fn prop_symmetric_difference_all_order_law(lists in collections()) {
        let mut reversed = lists.clone();
        reversed.reverse();
        prop_assert_eq!(symmetric_difference_all(lists), symmetric_difference_all(reversed));
    }
}

// =============================================================================
// Disjointness Law
// Description: is_disjoint(A, B) iff A ∩ B is empty
// =============================================================================

proptest! {
    #[test]
    fn prop_disjoint_iff_empty_intersection_law(a in collection(), b in collection()) {
        prop_assert_eq!(is_disjoint(a.clone(), b.clone()), intersection(a, b).is_empty());
    }
}

// =============================================================================
// Subset/Superset Duality Law
// Description: A ⊆ B iff B ⊇ A, and A ⊆ A ∪ B
// =============================================================================

proptest! {
    #[test]
    fn prop_subset_superset_duality_law(a in collection(), b in collection()) {
        prop_assert_eq!(is_subset(a.clone(), b.clone()), is_superset(b.clone(), a.clone()));
        prop_assert!(is_subset(a.clone(), union(a, b)));
    }
}

// =============================================================================
// Difference Law
// Description: A - B is disjoint from B and a subset of A
// =============================================================================

proptest! {
    #[test]
    fn prop_difference_law(a in collection(), b in collection()) {
        let result = difference(a.clone(), b.clone());
        prop_assert!(is_disjoint(result.clone(), b));
        prop_assert!(is_subset(result, a));
    }
}

// =============================================================================
// Unique Across Collections Law
// Description: unique(Cs) = union(Cs) - intersection(Cs)
// =============================================================================

proptest! {
    #[test]
    fn prop_unique_across_collections_law(lists in collections()) {
        let expected = difference(union_all(lists.clone()), intersection_all(lists.clone()));
        prop_assert_eq!(unique_across_collections(lists), expected);
    }
}

// =============================================================================
// Deduplication Law
// Description: the result has no repeats and is the first-occurrence
// subsequence of the input
// =============================================================================

proptest! {
    #[test]
    fn prop_deduplicate_preserving_order_law(a in collection()) {
        let result = deduplicate_preserving_order(a.clone());

        prop_assert!(!has_duplicates(result.clone()));

        let mut first_positions: Vec<usize> = result
            .iter()
            .map(|element| a.iter().position(|candidate| candidate == element).unwrap())
            .collect();
        let sorted = {
            let mut sorted = first_positions.clone();
            sorted.sort_unstable();
            sorted
        };
        prop_assert_eq!(&first_positions, &sorted);
        first_positions.dedup();
        prop_assert_eq!(first_positions.len(), result.len());
        prop_assert_eq!(result.len(), a.iter().collect::<Set<_>>().len());
    }
}

// =============================================================================
// Has Duplicates Law
// Description: has_duplicates(A) iff |Set(A)| < |A|
// =============================================================================

proptest! {
    #[test]
    fn prop_has_duplicates_law(a in collection()) {
        let distinct: Set<i32> = a.iter().copied().collect();
        prop_assert_eq!(has_duplicates(a.clone()), distinct.len() < a.len());
    }
}

// =============================================================================
// Monoid Laws
// Description: the empty set is a two-sided identity for Union and
// SymmetricDifference, and Intersection is associative
// =============================================================================

proptest! {
    #[test]
    fn prop_union_monoid_identity_law(a in collection()) {
        let value = Union::from_collection(a);
        prop_assert_eq!(Union::empty().combine(value.clone()), value.clone());
        prop_assert_eq!(value.clone().combine(Union::empty()), value);
    }

    #[test]
    fn prop_symmetric_difference_monoid_identity_law(a in collection()) {
        let value = SymmetricDifference::from_collection(a);
        prop_assert_eq!(SymmetricDifference::empty().combine(value.clone()), value.clone());
        prop_assert_eq!(value.clone().combine(SymmetricDifference::empty()), value);
    }

    #[test]
    fn prop_symmetric_difference_self_inverse_law(a in collection()) {
        let value = SymmetricDifference::from_collection(a);
        prop_assert!(value.clone().combine(value).as_inner().is_empty());
    }

    #[test]
    fn prop_intersection_semigroup_associativity_law(
        a in collection(),
        b in collection(),
        c in collection()
    ) {
        let (a, b, c) = (
            Intersection::from_collection(a),
            Intersection::from_collection(b),
            Intersection::from_collection(c),
        );
        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));
        prop_assert_eq!(left, right);
    }
}
