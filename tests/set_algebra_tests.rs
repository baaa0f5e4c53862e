//! Unit tests for the collection-level set operations.

use rstest::rstest;
use setalgebra::Set;
use setalgebra::algebra::{
    contains, difference, has_duplicates, intersection, intersection_all, is_disjoint, is_subset,
    is_superset, symmetric_difference, symmetric_difference_all, union, union_all,
    unique_across_collections,
};

#[rstest]
fn test_basic_operations_on_overlapping_sets() {
    let a = [1, 2, 3];
    let b = [3, 4, 5];

    assert_eq!(union(a, b), Set::from([1, 2, 3, 4, 5]));
    assert_eq!(intersection(a, b), Set::from([3]));
    assert_eq!(difference(a, b), Set::from([1, 2]));
    assert_eq!(symmetric_difference(a, b), Set::from([1, 2, 4, 5]));
    assert!(!is_disjoint(a, b));
}

#[rstest]
fn test_difference_is_not_commutative() {
    assert_ne!(difference([1, 2, 3], [3, 4]), difference([3, 4], [1, 2, 3]));
}

#[rstest]
fn test_operations_ignore_input_duplicates() {
    assert_eq!(union([1, 1, 1], [1, 2, 2]), Set::from([1, 2]));
    assert_eq!(intersection([2, 2, 3], [2, 2]), Set::from([2]));
}

#[rstest]
fn test_intersection_with_empty_collection_is_empty() {
    assert!(intersection([1, 2, 3], Vec::<i32>::new()).is_empty());
    assert!(intersection(Vec::<i32>::new(), [1, 2, 3]).is_empty());
}

#[rstest]
#[case(vec![vec![1, 2], vec![3]], Set::from([1, 2, 3]))]
#[case(vec![vec![1], vec![1], vec![1]], Set::from([1]))]
#[case(vec![vec![4, 4]], Set::from([4]))]
fn test_union_all(#[case] lists: Vec<Vec<i32>>, #[case] expected: Set<i32>) {
    assert_eq!(union_all(lists), expected);
}

#[rstest]
#[case(vec![vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 5]], Set::from([3]))]
#[case(vec![vec![1, 2], vec![3, 4]], Set::new())]
#[case(vec![vec![1, 2], vec![1, 2], vec![]], Set::new())]
fn test_intersection_all(#[case] lists: Vec<Vec<i32>>, #[case] expected: Set<i32>) {
    assert_eq!(intersection_all(lists), expected);
}

#[rstest]
fn test_symmetric_difference_all_is_set_parity_not_multiset_parity() {
    // 1 appears three times in the first list but in only one list.
    let lists = vec![vec![1, 1, 1, 2], vec![2, 3]];
    assert_eq!(symmetric_difference_all(lists), Set::from([1, 3]));
}

#[rstest]
fn test_symmetric_difference_all_two_inputs_matches_binary_form() {
    let a = vec![1, 2, 3, 4];
    let b = vec![3, 4, 5, 6];
    assert_eq!(
        symmetric_difference_all(vec![a.clone(), b.clone()]),
        symmetric_difference(a, b)
    );
}

#[rstest]
#[case(vec![1, 2], vec![3, 4], true)]
#[case(vec![1, 2, 3], vec![3, 4, 5], false)]
#[case(vec![], vec![], true)]
fn test_is_disjoint(#[case] a: Vec<i32>, #[case] b: Vec<i32>, #[case] expected: bool) {
    assert_eq!(is_disjoint(a, b), expected);
}

#[rstest]
fn test_subset_and_superset() {
    assert!(is_subset([1, 2], [1, 2, 3]));
    assert!(!is_subset([1, 2, 9], [1, 2, 3]));
    assert!(is_superset([1, 2, 3], [1, 2]));
    assert!(!is_superset([1, 2], [1, 2, 3]));
    assert!(is_subset(Vec::<i32>::new(), [1]));
}

#[rstest]
fn test_contains_on_set() {
    let set: Set<String> = ["red", "green"].into_iter().map(String::from).collect();
    assert!(contains(&set, "red"));
    assert!(!contains(&set, "blue"));
}

#[rstest]
#[case(vec![1, 2, 3, 3], true)]
#[case(vec![1, 2, 3], false)]
#[case(vec![], false)]
fn test_has_duplicates(#[case] collection: Vec<i32>, #[case] expected: bool) {
    assert_eq!(has_duplicates(collection), expected);
}

#[rstest]
fn test_unique_across_collections_with_nothing_common_to_all() {
    let lists = vec![vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 5], vec![6, 7, 8]];
    assert_eq!(
        unique_across_collections(lists),
        Set::from([1, 2, 3, 4, 5, 6, 7, 8])
    );
}

#[rstest]
fn test_unique_across_collections_excludes_common_elements() {
    let lists = vec![vec![1, 2, 3], vec![2, 3, 4], vec![3, 4, 5]];
    assert_eq!(unique_across_collections(lists), Set::from([1, 2, 4, 5]));
}

#[rstest]
fn test_unique_across_collections_of_nothing_is_empty() {
    assert!(unique_across_collections(Vec::<Vec<i32>>::new()).is_empty());
}

#[rstest]
fn test_inputs_are_not_consumed_when_borrowed() {
    let a = vec![1, 2, 3];
    let b = vec![2, 3, 4];
    let result = intersection(&a, &b);
    assert_eq!(result, Set::from([&2, &3]));
    assert_eq!(a, vec![1, 2, 3]);
}

#[rstest]
fn test_intersection_all_ignores_repeats_within_a_collection() {
    let lists = vec![vec![2, 2, 3, 3], vec![3, 3, 2], vec![3, 2, 2, 9]];
    assert_eq!(intersection_all(lists), Set::from([2, 3]));
}
