//! UnionFind contract compliance test helpers.
//!
//! These functions verify that a forest backend satisfies the invariants of
//! the [`UnionFind`] contract. Each takes a factory so every check starts
//! from an empty forest. Reused by the ordered and dense backend tests.

use crate::union_find::UnionFind;
use std::collections::BTreeSet;

/// Assert that a fresh forest is empty and rejects checked operations.
pub fn assert_empty_forest<F: UnionFind<Elem = usize>>(make: impl Fn() -> F) {
    let mut ds = make();
    assert!(ds.is_empty());
    assert_eq!(ds.len(), 0);
    assert!(ds.elements().is_empty());
    assert!(ds.leaders().is_empty());
    assert!(ds.partition().is_empty());
    assert_eq!(ds.find_set_checked(0), None);
    assert!(!ds.union_sets_checked(0, 1));
    assert!(!ds.connected(0, 0));
}

/// Assert that `make_set` is idempotent and never moves an existing root.
pub fn assert_make_set_idempotent<F: UnionFind<Elem = usize>>(make: impl Fn() -> F) {
    let mut ds = make();
    assert!(ds.make_set(3));
    assert!(ds.make_set(4));
    ds.union_sets(3, 4);
    let root = ds.find_set(3);
    assert!(!ds.make_set(3));
    assert!(!ds.make_set(4));
    assert_eq!(ds.find_set(3), root);
    assert_eq!(ds.find_set(4), root);
    assert_eq!(ds.len(), 2);
}

/// Assert that `find_set(find_set(a)) == find_set(a)` and that roots are
/// members of their own set.
pub fn assert_find_idempotent<F: UnionFind<Elem = usize>>(make: impl Fn() -> F) {
    let mut ds = make();
    for a in 0..12 {
        ds.make_set(a);
    }
    for (a, b) in [(0, 1), (2, 3), (1, 3), (5, 6), (7, 11), (11, 6)] {
        ds.union_sets(a, b);
    }
    for a in 0..12 {
        let r = ds.find_set(a);
        assert_eq!(ds.find_set(r), r, "root {r} of {a} is not its own root");
        assert_eq!(ds.find_set(a), r);
    }
}

/// Assert that repeated unions after the first are no-ops.
pub fn assert_repeated_union_is_noop<F: UnionFind<Elem = usize>>(make: impl Fn() -> F) {
    let mut ds = make();
    ds.make_set(10);
    ds.make_set(20);
    assert!(ds.union_sets(10, 20));
    let root = ds.find_set(10);
    for _ in 0..5 {
        assert!(!ds.union_sets(10, 20));
        assert!(!ds.union_sets(20, 10));
        assert_eq!(ds.find_set(10), root);
        assert_eq!(ds.find_set(20), root);
    }
    assert!(!ds.union_sets(10, 10));
    assert_eq!(ds.set_count(), 1);
}

/// Assert checked variants match unchecked ones on tracked elements and
/// leave the forest untouched otherwise.
pub fn assert_checked_variants<F: UnionFind<Elem = usize>>(make: impl Fn() -> F) {
    let mut ds = make();
    ds.make_set(1);
    ds.make_set(2);
    assert_eq!(ds.find_set_checked(1), Some(1));
    assert_eq!(ds.find_set_checked(9), None);
    assert!(!ds.union_sets_checked(1, 9));
    assert!(!ds.union_sets_checked(9, 1));
    assert!(!ds.is_tracked(9));
    assert_eq!(ds.set_count(), 2);
    assert!(ds.union_sets_checked(1, 2));
    assert!(ds.connected(1, 2));
    assert_eq!(ds.find_set_checked(1), ds.find_set_checked(2));
}

/// Assert leaders, groups and partition describe the same sets.
pub fn assert_partition_consistent<F: UnionFind<Elem = usize>>(make: impl Fn() -> F) {
    let mut ds = make();
    for a in [9, 3, 7, 1, 5, 0] {
        ds.make_set(a);
    }
    ds.union_sets(9, 1);
    ds.union_sets(7, 0);
    ds.union_sets(0, 9);

    assert_eq!(ds.elements(), vec![0, 1, 3, 5, 7, 9]);
    assert_eq!(ds.leaders().len(), 3);

    let groups = ds.groups();
    assert_eq!(groups, vec![vec![0, 1, 7, 9], vec![3], vec![5]]);

    let partition = ds.partition();
    let sets: Vec<BTreeSet<usize>> = partition.values().cloned().collect();
    let expected: Vec<BTreeSet<usize>> = groups
        .iter()
        .map(|g| g.iter().copied().collect())
        .collect();
    assert_eq!(sets, expected);
    let ids: Vec<u32> = partition.keys().map(|id| id.0).collect();
    assert_eq!(ids, vec![0, 1, 2]);
}

/// Drive `ds` through `ops` over elements `0..n` and compare with a naive
/// relabelling implementation.
pub fn check_against_naive_labels<F: UnionFind<Elem = usize>>(
    ds: &mut F,
    n: usize,
    ops: &[(usize, usize)],
) {
    let mut label: Vec<usize> = (0..n).collect();
    for a in 0..n {
        ds.make_set(a);
    }
    for &(a, b) in ops {
        let (la, lb) = (label[a], label[b]);
        let merged = ds.union_sets(a, b);
        assert_eq!(merged, la != lb, "union({a}, {b}) merge flag");
        if la != lb {
            for l in label.iter_mut() {
                if *l == lb {
                    *l = la;
                }
            }
        }
    }
    for a in 0..n {
        for b in 0..n {
            assert_eq!(
                ds.find_set(a) == ds.find_set(b),
                label[a] == label[b],
                "{a} and {b} disagree with naive labels"
            );
        }
    }
    let distinct: BTreeSet<usize> = label.iter().copied().collect();
    assert_eq!(ds.set_count(), distinct.len());
}

/// Run all compliance checks on a forest backend.
pub fn run_full_compliance<F: UnionFind<Elem = usize>>(make: impl Fn() -> F) {
    assert_empty_forest(&make);
    assert_make_set_idempotent(&make);
    assert_find_idempotent(&make);
    assert_repeated_union_is_noop(&make);
    assert_checked_variants(&make);
    assert_partition_consistent(&make);
}
