//! Arena disjoint-set forest over dense `usize` keys.
//!
//! Parents live in a flat `Vec<usize>` indexed by element, with a parallel
//! membership bitmap. Elements need not be inserted contiguously: the arena
//! grows to cover the largest element seen, and untracked slots are simply
//! skipped. Sized up front with [`DenseDisjointSet::with_universe`], no
//! reallocation happens during a sweep.

use crate::policy::{CoinFlip, LinkPolicy, Survivor};
use crate::union_find::UnionFind;
use voxlink_core::ComponentId;

/// A disjoint-set forest over `usize` elements backed by a parent array.
///
/// # Examples
///
/// ```
/// use voxlink_forest::{AlwaysFirst, DenseDisjointSet, UnionFind};
///
/// let mut ds = DenseDisjointSet::with_universe_and_policy(10, AlwaysFirst);
/// ds.make_set(2);
/// ds.make_set(9);
/// ds.union_sets(9, 2);
/// assert_eq!(ds.find_set(2), 9);
/// assert!(!ds.is_tracked(5));
/// assert_eq!(ds.groups(), vec![vec![2, 9]]);
/// ```
#[derive(Debug, Clone)]
pub struct DenseDisjointSet<L = CoinFlip> {
    parent: Vec<usize>,
    tracked: Vec<bool>,
    len: usize,
    policy: L,
}

impl DenseDisjointSet {
    /// An empty forest with the default seeded [`CoinFlip`] policy.
    pub fn new() -> Self {
        Self::with_policy(CoinFlip::default())
    }

    /// An empty forest pre-sized for elements `0..universe`.
    pub fn with_universe(universe: usize) -> Self {
        Self::with_universe_and_policy(universe, CoinFlip::default())
    }
}

impl Default for DenseDisjointSet {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: LinkPolicy> DenseDisjointSet<L> {
    /// An empty forest linking roots with `policy`.
    pub fn with_policy(policy: L) -> Self {
        Self::with_universe_and_policy(0, policy)
    }

    /// An empty forest pre-sized for elements `0..universe`, linking with
    /// `policy`.
    pub fn with_universe_and_policy(universe: usize, policy: L) -> Self {
        Self {
            parent: (0..universe).collect(),
            tracked: vec![false; universe],
            len: 0,
            policy,
        }
    }

    /// Size of the backing arena (one past the largest addressable element).
    pub fn universe(&self) -> usize {
        self.parent.len()
    }

    /// The link policy.
    pub fn policy(&self) -> &L {
        &self.policy
    }

    /// Direct parent of `a`, without compression. `None` if untracked.
    pub fn parent_of(&self, a: usize) -> Option<usize> {
        self.is_tracked(a).then(|| self.parent[a])
    }

    fn grow_to_cover(&mut self, a: usize) {
        if a >= self.parent.len() {
            let start = self.parent.len();
            self.parent.extend(start..=a);
            self.tracked.resize(a + 1, false);
        }
    }

    fn assert_tracked(&self, a: usize) {
        assert!(
            self.is_tracked(a),
            "element {a} is not tracked by this disjoint set"
        );
    }
}

impl<L: LinkPolicy> UnionFind for DenseDisjointSet<L> {
    type Elem = usize;

    fn make_set(&mut self, a: usize) -> bool {
        self.grow_to_cover(a);
        if self.tracked[a] {
            return false;
        }
        self.tracked[a] = true;
        self.parent[a] = a;
        self.len += 1;
        true
    }

    fn is_tracked(&self, a: usize) -> bool {
        self.tracked.get(a).copied().unwrap_or(false)
    }

    fn find_set(&mut self, a: usize) -> usize {
        self.assert_tracked(a);
        let mut root = a;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut cur = a;
        while cur != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    fn union_sets(&mut self, a: usize, b: usize) -> bool {
        let ra = self.find_set(a);
        let rb = self.find_set(b);
        if ra == rb {
            return false;
        }
        let (survivor, absorbed) = match self.policy.pick() {
            Survivor::First => (ra, rb),
            Survivor::Second => (rb, ra),
        };
        self.parent[absorbed] = survivor;
        true
    }

    fn len(&self) -> usize {
        self.len
    }

    fn elements(&self) -> Vec<usize> {
        self.tracked
            .iter()
            .enumerate()
            .filter_map(|(a, &t)| t.then_some(a))
            .collect()
    }

    /// Same numbering as the trait default, using a per-root slot table
    /// instead of a hash map.
    fn groups(&mut self) -> Vec<Vec<usize>> {
        let mut slot: Vec<Option<ComponentId>> = vec![None; self.parent.len()];
        let mut groups: Vec<Vec<usize>> = Vec::new();
        for a in 0..self.tracked.len() {
            if !self.tracked[a] {
                continue;
            }
            let root = self.find_set(a);
            let id = *slot[root].get_or_insert_with(|| {
                groups.push(Vec::new());
                ComponentId::from_position(groups.len() - 1)
            });
            groups[id.as_usize()].push(a);
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use crate::ordered::DisjointSet;
    use crate::policy::{AlwaysFirst, AlwaysSecond};
    use proptest::prelude::*;

    #[test]
    fn compliance_all_policies() {
        compliance::run_full_compliance(|| DenseDisjointSet::with_policy(AlwaysFirst));
        compliance::run_full_compliance(|| DenseDisjointSet::with_policy(AlwaysSecond));
        compliance::run_full_compliance(DenseDisjointSet::new);
        compliance::run_full_compliance(|| DenseDisjointSet::with_universe(4));
    }

    #[test]
    fn grows_on_demand_and_skips_gaps() {
        let mut ds = DenseDisjointSet::with_policy(AlwaysFirst);
        assert_eq!(ds.universe(), 0);
        ds.make_set(5);
        assert_eq!(ds.universe(), 6);
        assert_eq!(ds.len(), 1);
        for a in 0..5 {
            assert!(!ds.is_tracked(a));
            assert_eq!(ds.parent_of(a), None);
        }
        assert!(!ds.is_tracked(6));
        assert_eq!(ds.elements(), vec![5]);
    }

    #[test]
    fn presized_universe_tracks_nothing() {
        let mut ds = DenseDisjointSet::with_universe(100);
        assert_eq!(ds.universe(), 100);
        assert!(ds.is_empty());
        assert!(ds.leaders().is_empty());
        assert!(ds.partition().is_empty());
    }

    #[test]
    fn groups_ordered_by_smallest_member() {
        let mut ds = DenseDisjointSet::with_policy(AlwaysSecond);
        for a in [0, 1, 2, 3, 4, 5] {
            ds.make_set(a);
        }
        ds.union_sets(5, 1);
        ds.union_sets(4, 0);
        ds.union_sets(3, 5);
        assert_eq!(ds.groups(), vec![vec![0, 4], vec![1, 3, 5], vec![2]]);
    }

    #[test]
    fn find_compresses_long_chain() {
        let mut ds = DenseDisjointSet::with_universe_and_policy(50, AlwaysSecond);
        for v in 0..50 {
            ds.make_set(v);
        }
        // Builds the chain 0 -> 1 -> ... -> 49.
        for v in 0..49 {
            ds.union_sets(v, v + 1);
        }
        assert_eq!(ds.parent_of(0), Some(1));
        assert_eq!(ds.parent_of(48), Some(49));
        assert_eq!(ds.find_set(0), 49);
        for v in 0..49 {
            assert_eq!(ds.parent_of(v), Some(49), "node {v} not compressed");
        }
        assert_eq!(ds.parent_of(49), Some(49));
    }

    #[test]
    #[should_panic(expected = "not tracked")]
    fn unchecked_union_on_untracked_panics() {
        let mut ds = DenseDisjointSet::new();
        ds.make_set(0);
        ds.union_sets(0, 1);
    }

    proptest! {
        #[test]
        fn random_unions_match_naive_labels(
            ops in proptest::collection::vec((0usize..24, 0usize..24), 0..60),
            seed in any::<u64>(),
        ) {
            let mut ds = DenseDisjointSet::with_policy(CoinFlip::seeded(seed));
            compliance::check_against_naive_labels(&mut ds, 24, &ops);
        }

        #[test]
        fn dense_and_ordered_agree_under_same_policy(
            ops in proptest::collection::vec((0usize..16, 0usize..16), 0..40),
            seed in any::<u64>(),
        ) {
            let mut dense = DenseDisjointSet::with_policy(CoinFlip::seeded(seed));
            let mut ordered = DisjointSet::with_policy(CoinFlip::seeded(seed));
            for a in 0..16 {
                dense.make_set(a);
                ordered.make_set(a);
            }
            for &(a, b) in &ops {
                prop_assert_eq!(dense.union_sets(a, b), ordered.union_sets(a, b));
            }
            for a in 0..16 {
                prop_assert_eq!(dense.find_set(a), ordered.find_set(a));
            }
            prop_assert_eq!(dense.partition(), ordered.partition());
        }
    }
}
