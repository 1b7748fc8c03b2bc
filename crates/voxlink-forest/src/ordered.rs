//! Ordered-map disjoint-set forest over any totally ordered element type.

use crate::policy::{CoinFlip, LinkPolicy, Survivor};
use crate::union_find::UnionFind;
use std::collections::BTreeMap;
use std::fmt::Debug;

/// A disjoint-set forest storing `element -> parent` in a `BTreeMap`.
///
/// Works for any `Copy + Ord` element, at the cost of a logarithmic map
/// lookup per parent access. For dense integer keys prefer
/// [`DenseDisjointSet`](crate::DenseDisjointSet).
///
/// # Examples
///
/// ```
/// use voxlink_forest::{AlwaysFirst, DisjointSet, UnionFind};
///
/// let mut ds = DisjointSet::with_policy(AlwaysFirst);
/// for c in ['a', 'b', 'c'] {
///     ds.make_set(c);
/// }
/// assert!(ds.union_sets('a', 'b'));
/// assert!(!ds.union_sets('b', 'a'));
/// assert_eq!(ds.find_set('b'), 'a');
/// assert_eq!(ds.find_set_checked('z'), None);
/// assert_eq!(ds.set_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct DisjointSet<T, L = CoinFlip> {
    parent: BTreeMap<T, T>,
    policy: L,
}

impl<T: Copy + Ord + Debug> DisjointSet<T> {
    /// An empty forest with the default seeded [`CoinFlip`] policy.
    pub fn new() -> Self {
        Self::with_policy(CoinFlip::default())
    }
}

impl<T: Copy + Ord + Debug> Default for DisjointSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Ord + Debug, L: LinkPolicy> DisjointSet<T, L> {
    /// An empty forest linking roots with `policy`.
    pub fn with_policy(policy: L) -> Self {
        Self {
            parent: BTreeMap::new(),
            policy,
        }
    }

    /// The link policy.
    pub fn policy(&self) -> &L {
        &self.policy
    }

    /// Direct parent of `a`, without compression. `None` if untracked.
    pub fn parent_of(&self, a: T) -> Option<T> {
        self.parent.get(&a).copied()
    }

    fn parent_or_panic(&self, a: T) -> T {
        match self.parent.get(&a) {
            Some(&p) => p,
            None => panic!("element {a:?} is not tracked by this disjoint set"),
        }
    }
}

impl<T: Copy + Ord + Debug, L: LinkPolicy> UnionFind for DisjointSet<T, L> {
    type Elem = T;

    fn make_set(&mut self, a: T) -> bool {
        if self.parent.contains_key(&a) {
            return false;
        }
        self.parent.insert(a, a);
        true
    }

    fn is_tracked(&self, a: T) -> bool {
        self.parent.contains_key(&a)
    }

    fn find_set(&mut self, a: T) -> T {
        let mut root = a;
        loop {
            let p = self.parent_or_panic(root);
            if p == root {
                break;
            }
            root = p;
        }
        // Second pass: point every node on the path straight at the root.
        let mut cur = a;
        while cur != root {
            match self.parent.get_mut(&cur) {
                Some(p) => {
                    cur = std::mem::replace(p, root);
                }
                None => break,
            }
        }
        root
    }

    fn union_sets(&mut self, a: T, b: T) -> bool {
        let ra = self.find_set(a);
        let rb = self.find_set(b);
        if ra == rb {
            return false;
        }
        let (survivor, absorbed) = match self.policy.pick() {
            Survivor::First => (ra, rb),
            Survivor::Second => (rb, ra),
        };
        self.parent.insert(absorbed, survivor);
        true
    }

    fn len(&self) -> usize {
        self.parent.len()
    }

    fn elements(&self) -> Vec<T> {
        self.parent.keys().copied().collect()
    }
}
