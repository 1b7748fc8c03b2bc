//! The shared union-find contract.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;
use voxlink_core::ComponentId;

/// A forest of disjoint sets over tracked elements.
///
/// Every tracked element points at a parent; roots point at themselves.
/// Following parent links from any tracked element reaches a root in a bounded
/// number of steps. Sets only ever grow ([`make_set`](Self::make_set)) and
/// merge ([`union_sets`](Self::union_sets)); they never split.
///
/// Lookups take `&mut self` because they compress paths: every node visited
/// on the way to a root is repointed directly at it. The partition itself is
/// unchanged by compression.
///
/// # Checked and unchecked operations
///
/// [`find_set`](Self::find_set) and [`union_sets`](Self::union_sets) require
/// their arguments to be tracked and panic otherwise. The `_checked` variants
/// test membership first and report untracked elements through their return
/// value instead.
pub trait UnionFind {
    /// The element type.
    type Elem: Copy + Ord + Debug;

    /// Track `a` as a new singleton set.
    ///
    /// Returns `true` if `a` was newly inserted. Re-inserting a tracked
    /// element is a no-op and leaves its parent untouched.
    fn make_set(&mut self, a: Self::Elem) -> bool;

    /// Whether `a` is known to the forest.
    fn is_tracked(&self, a: Self::Elem) -> bool;

    /// Root of the set containing `a`, compressing the path from `a`.
    ///
    /// # Panics
    ///
    /// Panics if `a` is not tracked.
    fn find_set(&mut self, a: Self::Elem) -> Self::Elem;

    /// Merge the sets containing `a` and `b`.
    ///
    /// Returns `true` if two distinct sets were merged, `false` if `a` and
    /// `b` already shared a root. The surviving root is chosen by the
    /// forest's [`LinkPolicy`](crate::LinkPolicy).
    ///
    /// # Panics
    ///
    /// Panics if either element is not tracked.
    fn union_sets(&mut self, a: Self::Elem, b: Self::Elem) -> bool;

    /// Number of tracked elements.
    fn len(&self) -> usize;

    /// All tracked elements, ascending.
    fn elements(&self) -> Vec<Self::Elem>;

    /// Returns `true` if nothing is tracked.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Root of the set containing `a`, or `None` if `a` is not tracked.
    fn find_set_checked(&mut self, a: Self::Elem) -> Option<Self::Elem> {
        if self.is_tracked(a) {
            Some(self.find_set(a))
        } else {
            None
        }
    }

    /// Merge the sets containing `a` and `b` if both are tracked.
    ///
    /// Returns `false` without touching the forest if either is untracked.
    fn union_sets_checked(&mut self, a: Self::Elem, b: Self::Elem) -> bool {
        if self.is_tracked(a) && self.is_tracked(b) {
            self.union_sets(a, b)
        } else {
            false
        }
    }

    /// Whether `a` and `b` are both tracked and share a root.
    fn connected(&mut self, a: Self::Elem, b: Self::Elem) -> bool {
        match (self.find_set_checked(a), self.find_set_checked(b)) {
            (Some(ra), Some(rb)) => ra == rb,
            _ => false,
        }
    }

    /// The distinct roots. Compresses the path of every tracked element.
    fn leaders(&mut self) -> BTreeSet<Self::Elem> {
        self.elements().into_iter().map(|a| self.find_set(a)).collect()
    }

    /// Number of disjoint sets.
    fn set_count(&mut self) -> usize {
        self.leaders().len()
    }

    /// Tracked elements grouped by root.
    ///
    /// Groups are numbered in order of first appearance while iterating
    /// elements ascending, so group `n` is the set whose smallest member is
    /// the `n`-th smallest among all set minima. Members within a group are
    /// ascending.
    fn groups(&mut self) -> Vec<Vec<Self::Elem>> {
        let mut slot: BTreeMap<Self::Elem, usize> = BTreeMap::new();
        let mut groups: Vec<Vec<Self::Elem>> = Vec::new();
        for a in self.elements() {
            let root = self.find_set(a);
            let n = *slot.entry(root).or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });
            groups[n].push(a);
        }
        groups
    }

    /// The partition as `id -> members`, ids sequential from 0 in the order
    /// described by [`groups`](Self::groups).
    fn partition(&mut self) -> BTreeMap<ComponentId, BTreeSet<Self::Elem>> {
        self.groups()
            .into_iter()
            .enumerate()
            .map(|(pos, members)| (ComponentId::from_position(pos), members.into_iter().collect()))
            .collect()
    }
}
