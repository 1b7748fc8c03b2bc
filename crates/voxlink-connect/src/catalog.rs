//! Normalised connectivity results.

use std::collections::BTreeMap;
use voxlink_core::{CellIndex, ComponentId};
use voxlink_forest::UnionFind;

/// Components of a grid as `id -> ascending member indices`.
///
/// Both strategies are normalised to this shape. Ids run `0..len()` and are
/// strategy-defined labels: compare catalogs from different strategies with
/// [`same_partition`](Self::same_partition), which ignores labelling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentCatalog {
    components: Vec<Vec<CellIndex>>,
}

impl ComponentCatalog {
    /// Build from member lists, numbering them in the given order.
    ///
    /// Each list is sorted ascending; lists are expected to be disjoint.
    pub fn from_groups(mut groups: Vec<Vec<CellIndex>>) -> Self {
        for members in &mut groups {
            members.sort_unstable();
        }
        Self { components: groups }
    }

    /// Build from a forest keyed by cell index, numbering sets as
    /// [`UnionFind::groups`] does.
    pub fn from_forest<F>(forest: &mut F) -> Self
    where
        F: UnionFind<Elem = CellIndex> + ?Sized,
    {
        Self::from_groups(forest.groups())
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` if there are no components.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Members of component `id`, ascending.
    pub fn get(&self, id: ComponentId) -> Option<&[CellIndex]> {
        self.components.get(id.as_usize()).map(Vec::as_slice)
    }

    /// `(id, members)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (ComponentId, &[CellIndex])> + '_ {
        self.components
            .iter()
            .enumerate()
            .map(|(pos, members)| (ComponentId::from_position(pos), members.as_slice()))
    }

    /// Component sizes in id order.
    pub fn sizes(&self) -> Vec<usize> {
        self.components.iter().map(Vec::len).collect()
    }

    /// Total number of cells across all components.
    pub fn total_cells(&self) -> usize {
        self.components.iter().map(Vec::len).sum()
    }

    /// The component with the most members; ties go to the lowest id.
    pub fn largest(&self) -> Option<(ComponentId, &[CellIndex])> {
        let mut best: Option<(ComponentId, &[CellIndex])> = None;
        for (id, members) in self.iter() {
            if best.is_none_or(|(_, b)| members.len() > b.len()) {
                best = Some((id, members));
            }
        }
        best
    }

    /// Per-cell component label for a grid of `cell_count` cells.
    ///
    /// Unoccupied cells are `None`.
    ///
    /// # Panics
    ///
    /// Panics if any member index is `>= cell_count`.
    pub fn labels(&self, cell_count: usize) -> Vec<Option<ComponentId>> {
        let mut labels = vec![None; cell_count];
        for (id, members) in self.iter() {
            for &idx in members {
                labels[idx] = Some(id);
            }
        }
        labels
    }

    /// Label-free canonical form: member lists ordered by their smallest
    /// member.
    pub fn member_sets(&self) -> Vec<Vec<CellIndex>> {
        let mut sets: Vec<Vec<CellIndex>> = self
            .components
            .iter()
            .filter(|m| !m.is_empty())
            .cloned()
            .collect();
        sets.sort_unstable_by_key(|m| m[0]);
        sets
    }

    /// Whether `self` and `other` group the same cells together, regardless
    /// of how components are numbered.
    pub fn same_partition(&self, other: &ComponentCatalog) -> bool {
        self.len() == other.len() && self.member_sets() == other.member_sets()
    }

    /// The catalog as an ordered map.
    pub fn into_map(self) -> BTreeMap<ComponentId, Vec<CellIndex>> {
        self.components
            .into_iter()
            .enumerate()
            .map(|(pos, members)| (ComponentId::from_position(pos), members))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxlink_forest::{AlwaysFirst, DenseDisjointSet};

    fn sample() -> ComponentCatalog {
        ComponentCatalog::from_groups(vec![vec![7, 3], vec![0, 1, 2, 9], vec![5]])
    }

    #[test]
    fn members_are_sorted() {
        let cat = sample();
        assert_eq!(cat.get(ComponentId(0)), Some(&[3, 7][..]));
        assert_eq!(cat.get(ComponentId(3)), None);
        assert_eq!(cat.sizes(), vec![2, 4, 1]);
        assert_eq!(cat.total_cells(), 7);
    }

    #[test]
    fn largest_prefers_lowest_id_on_ties() {
        let cat = ComponentCatalog::from_groups(vec![vec![4], vec![1, 2], vec![5, 6]]);
        assert_eq!(cat.largest(), Some((ComponentId(1), &[1, 2][..])));
        assert_eq!(ComponentCatalog::default().largest(), None);
    }

    #[test]
    fn labels_cover_members_only() {
        let labels = sample().labels(10);
        assert_eq!(labels[3], Some(ComponentId(0)));
        assert_eq!(labels[9], Some(ComponentId(1)));
        assert_eq!(labels[5], Some(ComponentId(2)));
        assert_eq!(labels[4], None);
        assert_eq!(labels.iter().filter(|l| l.is_some()).count(), 7);
    }

    #[test]
    fn same_partition_ignores_labels() {
        let a = sample();
        let b = ComponentCatalog::from_groups(vec![vec![5], vec![9, 2, 1, 0], vec![3, 7]]);
        let c = ComponentCatalog::from_groups(vec![vec![5, 3], vec![9, 2, 1, 0], vec![7]]);
        assert!(a.same_partition(&b));
        assert!(!a.same_partition(&c));
        assert_ne!(a, b);
    }

    #[test]
    fn from_forest_uses_group_numbering() {
        let mut forest = DenseDisjointSet::with_policy(AlwaysFirst);
        for a in [4, 8, 1, 6] {
            forest.make_set(a);
        }
        forest.union_sets(8, 1);
        let cat = ComponentCatalog::from_forest(&mut forest);
        assert_eq!(
            cat.into_map().into_iter().collect::<Vec<_>>(),
            vec![
                (ComponentId(0), vec![1, 8]),
                (ComponentId(1), vec![4]),
                (ComponentId(2), vec![6]),
            ]
        );
    }
}
