//! One-pass adjacency index over a category snapshot
//!
//! Built once per record-collection version and consumed by both the
//! forest builder and the cycle guard, so neither ever rescans the flat
//! list. Lookups for an id with no children yield an empty iterator,
//! never a missing-key error.

use crate::category::{CategoryId, CategoryRecord};
use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;
use tracing::warn;

/// Read-only topology view of one snapshot of category records.
///
/// Keys children buckets by the canonical parent form: `None` is the
/// top-level marker, so the `null`/absent/`0` ambiguity of the raw rows
/// is resolved here once and downstream logic tests a single condition.
#[derive(Debug, Clone, Default)]
pub struct ChildIndex {
    /// Deduplicated records, first-seen order. On a duplicate id the
    /// later record's content wins but the original position is kept,
    /// so sibling tie-breaks stay stable.
    records: IndexMap<CategoryId, CategoryRecord>,
    /// Canonical parent -> ordered child ids.
    children: FxHashMap<Option<CategoryId>, Vec<CategoryId>>,
    /// Id -> canonical parent, after dangling references are re-homed.
    parents: FxHashMap<CategoryId, Option<CategoryId>>,
}

impl ChildIndex {
    /// Index a snapshot of records.
    ///
    /// Malformed rows degrade instead of failing: a duplicate id keeps
    /// the later record, a self-parent or a reference to a missing id
    /// becomes top-level. Each case is flagged with a warning.
    pub fn from_records(input: &[CategoryRecord]) -> Self {
        let mut records: IndexMap<CategoryId, CategoryRecord> =
            IndexMap::with_capacity(input.len());
        for record in input {
            if records.insert(record.id, record.clone()).is_some() {
                warn!(
                    "duplicate category id {} in snapshot, keeping the later record",
                    record.id
                );
            }
        }

        let mut children: FxHashMap<Option<CategoryId>, Vec<CategoryId>> = FxHashMap::default();
        let mut parents: FxHashMap<CategoryId, Option<CategoryId>> = FxHashMap::default();
        for (&id, record) in &records {
            let parent = match record.parent() {
                Some(p) if p == id => {
                    warn!("category {} lists itself as parent, treating as top-level", id);
                    None
                }
                Some(p) if !records.contains_key(&p) => {
                    warn!(
                        "category {} references missing parent {}, treating as top-level",
                        id, p
                    );
                    None
                }
                normalized => normalized,
            };
            parents.insert(id, parent);
            children.entry(parent).or_default().push(id);
        }

        for bucket in children.values_mut() {
            bucket.sort_by_key(|id| (records[id].sort_order, records.get_index_of(id)));
        }

        ChildIndex {
            records,
            children,
            parents,
        }
    }

    /// Number of distinct categories in the snapshot.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, id: CategoryId) -> bool {
        self.records.contains_key(&id)
    }

    pub fn record(&self, id: CategoryId) -> Option<&CategoryRecord> {
        self.records.get(&id)
    }

    /// Deduplicated records in first-seen order.
    pub fn records(&self) -> impl Iterator<Item = &CategoryRecord> {
        self.records.values()
    }

    /// Top-level records, in sibling order. Rows with dangling parent
    /// references land here.
    pub fn roots(&self) -> impl Iterator<Item = &CategoryRecord> {
        self.bucket(None)
    }

    /// Direct children of `parent`, in sibling order. Empty for a leaf
    /// or an unknown id.
    pub fn children_of(&self, parent: CategoryId) -> impl Iterator<Item = &CategoryRecord> {
        self.bucket(Some(parent))
    }

    /// Canonical parent of `id`; `None` for top-level or unknown ids.
    pub fn parent_of(&self, id: CategoryId) -> Option<CategoryId> {
        self.parents.get(&id).copied().flatten()
    }

    /// Every id strictly below `id`, breadth-first. The visited set
    /// keeps the walk terminating even on a corrupted snapshot.
    pub fn descendants_of(&self, id: CategoryId) -> Vec<CategoryId> {
        let mut out = Vec::new();
        let mut visited = FxHashSet::default();
        visited.insert(id);
        let mut queue: VecDeque<CategoryId> =
            self.children_of(id).map(|record| record.id).collect();
        while let Some(current) = queue.pop_front() {
            if !visited.insert(current) {
                continue;
            }
            out.push(current);
            queue.extend(self.children_of(current).map(|record| record.id));
        }
        out
    }

    /// Ancestor chain of `id`, from immediate parent up to its root.
    /// Supports breadcrumb construction without re-walking the forest.
    pub fn ancestors_of(&self, id: CategoryId) -> Vec<CategoryId> {
        let mut out = Vec::new();
        let mut visited = FxHashSet::default();
        visited.insert(id);
        let mut current = self.parent_of(id);
        while let Some(ancestor) = current {
            if !visited.insert(ancestor) {
                break;
            }
            out.push(ancestor);
            current = self.parent_of(ancestor);
        }
        out
    }

    fn bucket(&self, key: Option<CategoryId>) -> impl Iterator<Item = &CategoryRecord> {
        self.children
            .get(&key)
            .into_iter()
            .flatten()
            .map(|id| &self.records[id])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<CategoryRecord> {
        vec![
            CategoryRecord::new(1, "Electronics").with_sort_order(0),
            CategoryRecord::new(2, "Apparel").with_sort_order(1),
            CategoryRecord::new(3, "Phones").with_parent(1).with_sort_order(1),
            CategoryRecord::new(4, "Laptops").with_parent(1).with_sort_order(0),
            CategoryRecord::new(5, "Smartphones").with_parent(3),
        ]
    }

    #[test]
    fn test_roots_and_children_ordering() {
        let index = ChildIndex::from_records(&sample());
        let roots: Vec<i64> = index.roots().map(|r| r.id.as_i64()).collect();
        assert_eq!(roots, vec![1, 2]);
        // Children sort by sort_order, not by record position
        let children: Vec<i64> = index
            .children_of(CategoryId::new(1))
            .map(|r| r.id.as_i64())
            .collect();
        assert_eq!(children, vec![4, 3]);
    }

    #[test]
    fn test_sort_order_ties_keep_record_order() {
        let records = vec![
            CategoryRecord::new(1, "Root"),
            CategoryRecord::new(2, "B").with_parent(1),
            CategoryRecord::new(3, "A").with_parent(1),
        ];
        let index = ChildIndex::from_records(&records);
        let children: Vec<i64> = index
            .children_of(CategoryId::new(1))
            .map(|r| r.id.as_i64())
            .collect();
        assert_eq!(children, vec![2, 3]);
    }

    #[test]
    fn test_children_of_unknown_id_is_empty() {
        let index = ChildIndex::from_records(&sample());
        assert_eq!(index.children_of(CategoryId::new(99)).count(), 0);
        assert_eq!(index.children_of(CategoryId::new(5)).count(), 0);
    }

    #[test]
    fn test_duplicate_id_last_record_wins() {
        let records = vec![
            CategoryRecord::new(1, "Stale name").with_sort_order(0),
            CategoryRecord::new(2, "Other").with_sort_order(1),
            CategoryRecord::new(1, "Fresh name").with_sort_order(0),
        ];
        let index = ChildIndex::from_records(&records);
        assert_eq!(index.len(), 2);
        assert_eq!(index.record(CategoryId::new(1)).unwrap().name, "Fresh name");
        // Original position survives the overwrite
        let roots: Vec<&str> = index.roots().map(|r| r.name.as_str()).collect();
        assert_eq!(roots, vec!["Fresh name", "Other"]);
    }

    #[test]
    fn test_dangling_parent_becomes_top_level() {
        let records = vec![CategoryRecord::new(1, "Orphan").with_parent(99)];
        let index = ChildIndex::from_records(&records);
        let roots: Vec<i64> = index.roots().map(|r| r.id.as_i64()).collect();
        assert_eq!(roots, vec![1]);
        assert_eq!(index.parent_of(CategoryId::new(1)), None);
    }

    #[test]
    fn test_self_parent_becomes_top_level() {
        let records = vec![CategoryRecord::new(1, "Loop").with_parent(1)];
        let index = ChildIndex::from_records(&records);
        assert_eq!(index.roots().count(), 1);
        assert_eq!(index.descendants_of(CategoryId::new(1)), vec![]);
    }

    #[test]
    fn test_zero_parent_is_top_level() {
        let records = vec![CategoryRecord::new(1, "Root").with_parent(0)];
        let index = ChildIndex::from_records(&records);
        assert_eq!(index.roots().count(), 1);
    }

    #[test]
    fn test_descendants_breadth_first() {
        let index = ChildIndex::from_records(&sample());
        let descendants: Vec<i64> = index
            .descendants_of(CategoryId::new(1))
            .iter()
            .map(|id| id.as_i64())
            .collect();
        assert_eq!(descendants, vec![4, 3, 5]);
        assert_eq!(index.descendants_of(CategoryId::new(2)), vec![]);
    }

    #[test]
    fn test_ancestors_parent_to_root() {
        let index = ChildIndex::from_records(&sample());
        let ancestors: Vec<i64> = index
            .ancestors_of(CategoryId::new(5))
            .iter()
            .map(|id| id.as_i64())
            .collect();
        assert_eq!(ancestors, vec![3, 1]);
        assert_eq!(index.ancestors_of(CategoryId::new(1)), vec![]);
    }
}
