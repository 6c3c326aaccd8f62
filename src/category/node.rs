//! Derived tree nodes

use super::types::CategoryId;
use serde::Serialize;

/// A category materialized into its place in the tree.
///
/// Nodes carry:
/// - every display field of the flat record
/// - their ordered `children`
/// - `depth` (0 for top-level)
/// - `display_path`, the ancestor names joined for combobox labels and
///   search ("Electronics > Phones")
///
/// A forest of nodes is a value derived from one snapshot of records.
/// It is rebuilt from scratch whenever the records change; nothing
/// mutates a node in place, and consumers key UI elements by `id`,
/// never by node identity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryNode {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    /// Normalized parent reference (`None` for top-level).
    pub parent_id: Option<CategoryId>,
    pub sort_order: i64,
    pub products_count: Option<u64>,
    pub total_products_count: Option<u64>,
    /// Direct children, sorted by `sort_order` then original record order.
    pub children: Vec<CategoryNode>,
    /// Ancestor hops from a top-level node.
    pub depth: usize,
    pub display_path: String,
}

impl CategoryNode {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Node count of the subtree rooted here, including self.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(CategoryNode::subtree_len).sum::<usize>()
    }

    /// Sum of `products_count` over the subtree, treating absent counts
    /// as zero. Client-side stand-in for `total_products_count` when the
    /// endpoint didn't provide one.
    pub fn subtree_product_count(&self) -> u64 {
        self.products_count.unwrap_or(0)
            + self
                .children
                .iter()
                .map(CategoryNode::subtree_product_count)
                .sum::<u64>()
    }

    /// Ids of every node strictly below this one, pre-order.
    pub fn descendant_ids(&self) -> Vec<CategoryId> {
        let mut ids = Vec::new();
        for child in &self.children {
            ids.push(child.id);
            ids.extend(child.descendant_ids());
        }
        ids
    }
}

#[cfg(test)]
mod tests {
    use crate::category::CategoryRecord;
    use crate::tree::build;

    #[test]
    fn test_subtree_len_counts_self_and_descendants() {
        let records = vec![
            CategoryRecord::new(1, "Electronics"),
            CategoryRecord::new(2, "Phones").with_parent(1),
            CategoryRecord::new(3, "Tablets").with_parent(1),
            CategoryRecord::new(4, "Smartphones").with_parent(2),
        ];
        let forest = build(&records);
        assert_eq!(forest[0].subtree_len(), 4);
        assert!(forest[0].children[1].is_leaf());
    }

    #[test]
    fn test_subtree_product_count_treats_absent_as_zero() {
        let records = vec![
            CategoryRecord::new(1, "Electronics").with_products_count(2),
            CategoryRecord::new(2, "Phones").with_parent(1),
            CategoryRecord::new(3, "Smartphones").with_parent(2).with_products_count(5),
        ];
        let forest = build(&records);
        assert_eq!(forest[0].subtree_product_count(), 7);
        assert_eq!(forest[0].children[0].subtree_product_count(), 5);
    }

    #[test]
    fn test_descendant_ids_preorder() {
        let records = vec![
            CategoryRecord::new(1, "Electronics"),
            CategoryRecord::new(2, "Phones").with_parent(1).with_sort_order(0),
            CategoryRecord::new(3, "Tablets").with_parent(1).with_sort_order(1),
            CategoryRecord::new(4, "Smartphones").with_parent(2),
        ];
        let forest = build(&records);
        let ids: Vec<i64> = forest[0].descendant_ids().iter().map(|id| id.as_i64()).collect();
        assert_eq!(ids, vec![2, 4, 3]);
    }
}
