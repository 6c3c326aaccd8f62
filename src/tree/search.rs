//! Search filtering that keeps the path to every match
//!
//! The search box narrows the rendered tree to matching categories
//! while keeping their ancestor chain visible, so a hit stays reachable
//! through the hierarchy instead of floating free of context.

use crate::category::CategoryNode;

/// Filter a forest to nodes matching `query`, plus their ancestors.
///
/// - Blank queries return the forest as-is (same ids, same shape).
/// - Matching is a case-insensitive substring test on `name` or
///   `description`; an absent description never matches.
/// - A node survives if it matches directly or any filtered descendant
///   survived. Non-matching descendants of a match are pruned: this is
///   keep-path-to-match, not keep-whole-subtree.
///
/// The input is never mutated; surviving nodes are fresh values with
/// their `children` replaced by the filtered children.
pub fn filter(forest: &[CategoryNode], query: &str) -> Vec<CategoryNode> {
    let query = query.trim();
    if query.is_empty() {
        return forest.to_vec();
    }
    let needle = query.to_lowercase();
    forest
        .iter()
        .filter_map(|node| filter_node(node, &needle))
        .collect()
}

fn matches(node: &CategoryNode, needle: &str) -> bool {
    node.name.to_lowercase().contains(needle)
        || node
            .description
            .as_deref()
            .is_some_and(|description| description.to_lowercase().contains(needle))
}

fn filter_node(node: &CategoryNode, needle: &str) -> Option<CategoryNode> {
    let children: Vec<CategoryNode> = node
        .children
        .iter()
        .filter_map(|child| filter_node(child, needle))
        .collect();

    if children.is_empty() && !matches(node, needle) {
        return None;
    }

    Some(CategoryNode {
        id: node.id,
        name: node.name.clone(),
        description: node.description.clone(),
        parent_id: node.parent_id,
        sort_order: node.sort_order,
        products_count: node.products_count,
        total_products_count: node.total_products_count,
        children,
        depth: node.depth,
        display_path: node.display_path.clone(),
    })
}
