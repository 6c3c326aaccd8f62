//! Forest construction from flat records

use super::index::ChildIndex;
use crate::category::{CategoryId, CategoryNode, CategoryRecord};
use rustc_hash::FxHashSet;
use tracing::{debug, error};

/// Tunables for forest construction
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Separator between ancestor names in `display_path`.
    pub path_separator: String,
    /// Hard bound on tree depth. Descent stops at this depth even if a
    /// corrupted snapshot smuggled a cycle past the index.
    pub max_depth: usize,
}

impl Default for BuildOptions {
    fn default() -> Self {
        BuildOptions {
            path_separator: " > ".to_string(),
            max_depth: 64,
        }
    }
}

/// Build an annotated forest from one snapshot of records.
///
/// Pure: same records in, same forest out. Top-level nodes come back in
/// sibling order; descendants hang off `children`. Rows with dangling
/// parent references surface as top-level rather than disappearing.
pub fn build(records: &[CategoryRecord]) -> Vec<CategoryNode> {
    build_with(records, &BuildOptions::default())
}

/// [`build`] with explicit options.
pub fn build_with(records: &[CategoryRecord], options: &BuildOptions) -> Vec<CategoryNode> {
    let index = ChildIndex::from_records(records);
    build_from_index(&index, options)
}

/// Materialize the forest from an already-built index.
///
/// Callers that also consult the cycle guard can index the snapshot
/// once and share it between both operations.
pub fn build_from_index(index: &ChildIndex, options: &BuildOptions) -> Vec<CategoryNode> {
    let mut visited = FxHashSet::default();
    let forest: Vec<CategoryNode> = index
        .roots()
        .map(|record| materialize(index, record, 0, None, options, &mut visited))
        .collect();
    debug!(
        "built category forest: {} roots, {} nodes",
        forest.len(),
        visited.len()
    );
    forest
}

fn materialize(
    index: &ChildIndex,
    record: &CategoryRecord,
    depth: usize,
    parent_path: Option<&str>,
    options: &BuildOptions,
    visited: &mut FxHashSet<CategoryId>,
) -> CategoryNode {
    visited.insert(record.id);
    let display_path = match parent_path {
        Some(path) => format!("{}{}{}", path, options.path_separator, record.name),
        None => record.name.clone(),
    };

    let mut children = Vec::new();
    if depth >= options.max_depth {
        error!(
            "category {} sits at max depth {}, not descending further",
            record.id, options.max_depth
        );
    } else {
        for child in index.children_of(record.id) {
            if visited.contains(&child.id) {
                error!(
                    "cycle detected at category {}, not descending further",
                    child.id
                );
                continue;
            }
            children.push(materialize(
                index,
                child,
                depth + 1,
                Some(&display_path),
                options,
                visited,
            ));
        }
    }

    CategoryNode {
        id: record.id,
        name: record.name.clone(),
        description: record.description.clone(),
        parent_id: index.parent_of(record.id),
        sort_order: record.sort_order,
        products_count: record.products_count,
        total_products_count: record.total_products_count,
        children,
        depth,
        display_path,
    }
}
