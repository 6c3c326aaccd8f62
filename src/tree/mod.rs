//! Tree operations over category snapshots
//!
//! Everything here is a pure function of the records or forest passed
//! in: no I/O, no interior state, no async. The caller owns the data
//! lifecycle (fetch, mutate, refetch) and rebuilds derived values from
//! each fresh snapshot.
//!
//! Dependency order, leaves first: [`ChildIndex`] construction, then
//! [`build`] and [`would_create_cycle`] (both consume the index), then
//! [`filter`] over the built forest. [`reorder`] only needs a sibling
//! slice from the forest.

mod builder;
mod cycle;
mod index;
mod reorder;
mod search;

pub use builder::{build, build_from_index, build_with, BuildOptions};
pub use cycle::would_create_cycle;
pub use index::ChildIndex;
pub use reorder::{reorder, SortOrderUpdate};
pub use search::filter;

use crate::category::{CategoryId, CategoryNode};
use thiserror::Error;

/// Errors that can occur during tree operations
#[derive(Error, Debug, PartialEq)]
pub enum TreeError {
    #[error("index {index} out of bounds for sibling list of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("category {moved} is not at index {index} of the sibling list")]
    MovedIdMismatch { moved: CategoryId, index: usize },
}

pub type TreeResult<T> = Result<T, TreeError>;

/// Pre-order walk over a forest.
pub fn flatten(forest: &[CategoryNode]) -> Vec<&CategoryNode> {
    fn walk<'a>(node: &'a CategoryNode, out: &mut Vec<&'a CategoryNode>) {
        out.push(node);
        for child in &node.children {
            walk(child, out);
        }
    }

    let mut out = Vec::new();
    for node in forest {
        walk(node, &mut out);
    }
    out
}

/// Total node count of a forest.
pub fn node_count(forest: &[CategoryNode]) -> usize {
    forest.iter().map(CategoryNode::subtree_len).sum()
}

/// Depth of the deepest node, `None` for an empty forest.
pub fn max_depth(forest: &[CategoryNode]) -> Option<usize> {
    flatten(forest).iter().map(|node| node.depth).max()
}
