//! Drag-to-reorder sibling position reassignment

use super::{TreeError, TreeResult};
use crate::category::{CategoryId, CategoryNode};
use serde::{Deserialize, Serialize};

/// New sibling position for one category.
///
/// The drag handler forwards the full list verbatim to the backend's
/// reorder endpoint; the persistence round-trip (optimistic update,
/// rollback on failure) is the data layer's job, not this crate's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOrderUpdate {
    pub id: CategoryId,
    pub sort_order: i64,
}

/// Compute the contiguous `sort_order` reassignment after moving one
/// sibling from `from` to `to`.
///
/// Every sibling gets a fresh 0-based `sort_order` matching its new
/// position, so the backend never accumulates gaps or collisions.
///
/// Fails deterministically before any result is produced:
/// - [`TreeError::IndexOutOfBounds`] when `from` or `to` does not index
///   the sibling list
/// - [`TreeError::MovedIdMismatch`] when `siblings[from]` is not
///   `moved` — the drag raced a refetch and the caller must not persist
pub fn reorder(
    siblings: &[CategoryNode],
    moved: CategoryId,
    from: usize,
    to: usize,
) -> TreeResult<Vec<SortOrderUpdate>> {
    let len = siblings.len();
    if from >= len {
        return Err(TreeError::IndexOutOfBounds { index: from, len });
    }
    if to >= len {
        return Err(TreeError::IndexOutOfBounds { index: to, len });
    }
    if siblings[from].id != moved {
        return Err(TreeError::MovedIdMismatch {
            moved,
            index: from,
        });
    }

    let mut order: Vec<CategoryId> = siblings.iter().map(|node| node.id).collect();
    let id = order.remove(from);
    order.insert(to, id);

    Ok(order
        .into_iter()
        .enumerate()
        .map(|(position, id)| SortOrderUpdate {
            id,
            sort_order: position as i64,
        })
        .collect())
}
