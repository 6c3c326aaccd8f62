//! Parent-assignment cycle prevention
//!
//! The parent-picker UI asks, per candidate option, whether assigning
//! it would loop the tree back on itself. The answer is advisory (it
//! disables an option); server-side validation belongs to the backend.

use super::index::ChildIndex;
use crate::category::CategoryId;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// Would re-parenting `subject` under `candidate_parent` create a cycle?
///
/// - `subject` is `None` while creating a brand-new category: nothing
///   to protect, always `false`.
/// - A node can never be its own parent.
/// - Otherwise `true` iff `candidate_parent` lies somewhere below
///   `subject`.
///
/// Breadth-first over the child index with early exit; only membership
/// matters, not the path. O(descendants of `subject`) per call, cheap
/// enough to re-run per keystroke for trees of typical back-office size.
pub fn would_create_cycle(
    candidate_parent: CategoryId,
    subject: Option<CategoryId>,
    index: &ChildIndex,
) -> bool {
    let Some(subject) = subject else {
        return false;
    };
    if subject == candidate_parent {
        return true;
    }

    let mut visited = FxHashSet::default();
    visited.insert(subject);
    let mut queue: VecDeque<CategoryId> = index.children_of(subject).map(|r| r.id).collect();
    while let Some(current) = queue.pop_front() {
        if current == candidate_parent {
            return true;
        }
        if !visited.insert(current) {
            continue;
        }
        queue.extend(index.children_of(current).map(|r| r.id));
    }
    false
}
