//! Taxonomy — in-memory category tree engine
//!
//! Back-office category screens work against flat records from a REST
//! backend: every category row carries an id and a nullable parent id.
//! This crate turns one snapshot of those rows into everything the UI
//! layer renders and validates against:
//!
//! - [`tree::build`] — flat records into a rooted forest, each node
//!   annotated with depth and a human-readable ancestor path
//! - [`tree::would_create_cycle`] — disable parent-picker options that
//!   would loop the hierarchy back on itself
//! - [`tree::filter`] — narrow the forest to search matches while
//!   keeping their ancestor chains navigable
//! - [`tree::reorder`] — the contiguous `sort_order` reassignment to
//!   persist after a drag-to-reorder
//!
//! Everything is synchronous and pure. Fetching, caching, optimistic
//! updates and rendering belong to the caller; the forest is a value
//! derived per snapshot and is never patched in place.
//!
//! ```
//! use taxonomy::{build, filter, would_create_cycle, CategoryRecord, ChildIndex};
//!
//! let records = vec![
//!     CategoryRecord::new(1, "Electronics"),
//!     CategoryRecord::new(2, "Phones").with_parent(1),
//! ];
//!
//! let forest = build(&records);
//! assert_eq!(forest[0].children[0].display_path, "Electronics > Phones");
//!
//! let index = ChildIndex::from_records(&records);
//! // Electronics cannot move under its own child
//! assert!(would_create_cycle(2.into(), Some(1.into()), &index));
//!
//! let hits = filter(&forest, "phone");
//! assert_eq!(hits[0].children[0].name, "Phones");
//! ```

pub mod category;
pub mod tree;

pub use category::{CategoryId, CategoryNode, CategoryRecord};
pub use tree::{
    build, build_from_index, build_with, filter, flatten, max_depth, node_count, reorder,
    would_create_cycle, BuildOptions, ChildIndex, SortOrderUpdate, TreeError, TreeResult,
};
