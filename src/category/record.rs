//! Flat category records as delivered by the backend

use super::types::CategoryId;
use serde::{Deserialize, Serialize};

/// A category row exactly as the backend returns it: flat, with an
/// optional parent reference. Tree shape is never stored here; it is
/// derived per snapshot by [`build`](crate::tree::build).
///
/// The backend is inconsistent about "top-level": `parent_id` may be
/// `null`, absent, or `0` depending on which endpoint produced the row.
/// [`parent`](Self::parent) normalizes all three to `None`; everything
/// downstream of the record boundary only ever consults the normalized
/// form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub id: CategoryId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Raw parent reference; use [`parent`](Self::parent) instead of
    /// reading this directly.
    #[serde(default)]
    pub parent_id: Option<CategoryId>,
    /// Sibling position, lower sorts first. Missing on some endpoints,
    /// in which case original response order decides.
    #[serde(default)]
    pub sort_order: i64,
    /// Number of products attached directly to this category (display only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products_count: Option<u64>,
    /// Backend-computed subtree product total (display only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_products_count: Option<u64>,
}

impl CategoryRecord {
    /// Build a top-level record with the supplied id and name.
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>) -> Self {
        CategoryRecord {
            id: id.into(),
            name: name.into(),
            description: None,
            parent_id: None,
            sort_order: 0,
            products_count: None,
            total_products_count: None,
        }
    }

    /// Attach a parent reference.
    pub fn with_parent(mut self, parent: impl Into<CategoryId>) -> Self {
        self.parent_id = Some(parent.into());
        self
    }

    /// Attach a descriptive text.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the sibling position.
    pub fn with_sort_order(mut self, sort_order: i64) -> Self {
        self.sort_order = sort_order;
        self
    }

    /// Set the direct product count.
    pub fn with_products_count(mut self, count: u64) -> Self {
        self.products_count = Some(count);
        self
    }

    /// Normalized parent reference: `None` for every "top-level"
    /// encoding the backend uses (`null`, absent field, `0`).
    pub fn parent(&self) -> Option<CategoryId> {
        match self.parent_id {
            Some(id) if id.as_i64() != 0 => Some(id),
            _ => None,
        }
    }

    /// Whether this record sits at the top level after normalization.
    pub fn is_top_level(&self) -> bool {
        self.parent().is_none()
    }
}
