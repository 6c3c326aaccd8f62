//! Core type definitions for the category data model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a category
///
/// Backend ids are positive integers; `0` never identifies a real
/// category and is treated as one of the "no parent" encodings at the
/// record boundary (see [`CategoryRecord::parent`](super::CategoryRecord::parent)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct CategoryId(pub i64);

impl CategoryId {
    pub fn new(id: i64) -> Self {
        CategoryId(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for CategoryId {
    fn from(id: i64) -> Self {
        CategoryId(id)
    }
}
