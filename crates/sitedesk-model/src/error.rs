//! Error types for the record model
//!
//! Raised while building templates and parsing value-level inputs.

use crate::id::ItemId;

/// Model construction errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// Two catalog entries produce the same item id
    #[error("duplicate item id {id}: categories {first:?} and {second:?} normalize to the same slug")]
    DuplicateItemId {
        /// Colliding id
        id: ItemId,
        /// Category that claimed the id first
        first: String,
        /// Category that collided with it
        second: String,
    },

    /// The same item text appears twice in one category
    #[error("duplicate item {text:?} in category {category:?}")]
    DuplicateItem {
        /// Category containing the duplicate
        category: String,
        /// Repeated item text
        text: String,
    },

    /// Category name normalizes to an empty slug
    #[error("category {0:?} has no usable characters for an id")]
    EmptySlug(String),

    /// Unrecognized enumeration value
    #[error("unknown {kind}: {value:?}")]
    UnknownVariant {
        /// Enumeration name
        kind: &'static str,
        /// Rejected input
        value: String,
    },
}

impl ModelError {
    /// Create an unknown-variant error
    #[inline]
    pub fn unknown(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownVariant {
            kind,
            value: value.into(),
        }
    }
}
