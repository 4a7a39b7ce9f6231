//! Checklist items
//!
//! A unit of site work appears in two places: inside a progress report
//! ([`WorkProgress`], which also carries its catalog category) and inside a
//! timeline phase ([`ChecklistItem`]). Both share the [`Checkable`] view.

use crate::id::ItemId;
use serde::{Deserialize, Serialize};

/// Common view over anything with an item id and a completion flag
pub trait Checkable {
    /// Item identifier
    fn id(&self) -> &ItemId;

    /// Whether the work is done
    fn is_completed(&self) -> bool;
}

/// Checklist item nested in a timeline key action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Shared item identifier
    pub id: ItemId,
    /// Human description
    pub text: String,
    /// Completion flag
    pub completed: bool,
}

impl ChecklistItem {
    /// Create an item
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<ItemId>, text: impl Into<String>, completed: bool) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            completed,
        }
    }
}

impl Checkable for ChecklistItem {
    fn id(&self) -> &ItemId {
        &self.id
    }

    fn is_completed(&self) -> bool {
        self.completed
    }
}

/// Checklist item as recorded in a daily progress report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkProgress {
    /// Shared item identifier
    pub id: ItemId,
    /// Human description
    pub text: String,
    /// Completion flag as reported on site
    pub completed: bool,
    /// Catalog category the item belongs to
    pub category: String,
}

impl WorkProgress {
    /// Create a report item
    #[inline]
    #[must_use]
    pub fn new(
        id: impl Into<ItemId>,
        text: impl Into<String>,
        category: impl Into<String>,
        completed: bool,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            completed,
            category: category.into(),
        }
    }

    /// Flip the completion flag
    #[inline]
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

impl Checkable for WorkProgress {
    fn id(&self) -> &ItemId {
        &self.id
    }

    fn is_completed(&self) -> bool {
        self.completed
    }
}
