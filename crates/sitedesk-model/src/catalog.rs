//! Work item catalog
//!
//! The static category → item list that every new progress report starts
//! from. Ids are derived with [`make_id`] from the category name and the
//! item's position, and validated once when the catalog is built.

use crate::checklist::{Checkable, WorkProgress};
use crate::error::ModelError;
use crate::id::{make_id, slugify, ItemFingerprint, ItemId};
use crate::report::ProgressReport;
use crate::timeline::ProjectPhase;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Validated, insertion-ordered catalog of work items per category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkCatalog {
    categories: IndexMap<String, Vec<String>>,
}

/// Completion of one catalog category in a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryProgress {
    /// Category name
    pub category: String,
    /// Items reported complete
    pub completed: usize,
    /// Items in the catalog category
    pub total: usize,
}

impl CategoryProgress {
    /// Completion ratio in `[0, 1]`, zero for an empty category
    #[inline]
    #[must_use]
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 / self.total as f64
        }
    }
}

impl WorkCatalog {
    /// Build a catalog, rejecting entries whose ids or content collide
    ///
    /// # Errors
    /// - [`ModelError::EmptySlug`] if a category has no id characters
    /// - [`ModelError::DuplicateItemId`] if two categories share a slug
    /// - [`ModelError::DuplicateItem`] if an item text repeats in a category
    pub fn new<C, I, T>(entries: impl IntoIterator<Item = (C, I)>) -> Result<Self, ModelError>
    where
        C: Into<String>,
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut categories: IndexMap<String, Vec<String>> = IndexMap::new();
        let mut owners: HashMap<ItemId, String> = HashMap::new();
        let mut fingerprints: HashSet<ItemFingerprint> = HashSet::new();

        for (category, items) in entries {
            let category = category.into();
            if slugify(&category).is_empty() {
                return Err(ModelError::EmptySlug(category));
            }

            let items: Vec<String> = items.into_iter().map(Into::into).collect();
            for (index, text) in items.iter().enumerate() {
                let id = make_id(&category, index);
                if let Some(first) = owners.get(&id) {
                    return Err(ModelError::DuplicateItemId {
                        id,
                        first: first.clone(),
                        second: category,
                    });
                }
                if !fingerprints.insert(ItemFingerprint::compute(&category, text)) {
                    return Err(ModelError::DuplicateItem {
                        category,
                        text: text.clone(),
                    });
                }
                owners.insert(id, category.clone());
            }
            categories.entry(category).or_default().extend(items);
        }

        Ok(Self { categories })
    }

    /// Category names in catalog order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Items of one category
    #[must_use]
    pub fn items(&self, category: &str) -> Option<&[String]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    /// Total number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    /// Check if the catalog has no items
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the catalog defines an item with this id
    #[must_use]
    pub fn contains(&self, id: &ItemId) -> bool {
        let Some((slug, index)) = id.parts() else {
            return false;
        };
        self.categories
            .iter()
            .filter(|(_, items)| index < items.len())
            .any(|(category, _)| slugify(category) == slug && make_id(category, index) == *id)
    }

    /// Fresh report checklist: every item, none completed
    #[must_use]
    pub fn template(&self) -> Vec<WorkProgress> {
        self.categories
            .iter()
            .flat_map(|(category, items)| {
                items.iter().enumerate().map(move |(index, text)| {
                    WorkProgress::new(make_id(category, index), text.clone(), category.clone(), false)
                })
            })
            .collect()
    }

    /// Checklist for editing a saved report
    ///
    /// Follows the catalog order; a saved item replaces the template item
    /// with the same id. Saved items the catalog no longer lists are dropped.
    #[must_use]
    pub fn merge_saved(&self, saved: &[WorkProgress]) -> Vec<WorkProgress> {
        let saved: HashMap<&ItemId, &WorkProgress> =
            saved.iter().map(|item| (&item.id, item)).collect();

        self.template()
            .into_iter()
            .map(|item| match saved.get(&item.id) {
                Some(previous) => (*previous).clone(),
                None => item,
            })
            .collect()
    }

    /// Timeline detail ids that this catalog never produces
    ///
    /// Such details can only ever be reconciled to `false`.
    #[must_use]
    pub fn unknown_ids(&self, phases: &[ProjectPhase]) -> Vec<ItemId> {
        phases
            .iter()
            .flat_map(ProjectPhase::details)
            .filter(|detail| !self.contains(detail.id()))
            .map(|detail| detail.id().clone())
            .collect()
    }

    /// Per-category completion as reported in `report`
    #[must_use]
    pub fn category_progress(&self, report: &ProgressReport) -> Vec<CategoryProgress> {
        let reported: HashMap<&ItemId, bool> = report
            .work_progress
            .iter()
            .map(|item| (&item.id, item.completed))
            .collect();

        self.categories
            .iter()
            .map(|(category, items)| {
                let completed = (0..items.len())
                    .filter(|&index| {
                        reported
                            .get(&make_id(category, index))
                            .copied()
                            .unwrap_or(false)
                    })
                    .count();
                CategoryProgress {
                    category: category.clone(),
                    completed,
                    total: items.len(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn catalog() -> WorkCatalog {
        WorkCatalog::new([
            ("Site Preparation", vec!["Site Clearing", "Excavation Works"]),
            ("Boundary & Security", vec!["Boundary Wall Foundation"]),
        ])
        .unwrap()
    }

    #[test]
    fn template_ids_follow_scheme() {
        let ids: Vec<String> = catalog()
            .template()
            .into_iter()
            .map(|item| item.id.to_string())
            .collect();
        assert_eq!(
            ids,
            vec!["site-preparation-0", "site-preparation-1", "boundary-security-0"]
        );
    }

    #[test]
    fn template_starts_incomplete() {
        assert!(catalog().template().iter().all(|item| !item.completed));
        assert_eq!(catalog().len(), 3);
    }

    #[test]
    fn colliding_slugs_rejected() {
        let result = WorkCatalog::new([
            ("Boundary & Security", vec!["Fencing"]),
            ("Boundary Security", vec!["Gate"]),
        ]);
        assert!(matches!(result, Err(ModelError::DuplicateItemId { .. })));
    }

    #[test]
    fn repeated_text_rejected() {
        let result = WorkCatalog::new([("Utilities", vec!["Water Tank", "water tank"])]);
        assert!(matches!(result, Err(ModelError::DuplicateItem { .. })));
    }

    #[test]
    fn empty_slug_rejected() {
        let result = WorkCatalog::new([("&", vec!["x"])]);
        assert_eq!(result.unwrap_err(), ModelError::EmptySlug("&".into()));
    }

    #[test]
    fn merge_saved_keeps_catalog_order() {
        let saved = vec![
            WorkProgress::new("boundary-security-0", "Boundary Wall Foundation", "Boundary & Security", true),
            WorkProgress::new("retired-0", "Old item", "Retired", true),
        ];
        let merged = catalog().merge_saved(&saved);
        assert_eq!(merged.len(), 3);
        assert!(!merged[0].completed);
        assert!(merged[2].completed);
        assert!(merged.iter().all(|item| item.id.as_str() != "retired-0"));
    }
}
