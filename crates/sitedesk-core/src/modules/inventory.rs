//! Material stock

use crate::error::{require, DashboardError, Result};
use chrono::NaiveDate;
use sitedesk_model::{InventoryDraft, InventoryItem, InventoryStatus};
use sitedesk_store::RecordStore;
use std::collections::HashSet;
use tracing::{debug, info};
use ulid::Ulid;

/// Stock headline figures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventoryStats {
    pub total_items: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
    /// Distinct suppliers
    pub suppliers: usize,
}

/// Stock list, newest item first
#[derive(Debug, Default)]
pub struct InventoryBook {
    items: RecordStore<InventoryItem>,
}

impl InventoryBook {
    /// # Errors
    /// If two items share an id.
    pub fn new(items: Vec<InventoryItem>) -> Result<Self> {
        Ok(Self {
            items: RecordStore::with_records(items)?,
        })
    }

    #[must_use]
    pub fn items(&self) -> &[InventoryItem] {
        self.items.as_slice()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&InventoryItem> {
        self.items.get(&id.to_string())
    }

    /// Add an item with no stock, ordered `today`
    ///
    /// # Errors
    /// [`DashboardError::MissingField`] when the name is blank.
    pub fn add(&mut self, draft: InventoryDraft, today: NaiveDate) -> Result<String> {
        require("inventory item", "name", &draft.name)?;
        let id = format!("inv-{}", Ulid::new());
        self.items.prepend(InventoryItem {
            id: id.clone(),
            name: draft.name,
            category: draft.category,
            unit: draft.unit,
            quantity_in_stock: 0,
            reorder_level: draft.reorder_level,
            supplier: draft.supplier,
            last_ordered: today,
        })?;
        info!(item = %id, "inventory item added");
        Ok(id)
    }

    /// Replace an item's descriptive fields, keeping stock and order date
    ///
    /// # Errors
    /// [`DashboardError::NotFound`] for an unknown item.
    pub fn edit(&mut self, id: &str, draft: InventoryDraft) -> Result<()> {
        let found = self.items.update(&id.to_string(), |item| {
            item.name = draft.name;
            item.category = draft.category;
            item.unit = draft.unit;
            item.reorder_level = draft.reorder_level;
            item.supplier = draft.supplier;
        });
        found
            .then_some(())
            .ok_or_else(|| DashboardError::not_found("inventory item", id))
    }

    /// # Errors
    /// [`DashboardError::NotFound`] for an unknown item.
    pub fn delete(&mut self, id: &str) -> Result<InventoryItem> {
        self.items
            .remove(&id.to_string())
            .ok_or_else(|| DashboardError::not_found("inventory item", id))
    }

    /// Add or draw stock; the level never goes below zero
    ///
    /// # Errors
    /// [`DashboardError::NotFound`] for an unknown item.
    pub fn update_stock(&mut self, id: &str, change: i64) -> Result<u64> {
        let mut level = 0;
        let found = self.items.update(&id.to_string(), |item| {
            item.adjust_stock(change);
            level = item.quantity_in_stock;
        });
        if !found {
            return Err(DashboardError::not_found("inventory item", id));
        }
        debug!(item = id, change, level, "stock updated");
        Ok(level)
    }

    #[must_use]
    pub fn stats(&self) -> InventoryStats {
        let count = |status| self.items.iter().filter(|i| i.status() == status).count();
        let suppliers: HashSet<&str> = self.items.iter().map(|i| i.supplier.as_str()).collect();
        InventoryStats {
            total_items: self.items.len(),
            low_stock: count(InventoryStatus::LowStock),
            out_of_stock: count(InventoryStatus::OutOfStock),
            suppliers: suppliers.len(),
        }
    }

    /// Items at or below their reorder level, including empty ones
    pub fn needing_reorder(&self) -> impl Iterator<Item = &InventoryItem> {
        self.items
            .iter()
            .filter(|i| i.status() != InventoryStatus::InStock)
    }

    /// Case-insensitive match on name, category or supplier
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&InventoryItem> {
        let needle = query.trim().to_lowercase();
        self.items
            .iter()
            .filter(|item| {
                needle.is_empty()
                    || item.name.to_lowercase().contains(&needle)
                    || item.category.as_str().to_lowercase().contains(&needle)
                    || item.supplier.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Store, for subscriptions
    pub fn store_mut(&mut self) -> &mut RecordStore<InventoryItem> {
        &mut self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use proptest::prelude::*;
    use sitedesk_model::{InventoryCategory, Unit};
    use sitedesk_test_utils::fixtures::date;

    fn book() -> InventoryBook {
        InventoryBook::new(seed::inventory().unwrap()).unwrap()
    }

    fn draft(name: &str) -> InventoryDraft {
        InventoryDraft {
            name: name.into(),
            category: InventoryCategory::Machinery,
            unit: Unit::Hours,
            reorder_level: 20,
            supplier: "JCB India".into(),
        }
    }

    #[test]
    fn add_starts_empty_at_front() {
        let mut book = book();
        let id = book.add(draft("Excavator hire"), date(15)).unwrap();
        assert!(id.starts_with("inv-"));

        let first = &book.items()[0];
        assert_eq!(first.id, id);
        assert_eq!(first.quantity_in_stock, 0);
        assert_eq!(first.last_ordered, date(15));
        assert_eq!(first.status(), InventoryStatus::OutOfStock);
    }

    #[test]
    fn edit_keeps_stock_and_date() {
        let mut book = book();
        book.edit("INV-001", draft("Cement (PPC)")).unwrap();
        let cement = book.get("INV-001").unwrap();
        assert_eq!(cement.name, "Cement (PPC)");
        assert_eq!(cement.quantity_in_stock, 500);
        assert_eq!(cement.last_ordered, date(10));
        assert!(book.edit("INV-404", draft("x")).unwrap_err().is_not_found());
    }

    #[test]
    fn stock_changes_clamp() {
        let mut book = book();
        assert_eq!(book.update_stock("INV-002", -10).unwrap(), 5);
        assert_eq!(book.update_stock("INV-002", -10).unwrap(), 0);
        assert_eq!(book.update_stock("INV-002", 12).unwrap(), 12);
        assert!(book.update_stock("nope", 1).is_err());
    }

    #[test]
    fn stats_follow_stock() {
        let mut book = book();
        assert_eq!(
            book.stats(),
            InventoryStats {
                total_items: 5,
                low_stock: 0,
                out_of_stock: 0,
                suppliers: 5
            }
        );
        book.update_stock("INV-002", -5).unwrap();
        book.update_stock("INV-005", -150).unwrap();
        let stats = book.stats();
        assert_eq!((stats.low_stock, stats.out_of_stock), (1, 1));
        assert_eq!(book.needing_reorder().count(), 2);
    }

    #[test]
    fn delete_and_search() {
        let mut book = book();
        assert_eq!(book.search("civil").len(), 2);
        assert_eq!(book.search("asian").len(), 1);
        assert_eq!(book.search("  ").len(), 5);
        book.delete("INV-003").unwrap();
        assert!(book.search("pvc").is_empty());
        assert!(book.delete("INV-003").is_err());
    }

    proptest! {
        #[test]
        fn prop_stock_never_negative(changes in proptest::collection::vec(-1_000i64..1_000, 0..20)) {
            let mut book = book();
            let mut expected: i64 = 150;
            for change in changes {
                expected = (expected + change).max(0);
                let level = book.update_stock("INV-005", change).unwrap();
                prop_assert_eq!(i64::try_from(level).unwrap(), expected);
            }
        }
    }
}
