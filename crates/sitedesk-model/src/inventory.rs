//! Store inventory records

use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InventoryCategory {
    #[serde(rename = "Civil Works")]
    CivilWorks,
    Electrical,
    Plumbing,
    Finishing,
    Machinery,
}

impl InventoryCategory {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            InventoryCategory::CivilWorks => "Civil Works",
            InventoryCategory::Electrical => "Electrical",
            InventoryCategory::Plumbing => "Plumbing",
            InventoryCategory::Finishing => "Finishing",
            InventoryCategory::Machinery => "Machinery",
        }
    }
}

/// Stock unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Unit {
    Bags,
    Tons,
    Meters,
    Liters,
    #[default]
    Units,
    Hours,
}

impl Unit {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Unit::Bags => "Bags",
            Unit::Tons => "Tons",
            Unit::Meters => "Meters",
            Unit::Liters => "Liters",
            Unit::Units => "Units",
            Unit::Hours => "Hours",
        }
    }
}

/// Derived stock level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InventoryStatus {
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Low Stock")]
    LowStock,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

impl InventoryStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            InventoryStatus::InStock => "In Stock",
            InventoryStatus::LowStock => "Low Stock",
            InventoryStatus::OutOfStock => "Out of Stock",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub category: InventoryCategory,
    pub unit: Unit,
    pub quantity_in_stock: u64,
    pub reorder_level: u64,
    pub supplier: String,
    pub last_ordered: NaiveDate,
}

impl InventoryItem {
    /// Out of stock at zero, low at or below the reorder level
    #[must_use]
    pub fn status(&self) -> InventoryStatus {
        if self.quantity_in_stock == 0 {
            InventoryStatus::OutOfStock
        } else if self.quantity_in_stock <= self.reorder_level {
            InventoryStatus::LowStock
        } else {
            InventoryStatus::InStock
        }
    }

    /// Apply a signed stock change, clamping at zero
    pub fn adjust_stock(&mut self, change: i64) {
        let current = i64::try_from(self.quantity_in_stock).unwrap_or(i64::MAX);
        let next = current.saturating_add(change).max(0);
        self.quantity_in_stock = u64::try_from(next).unwrap_or(0);
    }

    /// Stock relative to 1.5x the reorder level, capped at 100 percent
    #[must_use]
    pub fn stock_gauge(&self) -> f64 {
        if self.reorder_level == 0 {
            return 100.0;
        }
        let ratio = self.quantity_in_stock as f64 / (self.reorder_level as f64 * 1.5) * 100.0;
        ratio.min(100.0)
    }
}

/// Editable fields of an item; stock and order date are managed separately
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryDraft {
    pub name: String,
    pub category: InventoryCategory,
    pub unit: Unit,
    pub reorder_level: u64,
    pub supplier: String,
}
