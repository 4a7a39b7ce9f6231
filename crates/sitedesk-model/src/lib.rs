//! Sitedesk record model
//!
//! Typed records for a plotted real-estate development: daily progress
//! reports, the phased project timeline, and the dashboard datasets
//! (leads, brokers, plots, finance, inventory, staff, documents).
//!
//! # Core Concepts
//!
//! - [`ItemId`]: Shared checklist key, `slug(category)-index`
//! - [`WorkCatalog`]: Validated master list of reportable site work
//! - [`ProgressReport`]: One daily progress report (DPR)
//! - [`ProjectPhase`]: Timeline phase with key actions and free tasks
//! - [`UserRole`]: Role with its static list of visible [`View`]s
//!
//! # Example
//!
//! ```rust
//! use sitedesk_model::{make_id, WorkCatalog};
//!
//! let catalog = WorkCatalog::new([("Boundary & Security", vec!["Gate installation"])])?;
//! assert!(catalog.contains(&make_id("Boundary & Security", 0)));
//! # Ok::<(), sitedesk_model::ModelError>(())
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod error;
mod id;

pub mod access;
pub mod broker;
pub mod catalog;
pub mod checklist;
pub mod crm;
pub mod documents;
pub mod finance;
pub mod inventory;
pub mod notification;
pub mod people;
pub mod plot;
pub mod report;
pub mod timeline;

pub use access::{Theme, UserRole, View};
pub use broker::{Broker, BrokerDraft, BrokerStatus};
pub use catalog::{CategoryProgress, WorkCatalog};
pub use checklist::{Checkable, ChecklistItem, WorkProgress};
pub use crm::{Activity, ActivityKind, Lead, LeadStatus};
pub use documents::{DocumentFolder, DocumentKind, ProjectDocument};
pub use error::ModelError;
pub use finance::{CashFlowPoint, CostCategory, Department, FundingSource, SalesTier};
pub use id::{make_id, slugify, ItemFingerprint, ItemId};
pub use inventory::{InventoryCategory, InventoryDraft, InventoryItem, InventoryStatus, Unit};
pub use notification::{Notification, NotificationKind};
pub use people::{Employee, EmploymentStatus, Message};
pub use plot::{Plot, PlotStatus};
pub use report::{
    EquipmentUsage, Manpower, MaterialUsage, ProgressReport, ReportDraft, ReportId, ReportPatch,
    Weather,
};
pub use timeline::{KeyAction, PhaseStatus, PhaseTask, ProjectPhase, TaskId};

/// Version of the model crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
