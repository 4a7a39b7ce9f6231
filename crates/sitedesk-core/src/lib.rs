//! Sitedesk dashboard
//!
//! Role-gated dashboard for a plotted real-estate development: sales
//! layout, CRM, brokers, financials, inventory, daily progress reports,
//! staff, messaging and documents, over the stores in `sitedesk-store`.
//!
//! # Core Concepts
//!
//! - [`Dashboard`]: Owns every module plus the role session and theme
//! - [`RoleSession`]: Active role and view; visibility, not authorization
//! - [`ThemePreferences`]: Light/dark theme over a [`PreferenceStore`]
//! - [`seed`]: Bundled demo datasets
//! - [`export`]: CSV tables and printable reports
//!
//! # Example
//!
//! ```rust,ignore
//! use sitedesk_core::{Dashboard, DashboardConfig};
//! use sitedesk_model::{UserRole, View};
//!
//! let mut dashboard = Dashboard::seeded(DashboardConfig::demo())?;
//! dashboard.switch_role(UserRole::StoreManager);
//! assert_eq!(dashboard.current_view(), View::Inventory);
//!
//! let csv = dashboard.export_costs_csv();
//! assert_eq!(csv.file_name, "cost-analysis.csv");
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod config;
pub mod dashboard;
pub mod error;
pub mod export;
pub mod modules;
pub mod notifications;
pub mod preferences;
pub mod seed;
pub mod session;
pub mod telemetry;

mod forms;

pub use config::{ConfigError, DashboardConfig, LogFormat};
pub use dashboard::Dashboard;
pub use error::{DashboardError, Result};
pub use export::{ExportFile, ReportDocument};
pub use notifications::NotificationCenter;
pub use preferences::{MemoryPreferences, PreferenceStore, ThemePreferences};
pub use session::RoleSession;
pub use telemetry::init_tracing;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
