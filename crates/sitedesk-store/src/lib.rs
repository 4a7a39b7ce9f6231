//! Sitedesk state containers
//!
//! Explicit, synchronous stores for the dashboard's shared state, each with
//! a command API and a subscription list.
//!
//! # Core Concepts
//!
//! - [`ProgressReportStore`]: Submitted daily progress reports
//! - [`TimelineStore`]: Project phases with checklist flags and tasks
//! - [`reconcile`]: Derives timeline completion from the latest report
//! - [`SiteProgress`]: Both stores, reconciled on every report change
//! - [`RecordStore`]: Keyed list behind each dashboard module
//!
//! # Example
//!
//! ```rust,ignore
//! let mut site = SiteProgress::new(catalog, ProgressReportStore::new(), phases)?;
//! let draft = site.new_draft(today).completing(["infrastructure-0"]);
//! let (id, outcome) = site.submit_report(draft)?;
//! assert!(outcome.is_applied());
//! ```

#![warn(unreachable_pub)]

mod error;
mod progress;
mod reconcile;
mod records;
mod site;
mod subscribe;
mod timeline;

pub use error::StoreError;
pub use progress::{ProgressCommand, ProgressEvent, ProgressReportStore};
pub use reconcile::{project, reconcile, ReconcileOutcome};
pub use records::{Record, RecordEvent, RecordStore};
pub use site::SiteProgress;
pub use subscribe::{SubscriptionId, Subscribers};
pub use timeline::{TimelineCommand, TimelineEvent, TimelineStore};
