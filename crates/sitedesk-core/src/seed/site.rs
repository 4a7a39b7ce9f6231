use super::parse;
use crate::error::Result;
use sitedesk_model::{ProgressReport, ProjectPhase, WorkCatalog};
use sitedesk_store::{ProgressReportStore, SiteProgress};

/// Site work categories with their reportable items
///
/// # Errors
/// If the bundled catalog does not parse or fails validation.
pub fn work_catalog() -> Result<WorkCatalog> {
    let entries: Vec<(String, Vec<String>)> =
        parse("work_items", include_str!("../../data/work_items.json"))?;
    Ok(WorkCatalog::new(entries)?)
}

/// Master project plan
///
/// # Errors
/// If the bundled timeline does not parse.
pub fn project_timeline() -> Result<Vec<ProjectPhase>> {
    parse("timeline", include_str!("../../data/timeline.json"))
}

/// Submitted reports, oldest first
///
/// # Errors
/// If the bundled reports do not parse.
pub fn progress_reports() -> Result<Vec<ProgressReport>> {
    parse("reports", include_str!("../../data/reports.json"))
}

/// Catalog, reports and timeline wired together and reconciled once
///
/// # Errors
/// If any bundled dataset fails to load.
pub fn site_progress() -> Result<SiteProgress> {
    let reports = ProgressReportStore::with_entries(progress_reports()?);
    Ok(SiteProgress::new(work_catalog()?, reports, project_timeline()?)?)
}
