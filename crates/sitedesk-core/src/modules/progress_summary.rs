//! Work progress summary card

use chrono::NaiveDate;
use sitedesk_model::CategoryProgress;
use sitedesk_store::SiteProgress;

/// Category completion as of the latest report
#[derive(Debug, Clone, PartialEq)]
pub struct WorkProgressSummary {
    pub report_date: NaiveDate,
    pub categories: Vec<CategoryProgress>,
}

impl WorkProgressSummary {
    /// Summary of the latest report, `None` before any report exists
    #[must_use]
    pub fn latest(site: &SiteProgress) -> Option<Self> {
        let report = site.latest_report()?;
        Some(Self {
            report_date: report.date,
            categories: site.catalog().category_progress(report),
        })
    }

    /// Caption under the card title
    #[must_use]
    pub fn label(&self) -> String {
        format!("Based on the latest report from {}", self.report_date.format("%-m/%-d/%Y"))
    }

    /// Items complete across every category, and the catalog size
    #[must_use]
    pub fn overall(&self) -> (usize, usize) {
        self.categories
            .iter()
            .fold((0, 0), |(done, total), c| (done + c.completed, total + c.total))
    }
}
