//! Site progress aggregate
//!
//! [`SiteProgress`] owns the work catalog, the progress report store and
//! the timeline store. Report submissions and amendments reconcile the
//! timeline before returning, so callers never see a timeline that lags
//! behind the latest report.

use crate::error::StoreError;
use crate::progress::{ProgressEvent, ProgressReportStore};
use crate::reconcile::{reconcile, ReconcileOutcome};
use crate::subscribe::SubscriptionId;
use crate::timeline::{TimelineEvent, TimelineStore};
use chrono::NaiveDate;
use sitedesk_model::{
    PhaseTask, ProgressReport, ProjectPhase, ReportDraft, ReportId, ReportPatch, TaskId,
    WorkCatalog,
};
use tracing::warn;

/// Progress reports and timeline kept in agreement
#[derive(Debug)]
pub struct SiteProgress {
    catalog: WorkCatalog,
    reports: ProgressReportStore,
    timeline: TimelineStore,
}

impl SiteProgress {
    /// Assemble the aggregate and run an initial reconciliation
    ///
    /// Timeline details the catalog never produces are logged; they stay
    /// incomplete whenever a report exists.
    ///
    /// # Errors
    /// Propagates [`reconcile`] errors.
    pub fn new(
        catalog: WorkCatalog,
        reports: ProgressReportStore,
        phases: Vec<ProjectPhase>,
    ) -> Result<Self, StoreError> {
        let unknown = catalog.unknown_ids(&phases);
        if !unknown.is_empty() {
            let ids: Vec<&str> = unknown.iter().map(|id| id.as_str()).collect();
            warn!(count = unknown.len(), ids = ?ids, "timeline items missing from work catalog");
        }

        let mut site = Self {
            catalog,
            reports,
            timeline: TimelineStore::new(phases),
        };
        site.reconcile()?;
        Ok(site)
    }

    /// Work catalog
    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &WorkCatalog {
        &self.catalog
    }

    /// Report store
    #[inline]
    #[must_use]
    pub fn reports(&self) -> &ProgressReportStore {
        &self.reports
    }

    /// Timeline phases
    #[inline]
    #[must_use]
    pub fn phases(&self) -> &[ProjectPhase] {
        self.timeline.phases()
    }

    /// Latest report
    #[inline]
    #[must_use]
    pub fn latest_report(&self) -> Option<&ProgressReport> {
        self.reports.latest()
    }

    /// Empty draft for `date`, built from the catalog template
    #[must_use]
    pub fn new_draft(&self, date: NaiveDate) -> ReportDraft {
        ReportDraft::new(date, self.catalog.template())
    }

    /// Draft for editing a saved report
    ///
    /// The checklist follows the current catalog, so items added since the
    /// report was saved appear unchecked.
    #[must_use]
    pub fn edit_draft(&self, id: &ReportId) -> Option<ReportDraft> {
        let report = self.reports.get(id)?;
        let mut draft = ReportDraft::from_report(report);
        draft.work_progress = self.catalog.merge_saved(&report.work_progress);
        Some(draft)
    }

    /// Submit a report and reconcile the timeline
    ///
    /// # Errors
    /// [`StoreError::MissingDate`] if the draft has no date.
    pub fn submit_report(
        &mut self,
        draft: ReportDraft,
    ) -> Result<(ReportId, ReconcileOutcome), StoreError> {
        let id = self.reports.submit(draft)?;
        let outcome = self.reconcile()?;
        Ok((id, outcome))
    }

    /// Amend a report and reconcile the timeline
    ///
    /// Returns `None` when the id is unknown; nothing is reconciled then.
    ///
    /// # Errors
    /// Propagates [`reconcile`] errors.
    pub fn amend_report(
        &mut self,
        id: &ReportId,
        patch: ReportPatch,
    ) -> Result<Option<ReconcileOutcome>, StoreError> {
        if !self.reports.amend(id, patch) {
            return Ok(None);
        }
        self.reconcile().map(Some)
    }

    /// Re-derive timeline completion from the latest report
    ///
    /// # Errors
    /// Propagates [`reconcile`] errors.
    pub fn reconcile(&mut self) -> Result<ReconcileOutcome, StoreError> {
        reconcile(&mut self.timeline, &self.reports)
    }

    /// Flip one timeline checklist item by hand
    ///
    /// # Errors
    /// See [`TimelineStore::toggle_detail`].
    pub fn toggle_detail(
        &mut self,
        phase: usize,
        action: usize,
        detail: usize,
    ) -> Result<bool, StoreError> {
        self.timeline.toggle_detail(phase, action, detail)
    }

    /// Flip one task
    ///
    /// # Errors
    /// See [`TimelineStore::toggle_task`].
    pub fn toggle_task(&mut self, phase: usize, id: &TaskId) -> Result<bool, StoreError> {
        self.timeline.toggle_task(phase, id)
    }

    /// Add a task
    ///
    /// # Errors
    /// See [`TimelineStore::add_task`].
    pub fn add_task(&mut self, phase: usize, text: &str) -> Result<TaskId, StoreError> {
        self.timeline.add_task(phase, text)
    }

    /// Remove a task
    ///
    /// # Errors
    /// See [`TimelineStore::remove_task`].
    pub fn remove_task(&mut self, phase: usize, id: &TaskId) -> Result<PhaseTask, StoreError> {
        self.timeline.remove_task(phase, id)
    }

    /// Listen to report changes
    pub fn subscribe_reports(
        &mut self,
        listener: impl FnMut(&ProgressEvent) + 'static,
    ) -> SubscriptionId {
        self.reports.subscribe(listener)
    }

    /// Listen to timeline changes
    pub fn subscribe_timeline(
        &mut self,
        listener: impl FnMut(&TimelineEvent) + 'static,
    ) -> SubscriptionId {
        self.timeline.subscribe(listener)
    }

    /// Stop a report listener
    pub fn unsubscribe_reports(&mut self, id: SubscriptionId) -> bool {
        self.reports.unsubscribe(id)
    }

    /// Stop a timeline listener
    pub fn unsubscribe_timeline(&mut self, id: SubscriptionId) -> bool {
        self.timeline.unsubscribe(id)
    }
}
