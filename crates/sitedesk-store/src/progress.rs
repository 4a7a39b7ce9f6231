//! Progress report store
//!
//! Ordered collection of submitted daily progress reports. The newest
//! report by date, see [`ProgressReportStore::latest`], drives timeline
//! reconciliation.

use crate::error::StoreError;
use crate::subscribe::{SubscriptionId, Subscribers};
use chrono::NaiveDate;
use sitedesk_model::{ProgressReport, ReportDraft, ReportId, ReportPatch};
use std::cmp::Reverse;
use tracing::{debug, info};

/// Change notification from a [`ProgressReportStore`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    /// A report was appended
    Submitted(ReportId),
    /// An existing report was edited
    Amended(ReportId),
}

/// Mutation request, the command form of `submit` and `amend`
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressCommand {
    /// Append a new report
    Submit(ReportDraft),
    /// Edit an existing report
    Amend {
        /// Target report
        id: ReportId,
        /// Fields to replace
        patch: ReportPatch,
    },
}

#[derive(Debug)]
struct Entry {
    seq: u64,
    report: ProgressReport,
}

impl Entry {
    fn rank(&self) -> (NaiveDate, u64) {
        (self.report.date, self.seq)
    }
}

/// Store of submitted progress reports
///
/// Reports are kept in submission order. Each entry carries a sequence
/// number so that reports sharing a date resolve to the one submitted last.
#[derive(Debug, Default)]
pub struct ProgressReportStore {
    entries: Vec<Entry>,
    next_seq: u64,
    subscribers: Subscribers<ProgressEvent>,
}

impl ProgressReportStore {
    /// Create an empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `seed`, oldest submission first
    #[must_use]
    pub fn with_entries(seed: impl IntoIterator<Item = ProgressReport>) -> Self {
        let mut store = Self::new();
        for report in seed {
            store.push(report);
        }
        store
    }

    fn push(&mut self, report: ProgressReport) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry { seq, report });
    }

    /// Append a report built from `draft` under a fresh id
    ///
    /// # Errors
    /// [`StoreError::MissingDate`] if the draft has no date. Nothing else
    /// about the draft is validated.
    pub fn submit(&mut self, draft: ReportDraft) -> Result<ReportId, StoreError> {
        let id = ReportId::generate();
        let report = draft.into_report(id.clone()).ok_or(StoreError::MissingDate)?;

        info!(report = %id, date = %report.date, "progress report submitted");
        self.push(report);
        self.subscribers.notify(&ProgressEvent::Submitted(id.clone()));
        Ok(id)
    }

    /// Replace the fields present in `patch` on the report with `id`
    ///
    /// Returns `false`, changing nothing, when no report has that id.
    pub fn amend(&mut self, id: &ReportId, patch: ReportPatch) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|entry| &entry.report.id == id) else {
            debug!(report = %id, "amend ignored: unknown report");
            return false;
        };

        entry.report.apply(patch);
        info!(report = %id, date = %entry.report.date, "progress report amended");
        self.subscribers.notify(&ProgressEvent::Amended(id.clone()));
        true
    }

    /// Apply a command
    ///
    /// Returns the affected report id, or `None` for an amend of an
    /// unknown report.
    ///
    /// # Errors
    /// See [`ProgressReportStore::submit`].
    pub fn apply(&mut self, command: ProgressCommand) -> Result<Option<ReportId>, StoreError> {
        match command {
            ProgressCommand::Submit(draft) => self.submit(draft).map(Some),
            ProgressCommand::Amend { id, patch } => Ok(self.amend(&id, patch).then_some(id)),
        }
    }

    /// Report with the greatest date, most recent submission on ties
    #[must_use]
    pub fn latest(&self) -> Option<&ProgressReport> {
        self.entries
            .iter()
            .max_by_key(|entry| entry.rank())
            .map(|entry| &entry.report)
    }

    /// Reports newest first, using the same ordering as [`Self::latest`]
    #[must_use]
    pub fn sorted_desc(&self) -> Vec<&ProgressReport> {
        let mut entries: Vec<&Entry> = self.entries.iter().collect();
        entries.sort_by_key(|entry| Reverse(entry.rank()));
        entries.into_iter().map(|entry| &entry.report).collect()
    }

    /// Look up a report by id
    #[must_use]
    pub fn get(&self, id: &ReportId) -> Option<&ProgressReport> {
        self.iter().find(|report| &report.id == id)
    }

    /// Reports in submission order
    pub fn iter(&self) -> impl Iterator<Item = &ProgressReport> {
        self.entries.iter().map(|entry| &entry.report)
    }

    /// Number of reports
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no report has been submitted
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Register a change listener
    pub fn subscribe(&mut self, listener: impl FnMut(&ProgressEvent) + 'static) -> SubscriptionId {
        self.subscribers.subscribe(listener)
    }

    /// Remove a change listener
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitedesk_model::WorkProgress;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, d).unwrap()
    }

    fn draft(d: u32) -> ReportDraft {
        ReportDraft::new(
            day(d),
            vec![WorkProgress::new("infrastructure-0", "WMM laying", "Infrastructure", false)],
        )
    }

    #[test]
    fn submit_requires_date() {
        let mut store = ProgressReportStore::new();
        let err = store.submit(ReportDraft::default()).unwrap_err();
        assert_eq!(err, StoreError::MissingDate);
        assert!(store.is_empty());
    }

    #[test]
    fn submit_assigns_fresh_ids() {
        let mut store = ProgressReportStore::new();
        let a = store.submit(draft(13)).unwrap();
        let b = store.submit(draft(14)).unwrap();
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("dpr-"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn latest_is_max_date_not_last_submitted() {
        let mut store = ProgressReportStore::new();
        let newest = store.submit(draft(14)).unwrap();
        store.submit(draft(10)).unwrap();
        assert_eq!(store.latest().unwrap().id, newest);
    }

    #[test]
    fn same_date_prefers_later_submission() {
        let mut store = ProgressReportStore::new();
        let first = store.submit(draft(14)).unwrap();
        let second = store.submit(draft(14)).unwrap();
        assert_eq!(store.latest().unwrap().id, second);

        // amending keeps the original submission order
        assert!(store.amend(&first, ReportPatch::default()));
        assert_eq!(store.latest().unwrap().id, second);

        let order: Vec<_> = store.sorted_desc().into_iter().map(|r| r.id.clone()).collect();
        assert_eq!(order, vec![second, first]);
    }

    #[test]
    fn amend_unknown_is_noop() {
        let mut store = ProgressReportStore::new();
        store.submit(draft(14)).unwrap();
        assert!(!store.amend(&ReportId::new("dpr-missing"), ReportPatch::date(day(1))));
        assert_eq!(store.latest().unwrap().date, day(14));
    }

    #[test]
    fn amend_moves_latest() {
        let mut store = ProgressReportStore::new();
        let old = store.submit(draft(10)).unwrap();
        store.submit(draft(12)).unwrap();
        assert!(store.amend(&old, ReportPatch::date(day(20))));
        assert_eq!(store.latest().unwrap().id, old);
    }

    #[test]
    fn events_follow_mutations() {
        let mut store = ProgressReportStore::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let sub = store.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        let id = store.submit(draft(14)).unwrap();
        store.amend(&id, ReportPatch::default());
        store.amend(&ReportId::new("nope"), ReportPatch::default());
        store.unsubscribe(sub);
        store.submit(draft(15)).unwrap();

        assert_eq!(
            *seen.borrow(),
            vec![ProgressEvent::Submitted(id.clone()), ProgressEvent::Amended(id)]
        );
    }

    #[test]
    fn command_form_matches_methods() {
        let mut store = ProgressReportStore::new();
        let id = store.apply(ProgressCommand::Submit(draft(3))).unwrap().unwrap();
        let amended = store
            .apply(ProgressCommand::Amend {
                id: id.clone(),
                patch: ReportPatch::date(day(4)),
            })
            .unwrap();
        assert_eq!(amended, Some(id.clone()));
        assert_eq!(store.get(&id).unwrap().date, day(4));
    }
}
