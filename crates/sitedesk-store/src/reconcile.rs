//! Timeline reconciliation
//!
//! Derives timeline checklist completion from the latest progress report.
//! [`project`] computes the derived checklist as a pure function;
//! [`reconcile`] writes it into a [`TimelineStore`].

use crate::error::StoreError;
use crate::progress::ProgressReportStore;
use crate::timeline::TimelineStore;
use sitedesk_model::{ItemId, ProgressReport, ProjectPhase, ReportId};
use std::collections::HashSet;
use tracing::{debug, info};

/// Result of one reconciliation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// No report exists; the timeline was left as it was
    Skipped,
    /// Checklist flags were overwritten from `report`
    Applied {
        /// Latest report
        report: ReportId,
        /// Ids the report marks complete
        completed_ids: HashSet<ItemId>,
        /// Flags whose value changed
        changed: usize,
    },
}

impl ReconcileOutcome {
    /// Check if the timeline was written
    #[inline]
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }

    /// Number of flags that changed
    #[inline]
    #[must_use]
    pub fn changed(&self) -> usize {
        match self {
            Self::Skipped => 0,
            Self::Applied { changed, .. } => *changed,
        }
    }
}

/// Timeline as `latest` says it should be
///
/// Without a report the phases are returned unchanged. Otherwise every
/// checklist item is complete exactly when the report marks its id
/// complete; items the report does not mention become incomplete. Tasks
/// and all other fields are copied as they are.
#[must_use]
pub fn project(phases: &[ProjectPhase], latest: Option<&ProgressReport>) -> Vec<ProjectPhase> {
    let Some(report) = latest else {
        return phases.to_vec();
    };
    let completed = report.completed_ids();

    phases
        .iter()
        .map(|phase| {
            let mut phase = phase.clone();
            for item in phase.key_actions.iter_mut().flat_map(|a| a.details.iter_mut()) {
                item.completed = completed.contains(&item.id);
            }
            phase
        })
        .collect()
}

/// Bring `timeline` in line with the latest report in `reports`
///
/// # Errors
/// Only a structural mismatch from [`TimelineStore::replace_completion`],
/// which a projection of the store's own phases cannot produce.
pub fn reconcile(
    timeline: &mut TimelineStore,
    reports: &ProgressReportStore,
) -> Result<ReconcileOutcome, StoreError> {
    let Some(latest) = reports.latest() else {
        debug!("reconciliation skipped: no progress reports");
        return Ok(ReconcileOutcome::Skipped);
    };

    let projected = project(timeline.phases(), Some(latest));
    let changed = timeline.replace_completion(&projected, &latest.id)?;
    let completed_ids = latest.completed_ids();

    info!(
        report = %latest.id,
        date = %latest.date,
        completed = completed_ids.len(),
        changed,
        "timeline reconciled"
    );
    Ok(ReconcileOutcome::Applied {
        report: latest.id.clone(),
        completed_ids,
        changed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sitedesk_test_utils::fixtures;

    #[test]
    fn no_report_leaves_phases_alone() {
        let phases = fixtures::timeline();
        assert_eq!(project(&phases, None), phases);
    }

    #[test]
    fn projection_is_full_overwrite() {
        let phases = fixtures::timeline();
        let report = fixtures::report("dpr-a", 14, &["infrastructure-1"]);
        let projected = project(&phases, Some(&report));

        for detail in projected.iter().flat_map(ProjectPhase::details) {
            assert_eq!(detail.completed, detail.id.as_str() == "infrastructure-1");
        }
        for (before, after) in phases.iter().zip(&projected) {
            assert_eq!(before.tasks, after.tasks);
            assert_eq!(before.shape(), after.shape());
        }
    }

    #[test]
    fn empty_store_skips() {
        let mut timeline = TimelineStore::new(fixtures::timeline());
        let before = timeline.phases().to_vec();
        let outcome = reconcile(&mut timeline, &ProgressReportStore::new()).unwrap();
        assert_eq!(outcome, ReconcileOutcome::Skipped);
        assert_eq!(timeline.phases(), before.as_slice());
    }
}
