//! Project plan phases
//!
//! A phase holds key actions, each with nested checklist items addressed by
//! the shared [`ItemId`](crate::id::ItemId) scheme, plus an independent list
//! of free-form tasks.

use crate::checklist::ChecklistItem;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

/// Free-form task identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Generate a fresh id for a task added to `phase_index`
    #[inline]
    #[must_use]
    pub fn generate(phase_index: usize) -> Self {
        Self(format!("task-{phase_index}-{}", Ulid::new()))
    }

    /// Wrap an existing id
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow as string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Free-form task attached to a phase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseTask {
    /// Task id
    pub id: TaskId,
    /// Task text
    pub text: String,
    /// Completion flag
    pub completed: bool,
}

impl PhaseTask {
    /// Create a task
    #[must_use]
    pub fn new(id: TaskId, text: impl Into<String>, completed: bool) -> Self {
        Self {
            id,
            text: text.into(),
            completed,
        }
    }
}

/// Named group of checklist items within a phase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyAction {
    /// Action name
    pub name: String,
    /// Checklist items
    pub details: Vec<ChecklistItem>,
}

impl KeyAction {
    /// Create an action
    #[must_use]
    pub fn new(name: impl Into<String>, details: Vec<ChecklistItem>) -> Self {
        Self {
            name: name.into(),
            details,
        }
    }
}

/// Position of a phase relative to a reference date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseStatus {
    /// Ended before the reference date
    Completed,
    /// Reference date falls within the phase
    InProgress,
    /// Starts after the reference date
    Upcoming,
}

impl PhaseStatus {
    /// Display label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            PhaseStatus::Completed => "Completed",
            PhaseStatus::InProgress => "In Progress",
            PhaseStatus::Upcoming => "Upcoming",
        }
    }
}

/// One stage of the master project plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPhase {
    /// Phase number (1-based)
    pub phase: u32,
    /// Title
    pub title: String,
    /// Display duration (e.g. `Nov '25 - Jan '26 (3 Months)`)
    pub duration: String,
    /// First day
    pub start_date: NaiveDate,
    /// Last day
    pub end_date: NaiveDate,
    /// Key actions with checklists
    pub key_actions: Vec<KeyAction>,
    /// Deliverables
    pub deliverables: Vec<String>,
    /// Free-form tasks
    #[serde(default)]
    pub tasks: Vec<PhaseTask>,
}

impl ProjectPhase {
    /// Status relative to `today`
    #[must_use]
    pub fn status_on(&self, today: NaiveDate) -> PhaseStatus {
        if today > self.end_date {
            PhaseStatus::Completed
        } else if today >= self.start_date {
            PhaseStatus::InProgress
        } else {
            PhaseStatus::Upcoming
        }
    }

    /// All checklist items across key actions
    pub fn details(&self) -> impl Iterator<Item = &ChecklistItem> {
        self.key_actions.iter().flat_map(|action| action.details.iter())
    }

    /// Completed and total checklist items
    #[must_use]
    pub fn checklist_progress(&self) -> (usize, usize) {
        self.details().fold((0, 0), |(done, total), detail| {
            (done + usize::from(detail.completed), total + 1)
        })
    }

    /// Shape of the checklist hierarchy: details per action
    #[must_use]
    pub fn shape(&self) -> Vec<usize> {
        self.key_actions.iter().map(|action| action.details.len()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phase() -> ProjectPhase {
        ProjectPhase {
            phase: 2,
            title: "Infrastructure Development".into(),
            duration: "Feb '26 - Jun '26 (5 Months)".into(),
            start_date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 6, 30).unwrap(),
            key_actions: vec![
                KeyAction::new(
                    "Roads & Drainage",
                    vec![
                        ChecklistItem::new("infrastructure-0", "WMM laying", true),
                        ChecklistItem::new("infrastructure-1", "Curbstone installation", false),
                    ],
                ),
                KeyAction::new("Electrical", vec![ChecklistItem::new("utilities-3", "Transformer", false)]),
            ],
            deliverables: vec!["Completed Road Network".into()],
            tasks: Vec::new(),
        }
    }

    #[test]
    fn status_relative_to_date() {
        let p = phase();
        let on = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
        assert_eq!(p.status_on(on(2026, 1, 31)), PhaseStatus::Upcoming);
        assert_eq!(p.status_on(on(2026, 2, 1)), PhaseStatus::InProgress);
        assert_eq!(p.status_on(on(2026, 6, 30)), PhaseStatus::InProgress);
        assert_eq!(p.status_on(on(2026, 7, 1)), PhaseStatus::Completed);
    }

    #[test]
    fn checklist_progress_counts_leaves() {
        assert_eq!(phase().checklist_progress(), (1, 3));
        assert_eq!(phase().shape(), vec![2, 1]);
    }

    #[test]
    fn task_ids_carry_phase() {
        assert!(TaskId::generate(3).as_str().starts_with("task-3-"));
    }
}
