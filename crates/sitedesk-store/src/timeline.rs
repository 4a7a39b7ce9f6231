//! Timeline store
//!
//! Owns the phased project plan. After construction only leaf completion
//! flags and the per-phase task lists change; phases, key actions and
//! checklist positions stay fixed.

use crate::error::StoreError;
use crate::subscribe::{SubscriptionId, Subscribers};
use sitedesk_model::{ChecklistItem, PhaseTask, ProjectPhase, ReportId, TaskId};
use tracing::debug;

/// Change notification from a [`TimelineStore`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimelineEvent {
    /// One checklist flag flipped by hand
    DetailToggled {
        /// Phase index
        phase: usize,
        /// Key action index
        action: usize,
        /// Detail index
        detail: usize,
        /// New flag value
        completed: bool,
    },
    /// A task flag flipped
    TaskToggled {
        /// Phase index
        phase: usize,
        /// Task id
        id: TaskId,
        /// New flag value
        completed: bool,
    },
    /// A task was appended
    TaskAdded {
        /// Phase index
        phase: usize,
        /// New task id
        id: TaskId,
    },
    /// A task was removed
    TaskRemoved {
        /// Phase index
        phase: usize,
        /// Removed task id
        id: TaskId,
    },
    /// Checklist flags overwritten from a progress report
    Reconciled {
        /// Report the flags were taken from
        report: ReportId,
        /// Number of flags whose value changed
        changed: usize,
    },
}

/// Mutation request, the command form of the manual timeline operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimelineCommand {
    /// Flip one checklist item
    ToggleDetail {
        /// Phase index
        phase: usize,
        /// Key action index
        action: usize,
        /// Detail index
        detail: usize,
    },
    /// Flip one task
    ToggleTask {
        /// Phase index
        phase: usize,
        /// Task id
        id: TaskId,
    },
    /// Append a task
    AddTask {
        /// Phase index
        phase: usize,
        /// Task text, trimmed before storing
        text: String,
    },
    /// Remove a task
    RemoveTask {
        /// Phase index
        phase: usize,
        /// Task id
        id: TaskId,
    },
}

/// Store for the project timeline
#[derive(Debug, Default)]
pub struct TimelineStore {
    phases: Vec<ProjectPhase>,
    subscribers: Subscribers<TimelineEvent>,
}

impl TimelineStore {
    /// Create a store over `phases`; their structure is fixed from here on
    #[must_use]
    pub fn new(phases: Vec<ProjectPhase>) -> Self {
        Self {
            phases,
            subscribers: Subscribers::new(),
        }
    }

    /// All phases in plan order
    #[inline]
    #[must_use]
    pub fn phases(&self) -> &[ProjectPhase] {
        &self.phases
    }

    /// Phase by index
    #[inline]
    #[must_use]
    pub fn phase(&self, index: usize) -> Option<&ProjectPhase> {
        self.phases.get(index)
    }

    fn phase_mut(&mut self, index: usize) -> Result<&mut ProjectPhase, StoreError> {
        self.phases.get_mut(index).ok_or(StoreError::PhaseNotFound(index))
    }

    fn detail_mut(
        &mut self,
        phase: usize,
        action: usize,
        detail: usize,
    ) -> Result<&mut ChecklistItem, StoreError> {
        self.phases
            .get_mut(phase)
            .and_then(|p| p.key_actions.get_mut(action))
            .and_then(|a| a.details.get_mut(detail))
            .ok_or(StoreError::DetailNotFound { phase, action, detail })
    }

    fn task_mut(&mut self, phase: usize, id: &TaskId) -> Result<&mut PhaseTask, StoreError> {
        self.phase_mut(phase)?
            .tasks
            .iter_mut()
            .find(|task| &task.id == id)
            .ok_or_else(|| StoreError::TaskNotFound {
                phase,
                id: id.clone(),
            })
    }

    /// Flip one checklist flag and return its new value
    ///
    /// The next reconciliation overwrites manual changes.
    ///
    /// # Errors
    /// [`StoreError::DetailNotFound`] if any index is out of range.
    pub fn toggle_detail(
        &mut self,
        phase: usize,
        action: usize,
        detail: usize,
    ) -> Result<bool, StoreError> {
        let item = self.detail_mut(phase, action, detail)?;
        item.completed = !item.completed;
        let completed = item.completed;

        debug!(phase, action, detail, completed, "checklist item toggled");
        self.subscribers.notify(&TimelineEvent::DetailToggled {
            phase,
            action,
            detail,
            completed,
        });
        Ok(completed)
    }

    /// Flip one task flag and return its new value
    ///
    /// # Errors
    /// [`StoreError::PhaseNotFound`] or [`StoreError::TaskNotFound`].
    pub fn toggle_task(&mut self, phase: usize, id: &TaskId) -> Result<bool, StoreError> {
        let task = self.task_mut(phase, id)?;
        task.completed = !task.completed;
        let completed = task.completed;

        debug!(phase, task = %id, completed, "task toggled");
        self.subscribers.notify(&TimelineEvent::TaskToggled {
            phase,
            id: id.clone(),
            completed,
        });
        Ok(completed)
    }

    /// Append an incomplete task with trimmed `text`
    ///
    /// # Errors
    /// [`StoreError::EmptyTaskText`] for blank text, or
    /// [`StoreError::PhaseNotFound`].
    pub fn add_task(&mut self, phase: usize, text: &str) -> Result<TaskId, StoreError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(StoreError::EmptyTaskText);
        }

        let id = TaskId::generate(phase);
        self.phase_mut(phase)?
            .tasks
            .push(PhaseTask::new(id.clone(), text, false));

        debug!(phase, task = %id, "task added");
        self.subscribers.notify(&TimelineEvent::TaskAdded {
            phase,
            id: id.clone(),
        });
        Ok(id)
    }

    /// Remove a task
    ///
    /// # Errors
    /// [`StoreError::PhaseNotFound`] or [`StoreError::TaskNotFound`].
    pub fn remove_task(&mut self, phase: usize, id: &TaskId) -> Result<PhaseTask, StoreError> {
        let tasks = &mut self.phase_mut(phase)?.tasks;
        let position = tasks
            .iter()
            .position(|task| &task.id == id)
            .ok_or_else(|| StoreError::TaskNotFound {
                phase,
                id: id.clone(),
            })?;
        let removed = tasks.remove(position);

        debug!(phase, task = %id, "task removed");
        self.subscribers.notify(&TimelineEvent::TaskRemoved {
            phase,
            id: id.clone(),
        });
        Ok(removed)
    }

    /// Apply a command
    ///
    /// Returns the id of a newly added task, `None` otherwise.
    ///
    /// # Errors
    /// Same as the matching method.
    pub fn apply(&mut self, command: TimelineCommand) -> Result<Option<TaskId>, StoreError> {
        match command {
            TimelineCommand::ToggleDetail { phase, action, detail } => {
                self.toggle_detail(phase, action, detail).map(|_| None)
            }
            TimelineCommand::ToggleTask { phase, id } => self.toggle_task(phase, &id).map(|_| None),
            TimelineCommand::AddTask { phase, text } => self.add_task(phase, &text).map(Some),
            TimelineCommand::RemoveTask { phase, id } => self.remove_task(phase, &id).map(|_| None),
        }
    }

    /// Overwrite every checklist flag from `snapshot`
    ///
    /// The snapshot must have the same phases, key actions and checklist
    /// positions as the store. Task lists are left alone. Returns the
    /// number of flags whose value changed.
    ///
    /// # Errors
    /// [`StoreError::ShapeMismatch`] if the structures differ; the store is
    /// unchanged in that case.
    pub fn replace_completion(
        &mut self,
        snapshot: &[ProjectPhase],
        source: &ReportId,
    ) -> Result<usize, StoreError> {
        if snapshot.len() != self.phases.len() {
            return Err(StoreError::ShapeMismatch {
                phase: snapshot.len().min(self.phases.len()),
            });
        }
        if let Some(phase) = self
            .phases
            .iter()
            .zip(snapshot)
            .position(|(current, next)| current.shape() != next.shape())
        {
            return Err(StoreError::ShapeMismatch { phase });
        }

        let mut changed = 0;
        for (current, next) in self.phases.iter_mut().zip(snapshot) {
            let targets = current.key_actions.iter_mut().flat_map(|a| a.details.iter_mut());
            for (item, projected) in targets.zip(next.details()) {
                if item.completed != projected.completed {
                    item.completed = projected.completed;
                    changed += 1;
                }
            }
        }

        self.subscribers.notify(&TimelineEvent::Reconciled {
            report: source.clone(),
            changed,
        });
        Ok(changed)
    }

    /// Register a change listener
    pub fn subscribe(&mut self, listener: impl FnMut(&TimelineEvent) + 'static) -> SubscriptionId {
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
    use pretty_assertions::assert_eq;
    use sitedesk_test_utils::fixtures;

    #[test]
    fn toggle_detail_flips_one_leaf() {
        let mut store = TimelineStore::new(fixtures::timeline());
        let before = store.phases().to_vec();

        assert!(store.toggle_detail(1, 0, 1).unwrap());
        assert!(!store.toggle_detail(1, 0, 1).unwrap());
        assert_eq!(store.phases(), before.as_slice());
    }

    #[test]
    fn toggle_detail_out_of_range() {
        let mut store = TimelineStore::new(fixtures::timeline());
        let err = store.toggle_detail(0, 9, 0).unwrap_err();
        assert_eq!(
            err,
            StoreError::DetailNotFound {
                phase: 0,
                action: 9,
                detail: 0
            }
        );
        assert!(err.is_not_found());
    }

    #[test]
    fn task_lifecycle() {
        let mut store = TimelineStore::new(fixtures::timeline());
        let id = store.add_task(0, "  Verify survey pegs  ").unwrap();
        let added = store.phase(0).unwrap().tasks.last().unwrap().clone();
        assert_eq!(added.text, "Verify survey pegs");
        assert!(!added.completed);

        assert!(store.toggle_task(0, &id).unwrap());
        let removed = store.remove_task(0, &id).unwrap();
        assert!(removed.completed);
        assert_eq!(
            store.remove_task(0, &id).unwrap_err(),
            StoreError::TaskNotFound { phase: 0, id }
        );
    }

    #[test]
    fn add_task_rejects_blank_text() {
        let mut store = TimelineStore::new(fixtures::timeline());
        assert_eq!(store.add_task(0, "   ").unwrap_err(), StoreError::EmptyTaskText);
        assert_eq!(store.add_task(42, "x").unwrap_err(), StoreError::PhaseNotFound(42));
    }

    #[test]
    fn replace_completion_rejects_other_shapes() {
        let mut store = TimelineStore::new(fixtures::timeline());
        let mut snapshot = store.phases().to_vec();
        snapshot[1].key_actions[0].details.pop();

        let err = store
            .replace_completion(&snapshot, &ReportId::new("dpr-x"))
            .unwrap_err();
        assert_eq!(err, StoreError::ShapeMismatch { phase: 1 });
    }

    #[test]
    fn manual_edits_emit_events() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let mut store = TimelineStore::new(fixtures::timeline());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        let id = store
            .apply(TimelineCommand::AddTask {
                phase: 0,
                text: "Call surveyor".into(),
            })
            .unwrap()
            .unwrap();
        store
            .apply(TimelineCommand::ToggleDetail {
                phase: 0,
                action: 0,
                detail: 0,
            })
            .unwrap();

        let events = seen.borrow();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], TimelineEvent::TaskAdded { phase: 0, id });
        assert!(matches!(events[1], TimelineEvent::DetailToggled { phase: 0, .. }));
    }
}
