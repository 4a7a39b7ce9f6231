//! Error types for the state containers

use sitedesk_model::TaskId;

/// Store mutation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Report submitted without a date
    #[error("report date is required")]
    MissingDate,

    /// Phase index out of range
    #[error("phase {0} not found")]
    PhaseNotFound(usize),

    /// Checklist position out of range
    #[error("checklist item {phase}/{action}/{detail} not found")]
    DetailNotFound {
        /// Phase index
        phase: usize,
        /// Key action index
        action: usize,
        /// Detail index
        detail: usize,
    },

    /// Unknown task in a phase
    #[error("task {id} not found in phase {phase}")]
    TaskNotFound {
        /// Phase index
        phase: usize,
        /// Requested task
        id: TaskId,
    },

    /// Task text blank after trimming
    #[error("task text must not be empty")]
    EmptyTaskText,

    /// Snapshot does not match the timeline's checklist structure
    #[error("checklist shape mismatch at phase {phase}")]
    ShapeMismatch {
        /// First phase whose structure differs
        phase: usize,
    },

    /// Record key already present
    #[error("duplicate record key {0}")]
    DuplicateKey(String),
}

impl StoreError {
    /// Check if the error came from an invalid position or id
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::PhaseNotFound(_) | Self::DetailNotFound { .. } | Self::TaskNotFound { .. }
        )
    }
}
