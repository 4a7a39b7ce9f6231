//! Error types for the dashboard
//!
//! Wraps the model and store errors and adds the failures that only the
//! dashboard surface can produce:
//! - Navigation to a view the role does not list
//! - Lookups of unknown records
//! - Configuration loading and seed data decoding

use crate::config::ConfigError;
use sitedesk_model::{ModelError, UserRole, View};
use sitedesk_store::StoreError;

/// Main dashboard error type
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// Invalid model input
    #[error("model error: {0}")]
    Model(#[from] ModelError),

    /// Store mutation failed
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Bundled seed data failed to decode
    #[error("seed data {dataset} is invalid: {source}")]
    Seed {
        /// Dataset name
        dataset: &'static str,
        /// Decoder error
        source: serde_json::Error,
    },

    /// The role does not list the view
    #[error("{view} is not available to {role}")]
    ViewHidden {
        /// Active role
        role: UserRole,
        /// Requested view
        view: View,
    },

    /// The role may not export this report
    #[error("{role} may not export the {report} report")]
    ExportHidden {
        /// Active role
        role: UserRole,
        /// Report name
        report: &'static str,
    },

    /// Unknown record
    #[error("{kind} {key} not found")]
    NotFound {
        /// Record kind
        kind: &'static str,
        /// Requested key
        key: String,
    },

    /// Required form field left blank
    #[error("{form}: {field} is required")]
    MissingField {
        /// Form name
        form: &'static str,
        /// Field name
        field: &'static str,
    },

    /// Message text blank after trimming
    #[error("message text must not be empty")]
    EmptyMessage,
}

impl DashboardError {
    /// Create a not-found error
    #[inline]
    pub fn not_found(kind: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            kind,
            key: key.to_string(),
        }
    }

    /// Check for "not found" errors, including the store's
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::Store(err) => err.is_not_found(),
            _ => false,
        }
    }
}

/// Fail with [`DashboardError::MissingField`] when `value` is blank
pub(crate) fn require(form: &'static str, field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(DashboardError::MissingField { form, field })
    } else {
        Ok(())
    }
}

/// Result alias for dashboard operations
pub type Result<T, E = DashboardError> = std::result::Result<T, E>;
