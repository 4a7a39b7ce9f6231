//! Dashboard configuration
//!
//! [`DashboardConfig`] is built in code with `with_*` methods or loaded
//! from TOML. Every field has a default, so a config file only needs the
//! keys it changes.
//!
//! ```toml
//! project_name = "TRIIVANTA GOLD"
//! initial_role = "Project Manager"
//! default_theme = "light"
//! reference_date = "2026-02-15"
//! log_filter = "sitedesk=debug"
//! ```

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use sitedesk_model::{Theme, UserRole};
use std::path::{Path, PathBuf};

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("cannot read {path}: {source}")]
    Io {
        /// Config file path
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// TOML syntax or schema error
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Dashboard configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Project name used in report titles
    pub project_name: String,
    /// Role active when the dashboard opens
    pub initial_role: UserRole,
    /// Theme used when no preference is stored
    pub default_theme: Theme,
    /// Fixed "today"; the local date is used when unset
    pub reference_date: Option<NaiveDate>,
    /// Employee id of the signed-in user, for messaging
    pub current_user: String,
    /// Number of brokers in the top-performers list
    pub top_brokers: usize,
    /// `tracing` filter directive, overridden by `RUST_LOG`
    pub log_filter: String,
    /// Log output format
    pub log_format: LogFormat,
}

impl DashboardConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration matching the bundled demo data (today is 2026-02-15)
    #[must_use]
    pub fn demo() -> Self {
        Self::new().with_reference_date(NaiveDate::from_ymd_opt(2026, 2, 15))
    }

    /// Parse a TOML document
    ///
    /// # Errors
    /// [`ConfigError::Parse`] for malformed TOML or unknown values.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Load a TOML file
    ///
    /// # Errors
    /// [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`DashboardConfig::from_toml_str`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// With initial role
    #[inline]
    #[must_use]
    pub fn with_role(mut self, role: UserRole) -> Self {
        self.initial_role = role;
        self
    }

    /// With default theme
    #[inline]
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.default_theme = theme;
        self
    }

    /// With fixed reference date
    #[inline]
    #[must_use]
    pub fn with_reference_date(mut self, date: Option<NaiveDate>) -> Self {
        self.reference_date = date;
        self
    }

    /// With signed-in employee
    #[inline]
    #[must_use]
    pub fn with_current_user(mut self, id: impl Into<String>) -> Self {
        self.current_user = id.into();
        self
    }

    /// With log filter
    #[inline]
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// The dashboard's notion of today
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Local::now().date_naive())
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            project_name: "TRIIVANTA GOLD".to_string(),
            initial_role: UserRole::Ceo,
            default_theme: Theme::Dark,
            reference_date: None,
            current_user: "EMP-001".to_string(),
            top_brokers: 5,
            log_filter: "info".to_string(),
            log_format: LogFormat::Text,
        }
    }
}
