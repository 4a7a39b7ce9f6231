//! Role-based view visibility
//!
//! A static table from operator role to the dashboard views that role is
//! shown. This is a presentation hint only; nothing here enforces access
//! to the underlying data.

use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dashboard views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum View {
    /// Overview
    Dashboard,
    /// Plot map
    SiteLayout,
    /// Budget and spend
    Financials,
    /// Plot sales
    Sales,
    /// Project phases
    Timeline,
    /// Lead pipeline
    SalesPipeline,
    /// Broker management
    Brokers,
    /// Document folders
    Documents,
    /// Material stock
    Inventory,
    /// Daily progress reports
    Dpr,
    /// Employee management
    Employees,
    /// Internal chat
    Messaging,
}

impl View {
    /// Every view in sidebar order
    pub const ALL: [View; 12] = [
        View::Dashboard,
        View::SiteLayout,
        View::Financials,
        View::Sales,
        View::Timeline,
        View::SalesPipeline,
        View::Brokers,
        View::Documents,
        View::Inventory,
        View::Dpr,
        View::Employees,
        View::Messaging,
    ];

    /// Title shown in the header
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::SiteLayout => "Site Layout",
            View::Financials => "Financials",
            View::Sales => "Sales",
            View::Timeline => "Project Timeline",
            View::SalesPipeline => "Sales Pipeline",
            View::Brokers => "Broker Management",
            View::Documents => "Documents",
            View::Inventory => "Inventory",
            View::Dpr => "Daily Progress Report",
            View::Employees => "Employee Management",
            View::Messaging => "Messaging",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Operator roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UserRole {
    /// Chief executive: every view
    #[default]
    #[serde(rename = "CEO")]
    Ceo,
    /// Project manager
    #[serde(rename = "Project Manager")]
    ProjectManager,
    /// Site supervisor
    Supervisor,
    /// Store manager
    #[serde(rename = "Store Manager")]
    StoreManager,
    /// Human resources
    #[serde(rename = "HR")]
    Hr,
}

impl UserRole {
    /// Every role
    pub const ALL: [UserRole; 5] = [
        UserRole::Ceo,
        UserRole::ProjectManager,
        UserRole::Supervisor,
        UserRole::StoreManager,
        UserRole::Hr,
    ];

    /// Display label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            UserRole::Ceo => "CEO",
            UserRole::ProjectManager => "Project Manager",
            UserRole::Supervisor => "Supervisor",
            UserRole::StoreManager => "Store Manager",
            UserRole::Hr => "HR",
        }
    }

    /// Views this role is shown, in sidebar order
    #[must_use]
    pub const fn allowed_views(&self) -> &'static [View] {
        match self {
            UserRole::Ceo => &[
                View::Dashboard,
                View::SiteLayout,
                View::Financials,
                View::Sales,
                View::Timeline,
                View::SalesPipeline,
                View::Brokers,
                View::Inventory,
                View::Dpr,
                View::Documents,
                View::Employees,
                View::Messaging,
            ],
            UserRole::ProjectManager => &[
                View::Dashboard,
                View::SiteLayout,
                View::Financials,
                View::Sales,
                View::Timeline,
                View::SalesPipeline,
                View::Inventory,
                View::Dpr,
                View::Documents,
                View::Messaging,
            ],
            UserRole::Supervisor => &[
                View::Dashboard,
                View::SiteLayout,
                View::Timeline,
                View::Inventory,
                View::Dpr,
                View::Messaging,
            ],
            UserRole::StoreManager => &[View::Inventory, View::Messaging],
            UserRole::Hr => &[
                View::Dashboard,
                View::Brokers,
                View::Documents,
                View::Employees,
                View::Messaging,
            ],
        }
    }

    /// Check whether the role lists `view`
    #[inline]
    #[must_use]
    pub fn can_view(&self, view: View) -> bool {
        self.allowed_views().contains(&view)
    }

    /// Landing view: first allowed view, or the dashboard
    #[inline]
    #[must_use]
    pub fn default_view(&self) -> View {
        self.allowed_views().first().copied().unwrap_or(View::Dashboard)
    }

    /// Whether the role gets the PDF dashboard export
    #[inline]
    #[must_use]
    pub fn can_export_dashboard(&self) -> bool {
        matches!(self, UserRole::Ceo | UserRole::ProjectManager)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserRole::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ModelError::unknown("role", s))
    }
}

/// Color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light palette
    Light,
    /// Dark palette
    #[default]
    Dark,
}

impl Theme {
    /// Stored value (`light` / `dark`)
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other theme
    #[inline]
    #[must_use]
    pub const fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl FromStr for Theme {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ModelError::unknown("theme", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ceo_sees_every_view() {
        for view in View::ALL {
            assert!(UserRole::Ceo.can_view(view), "{view}");
        }
    }

    #[test]
    fn store_manager_lands_on_inventory() {
        assert_eq!(UserRole::StoreManager.default_view(), View::Inventory);
        assert!(!UserRole::StoreManager.can_view(View::Dashboard));
    }

    #[test]
    fn hr_lacks_site_views() {
        assert!(UserRole::Hr.can_view(View::Employees));
        assert!(!UserRole::Hr.can_view(View::Dpr));
        assert!(!UserRole::Hr.can_view(View::Financials));
    }

    #[test]
    fn role_parse_roundtrip() {
        for role in UserRole::ALL {
            assert_eq!(role.as_str().parse::<UserRole>().unwrap(), role);
        }
        assert!("Janitor".parse::<UserRole>().is_err());
    }

    #[test]
    fn theme_toggle_and_parse() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert!("sepia".parse::<Theme>().is_err());
    }
}
