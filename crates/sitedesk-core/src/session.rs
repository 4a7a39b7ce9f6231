//! Active role and view
//!
//! Visibility comes from [`UserRole::allowed_views`]; it decides what the
//! sidebar shows and does not guard any data.

use crate::error::{DashboardError, Result};
use sitedesk_model::{UserRole, View};
use tracing::debug;

/// Who is looking, and at what
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleSession {
    role: UserRole,
    current_view: View,
}

impl RoleSession {
    /// Session for `role` on its landing view
    #[must_use]
    pub fn new(role: UserRole) -> Self {
        Self {
            role,
            current_view: role.default_view(),
        }
    }

    #[inline]
    #[must_use]
    pub fn role(&self) -> UserRole {
        self.role
    }

    #[inline]
    #[must_use]
    pub fn current_view(&self) -> View {
        self.current_view
    }

    /// Views in sidebar order
    #[inline]
    #[must_use]
    pub fn visible_views(&self) -> &'static [View] {
        self.role.allowed_views()
    }

    /// Change role, keeping the current view if the new role lists it
    pub fn switch_role(&mut self, role: UserRole) -> View {
        self.role = role;
        if !role.can_view(self.current_view) {
            self.current_view = role.default_view();
        }
        debug!(role = %role, view = %self.current_view, "role switched");
        self.current_view
    }

    /// Move to `view`
    ///
    /// # Errors
    /// [`DashboardError::ViewHidden`] if the role does not list `view`.
    pub fn navigate(&mut self, view: View) -> Result<()> {
        if !self.role.can_view(view) {
            return Err(DashboardError::ViewHidden {
                role: self.role,
                view,
            });
        }
        self.current_view = view;
        Ok(())
    }
}

impl Default for RoleSession {
    fn default() -> Self {
        Self::new(UserRole::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_view_when_still_allowed() {
        let mut session = RoleSession::new(UserRole::Ceo);
        session.navigate(View::Messaging).unwrap();
        assert_eq!(session.switch_role(UserRole::StoreManager), View::Messaging);
    }

    #[test]
    fn falls_back_to_first_allowed() {
        let mut session = RoleSession::new(UserRole::Ceo);
        session.navigate(View::Financials).unwrap();
        assert_eq!(session.switch_role(UserRole::Supervisor), View::Dashboard);
        assert_eq!(session.switch_role(UserRole::StoreManager), View::Inventory);
    }

    #[test]
    fn hidden_view_is_refused() {
        let mut session = RoleSession::new(UserRole::Hr);
        let err = session.navigate(View::Dpr).unwrap_err();
        assert!(matches!(err, DashboardError::ViewHidden { view: View::Dpr, .. }));
        assert_eq!(session.current_view(), View::Dashboard);
    }
}
