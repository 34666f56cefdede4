//! Role-based authorization policy.
//!
//! All permission decisions go through a single pure function instead of
//! ad-hoc role checks in each handler, so the rules are unit-testable
//! independent of any request plumbing.

use serde::{Deserialize, Serialize};

/// A user role, from most to least privileged staff plus the external roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full administrative control, including purging users.
    SuperAdmin,
    /// Day-to-day administration of configurations and users.
    Admin,
    /// Support staff with read access to configurations and history.
    Helpdesk,
    /// A delivery driver.
    Driver,
    /// A food vendor fulfilling orders.
    Vendor,
    /// A client placing orders.
    Client,
}

impl Role {
    /// Staff seniority rank; external roles all rank zero.
    fn seniority(self) -> u8 {
        match self {
            Role::SuperAdmin => 3,
            Role::Admin => 2,
            Role::Helpdesk => 1,
            Role::Driver | Role::Vendor | Role::Client => 0,
        }
    }
}

/// An action a user may attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Create, edit, import, or clone a client configuration.
    ManageConfiguration,
    /// View configuration presets.
    ViewConfiguration,
    /// Run a delivery calculation.
    RunCalculation,
    /// Save a calculation to history.
    SaveCalculation,
    /// View saved calculation history.
    ViewHistory,
    /// Change another user's role.
    ChangeUserRole,
    /// Permanently remove a user.
    PurgeUser,
}

/// Decides whether `actor` may perform `action`.
///
/// `target` is the role of the user being acted on and is only meaningful
/// for user-management actions; those are denied outright when no target is
/// given. An actor can never manage a user at or above their own seniority,
/// which rules out privilege escalation and peer demotion.
pub fn can_perform(actor: Role, action: Action, target: Option<Role>) -> bool {
    match action {
        Action::ManageConfiguration => {
            matches!(actor, Role::SuperAdmin | Role::Admin)
        }
        Action::ViewConfiguration => !matches!(actor, Role::Driver),
        Action::RunCalculation => true,
        Action::SaveCalculation => !matches!(actor, Role::Vendor | Role::Client),
        Action::ViewHistory => {
            matches!(actor, Role::SuperAdmin | Role::Admin | Role::Helpdesk)
        }
        Action::ChangeUserRole => {
            matches!(actor, Role::SuperAdmin | Role::Admin)
                && target.is_some_and(|t| actor.seniority() > t.seniority())
        }
        Action::PurgeUser => {
            actor == Role::SuperAdmin && target.is_some_and(|t| actor.seniority() > t.seniority())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// PL-001: only admins manage configurations
    #[test]
    fn test_only_admins_manage_configurations() {
        assert!(can_perform(Role::SuperAdmin, Action::ManageConfiguration, None));
        assert!(can_perform(Role::Admin, Action::ManageConfiguration, None));
        assert!(!can_perform(Role::Helpdesk, Action::ManageConfiguration, None));
        assert!(!can_perform(Role::Driver, Action::ManageConfiguration, None));
        assert!(!can_perform(Role::Vendor, Action::ManageConfiguration, None));
        assert!(!can_perform(Role::Client, Action::ManageConfiguration, None));
    }

    /// PL-002: everyone may run a calculation
    #[test]
    fn test_everyone_runs_calculations() {
        for role in [
            Role::SuperAdmin,
            Role::Admin,
            Role::Helpdesk,
            Role::Driver,
            Role::Vendor,
            Role::Client,
        ] {
            assert!(can_perform(role, Action::RunCalculation, None));
        }
    }

    /// PL-003: vendors and clients cannot save calculations
    #[test]
    fn test_save_denied_to_vendor_and_client() {
        assert!(can_perform(Role::Driver, Action::SaveCalculation, None));
        assert!(can_perform(Role::Helpdesk, Action::SaveCalculation, None));
        assert!(!can_perform(Role::Vendor, Action::SaveCalculation, None));
        assert!(!can_perform(Role::Client, Action::SaveCalculation, None));
    }

    /// PL-004: history is staff-only
    #[test]
    fn test_history_is_staff_only() {
        assert!(can_perform(Role::Helpdesk, Action::ViewHistory, None));
        assert!(!can_perform(Role::Driver, Action::ViewHistory, None));
    }

    /// PL-005: role changes honor target seniority
    #[test]
    fn test_role_change_requires_more_senior_actor() {
        assert!(can_perform(Role::SuperAdmin, Action::ChangeUserRole, Some(Role::Admin)));
        assert!(can_perform(Role::Admin, Action::ChangeUserRole, Some(Role::Driver)));
        // No peer or upward changes.
        assert!(!can_perform(Role::Admin, Action::ChangeUserRole, Some(Role::Admin)));
        assert!(!can_perform(Role::Admin, Action::ChangeUserRole, Some(Role::SuperAdmin)));
        // No target, no decision.
        assert!(!can_perform(Role::SuperAdmin, Action::ChangeUserRole, None));
    }

    /// PL-006: purge is super-admin only and never against a peer
    #[test]
    fn test_purge_is_super_admin_only() {
        assert!(can_perform(Role::SuperAdmin, Action::PurgeUser, Some(Role::Client)));
        assert!(!can_perform(Role::SuperAdmin, Action::PurgeUser, Some(Role::SuperAdmin)));
        assert!(!can_perform(Role::Admin, Action::PurgeUser, Some(Role::Client)));
        assert!(!can_perform(Role::SuperAdmin, Action::PurgeUser, None));
    }

    /// PL-007: drivers cannot view configurations, vendors and clients can
    #[test]
    fn test_view_configuration_matrix() {
        assert!(can_perform(Role::Vendor, Action::ViewConfiguration, None));
        assert!(can_perform(Role::Client, Action::ViewConfiguration, None));
        assert!(!can_perform(Role::Driver, Action::ViewConfiguration, None));
    }
}
