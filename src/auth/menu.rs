//! Navigation targets and the role menu shown in chrome.
//!
//! DESIGN
//! ======
//! The tables here are static. `visible_targets` only drives which links the
//! sidebar renders; it grants nothing. Each target's `required_roles` is what
//! the route guard enforces.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use super::guard::{LOGIN_PATH, UNAUTHORIZED_PATH};
use super::identity::Role;

/// Every routable view in the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavTarget {
    Login,
    Register,
    CreateTicket,
    Tickets,
    AgentDashboard,
    AdminDashboard,
    Unauthorized,
}

const ANONYMOUS_MENU: &[NavTarget] = &[NavTarget::Login, NavTarget::Register];
const USER_MENU: &[NavTarget] = &[NavTarget::CreateTicket, NavTarget::Tickets];
const AGENT_MENU: &[NavTarget] = &[NavTarget::AgentDashboard];
const ADMIN_MENU: &[NavTarget] = &[NavTarget::AdminDashboard];

const ANY_SIGNED_IN: &[Role] = &[Role::User, Role::Agent, Role::Admin];
const AGENT_ONLY: &[Role] = &[Role::Agent];
const ADMIN_ONLY: &[Role] = &[Role::Admin];

impl NavTarget {
    pub const ALL: [NavTarget; 7] = [
        NavTarget::Login,
        NavTarget::Register,
        NavTarget::CreateTicket,
        NavTarget::Tickets,
        NavTarget::AgentDashboard,
        NavTarget::AdminDashboard,
        NavTarget::Unauthorized,
    ];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => LOGIN_PATH,
            Self::Register => "/register",
            Self::CreateTicket => "/create",
            Self::Tickets => "/tickets",
            Self::AgentDashboard => "/agent",
            Self::AdminDashboard => "/admin",
            Self::Unauthorized => UNAUTHORIZED_PATH,
        }
    }

    /// Link text in the sidebar.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Register => "Register",
            Self::CreateTicket => "New Ticket",
            Self::Tickets => "Tickets Logs",
            Self::AgentDashboard => "Agent Dashboard",
            Self::AdminDashboard => "Admin Dashboard",
            Self::Unauthorized => "Unauthorized",
        }
    }

    /// Roles allowed through the guard, or `None` for public views that
    /// render without a session.
    #[must_use]
    pub fn required_roles(self) -> Option<&'static [Role]> {
        match self {
            Self::Login | Self::Register | Self::Unauthorized => None,
            Self::CreateTicket | Self::Tickets => Some(ANY_SIGNED_IN),
            Self::AgentDashboard => Some(AGENT_ONLY),
            Self::AdminDashboard => Some(ADMIN_ONLY),
        }
    }

    /// Whether the view is reachable without a session.
    #[must_use]
    pub fn is_public(self) -> bool {
        self.required_roles().is_none()
    }

    /// Look a target up by its route path.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.path() == path)
    }

    /// Landing view right after login.
    #[must_use]
    pub fn home_for(role: Role) -> Self {
        match role {
            Role::Admin => Self::AdminDashboard,
            Role::Agent => Self::AgentDashboard,
            Role::User => Self::Tickets,
        }
    }
}

/// Sidebar links for `role`; `None` is the anonymous menu.
#[must_use]
pub fn visible_targets(role: Option<Role>) -> &'static [NavTarget] {
    match role {
        None => ANONYMOUS_MENU,
        Some(Role::User) => USER_MENU,
        Some(Role::Agent) => AGENT_MENU,
        Some(Role::Admin) => ADMIN_MENU,
    }
}
