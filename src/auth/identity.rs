//! Identity shape shared by the session, guard, and menu layers.
//!
//! DESIGN
//! ======
//! `Identity` is the only view of the signed-in subject that UI code sees.
//! It is derived 1:1 from decoded claims and never edited in place; a new
//! credential always produces a fresh value.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of roles issued by the helpdesk service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Customer filing and tracking their own tickets.
    User,
    /// Support agent working assigned tickets.
    Agent,
    /// Administrator managing users and assignments.
    Admin,
}

impl Role {
    /// Every role, in privilege order.
    pub const ALL: [Role; 3] = [Role::User, Role::Agent, Role::Admin];

    /// Parse the wire name of a role. Matching is exact.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "user" => Some(Self::User),
            "agent" => Some(Self::Agent),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    /// Wire name of the role.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Agent => "agent",
            Self::Admin => "admin",
        }
    }

    /// Title shown in the page header for this role.
    #[must_use]
    pub fn header_title(self) -> &'static str {
        match self {
            Self::Admin => "Admin Management",
            Self::Agent => "Agent Management",
            Self::User => "User Management",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque subject identifier. The issuer may encode it as a JSON number or
/// string; both are kept exactly as issued.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubjectId {
    Number(i64),
    Text(String),
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Client-trusted view of the signed-in subject.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: SubjectId,
    pub role: Role,
    pub username: String,
}

impl Identity {
    /// Whether this identity holds one of `roles`.
    #[must_use]
    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        roles.contains(&self.role)
    }
}
