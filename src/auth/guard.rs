//! Role-based navigation decisions.
//!
//! `evaluate` is pure and cheap, so routes call it on every render instead of
//! caching a verdict that could outlive the identity it was made for.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::identity::{Identity, Role};

/// Login entry point for requests without a session.
pub const LOGIN_PATH: &str = "/";

/// Generic view for signed-in users lacking the required role.
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";

/// Outcome of a navigation check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    /// No identity; send the user to log in.
    DenyNoSession,
    /// Signed in, but the role is not in the target's set.
    DenyWrongRole,
}

/// Typed form of a denial, for callers that propagate with `?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    #[error("authentication required")]
    Unauthenticated,
    #[error("role not permitted for this view")]
    Forbidden,
}

impl AccessDecision {
    #[must_use]
    pub fn is_allowed(self) -> bool {
        self == Self::Allow
    }

    /// Where the navigation layer should send a denied request.
    #[must_use]
    pub fn redirect_path(self) -> Option<&'static str> {
        match self {
            Self::Allow => None,
            Self::DenyNoSession => Some(LOGIN_PATH),
            Self::DenyWrongRole => Some(UNAUTHORIZED_PATH),
        }
    }

    /// # Errors
    ///
    /// Returns the matching [`AccessError`] for either denial.
    pub fn into_result(self) -> Result<(), AccessError> {
        match self {
            Self::Allow => Ok(()),
            Self::DenyNoSession => Err(AccessError::Unauthenticated),
            Self::DenyWrongRole => Err(AccessError::Forbidden),
        }
    }
}

/// Decide whether `identity` may view a target requiring one of `required`.
///
/// `required == None` marks a target open to any signed-in user.
#[must_use]
pub fn evaluate(identity: Option<&Identity>, required: Option<&[Role]>) -> AccessDecision {
    let Some(identity) = identity else {
        return AccessDecision::DenyNoSession;
    };
    match required {
        None => AccessDecision::Allow,
        Some(roles) if identity.has_any_role(roles) => AccessDecision::Allow,
        Some(_) => AccessDecision::DenyWrongRole,
    }
}
