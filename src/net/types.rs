//! Wire DTOs for the helpdesk authentication endpoints.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::auth::identity::Role;

/// Body of `POST /auth/token/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

/// Successful response from `POST /auth/token/`. Only `access` is used;
/// refresh rotation is not implemented.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

/// Body of `POST /auth/register/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    /// Role requested at sign-up. The server decides what is actually granted.
    pub role: Role,
}
