//! REST helpers for the helpdesk authentication endpoints.
//!
//! Browser build (`csr`): real HTTP calls via `gloo-net`, issued through the
//! shared [`RequestChannel`] so the session's bearer header is applied.
//! Native builds and tests: `ApiError::Unavailable`.
//!
//! ERROR HANDLING
//! ==============
//! A 401 on a normal request surfaces as `ApiError::UpstreamRejected`. This
//! module does not end the session itself; callers pass the status to
//! `SessionManager::handle_upstream_rejection`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::channel::RequestChannel;
#[cfg(feature = "csr")]
use super::types::TokenResponse;
use super::types::{RegisterRequest, TokenRequest};

/// Exchanges username/password for a bearer credential.
pub const TOKEN_ENDPOINT: &str = "/auth/token/";

/// Creates an account.
pub const REGISTER_ENDPOINT: &str = "/auth/register/";

/// Failure talking to the helpdesk API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    /// The server refused the credential (expired, revoked, or wrong password).
    #[error("request rejected by server: {0}")]
    UpstreamRejected(u16),
    #[error("request failed: {0}")]
    Status(u16),
    /// Non-2xx answer whose body explained the failure.
    #[error("{detail}")]
    Refused { status: u16, detail: String },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// HTTP status carried by the error, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UpstreamRejected(status) | Self::Status(status) | Self::Refused { status, .. } => Some(*status),
            Self::Network(_) | Self::Decode(_) | Self::Unavailable => None,
        }
    }
}

/// Whether `status` means the server no longer accepts the bearer credential.
#[must_use]
pub fn is_credential_rejection(status: u16) -> bool {
    status == 401
}

/// Map a response status to `Ok` for 2xx and a typed error otherwise.
///
/// # Errors
///
/// Returns `UpstreamRejected` for 401 and `Status` for any other non-2xx code.
pub fn check_status(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else if is_credential_rejection(status) {
        Err(ApiError::UpstreamRejected(status))
    } else {
        Err(ApiError::Status(status))
    }
}

/// Human-readable reason from an error body.
///
/// Reads `{"detail": "..."}`, else the first message of a field-error map
/// such as `{"username": ["already taken"]}`.
#[must_use]
pub fn error_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let object = value.as_object()?;
    if let Some(detail) = object.get("detail").and_then(serde_json::Value::as_str) {
        return Some(detail.to_owned());
    }
    object.iter().find_map(|(field, messages)| {
        let message = match messages {
            serde_json::Value::String(s) => Some(s.as_str()),
            serde_json::Value::Array(items) => items.first().and_then(serde_json::Value::as_str),
            _ => None,
        }?;
        Some(format!("{field}: {message}"))
    })
}

/// Like [`check_status`], but prefers the body's explanation for non-2xx
/// answers other than 401.
///
/// # Errors
///
/// Returns `UpstreamRejected` for 401, `Refused` when the body carries a
/// reason, and `Status` otherwise.
pub fn check_response(status: u16, body: &str) -> Result<(), ApiError> {
    match check_status(status) {
        Err(ApiError::Status(status)) => Err(match error_detail(body) {
            Some(detail) => ApiError::Refused { status, detail },
            None => ApiError::Status(status),
        }),
        other => other,
    }
}

/// Exchange credentials at `POST /auth/token/` and return the `access` token.
///
/// The returned string is unvalidated; hand it to `SessionManager::login`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the server rejects the
/// username/password, or the body has no `access` field.
pub async fn obtain_token(channel: &RequestChannel, username: &str, password: &str) -> Result<String, ApiError> {
    let body = TokenRequest {
        username: username.to_owned(),
        password: password.to_owned(),
    };
    #[cfg(feature = "csr")]
    {
        let resp = channel
            .post(TOKEN_ENDPOINT)
            .json(&body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_status(resp.status())?;
        let token: TokenResponse = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(token.access)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (channel, body);
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /auth/register/`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the server responds with a
/// non-2xx status; the server's stated reason is kept in `Refused`.
pub async fn register(channel: &RequestChannel, request: &RegisterRequest) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = channel
            .post(REGISTER_ENDPOINT)
            .json(request)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if resp.ok() {
            return Ok(());
        }
        let body = resp.text().await.unwrap_or_default();
        check_response(resp.status(), &body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (channel, request);
        Err(ApiError::Unavailable)
    }
}
