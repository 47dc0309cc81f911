//! Bearer credential decoding.
//!
//! A credential is three dot-separated base64url segments: header, claims,
//! signature. Only the claims segment is read. The signature is never
//! verified here; the issuing service is the trust boundary, so these claims
//! are fit for UI decisions and must not be relied on anywhere the server
//! does not re-check them.
//!
//! A credential either decodes completely or is rejected; callers never see
//! partially populated claims.

#[cfg(test)]
#[path = "credential_test.rs"]
mod credential_test;

use std::fmt;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

use super::identity::{Identity, Role, SubjectId};

/// Why a credential string was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialError {
    #[error("malformed credential: {0}")]
    Malformed(String),
    #[error("unsupported role: {0}")]
    UnsupportedRole(String),
    #[error("credential expired")]
    Expired,
}

/// Decoded claims payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Claims {
    pub subject_id: SubjectId,
    pub role: Role,
    pub username: String,
    /// Expiry in seconds since the Unix epoch, when the issuer sets one.
    pub exp: Option<i64>,
}

impl Claims {
    /// Whether the claims carry an expiry at or before `now` (Unix seconds).
    /// Claims without `exp` never expire.
    #[must_use]
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.exp.is_some_and(|exp| exp <= now)
    }

    /// Identity derived from these claims.
    #[must_use]
    pub fn identity(&self) -> Identity {
        Identity {
            id: self.subject_id.clone(),
            role: self.role,
            username: self.username.clone(),
        }
    }
}

// `user_id` is the issuer's name for the subject; `subject_id` wins when both
// are present.
#[derive(Deserialize)]
struct WireClaims {
    #[serde(default)]
    subject_id: Option<SubjectId>,
    #[serde(default)]
    user_id: Option<SubjectId>,
    role: String,
    username: String,
    // NumericDate: integer or fractional seconds.
    #[serde(default)]
    exp: Option<f64>,
}

#[allow(clippy::cast_possible_truncation)]
fn whole_seconds(exp: f64) -> i64 {
    exp.floor() as i64
}

/// A raw credential that has passed [`decode`].
///
/// Only constructible through [`Credential::parse`], so holding one implies
/// the string is well formed.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Decode `raw` and keep it alongside its claims.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`decode`].
    pub fn parse(raw: impl Into<String>) -> Result<(Self, Claims), CredentialError> {
        let raw = raw.into();
        let claims = decode(&raw)?;
        Ok((Self(raw), claims))
    }

    /// The credential exactly as issued.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for an `Authorization` header.
    #[must_use]
    pub fn bearer_value(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

// Credentials are secrets; keep them out of debug logs.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

fn claims_segment(raw: &str) -> Result<&str, CredentialError> {
    let segments: Vec<&str> = raw.split('.').collect();
    if segments.len() != 3 {
        return Err(CredentialError::Malformed(format!(
            "expected 3 segments, found {}",
            segments.len()
        )));
    }
    if segments.iter().any(|s| s.is_empty()) {
        return Err(CredentialError::Malformed("empty segment".to_owned()));
    }
    Ok(segments[1])
}

fn decode_segment(segment: &str) -> Result<Vec<u8>, CredentialError> {
    URL_SAFE_NO_PAD
        .decode(segment.trim_end_matches('='))
        .map_err(|e| CredentialError::Malformed(format!("claims segment is not base64url: {e}")))
}

/// Decode the claims segment of a bearer credential.
///
/// Does not check the signature or the expiry.
///
/// # Errors
///
/// - [`CredentialError::Malformed`] for a wrong segment count, an empty
///   segment, non-base64url claims, or a payload missing required fields.
/// - [`CredentialError::UnsupportedRole`] when `role` is outside the known set.
pub fn decode(raw: &str) -> Result<Claims, CredentialError> {
    let bytes = decode_segment(claims_segment(raw)?)?;
    let wire: WireClaims = serde_json::from_slice(&bytes)
        .map_err(|e| CredentialError::Malformed(format!("claims payload: {e}")))?;
    let subject_id = wire
        .subject_id
        .or(wire.user_id)
        .ok_or_else(|| CredentialError::Malformed("claims payload: missing field `subject_id`".to_owned()))?;
    let role = Role::parse(&wire.role).ok_or(CredentialError::UnsupportedRole(wire.role))?;
    Ok(Claims {
        subject_id,
        role,
        username: wire.username,
        exp: wire.exp.map(whole_seconds),
    })
}
