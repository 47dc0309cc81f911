//! Client session configuration.
//!
//! The browser has no process environment, so the API root is baked in at
//! build time from `HELPDESK_API_BASE`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// API root used when `HELPDESK_API_BASE` is not set at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

/// `localStorage` slot holding the raw credential.
pub const DEFAULT_STORAGE_KEY: &str = "token";

/// Whether the client rejects credentials whose `exp` claim has passed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExpiryPolicy {
    /// Trust the credential until the API rejects it.
    #[default]
    Ignore,
    /// Treat an expired `exp` claim like an undecodable credential.
    Enforce,
}

/// Settings for the session core and its request channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub api_base: String,
    pub storage_key: String,
    pub expiry: ExpiryPolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            expiry: ExpiryPolicy::default(),
        }
    }
}

impl SessionConfig {
    /// Defaults, with the API root taken from `HELPDESK_API_BASE` when it was
    /// set at compile time.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::with_api_base(option_env!("HELPDESK_API_BASE"))
    }

    fn with_api_base(api_base: Option<&str>) -> Self {
        let api_base = api_base
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_API_BASE);
        Self {
            api_base: api_base.to_owned(),
            ..Self::default()
        }
    }
}
