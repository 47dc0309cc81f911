//! Shared outbound request channel and its bearer header.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every REST call in the client goes through one `RequestChannel`. Clones
//! share the same header slot, so attaching or removing the credential is a
//! global switch: the last `apply` wins. Only the session manager calls
//! `apply`; everything else reads.

#[cfg(test)]
#[path = "channel_test.rs"]
mod channel_test;

use std::sync::Arc;

use parking_lot::RwLock;

use crate::auth::credential::Credential;

/// Name of the header carrying the bearer credential.
pub const AUTHORIZATION: &str = "Authorization";

#[derive(Debug, Default)]
struct ChannelState {
    authorization: Option<String>,
}

/// Cheaply cloneable handle to the single shared request channel.
#[derive(Clone, Debug)]
pub struct RequestChannel {
    base_url: Arc<str>,
    state: Arc<RwLock<ChannelState>>,
}

impl RequestChannel {
    /// Create a channel rooted at `base_url` with no credential attached.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: Arc::from(base_url.trim_end_matches('/')),
            state: Arc::default(),
        }
    }

    /// API root every request path is joined to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/auth/token/`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Current `Authorization` header value, if a credential is attached.
    #[must_use]
    pub fn authorization(&self) -> Option<String> {
        self.state.read().authorization.clone()
    }

    /// Whether requests currently carry a credential.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.read().authorization.is_some()
    }

    /// Build a `GET` request with the current header applied.
    #[cfg(feature = "csr")]
    pub fn get(&self, path: &str) -> gloo_net::http::RequestBuilder {
        self.authorize(gloo_net::http::Request::get(&self.url(path)))
    }

    /// Build a `POST` request with the current header applied.
    #[cfg(feature = "csr")]
    pub fn post(&self, path: &str) -> gloo_net::http::RequestBuilder {
        self.authorize(gloo_net::http::Request::post(&self.url(path)))
    }

    #[cfg(feature = "csr")]
    fn authorize(&self, builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
        match self.authorization() {
            Some(value) => builder.header(AUTHORIZATION, &value),
            None => builder,
        }
    }
}

/// Attach `credential` to every subsequent request on `channel`, or detach
/// the header when `credential` is `None`.
pub fn apply(channel: &RequestChannel, credential: Option<&Credential>) {
    let mut state = channel.state.write();
    state.authorization = credential.map(Credential::bearer_value);
    log::debug!(
        "request channel authorization {}",
        if state.authorization.is_some() { "attached" } else { "cleared" }
    );
}
