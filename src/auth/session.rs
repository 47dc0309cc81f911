//! Authoritative session state: the credential/identity pair.
//!
//! ARCHITECTURE
//! ============
//! `SessionManager` is the single writer of three things that must agree:
//! the persisted credential slot, the in-memory credential + identity, and
//! the request channel's `Authorization` header. All of them change inside
//! `commit`, and transitions take `&mut self`, so two logins/logouts can never
//! interleave.
//!
//! ```text
//!   Resolving     --initialize, stored credential ok-->  Authenticated
//!   Resolving     --initialize, missing or bad------->  Anonymous
//!   Anonymous     --login(ok)------------------------>  Authenticated
//!   Authenticated --login(ok)------------------------>  Authenticated (replaced)
//!   Authenticated --logout / 401--------------------->  Anonymous
//! ```
//!
//! Observers are plain callbacks; the Leptos app bridges them into a signal.
//! Callbacks run while the caller holds the manager, so they must not call
//! back into it.
//!
//! Expiry is only checked when `ExpiryPolicy::Enforce` is configured, and
//! then only at initialize/login. Otherwise an expired credential stays
//! authenticated until the API answers 401 and the caller routes that into
//! `handle_upstream_rejection`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use super::credential::{Claims, Credential, CredentialError};
use super::identity::Identity;
use super::store::CredentialStore;
use crate::config::{ExpiryPolicy, SessionConfig};
use crate::net::channel::{self, RequestChannel};
use crate::util::clock;
use crate::util::storage::KeyValueStorage;

/// Observable lifecycle state of the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// Constructed but not yet reconciled with storage.
    Resolving,
    Anonymous,
    Authenticated(Identity),
}

impl SessionState {
    /// Identity when authenticated.
    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Authenticated(identity) => Some(identity),
            Self::Resolving | Self::Anonymous => None,
        }
    }
}

/// Handle returned by [`SessionManager::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn Fn(&SessionState) + Send + Sync>;

/// Owns the session and keeps storage, memory, and the request header in step.
pub struct SessionManager<S> {
    store: CredentialStore<S>,
    channel: RequestChannel,
    expiry: ExpiryPolicy,
    credential: Option<Credential>,
    state: SessionState,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl<S: KeyValueStorage> SessionManager<S> {
    /// Create a manager in `Resolving` without touching storage.
    pub fn new(backend: S, channel: RequestChannel, config: &SessionConfig) -> Self {
        Self {
            store: CredentialStore::new(backend, config.storage_key.clone()),
            channel,
            expiry: config.expiry,
            credential: None,
            state: SessionState::Resolving,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Create a manager and immediately reconcile it with storage.
    pub fn start(backend: S, channel: RequestChannel, config: &SessionConfig) -> Self {
        let mut manager = Self::new(backend, channel, config);
        manager.initialize();
        manager
    }

    /// Reconcile in-memory state with the persisted credential.
    ///
    /// A stored credential that fails to decode (or has expired under
    /// `ExpiryPolicy::Enforce`) is cleared and the session ends `Anonymous`.
    /// Safe to call again later; the result always reflects storage.
    pub fn initialize(&mut self) {
        let Some(raw) = self.store.read() else {
            log::debug!("no stored credential; session anonymous");
            self.commit(None);
            return;
        };
        match self.validate(raw) {
            Ok((credential, claims)) => {
                let identity = claims.identity();
                log::info!("restored session for {} ({})", identity.username, identity.role);
                self.commit(Some((credential, identity)));
            }
            Err(e) => {
                log::warn!("discarding stored credential: {e}");
                self.store.clear();
                self.commit(None);
            }
        }
    }

    /// Validate `raw` and make it the active session.
    ///
    /// Re-login while authenticated fully replaces the previous identity.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError`] when `raw` does not decode or is expired
    /// under `ExpiryPolicy::Enforce`. The session is left exactly as it was.
    pub fn login(&mut self, raw: &str) -> Result<Identity, CredentialError> {
        let (credential, claims) = self.validate(raw.to_owned()).inspect_err(|e| {
            log::warn!("login rejected: {e}");
        })?;
        let identity = claims.identity();
        self.store.write(credential.as_str());
        log::info!("logged in as {} ({})", identity.username, identity.role);
        self.commit(Some((credential, identity.clone())));
        Ok(identity)
    }

    /// End the session. Always succeeds; calling it while anonymous changes nothing.
    pub fn logout(&mut self) {
        self.store.clear();
        if self.credential.is_some() {
            log::info!("logged out");
        }
        self.commit(None);
    }

    /// React to an API response status. A 401 means the server no longer
    /// accepts the credential, which is handled as a logout.
    ///
    /// Returns `true` when the session was ended.
    pub fn handle_upstream_rejection(&mut self, status: u16) -> bool {
        if !crate::net::api::is_credential_rejection(status) || self.credential.is_none() {
            return false;
        }
        log::warn!("api rejected credential with status {status}; ending session");
        self.logout();
        true
    }

    /// Register `observer` for state changes. It is called once right away
    /// with the current state, then after every transition that changes it.
    pub fn subscribe(&mut self, observer: impl Fn(&SessionState) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        observer(&self.state);
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        self.state.identity()
    }

    #[must_use]
    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }

    /// The request channel whose header this manager drives.
    #[must_use]
    pub fn channel(&self) -> &RequestChannel {
        &self.channel
    }

    /// Whether persistence has fallen back to memory only.
    #[must_use]
    pub fn is_persistence_degraded(&self) -> bool {
        self.store.is_degraded()
    }

    fn validate(&self, raw: String) -> Result<(Credential, Claims), CredentialError> {
        let (credential, claims) = Credential::parse(raw)?;
        if self.expiry == ExpiryPolicy::Enforce && claims.is_expired_at(clock::now_unix_seconds()) {
            return Err(CredentialError::Expired);
        }
        Ok((credential, claims))
    }

    // Sole writer of credential, state, and the channel header.
    fn commit(&mut self, next: Option<(Credential, Identity)>) {
        let state = match next {
            Some((credential, identity)) => {
                self.credential = Some(credential);
                SessionState::Authenticated(identity)
            }
            None => {
                self.credential = None;
                SessionState::Anonymous
            }
        };
        channel::apply(&self.channel, self.credential.as_ref());
        if state == self.state {
            return;
        }
        self.state = state;
        for (_, observer) in &self.observers {
            observer(&self.state);
        }
    }
}
