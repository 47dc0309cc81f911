//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionHandle` is the app's one shared `SessionManager`. Its observer
//! feeds `AuthState` into an `RwSignal`, which route guards and chrome read.
//! Components never decode credentials themselves.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use parking_lot::Mutex;

use crate::auth::credential::CredentialError;
use crate::auth::guard::{self, AccessDecision};
use crate::auth::identity::{Identity, Role};
use crate::auth::menu::NavTarget;
use crate::auth::session::{SessionManager, SessionState, SubscriptionId};
use crate::net::channel::RequestChannel;
use crate::util::storage::{BrowserStorage, KeyValueStorage};

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<Identity>,
    pub loading: bool,
}

impl From<&SessionState> for AuthState {
    fn from(state: &SessionState) -> Self {
        Self {
            user: state.identity().cloned(),
            loading: matches!(state, SessionState::Resolving),
        }
    }
}

impl AuthState {
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    /// Guard decision for `target`, or `None` while the session is still
    /// resolving and no redirect should happen yet.
    #[must_use]
    pub fn access(&self, target: NavTarget) -> Option<AccessDecision> {
        if self.loading {
            return None;
        }
        Some(guard::evaluate(self.user.as_ref(), target.required_roles()))
    }
}

/// Shared, cloneable handle to the process-wide session manager.
pub struct SessionHandle<S = BrowserStorage> {
    manager: Arc<Mutex<SessionManager<S>>>,
    channel: RequestChannel,
}

impl<S> Clone for SessionHandle<S> {
    fn clone(&self) -> Self {
        Self {
            manager: Arc::clone(&self.manager),
            channel: self.channel.clone(),
        }
    }
}

impl<S: KeyValueStorage> SessionHandle<S> {
    pub fn new(manager: SessionManager<S>) -> Self {
        let channel = manager.channel().clone();
        Self {
            manager: Arc::new(Mutex::new(manager)),
            channel,
        }
    }

    /// Request channel carrying the session's header.
    #[must_use]
    pub fn channel(&self) -> &RequestChannel {
        &self.channel
    }

    pub fn initialize(&self) {
        self.manager.lock().initialize();
    }

    /// # Errors
    ///
    /// See [`SessionManager::login`].
    pub fn login(&self, raw: &str) -> Result<Identity, CredentialError> {
        self.manager.lock().login(raw)
    }

    pub fn logout(&self) {
        self.manager.lock().logout();
    }

    pub fn handle_upstream_rejection(&self, status: u16) -> bool {
        self.manager.lock().handle_upstream_rejection(status)
    }

    /// The observer runs with the manager locked and must not call back into
    /// this handle.
    pub fn subscribe(&self, observer: impl Fn(&SessionState) + Send + Sync + 'static) -> SubscriptionId {
        self.manager.lock().subscribe(observer)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.manager.lock().unsubscribe(id)
    }

    #[must_use]
    pub fn identity(&self) -> Option<Identity> {
        self.manager.lock().identity().cloned()
    }
}
