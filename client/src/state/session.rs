//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by route guards and the header; written only by the named operations
//! below (login completion, logout, bootstrap). Identity presence *is* the
//! authenticated flag, so an authenticated session without an email cannot be
//! represented.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::{Identity, Role};

/// How the startup session check ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BootstrapOutcome {
    Authenticated(Identity),
    Anonymous,
}

/// Snapshot of the client session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    identity: Option<Identity>,
    initialized: bool,
}

impl Session {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.identity.as_ref().map(|i| i.email.as_str())
    }

    #[must_use]
    pub fn role(&self) -> Option<&Role> {
        self.identity.as_ref().and_then(|i| i.role.as_ref())
    }

    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn mark_logged_in(&mut self, identity: Identity) {
        self.identity = Some(identity);
    }

    pub fn mark_logged_out(&mut self) {
        self.identity = None;
    }

    pub fn bootstrap_resolved(&mut self, outcome: BootstrapOutcome) {
        self.initialized = true;
        match outcome {
            BootstrapOutcome::Authenticated(identity) => self.mark_logged_in(identity),
            BootstrapOutcome::Anonymous => self.mark_logged_out(),
        }
    }
}

/// Reactive, context-provided handle to the single [`Session`].
///
/// Each operation is one signal update, so readers never observe a
/// half-applied change.
#[derive(Clone, Copy, Debug)]
pub struct SessionStore(RwSignal<Session>);

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self(RwSignal::new(Session::default()))
    }

    /// Tracked read; use inside effects and views.
    pub fn get(&self) -> Session {
        self.0.get()
    }

    pub fn get_untracked(&self) -> Session {
        self.0.get_untracked()
    }

    pub fn mark_logged_in(&self, identity: Identity) {
        self.0.update(|s| s.mark_logged_in(identity));
    }

    pub fn mark_logged_out(&self) {
        self.0.update(Session::mark_logged_out);
    }

    pub fn bootstrap_resolved(&self, outcome: BootstrapOutcome) {
        self.0.update(|s| s.bootstrap_resolved(outcome));
    }
}
