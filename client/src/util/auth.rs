//! Route guard shared by protected pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is unknown until bootstrap resolves, so every protected route
//! stays `Pending` (renders nothing, redirects nowhere) until then. After
//! that the guard re-evaluates on every session change; a logout on a
//! protected page redirects again.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use super::locale::{Locale, localized};
use super::navigation::LOGIN_PATH;
use crate::net::types::Role;
use crate::state::session::{Session, SessionStore};

/// Where wrong-role users are sent, relative to the locale.
pub const FALLBACK_PATH: &str = "/";

/// Who may see a route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardPolicy {
    pub require_auth: bool,
    /// Empty means any role.
    pub allowed_roles: Vec<Role>,
}

impl Default for GuardPolicy {
    fn default() -> Self {
        Self { require_auth: true, allowed_roles: Vec::new() }
    }
}

impl GuardPolicy {
    /// Signed-in users holding one of `roles`.
    #[must_use]
    pub fn roles(roles: &[&str]) -> Self {
        Self { require_auth: true, allowed_roles: roles.iter().map(|r| Role::new(r)).collect() }
    }

    #[must_use]
    pub fn permits(&self, role: Option<&Role>) -> bool {
        self.allowed_roles.is_empty() || role.is_some_and(|r| self.allowed_roles.contains(r))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
    Pending,
    Authorized,
    Unauthorized,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Pending,
    Allow,
    RedirectToLogin,
    RedirectToFallback,
}

impl GuardDecision {
    #[must_use]
    pub fn state(self) -> GuardState {
        match self {
            Self::Pending => GuardState::Pending,
            Self::Allow => GuardState::Authorized,
            Self::RedirectToLogin | Self::RedirectToFallback => GuardState::Unauthorized,
        }
    }

    /// Localized redirect target, if the decision redirects.
    #[must_use]
    pub fn redirect_path(self, locale: Locale) -> Option<String> {
        match self {
            Self::RedirectToLogin => Some(localized(locale, LOGIN_PATH)),
            Self::RedirectToFallback => Some(localized(locale, FALLBACK_PATH)),
            Self::Pending | Self::Allow => None,
        }
    }
}

#[must_use]
pub fn evaluate(session: &Session, policy: &GuardPolicy) -> GuardDecision {
    if !session.is_initialized() {
        GuardDecision::Pending
    } else if policy.require_auth && !session.is_authenticated() {
        GuardDecision::RedirectToLogin
    } else if !policy.permits(session.role()) {
        GuardDecision::RedirectToFallback
    } else {
        GuardDecision::Allow
    }
}

/// Track `policy` against the session, replacing the history entry on redirect.
pub fn install_route_guard<F>(
    store: SessionStore,
    policy: GuardPolicy,
    locale: Memo<Locale>,
    navigate: F,
) -> ReadSignal<GuardState>
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let (state, set_state) = signal(GuardState::Pending);
    Effect::new(move || {
        let decision = evaluate(&store.get(), &policy);
        set_state.set(decision.state());
        if let Some(path) = decision.redirect_path(locale.get()) {
            navigate(&path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
    state
}
