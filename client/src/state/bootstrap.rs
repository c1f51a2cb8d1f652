//! Startup session check.
//!
//! Runs once per page load in the browser. The backend keeps the session in
//! cookies the client cannot read, so the only way to learn who is signed in
//! is to ask: verify, refresh once if the access token is stale, verify again.
//! Every failure resolves to [`BootstrapOutcome::Anonymous`]; none is shown.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use crate::net::api::ApiClient;
use crate::net::types::TokenStatus;

use super::session::{BootstrapOutcome, SessionStore};

/// Determine the current session without touching any store.
pub async fn resolve_session(api: &ApiClient) -> BootstrapOutcome {
    match api.verify_token().await {
        Ok(status) if status.valid => return outcome_from(status),
        Ok(_) => {}
        Err(e) => {
            leptos::logging::log!("session verify failed: {e}");
            return BootstrapOutcome::Anonymous;
        }
    }

    if let Err(e) = api.refresh_token().await {
        leptos::logging::log!("session refresh failed: {e}");
        return BootstrapOutcome::Anonymous;
    }

    match api.verify_token().await {
        Ok(status) if status.valid => outcome_from(status),
        Ok(_) => BootstrapOutcome::Anonymous,
        Err(e) => {
            leptos::logging::log!("session re-verify failed: {e}");
            BootstrapOutcome::Anonymous
        }
    }
}

/// Resolve the session and publish the result; always initializes the store.
pub async fn run_bootstrap(api: &ApiClient, store: SessionStore) {
    let outcome = resolve_session(api).await;
    store.bootstrap_resolved(outcome);
}

fn outcome_from(status: TokenStatus) -> BootstrapOutcome {
    status
        .identity
        .map_or(BootstrapOutcome::Anonymous, BootstrapOutcome::Authenticated)
}
