use super::*;
use crate::net::api::{TOKEN_REFRESH, TOKEN_VERIFY};
use crate::net::test_helpers::{ScriptedTransport, client, expired_count, offline, ok, reply};
use crate::net::types::{Identity, Role};
use futures::executor::block_on;
use serde_json::json;

fn valid() -> Result<crate::net::transport::ApiResponse, crate::net::transport::TransportError> {
    ok(json!({
        "valid": true,
        "message": "Token is valid",
        "data": { "id": 3, "email": "c@example.com", "role": "customer" }
    }))
}

fn invalid() -> Result<crate::net::transport::ApiResponse, crate::net::transport::TransportError> {
    ok(json!({ "valid": false, "error": "Invalid or expired token" }))
}

fn customer() -> Identity {
    Identity { email: "c@example.com".to_owned(), role: Some(Role::customer()) }
}

#[test]
fn valid_session_resolves_without_refresh() {
    let transport = ScriptedTransport::new(vec![valid()]);
    let (api, _) = client(&transport);
    assert_eq!(block_on(resolve_session(&api)), BootstrapOutcome::Authenticated(customer()));
    assert_eq!(transport.paths(), vec![TOKEN_VERIFY]);
}

#[test]
fn invalid_session_refreshes_once_then_reverifies() {
    let transport = ScriptedTransport::new(vec![invalid(), ok(json!({ "detail": "Tokens refreshed" })), valid()]);
    let (api, _) = client(&transport);
    assert_eq!(block_on(resolve_session(&api)), BootstrapOutcome::Authenticated(customer()));
    assert_eq!(transport.paths(), vec![TOKEN_VERIFY, TOKEN_REFRESH, TOKEN_VERIFY]);
}

#[test]
fn still_invalid_after_refresh_is_anonymous() {
    let transport = ScriptedTransport::new(vec![invalid(), ok(json!({})), invalid()]);
    let (api, _) = client(&transport);
    assert_eq!(block_on(resolve_session(&api)), BootstrapOutcome::Anonymous);
    assert_eq!(transport.call_count(), 3);
}

#[test]
fn refresh_rejection_is_anonymous_without_reverify() {
    let transport =
        ScriptedTransport::new(vec![invalid(), reply(401, json!({ "detail": "No refresh token provided" }))]);
    let (api, expired) = client(&transport);
    assert_eq!(block_on(resolve_session(&api)), BootstrapOutcome::Anonymous);
    assert_eq!(transport.paths(), vec![TOKEN_VERIFY, TOKEN_REFRESH]);
    assert_eq!(expired_count(&expired), 0);
}

#[test]
fn verify_transport_failure_is_anonymous() {
    let transport = ScriptedTransport::new(vec![offline()]);
    let (api, _) = client(&transport);
    assert_eq!(block_on(resolve_session(&api)), BootstrapOutcome::Anonymous);
}

#[test]
fn valid_without_identity_is_anonymous() {
    let transport = ScriptedTransport::new(vec![ok(json!({ "valid": true }))]);
    let (api, _) = client(&transport);
    assert_eq!(block_on(resolve_session(&api)), BootstrapOutcome::Anonymous);
}

#[test]
fn expired_access_token_401_is_recovered_by_interceptor_quietly() {
    let transport = ScriptedTransport::new(vec![
        reply(401, json!({ "detail": "Given token not valid" })),
        ok(json!({ "detail": "Tokens refreshed" })),
        valid(),
    ]);
    let (api, expired) = client(&transport);
    assert_eq!(block_on(resolve_session(&api)), BootstrapOutcome::Authenticated(customer()));
    assert_eq!(transport.paths(), vec![TOKEN_VERIFY, TOKEN_REFRESH, TOKEN_VERIFY]);
    assert_eq!(expired_count(&expired), 0);
}
