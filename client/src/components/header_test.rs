use super::*;
use crate::net::api::LOGOUT;
use crate::net::test_helpers::{ScriptedTransport, client, offline, ok};
use crate::net::types::{Identity, Role};
use crate::state::session::Session;
use futures::executor::block_on;
use serde_json::json;

fn signed_in() -> Session {
    let mut session = Session::default();
    session.mark_logged_in(Identity { email: "zoe@example.com".to_owned(), role: Some(Role::customer()) });
    session
}

#[test]
fn avatar_initial_uppercases_first_letter() {
    assert_eq!(avatar_initial(Some("zoe@example.com")), 'Z');
    assert_eq!(avatar_initial(Some("  émile@example.com")), 'É');
}

#[test]
fn avatar_initial_falls_back_to_u() {
    assert_eq!(avatar_initial(None), 'U');
    assert_eq!(avatar_initial(Some("")), 'U');
}

#[test]
fn sign_out_clears_session_after_backend_logout() {
    let transport = ScriptedTransport::new(vec![ok(json!({ "message": "Logged out" }))]);
    let (api, _) = client(&transport);
    let mut session = signed_in();

    block_on(sign_out(&api, || session.mark_logged_out())).unwrap();

    assert!(!session.is_authenticated());
    assert_eq!(transport.paths(), vec![LOGOUT]);
}

#[test]
fn failed_logout_leaves_session_untouched() {
    let transport = ScriptedTransport::new(vec![offline()]);
    let (api, _) = client(&transport);
    let mut session = signed_in();

    assert!(block_on(sign_out(&api, || session.mark_logged_out())).is_err());
    assert_eq!(session.email(), Some("zoe@example.com"));
}
