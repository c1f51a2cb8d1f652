use super::*;
use crate::net::test_helpers::{ScriptedTransport, client, expired_count, offline, ok, reply, unauthorized};
use crate::net::transport::CredentialMode;
use crate::net::types::Role;
use futures::executor::block_on;
use serde_json::json;

fn login_request() -> LoginRequest {
    LoginRequest { email: "a@b.com".to_owned(), password: "pw".to_owned() }
}

// =============================================================
// Base URL
// =============================================================

#[test]
fn api_base_url_defaults_to_local_backend() {
    assert_eq!(api_base_url(None), "http://127.0.0.1:8000/api");
    assert_eq!(api_base_url(Some("  ")), "http://127.0.0.1:8000/api");
}

#[test]
fn api_base_url_trims_trailing_slash() {
    assert_eq!(api_base_url(Some("https://api.example.com/")), "https://api.example.com/api");
}

// =============================================================
// Credentials + URL building
// =============================================================

#[test]
fn send_attaches_cookies_and_joins_url() {
    let transport = ScriptedTransport::new(vec![ok(json!({ "message": "ok" }))]);
    let (api, _) = client(&transport);
    block_on(api.logout()).unwrap();

    assert_eq!(transport.urls(), vec!["http://backend.test/api/user/logout/".to_owned()]);
    assert_eq!(transport.requests()[0].credentials, CredentialMode::Include);
}

// =============================================================
// 401 interception
// =============================================================

#[test]
fn unauthorized_refreshes_then_replays_once() {
    let transport = ScriptedTransport::new(vec![
        unauthorized(),
        ok(json!({ "detail": "Tokens refreshed" })),
        ok(json!({ "message": "Login successful" })),
    ]);
    let (api, expired) = client(&transport);
    block_on(api.logout()).unwrap();

    assert_eq!(transport.paths(), vec![LOGOUT, TOKEN_REFRESH, LOGOUT]);
    let requests = transport.requests();
    assert!(!requests[0].retried);
    assert!(requests[2].retried);
    assert_eq!(expired_count(&expired), 0);
}

#[test]
fn second_unauthorized_after_replay_is_final() {
    let transport = ScriptedTransport::new(vec![
        unauthorized(),
        ok(json!({ "detail": "Tokens refreshed" })),
        unauthorized(),
        ok(json!({ "detail": "never used" })),
    ]);
    let (api, expired) = client(&transport);
    let err = block_on(api.logout()).unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(transport.paths(), vec![LOGOUT, TOKEN_REFRESH, LOGOUT]);
    assert_eq!(expired_count(&expired), 1);
}

#[test]
fn refresh_failure_returns_original_error_and_fires_hook() {
    let transport = ScriptedTransport::new(vec![
        reply(401, json!({ "detail": "Given token not valid" })),
        reply(401, json!({ "detail": "Invalid refresh token" })),
    ]);
    let (api, expired) = client(&transport);
    let err = block_on(api.logout()).unwrap_err();

    assert_eq!(
        err,
        ApiError::Rejected { status: 401, message: Some("Given token not valid".to_owned()) }
    );
    assert_eq!(transport.paths(), vec![LOGOUT, TOKEN_REFRESH]);
    assert_eq!(expired_count(&expired), 1);
}

#[test]
fn refresh_transport_failure_counts_as_refresh_failure() {
    let transport = ScriptedTransport::new(vec![unauthorized(), offline()]);
    let (api, expired) = client(&transport);
    let err = block_on(api.logout()).unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(expired_count(&expired), 1);
}

#[test]
fn pre_marked_retry_never_refreshes() {
    let transport = ScriptedTransport::new(vec![unauthorized()]);
    let (api, expired) = client(&transport);
    let mut request = ApiRequest::post(LOGOUT, json!({}));
    request.retried = true;
    let err = block_on(api.send(request)).unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(transport.call_count(), 1);
    assert_eq!(expired_count(&expired), 1);
}

#[test]
fn quiet_request_does_not_fire_hook() {
    let transport = ScriptedTransport::new(vec![unauthorized(), unauthorized()]);
    let (api, expired) = client(&transport);
    let err = block_on(api.verify_token()).unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(expired_count(&expired), 0);
}

#[test]
fn non_401_rejection_is_not_retried() {
    let transport = ScriptedTransport::new(vec![reply(400, json!({ "error": "Invalid OTP" }))]);
    let (api, expired) = client(&transport);
    let err = block_on(api.verify_otp(&OtpRequest { email: "a@b.com".to_owned(), otp: "123456".to_owned() }))
        .unwrap_err();

    assert_eq!(err.user_message("x"), "Invalid OTP");
    assert_eq!(transport.call_count(), 1);
    assert_eq!(expired_count(&expired), 0);
}

#[test]
fn transport_failure_propagates_without_retry() {
    let transport = ScriptedTransport::new(vec![offline()]);
    let (api, _) = client(&transport);
    let err = block_on(api.resend_otp("a@b.com")).unwrap_err();

    assert!(matches!(err, ApiError::Transport(_)));
    assert_eq!(transport.call_count(), 1);
}

// =============================================================
// Typed endpoints
// =============================================================

#[test]
fn login_maps_verification_required() {
    let transport = ScriptedTransport::new(vec![ok(json!({
        "success": false,
        "requires_verification": true,
        "message": "Check your code"
    }))]);
    let (api, _) = client(&transport);
    let outcome = block_on(api.login(&login_request())).unwrap();

    assert_eq!(outcome, LoginOutcome::VerificationRequired { message: "Check your code".to_owned() });
    assert_eq!(transport.requests()[0].body, json!({ "email": "a@b.com", "password": "pw" }));
}

#[test]
fn login_without_user_is_decode_error() {
    let transport = ScriptedTransport::new(vec![ok(json!({ "success": true }))]);
    let (api, _) = client(&transport);
    assert!(matches!(block_on(api.login(&login_request())), Err(ApiError::Decode(_))));
}

#[test]
fn verify_token_is_quiet_and_decodes() {
    let transport = ScriptedTransport::new(vec![ok(json!({
        "valid": true,
        "data": { "email": "a@b.com", "role": "customer" }
    }))]);
    let (api, _) = client(&transport);
    let status = block_on(api.verify_token()).unwrap();

    assert!(status.valid);
    assert!(transport.requests()[0].quiet);
}

#[test]
fn refresh_token_does_not_recurse_on_401() {
    let transport = ScriptedTransport::new(vec![unauthorized()]);
    let (api, expired) = client(&transport);
    assert!(block_on(api.refresh_token()).unwrap_err().is_unauthorized());
    assert_eq!(transport.paths(), vec![TOKEN_REFRESH]);
    assert_eq!(expired_count(&expired), 0);
}

#[test]
fn reset_endpoints_post_expected_bodies() {
    let transport = ScriptedTransport::new(vec![
        ok(json!({ "message": "OTP sent to email" })),
        ok(json!({ "message": "Password reset successful" })),
        ok(json!({ "message": "Password reset successful" })),
    ]);
    let (api, _) = client(&transport);
    block_on(api.request_reset_code("a@b.com")).unwrap();
    block_on(api.verify_reset_code(&ResetCodeRequest {
        email: "a@b.com".to_owned(),
        otp: "123456".to_owned(),
        password: "new-pw".to_owned(),
    }))
    .unwrap();
    block_on(api.confirm_password_reset(&ResetConfirmRequest {
        uid: "MQ".to_owned(),
        token: "abc-123".to_owned(),
        password: "new-pw".to_owned(),
    }))
    .unwrap();

    assert_eq!(transport.paths(), vec![PASSWORD_RESET_CODE, PASSWORD_RESET_VERIFY, PASSWORD_RESET_CONFIRM]);
    let requests = transport.requests();
    assert_eq!(requests[0].body, json!({ "email": "a@b.com" }));
    assert_eq!(requests[1].body, json!({ "email": "a@b.com", "otp": "123456", "password": "new-pw" }));
    assert_eq!(requests[2].body, json!({ "uid": "MQ", "token": "abc-123", "password": "new-pw" }));
}

// =============================================================
// verify_and_sign_in
// =============================================================

#[test]
fn verify_and_sign_in_uses_login_identity() {
    let transport = ScriptedTransport::new(vec![
        ok(json!({ "message": "OTP verified, user activated" })),
        ok(json!({ "success": true, "user": { "email": "a@b.com", "role": "supplier" } })),
    ]);
    let (api, _) = client(&transport);
    let otp = OtpRequest { email: "a@b.com".to_owned(), otp: "123456".to_owned() };
    let identity = block_on(verify_and_sign_in(&api, &otp, &login_request())).unwrap();

    assert_eq!(identity.role, Some(Role::supplier()));
    assert_eq!(transport.paths(), vec![VERIFY_OTP, LOGIN]);
}

#[test]
fn verify_and_sign_in_stops_on_bad_code() {
    let transport = ScriptedTransport::new(vec![reply(400, json!({ "error": "Invalid OTP" }))]);
    let (api, _) = client(&transport);
    let otp = OtpRequest { email: "a@b.com".to_owned(), otp: "000000".to_owned() };
    let err = block_on(verify_and_sign_in(&api, &otp, &login_request())).unwrap_err();

    assert_eq!(err.user_message("x"), "Invalid OTP");
    assert_eq!(transport.paths(), vec![VERIFY_OTP]);
}

#[test]
fn verify_and_sign_in_rejects_still_inactive_account() {
    let transport = ScriptedTransport::new(vec![
        ok(json!({ "message": "OTP verified, user activated" })),
        ok(json!({ "requires_verification": true, "message": "Activate first" })),
    ]);
    let (api, _) = client(&transport);
    let otp = OtpRequest { email: "a@b.com".to_owned(), otp: "123456".to_owned() };
    let err = block_on(verify_and_sign_in(&api, &otp, &login_request())).unwrap_err();

    assert_eq!(err, ApiError::VerificationPending { message: "Activate first".to_owned() });
}
