use super::*;
use serde_json::json;

// =============================================================
// Role
// =============================================================

#[test]
fn role_normalizes_case_and_whitespace() {
    assert_eq!(Role::new("  Supplier "), Role::supplier());
    assert_eq!(Role::new("CUSTOMER").as_str(), "customer");
}

#[test]
fn role_deserializes_through_normalization() {
    let role: Role = serde_json::from_value(json!("Admin")).unwrap();
    assert_eq!(role.as_str(), Role::ADMIN);
}

#[test]
fn registration_request_serializes_role_as_string() {
    let req = RegistrationRequest {
        first_name: "Rana".to_owned(),
        last_name: "Haddad".to_owned(),
        email: "rana@example.com".to_owned(),
        password: "pw".to_owned(),
        role: Role::supplier(),
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["role"], json!("supplier"));
    assert_eq!(value["first_name"], json!("Rana"));
}

// =============================================================
// Identity / TokenStatus
// =============================================================

#[test]
fn identity_ignores_extra_profile_fields() {
    let identity: Identity = serde_json::from_value(json!({
        "id": 7,
        "email": "a@b.com",
        "first_name": "A",
        "role": "supplier",
        "is_active": true
    }))
    .unwrap();
    assert_eq!(identity.email, "a@b.com");
    assert_eq!(identity.role, Some(Role::supplier()));
}

#[test]
fn identity_role_may_be_null() {
    let identity: Identity = serde_json::from_value(json!({ "email": "a@b.com", "role": null })).unwrap();
    assert_eq!(identity.role, None);
}

#[test]
fn token_status_reads_identity_from_data() {
    let status: TokenStatus = serde_json::from_value(json!({
        "valid": true,
        "message": "Token is valid",
        "data": { "email": "a@b.com", "role": "customer" }
    }))
    .unwrap();
    assert!(status.valid);
    assert_eq!(status.identity.unwrap().email, "a@b.com");
}

#[test]
fn token_status_missing_valid_is_invalid() {
    let status: TokenStatus = serde_json::from_value(json!({ "error": "Access token is missing" })).unwrap();
    assert!(!status.valid);
    assert!(status.identity.is_none());
}

// =============================================================
// LoginOutcome
// =============================================================

#[test]
fn login_outcome_verification_required_keeps_message() {
    let wire: LoginWire = serde_json::from_value(json!({
        "success": false,
        "requires_verification": true,
        "message": "Check your code",
        "email": "a@b.com"
    }))
    .unwrap();
    assert_eq!(
        LoginOutcome::from_wire(wire),
        Some(LoginOutcome::VerificationRequired { message: "Check your code".to_owned() })
    );
}

#[test]
fn login_outcome_verification_required_without_message_uses_default() {
    let wire: LoginWire = serde_json::from_value(json!({ "requires_verification": true })).unwrap();
    assert_eq!(
        LoginOutcome::from_wire(wire),
        Some(LoginOutcome::VerificationRequired { message: DEFAULT_VERIFICATION_MESSAGE.to_owned() })
    );
}

#[test]
fn login_outcome_signed_in_carries_user() {
    let wire: LoginWire = serde_json::from_value(json!({
        "success": true,
        "message": "Login successful",
        "user": { "email": "a@b.com", "role": "supplier" }
    }))
    .unwrap();
    let Some(LoginOutcome::SignedIn(identity)) = LoginOutcome::from_wire(wire) else {
        panic!("expected signed-in outcome");
    };
    assert_eq!(identity.role, Some(Role::supplier()));
}

#[test]
fn login_outcome_without_user_is_none() {
    let wire: LoginWire = serde_json::from_value(json!({ "success": true })).unwrap();
    assert_eq!(LoginOutcome::from_wire(wire), None);
}

// =============================================================
// extract_error_message
// =============================================================

#[test]
fn error_message_prefers_non_field_errors() {
    let body = json!({
        "success": false,
        "errors": { "non_field_errors": ["No active account found"] },
        "error": "ignored"
    });
    assert_eq!(extract_error_message(&body).as_deref(), Some("No active account found"));
}

#[test]
fn error_message_reads_error_then_detail() {
    assert_eq!(extract_error_message(&json!({ "error": "OTP expired" })).as_deref(), Some("OTP expired"));
    assert_eq!(
        extract_error_message(&json!({ "detail": "Tokens refreshed" })).as_deref(),
        Some("Tokens refreshed")
    );
}

#[test]
fn error_message_falls_back_to_field_errors() {
    let body = json!({ "email": ["user with this email already exists."] });
    assert_eq!(
        extract_error_message(&body).as_deref(),
        Some("user with this email already exists.")
    );
}

#[test]
fn error_message_none_for_non_object_or_empty() {
    assert_eq!(extract_error_message(&serde_json::Value::Null), None);
    assert_eq!(extract_error_message(&json!("plain text")), None);
    assert_eq!(extract_error_message(&json!({ "error": "  " })), None);
}
