use super::*;
use serde_json::json;

#[test]
fn post_request_defaults_to_first_attempt_without_cookies() {
    let req = ApiRequest::post("/user/login/", json!({}));
    assert_eq!(req.path, "/user/login/");
    assert_eq!(req.credentials, CredentialMode::Omit);
    assert!(!req.retried);
    assert!(!req.quiet);
}

#[test]
fn quiet_marks_request() {
    assert!(ApiRequest::post("/user/token/verify/", json!({})).quiet().quiet);
}

#[test]
fn browser_cookies_include_credentials() {
    let mut req = ApiRequest::post("/user/logout/", json!({}));
    BrowserCookies.attach(&mut req);
    assert_eq!(req.credentials, CredentialMode::Include);
}

#[test]
fn response_success_range() {
    assert!(ApiResponse { status: 200, body: json!(null) }.is_success());
    assert!(ApiResponse { status: 201, body: json!(null) }.is_success());
    assert!(!ApiResponse { status: 401, body: json!(null) }.is_success());
    assert!(!ApiResponse { status: 302, body: json!(null) }.is_success());
}

#[test]
fn decode_body_handles_empty_json_and_text() {
    assert_eq!(decode_body("  "), serde_json::Value::Null);
    assert_eq!(decode_body(r#"{"valid":true}"#), json!({ "valid": true }));
    assert_eq!(decode_body("Bad Gateway"), json!("Bad Gateway"));
}

#[test]
fn unavailable_transport_always_errors() {
    let req = ApiRequest::post("/user/login/", json!({}));
    let result = futures::executor::block_on(UnavailableTransport.send("http://x/api/user/login/", &req));
    assert_eq!(result, Err(TransportError::Unavailable));
}
