//! REST client for the booking backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every screen talks to the backend through one shared [`ApiClient`]
//! (provided via Leptos context). It attaches the ambient cookie credential,
//! and transparently survives an expired access token:
//!
//! 1. a `401` on a first attempt triggers exactly one `token/refresh` call,
//!    sent straight to the transport (never through this interceptor);
//! 2. on refresh success the original request is replayed once, marked
//!    `retried`;
//! 3. on refresh failure, or a second `401`, the caller gets the `401`
//!    rejection and the session-expired hook fires (login redirect).
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>`; nothing here panics, so a dead backend
//! degrades to screen-local error messages.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::transport::{ApiRequest, ApiResponse, BrowserCookies, CredentialStore, Transport, TransportError};
use super::types::{
    EmailRequest, Identity, LoginOutcome, LoginRequest, LoginWire, OtpRequest, RegistrationRequest, ResetCodeRequest,
    ResetConfirmRequest, TokenStatus,
};

pub const DEFAULT_BACKEND_BASE_URL: &str = "http://127.0.0.1:8000";

pub const LOGIN: &str = "/user/login/";
pub const REGISTRATION: &str = "/user/registeration/";
pub const VERIFY_OTP: &str = "/user/verify-otp/";
pub const RESEND_OTP: &str = "/user/resend-otp/";
pub const LOGOUT: &str = "/user/logout/";
pub const TOKEN_VERIFY: &str = "/user/token/verify/";
pub const TOKEN_REFRESH: &str = "/user/token/refresh/";
pub const PASSWORD_RESET: &str = "/user/password-reset/";
pub const PASSWORD_RESET_CONFIRM: &str = "/user/password-reset-confirm/";
pub const PASSWORD_RESET_CODE: &str = "/user/password-reset-code/";
pub const PASSWORD_RESET_VERIFY: &str = "/user/password-reset-verify/";
pub const SEND_RESET_OTP: &str = "/user/send-reset-otp/";

const UNAUTHORIZED: u16 = 401;

/// API root derived from the build-time `BACKEND_BASE_URL`.
#[must_use]
pub fn api_base_url(backend: Option<&str>) -> String {
    let backend = backend
        .map(str::trim)
        .filter(|b| !b.is_empty())
        .unwrap_or(DEFAULT_BACKEND_BASE_URL);
    format!("{}/api", backend.trim_end_matches('/'))
}

/// Called when the session cannot be recovered by a refresh.
pub type SessionExpiredHook = Arc<dyn Fn() + Send + Sync>;

/// Shared backend client. Cheap to clone.
#[derive(Clone)]
pub struct ApiClient {
    base_url: Arc<str>,
    transport: Arc<dyn Transport>,
    credentials: Arc<dyn CredentialStore>,
    on_session_expired: SessionExpiredHook,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(base_url: &str, transport: Arc<dyn Transport>, credentials: Arc<dyn CredentialStore>) -> Self {
        Self {
            base_url: Arc::from(base_url.trim_end_matches('/')),
            transport,
            credentials,
            on_session_expired: Arc::new(|| {}),
        }
    }

    /// Client for the current build target, pointed at `BACKEND_BASE_URL`,
    /// sending browser cookies.
    pub fn browser() -> Self {
        Self::new(
            &api_base_url(option_env!("BACKEND_BASE_URL")),
            super::transport::default_transport(),
            Arc::new(BrowserCookies),
        )
    }

    #[must_use]
    pub fn with_session_expired_hook(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_session_expired = Arc::new(hook);
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a request, refreshing the session and replaying once on `401`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] when no response arrives and
    /// [`ApiError::Rejected`] for non-success statuses, including the original
    /// `401` when the refresh fails or the replay is rejected again.
    pub async fn send(&self, mut request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.credentials.attach(&mut request);
        let response = self.dispatch(&request).await?;
        if response.status != UNAUTHORIZED {
            return into_result(response);
        }

        let original = ApiError::rejected(&response);
        if request.retried {
            self.session_expired(&request);
            return Err(original);
        }

        if let Err(e) = self.refresh_token().await {
            leptos::logging::warn!("token refresh failed for {}: {e}", request.path);
            self.session_expired(&request);
            return Err(original);
        }

        request.retried = true;
        let replay = self.dispatch(&request).await?;
        if replay.status == UNAUTHORIZED {
            self.session_expired(&request);
        }
        into_result(replay)
    }

    async fn dispatch(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        let url = format!("{}{}", self.base_url, request.path);
        Ok(self.transport.send(&url, request).await?)
    }

    fn session_expired(&self, request: &ApiRequest) {
        if request.quiet {
            return;
        }
        leptos::logging::warn!("session expired during {}", request.path);
        (self.on_session_expired)();
    }

    async fn post<T: Serialize + ?Sized>(&self, path: &str, payload: &T, quiet: bool) -> Result<ApiResponse, ApiError> {
        let body = serde_json::to_value(payload).map_err(|e| TransportError::Encode(e.to_string()))?;
        let request = ApiRequest::post(path, body);
        self.send(if quiet { request.quiet() } else { request }).await
    }

    // =========================================================================
    // SESSION
    // =========================================================================

    /// `POST /user/login/`.
    ///
    /// # Errors
    ///
    /// Rejections carry the backend's `non_field_errors` message; a success
    /// body with neither a user nor a verification flag is a decode error.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginOutcome, ApiError> {
        let wire: LoginWire = decode(self.post(LOGIN, request, false).await?)?;
        LoginOutcome::from_wire(wire).ok_or_else(|| ApiError::Decode("login response carried no user".to_owned()))
    }

    /// `POST /user/logout/`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend could not be reached or rejected the call.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.post(LOGOUT, &serde_json::json!({}), false).await.map(drop)
    }

    /// `POST /user/token/verify/`, quiet: an expired session is an answer,
    /// not a redirect.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, rejection, or an unexpected body.
    pub async fn verify_token(&self) -> Result<TokenStatus, ApiError> {
        decode(self.post(TOKEN_VERIFY, &serde_json::json!({}), true).await?)
    }

    /// `POST /user/token/refresh/`, bypassing the `401` interceptor.
    ///
    /// # Errors
    ///
    /// Returns an error when the refresh cookie is missing or rejected.
    pub async fn refresh_token(&self) -> Result<(), ApiError> {
        let mut request = ApiRequest::post(TOKEN_REFRESH, serde_json::json!({}));
        self.credentials.attach(&mut request);
        into_result(self.dispatch(&request).await?).map(drop)
    }

    // =========================================================================
    // REGISTRATION
    // =========================================================================

    /// `POST /user/registeration/`; the backend mails an activation code.
    ///
    /// # Errors
    ///
    /// Returns the backend's field or detail message on rejection.
    pub async fn register(&self, request: &RegistrationRequest) -> Result<(), ApiError> {
        self.post(REGISTRATION, request, false).await.map(drop)
    }

    /// `POST /user/verify-otp/`.
    ///
    /// # Errors
    ///
    /// Returns the backend's `error` message for invalid or expired codes.
    pub async fn verify_otp(&self, request: &OtpRequest) -> Result<(), ApiError> {
        self.post(VERIFY_OTP, request, false).await.map(drop)
    }

    /// `POST /user/resend-otp/`.
    ///
    /// # Errors
    ///
    /// Returns an error if the address is unknown or the call fails.
    pub async fn resend_otp(&self, email: &str) -> Result<(), ApiError> {
        self.post(RESEND_OTP, &EmailRequest { email: email.to_owned() }, false)
            .await
            .map(drop)
    }

    // =========================================================================
    // PASSWORD RESET
    // =========================================================================

    /// `POST /user/password-reset/`; mails a reset link.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown addresses; callers must not reveal it.
    pub async fn request_password_reset(&self, email: &str) -> Result<(), ApiError> {
        self.post(PASSWORD_RESET, &EmailRequest { email: email.to_owned() }, false)
            .await
            .map(drop)
    }

    /// `POST /user/password-reset-confirm/`.
    ///
    /// # Errors
    ///
    /// Returns the backend message for invalid or expired links.
    pub async fn confirm_password_reset(&self, request: &ResetConfirmRequest) -> Result<(), ApiError> {
        self.post(PASSWORD_RESET_CONFIRM, request, false).await.map(drop)
    }

    /// `POST /user/password-reset-code/`; mails a reset code.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown addresses or transport failures.
    pub async fn request_reset_code(&self, email: &str) -> Result<(), ApiError> {
        self.post(PASSWORD_RESET_CODE, &EmailRequest { email: email.to_owned() }, false)
            .await
            .map(drop)
    }

    /// `POST /user/password-reset-verify/`.
    ///
    /// # Errors
    ///
    /// Returns the backend message for wrong, expired, or mistyped codes.
    pub async fn verify_reset_code(&self, request: &ResetCodeRequest) -> Result<(), ApiError> {
        self.post(PASSWORD_RESET_VERIFY, request, false).await.map(drop)
    }

    /// `POST /user/send-reset-otp/`; re-issues a reset code.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn send_reset_otp(&self, email: &str) -> Result<(), ApiError> {
        self.post(SEND_RESET_OTP, &EmailRequest { email: email.to_owned() }, false)
            .await
            .map(drop)
    }
}

/// Verify a registration/login OTP, then log in again so the backend issues
/// session cookies, returning the identity from the login response.
///
/// # Errors
///
/// Returns the first failing step's error, or
/// [`ApiError::VerificationPending`] if the account is still inactive.
pub async fn verify_and_sign_in(api: &ApiClient, otp: &OtpRequest, login: &LoginRequest) -> Result<Identity, ApiError> {
    api.verify_otp(otp).await?;
    match api.login(login).await? {
        LoginOutcome::SignedIn(identity) => Ok(identity),
        LoginOutcome::VerificationRequired { message } => Err(ApiError::VerificationPending { message }),
    }
}

fn into_result(response: ApiResponse) -> Result<ApiResponse, ApiError> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(ApiError::rejected(&response))
    }
}

fn decode<T: DeserializeOwned>(response: ApiResponse) -> Result<T, ApiError> {
    serde_json::from_value(response.body).map_err(|e| ApiError::Decode(e.to_string()))
}
