//! Wire layer beneath [`ApiClient`](super::api::ApiClient).
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser keeps the session in HttpOnly cookies, so the client never
//! touches a token. What it controls is whether a request carries those
//! cookies; that decision lives in a [`CredentialStore`] and the actual I/O in
//! a [`Transport`]. Both are injected so tests can script responses without a
//! real cookie jar.
//!
//! Client-side (hydrate): `gloo-net` fetch with `credentials: include`.
//! Server-side (SSR): a stub transport, since the backend is only reachable
//! from the browser.

#![allow(clippy::unused_async)]

/// Whether the browser should attach its cookies to a request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CredentialMode {
    #[default]
    Omit,
    Include,
}

/// A JSON `POST` against a backend path such as `/user/login/`.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub path: String,
    pub body: serde_json::Value,
    pub credentials: CredentialMode,
    /// Set once the request has been replayed after a token refresh.
    pub retried: bool,
    /// Quiet requests never trigger the session-expired redirect.
    pub quiet: bool,
}

impl ApiRequest {
    #[must_use]
    pub fn post(path: &str, body: serde_json::Value) -> Self {
        Self {
            path: path.to_owned(),
            body,
            credentials: CredentialMode::Omit,
            retried: false,
            quiet: false,
        }
    }

    #[must_use]
    pub fn quiet(mut self) -> Self {
        self.quiet = true;
        self
    }
}

/// Status plus decoded body. Empty bodies decode to `Null`, non-JSON bodies to
/// a JSON string.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

impl ApiResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Network(String),

    /// The request body could not be serialized.
    #[error("request encoding failed: {0}")]
    Encode(String),

    #[error("not available on server")]
    Unavailable,
}

/// Performs one HTTP exchange. Implementations never retry.
#[async_trait::async_trait(?Send)]
pub trait Transport: Send + Sync {
    async fn send(&self, url: &str, request: &ApiRequest) -> Result<ApiResponse, TransportError>;
}

/// Decides which ambient credential travels with a request.
pub trait CredentialStore: Send + Sync {
    fn attach(&self, request: &mut ApiRequest);
}

/// The browser cookie jar: every request includes cookies.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserCookies;

impl CredentialStore for BrowserCookies {
    fn attach(&self, request: &mut ApiRequest) {
        request.credentials = CredentialMode::Include;
    }
}

/// Parse a raw response body into JSON, keeping non-JSON text as a string.
pub(crate) fn decode_body(text: &str) -> serde_json::Value {
    if text.trim().is_empty() {
        return serde_json::Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| serde_json::Value::String(text.to_owned()))
}

/// `fetch`-backed transport used in the browser.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[cfg(feature = "hydrate")]
#[async_trait::async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, url: &str, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        let credentials = match request.credentials {
            CredentialMode::Include => web_sys::RequestCredentials::Include,
            CredentialMode::Omit => web_sys::RequestCredentials::Omit,
        };
        let resp = gloo_net::http::Request::post(url)
            .credentials(credentials)
            .json(&request.body)
            .map_err(|e| TransportError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        Ok(ApiResponse { status, body: decode_body(&text) })
    }
}

/// Stand-in used during server rendering.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnavailableTransport;

#[async_trait::async_trait(?Send)]
impl Transport for UnavailableTransport {
    async fn send(&self, _url: &str, _request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        Err(TransportError::Unavailable)
    }
}

/// Transport appropriate for the current build target.
#[must_use]
pub fn default_transport() -> std::sync::Arc<dyn Transport> {
    #[cfg(feature = "hydrate")]
    {
        std::sync::Arc::new(BrowserTransport)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::sync::Arc::new(UnavailableTransport)
    }
}

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;
