//! Scripted transport for exercising [`ApiClient`] without a network.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::api::ApiClient;
use super::transport::{ApiRequest, ApiResponse, BrowserCookies, Transport, TransportError};

pub(crate) const TEST_BASE_URL: &str = "http://backend.test/api";

/// Replays queued responses in order and records every request it sees.
pub(crate) struct ScriptedTransport {
    responses: Mutex<Vec<Result<ApiResponse, TransportError>>>,
    calls: Mutex<Vec<(String, ApiRequest)>>,
}

impl ScriptedTransport {
    pub(crate) fn new(responses: Vec<Result<ApiResponse, TransportError>>) -> Arc<Self> {
        Arc::new(Self { responses: Mutex::new(responses), calls: Mutex::new(Vec::new()) })
    }

    /// Paths of every request sent, in order.
    pub(crate) fn paths(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(|(_, r)| r.path.clone()).collect()
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.calls.lock().unwrap().iter().map(|(_, r)| r.clone()).collect()
    }

    pub(crate) fn urls(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(|(u, _)| u.clone()).collect()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, url: &str, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        self.calls.lock().unwrap().push((url.to_owned(), request.clone()));
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Err(TransportError::Network("unscripted request".to_owned()))
        } else {
            responses.remove(0)
        }
    }
}

pub(crate) fn reply(status: u16, body: serde_json::Value) -> Result<ApiResponse, TransportError> {
    Ok(ApiResponse { status, body })
}

pub(crate) fn ok(body: serde_json::Value) -> Result<ApiResponse, TransportError> {
    reply(200, body)
}

pub(crate) fn unauthorized() -> Result<ApiResponse, TransportError> {
    reply(401, serde_json::json!({ "detail": "Authentication credentials were not provided." }))
}

pub(crate) fn offline() -> Result<ApiResponse, TransportError> {
    Err(TransportError::Network("offline".to_owned()))
}

/// Client over `transport` whose session-expired hook bumps the returned counter.
pub(crate) fn client(transport: &Arc<ScriptedTransport>) -> (ApiClient, Arc<AtomicUsize>) {
    let expired = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&expired);
    let api = ApiClient::new(TEST_BASE_URL, Arc::clone(transport) as Arc<dyn Transport>, Arc::new(BrowserCookies))
        .with_session_expired_hook(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
    (api, expired)
}

pub(crate) fn expired_count(counter: &AtomicUsize) -> usize {
    counter.load(Ordering::SeqCst)
}
