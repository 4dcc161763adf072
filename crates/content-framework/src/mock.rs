//! # Mock Transport & Testing Guide
//!
//! [`MockTransport`] implements [`Transport`] entirely in memory. It replays a
//! queue of expected requests with canned replies and records every request it
//! receives, so controller logic can be tested without a backend.
//!
//! ## When to use the Mock vs a Real Backend
//!
//! | Feature | MockTransport | HttpTransport |
//! |---------|---------------|---------------|
//! | **Speed** | Instant (in-memory) | Network bound |
//! | **Determinism** | 100% Deterministic | Depends on the server |
//! | **State** | No real state (expectations) | Real persistence |
//! | **Error Injection** | Easy (`return_json(500, ..)`, `return_transport_error`) | Hard |
//!
//! ## Testing Strategies
//!
//! <details>
//! <summary><b>Pattern 0: Adapter Test (Pure Mock)</b></summary>
//!
//! Drive [`ApiClient`](crate::api::ApiClient) directly and assert on the decoded
//! result and on [`MockTransport::requests`].
//! </details>
//!
//! <details>
//! <summary><b>Pattern 1: Controller Test (Sweet Spot)</b></summary>
//!
//! Spawn a real [`ListController`](crate::list::ListController) over the mock,
//! then drive mutation and delete controllers against its refresher. Counting
//! `GET`s with [`MockTransport::count`] shows exactly how many refetches a
//! mutation caused.
//!
//! ```rust,ignore
//! let mock = Arc::new(MockTransport::new());
//! mock.expect(Method::Get, "/api/notes").return_json(200, json!({"success": true, "data": []}));
//!
//! let (controller, list) = ListController::<Note>::new(ApiClient::new(mock.clone()), 10);
//! tokio::spawn(controller.run());
//! list.load().await?;
//! mock.verify(); // Ensures all expectations were met
//! ```
//! </details>
//!
//! Expectations are consumed in order. A request whose verb or path does not
//! match the next expectation panics with both sides printed.

use crate::error::RequestError;
use crate::transport::{ApiReply, ApiRequest, Method, Transport};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the reply to hand back.
struct Expectation {
    method: Method,
    path: String,
    response: Result<ApiReply, RequestError>,
}

/// A transport with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mock = Arc::new(MockTransport::new());
/// mock.expect(Method::Post, "/api/events/create_events")
///     .return_json(201, json!({"status": true, "message": "Created"}));
///
/// let api = ApiClient::new(mock.clone());
/// // Use api in tests...
/// mock.verify();
/// ```
#[derive(Default)]
pub struct MockTransport {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    /// Creates a new mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a request with this verb and path (query string excluded).
    pub fn expect(&self, method: Method, path: impl Into<String>) -> ExpectationBuilder {
        ExpectationBuilder {
            method,
            path: path.into(),
            expectations: self.expectations.clone(),
        }
    }

    /// Every request received so far, in order.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests received with this verb and path.
    pub fn count(&self, method: Method, path: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            let pending: Vec<String> = exps
                .iter()
                .map(|e| format!("{} {}", e.method, e.path))
                .collect();
            panic!(
                "Not all expectations were met. {} remaining: {}",
                exps.len(),
                pending.join(", ")
            );
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiReply, RequestError> {
        self.requests.lock().unwrap().push(request.clone());

        let expectation = self.expectations.lock().unwrap().pop_front();
        match expectation {
            Some(exp) if exp.method == request.method && exp.path == request.path => exp.response,
            Some(exp) => panic!(
                "Unexpected request {} {} (expected {} {})",
                request.method, request.path, exp.method, exp.path
            ),
            None => panic!(
                "Unexpected request {} {} (no expectations left)",
                request.method, request.path
            ),
        }
    }
}

/// Builder for a single expectation.
pub struct ExpectationBuilder {
    method: Method,
    path: String,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl ExpectationBuilder {
    /// Replies with this status and JSON body.
    pub fn return_json(self, status: u16, body: Value) {
        self.push(Ok(ApiReply { status, body }));
    }

    /// Fails as if the server was unreachable.
    pub fn return_transport_error(self, message: impl Into<String>) {
        self.push(Err(RequestError::Transport(message.into())));
    }

    fn push(self, response: Result<ApiReply, RequestError>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation {
            method: self.method,
            path: self.path,
            response,
        });
    }
}
