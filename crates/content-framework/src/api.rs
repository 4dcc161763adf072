//! # HTTP Client Adapter
//!
//! [`ApiClient`] offers one operation per verb. Every call is fire-and-wait:
//! no retries, no timeout of its own, no cancellation. The result is either the
//! decoded [`ApiSuccess`] or a [`RequestError`] carrying the server's message.

use crate::config::ConsoleConfig;
use crate::envelope::{self, ApiSuccess};
use crate::error::{ConfigError, RequestError};
use crate::transport::{ApiRequest, HttpTransport, Method, Payload, Transport};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Cheap to clone; every clone shares the same transport.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Builds a client that talks HTTP to `config.base_url()`.
    pub fn http(config: &ConsoleConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(Arc::new(HttpTransport::new(config)?)))
    }

    pub async fn get(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<ApiSuccess, RequestError> {
        self.send(ApiRequest::new(Method::Get, path).with_query(query))
            .await
    }

    pub async fn post(&self, path: &str, payload: Payload) -> Result<ApiSuccess, RequestError> {
        self.request(Method::Post, path, payload).await
    }

    pub async fn put(&self, path: &str, payload: Payload) -> Result<ApiSuccess, RequestError> {
        self.request(Method::Put, path, payload).await
    }

    pub async fn patch(&self, path: &str, payload: Payload) -> Result<ApiSuccess, RequestError> {
        self.request(Method::Patch, path, payload).await
    }

    pub async fn delete(&self, path: &str) -> Result<ApiSuccess, RequestError> {
        self.send(ApiRequest::new(Method::Delete, path)).await
    }

    /// Sends `payload` with an arbitrary verb. Used for resource routes that
    /// are declared rather than hard-coded.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        payload: Payload,
    ) -> Result<ApiSuccess, RequestError> {
        self.send(ApiRequest::new(method, path).with_payload(payload))
            .await
    }

    #[instrument(skip_all, fields(method = %request.method, path = %request.path))]
    async fn send(&self, request: ApiRequest) -> Result<ApiSuccess, RequestError> {
        debug!("Sending request");
        let reply = self.transport.send(request).await.map_err(|e| {
            warn!(error = %e, "Transport failure");
            e
        })?;
        let status = reply.status;
        envelope::decode(status, reply.body).map_err(|e| {
            warn!(status, error = %e, "Request failed");
            e
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockTransport;
    use serde_json::json;

    #[tokio::test]
    async fn verbs_hit_the_expected_routes() {
        let mock = Arc::new(MockTransport::new());
        mock.expect(Method::Get, "/api/events")
            .return_json(200, json!({"success": true, "data": []}));
        mock.expect(Method::Patch, "/api/feature-cards/cards")
            .return_json(200, json!({"success": true, "data": {"id": "c1"}}));
        mock.expect(Method::Delete, "/api/events/e1")
            .return_json(204, serde_json::Value::Null);

        let api = ApiClient::new(mock.clone());
        let query = vec![("page".to_string(), "1".to_string())];
        api.get("/api/events", &query).await.unwrap();
        let patched = api
            .patch("/api/feature-cards/cards", Payload::Json(json!({"id": "c1"})))
            .await
            .unwrap();
        assert_eq!(patched.data, json!({"id": "c1"}));
        api.delete("/api/events/e1").await.unwrap();

        let requests = mock.requests();
        assert_eq!(requests[0].query, query);
        assert_eq!(requests[1].payload, Payload::Json(json!({"id": "c1"})));
        mock.verify();
    }

    #[tokio::test]
    async fn transport_failures_keep_their_message() {
        let mock = Arc::new(MockTransport::new());
        mock.expect(Method::Post, "/api/events/create_events")
            .return_transport_error("Network Error");

        let api = ApiClient::new(mock.clone());
        let err = api
            .post("/api/events/create_events", Payload::Empty)
            .await
            .unwrap_err();
        assert_eq!(err, RequestError::Transport("Network Error".into()));
    }
}
