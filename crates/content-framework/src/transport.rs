//! # Transport
//!
//! The seam between the console and the wire. A [`Transport`] takes an
//! [`ApiRequest`] (a path relative to the base URL plus a payload) and hands
//! back the raw status and body. It makes no judgement about success: envelope
//! decoding lives one layer up in [`ApiClient`](crate::api::ApiClient), so the
//! production [`HttpTransport`] and the test
//! [`MockTransport`](crate::mock::MockTransport) share it.

use crate::config::ConsoleConfig;
use crate::error::{ConfigError, RequestError};
use crate::media::LocalFile;
use async_trait::async_trait;
use serde_json::Value;
use std::fmt;
use tracing::debug;

/// HTTP verbs used by the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    fn as_reqwest(self) -> reqwest::Method {
        match self {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        };
        f.write_str(verb)
    }
}

/// Text fields and files sent as `multipart/form-data`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartBody {
    pub fields: Vec<(String, String)>,
    pub files: Vec<(String, LocalFile)>,
}

impl MultipartBody {
    /// A body made only of files, all under the same field name.
    pub fn files(field: &str, files: impl IntoIterator<Item = LocalFile>) -> Self {
        Self {
            fields: Vec::new(),
            files: files.into_iter().map(|f| (field.to_string(), f)).collect(),
        }
    }

    /// Flattens a JSON object into text parts and appends the files.
    ///
    /// Strings are sent as-is, `null` is omitted, numbers and booleans use their
    /// JSON text, arrays and objects are sent as JSON strings.
    pub fn from_object(
        object: &Value,
        field: &str,
        files: impl IntoIterator<Item = LocalFile>,
    ) -> Result<Self, RequestError> {
        let map = object.as_object().ok_or_else(|| {
            RequestError::Encode(format!("expected an object of form fields, got {object}"))
        })?;
        let fields = map
            .iter()
            .filter_map(|(key, value)| {
                let text = match value {
                    Value::Null => return None,
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                Some((key.clone(), text))
            })
            .collect();
        let mut body = Self::files(field, files);
        body.fields = fields;
        Ok(body)
    }
}

/// What a request carries. The transport picks the content type from the shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Empty,
    Json(Value),
    Multipart(MultipartBody),
}

/// A request relative to the configured base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub payload: Payload,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            payload: Payload::Empty,
        }
    }

    pub fn with_query(mut self, query: &[(String, String)]) -> Self {
        self.query = query.to_vec();
        self
    }

    pub fn with_payload(mut self, payload: Payload) -> Self {
        self.payload = payload;
        self
    }
}

/// The raw outcome of a request that reached the server.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiReply {
    pub status: u16,
    pub body: Value,
}

/// Sends requests. Fails only when no response was obtained.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiReply, RequestError>;
}

/// Production transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &ConsoleConfig) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| ConfigError::Client(e.to_string()))?;
        Ok(Self {
            client,
            base_url: config.base_url().as_str().to_string(),
        })
    }

    fn url_for(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiReply, RequestError> {
        let url = self.url_for(&request.path);
        debug!(method = %request.method, %url, "Sending request");

        let mut builder = self.client.request(request.method.as_reqwest(), &url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        builder = match request.payload {
            Payload::Empty => builder,
            Payload::Json(value) => builder.json(&value),
            Payload::Multipart(body) => builder.multipart(into_form(body)?),
        };

        let response = builder
            .send()
            .await
            .map_err(|e| RequestError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| RequestError::Transport(e.to_string()))?;

        Ok(ApiReply {
            status,
            body: parse_body(&text),
        })
    }
}

fn into_form(body: MultipartBody) -> Result<reqwest::multipart::Form, RequestError> {
    let mut form = reqwest::multipart::Form::new();
    for (name, value) in body.fields {
        form = form.text(name, value);
    }
    for (name, file) in body.files {
        let part = reqwest::multipart::Part::bytes(file.bytes)
            .file_name(file.name)
            .mime_str(&file.mime)
            .map_err(|e| RequestError::Encode(e.to_string()))?;
        form = form.part(name, part);
    }
    Ok(form)
}

/// Joins a base URL and a relative path with exactly one slash between them.
pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Empty bodies become `null`; bodies that are not JSON are kept as a string
/// so error pages still reach the user.
pub(crate) fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}
