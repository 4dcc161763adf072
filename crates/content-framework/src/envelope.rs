//! # Response Envelopes
//!
//! Endpoints answer in different shapes:
//!
//! - `{ "success": true, "data": ..., "pagination": {...} }`
//! - `{ "status": true, "message": "Created" }`
//! - a bare resource payload
//! - `{ "message": "..." }` or `{ "error": "..." }` on failure
//!
//! [`decode`] folds all of them into `Result<ApiSuccess, RequestError>` so
//! callers match on a tagged result instead of probing for fields.

use crate::error::RequestError;
use serde::Deserialize;
use serde_json::{Map, Value};

/// The decoded body of a successful response.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ApiSuccess {
    pub data: Value,
    pub pagination: Option<Pagination>,
    pub message: Option<String>,
}

/// Pagination metadata as reported by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default, alias = "currentPage")]
    pub page: Option<u32>,
    #[serde(default, alias = "pageSize")]
    pub limit: Option<u32>,
    #[serde(default, alias = "total", alias = "totalCount")]
    pub total_items: Option<u64>,
    #[serde(default)]
    pub total_pages: Option<u32>,
}

/// Folds a raw status and body into the tagged result.
pub fn decode(status: u16, body: Value) -> Result<ApiSuccess, RequestError> {
    if !(200..300).contains(&status) {
        let message = error_message(&body)
            .unwrap_or_else(|| format!("Request failed with status code {status}"));
        return Err(RequestError::Server { status, message });
    }

    let mut map = match body {
        Value::Object(map) => map,
        other => {
            return Ok(ApiSuccess {
                data: other,
                ..ApiSuccess::default()
            })
        }
    };

    match success_flag(&map) {
        Some(false) => {
            let message = error_message(&Value::Object(map))
                .unwrap_or_else(|| "Request was not successful".to_string());
            Err(RequestError::Server { status, message })
        }
        Some(true) => {
            let message = map.get("message").and_then(Value::as_str).map(str::to_string);
            let mut pagination = map.get("pagination").and_then(read_pagination);
            let data = map.remove("data").unwrap_or_else(|| remaining_fields(map));
            if pagination.is_none() {
                pagination = data.get("pagination").and_then(read_pagination);
            }
            Ok(ApiSuccess {
                data,
                pagination,
                message,
            })
        }
        None => {
            let pagination = map.get("pagination").and_then(read_pagination);
            Ok(ApiSuccess {
                data: Value::Object(map),
                pagination,
                message: None,
            })
        }
    }
}

/// Locates the array of items inside list data: the data itself, or the value
/// under `key`, or the value under `items`.
pub fn list_payload(data: Value, key: &str) -> Result<Value, RequestError> {
    match data {
        Value::Array(_) => Ok(data),
        Value::Object(mut map) => [key, "items"]
            .iter()
            .find_map(|k| map.remove(*k).filter(Value::is_array))
            .ok_or_else(|| RequestError::Decode(format!("no `{key}` list in response"))),
        Value::Null => Err(RequestError::Decode("response carried no list".to_string())),
        other => Err(RequestError::Decode(format!("expected a list, got {other}"))),
    }
}

fn success_flag(map: &Map<String, Value>) -> Option<bool> {
    ["success", "status"]
        .iter()
        .find_map(|key| map.get(*key).and_then(Value::as_bool))
}

/// A flagged envelope without `data` carries its payload beside the flag.
fn remaining_fields(mut map: Map<String, Value>) -> Value {
    for key in ["success", "status", "message", "pagination"] {
        map.remove(key);
    }
    if map.is_empty() {
        Value::Null
    } else {
        Value::Object(map)
    }
}

fn read_pagination(value: &Value) -> Option<Pagination> {
    serde_json::from_value(value.clone()).ok()
}

/// Pulls a user-facing message out of an error body.
fn error_message(body: &Value) -> Option<String> {
    let text = match body {
        Value::String(s) => Some(s.as_str()),
        Value::Object(map) => map
            .get("message")
            .and_then(Value::as_str)
            .or_else(|| match map.get("error") {
                Some(Value::String(s)) => Some(s.as_str()),
                Some(Value::Object(inner)) => inner.get("message").and_then(Value::as_str),
                _ => None,
            }),
        _ => None,
    }?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unwraps_success_envelope_with_pagination() {
        let body = json!({
            "success": true,
            "data": [{"id": "1"}],
            "pagination": {"currentPage": 2, "limit": 10, "totalItems": 11, "totalPages": 2}
        });
        let ok = decode(200, body).unwrap();
        assert_eq!(ok.data, json!([{"id": "1"}]));
        assert_eq!(
            ok.pagination,
            Some(Pagination {
                page: Some(2),
                limit: Some(10),
                total_items: Some(11),
                total_pages: Some(2),
            })
        );
    }

    #[test]
    fn status_flag_envelope_keeps_message() {
        let ok = decode(201, json!({"status": true, "message": "Created"})).unwrap();
        assert_eq!(ok.data, Value::Null);
        assert_eq!(ok.message.as_deref(), Some("Created"));
    }

    #[test]
    fn flagged_envelope_without_data_keeps_sibling_fields() {
        let body = json!({
            "success": true,
            "message": "ok",
            "events": [{"_id": "e1"}],
            "pagination": {"page": 1, "total": 1}
        });
        let ok = decode(200, body).unwrap();
        assert_eq!(ok.data, json!({"events": [{"_id": "e1"}]}));
        assert_eq!(ok.message.as_deref(), Some("ok"));
        assert_eq!(ok.pagination.and_then(|p| p.total_items), Some(1));
    }

    #[test]
    fn bare_payload_passes_through() {
        let ok = decode(200, json!({"title": "Features", "cards": []})).unwrap();
        assert_eq!(ok.data, json!({"title": "Features", "cards": []}));
        assert!(ok.pagination.is_none());
    }

    #[test]
    fn pagination_nested_in_data_is_found() {
        let body = json!({
            "success": true,
            "data": {"events": [], "pagination": {"page": 1, "total": 0, "totalPages": 0}}
        });
        let ok = decode(200, body).unwrap();
        assert_eq!(ok.pagination.and_then(|p| p.total_items), Some(0));
    }

    #[test]
    fn unsuccessful_flag_is_an_error_even_on_2xx() {
        let err = decode(200, json!({"success": false, "message": "Slug taken"})).unwrap_err();
        assert_eq!(
            err,
            RequestError::Server {
                status: 200,
                message: "Slug taken".into()
            }
        );
    }

    #[test]
    fn error_status_prefers_server_payload() {
        let err = decode(400, json!({"error": "eventDate is invalid"})).unwrap_err();
        assert_eq!(err.to_string(), "eventDate is invalid");

        let err = decode(422, json!({"error": {"message": "Too large"}})).unwrap_err();
        assert_eq!(err.to_string(), "Too large");
    }

    #[test]
    fn error_status_without_payload_uses_status_text() {
        let err = decode(500, Value::Null).unwrap_err();
        assert_eq!(err.to_string(), "Request failed with status code 500");
    }

    #[test]
    fn list_payload_finds_items() {
        assert_eq!(list_payload(json!([1]), "events").unwrap(), json!([1]));
        assert_eq!(
            list_payload(json!({"events": [1, 2]}), "events").unwrap(),
            json!([1, 2])
        );
        assert_eq!(list_payload(json!({"items": [3]}), "cards").unwrap(), json!([3]));
        assert!(list_payload(json!({"cards": "nope"}), "cards").is_err());
    }

    #[test]
    fn missing_list_is_a_decode_error() {
        assert!(matches!(
            list_payload(Value::Null, "events"),
            Err(RequestError::Decode(_))
        ));
        let ok = decode(200, json!({"success": true})).unwrap();
        assert!(list_payload(ok.data, "events").is_err());
    }
}
