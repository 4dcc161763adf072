//! # Media Upload Sub-flow
//!
//! [`Uploader`] sends a batch of local files to a resource's upload endpoint as
//! one multipart request and maps the response back to one [`MediaRef`] per
//! accepted file.
//!
//! Files whose declared type is neither image nor video never leave the client;
//! they come back in [`UploadReport::skipped`]. The endpoint may also refuse
//! individual files inside an otherwise successful batch, which is reported in
//! [`UploadReport::failed`] without discarding the accepted ones.

use crate::api::ApiClient;
use crate::error::UploadError;
use crate::media::{self, LocalFile, MediaKind, MediaRef};
use crate::transport::{MultipartBody, Payload};
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

const URL_KEYS: [&str; 6] = ["url", "location", "imageUrl", "bannerUrl", "fileUrl", "secure_url"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedUpload {
    pub file: String,
    pub reason: String,
}

/// Outcome of one batch, in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadReport {
    pub accepted: Vec<MediaRef>,
    /// Names of files filtered out before sending.
    pub skipped: Vec<String>,
    pub failed: Vec<FailedUpload>,
}

impl UploadReport {
    /// Non-blocking warnings for the skipped files.
    pub fn warnings(&self) -> Vec<String> {
        self.skipped
            .iter()
            .map(|name| media::skipped_warning(name))
            .collect()
    }

    /// A single message describing the per-file failures, if any.
    pub fn failure_message(&self) -> Option<String> {
        if self.failed.is_empty() {
            return None;
        }
        let parts: Vec<String> = self
            .failed
            .iter()
            .map(|f| format!("{}: {}", f.file, f.reason))
            .collect();
        Some(format!("Upload failed for {}", parts.join("; ")))
    }
}

#[derive(Clone)]
pub struct Uploader {
    api: ApiClient,
    endpoint: String,
    field: String,
}

impl Uploader {
    pub fn new(api: ApiClient, endpoint: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            api,
            endpoint: endpoint.into(),
            field: field.into(),
        }
    }

    #[instrument(skip_all, fields(endpoint = %self.endpoint, count = files.len()))]
    pub async fn upload(&self, files: Vec<LocalFile>) -> Result<UploadReport, UploadError> {
        let (accepted, skipped) = media::partition(files);
        for name in &skipped {
            warn!(file = %name, "Skipping non-media file");
        }

        let mut report = UploadReport {
            skipped,
            ..UploadReport::default()
        };
        if accepted.is_empty() {
            debug!("Nothing to upload");
            return Ok(report);
        }

        let (kinds, names): (Vec<MediaKind>, Vec<String>) = accepted
            .iter()
            .map(|(kind, file)| (*kind, file.name.clone()))
            .unzip();
        let body = MultipartBody::files(&self.field, accepted.into_iter().map(|(_, f)| f));

        let success = self
            .api
            .post(&self.endpoint, Payload::Multipart(body))
            .await?;

        let entries = reference_entries(&success.data);
        if entries.is_empty() {
            warn!("Upload response carried no file reference");
            return Err(UploadError::MissingReference);
        }

        let mut entries = entries.into_iter();
        for (kind, name) in kinds.into_iter().zip(names) {
            match entries.next() {
                Some(Ok(url)) => report.accepted.push(MediaRef::new(kind, url)),
                Some(Err(reason)) => report.failed.push(FailedUpload { file: name, reason }),
                None => report.failed.push(FailedUpload {
                    file: name,
                    reason: "no file reference returned".to_string(),
                }),
            }
        }

        for failure in &report.failed {
            warn!(file = %failure.file, reason = %failure.reason, "File rejected");
        }
        info!(
            accepted = report.accepted.len(),
            failed = report.failed.len(),
            "Upload finished"
        );
        Ok(report)
    }
}

/// One entry per file the server answered for.
fn reference_entries(data: &Value) -> Vec<Result<String, String>> {
    match data {
        Value::String(url) => vec![Ok(url.clone())],
        Value::Array(items) => items.iter().map(reference_entry).collect(),
        Value::Object(map) => match ["files", "urls"]
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_array))
        {
            Some(items) => items.iter().map(reference_entry).collect(),
            None => vec![reference_entry(data)],
        },
        _ => Vec::new(),
    }
}

fn reference_entry(entry: &Value) -> Result<String, String> {
    match entry {
        Value::String(url) => Ok(url.clone()),
        Value::Object(map) => {
            if let Some(error) = map.get("error") {
                let reason = match error {
                    Value::String(s) => s.clone(),
                    other => other
                        .get("message")
                        .and_then(Value::as_str)
                        .map(str::to_string)
                        .unwrap_or_else(|| other.to_string()),
                };
                return Err(reason);
            }
            URL_KEYS
                .iter()
                .find_map(|key| map.get(*key).and_then(Value::as_str))
                .map(str::to_string)
                .ok_or_else(|| "no file reference returned".to_string())
        }
        _ => Err("no file reference returned".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockTransport;
    use crate::transport::Method;
    use serde_json::json;
    use std::sync::Arc;

    fn uploader(mock: &Arc<MockTransport>) -> Uploader {
        Uploader::new(
            ApiClient::new(mock.clone()),
            "/api/feature-cards/upload",
            "image",
        )
    }

    #[tokio::test]
    async fn non_media_files_are_skipped_with_a_warning() {
        let mock = Arc::new(MockTransport::new());
        mock.expect(Method::Post, "/api/feature-cards/upload")
            .return_json(200, json!({"url": "https://cdn.test/hero.png"}));

        let report = uploader(&mock)
            .upload(vec![
                LocalFile::new("hero.png", "image/png", vec![1, 2, 3]),
                LocalFile::new("notes.txt", "text/plain", b"hi".to_vec()),
            ])
            .await
            .unwrap();

        assert_eq!(
            report.accepted,
            vec![MediaRef::new(MediaKind::Image, "https://cdn.test/hero.png")]
        );
        assert_eq!(
            report.warnings(),
            vec!["notes.txt is not an image or video and was skipped".to_string()]
        );

        let requests = mock.requests();
        assert_eq!(requests.len(), 1);
        match &requests[0].payload {
            Payload::Multipart(body) => {
                assert_eq!(body.files.len(), 1);
                assert_eq!(body.files[0].0, "image");
                assert_eq!(body.files[0].1.name, "hero.png");
            }
            other => panic!("expected multipart payload, got {other:?}"),
        }
        mock.verify();
    }

    #[tokio::test]
    async fn only_skipped_files_send_nothing() {
        let mock = Arc::new(MockTransport::new());
        let report = uploader(&mock)
            .upload(vec![LocalFile::new("a.pdf", "application/pdf", vec![0])])
            .await
            .unwrap();
        assert!(report.accepted.is_empty());
        assert_eq!(report.skipped, vec!["a.pdf".to_string()]);
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn per_file_failures_keep_accepted_references() {
        let mock = Arc::new(MockTransport::new());
        mock.expect(Method::Post, "/api/feature-cards/upload").return_json(
            200,
            json!({"success": true, "data": {"files": [
                {"imageUrl": "https://cdn.test/a.png"},
                {"error": {"message": "File too large"}}
            ]}}),
        );

        let report = uploader(&mock)
            .upload(vec![
                LocalFile::new("a.png", "image/png", vec![1]),
                LocalFile::new("b.mp4", "video/mp4", vec![2]),
            ])
            .await
            .unwrap();

        assert_eq!(report.accepted.len(), 1);
        assert_eq!(report.accepted[0].url, "https://cdn.test/a.png");
        assert_eq!(
            report.failed,
            vec![FailedUpload {
                file: "b.mp4".into(),
                reason: "File too large".into()
            }]
        );
        assert_eq!(
            report.failure_message().as_deref(),
            Some("Upload failed for b.mp4: File too large")
        );
    }

    #[tokio::test]
    async fn failed_request_is_one_aggregate_error() {
        let mock = Arc::new(MockTransport::new());
        mock.expect(Method::Post, "/api/feature-cards/upload")
            .return_json(413, json!({"message": "Payload too large"}));

        let err = uploader(&mock)
            .upload(vec![
                LocalFile::new("a.png", "image/png", vec![1]),
                LocalFile::new("b.png", "image/png", vec![2]),
            ])
            .await
            .unwrap_err();
        assert_eq!(
            err,
            UploadError::Rejected {
                message: "Payload too large".into()
            }
        );
    }

    #[tokio::test]
    async fn response_without_reference_is_an_error() {
        let mock = Arc::new(MockTransport::new());
        mock.expect(Method::Post, "/api/feature-cards/upload")
            .return_json(200, json!({"success": true}));

        let err = uploader(&mock)
            .upload(vec![LocalFile::new("a.png", "image/png", vec![1])])
            .await
            .unwrap_err();
        assert_eq!(err, UploadError::MissingReference);
    }

    #[tokio::test]
    async fn reference_beside_success_flag_is_accepted() {
        let mock = Arc::new(MockTransport::new());
        mock.expect(Method::Post, "/api/feature-cards/upload")
            .return_json(200, json!({"success": true, "url": "https://cdn.test/b.png"}));

        let report = uploader(&mock)
            .upload(vec![LocalFile::new("b.png", "image/png", vec![1])])
            .await
            .unwrap();
        assert_eq!(
            report.accepted,
            vec![MediaRef::new(MediaKind::Image, "https://cdn.test/b.png")]
        );
        assert!(report.failed.is_empty());
        mock.verify();
    }

    #[test]
    fn reference_shapes() {
        assert_eq!(
            reference_entries(&json!("https://cdn.test/x.png")),
            vec![Ok("https://cdn.test/x.png".to_string())]
        );
        assert_eq!(
            reference_entries(&json!({"bannerUrl": "https://cdn.test/b.jpg"})),
            vec![Ok("https://cdn.test/b.jpg".to_string())]
        );
        assert_eq!(
            reference_entries(&json!({"urls": ["u1", "u2"]})),
            vec![Ok("u1".to_string()), Ok("u2".to_string())]
        );
        assert!(reference_entries(&Value::Null).is_empty());
    }
}
