//! # Mutation Modal Controller
//!
//! Owns the draft of a single entity while it is being created or edited.
//!
//! ```text
//! closed ──open──▶ open(draft) ──submit──▶ submitting ──ok──▶ closed
//!                      ▲                        │
//!                      └──────── err ───────────┘ (draft kept, error shown)
//! ```
//!
//! A successful submit asks the list for exactly one refetch through the
//! [`Refresher`]. The controller never edits list items itself.

use crate::api::ApiClient;
use crate::client::Refresher;
use crate::entity::{self, ContentEntity, UploadPolicy};
use crate::envelope::ApiSuccess;
use crate::error::{ConsoleError, RequestError, UploadError};
use crate::media::{self, LocalFile, MediaRef};
use crate::transport::{MultipartBody, Payload};
use crate::upload::{FailedUpload, Uploader};
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalPhase {
    #[default]
    Closed,
    Open,
    Submitting,
}

/// The editable fields plus files waiting to be sent with the submit.
#[derive(Debug, Clone, Default)]
pub struct FormDraft<D> {
    pub fields: D,
    pub pending_files: Vec<LocalFile>,
}

/// What happened to a batch of attached files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttachReport {
    /// References written into the draft (immediate uploads).
    pub uploaded: Vec<MediaRef>,
    /// Files queued for the submit (bundled uploads).
    pub queued: usize,
    pub warnings: Vec<String>,
    pub failed: Vec<FailedUpload>,
}

pub struct MutationController<T: ContentEntity> {
    api: ApiClient,
    refresher: Refresher<T>,
    policy: UploadPolicy,
    phase: ModalPhase,
    draft: Option<FormDraft<T::Draft>>,
    error: Option<String>,
    warnings: Vec<String>,
}

impl<T: ContentEntity> MutationController<T> {
    pub fn new(api: ApiClient, refresher: Refresher<T>, policy: UploadPolicy) -> Self {
        Self {
            api,
            refresher,
            policy,
            phase: ModalPhase::Closed,
            draft: None,
            error: None,
            warnings: Vec::new(),
        }
    }

    /// Opens the modal. `Some(entity)` edits it; `None` starts an empty draft.
    pub fn open(&mut self, entity: Option<&T>) {
        let fields = entity.map(T::to_draft).unwrap_or_default();
        debug!(resource = T::RESOURCE, editing = entity.is_some(), "Modal opened");
        self.draft = Some(FormDraft {
            fields,
            pending_files: Vec::new(),
        });
        self.phase = ModalPhase::Open;
        self.error = None;
        self.warnings.clear();
    }

    /// Discards the draft without any request.
    pub fn cancel(&mut self) {
        debug!(resource = T::RESOURCE, "Modal cancelled");
        self.reset();
    }

    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase != ModalPhase::Closed
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == ModalPhase::Submitting
    }

    pub fn draft(&self) -> Option<&T::Draft> {
        self.draft.as_ref().map(|d| &d.fields)
    }

    pub fn draft_mut(&mut self) -> Option<&mut T::Draft> {
        self.draft.as_mut().map(|d| &mut d.fields)
    }

    pub fn pending_files(&self) -> &[LocalFile] {
        self.draft
            .as_ref()
            .map(|d| d.pending_files.as_slice())
            .unwrap_or(&[])
    }

    pub fn remove_pending(&mut self, index: usize) -> Option<LocalFile> {
        let draft = self.draft.as_mut()?;
        (index < draft.pending_files.len()).then(|| draft.pending_files.remove(index))
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Attaches files according to the resource's [`UploadPolicy`].
    #[instrument(skip_all, fields(resource = T::RESOURCE, count = files.len()))]
    pub async fn attach(&mut self, files: Vec<LocalFile>) -> Result<AttachReport, ConsoleError> {
        self.ensure_editable()?;

        match self.policy.clone() {
            UploadPolicy::None => {
                let err = ConsoleError::from(UploadError::Unsupported {
                    resource: T::RESOURCE,
                });
                self.error = Some(err.to_string());
                Err(err)
            }
            UploadPolicy::Bundled { .. } => {
                let (accepted, skipped) = media::partition(files);
                let warnings: Vec<String> =
                    skipped.iter().map(|n| media::skipped_warning(n)).collect();
                let queued = accepted.len();
                if let Some(draft) = self.draft.as_mut() {
                    draft
                        .pending_files
                        .extend(accepted.into_iter().map(|(_, f)| f));
                }
                self.warnings.extend(warnings.iter().cloned());
                debug!(queued, skipped = warnings.len(), "Files queued");
                Ok(AttachReport {
                    queued,
                    warnings,
                    ..AttachReport::default()
                })
            }
            UploadPolicy::Immediate { endpoint, field } => {
                let uploader = Uploader::new(self.api.clone(), endpoint, field);
                let report = match uploader.upload(files).await {
                    Ok(report) => report,
                    Err(e) => {
                        self.error = Some(e.to_string());
                        return Err(e.into());
                    }
                };

                if let Some(draft) = self.draft.as_mut() {
                    if !report.accepted.is_empty() {
                        T::attach_media(&mut draft.fields, &report.accepted);
                    }
                }
                let warnings = report.warnings();
                self.warnings.extend(warnings.iter().cloned());
                self.error = report.failure_message();

                Ok(AttachReport {
                    uploaded: report.accepted,
                    queued: 0,
                    warnings,
                    failed: report.failed,
                })
            }
        }
    }

    /// Validates, then creates or updates. See the module docs for the transitions.
    #[instrument(skip_all, fields(resource = T::RESOURCE))]
    pub async fn submit(&mut self) -> Result<(), ConsoleError> {
        self.ensure_editable()?;
        let Some(draft) = self.draft.as_ref() else {
            return Err(ConsoleError::ModalClosed);
        };

        if let Err(e) = entity::validate::<T>(&draft.fields) {
            warn!(missing = ?e.missing, "Validation failed");
            self.error = Some(e.to_string());
            return Err(e.into());
        }

        let id = T::draft_id(&draft.fields);
        let payload = self.encode(draft);
        self.phase = ModalPhase::Submitting;
        self.error = None;

        let result = match payload {
            Ok(payload) => self.send(id.as_ref(), payload).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(success) => {
                let action = if id.is_some() { "update" } else { "create" };
                info!(
                    action,
                    message = success.message.as_deref().unwrap_or(""),
                    "Saved"
                );
                self.reset();
                if let Err(e) = self.refresher.request_refresh().await {
                    warn!(error = %e, "Refresh after save failed");
                }
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Save failed");
                self.phase = ModalPhase::Open;
                self.error = Some(e.to_string());
                Err(e.into())
            }
        }
    }

    fn encode(&self, draft: &FormDraft<T::Draft>) -> Result<Payload, RequestError> {
        let value =
            serde_json::to_value(&draft.fields).map_err(|e| RequestError::Encode(e.to_string()))?;
        match &self.policy {
            UploadPolicy::Bundled { field } => Ok(Payload::Multipart(MultipartBody::from_object(
                &value,
                field,
                draft.pending_files.iter().cloned(),
            )?)),
            _ => Ok(Payload::Json(value)),
        }
    }

    async fn send(&self, id: Option<&T::Id>, payload: Payload) -> Result<ApiSuccess, RequestError> {
        match id {
            Some(id) => {
                let route = T::update_route(id);
                self.api.request(route.method, &route.path, payload).await
            }
            None => self.api.post(&T::create_path(), payload).await,
        }
    }

    fn ensure_editable(&self) -> Result<(), ConsoleError> {
        match self.phase {
            ModalPhase::Closed => Err(ConsoleError::ModalClosed),
            ModalPhase::Submitting => Err(ConsoleError::SubmitInProgress),
            ModalPhase::Open => Ok(()),
        }
    }

    fn reset(&mut self) {
        self.phase = ModalPhase::Closed;
        self.draft = None;
        self.error = None;
        self.warnings.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ListHandle;
    use crate::message::ListRequest;
    use crate::mock::MockTransport;
    use crate::transport::Method;
    use serde::{Deserialize, Serialize};
    use serde_json::json;
    use std::sync::Arc;
    use tokio::sync::mpsc;

    #[derive(Debug, Clone, Deserialize)]
    struct Album {
        id: String,
        title: String,
    }

    #[derive(Debug, Clone, Default, Serialize)]
    struct AlbumDraft {
        #[serde(skip)]
        id: Option<String>,
        title: String,
        tags: Vec<String>,
    }

    impl ContentEntity for Album {
        type Id = String;
        type Draft = AlbumDraft;
        const RESOURCE: &'static str = "albums";

        fn id(&self) -> &String {
            &self.id
        }
        fn to_draft(&self) -> AlbumDraft {
            AlbumDraft {
                id: Some(self.id.clone()),
                title: self.title.clone(),
                tags: Vec::new(),
            }
        }
        fn draft_id(draft: &AlbumDraft) -> Option<String> {
            draft.id.clone()
        }
        fn required_fields(draft: &AlbumDraft) -> Vec<(&'static str, &str)> {
            vec![("title", draft.title.as_str())]
        }
    }

    /// A refresher whose requests are answered by a bare loop, counting refreshes.
    fn counting_refresher() -> (Refresher<Album>, tokio::task::JoinHandle<usize>) {
        let (sender, mut receiver) = mpsc::channel::<ListRequest<Album>>(4);
        let counter = tokio::spawn(async move {
            let mut refreshes = 0;
            while let Some(msg) = receiver.recv().await {
                if let ListRequest::Refresh { respond_to } = msg {
                    refreshes += 1;
                    let _ = respond_to.send(Err(ConsoleError::ControllerDropped));
                }
            }
            refreshes
        });
        (ListHandle::new(sender).refresher(), counter)
    }

    #[tokio::test]
    async fn closed_modal_rejects_operations() {
        let mock = Arc::new(MockTransport::new());
        let (refresher, _) = counting_refresher();
        let mut editor =
            MutationController::<Album>::new(ApiClient::new(mock), refresher, UploadPolicy::None);
        assert_eq!(editor.submit().await, Err(ConsoleError::ModalClosed));
        assert_eq!(editor.attach(vec![]).await, Err(ConsoleError::ModalClosed));
    }

    #[tokio::test]
    async fn bundled_files_travel_with_the_submit() {
        let mock = Arc::new(MockTransport::new());
        mock.expect(Method::Post, "/api/albums")
            .return_json(201, json!({"success": true, "data": {"id": "a1"}}));
        let (refresher, counter) = counting_refresher();
        let mut editor = MutationController::<Album>::new(
            ApiClient::new(mock.clone()),
            refresher,
            UploadPolicy::Bundled { field: "media" },
        );

        editor.open(None);
        if let Some(draft) = editor.draft_mut() {
            draft.title = "Summer".into();
            draft.tags = vec!["beach".into()];
        }
        let report = editor
            .attach(vec![
                LocalFile::new("cover.jpg", "image/jpeg", vec![1]),
                LocalFile::new("readme.md", "text/markdown", vec![2]),
                LocalFile::new("clip.mp4", "video/mp4", vec![3]),
            ])
            .await
            .unwrap();
        assert_eq!(report.queued, 2);
        assert_eq!(
            editor.warnings(),
            &["readme.md is not an image or video and was skipped".to_string()]
        );
        assert_eq!(editor.remove_pending(1).map(|f| f.name), Some("clip.mp4".into()));
        assert_eq!(editor.remove_pending(5), None);

        editor.submit().await.unwrap();
        assert!(!editor.is_open());
        assert!(editor.draft().is_none());

        let requests = mock.requests();
        match &requests[0].payload {
            Payload::Multipart(body) => {
                assert!(body.fields.contains(&("title".into(), "Summer".into())));
                assert!(body.fields.contains(&("tags".into(), "[\"beach\"]".into())));
                let names: Vec<_> = body
                    .files
                    .iter()
                    .map(|(k, f)| (k.as_str(), f.name.as_str()))
                    .collect();
                assert_eq!(names, vec![("media", "cover.jpg")]);
            }
            other => panic!("expected multipart payload, got {other:?}"),
        }

        drop(editor);
        assert_eq!(counter.await.unwrap(), 1);
        mock.verify();
    }

    #[tokio::test]
    async fn media_is_rejected_for_resources_without_uploads() {
        let mock = Arc::new(MockTransport::new());
        let (refresher, _) = counting_refresher();
        let mut editor =
            MutationController::<Album>::new(ApiClient::new(mock), refresher, UploadPolicy::None);
        editor.open(None);
        let err = editor
            .attach(vec![LocalFile::new("a.png", "image/png", vec![1])])
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ConsoleError::Upload(UploadError::Unsupported { resource: "albums" })
        );
        assert_eq!(editor.error(), Some("albums does not accept media attachments"));
        assert!(editor.is_open());
    }
}
