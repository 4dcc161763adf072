//! # Delete Confirmation Controller
//!
//! A two-step gate in front of `DELETE`: [`request_delete`](DeleteController::request_delete)
//! only remembers the target, [`confirm`](DeleteController::confirm) sends the request.
//! A failed delete keeps the confirmation open with the error, so the user can
//! retry or cancel.

use crate::api::ApiClient;
use crate::client::Refresher;
use crate::entity::ContentEntity;
use crate::error::ConsoleError;
use tracing::{debug, info, instrument, warn};

pub struct DeleteController<T: ContentEntity> {
    api: ApiClient,
    refresher: Refresher<T>,
    pending: Option<T::Id>,
    error: Option<String>,
}

impl<T: ContentEntity> DeleteController<T> {
    pub fn new(api: ApiClient, refresher: Refresher<T>) -> Self {
        Self {
            api,
            refresher,
            pending: None,
            error: None,
        }
    }

    pub fn request_delete(&mut self, id: T::Id) {
        debug!(resource = T::RESOURCE, %id, "Delete requested");
        self.pending = Some(id);
        self.error = None;
    }

    pub fn cancel(&mut self) {
        self.pending = None;
        self.error = None;
    }

    pub fn pending(&self) -> Option<&T::Id> {
        self.pending.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[instrument(skip_all, fields(resource = T::RESOURCE))]
    pub async fn confirm(&mut self) -> Result<(), ConsoleError> {
        let Some(id) = self.pending.clone() else {
            return Err(ConsoleError::NothingToConfirm);
        };

        match self.api.delete(&T::delete_path(&id)).await {
            Ok(_) => {
                info!(%id, "Deleted");
                self.pending = None;
                self.error = None;
                if let Err(e) = self.refresher.request_refresh().await {
                    warn!(error = %e, "Refresh after delete failed");
                }
                Ok(())
            }
            Err(e) => {
                warn!(%id, error = %e, "Delete failed");
                self.error = Some(e.to_string());
                Err(e.into())
            }
        }
    }
}
