//! # Event Client
//!
//! Provides a high‑level API for the Events screen.
//! It wraps a `ListHandle<Event>` and exposes the editor and delete flows.
use crate::events::EventError;
use crate::model::{Event, EventId};
use async_trait::async_trait;
use content_framework::{
    ApiClient, ConsoleError, ContentScreen, DeleteController, ListHandle, MutationController,
};
use tracing::{debug, instrument};

/// Client for the Events screen.
#[derive(Clone)]
pub struct EventClient {
    list: ListHandle<Event>,
    api: ApiClient,
}

impl EventClient {
    pub fn new(list: ListHandle<Event>, api: ApiClient) -> Self {
        Self { list, api }
    }
}

#[async_trait]
impl ContentScreen<Event> for EventClient {
    type Error = EventError;

    fn list(&self) -> &ListHandle<Event> {
        &self.list
    }

    fn api(&self) -> &ApiClient {
        &self.api
    }

    fn map_error(e: ConsoleError) -> Self::Error {
        EventError::Console(e)
    }
}

impl EventClient {
    /// An editor opened on an empty draft.
    pub fn create(&self) -> MutationController<Event> {
        let mut editor = self.editor();
        editor.open(None);
        editor
    }

    /// An editor pre-populated from an event of the current page.
    #[instrument(skip(self))]
    pub async fn edit(&self, id: EventId) -> Result<MutationController<Event>, EventError> {
        debug!("Opening editor");
        let event = self
            .find(id.clone())
            .await?
            .ok_or(EventError::NotFound(id))?;
        let mut editor = self.editor();
        editor.open(Some(&event));
        Ok(editor)
    }

    /// A delete confirmation already pointed at `id`.
    pub fn delete(&self, id: EventId) -> DeleteController<Event> {
        let mut deleter = self.deleter();
        deleter.request_delete(id);
        deleter
    }
}
