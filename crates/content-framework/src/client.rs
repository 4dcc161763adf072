//! # List Handles
//!
//! This module defines the handles used to talk to a running
//! [`ListController`](crate::list::ListController).

use crate::entity::ContentEntity;
use crate::error::ConsoleError;
use crate::list::ListView;
use crate::message::{ListRequest, Response};
use tokio::sync::{mpsc, oneshot};

/// ## ListHandle
///
/// The `ListHandle<T>` provides a type‑safe, async API over a `ListController<T>`. Each
/// method sends one request over a Tokio mpsc channel and waits for the resulting
/// [`ListView`] on a oneshot channel.
///
/// * **Cloneable** – holds only a sender, so cloning is inexpensive.
/// * **Atomic views** – every answer is the full view after the transition.
#[derive(Clone)]
pub struct ListHandle<T: ContentEntity> {
    sender: mpsc::Sender<ListRequest<T>>,
}

impl<T: ContentEntity> ListHandle<T> {
    pub fn new(sender: mpsc::Sender<ListRequest<T>>) -> Self {
        Self { sender }
    }

    /// Initial fetch, issued when the screen mounts.
    pub async fn load(&self) -> Result<ListView<T>, ConsoleError> {
        self.call(|respond_to| ListRequest::Load { respond_to }).await
    }

    pub async fn change_search(&self, term: impl Into<String>) -> Result<ListView<T>, ConsoleError> {
        let term = term.into();
        self.call(|respond_to| ListRequest::ChangeSearch { term, respond_to })
            .await
    }

    pub async fn change_sort(&self, field: impl Into<String>) -> Result<ListView<T>, ConsoleError> {
        let field = field.into();
        self.call(|respond_to| ListRequest::ChangeSort { field, respond_to })
            .await
    }

    pub async fn change_page(&self, page: u32) -> Result<ListView<T>, ConsoleError> {
        self.call(|respond_to| ListRequest::ChangePage { page, respond_to })
            .await
    }

    pub async fn refresh(&self) -> Result<ListView<T>, ConsoleError> {
        self.call(|respond_to| ListRequest::Refresh { respond_to })
            .await
    }

    /// Current view without touching the network.
    pub async fn snapshot(&self) -> Result<ListView<T>, ConsoleError> {
        self.call(|respond_to| ListRequest::Snapshot { respond_to })
            .await
    }

    pub async fn request_section_delete(&self) -> Result<ListView<T>, ConsoleError> {
        self.call(|respond_to| ListRequest::RequestSectionDelete { respond_to })
            .await
    }

    pub async fn confirm_section_delete(&self) -> Result<ListView<T>, ConsoleError> {
        self.call(|respond_to| ListRequest::ConfirmSectionDelete { respond_to })
            .await
    }

    pub async fn cancel_section_delete(&self) -> Result<ListView<T>, ConsoleError> {
        self.call(|respond_to| ListRequest::CancelSectionDelete { respond_to })
            .await
    }

    /// A narrower handle for controllers that may only ask for a refetch.
    pub fn refresher(&self) -> Refresher<T> {
        Refresher {
            inner: self.clone(),
        }
    }

    async fn call(
        &self,
        build: impl FnOnce(Response<ListView<T>>) -> ListRequest<T>,
    ) -> Result<ListView<T>, ConsoleError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| ConsoleError::ControllerClosed)?;
        response.await.map_err(|_| ConsoleError::ControllerDropped)?
    }
}

/// The only capability a mutation or delete controller holds over the list:
/// "refetch with your current filter".
#[derive(Clone)]
pub struct Refresher<T: ContentEntity> {
    inner: ListHandle<T>,
}

impl<T: ContentEntity> Refresher<T> {
    /// Resolves once the refetch has completed. A failed refetch is recorded
    /// in the list view, not returned here.
    pub async fn request_refresh(&self) -> Result<(), ConsoleError> {
        self.inner.refresh().await.map(|_| ())
    }
}
