//! # ContentScreen Trait
//!
//! Provides a common interface for resource-specific clients, adding the list,
//! editor and delete operations on top of a [`ListHandle`] and an [`ApiClient`].
use crate::api::ApiClient;
use crate::client::ListHandle;
use crate::delete::DeleteController;
use crate::entity::ContentEntity;
use crate::error::ConsoleError;
use crate::list::ListView;
use crate::mutation::MutationController;
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard screen operations.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Clone)]
/// struct NoteClient {
///     list: ListHandle<Note>,
///     api: ApiClient,
/// }
///
/// #[async_trait]
/// impl ContentScreen<Note> for NoteClient {
///     type Error = NoteError;
///
///     fn list(&self) -> &ListHandle<Note> {
///         &self.list
///     }
///     fn api(&self) -> &ApiClient {
///         &self.api
///     }
///     fn map_error(e: ConsoleError) -> NoteError {
///         NoteError::Console(e)
///     }
/// }
///
/// // load(), search(), editor() and deleter() are provided.
/// let view = notes.load().await?;
/// let mut editor = notes.editor();
/// editor.open(view.items.first());
/// ```
#[async_trait]
pub trait ContentScreen<T: ContentEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    fn list(&self) -> &ListHandle<T>;

    fn api(&self) -> &ApiClient;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: ConsoleError) -> Self::Error;

    #[tracing::instrument(skip(self), fields(resource = T::RESOURCE))]
    async fn load(&self) -> Result<ListView<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.list().load().await.map_err(Self::map_error)
    }

    #[tracing::instrument(skip(self), fields(resource = T::RESOURCE))]
    async fn search(&self, term: String) -> Result<ListView<T>, Self::Error> {
        self.list().change_search(term).await.map_err(Self::map_error)
    }

    #[tracing::instrument(skip(self), fields(resource = T::RESOURCE))]
    async fn sort_by(&self, field: String) -> Result<ListView<T>, Self::Error> {
        self.list().change_sort(field).await.map_err(Self::map_error)
    }

    #[tracing::instrument(skip(self), fields(resource = T::RESOURCE))]
    async fn go_to_page(&self, page: u32) -> Result<ListView<T>, Self::Error> {
        self.list().change_page(page).await.map_err(Self::map_error)
    }

    async fn snapshot(&self) -> Result<ListView<T>, Self::Error> {
        self.list().snapshot().await.map_err(Self::map_error)
    }

    /// Looks an entity up in the currently loaded page.
    #[tracing::instrument(skip(self), fields(resource = T::RESOURCE))]
    async fn find(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        let view = self.snapshot().await?;
        Ok(view.items.into_iter().find(|item| item.id() == &id))
    }

    /// A fresh, closed editor for this resource.
    fn editor(&self) -> MutationController<T> {
        MutationController::new(self.api().clone(), self.list().refresher(), T::upload_policy())
    }

    /// A fresh delete confirmation for this resource.
    fn deleter(&self) -> DeleteController<T> {
        DeleteController::new(self.api().clone(), self.list().refresher())
    }
}
