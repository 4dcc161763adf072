//! # Content Framework
//!
//! This crate provides the resource-agnostic building blocks of an administrative content
//! console: the client-side workflow that keeps a list of entities in sync with a REST
//! backend while the user creates, edits and deletes them.
//!
//! ## The Workflow
//!
//! ```text
//!  ListController ◀──refresh── MutationController / DeleteController
//!       │ GET                        │ POST / PUT / PATCH / DELETE
//!       ▼                            ▼
//!  ApiClient ───────── Transport ────────▶ backend
//! ```
//!
//! 1. A [`ListController`] fetches the current page for a (search, sort, page) tuple.
//! 2. The user opens a [`MutationController`] (create or edit) or a [`DeleteController`].
//! 3. On success, that controller asks the list to refetch. The list then replaces its
//!    items with the server's answer. There is no client-side merge.
//!
//! ## Why one task per list?
//!
//! The list is the only state shared between controllers. Giving it to a single task
//! that processes requests sequentially means no lock and no interleaving: a refresh
//! requested by an editor is just another message in the queue. Other components hold
//! a [`ListHandle`] or, if they may only trigger refetches, a [`Refresher`].
//!
//! **Further Reading**:
//! - [Actors with Tokio](https://ryhl.io/blog/actors-with-tokio/) - the channel + oneshot pattern used here
//!
//! ## Core Abstractions
//!
//! 1. **Entity Layer** ([`ContentEntity`]) - ids, drafts, required fields, routes and upload policy of a resource
//! 2. **Transport Layer** ([`ApiClient`], [`Transport`]) - one call per verb, envelopes decoded into a tagged result
//! 3. **Controller Layer** ([`ListController`], [`MutationController`], [`DeleteController`], [`Uploader`])
//! 4. **Interface Layer** ([`ContentScreen`]) - the per-resource client surface
//!
//! ## Minimal Example
//!
//! ```rust,ignore
//! let api = ApiClient::http(&ConsoleConfig::from_env()?)?;
//! let (controller, notes) = ListController::<Note>::new(api.clone(), 10);
//! tokio::spawn(controller.run());
//!
//! let view = notes.load().await?;
//!
//! let mut editor = MutationController::new(api, notes.refresher(), Note::upload_policy());
//! editor.open(None);
//! editor.draft_mut().unwrap().body = "Hello".into();
//! editor.submit().await?; // POST, then exactly one refetch
//! ```
//!
//! ## Testing
//!
//! [`mock::MockTransport`] replaces the network with a queue of expected requests and
//! canned replies. See the [`mock`] module for usage patterns.

pub mod api;
pub mod client;
pub mod config;
pub mod delete;
pub mod entity;
pub mod envelope;
pub mod error;
pub mod list;
pub mod media;
pub mod message;
pub mod mock;
pub mod mutation;
pub mod screen;
pub mod tracing;
pub mod transport;
pub mod upload;

// Re-export core types for convenience
pub use api::ApiClient;
pub use client::{ListHandle, Refresher};
pub use config::ConsoleConfig;
pub use delete::DeleteController;
pub use entity::{ContentEntity, Route, UploadPolicy};
pub use envelope::{ApiSuccess, Pagination};
pub use error::{ConfigError, ConsoleError, RequestError, UploadError, ValidationError};
pub use list::{ListController, ListFilter, ListPhase, ListView, SortOrder};
pub use media::{LocalFile, MediaKind, MediaRef};
pub use message::{ListRequest, Response};
pub use mutation::{AttachReport, FormDraft, ModalPhase, MutationController};
pub use screen::ContentScreen;
pub use transport::{Method, Payload, Transport};
pub use upload::{UploadReport, Uploader};
