//! # Events
//!
//! This module wires the [`Event`] resource into the content framework.
//!
//! ## Structure
//!
//! - [`entity`] - [`ContentEntity`](content_framework::ContentEntity) implementation for [`Event`]
//! - [`error`] - [`EventError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the list controller and its handle
//!
//! ## Routes
//!
//! | Operation | Route |
//! |-----------|-------|
//! | list | `GET /api/events` |
//! | create | `POST /api/events/create_events` |
//! | update | `PUT /api/events/{id}` |
//! | delete | `DELETE /api/events/{id}` |
//! | banner upload | `POST /api/events/upload_banner` (field `banner`) |
//!
//! The banner is uploaded as soon as it is attached; the draft then carries its URL
//! in `eventBanner` and the submit itself is plain JSON.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let (controller, list) = events::new(api.clone(), 10);
//! tokio::spawn(controller.run());
//! let client = EventClient::new(list, api);
//!
//! let mut editor = client.create();
//! if let Some(draft) = editor.draft_mut() {
//!     *draft = EventDraft::new("Launch", "2024-05-01", "10:00", "HQ");
//! }
//! editor.attach(vec![banner]).await?; // fills eventBanner
//! editor.submit().await?;
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Event;
use content_framework::{ApiClient, ListController, ListHandle};

/// Creates a new Event list controller and its handle.
pub fn new(api: ApiClient, page_size: u32) -> (ListController<Event>, ListHandle<Event>) {
    ListController::new(api, page_size)
}
