//! # Product Pages
//!
//! Product detail pages carry a gallery of images and videos. Unlike events and
//! feature cards, new gallery files are not uploaded on attach: they stay in the
//! editor and are sent as `media` parts of the create or update request, next to
//! the text fields. Existing entries can be removed one at a time with
//! `DELETE /api/products/{id}/media/{mediaId}`.

pub mod entity;
pub mod error;

pub use entity::media_path;
pub use error::*;

use crate::model::ProductPage;
use content_framework::{ApiClient, ListController, ListHandle};

/// Creates a new Product Page list controller and its handle.
pub fn new(api: ApiClient, page_size: u32) -> (ListController<ProductPage>, ListHandle<ProductPage>) {
    ListController::new(api, page_size)
}
