//! # Feature Cards
//!
//! This module wires the [`FeatureCard`] resource into the content framework.
//!
//! ## Structure
//!
//! - [`entity`] - [`ContentEntity`](content_framework::ContentEntity) implementation for [`FeatureCard`]
//! - [`error`] - [`FeatureCardError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the list controller and its handle
//!
//! Cards live in a section that can be deleted as a whole (`DELETE /api/feature-cards`),
//! always behind a confirmation. The list is ordered by `sequence` until the user
//! picks another sort field. Updates are `PATCH /api/feature-cards/cards` with the
//! card id in the body, and images go to `/api/feature-cards/upload` under `image`.

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::FeatureCard;
use content_framework::{ApiClient, ListController, ListHandle};

/// Creates a new Feature Card list controller and its handle.
pub fn new(api: ApiClient, page_size: u32) -> (ListController<FeatureCard>, ListHandle<FeatureCard>) {
    ListController::new(api, page_size)
}
