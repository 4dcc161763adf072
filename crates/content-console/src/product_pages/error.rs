//! Error types for the Product Pages screen.

use crate::model::ProductPageId;
use content_framework::ConsoleError;
use thiserror::Error;

/// Errors that can occur during product page operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductPageError {
    /// The product page is not on the currently loaded page.
    #[error("Product page not found: {0}")]
    NotFound(ProductPageId),

    /// The product page has no gallery entry with this id.
    #[error("Media {media_id} not found on product page {product}")]
    MediaNotFound {
        product: ProductPageId,
        media_id: String,
    },

    #[error(transparent)]
    Console(#[from] ConsoleError),
}
