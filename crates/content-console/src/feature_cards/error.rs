//! Error types for the Feature Cards screen.

use crate::model::CardId;
use content_framework::ConsoleError;
use thiserror::Error;

/// Errors that can occur during feature card operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FeatureCardError {
    #[error("Feature card not found: {0}")]
    NotFound(CardId),

    #[error(transparent)]
    Console(#[from] ConsoleError),
}
