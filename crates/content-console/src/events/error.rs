//! Error types for the Events screen.

use crate::model::EventId;
use content_framework::ConsoleError;
use thiserror::Error;

/// Errors that can occur during event operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EventError {
    /// The event is not on the currently loaded page.
    #[error("Event not found: {0}")]
    NotFound(EventId),

    /// A request, validation, upload or controller failure.
    #[error(transparent)]
    Console(#[from] ConsoleError),
}
