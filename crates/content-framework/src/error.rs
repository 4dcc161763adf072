//! # Framework Errors
//!
//! This module defines the error taxonomy shared by every controller in the console.
//! By centralizing error definitions, each screen surfaces failures the same way:
//!
//! - [`ValidationError`] is raised client-side and never reaches the network.
//! - [`RequestError`] covers non-2xx responses and transport failures.
//! - [`UploadError`] is the file-transfer flavour of a request failure.
//! - [`ConsoleError`] is the union returned by controller operations.
//!
//! Every variant renders a message that is safe to show to the user verbatim.

/// A draft is missing one or more required fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Please fill in the required fields: {}", .missing.join(", "))]
pub struct ValidationError {
    /// Names of the empty required fields, in declaration order.
    pub missing: Vec<&'static str>,
}

/// A request to the backend failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// The server answered with an error status or an unsuccessful envelope.
    /// `message` is the server-provided payload when there is one.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The request never produced a response (DNS, connection refused, TLS...).
    #[error("{0}")]
    Transport(String),

    /// The response arrived but its body did not have the expected shape.
    #[error("Unexpected response from server: {0}")]
    Decode(String),

    /// The outgoing payload could not be encoded.
    #[error("Could not encode request: {0}")]
    Encode(String),
}

/// A file transfer failed as a whole.
///
/// Per-file failures inside an otherwise successful batch are reported through
/// [`UploadReport::failed`](crate::upload::UploadReport::failed) instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("Upload failed: {message}")]
    Rejected { message: String },

    #[error("Upload succeeded but the server returned no file reference")]
    MissingReference,

    #[error("{resource} does not accept media attachments")]
    Unsupported { resource: &'static str },
}

impl From<RequestError> for UploadError {
    fn from(e: RequestError) -> Self {
        UploadError::Rejected {
            message: e.to_string(),
        }
    }
}

/// Errors returned by list, mutation and delete controllers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConsoleError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Upload(#[from] UploadError),

    #[error("The editor is not open")]
    ModalClosed,

    #[error("A submission is already in progress")]
    SubmitInProgress,

    #[error("Nothing is awaiting confirmation")]
    NothingToConfirm,

    #[error("List controller closed")]
    ControllerClosed,

    #[error("List controller dropped response channel")]
    ControllerDropped,
}

/// Errors raised while building the console configuration or HTTP stack.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Environment variable {0} is not set")]
    Missing(&'static str),

    #[error("Invalid base URL {value:?}: {reason}")]
    InvalidUrl { value: String, reason: String },

    #[error("Could not build HTTP client: {0}")]
    Client(String),
}
