//! Media references and locally selected files.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two kinds of media the backend accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Classifies a declared MIME type. Anything that is neither `image/*` nor
    /// `video/*` yields `None`.
    pub fn from_mime(mime: &str) -> Option<Self> {
        let mime = mime.trim().to_ascii_lowercase();
        if mime.starts_with("image/") {
            Some(MediaKind::Image)
        } else if mime.starts_with("video/") {
            Some(MediaKind::Video)
        } else {
            None
        }
    }
}

/// A durable reference to uploaded media, owned by exactly one parent entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaRef {
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
}

impl MediaRef {
    pub fn new(kind: MediaKind, url: impl Into<String>) -> Self {
        Self {
            id: None,
            kind,
            url: url.into(),
            alt_text: None,
        }
    }
}

/// A file picked by the user that has not been sent anywhere yet.
#[derive(Clone, PartialEq, Eq)]
pub struct LocalFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl LocalFile {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            bytes: bytes.into(),
        }
    }

    pub fn kind(&self) -> Option<MediaKind> {
        MediaKind::from_mime(&self.mime)
    }
}

// Payload bytes are left out so request logs stay readable.
impl fmt::Debug for LocalFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalFile")
            .field("name", &self.name)
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Splits a selection into accepted media and the names of skipped files.
pub fn partition(files: Vec<LocalFile>) -> (Vec<(MediaKind, LocalFile)>, Vec<String>) {
    let mut accepted = Vec::new();
    let mut skipped = Vec::new();
    for file in files {
        match file.kind() {
            Some(kind) => accepted.push((kind, file)),
            None => skipped.push(file.name),
        }
    }
    (accepted, skipped)
}

/// The warning shown for a file that was filtered out of a selection.
pub fn skipped_warning(name: &str) -> String {
    format!("{name} is not an image or video and was skipped")
}
