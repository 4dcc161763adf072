use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Events.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub String);

impl From<&str> for EventId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A scheduled event shown on the marketing site.
///
/// # Content Framework
/// This struct implements the [`ContentEntity`](content_framework::ContentEntity) trait,
/// so it is listed by a [`ListController`](content_framework::ListController) and edited
/// through an [`EventDraft`]. See [`crate::events`] for routes and upload policy.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(alias = "_id")]
    pub id: EventId,
    pub event_name: String,
    pub event_date: String,
    pub event_time: String,
    pub location: String,
    #[serde(default)]
    pub event_banner: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Editable fields of an Event.
///
/// The identifier travels in the URL, never in the body.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    #[serde(skip)]
    pub id: Option<EventId>,
    pub event_name: String,
    pub event_date: String,
    pub event_time: String,
    pub location: String,
    /// URL returned by the banner upload.
    pub event_banner: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl EventDraft {
    pub fn new(
        event_name: impl Into<String>,
        event_date: impl Into<String>,
        event_time: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            event_name: event_name.into(),
            event_date: event_date.into(),
            event_time: event_time.into(),
            location: location.into(),
            ..Self::default()
        }
    }
}
