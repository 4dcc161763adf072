use crate::model::{Event, EventDraft, EventId};
use content_framework::{ContentEntity, MediaRef, UploadPolicy};

impl ContentEntity for Event {
    type Id = EventId;
    type Draft = EventDraft;
    const RESOURCE: &'static str = "events";

    fn id(&self) -> &EventId {
        &self.id
    }

    fn to_draft(&self) -> EventDraft {
        EventDraft {
            id: Some(self.id.clone()),
            event_name: self.event_name.clone(),
            event_date: self.event_date.clone(),
            event_time: self.event_time.clone(),
            location: self.location.clone(),
            event_banner: self.event_banner.clone().unwrap_or_default(),
            description: self.description.clone(),
        }
    }

    fn draft_id(draft: &EventDraft) -> Option<EventId> {
        draft.id.clone()
    }

    fn required_fields(draft: &EventDraft) -> Vec<(&'static str, &str)> {
        vec![
            ("eventName", draft.event_name.as_str()),
            ("eventDate", draft.event_date.as_str()),
            ("eventTime", draft.event_time.as_str()),
            ("location", draft.location.as_str()),
            ("eventBanner", draft.event_banner.as_str()),
        ]
    }

    fn upload_policy() -> UploadPolicy {
        UploadPolicy::Immediate {
            endpoint: "/api/events/upload_banner",
            field: "banner",
        }
    }

    /// The banner is a single image; the first uploaded reference wins.
    fn attach_media(draft: &mut EventDraft, media: &[MediaRef]) {
        if let Some(banner) = media.first() {
            draft.event_banner = banner.url.clone();
        }
    }

    fn list_key() -> &'static str {
        "events"
    }

    fn create_path() -> String {
        "/api/events/create_events".to_string()
    }
}
