use crate::model::{CardId, FeatureCard, FeatureCardDraft};
use content_framework::{ContentEntity, MediaRef, Method, Route, UploadPolicy};

impl ContentEntity for FeatureCard {
    type Id = CardId;
    type Draft = FeatureCardDraft;
    const RESOURCE: &'static str = "feature-cards";

    fn id(&self) -> &CardId {
        &self.id
    }

    fn to_draft(&self) -> FeatureCardDraft {
        FeatureCardDraft {
            id: Some(self.id.clone()),
            title: self.title.clone(),
            description: self.description.clone(),
            image_url: self.image_url.clone().unwrap_or_default(),
            link: self.link.clone(),
            sequence: self.sequence,
        }
    }

    fn draft_id(draft: &FeatureCardDraft) -> Option<CardId> {
        draft.id.clone()
    }

    fn required_fields(draft: &FeatureCardDraft) -> Vec<(&'static str, &str)> {
        vec![
            ("title", draft.title.as_str()),
            ("description", draft.description.as_str()),
            ("imageUrl", draft.image_url.as_str()),
        ]
    }

    fn upload_policy() -> UploadPolicy {
        UploadPolicy::Immediate {
            endpoint: "/api/feature-cards/upload",
            field: "image",
        }
    }

    fn attach_media(draft: &mut FeatureCardDraft, media: &[MediaRef]) {
        if let Some(image) = media.first() {
            draft.image_url = image.url.clone();
        }
    }

    fn default_sort() -> Option<&'static str> {
        Some("sequence")
    }

    fn list_key() -> &'static str {
        "cards"
    }

    // Cards are patched in place on the section; the id is in the body.
    fn update_route(_id: &CardId) -> Route {
        Route::new(Method::Patch, "/api/feature-cards/cards")
    }
}
