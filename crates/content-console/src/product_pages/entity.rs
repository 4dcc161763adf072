use crate::model::{ProductPage, ProductPageDraft, ProductPageId};
use content_framework::{ContentEntity, UploadPolicy};

impl ContentEntity for ProductPage {
    type Id = ProductPageId;
    type Draft = ProductPageDraft;
    const RESOURCE: &'static str = "products";

    fn id(&self) -> &ProductPageId {
        &self.id
    }

    fn to_draft(&self) -> ProductPageDraft {
        ProductPageDraft {
            id: Some(self.id.clone()),
            name: self.name.clone(),
            slug: self.slug.clone(),
            summary: self.summary.clone(),
            description: self.description.clone(),
            retained_media: self.media.iter().filter_map(|m| m.id.clone()).collect(),
        }
    }

    fn draft_id(draft: &ProductPageDraft) -> Option<ProductPageId> {
        draft.id.clone()
    }

    fn required_fields(draft: &ProductPageDraft) -> Vec<(&'static str, &str)> {
        vec![("name", draft.name.as_str()), ("slug", draft.slug.as_str())]
    }

    fn upload_policy() -> UploadPolicy {
        UploadPolicy::Bundled { field: "media" }
    }

    fn list_key() -> &'static str {
        "products"
    }
}

/// Path of one gallery entry of a product page.
pub fn media_path(id: &ProductPageId, media_id: &str) -> String {
    format!("{}/{}/media/{}", ProductPage::collection_path(), id, media_id)
}
