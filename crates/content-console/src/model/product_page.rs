use content_framework::MediaRef;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Product Pages.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductPageId(pub String);

impl From<&str> for ProductPageId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for ProductPageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A product detail page with its image and video gallery.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    #[serde(alias = "_id")]
    pub id: ProductPageId,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub media: Vec<MediaRef>,
}

impl ProductPage {
    pub fn media_item(&self, media_id: &str) -> Option<&MediaRef> {
        self.media.iter().find(|m| m.id.as_deref() == Some(media_id))
    }
}

/// Editable fields of a Product Page.
///
/// New files are not part of the draft; they are sent as `media` parts of the
/// same multipart request. `retained_media` lists the gallery entries to keep.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPageDraft {
    #[serde(skip)]
    pub id: Option<ProductPageId>,
    pub name: String,
    pub slug: String,
    pub summary: String,
    pub description: String,
    pub retained_media: Vec<String>,
}
