//! # ContentEntity Trait
//!
//! The `ContentEntity` trait defines the contract every resource (event, feature card,
//! product page, …) implements to be managed by the generic controllers. It specifies the
//! identifier and draft types, the required fields of a draft, the upload policy, and the
//! routes of the resource. Implementing this trait gives a resource the full
//! list → mutate → refetch workflow.
//!
//! # Architecture Note
//! By defining a contract (`ContentEntity`) that all resource types must satisfy, the
//! [`ListController`](crate::list::ListController),
//! [`MutationController`](crate::mutation::MutationController) and
//! [`DeleteController`](crate::delete::DeleteController) are written *once* and reused
//! for every screen of the console.
//!
//! We use "Associated Types" (`type Id`, `type Draft`) to enforce type safety. An
//! `Event` is edited through an `EventDraft`, and you can't accidentally submit a
//! `FeatureCardDraft` to the events endpoint.
//!
//! # Provided Methods (Routes & Hooks)
//! Routes default to the REST convention around `/api/{RESOURCE}`:
//!
//! | Operation | Default |
//! |-----------|---------|
//! | list | `GET /api/{resource}` |
//! | create | `POST /api/{resource}` |
//! | update | `PUT /api/{resource}/{id}` |
//! | delete | `DELETE /api/{resource}/{id}` |
//! | delete section | `DELETE /api/{resource}` |
//!
//! Override only the ones a backend does differently.

use crate::envelope::list_payload;
use crate::error::{RequestError, ValidationError};
use crate::media::MediaRef;
use crate::transport::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt::{Debug, Display};

/// How a resource gets its media to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadPolicy {
    /// The resource carries no media.
    None,
    /// Files are uploaded as soon as they are attached; the returned references
    /// are written into the draft.
    Immediate {
        endpoint: &'static str,
        field: &'static str,
    },
    /// Files stay in the draft and travel as multipart parts of the submit.
    Bundled { field: &'static str },
}

/// A verb and path pair for routes that are not plain collection routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub method: Method,
    pub path: String,
}

impl Route {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
        }
    }
}

/// Trait that any resource must implement to be managed by the console controllers.
pub trait ContentEntity: Clone + Debug + DeserializeOwned + Send + Sync + 'static {
    /// The server-assigned identifier. Rendered into paths through `Display`.
    type Id: Clone + Eq + Debug + Display + Send + Sync + 'static;

    /// The editable fields. `Default` is the empty draft used for creation.
    type Draft: Clone + Debug + Default + Serialize + Send + Sync + 'static;

    /// Path segment of the resource under `/api`.
    const RESOURCE: &'static str;

    fn id(&self) -> &Self::Id;

    /// Seeds a draft from an existing entity (edit mode).
    fn to_draft(&self) -> Self::Draft;

    /// The identifier carried by a draft; `None` means "not yet created".
    fn draft_id(draft: &Self::Draft) -> Option<Self::Id>;

    /// `(field name, current value)` for every field that must be non-empty.
    fn required_fields(draft: &Self::Draft) -> Vec<(&'static str, &str)>;

    // --- Provided Methods ---

    fn upload_policy() -> UploadPolicy {
        UploadPolicy::None
    }

    /// Writes freshly uploaded references into the draft.
    /// Only called for [`UploadPolicy::Immediate`] resources.
    fn attach_media(_draft: &mut Self::Draft, _media: &[MediaRef]) {}

    /// Sort field applied before the user picks one.
    fn default_sort() -> Option<&'static str> {
        None
    }

    /// Key under which list responses nest their items.
    fn list_key() -> &'static str {
        "items"
    }

    fn collection_path() -> String {
        format!("/api/{}", Self::RESOURCE)
    }

    fn create_path() -> String {
        Self::collection_path()
    }

    fn update_route(id: &Self::Id) -> Route {
        Route::new(Method::Put, format!("{}/{}", Self::collection_path(), id))
    }

    fn delete_path(id: &Self::Id) -> String {
        format!("{}/{}", Self::collection_path(), id)
    }

    fn section_path() -> String {
        Self::collection_path()
    }

    /// Decodes the items of a list response, preserving server order.
    fn decode_items(data: Value) -> Result<Vec<Self>, RequestError> {
        let items = list_payload(data, Self::list_key())?;
        serde_json::from_value(items).map_err(|e| RequestError::Decode(e.to_string()))
    }
}

/// Checks the required fields of a draft. Whitespace-only values count as empty.
pub fn validate<T: ContentEntity>(draft: &T::Draft) -> Result<(), ValidationError> {
    let missing: Vec<&'static str> = T::required_fields(draft)
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { missing })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Clone, Deserialize)]
    struct Banner {
        id: String,
        headline: String,
    }

    #[derive(Debug, Clone, Default, Serialize)]
    struct BannerDraft {
        #[serde(skip)]
        id: Option<String>,
        headline: String,
        caption: Option<String>,
    }

    impl ContentEntity for Banner {
        type Id = String;
        type Draft = BannerDraft;
        const RESOURCE: &'static str = "banners";

        fn id(&self) -> &String {
            &self.id
        }

        fn to_draft(&self) -> BannerDraft {
            BannerDraft {
                id: Some(self.id.clone()),
                headline: self.headline.clone(),
                caption: None,
            }
        }

        fn draft_id(draft: &BannerDraft) -> Option<String> {
            draft.id.clone()
        }

        fn required_fields(draft: &BannerDraft) -> Vec<(&'static str, &str)> {
            vec![
                ("headline", draft.headline.as_str()),
                ("caption", draft.caption.as_deref().unwrap_or("")),
            ]
        }
    }

    #[test]
    fn default_routes_follow_rest_convention() {
        let id = "b7".to_string();
        assert_eq!(Banner::collection_path(), "/api/banners");
        assert_eq!(Banner::create_path(), "/api/banners");
        assert_eq!(
            Banner::update_route(&id),
            Route::new(Method::Put, "/api/banners/b7")
        );
        assert_eq!(Banner::delete_path(&id), "/api/banners/b7");
        assert_eq!(Banner::upload_policy(), UploadPolicy::None);
    }

    #[test]
    fn validation_lists_blank_fields() {
        let draft = BannerDraft {
            headline: "   ".into(),
            ..BannerDraft::default()
        };
        let err = validate::<Banner>(&draft).unwrap_err();
        assert_eq!(err.missing, vec!["headline", "caption"]);

        let draft = BannerDraft {
            headline: "Spring sale".into(),
            caption: Some("Up to 40% off".into()),
            ..BannerDraft::default()
        };
        assert!(validate::<Banner>(&draft).is_ok());
    }

    #[test]
    fn decode_items_keeps_server_order() {
        let items = Banner::decode_items(json!({"items": [
            {"id": "b2", "headline": "Second"},
            {"id": "b1", "headline": "First"}
        ]}))
        .unwrap();
        let ids: Vec<_> = items.iter().map(|b| b.id().as_str()).collect();
        assert_eq!(ids, vec!["b2", "b1"]);
        assert_eq!(items[0].to_draft().id.as_deref(), Some("b2"));
    }
}
