//! # Feature Card Client
//!
//! Provides a high‑level API for the Feature Cards screen, including deletion of
//! the whole card section.
use crate::feature_cards::FeatureCardError;
use crate::model::{CardId, FeatureCard};
use async_trait::async_trait;
use content_framework::{
    ApiClient, ConsoleError, ContentScreen, DeleteController, ListHandle, ListView,
    MutationController,
};
use tracing::{debug, instrument};

/// Client for the Feature Cards screen.
#[derive(Clone)]
pub struct FeatureCardClient {
    list: ListHandle<FeatureCard>,
    api: ApiClient,
}

impl FeatureCardClient {
    pub fn new(list: ListHandle<FeatureCard>, api: ApiClient) -> Self {
        Self { list, api }
    }
}

#[async_trait]
impl ContentScreen<FeatureCard> for FeatureCardClient {
    type Error = FeatureCardError;

    fn list(&self) -> &ListHandle<FeatureCard> {
        &self.list
    }

    fn api(&self) -> &ApiClient {
        &self.api
    }

    fn map_error(e: ConsoleError) -> Self::Error {
        FeatureCardError::Console(e)
    }
}

impl FeatureCardClient {
    pub fn create(&self) -> MutationController<FeatureCard> {
        let mut editor = self.editor();
        editor.open(None);
        editor
    }

    #[instrument(skip(self))]
    pub async fn edit(
        &self,
        id: CardId,
    ) -> Result<MutationController<FeatureCard>, FeatureCardError> {
        debug!("Opening editor");
        let card = self
            .find(id.clone())
            .await?
            .ok_or(FeatureCardError::NotFound(id))?;
        let mut editor = self.editor();
        editor.open(Some(&card));
        Ok(editor)
    }

    pub fn delete(&self, id: CardId) -> DeleteController<FeatureCard> {
        let mut deleter = self.deleter();
        deleter.request_delete(id);
        deleter
    }

    /// Opens the section delete confirmation. Nothing is sent yet.
    #[instrument(skip(self))]
    pub async fn request_section_delete(&self) -> Result<ListView<FeatureCard>, FeatureCardError> {
        self.list
            .request_section_delete()
            .await
            .map_err(Self::map_error)
    }

    /// Deletes the section, then refetches. Fails with `NothingToConfirm`
    /// unless a request is pending.
    #[instrument(skip(self))]
    pub async fn confirm_section_delete(&self) -> Result<ListView<FeatureCard>, FeatureCardError> {
        debug!("Sending request");
        self.list
            .confirm_section_delete()
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn cancel_section_delete(&self) -> Result<ListView<FeatureCard>, FeatureCardError> {
        self.list
            .cancel_section_delete()
            .await
            .map_err(Self::map_error)
    }
}
