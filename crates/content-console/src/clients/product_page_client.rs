//! # Product Page Client
//!
//! Provides a high‑level API for the Product Pages screen, including removal of
//! single gallery entries.
use crate::model::{ProductPage, ProductPageId};
use crate::product_pages::{media_path, ProductPageError};
use async_trait::async_trait;
use content_framework::{
    ApiClient, ConsoleError, ContentScreen, DeleteController, ListHandle, ListView,
    MutationController,
};
use tracing::{debug, info, instrument, warn};

/// Client for the Product Pages screen.
#[derive(Clone)]
pub struct ProductPageClient {
    list: ListHandle<ProductPage>,
    api: ApiClient,
}

impl ProductPageClient {
    pub fn new(list: ListHandle<ProductPage>, api: ApiClient) -> Self {
        Self { list, api }
    }
}

#[async_trait]
impl ContentScreen<ProductPage> for ProductPageClient {
    type Error = ProductPageError;

    fn list(&self) -> &ListHandle<ProductPage> {
        &self.list
    }

    fn api(&self) -> &ApiClient {
        &self.api
    }

    fn map_error(e: ConsoleError) -> Self::Error {
        ProductPageError::Console(e)
    }
}

impl ProductPageClient {
    pub fn create(&self) -> MutationController<ProductPage> {
        let mut editor = self.editor();
        editor.open(None);
        editor
    }

    #[instrument(skip(self))]
    pub async fn edit(
        &self,
        id: ProductPageId,
    ) -> Result<MutationController<ProductPage>, ProductPageError> {
        debug!("Opening editor");
        let page = self
            .find(id.clone())
            .await?
            .ok_or(ProductPageError::NotFound(id))?;
        let mut editor = self.editor();
        editor.open(Some(&page));
        Ok(editor)
    }

    pub fn delete(&self, id: ProductPageId) -> DeleteController<ProductPage> {
        let mut deleter = self.deleter();
        deleter.request_delete(id);
        deleter
    }

    /// Deletes one gallery entry, then refetches the list.
    #[instrument(skip(self))]
    pub async fn remove_media(
        &self,
        id: ProductPageId,
        media_id: String,
    ) -> Result<ListView<ProductPage>, ProductPageError> {
        let page = self
            .find(id.clone())
            .await?
            .ok_or_else(|| ProductPageError::NotFound(id.clone()))?;
        if page.media_item(&media_id).is_none() {
            return Err(ProductPageError::MediaNotFound {
                product: id,
                media_id,
            });
        }

        self.api
            .delete(&media_path(&id, &media_id))
            .await
            .map_err(|e| {
                warn!(error = %e, "Media removal failed");
                Self::map_error(e.into())
            })?;
        info!("Media removed");

        self.list.refresh().await.map_err(Self::map_error)
    }
}
