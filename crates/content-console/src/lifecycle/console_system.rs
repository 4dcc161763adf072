use crate::clients::{EventClient, FeatureCardClient, ProductPageClient};
use crate::{events, feature_cards, product_pages};
use content_framework::{ApiClient, ConfigError, ConsoleConfig};
use thiserror::Error;
use tracing::{error, info};

/// A list controller task ended abnormally.
#[derive(Debug, Error)]
#[error("List controller task failed: {0}")]
pub struct ShutdownError(String);

/// The runtime orchestrator of the console.
///
/// `ConsoleSystem` is responsible for:
/// - **Lifecycle Management**: starting one list controller per resource and stopping them
/// - **Dependency Wiring**: giving every client the same [`ApiClient`]
///
/// # Example
///
/// ```ignore
/// let system = ConsoleSystem::new(&ConsoleConfig::from_env()?)?;
///
/// let view = system.events.load().await?;
/// let mut editor = system.events.create();
/// // ... fill and submit ...
///
/// system.shutdown().await?;
/// ```
pub struct ConsoleSystem {
    pub events: EventClient,
    pub feature_cards: FeatureCardClient,
    pub product_pages: ProductPageClient,

    /// Task handles of the list controllers (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ConsoleSystem {
    /// Builds the HTTP transport from `config` and starts every controller.
    pub fn new(config: &ConsoleConfig) -> Result<Self, ConfigError> {
        let api = ApiClient::http(config)?;
        info!(base_url = %config.base_url(), "Console configured");
        Ok(Self::with_api(api, config.page_size()))
    }

    /// Starts every controller over an existing client. Tests pass a mock-backed one.
    pub fn with_api(api: ApiClient, page_size: u32) -> Self {
        let (event_controller, event_list) = events::new(api.clone(), page_size);
        let event_handle = tokio::spawn(event_controller.run());

        let (card_controller, card_list) = feature_cards::new(api.clone(), page_size);
        let card_handle = tokio::spawn(card_controller.run());

        let (page_controller, page_list) = product_pages::new(api.clone(), page_size);
        let page_handle = tokio::spawn(page_controller.run());

        Self {
            events: EventClient::new(event_list, api.clone()),
            feature_cards: FeatureCardClient::new(card_list, api.clone()),
            product_pages: ProductPageClient::new(page_list, api),
            handles: vec![event_handle, card_handle, page_handle],
        }
    }

    /// Drops the clients and waits for every controller to drain its queue.
    ///
    /// Editors or delete controllers still alive elsewhere hold a refresher and keep
    /// their list controller running, so drop them first.
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        info!("Shutting down console...");

        drop(self.events);
        drop(self.feature_cards);
        drop(self.product_pages);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("List controller task failed: {:?}", e);
                return Err(ShutdownError(format!("{e:?}")));
            }
        }

        info!("Console shutdown complete.");
        Ok(())
    }
}
