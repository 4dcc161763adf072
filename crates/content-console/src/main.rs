//! # Content Console
//!
//! A headless walk through the console workflow against a live backend.
//!
//! ## Quick Start
//!
//! ```bash
//! CONTENT_CONSOLE_API_URL=http://localhost:8080 RUST_LOG=info cargo run -p content-console
//! ```
//!
//! The binary:
//! 1.  Starts the [`ConsoleSystem`] (one list controller per resource).
//! 2.  Loads the first page of events, feature cards and product pages.
//! 3.  When a banner path is given as the first argument, creates an event with
//!     that banner, which refetches the events list.

use content_console::lifecycle::{setup_tracing, ConsoleSystem};
use content_console::model::EventDraft;
use content_framework::{ConsoleConfig, ContentScreen, LocalFile};
use tracing::{error, info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = ConsoleConfig::from_env()?;
    let system = ConsoleSystem::new(&config)?;

    let span = tracing::info_span!("initial_load");
    async {
        match system.events.load().await {
            Ok(view) => info!(count = view.items.len(), total = view.total_items, "Events"),
            Err(e) => error!(error = %e, "Events unavailable"),
        }
        match system.feature_cards.load().await {
            Ok(view) => info!(count = view.items.len(), "Feature cards"),
            Err(e) => error!(error = %e, "Feature cards unavailable"),
        }
        match system.product_pages.load().await {
            Ok(view) => info!(count = view.items.len(), "Product pages"),
            Err(e) => error!(error = %e, "Product pages unavailable"),
        }
    }
    .instrument(span)
    .await;

    if let Some(path) = std::env::args().nth(1) {
        let span = tracing::info_span!("event_creation");
        async {
            let bytes = match tokio::fs::read(&path).await {
                Ok(bytes) => bytes,
                Err(e) => {
                    warn!(%path, error = %e, "Banner not readable");
                    return;
                }
            };
            let mut editor = system.events.create();
            if let Some(draft) = editor.draft_mut() {
                *draft = EventDraft::new("Launch", "2024-05-01", "10:00", "HQ");
            }
            if let Err(e) = editor
                .attach(vec![LocalFile::new(path.clone(), mime_for(&path), bytes)])
                .await
            {
                error!(error = %e, "Banner upload failed");
                return;
            }
            match editor.submit().await {
                Ok(()) => info!("Event created"),
                Err(e) => error!(error = %e, "Event creation failed"),
            }
        }
        .instrument(span)
        .await;
    }

    system.shutdown().await?;
    info!("Done");
    Ok(())
}

fn mime_for(path: &str) -> &'static str {
    let ext = path.rsplit('.').next().unwrap_or_default().to_ascii_lowercase();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        _ => "application/octet-stream",
    }
}
