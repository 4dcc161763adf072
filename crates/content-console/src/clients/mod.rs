//! Per-resource clients built on [`ContentScreen`](content_framework::ContentScreen).

pub mod event_client;
pub mod feature_card_client;
pub mod product_page_client;

pub use event_client::*;
pub use feature_card_client::*;
pub use product_page_client::*;
