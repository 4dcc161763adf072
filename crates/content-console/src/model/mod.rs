//! Wire types of the console resources, implementing [`ContentEntity`](content_framework::ContentEntity).

pub mod event;
pub mod feature_card;
pub mod product_page;

pub use event::*;
pub use feature_card::*;
pub use product_page::*;
