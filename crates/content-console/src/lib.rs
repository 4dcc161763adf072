//! # Content Console Library
//!
//! This library exposes the console resources, their clients and the system
//! orchestrator for integration testing and for UI front-ends.

pub mod clients;
pub mod events;
pub mod feature_cards;
pub mod lifecycle;
pub mod model;
pub mod product_pages;
