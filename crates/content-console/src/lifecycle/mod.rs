//! # System Lifecycle & Orchestration
//!
//! This module starts, wires and stops the list controllers of the console.
//!
//! ## The ConsoleSystem Pattern
//!
//! ```rust,ignore
//! impl ConsoleSystem {
//!     pub fn with_api(api: ApiClient, page_size: u32) -> Self {
//!         // 1. One list controller per resource, all sharing the same transport
//!         let (event_controller, event_list) = events::new(api.clone(), page_size);
//!         // 2. Each controller owns its list state in its own task
//!         let event_handle = tokio::spawn(event_controller.run());
//!         // 3. Clients hold the handle plus the ApiClient for mutations
//!         let events = EventClient::new(event_list, api.clone());
//!         // ...
//!     }
//! }
//! ```
//!
//! Editors and delete confirmations are created on demand by the clients
//! (`system.events.create()`, `system.events.delete(id)`) and talk back to their
//! list only through a refresher.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of each list channel
//! 2. **Controllers detect closure** - `receiver.recv()` returns `None`
//! 3. **Controllers log their final state** and exit
//! 4. **Await completion** - [`ConsoleSystem::shutdown`] waits for every task
//!
//! ## Observability & Tracing
//!
//! [`setup_tracing`] is re-exported from the framework; see
//! [`content_framework::tracing`] for levels and sample output.

pub mod console_system;

pub use console_system::*;
pub use content_framework::tracing::setup_tracing;
