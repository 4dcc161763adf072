//! # List Messages
//!
//! This module defines the message types exchanged between a
//! [`ListHandle`](crate::client::ListHandle) and its
//! [`ListController`](crate::list::ListController).

use crate::entity::ContentEntity;
use crate::error::ConsoleError;
use crate::list::ListView;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by list controllers.
pub type Response<T> = oneshot::Sender<Result<T, ConsoleError>>;

/// Internal message type sent to the list controller.
///
/// Every variant that changes the filter, and `Refresh`, makes the controller
/// re-enter `loading` and fetch before it answers. The answer is always the
/// full [`ListView`] after the transition, so callers never observe a partial
/// update.
#[derive(Debug)]
pub enum ListRequest<T: ContentEntity> {
    Load {
        respond_to: Response<ListView<T>>,
    },
    ChangeSearch {
        term: String,
        respond_to: Response<ListView<T>>,
    },
    ChangeSort {
        field: String,
        respond_to: Response<ListView<T>>,
    },
    ChangePage {
        page: u32,
        respond_to: Response<ListView<T>>,
    },
    /// Sent by sibling controllers after a successful mutation.
    Refresh {
        respond_to: Response<ListView<T>>,
    },
    Snapshot {
        respond_to: Response<ListView<T>>,
    },
    RequestSectionDelete {
        respond_to: Response<ListView<T>>,
    },
    ConfirmSectionDelete {
        respond_to: Response<ListView<T>>,
    },
    CancelSectionDelete {
        respond_to: Response<ListView<T>>,
    },
}
