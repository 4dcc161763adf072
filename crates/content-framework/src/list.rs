//! # Resource List Controller
//!
//! This module defines the `ListController`, the component that owns the list state of
//! one resource type. It is the "Server" side of the list: it holds the only copy of the
//! items and filter, and processes requests sequentially from its channel.
//!
//! ## State Machine
//!
//! ```text
//! idle ──load──▶ loading ──ok──▶ ready
//!                   │              │ search / sort / page / refresh
//!                   └──err──▶ errored ◀──┘ (items kept)
//! ```
//!
//! A successful fetch replaces items and pagination in one step. A failed
//! fetch only records the message: the previous items stay visible.

use crate::api::ApiClient;
use crate::client::ListHandle;
use crate::entity::ContentEntity;
use crate::envelope::ApiSuccess;
use crate::error::ConsoleError;
use crate::message::ListRequest;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Channel capacity of a list controller.
const LIST_BUFFER: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListPhase {
    #[default]
    Idle,
    Loading,
    Ready,
    Errored,
}

/// The (search, sort, page) tuple a list is fetched for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListFilter {
    pub search: String,
    pub sort_field: Option<String>,
    pub sort_order: SortOrder,
    pub page: u32,
    pub page_size: u32,
}

impl ListFilter {
    pub fn new(page_size: u32) -> Self {
        Self {
            search: String::new(),
            sort_field: None,
            sort_order: SortOrder::Asc,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn sorted_by(mut self, field: Option<&str>) -> Self {
        self.sort_field = field.map(str::to_string);
        self
    }

    /// New search term; back to the first page.
    pub fn change_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.page = 1;
    }

    /// Re-selecting the current field flips the order; a new field starts ascending.
    pub fn change_sort(&mut self, field: impl Into<String>) {
        let field = field.into();
        if self.sort_field.as_deref() == Some(field.as_str()) {
            self.sort_order = self.sort_order.toggled();
        } else {
            self.sort_field = Some(field);
            self.sort_order = SortOrder::Asc;
        }
        self.page = 1;
    }

    pub fn change_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// `search, sortBy, sortOrder, page, limit`; `sortBy` only when a field is set.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = vec![("search".to_string(), self.search.clone())];
        if let Some(field) = &self.sort_field {
            query.push(("sortBy".to_string(), field.clone()));
        }
        query.push(("sortOrder".to_string(), self.sort_order.as_str().to_string()));
        query.push(("page".to_string(), self.page.to_string()));
        query.push(("limit".to_string(), self.page_size.to_string()));
        query
    }
}

/// Everything a list screen renders.
#[derive(Debug, Clone)]
pub struct ListView<T> {
    pub items: Vec<T>,
    pub filter: ListFilter,
    pub total_items: u64,
    pub total_pages: u32,
    pub phase: ListPhase,
    /// Last user-visible failure; cleared by the next successful fetch.
    pub error: Option<String>,
    pub section_delete_pending: bool,
}

impl<T> ListView<T> {
    fn new(filter: ListFilter) -> Self {
        Self {
            items: Vec::new(),
            filter,
            total_items: 0,
            total_pages: 0,
            phase: ListPhase::Idle,
            error: None,
            section_delete_pending: false,
        }
    }
}

/// One decoded page of results.
struct ListPage<T> {
    items: Vec<T>,
    page: u32,
    total_items: u64,
    total_pages: u32,
}

impl<T: ContentEntity> ListPage<T> {
    fn decode(success: ApiSuccess, filter: &ListFilter) -> Result<Self, ConsoleError> {
        let pagination = success.pagination.unwrap_or_default();
        let items = T::decode_items(success.data)?;
        let total_items = pagination.total_items.unwrap_or(items.len() as u64);
        let total_pages = match (pagination.total_pages, pagination.total_items) {
            (Some(pages), _) => pages,
            (None, Some(total)) => {
                let page_size = u64::from(pagination.limit.unwrap_or(filter.page_size).max(1));
                u32::try_from(total.div_ceil(page_size)).unwrap_or(u32::MAX)
            }
            (None, None) => 1,
        };
        Ok(Self {
            items,
            page: pagination.page.map_or(filter.page, |page| page.max(1)),
            total_items,
            total_pages,
        })
    }
}

/// The controller that owns the list of one resource.
///
/// **Concurrency Model**:
/// Each `ListController` runs in its own task and handles one request at a time,
/// so the state needs no lock. Mutation and delete controllers never touch it;
/// they send a refresh request through a [`Refresher`](crate::client::Refresher).
///
/// # Usage Pattern
///
/// 1.  **Create**: `ListController::new()` returns the controller and a [`ListHandle`].
/// 2.  **Run**: spawn `controller.run()`.
/// 3.  **Use**: call `handle.load()` when the screen mounts, then drive filters.
pub struct ListController<T: ContentEntity> {
    receiver: mpsc::Receiver<ListRequest<T>>,
    api: ApiClient,
    view: ListView<T>,
}

impl<T: ContentEntity> ListController<T> {
    pub fn new(api: ApiClient, page_size: u32) -> (Self, ListHandle<T>) {
        let (sender, receiver) = mpsc::channel(LIST_BUFFER);
        let filter = ListFilter::new(page_size).sorted_by(T::default_sort());
        let controller = Self {
            receiver,
            api,
            view: ListView::new(filter),
        };
        (controller, ListHandle::new(sender))
    }

    /// Runs the controller's event loop until every handle is dropped.
    pub async fn run(mut self) {
        let resource = T::RESOURCE;
        info!(resource, "List controller started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ListRequest::Load { respond_to } => {
                    debug!(resource, "Load");
                    self.fetch().await;
                    let _ = respond_to.send(Ok(self.view.clone()));
                }
                ListRequest::ChangeSearch { term, respond_to } => {
                    debug!(resource, %term, "ChangeSearch");
                    self.view.filter.change_search(term);
                    self.fetch().await;
                    let _ = respond_to.send(Ok(self.view.clone()));
                }
                ListRequest::ChangeSort { field, respond_to } => {
                    debug!(resource, %field, "ChangeSort");
                    self.view.filter.change_sort(field);
                    self.fetch().await;
                    let _ = respond_to.send(Ok(self.view.clone()));
                }
                ListRequest::ChangePage { page, respond_to } => {
                    debug!(resource, page, "ChangePage");
                    self.view.filter.change_page(page);
                    self.fetch().await;
                    let _ = respond_to.send(Ok(self.view.clone()));
                }
                ListRequest::Refresh { respond_to } => {
                    debug!(resource, "Refresh requested");
                    self.fetch().await;
                    let _ = respond_to.send(Ok(self.view.clone()));
                }
                ListRequest::Snapshot { respond_to } => {
                    let _ = respond_to.send(Ok(self.view.clone()));
                }
                ListRequest::RequestSectionDelete { respond_to } => {
                    debug!(resource, "Section delete requested");
                    self.view.section_delete_pending = true;
                    let _ = respond_to.send(Ok(self.view.clone()));
                }
                ListRequest::CancelSectionDelete { respond_to } => {
                    debug!(resource, "Section delete cancelled");
                    self.view.section_delete_pending = false;
                    let _ = respond_to.send(Ok(self.view.clone()));
                }
                ListRequest::ConfirmSectionDelete { respond_to } => {
                    let result = self.delete_section().await;
                    let _ = respond_to.send(result.map(|()| self.view.clone()));
                }
            }
        }

        info!(resource, size = self.view.items.len(), "Shutdown");
    }

    async fn fetch(&mut self) {
        let resource = T::RESOURCE;
        self.view.phase = ListPhase::Loading;

        let query = self.view.filter.to_query();
        let result = match self.api.get(&T::collection_path(), &query).await {
            Ok(success) => ListPage::<T>::decode(success, &self.view.filter),
            Err(e) => Err(e.into()),
        };

        match result {
            Ok(page) => {
                self.view.items = page.items;
                self.view.filter.page = page.page;
                self.view.total_items = page.total_items;
                self.view.total_pages = page.total_pages;
                self.view.phase = ListPhase::Ready;
                self.view.error = None;
                info!(
                    resource,
                    count = self.view.items.len(),
                    total = self.view.total_items,
                    page = self.view.filter.page,
                    "Fetched"
                );
            }
            Err(e) => {
                warn!(resource, error = %e, "Fetch failed");
                self.view.phase = ListPhase::Errored;
                self.view.error = Some(e.to_string());
            }
        }
    }

    async fn delete_section(&mut self) -> Result<(), ConsoleError> {
        let resource = T::RESOURCE;
        if !self.view.section_delete_pending {
            warn!(resource, "Section delete confirmed without a pending request");
            return Err(ConsoleError::NothingToConfirm);
        }

        match self.api.delete(&T::section_path()).await {
            Ok(_) => {
                info!(resource, "Section deleted");
                self.view.section_delete_pending = false;
                self.fetch().await;
                Ok(())
            }
            Err(e) => {
                warn!(resource, error = %e, "Section delete failed");
                self.view.error = Some(e.to_string());
                Err(e.into())
            }
        }
    }
}
