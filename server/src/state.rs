//! Process-wide application state.

use std::sync::Arc;

use tracing::info;

use crate::service::ItemService;
use crate::store::{InMemoryItemStore, ItemStore, StoreResult};

/// Shared by every handler. Cloning is cheap; all clones point at the same
/// store.
#[derive(Clone)]
pub struct AppState {
    service: ItemService,
    store: Arc<dyn ItemStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self {
            service: ItemService::new(Arc::clone(&store)),
            store,
        }
    }

    /// A fresh, isolated in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryItemStore::new()))
    }

    pub fn service(&self) -> &ItemService {
        &self.service
    }

    /// Drops every stored item. Called once the server has stopped accepting
    /// requests.
    pub async fn shutdown(&self) -> StoreResult<usize> {
        let dropped = self.store.clear().await?;
        info!(dropped, "item store cleared");
        Ok(dropped)
    }
}
