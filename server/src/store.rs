//! Item storage.
//!
//! # Design
//! `ItemStore` is the seam between the service and whatever holds the items.
//! Every method is async and fallible so a real datastore can slot in later;
//! a missing record is reported as `Ok(None)` / `Ok(false)`, never as an
//! error.
//!
//! Reads return owned clones. Callers get a snapshot, not an alias into the
//! canonical collection, so nothing outside the store can mutate a record.

use async_trait::async_trait;
use chrono::Utc;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::model::{CreateItem, Item, ItemId, UpdateItem};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Assigns a fresh id and timestamps, appends, and returns a copy.
    async fn create(&self, input: CreateItem) -> StoreResult<Item>;

    /// All items in insertion order.
    async fn find_all(&self) -> StoreResult<Vec<Item>>;

    async fn find_by_id(&self, id: ItemId) -> StoreResult<Option<Item>>;

    /// Merges `patch` over the stored record and bumps `updated_at`.
    async fn update(&self, id: ItemId, patch: UpdateItem) -> StoreResult<Option<Item>>;

    /// Returns whether a record was found and removed.
    async fn remove(&self, id: ItemId) -> StoreResult<bool>;

    /// Drops every record and returns how many were dropped.
    async fn clear(&self) -> StoreResult<usize>;
}

/// Process-memory store backed by a `Vec` in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryItemStore {
    items: RwLock<Vec<Item>>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemStore for InMemoryItemStore {
    async fn create(&self, input: CreateItem) -> StoreResult<Item> {
        let item = Item::new(input, Utc::now());
        self.items.write().await.push(item.clone());
        Ok(item)
    }

    async fn find_all(&self) -> StoreResult<Vec<Item>> {
        Ok(self.items.read().await.clone())
    }

    async fn find_by_id(&self, id: ItemId) -> StoreResult<Option<Item>> {
        let items = self.items.read().await;
        Ok(items.iter().find(|item| item.id == id).cloned())
    }

    async fn update(&self, id: ItemId, patch: UpdateItem) -> StoreResult<Option<Item>> {
        let mut items = self.items.write().await;
        let Some(item) = items.iter_mut().find(|item| item.id == id) else {
            return Ok(None);
        };
        patch.apply(item, Utc::now());
        Ok(Some(item.clone()))
    }

    async fn remove(&self, id: ItemId) -> StoreResult<bool> {
        let mut items = self.items.write().await;
        match items.iter().position(|item| item.id == id) {
            Some(index) => {
                items.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn clear(&self) -> StoreResult<usize> {
        let mut items = self.items.write().await;
        let dropped = items.len();
        items.clear();
        Ok(dropped)
    }
}
