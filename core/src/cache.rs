//! Local mirror of the server's items.
//!
//! # Design
//! The cache is fed only from parsed server responses; it never invents
//! items. Each successful mutation is applied locally so the UI updates at
//! once, and also marks the cache stale: the server is the source of truth,
//! and the next list response replaces everything. Nothing is pushed from the
//! server, so staleness is the only signal the host gets to refetch.

use uuid::Uuid;

use crate::types::Item;

#[derive(Debug, Clone)]
pub struct ItemCache {
    items: Vec<Item>,
    stale: bool,
}

impl Default for ItemCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemCache {
    /// An empty cache that has never been loaded, hence stale.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            stale: true,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: Uuid) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    /// Replaces local state with a fresh list response.
    pub fn replace_all(&mut self, items: Vec<Item>) {
        self.items = items;
        self.stale = false;
    }

    pub fn record_created(&mut self, item: Item) {
        match self.items.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => *existing = item,
            None => self.items.push(item),
        }
        self.invalidate();
    }

    /// Replaces the item with the same id. An id the cache has never seen is
    /// ignored; the staleness flag covers it.
    pub fn record_updated(&mut self, item: Item) {
        if let Some(existing) = self.items.iter_mut().find(|existing| existing.id == item.id) {
            *existing = item;
        }
        self.invalidate();
    }

    pub fn record_removed(&mut self, id: Uuid) {
        self.items.retain(|item| item.id != id);
        self.invalidate();
    }
}
