//! Item use cases.
//!
//! # Design
//! `ItemService` turns store outcomes into `ServiceResponse` envelopes. It
//! never returns an error: a store failure is logged with its detail and
//! surfaced as a generic 500 envelope, so nothing internal leaks to clients.
//!
//! `update` and `remove` look the item up first. If that lookup succeeds
//! but the mutation then finds nothing, the record vanished in between; this
//! is reported as a 500, not a 404.

use std::sync::Arc;

use axum::http::StatusCode;
use tracing::{debug, error};

use crate::model::{CreateItem, Item, ItemId, UpdateItem};
use crate::response::ServiceResponse;
use crate::store::ItemStore;

const MSG_NOT_FOUND: &str = "item not found";

#[derive(Clone)]
pub struct ItemService {
    store: Arc<dyn ItemStore>,
}

impl ItemService {
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, input: CreateItem) -> ServiceResponse<Item> {
        match self.store.create(input).await {
            Ok(item) => {
                debug!(id = %item.id, "item created");
                ServiceResponse::success("item created successfully", Some(item), StatusCode::CREATED)
            }
            Err(err) => {
                error!(error = %err, "error creating item");
                internal_error("error occurred while creating the item.")
            }
        }
    }

    pub async fn find_all(&self) -> ServiceResponse<Vec<Item>> {
        match self.store.find_all().await {
            Ok(items) if items.is_empty() => {
                ServiceResponse::success("No items found", Some(Vec::new()), StatusCode::OK)
            }
            Ok(items) => ServiceResponse::success("items retrieved successfully", Some(items), StatusCode::OK),
            Err(err) => {
                error!(error = %err, "error retrieving items");
                internal_error("error occurred while retrieving items.")
            }
        }
    }

    pub async fn find_by_id(&self, id: ItemId) -> ServiceResponse<Item> {
        match self.store.find_by_id(id).await {
            Ok(Some(item)) => ServiceResponse::success("item retrieved successfully", Some(item), StatusCode::OK),
            Ok(None) => not_found(),
            Err(err) => {
                error!(%id, error = %err, "error retrieving item");
                internal_error("error occurred while retrieving the item.")
            }
        }
    }

    pub async fn update(&self, id: ItemId, patch: UpdateItem) -> ServiceResponse<Item> {
        const MSG_FAILED: &str = "error occurred while updating the item.";

        match self.store.find_by_id(id).await {
            Ok(Some(_)) => {}
            Ok(None) => return not_found(),
            Err(err) => {
                error!(%id, error = %err, "error updating item");
                return internal_error(MSG_FAILED);
            }
        }

        match self.store.update(id, patch).await {
            Ok(Some(item)) => ServiceResponse::success("item updated successfully", Some(item), StatusCode::OK),
            Ok(None) => {
                error!(%id, "item vanished between lookup and update");
                internal_error(MSG_FAILED)
            }
            Err(err) => {
                error!(%id, error = %err, "error updating item");
                internal_error(MSG_FAILED)
            }
        }
    }

    pub async fn remove(&self, id: ItemId) -> ServiceResponse<()> {
        const MSG_FAILED: &str = "error occurred while deleting the item.";

        match self.store.find_by_id(id).await {
            Ok(Some(_)) => {}
            Ok(None) => return not_found(),
            Err(err) => {
                error!(%id, error = %err, "error deleting item");
                return internal_error(MSG_FAILED);
            }
        }

        match self.store.remove(id).await {
            Ok(true) => ServiceResponse::success("item deleted successfully", None, StatusCode::NO_CONTENT),
            Ok(false) => {
                error!(%id, "item vanished between lookup and delete");
                internal_error(MSG_FAILED)
            }
            Err(err) => {
                error!(%id, error = %err, "error deleting item");
                internal_error(MSG_FAILED)
            }
        }
    }
}

fn not_found<T>() -> ServiceResponse<T> {
    ServiceResponse::failure(MSG_NOT_FOUND, None, StatusCode::NOT_FOUND)
}

fn internal_error<T>(message: &str) -> ServiceResponse<T> {
    ServiceResponse::failure(message, None, StatusCode::INTERNAL_SERVER_ERROR)
}
