//! Service behaviour when the store misbehaves.
//!
//! `FailingStore` errors on every call; `VanishingStore` finds every item on
//! lookup but then reports it gone on update/remove, which is what a record
//! deleted between the lookup and the mutation looks like.

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::{Request, StatusCode};
use chrono::Utc;
use http_body_util::BodyExt;
use todo_server::model::{CreateItem, Item, ItemId, UpdateItem};
use todo_server::service::ItemService;
use todo_server::store::{ItemStore, StoreError, StoreResult};
use todo_server::{app, AppState, ServiceResponse};
use tower::ServiceExt;
use uuid::Uuid;

struct FailingStore;

#[async_trait]
impl ItemStore for FailingStore {
    async fn create(&self, _input: CreateItem) -> StoreResult<Item> {
        Err(StoreError::Unavailable("disk on fire".to_string()))
    }

    async fn find_all(&self) -> StoreResult<Vec<Item>> {
        Err(StoreError::Unavailable("disk on fire".to_string()))
    }

    async fn find_by_id(&self, _id: ItemId) -> StoreResult<Option<Item>> {
        Err(StoreError::Unavailable("bad page".to_string()))
    }

    async fn update(&self, _id: ItemId, _patch: UpdateItem) -> StoreResult<Option<Item>> {
        Err(StoreError::Unavailable("disk on fire".to_string()))
    }

    async fn remove(&self, _id: ItemId) -> StoreResult<bool> {
        Err(StoreError::Unavailable("disk on fire".to_string()))
    }

    async fn clear(&self) -> StoreResult<usize> {
        Err(StoreError::Unavailable("disk on fire".to_string()))
    }
}

struct VanishingStore;

#[async_trait]
impl ItemStore for VanishingStore {
    async fn create(&self, input: CreateItem) -> StoreResult<Item> {
        Ok(Item::new(input, Utc::now()))
    }

    async fn find_all(&self) -> StoreResult<Vec<Item>> {
        Ok(Vec::new())
    }

    async fn find_by_id(&self, id: ItemId) -> StoreResult<Option<Item>> {
        let mut item = Item::new(
            CreateItem {
                text: "ghost".to_string(),
                is_done: None,
            },
            Utc::now(),
        );
        item.id = id;
        Ok(Some(item))
    }

    async fn update(&self, _id: ItemId, _patch: UpdateItem) -> StoreResult<Option<Item>> {
        Ok(None)
    }

    async fn remove(&self, _id: ItemId) -> StoreResult<bool> {
        Ok(false)
    }

    async fn clear(&self) -> StoreResult<usize> {
        Ok(0)
    }
}

fn failing() -> ItemService {
    ItemService::new(Arc::new(FailingStore))
}

fn vanishing() -> ItemService {
    ItemService::new(Arc::new(VanishingStore))
}

fn assert_internal<T>(response: &ServiceResponse<T>, message: &str) {
    assert!(!response.success);
    assert_eq!(response.message, message);
    assert!(response.response_object.is_none());
    assert_eq!(response.status_code, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn create_failure_is_500() {
    let response = failing()
        .create(CreateItem {
            text: "x".to_string(),
            is_done: None,
        })
        .await;
    assert_internal(&response, "error occurred while creating the item.");
}

#[tokio::test]
async fn find_all_failure_is_500() {
    let response = failing().find_all().await;
    assert_internal(&response, "error occurred while retrieving items.");
}

#[tokio::test]
async fn find_by_id_failure_is_500() {
    let response = failing().find_by_id(Uuid::new_v4()).await;
    assert_internal(&response, "error occurred while retrieving the item.");
}

#[tokio::test]
async fn update_failure_is_500() {
    let response = failing().update(Uuid::new_v4(), UpdateItem::default()).await;
    assert_internal(&response, "error occurred while updating the item.");
}

#[tokio::test]
async fn remove_failure_is_500() {
    let response = failing().remove(Uuid::new_v4()).await;
    assert_internal(&response, "error occurred while deleting the item.");
}

#[tokio::test]
async fn update_after_vanished_record_is_500_not_404() {
    let response = vanishing()
        .update(
            Uuid::new_v4(),
            UpdateItem {
                text: None,
                is_done: Some(true),
            },
        )
        .await;
    assert_internal(&response, "error occurred while updating the item.");
}

#[tokio::test]
async fn remove_after_vanished_record_is_500_not_404() {
    let response = vanishing().remove(Uuid::new_v4()).await;
    assert_internal(&response, "error occurred while deleting the item.");
}

#[tokio::test]
async fn internal_errors_do_not_leak_detail_over_http() {
    let app = app(AppState::new(Arc::new(FailingStore)));
    let resp = app
        .oneshot(Request::builder().uri("/items").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let body = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(!body.contains("disk on fire"));
    let envelope: ServiceResponse<Vec<Item>> = serde_json::from_str(&body).unwrap();
    assert_eq!(envelope.message, "error occurred while retrieving items.");
}

#[tokio::test]
async fn shutdown_surfaces_store_failure() {
    let state = AppState::new(Arc::new(FailingStore));
    assert!(state.shutdown().await.is_err());
}
