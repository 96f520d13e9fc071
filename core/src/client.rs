//! Stateless HTTP request builder and response parser for the item API.
//!
//! # Design
//! `ItemClient` holds only a `base_url`. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method that
//! consumes an `HttpResponse`, so the caller owns the network round-trip.
//!
//! Successful responses are unwrapped from the server's envelope. Error
//! responses are decoded as envelopes too when possible so the server's
//! message reaches the caller.

use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateItem, Envelope, Item, UpdateItem};

#[derive(Debug, Clone)]
pub struct ItemClient {
    base_url: String,
}

impl ItemClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/items", self.base_url)
    }

    fn item_url(&self, id: Uuid) -> String {
        format!("{}/items/{id}", self.base_url)
    }

    pub fn build_list_items(&self) -> HttpRequest {
        HttpRequest::without_body(HttpMethod::Get, self.collection_url())
    }

    pub fn build_get_item(&self, id: Uuid) -> HttpRequest {
        HttpRequest::without_body(HttpMethod::Get, self.item_url(id))
    }

    pub fn build_create_item(&self, input: &CreateItem) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest::with_json(HttpMethod::Post, self.collection_url(), body))
    }

    pub fn build_update_item(&self, id: Uuid, input: &UpdateItem) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest::with_json(HttpMethod::Put, self.item_url(id), body))
    }

    /// A patch that flips `is_done` and leaves `text` alone.
    pub fn build_toggle_item(&self, item: &Item) -> Result<HttpRequest, ApiError> {
        let patch = UpdateItem {
            text: None,
            is_done: Some(!item.is_done),
        };
        self.build_update_item(item.id, &patch)
    }

    pub fn build_delete_item(&self, id: Uuid) -> HttpRequest {
        HttpRequest::without_body(HttpMethod::Delete, self.item_url(id))
    }

    pub fn parse_list_items(&self, response: HttpResponse) -> Result<Vec<Item>, ApiError> {
        parse_envelope(response, 200)
    }

    pub fn parse_get_item(&self, response: HttpResponse) -> Result<Item, ApiError> {
        parse_envelope(response, 200)
    }

    pub fn parse_create_item(&self, response: HttpResponse) -> Result<Item, ApiError> {
        parse_envelope(response, 201)
    }

    pub fn parse_update_item(&self, response: HttpResponse) -> Result<Item, ApiError> {
        parse_envelope(response, 200)
    }

    /// 204 carries no body, so there is no envelope to unwrap.
    pub fn parse_delete_item(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)
    }
}

fn parse_envelope<T: DeserializeOwned>(response: HttpResponse, expected: u16) -> Result<T, ApiError> {
    check_status(&response, expected)?;
    let Envelope {
        success,
        message,
        response_object,
        ..
    } = serde_json::from_str::<Envelope<T>>(&response.body)
        .map_err(|e| ApiError::Deserialization(e.to_string()))?;
    match response_object {
        Some(payload) if success => Ok(payload),
        _ => Err(ApiError::Envelope { message }),
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    let message = serde_json::from_str::<Envelope<serde_json::Value>>(&response.body)
        .map(|envelope| envelope.message)
        .unwrap_or_else(|_| response.body.clone());
    Err(match response.status {
        400 => ApiError::Validation { message },
        404 => ApiError::NotFound { message },
        status => ApiError::Http { status, message },
    })
}
