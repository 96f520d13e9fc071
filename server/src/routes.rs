//! HTTP transport for the item API.
//!
//! Handlers validate the path identifier and body first and only call the
//! service when both pass. Validation failures short-circuit with a 400
//! envelope; otherwise the service's envelope is written as-is.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request, State},
    http::{header, request::Parts, StatusCode},
    routing::get,
    Json, Router,
};
use serde_json::{Map, Value};

use crate::model::Item;
use crate::openapi;
use crate::response::ServiceResponse;
use crate::state::AppState;
use crate::validation::{self, ValidationError};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/{id}", get(get_item).put(update_item).delete(delete_item))
        .route("/openapi.json", get(openapi_document))
        .fallback(route_not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state)
}

/// A request body parsed as untyped JSON.
///
/// Unlike `axum::Json`, every rejection is a `ValidationError` so clients
/// always get the envelope. An empty body reads as `{}`.
pub struct JsonBody(pub Value);

impl<S: Send + Sync> FromRequest<S> for JsonBody {
    type Rejection = ValidationError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        if let Some(content_type) = content_type {
            if !is_json(&content_type) {
                return Err(ValidationError::body(
                    "Expected request with `Content-Type: application/json`",
                ));
            }
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ValidationError::body(rejection.body_text()))?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonBody(Value::Object(Map::new())));
        }
        serde_json::from_slice(&bytes)
            .map(JsonBody)
            .map_err(|err| ValidationError::body(err.to_string()))
    }
}

/// The raw `{id}` path segment.
///
/// Parsing it into an `ItemId` is left to `validation` so a PUT can report
/// the identifier and body issues together. A segment that cannot be
/// extracted at all (invalid percent-encoded UTF-8) is rejected with the same
/// identifier message.
pub struct ItemIdPath(pub String);

impl<S: Send + Sync> FromRequestParts<S> for ItemIdPath {
    type Rejection = ValidationError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<String>::from_request_parts(parts, state)
            .await
            .map(|Path(id)| ItemIdPath(id))
            .map_err(|_| ValidationError::bad_id())
    }
}

fn is_json(content_type: &str) -> bool {
    let essence = content_type.split(';').next().unwrap_or_default().trim();
    essence.eq_ignore_ascii_case("application/json")
        || essence
            .rsplit_once('+')
            .is_some_and(|(_, suffix)| suffix.eq_ignore_ascii_case("json"))
}

async fn list_items(State(state): State<AppState>) -> ServiceResponse<Vec<Item>> {
    state.service().find_all().await
}

async fn create_item(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<ServiceResponse<Item>, ValidationError> {
    let input = validation::validate_create(&body)?;
    Ok(state.service().create(input).await)
}

async fn get_item(
    State(state): State<AppState>,
    ItemIdPath(id): ItemIdPath,
) -> Result<ServiceResponse<Item>, ValidationError> {
    let id = validation::validate_item_id(&id)?;
    Ok(state.service().find_by_id(id).await)
}

async fn update_item(
    State(state): State<AppState>,
    ItemIdPath(id): ItemIdPath,
    JsonBody(body): JsonBody,
) -> Result<ServiceResponse<Item>, ValidationError> {
    let (id, patch) = validation::validate_update_request(&id, &body)?;
    Ok(state.service().update(id, patch).await)
}

async fn delete_item(
    State(state): State<AppState>,
    ItemIdPath(id): ItemIdPath,
) -> Result<ServiceResponse<()>, ValidationError> {
    let id = validation::validate_item_id(&id)?;
    Ok(state.service().remove(id).await)
}

async fn openapi_document() -> Json<Value> {
    Json(openapi::document())
}

async fn route_not_found() -> ServiceResponse<()> {
    ServiceResponse::failure("Not Found", None, StatusCode::NOT_FOUND)
}

async fn method_not_allowed() -> ServiceResponse<()> {
    ServiceResponse::failure("Method Not Allowed", None, StatusCode::METHOD_NOT_ALLOWED)
}
