//! In-memory task list HTTP service.
//!
//! # Overview
//! Requests flow transport → validation → service → store, and an envelope
//! flows back out:
//!
//! - `routes` maps HTTP requests onto service calls and rejects malformed
//!   input before the service sees it.
//! - `validation` checks identifiers and bodies and collects field issues.
//! - `service` maps store outcomes onto `ServiceResponse` envelopes.
//! - `store` owns the canonical item collection behind the `ItemStore` trait.
//! - `openapi` describes the routes above as an OpenAPI document.
//!
//! # Design
//! Application state is explicit: `AppState` is built on start, handed to the
//! router, and cleared on shutdown. Tests build their own isolated state.

pub mod config;
pub mod logging;
pub mod middleware;
pub mod model;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;
pub mod validation;

use std::future::Future;

use axum::Router;
use tokio::net::TcpListener;

pub use model::{CreateItem, Item, ItemId, UpdateItem};
pub use response::ServiceResponse;
pub use state::AppState;

pub fn app(state: AppState) -> Router {
    routes::router(state).layer(axum::middleware::from_fn(middleware::request_logger))
}

pub async fn run(listener: TcpListener, state: AppState) -> Result<(), std::io::Error> {
    axum::serve(listener, app(state)).await
}

/// Serves until `shutdown` resolves, then drains in-flight requests.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown)
        .await
}
