//! Client-side core for the item service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern), and keeps an `ItemCache`
//! mirroring what the server last reported.
//!
//! # Design
//! - `ItemClient` is stateless; it holds only `base_url`.
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - `ItemCache` is the only mutable state and is updated solely from parsed
//!   responses.
//! - DTOs are defined independently from the server crate; integration tests
//!   catch schema drift.

pub mod cache;
pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use cache::ItemCache;
pub use client::ItemClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{CreateItem, Envelope, Item, UpdateItem};
