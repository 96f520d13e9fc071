//! Error types for the item API client.
//!
//! # Design
//! `NotFound` and `Validation` get dedicated variants because callers act on
//! them differently: one drops the item from local state, the other shows the
//! server's message next to the form. Every other non-2xx response lands in
//! `Http`. Where the server sent an envelope, its `message` is carried;
//! otherwise the raw body is.

use thiserror::Error;

/// Errors returned by `ItemClient` parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404; the requested item does not exist.
    #[error("not found: {message}")]
    NotFound { message: String },

    /// The server returned 400; the request failed validation.
    #[error("{message}")]
    Validation { message: String },

    /// The server returned a non-2xx status other than 400 or 404.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// A 2xx response whose envelope reported failure or carried no payload.
    #[error("unexpected envelope: {message}")]
    Envelope { message: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}
