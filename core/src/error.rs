//! Error types for the items API client.
//!
//! # Design
//! Every variant means the same thing to the view controller: the request
//! failed. The variants exist so the raw detail can be logged; nothing
//! upstream branches on them.

use thiserror::Error;

/// Errors returned by `ItemsClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The host could not complete the round-trip.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Failure reported by the host when a request never produced a response
/// (connection refused, DNS failure, aborted).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("transport failed: {0}")]
pub struct TransportError(pub String);

impl TransportError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

/// Local rejection of a form submission. No request is issued.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("title is required")]
    EmptyTitle,
    #[error("controller is not mounted")]
    NotMounted,
}
