//! Sans-IO core for the todo items client.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). On top of the client sits
//! `TodoController`, which drives the items screen: it fetches on mount,
//! validates and submits the form, and refreshes after every successful
//! create. The host executes the requests the controller hands out.
//!
//! # Design
//! - `ItemsClient` is stateless; it holds only `base_url`.
//! - Each operation is split into `build_*` and `parse_*`, so the I/O
//!   boundary is explicit.
//! - `TodoController` returns `Effect`s instead of performing calls, which
//!   makes races, cancellation and failure paths plain unit tests.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod controller;
pub mod error;
pub mod http;
pub mod types;
pub mod view;

pub use client::{ItemsClient, DEFAULT_BASE_URL};
pub use controller::{
    Effect, Notification, RequestId, RequestKind, TodoController, ViewState, FETCH_FAILED_MESSAGE,
    SUBMIT_FAILED_MESSAGE,
};
pub use error::{ApiError, SubmitError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{CreateItem, Health, Item, NewItemDraft};
pub use view::{render, Card, Screen};
