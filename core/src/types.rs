//! Domain DTOs for the items API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates.
//!
//! `NewItemDraft` is the client-only form model; it never goes on the wire
//! directly. `CreateItem` is what the draft becomes at submission time.

use serde::{Deserialize, Serialize};

/// A single item returned by the API.
///
/// `id` is assigned by the server; it is tolerated as missing so that an
/// acknowledgement payload without one still parses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    #[serde(default)]
    pub id: Option<u64>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Request payload for creating a new item. `description` is always
/// serialized, as `null` when absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateItem {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Form fields as the user is typing them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewItemDraft {
    pub title: String,
    pub description: String,
}

impl NewItemDraft {
    /// True when the title is empty or whitespace-only.
    pub fn title_is_blank(&self) -> bool {
        self.title.trim().is_empty()
    }

    /// Wire payload for this draft. An empty description is sent as `null`.
    pub fn to_payload(&self) -> CreateItem {
        let description = if self.description.is_empty() {
            None
        } else {
            Some(self.description.clone())
        };
        CreateItem {
            title: self.title.clone(),
            description,
        }
    }
}

/// Body of the backend's root route.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Health {
    pub status: String,
    pub db_count: u64,
}
