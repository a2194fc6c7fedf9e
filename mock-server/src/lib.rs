use std::{collections::BTreeMap, sync::Arc};

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::cors::CorsLayer;

pub const HEALTH_STATUS: &str = "Server is running and ready for requests!";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateItem {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    pub db_count: usize,
}

/// Items keyed by id; ids start at 1 and are never reused.
#[derive(Debug)]
pub struct Store {
    items: BTreeMap<u64, Item>,
    next_id: u64,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            items: BTreeMap::new(),
            next_id: 1,
        }
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/", get(health))
        .route("/items", get(list_items).post(create_item))
        .layer(CorsLayer::permissive())
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn health(State(db): State<Db>) -> Json<Health> {
    let store = db.read().await;
    Json(Health {
        status: HEALTH_STATUS.to_string(),
        db_count: store.items.len(),
    })
}

async fn list_items(State(db): State<Db>) -> Json<Vec<Item>> {
    let store = db.read().await;
    Json(store.items.values().cloned().collect())
}

async fn create_item(
    State(db): State<Db>,
    Json(input): Json<CreateItem>,
) -> (StatusCode, Json<Item>) {
    let mut store = db.write().await;
    let item = Item {
        id: store.next_id,
        title: input.title,
        description: input.description,
    };
    store.next_id += 1;
    store.items.insert(item.id, item.clone());
    tracing::info!(id = item.id, title = %item.title, "item saved");
    (StatusCode::CREATED, Json(item))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_serializes_null_description() {
        let item = Item {
            id: 1,
            title: "Test".to_string(),
            description: None,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["title"], "Test");
        assert!(json["description"].is_null());
    }

    #[test]
    fn create_item_description_is_optional() {
        let input: CreateItem = serde_json::from_str(r#"{"title":"No description"}"#).unwrap();
        assert_eq!(input.title, "No description");
        assert!(input.description.is_none());
    }

    #[test]
    fn create_item_accepts_explicit_null() {
        let input: CreateItem =
            serde_json::from_str(r#"{"title":"x","description":null}"#).unwrap();
        assert!(input.description.is_none());
    }

    #[test]
    fn create_item_rejects_missing_title() {
        let result: Result<CreateItem, _> = serde_json::from_str(r#"{"description":"d"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn store_ids_start_at_one() {
        assert_eq!(Store::default().next_id, 1);
    }
}
