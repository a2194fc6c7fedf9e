//! Stateless HTTP request builder and response parser for the items API.
//!
//! # Design
//! `ItemsClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The host executes the actual HTTP round-trip.
//!
//! Any 2xx is accepted. Non-2xx, bad JSON and transport failures all come
//! back as `ApiError` and are propagated; the caller picks the message.

use serde::de::DeserializeOwned;
use serde_json::json;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateItem, Health, Item};

/// Where the deployed backend lives.
pub const DEFAULT_BASE_URL: &str = "https://fullstack-tgaa.onrender.com";

/// Synchronous, stateless client for the items API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemsClient {
    base_url: String,
}

impl Default for ItemsClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ItemsClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_items(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/items", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Encoding goes through `serde_json::Value`, whose `Display` cannot
    /// fail, so building a create request is infallible.
    pub fn build_create_item(&self, input: &CreateItem) -> HttpRequest {
        let body = json!({
            "title": input.title,
            "description": input.description,
        });
        HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}/items", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body.to_string()),
        }
    }

    pub fn build_health(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_items(&self, response: HttpResponse) -> Result<Vec<Item>, ApiError> {
        parse_json(response)
    }

    pub fn parse_create_item(&self, response: HttpResponse) -> Result<Item, ApiError> {
        parse_json(response)
    }

    pub fn parse_health(&self, response: HttpResponse) -> Result<Health, ApiError> {
        parse_json(response)
    }
}

fn parse_json<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ItemsClient {
        ItemsClient::new("http://localhost:3000")
    }

    #[test]
    fn build_list_items_produces_correct_request() {
        let req = client().build_list_items();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:3000/items");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_create_item_produces_correct_request() {
        let input = CreateItem {
            title: "Buy milk".to_string(),
            description: Some("2 litres".to_string()),
        };
        let req = client().build_create_item(&input);
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:3000/items");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["title"], "Buy milk");
        assert_eq!(body["description"], "2 litres");
    }

    #[test]
    fn build_create_item_sends_null_description() {
        let input = CreateItem {
            title: "Test".to_string(),
            description: None,
        };
        let req = client().build_create_item(&input);
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert!(body.get("description").unwrap().is_null());
    }

    #[test]
    fn default_client_targets_deployed_backend() {
        let req = ItemsClient::default().build_list_items();
        assert_eq!(req.url, format!("{DEFAULT_BASE_URL}/items"));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = ItemsClient::new("http://localhost:3000/");
        assert_eq!(client.build_list_items().url, "http://localhost:3000/items");
        assert_eq!(client.build_health().url, "http://localhost:3000/");
    }

    #[test]
    fn parse_list_items_success() {
        let response = HttpResponse::new(
            200,
            concat!(
                r#"[{"id":1,"title":"Buy milk","description":null},"#,
                r#"{"id":2,"title":"Walk dog","description":"after lunch"}]"#,
            ),
        );
        let items = client().parse_list_items(response).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "Buy milk");
        assert_eq!(items[0].description, None);
        assert_eq!(items[1].id, Some(2));
        assert_eq!(items[1].description.as_deref(), Some("after lunch"));
    }

    #[test]
    fn parse_list_items_empty_array() {
        let items = client().parse_list_items(HttpResponse::new(200, "[]")).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn parse_list_items_server_error() {
        let err = client()
            .parse_list_items(HttpResponse::new(503, "unavailable"))
            .unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 503, .. }));
    }

    #[test]
    fn parse_list_items_bad_json() {
        let err = client()
            .parse_list_items(HttpResponse::new(200, "not json"))
            .unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn parse_create_item_accepts_any_2xx() {
        let body = r#"{"id":7,"title":"New","description":null}"#;
        for status in [200, 201] {
            let item = client().parse_create_item(HttpResponse::new(status, body)).unwrap();
            assert_eq!(item.id, Some(7));
            assert_eq!(item.title, "New");
        }
    }

    #[test]
    fn parse_create_item_wrong_status() {
        let err = client()
            .parse_create_item(HttpResponse::new(500, "internal error"))
            .unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 500, .. }));
    }

    #[test]
    fn parse_health_success() {
        let health = client()
            .parse_health(HttpResponse::new(200, r#"{"status":"ok","db_count":3}"#))
            .unwrap();
        assert_eq!(health.db_count, 3);
    }
}
