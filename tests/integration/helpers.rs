//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use pokedex_api::app::build_app;
use pokedex_api::state::AppState;
use pokedex_core::config::{AppConfig, StoreProvider};
use pokedex_database::{MemoryRecordStore, RecordStore};
use pokedex_entity::Pokemon;

/// Response captured from a test request.
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status.
    pub status: StatusCode,
    /// Parsed JSON body, `Null` when the body is empty or not JSON.
    pub body: Value,
}

/// Test application context backed by an in-memory store.
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Store handle for direct seeding and inspection
    pub store: MemoryRecordStore,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application with an empty catalog.
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.database.provider = StoreProvider::Memory;
        config.catalog.seed_file = None;

        let store = MemoryRecordStore::new();
        let state = AppState::new(config.clone(), Arc::new(store.clone()));

        Self {
            router: build_app(state),
            store,
            config,
        }
    }

    /// Create a test application holding records with the given ids.
    pub async fn with_records(ids: impl IntoIterator<Item = i64>) -> Self {
        let app = Self::new();
        for id in ids {
            app.insert(sample_pokemon(id, &format!("Mon{id}"), &["Normal"], 50))
                .await;
        }
        app
    }

    /// Insert a record directly into the store.
    pub async fn insert(&self, pokemon: Pokemon) {
        self.store
            .insert(&pokemon)
            .await
            .expect("Failed to seed record");
    }

    /// Send a request and capture status and JSON body.
    pub async fn request(&self, method: &str, uri: &str, body: Option<Value>) -> TestResponse {
        let body = match body {
            Some(value) => Body::from(value.to_string()),
            None => Body::empty(),
        };
        self.raw_request(method, uri, body).await
    }

    /// Send a request with an arbitrary body, always as `application/json`.
    pub async fn raw_request(&self, method: &str, uri: &str, body: Body) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(body)
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// GET helper.
    pub async fn get(&self, uri: &str) -> TestResponse {
        self.request("GET", uri, None).await
    }

    /// POST helper.
    pub async fn post(&self, uri: &str, body: Value) -> TestResponse {
        self.request("POST", uri, Some(body)).await
    }

    /// PUT helper.
    pub async fn put(&self, uri: &str, body: Value) -> TestResponse {
        self.request("PUT", uri, Some(body)).await
    }

    /// DELETE helper.
    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.request("DELETE", uri, None).await
    }
}

/// Creation body with the same english name in every language.
pub fn create_body(name: &str, types: &[&str], hp: i32) -> Value {
    json!({
        "name": {
            "english": name,
            "french": name,
            "japanese": name,
            "chinese": name
        },
        "type": types,
        "base": {
            "HP": hp,
            "Attack": 50,
            "Defense": 50,
            "SpecialAttack": 50,
            "SpecialDefense": 50,
            "Speed": 50
        }
    })
}

/// A complete record for direct seeding.
pub fn sample_pokemon(id: i64, name: &str, types: &[&str], hp: i32) -> Pokemon {
    let mut doc = create_body(name, types, hp);
    doc["id"] = json!(id);
    doc["image"] = json!(format!("http://localhost:3000/images/{id}.png"));
    serde_json::from_value(doc).expect("Invalid sample record")
}
