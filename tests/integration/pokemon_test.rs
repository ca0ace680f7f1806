//! Integration tests for the catalog endpoints.

mod helpers;

use http::StatusCode;
use serde_json::json;

use helpers::{TestApp, create_body, sample_pokemon};

fn ids_of(items: &serde_json::Value) -> Vec<i64> {
    items
        .as_array()
        .expect("expected an array")
        .iter()
        .map(|p| p["id"].as_i64().expect("record without id"))
        .collect()
}

#[tokio::test]
async fn test_list_second_page() {
    let app = TestApp::with_records(1..=25).await;

    let response = app.get("/pokemon?page=2&limit=10").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(ids_of(&response.body["items"]), (11..=20).collect::<Vec<_>>());
    assert_eq!(response.body["page"], 2);
    assert_eq!(response.body["limit"], 10);
    assert_eq!(response.body["total"], 25);
    assert_eq!(response.body["totalPages"], 3);
}

#[tokio::test]
async fn test_list_defaults_invalid_paging() {
    let app = TestApp::with_records(1..=25).await;

    let response = app.get("/pokemon?page=abc&limit=-4").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["page"], 1);
    assert_eq!(response.body["limit"], 20);
    assert_eq!(response.body["items"].as_array().unwrap().len(), 20);
}

#[tokio::test]
async fn test_list_empty_catalog() {
    let app = TestApp::new();

    let response = app.get("/pokemon").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["items"], json!([]));
    assert_eq!(response.body["total"], 0);
    assert_eq!(response.body["totalPages"], 0);
}

#[tokio::test]
async fn test_create_allocates_sequential_ids() {
    let app = TestApp::new();

    let first = app.post("/pokemon", create_body("Bulbasaur", &["Grass"], 45)).await;
    let second = app.post("/pokemon", create_body("Ivysaur", &["Grass"], 60)).await;

    assert_eq!(first.status, StatusCode::CREATED);
    assert_eq!(first.body["id"], 1);
    assert_eq!(first.body["image"], "http://localhost:3000/images/1.png");
    assert_eq!(second.status, StatusCode::CREATED);
    assert_eq!(second.body["id"], 2);

    let fetched = app.get("/pokemon/2").await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["name"]["english"], "Ivysaur");
}

#[tokio::test]
async fn test_create_continues_after_existing_max() {
    let app = TestApp::with_records([3, 7]).await;

    let created = app.post("/pokemon", create_body("Pidgey", &["Flying"], 40)).await;

    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["id"], 8);
}

#[tokio::test]
async fn test_create_ignores_client_id() {
    let app = TestApp::with_records([1]).await;
    let mut body = create_body("Squirtle", &["Water"], 44);
    body["id"] = json!(1);

    let created = app.post("/pokemon", body).await;

    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["id"], 2);
}

#[tokio::test]
async fn test_create_rejects_invalid_documents() {
    let app = TestApp::new();

    let mut missing_stat = create_body("Eevee", &["Normal"], 55);
    missing_stat["base"].as_object_mut().unwrap().remove("Speed");
    let response = app.post("/pokemon", missing_stat).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["message"].is_string());

    let no_types = create_body("Eevee", &[], 55);
    let response = app.post("/pokemon", no_types).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .raw_request("POST", "/pokemon", axum::body::Body::from("{not json"))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["message"].is_string());

    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn test_get_errors() {
    let app = TestApp::with_records([1]).await;

    let missing = app.get("/pokemon/999").await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert!(missing.body["message"].is_string());

    let malformed = app.get("/pokemon/abc").await;
    assert_eq!(malformed.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search_matches_every_language() {
    let app = TestApp::new();
    app.insert(sample_pokemon(4, "Charmander", &["Fire"], 39)).await;
    let mut french_only = sample_pokemon(5, "Meowth", &["Normal"], 40);
    french_only.name.french = "Chartreux".to_string();
    app.insert(french_only).await;
    app.insert(sample_pokemon(6, "Bulbasaur", &["Grass"], 45)).await;

    let response = app.get("/pokemon/search?name=CHAR").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(ids_of(&response.body), vec![4, 5]);
}

#[tokio::test]
async fn test_search_treats_wildcards_literally() {
    let app = TestApp::new();
    app.insert(sample_pokemon(1, "Mr_Mime", &["Psychic"], 40)).await;
    app.insert(sample_pokemon(2, "MrXMime", &["Psychic"], 40)).await;

    let response = app.get("/pokemon/search?name=r_M").await;
    assert_eq!(ids_of(&response.body), vec![1]);

    let response = app.get("/pokemon/search?name=%25").await;
    assert_eq!(ids_of(&response.body), Vec::<i64>::new());
}

#[tokio::test]
async fn test_search_requires_name() {
    let app = TestApp::with_records([1]).await;

    assert_eq!(app.get("/pokemon/search").await.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        app.get("/pokemon/search?name=").await.status,
        StatusCode::BAD_REQUEST
    );
}

#[tokio::test]
async fn test_filter_types_and_ranges() {
    let app = TestApp::new();
    app.insert(sample_pokemon(1, "Bulbasaur", &["Grass", "Poison"], 45)).await;
    app.insert(sample_pokemon(2, "Charmander", &["Fire"], 39)).await;
    app.insert(sample_pokemon(3, "Charizard", &["Fire", "Flying"], 78)).await;
    app.insert(sample_pokemon(4, "Squirtle", &["Water"], 44)).await;

    let response = app.get("/pokemon/filter?types=Fire,Water").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(ids_of(&response.body["items"]), vec![2, 3, 4]);
    assert_eq!(response.body["total"], 3);

    let response = app.get("/pokemon/filter?types=Fire&minHP=40&maxHP=80").await;
    assert_eq!(ids_of(&response.body["items"]), vec![3]);

    let response = app.get("/pokemon/filter?maxHP=44").await;
    assert_eq!(ids_of(&response.body["items"]), vec![2, 4]);

    let response = app.get("/pokemon/filter").await;
    assert_eq!(response.body["total"], 4);
}

#[tokio::test]
async fn test_filter_paginates() {
    let app = TestApp::with_records(1..=12).await;

    let response = app.get("/pokemon/filter?types=Normal&page=2&limit=5").await;

    assert_eq!(ids_of(&response.body["items"]), vec![6, 7, 8, 9, 10]);
    assert_eq!(response.body["total"], 12);
    assert_eq!(response.body["totalPages"], 3);
}

#[tokio::test]
async fn test_filter_rejects_non_numeric_bound() {
    let app = TestApp::with_records([1]).await;

    let response = app.get("/pokemon/filter?minAttack=strong").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["message"].is_string());
}

#[tokio::test]
async fn test_by_ids_ignores_invalid_entries() {
    let app = TestApp::with_records(1..=5).await;

    let response = app.get("/pokemon/by-ids?ids=3,abc,1,3,42").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(ids_of(&response.body), vec![1, 3]);

    let response = app.get("/pokemon/by-ids?ids=").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!([]));
}

#[tokio::test]
async fn test_by_ids_requires_parameter() {
    let app = TestApp::with_records([1]).await;

    let response = app.get("/pokemon/by-ids").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_all_projection() {
    let app = TestApp::with_records([2, 1]).await;

    let response = app.get("/pokemon/list-all").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!([
            {
                "id": 1,
                "name": { "english": "Mon1" },
                "type": ["Normal"],
                "image": "http://localhost:3000/images/1.png"
            },
            {
                "id": 2,
                "name": { "english": "Mon2" },
                "type": ["Normal"],
                "image": "http://localhost:3000/images/2.png"
            }
        ])
    );
}

#[tokio::test]
async fn test_update_partial_document() {
    let app = TestApp::with_records([1]).await;

    let response = app
        .put("/pokemon/1", json!({ "type": ["Fire", "Dragon"] }))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], 1);
    assert_eq!(response.body["type"], json!(["Fire", "Dragon"]));
    assert_eq!(response.body["name"]["english"], "Mon1");

    let fetched = app.get("/pokemon/1").await;
    assert_eq!(fetched.body["type"], json!(["Fire", "Dragon"]));
}

#[tokio::test]
async fn test_update_errors() {
    let app = TestApp::with_records([1]).await;

    let changed_id = app.put("/pokemon/1", json!({ "id": 2 })).await;
    assert_eq!(changed_id.status, StatusCode::BAD_REQUEST);

    let invalid = app.put("/pokemon/1", json!({ "type": [] })).await;
    assert_eq!(invalid.status, StatusCode::BAD_REQUEST);

    let missing = app.put("/pokemon/999", json!({ "image": "x.png" })).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);

    let fetched = app.get("/pokemon/1").await;
    assert_eq!(fetched.body["type"], json!(["Normal"]));
}

#[tokio::test]
async fn test_delete_returns_record() {
    let app = TestApp::with_records([1, 2]).await;

    let response = app.delete("/pokemon/1").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Pokemon deleted");
    assert_eq!(response.body["record"]["id"], 1);
    assert_eq!(app.get("/pokemon/1").await.status, StatusCode::NOT_FOUND);
    assert_eq!(app.store.len().await, 1);
}

#[tokio::test]
async fn test_delete_missing_leaves_catalog_untouched() {
    let app = TestApp::with_records([1, 2]).await;

    let response = app.delete("/pokemon/999").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(app.store.len().await, 2);
}

#[tokio::test]
async fn test_deleted_id_is_not_reused() {
    let app = TestApp::new();
    app.post("/pokemon", create_body("A", &["Normal"], 1)).await;
    app.post("/pokemon", create_body("B", &["Normal"], 1)).await;
    app.delete("/pokemon/2").await;

    let created = app.post("/pokemon", create_body("C", &["Normal"], 1)).await;

    assert_eq!(created.body["id"], 3);
}

#[tokio::test]
async fn test_health_and_unknown_route() {
    let app = TestApp::new();

    let health = app.get("/health").await;
    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.body["status"], "ok");

    let unknown = app.get("/nowhere").await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);
    assert!(unknown.body["message"].is_string());
}

#[tokio::test]
async fn test_list_page_past_the_end_is_empty() {
    let app = TestApp::with_records(1..=3).await;

    let response = app.get("/pokemon?page=9223372036854775807&limit=20").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["items"], json!([]));
    assert_eq!(response.body["total"], 3);
}

#[tokio::test]
async fn test_update_blank_image_restores_default() {
    let app = TestApp::with_records([1]).await;
    app.put("/pokemon/1", json!({ "image": "custom.png" })).await;

    let response = app.put("/pokemon/1", json!({ "image": "" })).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["image"], "http://localhost:3000/images/1.png");
}
