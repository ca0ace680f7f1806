//! Integration tests for id allocation under concurrent creates.

mod helpers;

use std::collections::BTreeSet;

use futures::future::join_all;
use http::StatusCode;

use helpers::{TestApp, create_body};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_get_distinct_ids() {
    let app = TestApp::new();
    let count = 40;

    let requests = (0..count).map(|i| {
        let app = &app;
        async move {
            app.post("/pokemon", create_body(&format!("Clone{i}"), &["Normal"], 10))
                .await
        }
    });
    let responses = join_all(requests).await;

    let mut ids = BTreeSet::new();
    for response in &responses {
        assert_eq!(response.status, StatusCode::CREATED);
        ids.insert(response.body["id"].as_i64().expect("created without id"));
    }

    assert_eq!(ids, (1..=count).collect::<BTreeSet<i64>>());
    assert_eq!(app.store.len().await, count as usize);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_follow_seeded_records() {
    let app = TestApp::with_records([10, 20]).await;

    let requests = (0..5).map(|i| {
        let app = &app;
        async move {
            app.post("/pokemon", create_body(&format!("Late{i}"), &["Normal"], 10))
                .await
        }
    });
    let responses = join_all(requests).await;

    let ids: BTreeSet<i64> = responses
        .iter()
        .map(|r| r.body["id"].as_i64().expect("created without id"))
        .collect();
    assert_eq!(ids, (21..=25).collect::<BTreeSet<i64>>());
}
