use std::sync::Arc;

use secrecy::Secret;
use uuid::Uuid;

use submissions::config::Configuration;
use submissions::store::MongoSubmissionStore;

use crate::helpers::{launch, test_configuration};

async fn spawn_with_mongo(configuration: Configuration) -> String {
    let store = MongoSubmissionStore::connect(&configuration.database)
        .await
        .expect("Failed to create the MongoDB client");
    launch(configuration, Arc::new(store)).await
}

/// Nothing listens on port 1, so every driver call fails once the short
/// server selection timeout expires.
fn unreachable_database() -> Configuration {
    let mut c = test_configuration();
    c.database.uri = Secret::new("mongodb://127.0.0.1:1/".to_string());
    c.database.timeout_milliseconds = 200;
    c
}

#[tokio::test]
async fn unreachable_mongodb_is_reported_as_disconnected() {
    let addr = spawn_with_mongo(unreachable_database()).await;

    let response = reqwest::get(&format!("{}/health", addr))
        .await
        .expect("Failed to execute request.");

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["database"], "disconnected");
}

#[tokio::test]
async fn unreachable_mongodb_turns_reads_and_writes_into_500s() {
    let addr = spawn_with_mongo(unreachable_database()).await;
    let client = reqwest::Client::new();

    for path in ["/api", "/api/count"] {
        let response = client
            .get(&format!("{}{}", addr, path))
            .send()
            .await
            .expect("Failed to execute request.");
        assert_eq!(500, response.status().as_u16(), "{} did not fail", path);
        let body: serde_json::Value = response.json().await.unwrap();
        assert!(!body["error"].as_str().unwrap().is_empty());
    }

    let response = client
        .post(&format!("{}/submit", addr))
        .json(&serde_json::json!({"name": "Ana", "email": "ana@example.com"}))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(500, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Database error: "));
}

#[tokio::test]
#[ignore = "needs a running MongoDB, see MONGODB_URI"]
async fn submissions_round_trip_through_mongodb() {
    let mut configuration = test_configuration();
    configuration.database.database_name = Uuid::new_v4().to_string();
    let addr = spawn_with_mongo(configuration).await;
    let client = reqwest::Client::new();

    let response = client
        .post(&format!("{}/submit", addr))
        .json(&serde_json::json!({"name": "Ana", "email": "ana@example.com"}))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["id"].as_str().unwrap().len(), 24);

    let listed: Vec<serde_json::Value> = client
        .get(&format!("{}/api", addr))
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .unwrap();
    assert_eq!(
        listed,
        vec![serde_json::json!({"name": "Ana", "email": "ana@example.com"})]
    );

    let count: serde_json::Value = client
        .get(&format!("{}/api/count", addr))
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .unwrap();
    assert_eq!(count, serde_json::json!({"count": 1}));
}
