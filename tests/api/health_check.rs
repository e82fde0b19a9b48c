use std::sync::Arc;

use submissions::config::get_configuration_with;

use crate::helpers::{launch, spawn_app, InMemoryStore};

#[tokio::test]
async fn health_check_reports_connected_database() {
    let app = spawn_app().await;

    let response = app.get("/health").await;

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "OK");
    assert_eq!(body["service"], "backend");
    assert_eq!(body["database"], "connected");
    assert_eq!(body["timestamp"], "N/A");
}

#[tokio::test]
async fn health_check_returns_200_when_database_is_down() {
    let app = spawn_app().await;
    app.store.go_offline();

    let response = app.get("/health").await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "OK");
    assert_eq!(body["database"], "disconnected");
}

#[tokio::test]
async fn health_check_reports_the_deployment_timestamp() {
    let mut configuration = get_configuration_with(|key| {
        (key == "TIMESTAMP").then(|| "2024-01-01T00:00:00Z".to_string())
    })
    .expect("should load configuration");
    configuration.application.host = "127.0.0.1".into();
    configuration.application.port = 0;
    let addr = launch(configuration, Arc::new(InMemoryStore::default())).await;

    let response = reqwest::get(&format!("{}/health", addr))
        .await
        .expect("Failed to execute request.");

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["timestamp"], "2024-01-01T00:00:00Z");
}
