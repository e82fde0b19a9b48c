use crate::helpers::spawn_app;

#[tokio::test]
async fn list_is_empty_for_a_fresh_store() {
    let app = spawn_app().await;

    assert!(app.get_submissions().await.is_empty());
}

#[tokio::test]
async fn list_never_exposes_identifiers() {
    let app = spawn_app().await;
    for (name, email) in [("Ana", "ana@example.com"), ("Bob", "bob@example.com")] {
        app.post_submit_json(serde_json::json!({"name": name, "email": email}))
            .await;
    }

    let listed = app.get_submissions().await;

    assert_eq!(listed.len(), 2);
    for submission in listed {
        let object = submission.as_object().unwrap();
        assert!(!object.contains_key("_id"));
        assert!(!object.contains_key("id"));
        assert_eq!(object.len(), 2);
    }
}

#[tokio::test]
async fn list_returns_500_when_the_store_fails() {
    let app = spawn_app().await;
    app.store.go_offline();

    let response = app.get("/api").await;

    assert_eq!(500, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "connection refused");
}
