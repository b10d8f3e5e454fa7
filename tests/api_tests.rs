//! API integration tests
//!
//! These run against a live server with a migrated database:
//! `cargo test -- --ignored`

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080";

/// Create a library and return its id
async fn create_library(client: &Client, name: &str) -> i64 {
    let response = client
        .post(format!("{}/libraries", BASE_URL))
        .json(&json!({ "library_name": name }))
        .send()
        .await
        .expect("Failed to send library request");
    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse library");
    body["id"].as_i64().expect("No library ID")
}

/// Create a book in the given library and return its id
async fn create_book(client: &Client, title: &str, library_id: i64) -> i64 {
    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({
            "title": title,
            "publisher": { "name": "Chilton" },
            "library_id": library_id
        }))
        .send()
        .await
        .expect("Failed to send book request");
    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse book");
    body["id"].as_i64().expect("No book ID")
}

async fn audit_history(client: &Client, book_id: i64) -> Vec<Value> {
    let response = client
        .get(format!("{}/{}/audit-history", BASE_URL, book_id))
        .send()
        .await
        .expect("Failed to send audit request");
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse audit history");
    body.as_array().expect("Audit history is not an array").clone()
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_create_book_requires_publisher() {
    let client = Client::new();
    let library_id = create_library(&client, "Central").await;

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({
            "title": "No Publisher",
            "library_id": library_id
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Validation");
}

#[tokio::test]
#[ignore]
async fn test_create_book_requires_library() {
    let client = Client::new();

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({
            "title": "No Library",
            "publisher": { "name": "Chilton" }
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_create_writes_one_create_audit_entry() {
    let client = Client::new();
    let library_id = create_library(&client, "Audit Lib").await;
    let book_id = create_book(&client, "Dune", library_id).await;

    assert!(book_id > 0);

    let history = audit_history(&client, book_id).await;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["action_type"], "Create");
    assert_eq!(history[0]["modified_by"], "system");
    assert_eq!(history[0]["title"], "Dune");
}

#[tokio::test]
#[ignore]
async fn test_get_unknown_book_returns_404() {
    let client = Client::new();

    let response = client
        .get(format!("{}/books/999999", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "NotFound");
}

#[tokio::test]
#[ignore]
async fn test_update_unknown_book_returns_404_without_audit() {
    let client = Client::new();

    let response = client
        .put(format!("{}/book/999999", BASE_URL))
        .json(&json!({
            "title": "Ghost",
            "publisher": { "name": "Nobody" }
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);

    let history = audit_history(&client, 999999).await;
    assert!(history.is_empty());
}

#[tokio::test]
#[ignore]
async fn test_update_unknown_book_wins_over_unknown_author() {
    let client = Client::new();

    // Both the book and the author are absent; the absent book decides
    let response = client
        .put(format!("{}/book/999999", BASE_URL))
        .json(&json!({
            "title": "Ghost",
            "author_id": 999999,
            "publisher": { "name": "Nobody" }
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "NotFound");
}

#[tokio::test]
#[ignore]
async fn test_delete_unknown_book_returns_404() {
    let client = Client::new();

    let response = client
        .delete(format!("{}/books/999999", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_update_refreshes_record_and_audits() {
    let client = Client::new();
    let library_id = create_library(&client, "Update Lib").await;
    let book_id = create_book(&client, "First Title", library_id).await;

    let response = client
        .put(format!("{}/book/{}", BASE_URL, book_id))
        .json(&json!({
            "title": "Second Title",
            "publisher": { "name": "Ace" },
            "library_id": library_id
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["title"], "Second Title");
    assert_eq!(body["publisher"]["name"], "Ace");

    let history = audit_history(&client, book_id).await;
    assert_eq!(history.len(), 2);
    assert_eq!(history[0]["action_type"], "Create");
    assert_eq!(history[1]["action_type"], "Update");
    assert_eq!(history[1]["title"], "Second Title");
}

#[tokio::test]
#[ignore]
async fn test_delete_audits_pre_deletion_state() {
    let client = Client::new();
    let library_id = create_library(&client, "Delete Lib").await;
    let book_id = create_book(&client, "Doomed Book", library_id).await;

    let response = client
        .delete(format!("{}/books/{}", BASE_URL, book_id))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 204);

    // The book is gone
    let response = client
        .get(format!("{}/books/{}", BASE_URL, book_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);

    // The audit trail survives and holds the pre-deletion title
    let history = audit_history(&client, book_id).await;
    assert_eq!(history.len(), 2);
    assert_eq!(history[1]["action_type"], "Delete");
    assert_eq!(history[1]["title"], "Doomed Book");
}

#[tokio::test]
#[ignore]
async fn test_delete_all_audits_every_book() {
    let client = Client::new();
    let library_id = create_library(&client, "Bulk Lib").await;
    let first = create_book(&client, "Bulk One", library_id).await;
    let second = create_book(&client, "Bulk Two", library_id).await;

    let response = client
        .delete(format!("{}/books", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 204);

    // Catalog is empty now
    let response = client
        .get(format!("{}/books", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);

    for book_id in [first, second] {
        let history = audit_history(&client, book_id).await;
        let last = history.last().expect("No audit entries");
        assert_eq!(last["action_type"], "Delete");
    }
}

#[tokio::test]
#[ignore]
async fn test_audit_history_never_fails() {
    let client = Client::new();

    for book_id in [0i64, -1, -42, i32::MAX as i64] {
        let response = client
            .get(format!("{}/{}/audit-history", BASE_URL, book_id))
            .send()
            .await
            .expect("Failed to send request");

        assert_eq!(response.status(), 200);

        let body: Value = response.json().await.expect("Failed to parse response");
        assert!(body.is_array());
    }
}

#[tokio::test]
#[ignore]
async fn test_publisher_backfill_is_idempotent() {
    let client = Client::new();
    let library_id = create_library(&client, "Backfill Lib").await;
    let book_id = create_book(&client, "Already Published", library_id).await;

    let response = client
        .post(format!("{}/books/add-publisher", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    // Second run finds nothing left to backfill
    let response = client
        .post(format!("{}/books/add-publisher", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["updated"], 0);

    // Books that already had a publisher are untouched
    let response = client
        .get(format!("{}/books/{}", BASE_URL, book_id))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["publisher"]["name"], "Chilton");
}

#[tokio::test]
#[ignore]
async fn test_author_back_collection_is_derived() {
    let client = Client::new();

    let response = client
        .post(format!("{}/authors", BASE_URL))
        .json(&json!({ "first_name": "Frank", "last_name": "Herbert" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse author");
    let author_id = body["id"].as_i64().expect("No author ID");

    let library_id = create_library(&client, "Author Lib").await;
    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({
            "title": "Dune Messiah",
            "author_id": author_id,
            "publisher": { "name": "Putnam" },
            "library_id": library_id
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let response = client
        .get(format!("{}/authors/{}/books", BASE_URL, author_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse books");
    let books = body.as_array().expect("Not an array");
    assert!(books.iter().any(|b| b["title"] == "Dune Messiah"));
}

#[tokio::test]
#[ignore]
async fn test_explicit_snapshot_roundtrip() {
    let client = Client::new();
    let library_id = create_library(&client, "History Lib").await;
    let book_id = create_book(&client, "Snapshot Me", library_id).await;

    // Mutations alone never create snapshots
    let response = client
        .get(format!("{}/books/{}/history", BASE_URL, book_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse snapshots");
    assert!(body.as_array().expect("Not an array").is_empty());

    let response = client
        .post(format!("{}/books/{}/history", BASE_URL, book_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse snapshot");
    assert_eq!(body["title"], "Snapshot Me");

    let response = client
        .get(format!("{}/books/{}/history", BASE_URL, book_id))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse snapshots");
    assert_eq!(body.as_array().expect("Not an array").len(), 1);
}
