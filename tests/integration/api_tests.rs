//! API integration tests
//!
//! These run against a live server backed by PostgreSQL.

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Unique names so reruns do not trip the duplicate check
fn unique(prefix: &str) -> String {
    format!("{}-{}", prefix, uuid::Uuid::new_v4())
}

async fn create_book(client: &Client, name: &str, author_name: &str) -> (StatusCode, Value) {
    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({
            "name": name,
            "author_name": author_name
        }))
        .send()
        .await
        .expect("Failed to send request");

    let status = response.status();
    let body: Value = response.json().await.expect("Failed to parse response");
    (status, body)
}

async fn delete_book(client: &Client, id: &str) -> StatusCode {
    client
        .delete(format!("{}/books?id={}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request")
        .status()
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
async fn test_ready() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
}

#[tokio::test]
#[ignore]
async fn test_book_lifecycle() {
    let client = Client::new();
    let name = unique("Book1");
    let author_name = unique("Author1");

    // Create
    let (status, body) = create_book(&client, &name, &author_name).await;
    assert_eq!(status, 200);
    assert_eq!(body["is_success"], true);
    let id = body["response"].as_str().expect("No book ID").to_string();

    // Same name and author again
    let (status, body) = create_book(&client, &name, &author_name).await;
    assert_eq!(status, 404);
    assert_eq!(body["message"], "Book already exist");

    // Get
    let response = client
        .get(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["response"]["name"], name.as_str());
    assert_eq!(body["response"]["author_name"], author_name.as_str());

    // Delete
    assert_eq!(delete_book(&client, &id).await, 200);

    // Gone
    let response = client
        .get(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["is_success"], false);
    assert!(body["response"].is_null());
}

#[tokio::test]
#[ignore]
async fn test_update_and_save() {
    let client = Client::new();
    let (_, body) = create_book(&client, &unique("Book2"), &unique("Author2")).await;
    let id = body["response"].as_str().expect("No book ID").to_string();

    // Update
    let renamed = unique("Renamed");
    let response = client
        .patch(format!("{}/books", BASE_URL))
        .json(&json!({ "id": id, "name": renamed, "author_name": "Author2" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    // Save on an existing id updates in place
    let response = client
        .put(format!("{}/books", BASE_URL))
        .json(&json!({ "id": id, "name": renamed, "author_name": "Author3" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let body: Value = client
        .get(format!("{}/books/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(body["response"]["author_name"], "Author3");

    // Save on an unknown id creates
    let new_id = uuid::Uuid::new_v4().to_string();
    let response = client
        .put(format!("{}/books", BASE_URL))
        .json(&json!({ "id": new_id, "name": unique("Book4"), "author_name": "Author4" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    let created_id = body["response"].as_str().expect("No book ID").to_string();

    // Cleanup
    delete_book(&client, &id).await;
    delete_book(&client, &created_id).await;
}

#[tokio::test]
#[ignore]
async fn test_update_unknown_book() {
    let client = Client::new();

    let response = client
        .patch(format!("{}/books", BASE_URL))
        .json(&json!({
            "id": uuid::Uuid::new_v4(),
            "name": "Nobody",
            "author_name": "Nobody"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Book not exist");
}

#[tokio::test]
#[ignore]
async fn test_create_invalid_book() {
    let client = Client::new();

    let (status, body) = create_book(&client, "", "Author").await;
    assert_eq!(status, 404);
    assert_eq!(body["message"], "Book name is null");
}

#[tokio::test]
#[ignore]
async fn test_malformed_delete() {
    let client = Client::new();

    let status = delete_book(&client, "not-a-uuid").await;
    assert_eq!(status, 400);
}
