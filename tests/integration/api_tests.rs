//! API integration tests
//!
//! These run against a live server backed by a migrated database.

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

async fn send_json(client: &Client, method: reqwest::Method, path: &str, body: Value) -> Value {
    client
        .request(method, format!("{}{}", BASE_URL, path))
        .json(&body)
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response")
}

async fn get_json(client: &Client, path: &str) -> Value {
    client
        .get(format!("{}{}", BASE_URL, path))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response")
}

async fn create_author(client: &Client, name: &str, last_name: &str, birth_date: &str) -> i64 {
    let body = send_json(
        client,
        reqwest::Method::POST,
        "/authors",
        json!({
            "name": name,
            "last_name": last_name,
            "country": "Colombia",
            "birth_date": birth_date
        }),
    )
    .await;
    assert_eq!(body["status_code"], 200, "{body}");
    body["response_elements"][0]["id"].as_i64().expect("No id in response")
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
async fn test_author_lifecycle() {
    let client = Client::new();
    let id = create_author(&client, "Gabriel", "García Márquez", "1940-03-03").await;

    let duplicate = send_json(
        &client,
        reqwest::Method::POST,
        "/authors",
        json!({
            "name": "Gabriel",
            "last_name": "García Márquez",
            "country": "Colombia",
            "birth_date": "1940-03-03"
        }),
    )
    .await;
    assert_eq!(duplicate["status_code"], 409);
    assert_eq!(duplicate["message"], "409 Author Already Exist");

    let updated = send_json(
        &client,
        reqwest::Method::PUT,
        "/authors",
        json!({
            "id": id,
            "name": "Gabriel José",
            "last_name": "García Márquez",
            "country": "Colombia",
            "birth_date": "1927-03-06"
        }),
    )
    .await;
    assert_eq!(updated["status_code"], 200);
    assert_eq!(updated["response_elements"][0]["name"], "Gabriel José");

    let deleted = client
        .delete(format!("{}/authors/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(deleted.status().is_success());

    let missing = get_json(&client, &format!("/authors/{}", id)).await;
    assert_eq!(missing["status_code"], 404);
    assert_eq!(missing["message"], "404 Author Not Found");
}

#[tokio::test]
#[ignore]
async fn test_birth_date_range() {
    let client = Client::new();
    create_author(&client, "Jorge", "Isaacs", "1836-04-01").await;

    let body = get_json(
        &client,
        "/authors/by-birth-date?start_date=1830-01-01&end_date=1950-12-31",
    )
    .await;

    assert_eq!(body["status_code"], 200);
    assert!(body["total_elements"].as_u64().unwrap_or(0) >= 1);
}

#[tokio::test]
#[ignore]
async fn test_books_by_author_include_author() {
    let client = Client::new();
    let author_id = create_author(&client, "Tomás", "Carrasquilla", "1858-01-17").await;

    let created = send_json(
        &client,
        reqwest::Method::POST,
        "/books",
        json!({
            "name": "La marquesa de Yolombó",
            "isbn10": "9583002438",
            "isbn13": "978-9583002437",
            "published": "1928-01-01",
            "edition": "Primera",
            "dewey_index": "863.44",
            "author_id": author_id
        }),
    )
    .await;
    assert_eq!(created["status_code"], 200, "{created}");

    let body = get_json(&client, &format!("/books/by-author/{}", author_id)).await;
    assert_eq!(body["status_code"], 200);
    assert_eq!(body["response_elements"][0]["author"]["last_name"], "Carrasquilla");
}

#[tokio::test]
#[ignore]
async fn test_unknown_genre_is_not_found() {
    let client = Client::new();

    let body = get_json(&client, "/genres/by-name?name=zzzz-not-a-genre").await;

    assert_eq!(body["status_code"], 404);
    assert_eq!(body["message"], "404 Genre Not Found");
    assert_eq!(body["total_elements"], 0);
}
