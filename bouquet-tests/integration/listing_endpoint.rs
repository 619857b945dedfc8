//! Listing endpoint over a real socket.

use serde_json::{Value, json};

use crate::harness::TestServer;

async fn get(server: &TestServer, path: &str) -> (u16, Value) {
    let response = reqwest::get(server.url(path)).await.unwrap();
    let status = response.status().as_u16();
    (status, response.json().await.unwrap())
}

#[tokio::test]
async fn test_album_with_empty_first_ceremony() {
    let server = TestServer::start(&[("second-ceremony", 8), ("reception", 45)]).await;

    let (status, body) = get(&server, "/images").await;
    assert_eq!(status, 200);
    assert_eq!(body["first-ceremony"]["images"], json!([]));
    assert_eq!(body["first-ceremony"]["total"], 0);
    assert_eq!(body["first-ceremony"]["hasMore"], false);
    assert_eq!(body["second-ceremony"]["total"], 8);
    assert_eq!(body["second-ceremony"]["hasMore"], false);
    assert_eq!(body["reception"]["images"].as_array().unwrap().len(), 30);
    assert_eq!(body["reception"]["hasMore"], true);

    let keys: Vec<&String> = body.as_object().unwrap().keys().collect();
    assert_eq!(keys.len(), 3);
}

#[tokio::test]
async fn test_listed_refs_are_served() {
    let server = TestServer::start(&[("reception", 2)]).await;

    let (_, body) = get(&server, "/images?category=reception&limit=1").await;
    assert_eq!(body["images"].as_array().unwrap().len(), 1);
    assert_eq!(body["hasMore"], true);

    let image_ref = body["images"][0].as_str().unwrap();
    let response = reqwest::get(server.url(image_ref)).await.unwrap();
    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn test_io_failure_does_not_stop_server() {
    let root = bouquet_core::library::test_fixtures::create_photo_root();
    std::fs::write(root.path().join("reception"), b"not a directory").unwrap();
    let server = TestServer::start_at(root).await;

    let (status, body) = get(&server, "/images?category=reception").await;
    assert_eq!(status, 500);
    assert_eq!(body, json!({ "error": "Failed to load images" }));

    let (status, _) = get(&server, "/images?category=second-ceremony").await;
    assert_eq!(status, 200);
    let (status, _) = get(&server, "/health").await;
    assert_eq!(status, 200);
}
