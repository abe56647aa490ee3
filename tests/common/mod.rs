#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use event_spots::{config::Config, store::Store, AppState};
use std::sync::Arc;
use tower::ServiceExt;

pub const DATASET: &str = r#"{
    "events": [
        {"id": 1, "name": "Rust Meetup", "organization": "Rustaceans", "date": "2024-06-01",
         "price": 0, "rating": "5", "image_url": "https://img.example.com/1.png",
         "created_at": "2024-01-01T10:00:00Z", "location": "Hall A"},
        {"id": 2, "name": "Jazz Night", "organization": "Blue Note", "date": "2024-07-12",
         "price": 4500, "rating": "4.8", "image_url": "https://img.example.com/2.png",
         "created_at": "2024-02-03T18:30:00Z", "location": "Club 9"}
    ],
    "spots": [
        {"id": 10, "name": "A1", "status": "available", "event_id": 1},
        {"id": 11, "name": "A2", "status": "reserved", "event_id": 1},
        {"id": 20, "name": "B1", "status": "available", "event_id": 2}
    ]
}"#;

pub fn state() -> Arc<AppState> {
    let store = Store::from_slice(DATASET.as_bytes()).expect("fixture dataset parses");
    AppState::new(store, Config::default())
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn reserve(event_id: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(format!("/event/{}/reserve", event_id))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
