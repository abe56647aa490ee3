//! Many clients racing for the same spot through the HTTP layer.

mod common;

use axum::http::StatusCode;
use common::{get, reserve, send, state};
use event_spots::models::{Spot, SpotStatus};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_reservations_yield_single_winner() {
    const CLIENTS: usize = 64;
    let app = event_spots::app(state());

    let tasks: Vec<_> = (0..CLIENTS)
        .map(|_| {
            let app = app.clone();
            tokio::spawn(async move { send(app, reserve("2", r#"{"spot":"B1"}"#)).await })
        })
        .collect();

    let results = futures::future::join_all(tasks).await;

    let mut wins = 0;
    let mut conflicts = 0;
    for result in results {
        let (status, body) = result.unwrap();
        match status {
            StatusCode::OK => wins += 1,
            StatusCode::BAD_REQUEST => {
                assert_eq!(body, b"Spot is already reserved");
                conflicts += 1;
            }
            other => panic!("unexpected status {}", other),
        }
    }

    assert_eq!(wins, 1);
    assert_eq!(conflicts, CLIENTS - 1);

    let (_, body) = send(app, get("/events/2/spots")).await;
    let spots: Vec<Spot> = serde_json::from_slice(&body).unwrap();
    assert_eq!(spots[0].status, SpotStatus::Reserved);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn readers_run_alongside_writers() {
    let app = event_spots::app(state());

    let writer = {
        let app = app.clone();
        tokio::spawn(async move { send(app, reserve("1", r#"{"spot":"A1"}"#)).await })
    };
    let readers: Vec<_> = (0..16)
        .map(|_| {
            let app = app.clone();
            tokio::spawn(async move { send(app, get("/events/1/spots")).await })
        })
        .collect();

    let (status, _) = writer.await.unwrap();
    assert_eq!(status, StatusCode::OK);

    for reader in futures::future::join_all(readers).await {
        let (status, body) = reader.unwrap();
        assert_eq!(status, StatusCode::OK);
        // every snapshot is whole: A1 is either available or reserved, never absent
        let spots: Vec<Spot> = serde_json::from_slice(&body).unwrap();
        assert_eq!(spots.len(), 2);
    }
}
