use axum::{
    extract::{Path, State},
    response::Response,
    routing::get,
    Router,
};
use std::sync::Arc;

use crate::error::ServiceError;
use crate::AppState;
use super::{canonical_id, json_response};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/events", get(list_events))
        .route("/events/{event_id}", get(get_event))
        .route("/events/{event_id}/spots", get(get_event_spots))
}

// GET /events
async fn list_events(State(state): State<Arc<AppState>>) -> Result<Response, ServiceError> {
    json_response(&state.store.list_events())
}

// GET /events/{event_id}
// Id не в каноническом виде не совпадает ни с одним событием -> 404
async fn get_event(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
) -> Result<Response, ServiceError> {
    let id = canonical_id(&event_id).ok_or(ServiceError::EventNotFound)?;
    let event = state.store.get_event_by_id(id)?;
    json_response(&event)
}

// GET /events/{event_id}/spots
// Неизвестное событие -> пустой массив
async fn get_event_spots(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
) -> Result<Response, ServiceError> {
    let spots = match canonical_id(&event_id) {
        Some(id) => state.store.get_spots_by_event_id(id),
        None => Vec::new(),
    };
    json_response(&spots)
}
