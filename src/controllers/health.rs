use axum::{extract::State, response::Response, routing::get, Router};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;

use crate::error::ServiceError;
use crate::store::StoreCounts;
use crate::AppState;
use super::json_response;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health))
}

#[derive(Debug, Serialize)]
struct HealthResponse<'a> {
    status: &'static str,
    data_file: &'a Path,
    #[serde(flatten)]
    counts: StoreCounts,
}

// GET /health
async fn health(State(state): State<Arc<AppState>>) -> Result<Response, ServiceError> {
    json_response(&HealthResponse {
        status: "ok",
        data_file: &state.config.data.path,
        counts: state.store.counts(),
    })
}
