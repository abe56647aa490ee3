use axum::{
    body::Bytes,
    extract::{Path, State},
    response::Response,
    routing::post,
    Router,
};
use std::sync::Arc;

use crate::error::ServiceError;
use crate::models::{ReserveRequest, ReserveResponse};
use crate::AppState;
use super::json_response;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/event/{event_id}/reserve", post(reserve_spot))
}

// POST /event/{event_id}/reserve
// Тело читается как сырые байты: любая ошибка декодирования должна дать 400
async fn reserve_spot(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
    body: Bytes,
) -> Result<Response, ServiceError> {
    let event_id: i64 = event_id
        .parse()
        .map_err(|_| ServiceError::InvalidArgument("Invalid event ID".to_string()))?;
    let req = ReserveRequest::from_slice(&body)?;

    state.store.reserve(event_id, &req.spot)?;

    json_response(&ReserveResponse::success())
}
