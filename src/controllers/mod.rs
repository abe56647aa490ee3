pub mod events;
pub mod health;
pub mod reservations;

use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::sync::Arc;

use crate::error::ServiceError;

pub fn routes() -> axum::Router<Arc<crate::AppState>> {
    axum::Router::new()
        .merge(health::routes())
        .merge(events::routes())
        .merge(reservations::routes())
}

// Явная сериализация: ошибка кодирования -> 500
fn json_response<T: Serialize>(value: &T) -> Result<Response, ServiceError> {
    let body = serde_json::to_vec(value)?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

// На GET-маршрутах id совпадает только в каноническом виде: "01" и "+1" не событие 1
fn canonical_id(segment: &str) -> Option<i64> {
    segment
        .parse::<i64>()
        .ok()
        .filter(|id| id.to_string() == segment)
}
