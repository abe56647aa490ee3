pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod controllers;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

// Shared state для всего приложения
pub struct AppState {
    pub store: store::Store,
    pub config: config::Config,
}

impl AppState {
    pub fn new(store: store::Store, config: config::Config) -> Arc<Self> {
        Arc::new(Self { store, config })
    }
}

/// Full HTTP surface with tracing and CORS layers applied.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { concat!("Event Spots API v", env!("CARGO_PKG_VERSION")) }))
        .merge(controllers::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
