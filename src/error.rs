use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single request. None of these are retried and none are fatal
/// to the process.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    InvalidArgument(String),
    #[error("Event not found")]
    EventNotFound,
    #[error("Spot not found")]
    SpotNotFound,
    #[error("Spot is already reserved")]
    Conflict,
    #[error("Error encoding response to JSON")]
    Serialization(#[from] serde_json::Error),
}

impl ServiceError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServiceError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            ServiceError::EventNotFound => StatusCode::NOT_FOUND,
            // The reserve endpoint reports both of these as plain client errors
            ServiceError::SpotNotFound | ServiceError::Conflict => StatusCode::BAD_REQUEST,
            ServiceError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        if let ServiceError::Serialization(ref e) = self {
            tracing::error!("Failed to encode response: {:?}", e);
        }
        (self.status(), self.to_string()).into_response()
    }
}

/// Startup failure while reading the data file. The process must not start
/// with a partial dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read data file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse data file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
