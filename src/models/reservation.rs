use serde::{Deserialize, Serialize};

use crate::error::ServiceError;

// Body of POST /event/{event_id}/reserve
#[derive(Debug, Clone, Deserialize)]
pub struct ReserveRequest {
    pub spot: String,
}

impl ReserveRequest {
    /// Decodes a raw request body. Anything other than a JSON object with a
    /// string `spot` field is rejected before the store is touched.
    pub fn from_slice(body: &[u8]) -> Result<Self, ServiceError> {
        serde_json::from_slice(body).map_err(|e| {
            tracing::debug!("Rejected reservation payload: {}", e);
            ServiceError::InvalidArgument("Invalid request body".to_string())
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReserveResponse {
    pub message: &'static str,
}

impl ReserveResponse {
    pub fn success() -> Self {
        Self { message: "Spot reserved successfully" }
    }
}
