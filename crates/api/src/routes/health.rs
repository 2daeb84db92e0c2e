//! Health check endpoint handlers.

use axum::Json;
use serde::Serialize;

/// Simple status response for liveness probes.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

/// Liveness probe endpoint.
///
/// Returns 200 OK as long as the process is serving requests. The database
/// is not consulted.
pub async fn live() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "alive".to_string(),
    })
}
