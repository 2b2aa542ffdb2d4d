//! Liveness endpoint.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub healthy: bool,
    pub status: String,
}

pub async fn healthcheck() -> Json<HealthStatus> {
    Json(HealthStatus {
        healthy: true,
        status: "Up and running!".to_string(),
    })
}
