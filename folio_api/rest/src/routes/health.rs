use std::sync::Arc;

use axum::{extract::State, routing, Json, Router};
use folio_core_health_contracts::{HealthService, HealthStatus};

use crate::models::health::ApiHealthResponse;

pub fn router(service: Arc<impl HealthService>) -> Router<()> {
    Router::new()
        .route("/health", routing::get(health))
        .with_state(service)
}

async fn health(service: State<Arc<impl HealthService>>) -> Json<ApiHealthResponse> {
    let HealthStatus { env } = service.get_status().await;

    Json(ApiHealthResponse {
        status: "ok",
        message: "Server is running",
        env,
    })
}
