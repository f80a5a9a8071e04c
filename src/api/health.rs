use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::database::UserStore;

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub database: String,
    pub timestamp: i64,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Database ping failed", body = HealthResponse)
    )
)]
pub async fn health_check(store: web::Data<dyn UserStore>) -> HttpResponse {
    let (status, database, mut builder) = match store.ping().await {
        Ok(()) => ("healthy", "up", HttpResponse::Ok()),
        Err(e) => {
            log::warn!("⚠️ Health check: database ping failed: {}", e);
            ("unhealthy", "down", HttpResponse::ServiceUnavailable())
        }
    };

    builder.json(HealthResponse {
        status: status.to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: database.to_string(),
        timestamp: chrono::Utc::now().timestamp(),
    })
}
