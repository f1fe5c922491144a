use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::storage::UserStore;

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    /// Whether the flat-file user store is readable.
    pub store_readable: bool,
    pub timestamp: i64,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check(users: web::Data<UserStore>) -> impl Responder {
    let store_readable = users.load().is_ok();
    if !store_readable {
        log::warn!("⚠️ Health check: user store is unreadable");
    }

    HttpResponse::Ok().json(HealthResponse {
        status: if store_readable { "healthy" } else { "degraded" }.to_string(),
        service: "crypto-insight-service".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store_readable,
        timestamp: chrono::Utc::now().timestamp(),
    })
}
