// src/api/handlers/health.rs
use actix_web::{web, HttpResponse, Result};
use crate::api::AppState;
use crate::models::HealthStatus;

/// Liveness probe for the deploy tool's health checks.
pub async fn health_check(state: web::Data<AppState>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(HealthStatus {
        status: "healthy",
        uptime: state.uptime_secs(),
    }))
}
