// src/api/handlers/info.rs
use actix_web::{web, HttpResponse, Result};
use crate::api::AppState;
use crate::models::DeploymentInfo;

/// The version here is the release literal baked into this build, not the
/// `APP_VERSION` deployment label reported by `/`.
pub async fn get_info(state: web::Data<AppState>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(DeploymentInfo {
        environment: state.config.environment.clone(),
        version: "2.0",
    }))
}
