// src/api/handlers/root.rs
use actix_web::{web, HttpResponse, Result};
use crate::api::AppState;
use crate::models::Greeting;

pub async fn root(state: web::Data<AppState>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(Greeting {
        message: "Version 2 deployed!".to_string(),
        version: state.config.app_version.clone(),
    }))
}
