// src/api/handlers/users.rs
use actix_web::{HttpResponse, Result};
use crate::models::{User, UserList};

/// Fixed roster, returned in a stable order.
pub async fn get_users() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(UserList {
        users: vec![
            User { id: 1, name: "Alice" },
            User { id: 2, name: "Bob" },
        ],
    }))
}
