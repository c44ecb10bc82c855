// src/models.rs
use serde::Serialize;

/// Body of `GET /`.
#[derive(Serialize, Clone, Debug)]
pub struct Greeting {
    pub message: String,
    pub version: String,
}

/// Body of `GET /health`.
#[derive(Serialize, Clone, Debug)]
pub struct HealthStatus {
    pub status: &'static str,
    /// Whole seconds elapsed since process start.
    pub uptime: u64,
}

/// A single user record as returned by `GET /api/users`.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct User {
    pub id: u32,
    pub name: &'static str,
}

/// Body of `GET /api/users`.
#[derive(Serialize, Clone, Debug)]
pub struct UserList {
    pub users: Vec<User>,
}

/// Body of `GET /api/info`.
#[derive(Serialize, Clone, Debug)]
pub struct DeploymentInfo {
    pub environment: String,
    pub version: &'static str,
}
