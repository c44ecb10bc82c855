// src/errors.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Server startup failed: {0}")]
    Startup(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
