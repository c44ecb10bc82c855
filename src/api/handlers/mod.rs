// src/api/handlers/mod.rs
mod health;
mod info;
mod root;
mod users;

pub use health::health_check;
pub use info::get_info;
pub use root::root;
pub use users::get_users;
