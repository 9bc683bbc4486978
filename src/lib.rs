// Library entry point so the modules are reachable from the integration
// tests; main.rs stays the binary entry point.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod rest;

use sqlx::SqlitePool;

use crate::auth::Keys;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub keys: Keys,
}
