use std::env;

/// Process configuration, read from the environment exactly once at startup.
/// The signing secret is turned into keys at construction time and never
/// read from the environment again.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub secret_key: String,
    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> Self {
        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let secret_key = env::var("SECRET_KEY").expect("SECRET_KEY must be set");
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        Self {
            database_url,
            secret_key,
            bind_addr,
        }
    }
}
