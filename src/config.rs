// src/config.rs

use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub jwt_secret: String,
    pub jwt_expiration: u64,
    pub rust_log: String,
}

impl Config {
    /// Loads configuration from the environment.
    ///
    /// Every value has a demo-friendly default so the server boots with zero
    /// setup. Storage is process-memory only, so there is no database URL.
    pub fn from_env() -> Self {
        dotenv().ok();

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let jwt_secret =
            env::var("JWT_SECRET").unwrap_or_else(|_| "recipeshare-dev-secret".to_string());

        let jwt_expiration = env::var("JWT_EXPIRATION")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(86400);

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Self {
            bind_addr,
            jwt_secret,
            jwt_expiration,
            rust_log,
        }
    }
}
