use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails fast if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub cat_fact_api: String,
    pub fact_timeout: Duration,
    pub user_email: String,
    pub user_name: String,
    pub user_stack: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            cat_fact_api: require_env("CAT_FACT_API")?,
            fact_timeout: Duration::from_millis(
                std::env::var("FACT_TIMEOUT_MS")
                    .unwrap_or_else(|_| "5000".to_string())
                    .parse::<u64>()
                    .context("FACT_TIMEOUT_MS must be a duration in milliseconds")?,
            ),
            user_email: require_env("USER_EMAIL")?,
            user_name: require_env("USER_NAME")?,
            user_stack: require_env("USER_STACK")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
