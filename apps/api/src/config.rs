use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_PORT: &str = "8080";
const DEFAULT_ANALYSIS_DELAY_MS: &str = "2000";

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Simulated processing latency applied before each analysis run.
    pub analysis_delay: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", DEFAULT_PORT)
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            analysis_delay: Duration::from_millis(
                env_or("ANALYSIS_DELAY_MS", DEFAULT_ANALYSIS_DELAY_MS)
                    .parse::<u64>()
                    .context("ANALYSIS_DELAY_MS must be a whole number of milliseconds")?,
            ),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            analysis_delay: Duration::from_millis(2000),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
