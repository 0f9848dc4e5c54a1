use serde::Deserialize;

use vitala_core::config::Config;

/// Wellness service configuration, loaded once at startup and immutable
/// afterwards. Env vars: `DATABASE_URL`, `WELLNESS_PORT`.
#[derive(Debug, Deserialize)]
pub struct WellnessConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3115).
    #[serde(default = "default_wellness_port")]
    pub wellness_port: u16,
}

fn default_wellness_port() -> u16 {
    3115
}

impl Config for WellnessConfig {}
