use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use kommunestat_core::constants::{
    DEFAULT_EDUCATION_URL, DEFAULT_EMPLOYMENT_URL, DEFAULT_POPULATION_URL,
};
use kommunestat_core::dataset::SourceConfig;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub sources: SourceConfig,
    pub cors_allow: Vec<String>,
    /// Applies to incoming requests and to the dataset fetches.
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("KOMMUNESTAT_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid KOMMUNESTAT_LISTEN_ADDR")?;
        let cors_allow = std::env::var("KOMMUNESTAT_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("KOMMUNESTAT_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let request_timeout = Duration::from_millis(timeout_ms);

        let url = |key: &str, default: &str| std::env::var(key).unwrap_or_else(|_| default.into());
        let sources = SourceConfig {
            population_url: url("KOMMUNESTAT_POPULATION_URL", DEFAULT_POPULATION_URL),
            employment_url: url("KOMMUNESTAT_EMPLOYMENT_URL", DEFAULT_EMPLOYMENT_URL),
            education_url: url("KOMMUNESTAT_EDUCATION_URL", DEFAULT_EDUCATION_URL),
            timeout: request_timeout,
        };

        Ok(Self {
            listen_addr,
            sources,
            cors_allow,
            request_timeout,
        })
    }
}
