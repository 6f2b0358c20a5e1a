//! CLI configuration from environment.

use anyhow::{Context, Result};
use std::env;
use stepwise_ors::DEFAULT_BASE_URL;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub boundary_country: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            api_key: env::var("OPENROUTESERVICE_API_KEY")
                .context("OPENROUTESERVICE_API_KEY not set")?,
            base_url: env::var("ORS_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            boundary_country: env::var("ORS_BOUNDARY_COUNTRY").ok().filter(|c| !c.is_empty()),
        })
    }
}
