use anyhow::{Context, Result};
use std::env;

use contributions::GITHUB_GRAPHQL_URL;

#[derive(Clone)]
pub struct AppConfig {
    pub port: u16,
    pub github_token: String,
    pub github_username: String,
    pub github_graphql_url: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            // Loaded as raw strings; the pipeline's credential validator is
            // what rejects missing or empty values, before any network call.
            github_token: env::var("GITHUB_TOKEN").unwrap_or_default(),
            github_username: env::var("GITHUB_USERNAME").unwrap_or_default(),
            github_graphql_url: env::var("GITHUB_GRAPHQL_URL")
                .unwrap_or_else(|_| GITHUB_GRAPHQL_URL.to_string()),
        })
    }
}
