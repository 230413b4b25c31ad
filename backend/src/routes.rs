use std::sync::Arc;

use axum::{routing::get, Router};
use ::contributions::GithubClient;

use crate::handlers::{contributions, health};

pub fn api_routes() -> Router<Arc<GithubClient>> {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Contribution routes
        .route("/contributions/years", get(contributions::list_years))
        .route("/contributions/:year", get(contributions::get_contributions))
}
