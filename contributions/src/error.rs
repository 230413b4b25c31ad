//! Error taxonomy for the contribution-calendar pipeline.
//!
//! Every failure mode is surfaced to the caller as one of four kinds; nothing
//! is swallowed or retried inside the pipeline. The caller decides what is
//! user-visible and whether a retry makes sense.

use thiserror::Error;

/// HTTP-layer failure: either the remote answered with a non-success status,
/// or the request never completed at all.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("GitHub API returned HTTP status {0}")]
    Status(u16),

    #[error("request to GitHub API failed: {0}")]
    Network(#[from] reqwest::Error),
}

/// Failure of one pipeline invocation.
#[derive(Debug, Error)]
pub enum ContributionsError {
    /// Required credential missing or empty; no network call was attempted.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// HTTP status or network failure. The caller may retry or show a
    /// temporarily-unavailable state.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The remote service returned a well-formed GraphQL error payload.
    /// Carries the first error's message only.
    #[error("GitHub API error: {0}")]
    RemoteApi(String),

    /// The response body did not match the expected shape, naming the first
    /// violated field. Treated as non-retryable.
    #[error("unexpected response shape: {0}")]
    SchemaValidation(String),
}

impl ContributionsError {
    pub fn schema(field: impl Into<String>) -> Self {
        Self::SchemaValidation(field.into())
    }
}

pub type Result<T> = std::result::Result<T, ContributionsError>;
