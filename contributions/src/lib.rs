//! Contribution-calendar data pipeline.
//!
//! Fetches one calendar year of GitHub contribution activity over the GraphQL
//! API, validates the response shape, and projects it into the shared
//! [`ContributionCalendar`](shared::models::ContributionCalendar) model.
//!
//! The pipeline is three steps, run in order per invocation:
//! credential validation ([`credentials`]), the network fetch ([`client`]),
//! and response normalization ([`normalize`]). Each invocation is independent
//! and stateless; nothing is cached or persisted between calls.

pub mod client;
pub mod credentials;
pub mod error;
pub mod normalize;

pub use client::{GithubClient, GITHUB_GRAPHQL_URL};
pub use credentials::Credentials;
pub use error::{ContributionsError, TransportError};
