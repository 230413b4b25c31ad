//! GitHub GraphQL client for fetching one calendar year of contributions.

use reqwest::header::AUTHORIZATION;
use serde_json::{json, Value};
use shared::models::ContributionCalendar;

use crate::credentials::Credentials;
use crate::error::{ContributionsError, Result, TransportError};
use crate::normalize;

pub const GITHUB_GRAPHQL_URL: &str = "https://api.github.com/graphql";

const CONTRIBUTIONS_QUERY: &str = "\
query ($login: String!, $from: DateTime!, $to: DateTime!) {
  user(login: $login) {
    contributionsCollection(from: $from, to: $to) {
      contributionCalendar {
        totalContributions
        weeks {
          contributionDays {
            contributionCount
            date
          }
        }
      }
    }
  }
}";

/// Client for the GitHub contributions GraphQL API.
///
/// Stateless between calls: every fetch is an independent request producing a
/// fresh calendar, so the client may be shared across concurrent callers.
pub struct GithubClient {
    http: reqwest::Client,
    credentials: Credentials,
    endpoint: String,
}

impl GithubClient {
    pub fn new(credentials: Credentials) -> Self {
        Self::with_endpoint(credentials, GITHUB_GRAPHQL_URL)
    }

    /// Point the client at a non-default GraphQL endpoint (enterprise hosts,
    /// local test servers).
    pub fn with_endpoint(credentials: Credentials, endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            credentials,
            endpoint: endpoint.into(),
        }
    }

    /// Fetch the contribution calendar for one Gregorian calendar year.
    ///
    /// Issues a single POST with the credential token as a bearer header; no
    /// retry, no caching. See [`ContributionsError`] for the failure modes.
    pub async fn fetch_contribution_calendar(&self, year: i32) -> Result<ContributionCalendar> {
        let (from, to) = date_range(year);
        tracing::debug!(
            year,
            username = self.credentials.username(),
            "fetching GitHub contribution calendar"
        );

        let request_body = json!({
            "query": CONTRIBUTIONS_QUERY,
            "variables": {
                "login": self.credentials.username(),
                "from": from,
                "to": to,
            },
        });

        let response = self
            .http
            .post(&self.endpoint)
            .header(AUTHORIZATION, format!("bearer {}", self.credentials.token()))
            .json(&request_body)
            .send()
            .await
            .map_err(TransportError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()).into());
        }

        let payload: Value = response.json().await.map_err(TransportError::Network)?;

        if let Some(message) = first_graphql_error(&payload) {
            return Err(ContributionsError::RemoteApi(message));
        }

        let calendar = normalize::contribution_calendar(&payload)?;
        tracing::debug!(
            total_contributions = calendar.total_contributions,
            weeks = calendar.weeks.len(),
            "contribution calendar fetched"
        );
        Ok(calendar)
    }
}

/// The exact date range GitHub expects for a calendar year: naive local
/// timestamps, no timezone conversion.
fn date_range(year: i32) -> (String, String) {
    (
        format!("{year}-01-01T00:00:00"),
        format!("{year}-12-31T23:59:59"),
    )
}

/// First message from a non-empty GraphQL `errors` array, if present.
///
/// Only the first error is reported, matching the original consumer's
/// behavior. An error element without a `message` falls back to a generic
/// description.
fn first_graphql_error(body: &Value) -> Option<String> {
    let first = body.get("errors")?.as_array()?.first()?;
    Some(
        first
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("Unknown GitHub API Error")
            .to_string(),
    )
}
