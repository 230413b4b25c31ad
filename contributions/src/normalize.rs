//! Shape validation and projection of the raw GraphQL response body.
//!
//! The remote API is trusted for ordering: weeks and days are kept exactly as
//! received, with no sorting or deduplication. `totalContributions` is copied
//! verbatim, never recomputed from the per-day counts.

use serde_json::Value;
use shared::models::{ContributionCalendar, ContributionDay, ContributionWeek};

use crate::error::{ContributionsError, Result};

const CALENDAR_PATH: [&str; 4] = ["data", "user", "contributionsCollection", "contributionCalendar"];

/// Validate the decoded response body and project it into a
/// [`ContributionCalendar`].
///
/// Fails with `SchemaValidation` naming the first violated field. The
/// offending payload is logged at debug level for diagnostics.
pub fn contribution_calendar(body: &Value) -> Result<ContributionCalendar> {
    match project(body) {
        Ok(calendar) => Ok(calendar),
        Err(err) => {
            tracing::debug!(payload = %body, "GitHub response failed shape validation");
            Err(err)
        }
    }
}

fn project(body: &Value) -> Result<ContributionCalendar> {
    let mut node = body;
    let mut trail = String::new();
    for key in CALENDAR_PATH {
        if !trail.is_empty() {
            trail.push('.');
        }
        trail.push_str(key);
        node = node
            .get(key)
            .ok_or_else(|| ContributionsError::schema(format!("missing field: {trail}")))?;
    }

    let total_contributions = non_negative_int(node.get("totalContributions"), "totalContributions")?;

    let raw_weeks = node
        .get("weeks")
        .and_then(Value::as_array)
        .ok_or_else(|| ContributionsError::schema("weeks must be an array"))?;

    let mut weeks = Vec::with_capacity(raw_weeks.len());
    for (week_index, week) in raw_weeks.iter().enumerate() {
        let raw_days = week
            .get("contributionDays")
            .and_then(Value::as_array)
            .ok_or_else(|| {
                ContributionsError::schema(format!(
                    "weeks[{week_index}].contributionDays must be an array"
                ))
            })?;

        let mut contribution_days = Vec::with_capacity(raw_days.len());
        for (day_index, day) in raw_days.iter().enumerate() {
            let field =
                |name: &str| format!("weeks[{week_index}].contributionDays[{day_index}].{name}");

            let date = day
                .get("date")
                .and_then(Value::as_str)
                .filter(|date| !date.is_empty())
                .ok_or_else(|| {
                    ContributionsError::schema(format!(
                        "{} must be a non-empty string",
                        field("date")
                    ))
                })?;

            let contribution_count =
                non_negative_int(day.get("contributionCount"), &field("contributionCount"))?;

            contribution_days.push(ContributionDay {
                date: date.to_string(),
                contribution_count,
            });
        }

        weeks.push(ContributionWeek { contribution_days });
    }

    Ok(ContributionCalendar {
        total_contributions,
        weeks,
    })
}

fn non_negative_int(value: Option<&Value>, field: &str) -> Result<u32> {
    value
        .and_then(Value::as_u64)
        .and_then(|count| u32::try_from(count).ok())
        .ok_or_else(|| {
            ContributionsError::schema(format!("{field} must be a non-negative integer"))
        })
}
