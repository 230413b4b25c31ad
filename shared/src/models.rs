use serde::{Deserialize, Serialize};

/// One day's worth of activity in a contribution calendar.
///
/// Field names follow GitHub's GraphQL schema (camelCase on the wire) so the
/// JSON the proxy emits matches what the GitHub API itself returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionDay {
    /// ISO 8601 calendar date, e.g. "2024-01-01"
    pub date: String,
    pub contribution_count: u32,
}

/// A chronological run of days, normally 7 long.
///
/// The first and last week of a year may be shorter depending on which
/// weekday the year starts and ends on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionWeek {
    pub contribution_days: Vec<ContributionDay>,
}

/// A full year of contribution activity for one user.
///
/// `total_contributions` is whatever the source reported; it is never
/// recomputed from the per-day counts, even if the two disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionCalendar {
    pub total_contributions: u32,
    pub weeks: Vec<ContributionWeek>,
}

/// Rendering tier for a day's contribution count.
///
/// Thresholds match the original heat-map legend: a count of zero is the
/// no-activity tier, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    None,
    Low,
    Moderate,
    High,
    VeryHigh,
    Extreme,
}

impl ActivityLevel {
    pub fn for_count(count: u32) -> Self {
        match count {
            0 => Self::None,
            1..=3 => Self::Low,
            4..=6 => Self::Moderate,
            7..=9 => Self::High,
            10..=12 => Self::VeryHigh,
            _ => Self::Extreme,
        }
    }
}

impl ContributionDay {
    pub fn activity_level(&self) -> ActivityLevel {
        ActivityLevel::for_count(self.contribution_count)
    }
}
