use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{Datelike, Utc};
use contributions::GithubClient;

use crate::error::{ApiResult, AppError};
use shared::api::{ContributionsResponse, YearsResponse};

/// GitHub launched in 2008; there is no contribution data before that.
const FIRST_GITHUB_YEAR: i32 = 2008;

/// How many years the year selector offers, current year included.
const SELECTABLE_YEARS: i32 = 3;

pub async fn get_contributions(
    State(client): State<Arc<GithubClient>>,
    Path(year): Path<i32>,
) -> ApiResult<Json<ContributionsResponse>> {
    validate_year(year, Utc::now().year())?;

    let calendar = client.fetch_contribution_calendar(year).await?;

    Ok(Json(ContributionsResponse { year, calendar }))
}

pub async fn list_years() -> Json<YearsResponse> {
    Json(YearsResponse {
        years: selectable_years(Utc::now().year()),
    })
}

fn validate_year(year: i32, current_year: i32) -> Result<(), AppError> {
    if year < FIRST_GITHUB_YEAR || year > current_year {
        return Err(AppError::Validation(format!(
            "year must be between {FIRST_GITHUB_YEAR} and {current_year}"
        )));
    }
    Ok(())
}

fn selectable_years(current_year: i32) -> Vec<i32> {
    (0..SELECTABLE_YEARS)
        .map(|offset| current_year - offset)
        .collect()
}
