use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use contributions::ContributionsError;
use shared::api::ErrorResponse;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Validation(String),
    Pipeline(ContributionsError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(msg) => write!(f, "Validation error: {}", msg),
            Self::Pipeline(e) => write!(f, "Pipeline error: {}", e),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ContributionsError> for AppError {
    fn from(err: ContributionsError) -> Self {
        Self::Pipeline(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            Self::Validation(msg) => {
                tracing::warn!("Rejected request: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new("validation_error", msg),
                )
            }
            Self::Pipeline(err) => match &err {
                ContributionsError::Configuration(_) => {
                    tracing::error!("Configuration error: {}", err);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        ErrorResponse::new("configuration_error", err.to_string()),
                    )
                }
                ContributionsError::Transport(_) => {
                    tracing::error!("Transport failure talking to GitHub: {}", err);
                    (
                        StatusCode::BAD_GATEWAY,
                        ErrorResponse::new("upstream_unavailable", err.to_string()),
                    )
                }
                ContributionsError::RemoteApi(_) => {
                    tracing::warn!("GitHub API rejected the request: {}", err);
                    (
                        StatusCode::BAD_GATEWAY,
                        ErrorResponse::new("github_api_error", err.to_string()),
                    )
                }
                ContributionsError::SchemaValidation(_) => {
                    tracing::error!("GitHub response failed validation: {}", err);
                    (
                        StatusCode::BAD_GATEWAY,
                        ErrorResponse::new("unexpected_response", err.to_string()),
                    )
                }
            },
        };

        (status, Json(error_response)).into_response()
    }
}

pub type ApiResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use contributions::TransportError;

    #[test]
    fn validation_errors_map_to_bad_request() {
        let response = AppError::Validation("year out of range".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn configuration_errors_map_to_internal_error() {
        let err = ContributionsError::Configuration("GitHub token is required".to_string());
        let response = AppError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn transport_errors_map_to_bad_gateway() {
        let err = ContributionsError::Transport(TransportError::Status(503));
        let response = AppError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn remote_api_errors_map_to_bad_gateway() {
        let err = ContributionsError::RemoteApi("Bad credentials".to_string());
        let response = AppError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn schema_errors_map_to_bad_gateway() {
        let err = ContributionsError::SchemaValidation("missing field: data.user".to_string());
        let response = AppError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
