use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::DomainError;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

/// Failure of a single request, rendered as `{"status": "failed", "detail": ...}`.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ApiError {
    /// Lookups where an absent vehicle means "no such resource" rather than a bad request.
    pub fn not_found_if_missing(err: DomainError) -> Self {
        match err {
            DomainError::VehicleNotFound(_) => ApiError::NotFound(err.to_string()),
            other => ApiError::Domain(other),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            // Every other failure, storage included, is reported as a bad request
            ApiError::Validation(_) | ApiError::Domain(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = self.to_string();

        match &self {
            ApiError::Domain(DomainError::Storage(_)) => error!(%detail, "Request failed"),
            _ => warn!(status = status.as_u16(), %detail, "Request rejected"),
        }

        (status, Json(json!({ "status": "failed", "detail": detail }))).into_response()
    }
}
