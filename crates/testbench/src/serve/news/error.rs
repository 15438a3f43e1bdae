//! Client errors returned by the mock news API.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Client error, answered with a `{"detail": [...]}` body.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing, empty, or unknown `apikey`.
    #[error("You did not provide an API key.")]
    MissingApiKey,
    /// A query parameter failed validation.
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingApiKey => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable error messages
    pub detail: Vec<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            detail: vec![self.to_string()],
        };
        (self.status(), Json(body)).into_response()
    }
}
