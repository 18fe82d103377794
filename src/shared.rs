use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

use crate::bonus::ConfigurationError;
use crate::ingest::SchemaError;
use crate::store::RecordError;
use crate::tournament::TournamentRegistry;

/// Shared application state containing all dependencies
#[derive(Clone, Default)]
pub struct AppState {
    pub registry: Arc<TournamentRegistry>,
}

impl AppState {
    pub fn new(registry: Arc<TournamentRegistry>) -> Self {
        Self { registry }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Record(#[from] RecordError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Schema(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Record(RecordError::UnknownRound(_)) => StatusCode::NOT_FOUND,
            AppError::Record(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Configuration(_) => StatusCode::BAD_REQUEST,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
        };

        let body = match &self {
            AppError::Schema(err) => Json(json!({
                "error": err.to_string(),
                "found": err.found,
                "candidates": err.candidates,
            })),
            other => Json(json!({
                "error": other.to_string()
            })),
        };

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_errors_to_status_codes() {
        let cases = vec![
            (
                AppError::Record(RecordError::UnknownRound("D1R1".into())),
                StatusCode::NOT_FOUND,
            ),
            (
                AppError::Record(RecordError::BlankWinner),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                AppError::Configuration(ConfigurationError::UnknownWinnerType("x".into())),
                StatusCode::BAD_REQUEST,
            ),
            (AppError::Conflict("taken".into()), StatusCode::CONFLICT),
            (AppError::NotFound("gone".into()), StatusCode::NOT_FOUND),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }
}
