//! API error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use palco_core::EngineError;
use serde::Serialize;

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
}

/// HTTP-layer wrapper around `EngineError` that implements `IntoResponse`.
#[derive(Debug)]
pub struct ApiError(pub EngineError);

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = match &self.0 {
            EngineError::SceneNotFound(_) => (StatusCode::NOT_FOUND, "scene_not_found"),
            EngineError::InvalidTransition(_) => (StatusCode::CONFLICT, "invalid_transition"),
            EngineError::VoteClosed => (StatusCode::CONFLICT, "vote_closed"),
            EngineError::OptionOutOfRange { .. } => (StatusCode::BAD_REQUEST, "option_out_of_range"),
            EngineError::Content(_) => (StatusCode::INTERNAL_SERVER_ERROR, "content_error"),
        };

        let body = ErrorBody {
            error: error_code,
            message: self.0.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
