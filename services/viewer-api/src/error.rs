//! HTTP mapping for viewer errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use metrics::counter;
use serde::Serialize;
use viewer_common::ViewerError;

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: &'static str,
    pub message: String,
}

/// A [`ViewerError`] returned from a handler.
#[derive(Debug)]
pub struct ApiError(pub ViewerError);

impl From<ViewerError> for ApiError {
    fn from(err: ViewerError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.0.error_code();
        let status =
            StatusCode::from_u16(self.0.http_status_code()).unwrap_or(StatusCode::BAD_REQUEST);

        tracing::warn!(code, error = %self.0, "Request rejected");
        counter!("viewer_errors_total", "code" => code).increment(1);

        let body = ErrorResponse {
            code,
            message: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
