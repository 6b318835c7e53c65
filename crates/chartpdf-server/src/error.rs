//! HTTP error responses.

use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chartpdf_common::ChartPdfError;
use serde_json::json;
use tokio::task::JoinError;
use tracing::{error, warn};

/// Message returned when a required form field is absent.
pub const MISSING_FIELDS: &str = "email, chart_type, file required";

/// Errors surfaced by the HTTP handlers.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    /// `email`, `chart_type` or `file` is absent or empty.
    #[error("email, chart_type, file required")]
    MissingFields,

    /// The multipart body could not be read.
    #[error("Invalid multipart body: {0}")]
    Multipart(#[from] MultipartError),

    /// Chart generation failed.
    #[error(transparent)]
    Chart(#[from] ChartPdfError),

    /// The blocking worker panicked or was cancelled.
    #[error("Chart worker failed: {0}")]
    Worker(#[from] JoinError),
}

/// Result type for the HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Status code sent to the client.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingFields => StatusCode::BAD_REQUEST,
            Self::Multipart(err) => err.status(),
            Self::Chart(err) if err.is_client_error() => StatusCode::BAD_REQUEST,
            Self::Chart(_) | Self::Worker(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the `error` field of the response body.
    pub fn public_message(&self) -> String {
        match self {
            Self::MissingFields => MISSING_FIELDS.to_string(),
            Self::Multipart(err) => err.body_text(),
            Self::Chart(err) => err.public_message(),
            Self::Worker(_) => "Chart generation failed".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, status = status.as_u16(), "Request failed");
        } else {
            warn!(error = %self, status = status.as_u16(), "Request rejected");
        }

        (status, Json(json!({ "error": self.public_message() }))).into_response()
    }
}
