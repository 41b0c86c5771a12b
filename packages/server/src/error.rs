//! HTTP error mapping for the report API.
//!
//! Every failure becomes a JSON `{"error": ...}` body with a non-2xx
//! status. An unknown template is a 404, a missing request body a 400,
//! everything else a 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use rapport_engine::ReportError;

use crate::models::ErrorResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body carried no usable JSON data
    #[error("No JSON data provided")]
    NoData,

    /// Request named a template that is not in the registry
    #[error("template not found: {0}")]
    TemplateNotFound(String),

    /// A static asset could not be read
    #[error("Failed to read {name} - {source}")]
    StaticAsset {
        name: &'static str,
        source: std::io::Error,
    },

    /// A static asset was not valid JSON
    #[error("Failed to parse {name} - {source}")]
    ContentParse {
        name: &'static str,
        source: serde_json::Error,
    },

    /// Rendering or PDF conversion failed
    #[error(transparent)]
    Engine(#[from] ReportError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NoData => StatusCode::BAD_REQUEST,
            ApiError::TemplateNotFound(_)
            | ApiError::Engine(ReportError::TemplateNotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::StaticAsset { .. }
            | ApiError::ContentParse { .. }
            | ApiError::Engine(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
