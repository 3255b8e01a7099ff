//! Error types for the document generation API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use docgen_core::DocGenError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Document rendering failed: {0}")]
    Render(#[from] DocGenError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Render(e) => {
                tracing::error!("Document rendering failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Document rendering failed".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
