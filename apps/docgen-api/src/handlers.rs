//! HTTP handlers for the document generation API

use axum::{
    extract::rejection::JsonRejection,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;

use crate::error::ApiError;
use crate::models::GenerateRequest;

/// Health check endpoint
pub async fn health() -> &'static str {
    "OK"
}

/// Generate a legal document and return it as a PDF download.
pub async fn generate_document(
    req: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(req) = req.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;

    let bytes = match &req {
        GenerateRequest::Safe(terms) => docgen_core::generate_safe(terms)?,
        GenerateRequest::Pas4(offer) => docgen_core::generate_placement_offer(offer)?,
    };

    tracing::info!(
        "Generated {} document ({} bytes)",
        req.kind(),
        bytes.len()
    );

    let filename = format!("{}_{}.pdf", req.kind(), Utc::now().format("%Y%m%d"));
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        bytes,
    )
        .into_response())
}
