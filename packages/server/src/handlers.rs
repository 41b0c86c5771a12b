use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::Value;
use tokio::fs;

use rapport_engine::config::DOWNLOAD_FILENAME;
use rapport_engine::{html_to_pdf, TemplateId};

use crate::config::DEFAULT_TEMPLATE;
use crate::error::ApiError;
use crate::models::MessageResponse;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct GenerateQuery {
    pub template: Option<String>,
}

pub async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "rapport report service is running".to_string(),
    })
}

/// GET /generatePDF — render the bundled sample data.
pub async fn generate_pdf_from_file(
    State(state): State<AppState>,
    Query(params): Query<GenerateQuery>,
) -> Result<Response, ApiError> {
    let path = state.config.static_dir.join("content.json");
    let raw = fs::read_to_string(&path).await.map_err(|e| ApiError::StaticAsset {
        name: "content.json",
        source: e,
    })?;
    let data: Value = serde_json::from_str(&raw).map_err(|e| ApiError::ContentParse {
        name: "content.json",
        source: e,
    })?;

    build_pdf_response(&state, &params, &data).await
}

/// POST /generatePDF — render caller-supplied data.
pub async fn generate_pdf_from_body(
    State(state): State<AppState>,
    Query(params): Query<GenerateQuery>,
    body: Bytes,
) -> Result<Response, ApiError> {
    if body.is_empty() {
        return Err(ApiError::NoData);
    }
    let data: Value = serde_json::from_slice(&body).map_err(|_| ApiError::NoData)?;

    // Null and empty-object payloads carry nothing to render.
    let empty = data.is_null() || data.as_object().is_some_and(|o| o.is_empty());
    if empty {
        return Err(ApiError::NoData);
    }

    build_pdf_response(&state, &params, &data).await
}

async fn build_pdf_response(
    state: &AppState,
    params: &GenerateQuery,
    data: &Value,
) -> Result<Response, ApiError> {
    let name = params.template.as_deref().unwrap_or(DEFAULT_TEMPLATE);
    let template =
        TemplateId::from_name(name).ok_or_else(|| ApiError::TemplateNotFound(name.to_string()))?;

    let css_path = state.config.static_dir.join("style.css");
    let css = fs::read_to_string(&css_path)
        .await
        .map_err(|e| ApiError::StaticAsset {
            name: "style.css",
            source: e,
        })?;

    let html = state.renderer.render(template, data, &css)?;
    let pdf = html_to_pdf(&html)?;

    tracing::info!(template = name, bytes = pdf.len(), "generated PDF");

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{DOWNLOAD_FILENAME}\""),
        ),
    ];
    Ok((headers, pdf).into_response())
}
