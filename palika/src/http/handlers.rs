// palika/src/http/handlers.rs

// Views stay thin: look up the processor, call it, map the result. Only the
// "no data" and "unknown section" cases are caught explicitly; anything
// unexpected falls through to the generic 500 mapping.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use serde_json::json;
use tracing::error;

use palika_core::PalikaError;
use palika_core::application::{ReportBuilder, SectionProcessor};
use palika_core::domain::error::DomainError;

use crate::http::AppState;

/// Error-to-response mapping for every endpoint.
pub struct ApiError(PalikaError);

impl From<PalikaError> for ApiError {
    fn from(err: PalikaError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            e if e.is_no_data() => StatusCode::NOT_FOUND,
            PalikaError::Domain(DomainError::UnregisteredSection(_)) => StatusCode::NOT_FOUND,
            _ => {
                error!(err = %self.0, "Unhandled error in view");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

/// GET /api/v1/{domain}/{section}
///
/// Flat JSON of the aggregated fields. 404 with an error payload when the
/// section was never seeded or the key is unregistered.
pub async fn section_json(
    State(state): State<AppState>,
    Path((domain, section)): Path<(String, String)>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let key = format!("{domain}/{section}");
    let Some(processor) = state.manager.get(&key) else {
        return Err(PalikaError::from(DomainError::UnregisteredSection(key)).into());
    };
    let data = processor.get_data(state.repo.as_ref()).await?;
    Ok(Json(data))
}

/// GET /report — the full HTML report with table of contents.
pub async fn report_html(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let doc = ReportBuilder::default()
        .assemble(
            &state.manager,
            state.repo.as_ref(),
            &state.charts,
            &state.municipality,
        )
        .await?;
    let html = state.renderer.render_report(&doc).map_err(PalikaError::from)?;
    Ok(Html(html))
}

/// GET /report/section/{domain}/{section} — one section's HTML fragment.
pub async fn section_html(
    State(state): State<AppState>,
    Path((domain, section)): Path<(String, String)>,
) -> Result<Html<String>, ApiError> {
    let key = format!("{domain}/{section}");
    let pdf_section = state
        .manager
        .process_category_for_pdf(&key, state.repo.as_ref(), &state.charts)
        .await?;
    let html = state
        .renderer
        .render_section(&pdf_section)
        .map_err(PalikaError::from)?;
    Ok(Html(html))
}

/// GET /report/pdf — the full report converted by the external engine.
/// Conversion is blocking, so it is pushed off the async worker.
pub async fn report_pdf(State(state): State<AppState>) -> Result<Response, ApiError> {
    let doc = ReportBuilder::default()
        .assemble(
            &state.manager,
            state.repo.as_ref(),
            &state.charts,
            &state.municipality,
        )
        .await?;
    let html = state.renderer.render_report(&doc).map_err(PalikaError::from)?;

    let pdf = state.pdf.clone();
    let bytes = tokio::task::spawn_blocking(move || pdf.render(&html))
        .await
        .map_err(|e| PalikaError::InternalError(format!("PDF task panicked: {e}")))?
        .map_err(PalikaError::from)?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/pdf")],
        bytes,
    )
        .into_response())
}
