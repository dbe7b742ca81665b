// palika/src/http/mod.rs

pub mod handlers;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;

use palika_core::application::DomainManager;
use palika_core::domain::profile::Municipality;
use palika_core::infrastructure::charts::ChartService;
use palika_core::infrastructure::render::{PdfRenderer, ReportRenderer};
use palika_core::ports::repository::Repository;

/// Shared per-request context. Cheap to clone: everything heavy is behind
/// an Arc, and requests never mutate it.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn Repository>,
    pub manager: Arc<DomainManager>,
    pub charts: Arc<ChartService>,
    pub renderer: Arc<ReportRenderer>,
    pub pdf: Arc<PdfRenderer>,
    pub municipality: Municipality,
}

/// Versioned JSON API plus the HTML/PDF report endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/{domain}/{section}", get(handlers::section_json))
        .route("/report", get(handlers::report_html))
        .route("/report/pdf", get(handlers::report_pdf))
        .route(
            "/report/section/{domain}/{section}",
            get(handlers::section_html),
        )
        .with_state(state)
}
