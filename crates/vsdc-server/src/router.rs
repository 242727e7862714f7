use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handler::{self, AppState};

/// Path accepting invoice submissions.
pub const ISSUE_INVOICE_PATH: &str = "/issue-invoice";

/// Build the axum router with all VSDC endpoints.
pub fn build_router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route(
            ISSUE_INVOICE_PATH,
            post(handler::issue_invoice).fallback(handler::method_not_allowed),
        )
        .route("/v1/health", get(handler::health_handler))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
