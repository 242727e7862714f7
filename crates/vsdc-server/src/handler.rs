use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use vsdc_ledger::{IssuanceLedger, IssuanceStatus, RequestValidator};
use vsdc_types::{InvoiceConfirmation, InvoiceRequest};

use crate::error::{ServerError, ServerResult};

/// Shared state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub ledger: Arc<dyn IssuanceLedger>,
    pub validator: RequestValidator,
}

impl AppState {
    pub fn new(ledger: Arc<dyn IssuanceLedger>, validator: RequestValidator) -> Self {
        Self { ledger, validator }
    }
}

/// Issue an invoice, or replay the confirmation stored for its id.
///
/// Responds 201 on first issuance and 200 on replay with an identical body.
pub async fn issue_invoice(
    State(state): State<AppState>,
    body: Bytes,
) -> ServerResult<(StatusCode, Json<InvoiceConfirmation>)> {
    let request: InvoiceRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!(error = %e, "rejecting malformed invoice payload");
        ServerError::MalformedPayload(e.to_string())
    })?;

    let invoice = state.validator.validate(&request).map_err(|e| {
        tracing::warn!(invoice_id = %request.invoice_id, reason = %e, "invoice failed validation");
        e
    })?;

    let issuance = state.ledger.issue(invoice)?;
    let status = match issuance.status {
        IssuanceStatus::Created => StatusCode::CREATED,
        IssuanceStatus::Existing => StatusCode::OK,
    };
    Ok((status, Json(issuance.confirmation)))
}

/// Any method other than POST on the issuance route.
pub async fn method_not_allowed() -> ServerError {
    ServerError::MethodNotAllowed
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub issued_invoices: usize,
}

/// Health check handler.
pub async fn health_handler(State(state): State<AppState>) -> ServerResult<Json<HealthResponse>> {
    Ok(Json(HealthResponse {
        status: "ok".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        issued_invoices: state.ledger.issued_count()?,
    }))
}
