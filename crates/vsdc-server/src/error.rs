use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    #[error(transparent)]
    Validation(#[from] vsdc_ledger::ValidationError),

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("ledger error: {0}")]
    Ledger(#[from] vsdc_ledger::LedgerError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MalformedPayload(_) => StatusCode::BAD_REQUEST,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Ledger(_) | Self::Config(_) | Self::Io(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::MalformedPayload(_) => (status, "Invalid Payload").into_response(),
            Self::Validation(reason) => {
                (status, Json(json!({ "error": reason.to_string() }))).into_response()
            }
            Self::MethodNotAllowed => {
                (status, [(header::ALLOW, "POST")], "Only POST allowed").into_response()
            }
            other => {
                tracing::error!(error = %other, "request failed");
                (status, "Internal Server Error").into_response()
            }
        }
    }
}
