//! HTTP server for the Virtual Sales Data Controller.
//!
//! Accepts invoice submissions as JSON, validates them, and confirms each
//! invoice id exactly once through a shared [`vsdc_ledger::IssuanceLedger`].

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use handler::{AppState, HealthResponse};
pub use router::{build_router, ISSUE_INVOICE_PATH};
pub use server::VsdcServer;
