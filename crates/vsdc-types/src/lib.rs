//! Foundation types for the Virtual Sales Data Controller (VSDC).
//!
//! This crate provides the wire and data types shared by the ledger, the
//! HTTP server, and the CLI.
//!
//! # Key Types
//!
//! - [`InvoiceRequest`] — Caller-submitted invoice awaiting issuance
//! - [`InvoiceConfirmation`] — Issued invoice with levies and certificate
//! - [`CertificateId`] — 16-character SDC certificate token
//! - [`LevyBreakdown`] — VAT, NHIL and GETFund amounts for a base amount

pub mod certificate;
pub mod error;
pub mod invoice;
pub mod money;

pub use certificate::CertificateId;
pub use error::TypeError;
pub use invoice::{InvoiceConfirmation, InvoiceRequest, LevyBreakdown};
pub use money::{deserialize_amount, round_currency, CURRENCY_SCALE};
