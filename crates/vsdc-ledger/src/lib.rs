//! Idempotent invoice issuance for the Virtual Sales Data Controller (VSDC).
//!
//! This crate is the heart of VSDC. It provides:
//! - [`RequestValidator`] turning raw requests into [`ValidatedInvoice`]s
//! - [`LevySchedule`] computing VAT, NHIL and GETFund on a base amount
//! - [`CertificateSource`] for minting SDC certificate ids
//! - The [`IssuanceLedger`] trait boundary and its [`InMemoryLedger`]
//!   implementation, which confirms each invoice id exactly once

pub mod certificate;
pub mod error;
pub mod levy;
pub mod memory;
pub mod traits;
pub mod validation;

pub use certificate::{CertificateSource, RandomCertificates};
pub use error::{LedgerError, ValidationError};
pub use levy::LevySchedule;
pub use memory::{InMemoryLedger, DEFAULT_VERIFICATION_BASE};
pub use traits::{Issuance, IssuanceLedger, IssuanceStatus};
pub use validation::{RequestValidator, ValidatedInvoice, DEFAULT_MIN_TIN_LENGTH};
