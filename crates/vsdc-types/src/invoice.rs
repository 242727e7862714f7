use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::certificate::CertificateId;

/// An invoice submitted for issuance.
///
/// Missing fields deserialize to their empty defaults so that a sparse body
/// reaches validation and is rejected there with a specific reason.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceRequest {
    /// Caller-supplied reference naming one logical invoice.
    pub invoice_id: String,
    #[serde(
        serialize_with = "rust_decimal::serde::float::serialize",
        deserialize_with = "crate::money::deserialize_amount"
    )]
    pub base_amount: Decimal,
    /// Customer tax identification number, if any.
    pub customer_tin: Option<String>,
}

impl InvoiceRequest {
    pub fn new(invoice_id: impl Into<String>, base_amount: Decimal) -> Self {
        Self {
            invoice_id: invoice_id.into(),
            base_amount,
            customer_tin: None,
        }
    }

    pub fn with_customer_tin(mut self, tin: impl Into<String>) -> Self {
        self.customer_tin = Some(tin.into());
        self
    }

    /// The TIN, treating an empty string the same as an absent one.
    pub fn customer_tin(&self) -> Option<&str> {
        self.customer_tin.as_deref().filter(|tin| !tin.is_empty())
    }
}

/// Levies owed on a base amount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LevyBreakdown {
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub base_amount: Decimal,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub vat_amount: Decimal,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub nhil_amount: Decimal,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub getfund_amount: Decimal,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub total_with_tax: Decimal,
}

impl LevyBreakdown {
    /// Sum of the three levies.
    pub fn total_levies(&self) -> Decimal {
        self.vat_amount + self.nhil_amount + self.getfund_amount
    }
}

/// The issued record returned for an invoice, on first issuance and on
/// every replay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceConfirmation {
    pub invoice_id: String,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub vat_amount: Decimal,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub nhil_amount: Decimal,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub getfund_amount: Decimal,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub total_with_tax: Decimal,
    pub sdc_id: CertificateId,
    /// Verification URL for `sdc_id`.
    pub qr_code: String,
}

impl InvoiceConfirmation {
    pub fn new(
        invoice_id: impl Into<String>,
        levies: &LevyBreakdown,
        sdc_id: CertificateId,
        verification_base: &str,
    ) -> Self {
        let qr_code = sdc_id.verification_url(verification_base);
        Self {
            invoice_id: invoice_id.into(),
            vat_amount: levies.vat_amount,
            nhil_amount: levies.nhil_amount,
            getfund_amount: levies.getfund_amount,
            total_with_tax: levies.total_with_tax,
            sdc_id,
            qr_code,
        }
    }
}
