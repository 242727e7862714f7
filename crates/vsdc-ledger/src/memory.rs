use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use vsdc_types::InvoiceConfirmation;

use crate::certificate::{CertificateSource, RandomCertificates};
use crate::error::LedgerError;
use crate::levy::LevySchedule;
use crate::traits::{Issuance, IssuanceLedger, IssuanceStatus};
use crate::validation::ValidatedInvoice;

/// Verification service that `qr_code` URLs point at by default.
pub const DEFAULT_VERIFICATION_BASE: &str = "https://gra.gov.gh/verify/";

/// In-memory issuance ledger. State lives for the lifetime of the value.
pub struct InMemoryLedger {
    schedule: LevySchedule,
    verification_base: String,
    certificates: Arc<dyn CertificateSource>,
    inner: RwLock<HashMap<String, InvoiceConfirmation>>,
}

impl InMemoryLedger {
    pub fn new(verification_base: impl Into<String>) -> Self {
        Self {
            schedule: LevySchedule::default(),
            verification_base: verification_base.into(),
            certificates: Arc::new(RandomCertificates),
            inner: RwLock::new(HashMap::new()),
        }
    }

    /// Replace the certificate generator.
    pub fn with_certificates(mut self, certificates: Arc<dyn CertificateSource>) -> Self {
        self.certificates = certificates;
        self
    }

    pub fn with_schedule(mut self, schedule: LevySchedule) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn schedule(&self) -> &LevySchedule {
        &self.schedule
    }

    pub fn verification_base(&self) -> &str {
        &self.verification_base
    }

    fn confirm(&self, invoice: &ValidatedInvoice) -> Result<InvoiceConfirmation, LedgerError> {
        let levies = self.schedule.apply(invoice.base_amount()).ok_or_else(|| {
            LedgerError::LevyOverflow {
                invoice_id: invoice.invoice_id().to_owned(),
            }
        })?;
        Ok(InvoiceConfirmation::new(
            invoice.invoice_id(),
            &levies,
            self.certificates.next_certificate(),
            &self.verification_base,
        ))
    }
}

impl Default for InMemoryLedger {
    fn default() -> Self {
        Self::new(DEFAULT_VERIFICATION_BASE)
    }
}

impl IssuanceLedger for InMemoryLedger {
    fn issue(&self, invoice: ValidatedInvoice) -> Result<Issuance, LedgerError> {
        // Held across lookup, computation and insert.
        let mut issued = self
            .inner
            .write()
            .map_err(|_| LedgerError::LockPoisoned("issue"))?;

        if let Some(existing) = issued.get(invoice.invoice_id()) {
            tracing::debug!(invoice_id = invoice.invoice_id(), "replaying issued invoice");
            return Ok(Issuance {
                status: IssuanceStatus::Existing,
                confirmation: existing.clone(),
            });
        }

        let confirmation = self.confirm(&invoice)?;
        issued.insert(invoice.invoice_id().to_owned(), confirmation.clone());
        tracing::info!(
            invoice_id = invoice.invoice_id(),
            sdc_id = %confirmation.sdc_id,
            total = %confirmation.total_with_tax,
            "issued invoice"
        );

        Ok(Issuance {
            status: IssuanceStatus::Created,
            confirmation,
        })
    }

    fn get(&self, invoice_id: &str) -> Result<Option<InvoiceConfirmation>, LedgerError> {
        let issued = self
            .inner
            .read()
            .map_err(|_| LedgerError::LockPoisoned("get"))?;
        Ok(issued.get(invoice_id).cloned())
    }

    fn issued_count(&self) -> Result<usize, LedgerError> {
        let issued = self
            .inner
            .read()
            .map_err(|_| LedgerError::LockPoisoned("issued_count"))?;
        Ok(issued.len())
    }
}
