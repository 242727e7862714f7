use vsdc_types::InvoiceConfirmation;

use crate::error::LedgerError;
use crate::validation::ValidatedInvoice;

/// Whether an issuance minted a new confirmation or replayed a stored one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IssuanceStatus {
    Created,
    Existing,
}

/// Result of [`IssuanceLedger::issue`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Issuance {
    pub status: IssuanceStatus,
    pub confirmation: InvoiceConfirmation,
}

impl Issuance {
    pub fn is_created(&self) -> bool {
        self.status == IssuanceStatus::Created
    }
}

/// Boundary for idempotent invoice issuance.
pub trait IssuanceLedger: Send + Sync {
    /// Issue `invoice`, or return the confirmation already stored for its id.
    ///
    /// The lookup and the insert happen under one exclusive section: for a
    /// given invoice id exactly one caller ever observes
    /// [`IssuanceStatus::Created`], and every caller receives the same
    /// confirmation.
    fn issue(&self, invoice: ValidatedInvoice) -> Result<Issuance, LedgerError>;

    fn get(&self, invoice_id: &str) -> Result<Option<InvoiceConfirmation>, LedgerError>;

    fn issued_count(&self) -> Result<usize, LedgerError>;
}
