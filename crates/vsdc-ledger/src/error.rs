/// Errors produced by ledger operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("ledger lock poisoned during {0}")]
    LockPoisoned(&'static str),

    #[error("levies on invoice {invoice_id} overflow the amount range")]
    LevyOverflow { invoice_id: String },
}

/// Reasons a submitted invoice is refused before it reaches the ledger.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing local invoice reference")]
    MissingIdentifier,

    #[error("invalid base amount: must be greater than 0")]
    InvalidAmount,

    #[error("invalid Customer TIN format")]
    InvalidTaxId,
}
