use rust_decimal::Decimal;
use vsdc_types::InvoiceRequest;

use crate::error::ValidationError;
use crate::levy::LevySchedule;

/// Shortest customer TIN accepted when one is supplied.
pub const DEFAULT_MIN_TIN_LENGTH: usize = 11;

/// An invoice request that has passed [`RequestValidator::validate`].
///
/// Only the validator can construct one, so the ledger never sees a
/// request with an empty id, a non-positive amount, or an amount whose
/// levies do not fit in a `Decimal`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedInvoice {
    invoice_id: String,
    base_amount: Decimal,
    customer_tin: Option<String>,
}

impl ValidatedInvoice {
    pub fn invoice_id(&self) -> &str {
        &self.invoice_id
    }

    pub fn base_amount(&self) -> Decimal {
        self.base_amount
    }

    pub fn customer_tin(&self) -> Option<&str> {
        self.customer_tin.as_deref()
    }
}

/// Structural checks applied to every submission.
///
/// Checks run in order: identifier, amount, customer TIN. The first failure
/// is reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestValidator {
    min_tin_length: usize,
    schedule: LevySchedule,
}

impl RequestValidator {
    pub fn new(min_tin_length: usize) -> Self {
        Self {
            min_tin_length,
            schedule: LevySchedule::default(),
        }
    }

    /// Check amounts against `schedule`; must match the ledger's schedule.
    pub fn with_schedule(mut self, schedule: LevySchedule) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn min_tin_length(&self) -> usize {
        self.min_tin_length
    }

    pub fn validate(&self, request: &InvoiceRequest) -> Result<ValidatedInvoice, ValidationError> {
        if request.invoice_id.is_empty() {
            return Err(ValidationError::MissingIdentifier);
        }

        if request.base_amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidAmount);
        }

        // The total must stay representable once levies are added.
        if self.schedule.apply(request.base_amount).is_none() {
            return Err(ValidationError::InvalidAmount);
        }

        // An empty TIN means the customer is unregistered.
        let customer_tin = request.customer_tin();
        if let Some(tin) = customer_tin {
            if tin.chars().count() < self.min_tin_length {
                return Err(ValidationError::InvalidTaxId);
            }
        }

        Ok(ValidatedInvoice {
            invoice_id: request.invoice_id.clone(),
            base_amount: request.base_amount,
            customer_tin: customer_tin.map(str::to_owned),
        })
    }
}

impl Default for RequestValidator {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_TIN_LENGTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn request(id: &str, amount: Decimal) -> InvoiceRequest {
        InvoiceRequest::new(id, amount)
    }

    #[test]
    fn valid_request_passes() {
        let validated = RequestValidator::default()
            .validate(&request("INV-1", dec!(100)).with_customer_tin("C0012345678"))
            .unwrap();
        assert_eq!(validated.invoice_id(), "INV-1");
        assert_eq!(validated.base_amount(), dec!(100));
        assert_eq!(validated.customer_tin(), Some("C0012345678"));
    }

    #[test]
    fn empty_identifier_is_rejected() {
        let err = RequestValidator::default()
            .validate(&request("", dec!(100)))
            .unwrap_err();
        assert_eq!(err, ValidationError::MissingIdentifier);
        assert_eq!(err.to_string(), "missing local invoice reference");
    }

    #[test]
    fn zero_and_negative_amounts_are_rejected() {
        let validator = RequestValidator::default();
        for amount in [dec!(0), dec!(-0.01), dec!(-100)] {
            assert_eq!(
                validator.validate(&request("INV-1", amount)),
                Err(ValidationError::InvalidAmount)
            );
        }
    }

    #[test]
    fn amounts_whose_total_overflows_are_rejected() {
        let validator = RequestValidator::default();
        for amount in [dec!(70000000000000000000000000000), Decimal::MAX] {
            assert_eq!(
                validator.validate(&request("INV-1", amount)),
                Err(ValidationError::InvalidAmount)
            );
        }
        assert!(validator
            .validate(&request("INV-1", dec!(60000000000000000000000000000)))
            .is_ok());
    }

    #[test]
    fn amount_limit_follows_the_schedule() {
        let heavier = LevySchedule {
            vat_rate: dec!(1),
            ..LevySchedule::STANDARD
        };
        let validator = RequestValidator::default().with_schedule(heavier);
        assert_eq!(
            validator.validate(&request("INV-1", dec!(60000000000000000000000000000))),
            Err(ValidationError::InvalidAmount)
        );
    }

    #[test]
    fn identifier_is_checked_before_amount() {
        assert_eq!(
            RequestValidator::default().validate(&request("", dec!(0))),
            Err(ValidationError::MissingIdentifier)
        );
    }

    #[test]
    fn short_tin_is_rejected() {
        let validator = RequestValidator::default();
        for len in 1..DEFAULT_MIN_TIN_LENGTH {
            let tin = "9".repeat(len);
            assert_eq!(
                validator.validate(&request("INV-1", dec!(1)).with_customer_tin(tin)),
                Err(ValidationError::InvalidTaxId),
                "tin of length {len} should be rejected"
            );
        }
    }

    #[test]
    fn empty_or_absent_tin_is_accepted() {
        let validator = RequestValidator::default();
        let absent = validator.validate(&request("INV-1", dec!(1))).unwrap();
        assert_eq!(absent.customer_tin(), None);
        let empty = validator
            .validate(&request("INV-1", dec!(1)).with_customer_tin(""))
            .unwrap();
        assert_eq!(empty.customer_tin(), None);
    }

    #[test]
    fn tin_length_counts_characters() {
        let validator = RequestValidator::default();
        assert!(validator
            .validate(&request("INV-1", dec!(1)).with_customer_tin("ÉÉÉÉÉÉÉÉÉÉÉ"))
            .is_ok());
    }

    #[test]
    fn custom_minimum_tin_length() {
        let validator = RequestValidator::new(5);
        assert_eq!(validator.min_tin_length(), 5);
        assert!(validator
            .validate(&request("INV-1", dec!(1)).with_customer_tin("12345"))
            .is_ok());
        assert_eq!(
            validator.validate(&request("INV-1", dec!(1)).with_customer_tin("1234")),
            Err(ValidationError::InvalidTaxId)
        );
    }
}
