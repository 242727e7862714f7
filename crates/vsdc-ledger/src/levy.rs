use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use vsdc_types::{round_currency, LevyBreakdown};

/// Statutory levy rates applied to an invoice's base amount.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevySchedule {
    /// Value-added tax.
    pub vat_rate: Decimal,
    /// National Health Insurance Levy.
    pub nhil_rate: Decimal,
    /// Ghana Education Trust Fund levy.
    pub getfund_rate: Decimal,
}

impl LevySchedule {
    pub const STANDARD: Self = Self {
        vat_rate: dec!(0.15),
        nhil_rate: dec!(0.025),
        getfund_rate: dec!(0.025),
    };

    /// Compute each levy on `base`, rounded to the currency scale, and the
    /// resulting total.
    ///
    /// The total is the base plus the rounded levies, so the parts always
    /// add up to exactly what is reported. Returns `None` when a levy or the
    /// total does not fit in a `Decimal`.
    pub fn apply(&self, base: Decimal) -> Option<LevyBreakdown> {
        let levy = |rate: Decimal| base.checked_mul(rate).map(round_currency);
        let vat_amount = levy(self.vat_rate)?;
        let nhil_amount = levy(self.nhil_rate)?;
        let getfund_amount = levy(self.getfund_rate)?;
        let total_with_tax = base
            .checked_add(vat_amount)?
            .checked_add(nhil_amount)?
            .checked_add(getfund_amount)?;
        Some(LevyBreakdown {
            base_amount: base,
            vat_amount,
            nhil_amount,
            getfund_amount,
            total_with_tax,
        })
    }

    /// Combined rate of all levies.
    pub fn combined_rate(&self) -> Decimal {
        self.vat_rate + self.nhil_rate + self.getfund_rate
    }
}

impl Default for LevySchedule {
    fn default() -> Self {
        Self::STANDARD
    }
}
