//! Monthly VAT attribution over the ledger.

use chrono::{Datelike, NaiveDate};

use moneyflow_domain::{DateNotSet, Ledger, MoneyItem};

use crate::CoreError;

/// Computes how much VAT a month owes or reclaims.
pub struct VatService;

impl VatService {
    /// Returns the VAT a single item contributes to the month of `date`.
    ///
    /// An item dated in another month contributes nothing. A non-repeating
    /// item also contributes nothing when its year differs from the query
    /// year; a repeating item accrues in its month every year.
    pub fn item_vat(item: &impl MoneyItem, date: NaiveDate) -> Result<f64, CoreError> {
        if item.vat_calculation_month()? != date.month() {
            return Ok(0.0);
        }
        let item_date = item.effective_date().ok_or(DateNotSet)?;
        if !item.is_repeating() && item_date.year() != date.year() {
            return Ok(0.0);
        }
        Ok(item.vat())
    }

    /// Net VAT payable (positive) or receivable (negative) for the month of
    /// `date`: revenue VAT minus expense VAT.
    pub fn monthly_vat(ledger: &Ledger, date: NaiveDate) -> Result<f64, CoreError> {
        let mut revenues = 0.0;
        for revenue in &ledger.revenues {
            revenues += Self::item_vat(revenue, date)?;
        }
        let mut expenses = 0.0;
        for expense in &ledger.expenses {
            expenses += Self::item_vat(expense, date)?;
        }
        tracing::debug!(%date, revenues, expenses, "monthly VAT computed");
        Ok(revenues - expenses)
    }
}
