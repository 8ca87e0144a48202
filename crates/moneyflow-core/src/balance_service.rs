//! Historical balance over realized revenues and expenses.

use chrono::{Datelike, NaiveDate};

use moneyflow_domain::{Ledger, MoneyItem};

use crate::{time::Clock, CoreError};

/// Answers "what was the balance as of a past date".
pub struct BalanceService;

impl BalanceService {
    /// Balance as of `as_of`: accrued revenue totals minus accrued expense
    /// totals. Rejects dates after the clock's today.
    ///
    /// Every dated item is multiplied by the number of months elapsed since
    /// its date, including the originating month. The multiplier applies
    /// whether or not the item repeats; the repeat flag only matters to VAT.
    pub fn balance(ledger: &Ledger, as_of: NaiveDate, clock: &dyn Clock) -> Result<f64, CoreError> {
        if as_of > clock.today() {
            return Err(CoreError::FutureDate(as_of));
        }
        let revenues: f64 = ledger
            .revenues
            .iter()
            .map(|revenue| accrued_total(revenue, as_of))
            .sum();
        let expenses: f64 = ledger
            .expenses
            .iter()
            .map(|expense| accrued_total(expense, as_of))
            .sum();
        tracing::debug!(%as_of, revenues, expenses, "balance computed");
        Ok(revenues - expenses)
    }
}

/// Total value scaled by the elapsed-month count, or 0 for items that are
/// undated or dated after `as_of`.
fn accrued_total(item: &impl MoneyItem, as_of: NaiveDate) -> f64 {
    match item.effective_date() {
        Some(date) if date <= as_of => item.total_value() * months_between(date, as_of) as f64,
        _ => 0.0,
    }
}

/// Whole calendar months from `start` to `end`, plus one for the month the
/// item originated in. Same-month dates yield 1. Callers guarantee
/// `start <= end`.
fn months_between(start: NaiveDate, end: NaiveDate) -> i64 {
    let mut months = i64::from(end.year() - start.year()) * 12
        + (i64::from(end.month()) - i64::from(start.month()));
    if end.day() < start.day() {
        months -= 1;
    }
    months + 1
}
