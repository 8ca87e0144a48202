//! Probability-gated balance prediction for future dates.

use chrono::NaiveDate;

use moneyflow_domain::{FlowEntry, Ledger};

use crate::{
    rates::{PredictionRate, PredictionRates},
    time::Clock,
    CoreError,
};

/// Predicts the net balance movement up to a future date.
pub struct ForecastService;

impl ForecastService {
    /// Sums every inflow and outflow that carries a probability and is due
    /// strictly before `date`, then scales the net by the configured factor
    /// for `rate`. Rejects dates at or before the clock's today.
    ///
    /// A flow's probability gates inclusion only; its magnitude is not used
    /// as a weight. The single confidence factor scales the whole net sum.
    pub fn balance_prediction(
        ledger: &Ledger,
        date: NaiveDate,
        rate: PredictionRate,
        rates: &PredictionRates,
        clock: &dyn Clock,
    ) -> Result<f64, CoreError> {
        if date <= clock.today() {
            return Err(CoreError::PastDate(date));
        }
        let factor = rates
            .factor(rate)
            .ok_or(CoreError::InvalidPredictionRate(rate))?;

        let inflows: i64 = ledger
            .revenues
            .iter()
            .flat_map(|revenue| revenue.inflows())
            .filter(|inflow| inflow.is_predictive() && inflow.date() < date)
            .map(|inflow| inflow.amount())
            .sum();
        let outflows: i64 = ledger
            .expenses
            .iter()
            .flat_map(|expense| expense.outflows())
            .filter(|outflow| outflow.is_predictive() && outflow.date() < date)
            .map(|outflow| outflow.amount())
            .sum();
        tracing::debug!(%date, %rate, inflows, outflows, "balance prediction computed");
        Ok((inflows - outflows) as f64 * factor)
    }
}
