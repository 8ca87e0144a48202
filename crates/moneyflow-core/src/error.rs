use chrono::NaiveDate;
use thiserror::Error;

use moneyflow_domain::DateNotSet;

use crate::rates::PredictionRate;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("money item has no date: {0}")]
    DateNotSet(#[from] DateNotSet),
    #[error("can't tell the balance for the future date {0}")]
    FutureDate(NaiveDate),
    #[error("can't predict the balance for the past or present date {0}")]
    PastDate(NaiveDate),
    #[error("invalid prediction rate: {0}")]
    InvalidPredictionRate(PredictionRate),
}
