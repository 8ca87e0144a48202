//! Prediction-rate selectors and their configured discount factors.

use std::collections::BTreeMap;
use std::fmt;

/// Confidence level applied to a balance prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum PredictionRate {
    Optimistic,
    #[default]
    Realistic,
    Pessimistic,
}

impl fmt::Display for PredictionRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PredictionRate::Optimistic => "Optimistic",
            PredictionRate::Realistic => "Realistic",
            PredictionRate::Pessimistic => "Pessimistic",
        };
        f.write_str(label)
    }
}

/// Immutable table of prediction factors, built once at startup and passed
/// by reference to the forecast service. A selector without an entry is an
/// invalid rate.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionRates {
    factors: BTreeMap<PredictionRate, f64>,
}

impl PredictionRates {
    /// Returns a table with no configured factors.
    pub fn empty() -> Self {
        Self {
            factors: BTreeMap::new(),
        }
    }

    /// Configures (or replaces) the factor for a selector.
    pub fn with_factor(mut self, rate: PredictionRate, factor: f64) -> Self {
        self.factors.insert(rate, factor);
        self
    }

    /// Returns the configured factor for a selector, if any.
    pub fn factor(&self, rate: PredictionRate) -> Option<f64> {
        self.factors.get(&rate).copied()
    }
}

impl Default for PredictionRates {
    fn default() -> Self {
        Self::empty()
            .with_factor(PredictionRate::Optimistic, 0.85)
            .with_factor(PredictionRate::Realistic, 0.70)
            .with_factor(PredictionRate::Pessimistic, 0.60)
    }
}
