//! Shared traits, date primitives, and configuration values for money items.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Exposes a stable identifier for entities stored in the ledger.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Converts an entity into a user-facing display label.
pub trait Displayable {
    fn display_label(&self) -> String;
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// The single effective-date slot of a money item.
///
/// A revenue or expense is dated either by an expected (planned) date or by
/// the date it actually happened (real). Storing both in one tagged value
/// makes the slots structurally exclusive: assigning one kind replaces the
/// other.
pub enum ItemDate {
    Planned(NaiveDate),
    Real(NaiveDate),
}

impl ItemDate {
    /// Returns the calendar date regardless of slot kind.
    pub fn date(&self) -> NaiveDate {
        match self {
            ItemDate::Planned(date) | ItemDate::Real(date) => *date,
        }
    }

    pub fn is_planned(&self) -> bool {
        matches!(self, ItemDate::Planned(_))
    }
}

impl fmt::Display for ItemDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemDate::Planned(date) => write!(f, "planned {date}"),
            ItemDate::Real(date) => write!(f, "real {date}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Raised when a date-dependent query runs before any date was assigned.
pub struct DateNotSet;

impl fmt::Display for DateNotSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("set the item date first (planned or real)")
    }
}

impl std::error::Error for DateNotSet {}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
/// Value-added-tax rate applied when a money item is constructed.
///
/// Built once at startup and passed by reference; never a process global.
pub struct VatRate(pub f64);

impl Default for VatRate {
    fn default() -> Self {
        Self(0.22)
    }
}

/// Common read surface of [`Revenue`](crate::Revenue) and
/// [`Expense`](crate::Expense). The two stay nominally distinct for domain
/// clarity; calculation services work against this trait.
pub trait MoneyItem {
    /// Net value, without VAT.
    fn value(&self) -> f64;

    /// VAT amount fixed at construction.
    fn vat(&self) -> f64;

    /// Value plus VAT, fixed at construction.
    fn total_value(&self) -> f64;

    /// Whether the item recurs every month for VAT purposes.
    fn is_repeating(&self) -> bool;

    /// The effective-date slot, if one was assigned.
    fn item_date(&self) -> Option<ItemDate>;

    /// The assigned calendar date, whichever slot holds it.
    fn effective_date(&self) -> Option<NaiveDate> {
        self.item_date().map(|slot| slot.date())
    }

    /// The 1-12 month in which this item's VAT falls due.
    fn vat_calculation_month(&self) -> Result<u32, DateNotSet> {
        self.effective_date()
            .map(|date| date.month())
            .ok_or(DateNotSet)
    }
}

/// Common read surface of [`Inflow`](crate::Inflow) and
/// [`Outflow`](crate::Outflow).
pub trait FlowEntry {
    /// Amount in minor currency units.
    fn amount(&self) -> i64;

    /// The date the flow is due or happened. Always set at construction.
    fn date(&self) -> NaiveDate;

    /// Payment channel the flow is attributed to.
    fn payment_id(&self) -> Uuid;

    /// Fractional probability in `[0, 1]`, or `None` for a certain,
    /// non-predictive flow.
    fn probability(&self) -> Option<f64>;

    /// Whether the flow takes part in balance predictions.
    fn is_predictive(&self) -> bool {
        self.probability().is_some()
    }
}
