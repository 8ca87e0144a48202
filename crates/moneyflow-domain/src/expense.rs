//! Expense money items and their outflow sub-transactions.
//!
//! Structurally the mirror of [`crate::revenue`]; the two stay separate
//! nominal types so revenue and expense flows cannot be mixed up.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{Displayable, FlowEntry, Identifiable, ItemDate, MoneyItem, VatRate};

/// A priced cost with VAT fixed at construction and a list of dated,
/// payment-attributed outflows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: Uuid,
    value: f64,
    vat: f64,
    total_value: f64,
    pub title: String,
    pub note: String,
    pub category_id: Uuid,
    date: Option<ItemDate>,
    repeating: bool,
    outflows: Vec<Outflow>,
}

impl Expense {
    /// Creates an expense, deriving VAT and total value once. Neither
    /// changes afterwards; there is no value setter.
    pub fn new(
        value: f64,
        title: impl Into<String>,
        note: impl Into<String>,
        category_id: Uuid,
        rate: VatRate,
    ) -> Self {
        let vat = value * rate.0;
        Self {
            id: Uuid::new_v4(),
            value,
            vat,
            total_value: value + vat,
            title: title.into(),
            note: note.into(),
            category_id,
            date: None,
            repeating: false,
            outflows: Vec::new(),
        }
    }

    pub fn with_real_date(mut self, date: NaiveDate) -> Self {
        self.set_real_date(date);
        self
    }

    pub fn with_planned_date(mut self, date: NaiveDate) -> Self {
        self.set_planned_date(date);
        self
    }

    pub fn with_repeating(mut self) -> Self {
        self.set_repeating(true);
        self
    }

    /// Dates the expense by when it actually happened, clearing any planned
    /// date.
    pub fn set_real_date(&mut self, date: NaiveDate) {
        self.date = Some(ItemDate::Real(date));
    }

    /// Dates the expense by when it is expected, clearing any real date.
    pub fn set_planned_date(&mut self, date: NaiveDate) {
        self.date = Some(ItemDate::Planned(date));
    }

    pub fn set_repeating(&mut self, repeating: bool) {
        self.repeating = repeating;
    }

    pub fn real_date(&self) -> Option<NaiveDate> {
        match self.date {
            Some(ItemDate::Real(date)) => Some(date),
            _ => None,
        }
    }

    pub fn planned_date(&self) -> Option<NaiveDate> {
        match self.date {
            Some(ItemDate::Planned(date)) => Some(date),
            _ => None,
        }
    }

    /// Constructs an outflow and registers it in one step, so no outflow can
    /// exist without an owner. Returns the new outflow's id.
    pub fn record_outflow(&mut self, value: i64, date: NaiveDate, payment_id: Uuid) -> Uuid {
        self.add_outflow(Outflow::new(value, date, payment_id))
    }

    /// Appends a pre-built outflow, keeping duplicates.
    pub fn add_outflow(&mut self, outflow: Outflow) -> Uuid {
        let id = outflow.id;
        self.outflows.push(outflow);
        id
    }

    /// Detaches an outflow so it can be re-attached to another expense.
    /// Removes the first entry with the given id.
    pub fn take_outflow(&mut self, id: Uuid) -> Option<Outflow> {
        let index = self.outflows.iter().position(|outflow| outflow.id == id)?;
        Some(self.outflows.remove(index))
    }

    pub fn outflows(&self) -> &[Outflow] {
        &self.outflows
    }

    pub fn outflow_mut(&mut self, id: Uuid) -> Option<&mut Outflow> {
        self.outflows.iter_mut().find(|outflow| outflow.id == id)
    }
}

impl MoneyItem for Expense {
    fn value(&self) -> f64 {
        self.value
    }

    fn vat(&self) -> f64 {
        self.vat
    }

    fn total_value(&self) -> f64 {
        self.total_value
    }

    fn is_repeating(&self) -> bool {
        self.repeating
    }

    fn item_date(&self) -> Option<ItemDate> {
        self.date
    }
}

impl Identifiable for Expense {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Expense {
    fn display_label(&self) -> String {
        format!("{} ({:.2})", self.title, self.total_value)
    }
}

/// A dated, payment-attributed portion of an expense, in minor currency
/// units. Lives inside exactly one [`Expense`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Outflow {
    pub id: Uuid,
    value: i64,
    date: NaiveDate,
    payment_id: Uuid,
    probability: Option<f64>,
}

impl Outflow {
    pub fn new(value: i64, date: NaiveDate, payment_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            value,
            date,
            payment_id,
            probability: None,
        }
    }

    /// Marks the outflow as an expectation with the given fraction in
    /// `[0, 1]`, or as certain (non-predictive) with `None`.
    pub fn set_probability(&mut self, probability: Option<f64>) {
        self.probability = probability;
    }
}

impl FlowEntry for Outflow {
    fn amount(&self) -> i64 {
        self.value
    }

    fn date(&self) -> NaiveDate {
        self.date
    }

    fn payment_id(&self) -> Uuid {
        self.payment_id
    }

    fn probability(&self) -> Option<f64> {
        self.probability
    }
}

impl Identifiable for Outflow {
    fn id(&self) -> Uuid {
        self.id
    }
}
