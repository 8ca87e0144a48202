//! Revenue money items and their inflow sub-transactions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{Displayable, FlowEntry, Identifiable, ItemDate, MoneyItem, VatRate};

/// A priced piece of income with VAT fixed at construction and a list of
/// dated, payment-attributed inflows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Revenue {
    pub id: Uuid,
    value: f64,
    vat: f64,
    total_value: f64,
    pub title: String,
    pub note: String,
    pub category_id: Uuid,
    date: Option<ItemDate>,
    repeating: bool,
    inflows: Vec<Inflow>,
}

impl Revenue {
    /// Creates a revenue, deriving VAT and total value once. Neither changes
    /// afterwards; there is no value setter.
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
            inflows: Vec::new(),
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

    /// Dates the revenue by when it actually happened, clearing any planned
    /// date.
    pub fn set_real_date(&mut self, date: NaiveDate) {
        self.date = Some(ItemDate::Real(date));
    }

    /// Dates the revenue by when it is expected, clearing any real date.
    pub fn set_planned_date(&mut self, date: NaiveDate) {
        self.date = Some(ItemDate::Planned(date));
    }

    pub fn set_repeating(&mut self, repeating: bool) {
        self.repeating = repeating;
    }

    /// The real date, when that slot holds the effective date.
    pub fn real_date(&self) -> Option<NaiveDate> {
        match self.date {
            Some(ItemDate::Real(date)) => Some(date),
            _ => None,
        }
    }

    /// The planned date, when that slot holds the effective date.
    pub fn planned_date(&self) -> Option<NaiveDate> {
        match self.date {
            Some(ItemDate::Planned(date)) => Some(date),
            _ => None,
        }
    }

    /// Constructs an inflow and registers it in one step, so no inflow can
    /// exist without an owner. Returns the new inflow's id.
    pub fn record_inflow(&mut self, value: i64, date: NaiveDate, payment_id: Uuid) -> Uuid {
        self.add_inflow(Inflow::new(value, date, payment_id))
    }

    /// Appends a pre-built inflow. Duplicates are kept; splitting a revenue
    /// across repeated attachments is legitimate bookkeeping.
    pub fn add_inflow(&mut self, inflow: Inflow) -> Uuid {
        let id = inflow.id;
        self.inflows.push(inflow);
        id
    }

    /// Detaches an inflow so it can be re-attached to another revenue.
    /// Removes the first entry with the given id.
    pub fn take_inflow(&mut self, id: Uuid) -> Option<Inflow> {
        let index = self.inflows.iter().position(|inflow| inflow.id == id)?;
        Some(self.inflows.remove(index))
    }

    pub fn inflows(&self) -> &[Inflow] {
        &self.inflows
    }

    pub fn inflow_mut(&mut self, id: Uuid) -> Option<&mut Inflow> {
        self.inflows.iter_mut().find(|inflow| inflow.id == id)
    }
}

impl MoneyItem for Revenue {
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

impl Identifiable for Revenue {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Revenue {
    fn display_label(&self) -> String {
        format!("{} ({:.2})", self.title, self.total_value)
    }
}

/// A dated, payment-attributed portion of a revenue, in minor currency
/// units. Lives inside exactly one [`Revenue`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Inflow {
    pub id: Uuid,
    value: i64,
    date: NaiveDate,
    payment_id: Uuid,
    probability: Option<f64>,
}

impl Inflow {
    pub fn new(value: i64, date: NaiveDate, payment_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            value,
            date,
            payment_id,
            probability: None,
        }
    }

    /// Marks the inflow as an expectation with the given fraction in
    /// `[0, 1]`, or as certain (non-predictive) with `None`.
    pub fn set_probability(&mut self, probability: Option<f64>) {
        self.probability = probability;
    }
}

impl FlowEntry for Inflow {
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

impl Identifiable for Inflow {
    fn id(&self) -> Uuid {
        self.id
    }
}
