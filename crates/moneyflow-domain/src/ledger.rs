//! The ledger that aggregates revenues and expenses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{expense::Expense, revenue::Revenue};

/// Owns the full in-memory set of revenues and expenses. Collections are
/// append-only; no removal operation exists. Every calculation query walks
/// the live object graph, nothing is cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    pub id: Uuid,
    #[serde(default)]
    pub revenues: Vec<Revenue>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Ledger {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            revenues: Vec::new(),
            expenses: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn add_revenue(&mut self, revenue: Revenue) -> Uuid {
        let id = revenue.id;
        self.revenues.push(revenue);
        self.touch();
        id
    }

    pub fn add_expense(&mut self, expense: Expense) -> Uuid {
        let id = expense.id;
        self.expenses.push(expense);
        self.touch();
        id
    }

    pub fn revenue(&self, id: Uuid) -> Option<&Revenue> {
        self.revenues.iter().find(|revenue| revenue.id == id)
    }

    pub fn revenue_mut(&mut self, id: Uuid) -> Option<&mut Revenue> {
        self.revenues.iter_mut().find(|revenue| revenue.id == id)
    }

    pub fn expense(&self, id: Uuid) -> Option<&Expense> {
        self.expenses.iter().find(|expense| expense.id == id)
    }

    pub fn expense_mut(&mut self, id: Uuid) -> Option<&mut Expense> {
        self.expenses.iter_mut().find(|expense| expense.id == id)
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
