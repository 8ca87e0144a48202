//! moneyflow-domain
//!
//! Pure domain models (Category, Payment, Revenue, Expense, Inflow, Outflow,
//! Ledger). No I/O, no services. Only data types, traits, and core enums.

pub mod category;
pub mod common;
pub mod expense;
pub mod ledger;
pub mod payment;
pub mod revenue;

pub use category::*;
pub use common::*;
pub use expense::*;
pub use ledger::*;
pub use payment::*;
pub use revenue::*;
