//! moneyflow-core
//!
//! Calculation services for the MoneyFlow ledger: monthly VAT attribution,
//! historical balance, and probability-gated balance prediction.
//! Depends on moneyflow-domain. No CLI, no terminal I/O, no storage.

pub mod balance_service;
pub mod error;
pub mod forecast_service;
pub mod rates;
pub mod time;
pub mod vat_service;

pub use balance_service::*;
pub use error::CoreError;
pub use forecast_service::*;
pub use rates::*;
pub use time::*;
pub use vat_service::*;

#[cfg(test)]
mod tests;
