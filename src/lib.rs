#![doc(test(attr(deny(warnings))))]

//! MoneyFlow offers a small in-memory cash-flow ledger: revenues and
//! expenses with VAT fixed at creation, their dated inflows and outflows,
//! monthly VAT attribution, historical balances, and probability-gated
//! balance predictions.

mod utils;

pub use moneyflow_core::*;
pub use moneyflow_domain::*;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("MoneyFlow tracing initialized.");
    });
}
