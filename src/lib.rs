#![doc(test(attr(deny(warnings))))]

//! Insurance Core offers the ledger primitives behind a minimal insurance
//! book: premium collection, cash-value loans, and penalties per customer.

pub mod errors;
pub mod ledger;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Insurance Core tracing initialized.");
    });
}
