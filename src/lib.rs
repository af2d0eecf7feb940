#![doc(test(attr(deny(warnings))))]

//! Gastos Core tracks a family's monthly fixed expenses and card purchases,
//! aggregates them against income, and projects the accumulated balance over
//! the next twelve months. Results are persisted to a per-month spreadsheet
//! workbook and rendered as charts.

pub mod cli;
pub mod config;
pub mod errors;
pub mod ledger;
pub mod projection;
pub mod render;
pub mod report;
pub mod storage;
pub mod summary;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Gastos Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
