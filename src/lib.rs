#![doc(test(attr(deny(warnings))))]

//! Budget Tracker records income and expense transactions in an in-memory
//! ledger and derives the filtered table, the summary totals and the spending
//! breakdown from it.
//!
//! ```
//! use budget_tracker::core::services::{SummaryService, TransactionService};
//! use budget_tracker::domain::TransactionDraft;
//! use budget_tracker::ledger::Ledger;
//!
//! let mut ledger = Ledger::new();
//! let draft = TransactionDraft::new()
//!     .title("Paycheck")
//!     .amount("2000")
//!     .category("Income")
//!     .kind("Income")
//!     .date("2024-05-01");
//! TransactionService::add(&mut ledger, &draft).unwrap();
//!
//! let summary = SummaryService::current_totals(&ledger);
//! assert_eq!(summary.total_income, 2000.0);
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod ledger;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Budget Tracker tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
