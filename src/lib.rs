#![doc(test(attr(deny(warnings))))]

//! Budgety tracks incomes and expenses for the current month, keeping totals,
//! the net budget, and each expense's share of income up to date.

pub mod cli;
pub mod config;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod session;
pub mod utils;

/// Initializes global tracing with an optional filter directive.
pub fn init(directive: Option<&str>) {
    utils::init_tracing(directive);
    tracing::debug!("Budgety tracing initialized.");
}
