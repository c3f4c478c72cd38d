//! Ledger model: income and expense entries plus their derived totals.

pub mod entry;
#[allow(clippy::module_inception)]
pub mod ledger;

pub use entry::{Entry, EntryId, EntryKind, Expense, Income, ParseKindError, Percentage};
pub use ledger::{AggregateState, Ledger};
