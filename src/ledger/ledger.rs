use serde::{Deserialize, Serialize};

use super::entry::{Entry, EntryId, EntryKind, Expense, Income, Percentage};

/// Totals derived from the entry collections.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AggregateState {
    pub total_income: f64,
    pub total_expense: f64,
    pub budget: f64,
    pub overall_expense_percentage: Percentage,
}

/// In-memory record of incomes and expenses for one session.
///
/// Mutations do not refresh the aggregates; callers run
/// [`Ledger::recompute_aggregates`] and then [`Ledger::recompute_percentages`]
/// once they are done mutating.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    incomes: Vec<Income>,
    #[serde(default)]
    expenses: Vec<Expense>,
    #[serde(default)]
    totals: AggregateState,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new entry and returns a copy of it.
    ///
    /// The id is one past the id of the last entry in the target collection, or
    /// zero when that collection is empty. Ids freed by deletions elsewhere in
    /// the collection are not reused.
    pub fn add_entry(
        &mut self,
        kind: EntryKind,
        description: impl Into<String>,
        value: f64,
    ) -> Entry {
        let id = self.next_id(kind);
        let description = description.into();
        match kind {
            EntryKind::Income => {
                let income = Income {
                    id,
                    description,
                    value,
                };
                self.incomes.push(income.clone());
                Entry::Income(income)
            }
            EntryKind::Expense => {
                let expense = Expense {
                    id,
                    description,
                    value,
                    percentage_of_income: Percentage::Undefined,
                };
                self.expenses.push(expense.clone());
                Entry::Expense(expense)
            }
        }
    }

    /// Removes the entry with `id`; unknown ids are ignored.
    pub fn remove_entry(&mut self, kind: EntryKind, id: EntryId) {
        match kind {
            EntryKind::Income => {
                if let Some(index) = self.incomes.iter().position(|income| income.id == id) {
                    self.incomes.remove(index);
                }
            }
            EntryKind::Expense => {
                if let Some(index) = self.expenses.iter().position(|expense| expense.id == id) {
                    self.expenses.remove(index);
                }
            }
        }
    }

    pub fn contains(&self, kind: EntryKind, id: EntryId) -> bool {
        match kind {
            EntryKind::Income => self.incomes.iter().any(|income| income.id == id),
            EntryKind::Expense => self.expenses.iter().any(|expense| expense.id == id),
        }
    }

    pub fn recompute_aggregates(&mut self) {
        let total_income: f64 = self.incomes.iter().map(|income| income.value).sum();
        let total_expense: f64 = self.expenses.iter().map(|expense| expense.value).sum();
        self.totals = AggregateState {
            total_income,
            total_expense,
            budget: total_income - total_expense,
            overall_expense_percentage: Percentage::of(total_expense, total_income),
        };
    }

    /// Refreshes each expense's share of income.
    ///
    /// Reads the income total produced by the last [`Ledger::recompute_aggregates`].
    pub fn recompute_percentages(&mut self) {
        let total_income = self.totals.total_income;
        for expense in &mut self.expenses {
            expense.calc_percentage(total_income);
        }
    }

    pub fn current_aggregates(&self) -> AggregateState {
        self.totals
    }

    pub fn current_expense_percentages(&self) -> Vec<Percentage> {
        self.expenses
            .iter()
            .map(|expense| expense.percentage_of_income)
            .collect()
    }

    pub fn incomes(&self) -> &[Income] {
        &self.incomes
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self, kind: EntryKind) -> usize {
        match kind {
            EntryKind::Income => self.incomes.len(),
            EntryKind::Expense => self.expenses.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.incomes.is_empty() && self.expenses.is_empty()
    }

    fn next_id(&self, kind: EntryKind) -> EntryId {
        let last = match kind {
            EntryKind::Income => self.incomes.last().map(|income| income.id),
            EntryKind::Expense => self.expenses.last().map(|expense| expense.id),
        };
        last.map_or(0, |id| id + 1)
    }
}
