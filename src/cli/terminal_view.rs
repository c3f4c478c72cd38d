//! Text rendering of the budget screen, driven through [`ViewPort`].

use std::collections::HashSet;
use std::fmt::Write as _;

use chrono::Month;
use colored::Colorize;

use crate::{
    currency::{format_amount, format_budget, format_percentage, UNDEFINED_PERCENTAGE},
    ledger::{AggregateState, Entry, EntryKind, Percentage},
    session::{HandlerKind, InputSnapshot, RowId, ViewPort},
};

const DESCRIPTION_WIDTH: usize = 24;
const VALUE_WIDTH: usize = 16;

/// One rendered entry line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    pub row: RowId,
    pub description: String,
    pub value: String,
    /// Only expense rows carry a percentage label.
    pub percentage: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Description,
    Value,
}

/// The add-entry form as currently filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputForm {
    pub kind: EntryKind,
    pub description: String,
    pub raw_value: String,
    pub focus: FormField,
    pub expense_styling: bool,
}

impl Default for InputForm {
    fn default() -> Self {
        Self {
            kind: EntryKind::Income,
            description: String::new(),
            raw_value: String::new(),
            focus: FormField::Description,
            expense_styling: false,
        }
    }
}

#[derive(Debug, Default)]
pub struct TerminalView {
    month_label: String,
    budget_label: String,
    income_label: String,
    expense_label: String,
    percentage_label: String,
    incomes: Vec<RenderedRow>,
    expenses: Vec<RenderedRow>,
    form: InputForm,
    handlers: HashSet<HandlerKind>,
}

impl TerminalView {
    pub fn new() -> Self {
        Self {
            percentage_label: UNDEFINED_PERCENTAGE.to_string(),
            ..Self::default()
        }
    }

    pub fn accepts(&self, kind: HandlerKind) -> bool {
        self.handlers.contains(&kind)
    }

    pub fn form(&self) -> &InputForm {
        &self.form
    }

    /// Selects the form's entry kind. Returns whether it changed.
    pub fn select_kind(&mut self, kind: EntryKind) -> bool {
        let changed = self.form.kind != kind;
        self.form.kind = kind;
        changed
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.form.description = description.into();
        self.form.focus = FormField::Description;
    }

    pub fn set_raw_value(&mut self, raw_value: impl Into<String>) {
        self.form.raw_value = raw_value.into();
        self.form.focus = FormField::Value;
    }

    pub fn month_label(&self) -> &str {
        &self.month_label
    }

    pub fn budget_label(&self) -> &str {
        &self.budget_label
    }

    pub fn income_label(&self) -> &str {
        &self.income_label
    }

    pub fn expense_label(&self) -> &str {
        &self.expense_label
    }

    pub fn percentage_label(&self) -> &str {
        &self.percentage_label
    }

    pub fn rows(&self, kind: EntryKind) -> &[RenderedRow] {
        match kind {
            EntryKind::Income => &self.incomes,
            EntryKind::Expense => &self.expenses,
        }
    }

    /// Draws the whole screen: header totals, both lists, then the form.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let title = if self.month_label.is_empty() {
            "Available Budget".to_string()
        } else {
            format!("Available Budget in {}", self.month_label)
        };
        let _ = writeln!(out, "{}", format!("=== {} ===", title).bold());
        let _ = writeln!(out, "  {}", self.budget_label.bold());
        let _ = writeln!(
            out,
            "  {:<10}{}",
            "Income",
            self.income_label.green()
        );
        let _ = writeln!(
            out,
            "  {:<10}{}  {}",
            "Expenses",
            self.expense_label.red(),
            self.percentage_label
        );

        self.render_list(&mut out, "INCOME", &self.incomes);
        self.render_list(&mut out, "EXPENSES", &self.expenses);

        let focus = match self.form.focus {
            FormField::Description => "description",
            FormField::Value => "value",
        };
        let form = format!(
            "[{}] description: \"{}\"  value: \"{}\"  (focus: {})",
            self.form.kind.tag(),
            self.form.description,
            self.form.raw_value,
            focus
        );
        out.push('\n');
        if self.form.expense_styling {
            let _ = writeln!(out, "{}", form.red());
        } else {
            let _ = writeln!(out, "{}", form.blue());
        }
        out
    }

    fn render_list(&self, out: &mut String, heading: &str, rows: &[RenderedRow]) {
        let _ = writeln!(out, "\n{}", heading.bold());
        if rows.is_empty() {
            let _ = writeln!(out, "  (none)");
            return;
        }
        for row in rows {
            let id = row.row.to_string();
            let value = format!("{:>width$}", row.value, width = VALUE_WIDTH);
            let value = match row.row.kind {
                EntryKind::Income => value.green(),
                EntryKind::Expense => value.red(),
            };
            let _ = write!(
                out,
                "  {:<7}{:<width$}{}",
                id,
                row.description,
                value,
                width = DESCRIPTION_WIDTH
            );
            if let Some(percentage) = &row.percentage {
                let _ = write!(out, "  {}", percentage);
            }
            out.push('\n');
        }
    }
}

impl ViewPort for TerminalView {
    fn read_input(&self) -> InputSnapshot {
        InputSnapshot {
            kind: self.form.kind,
            description: self.form.description.clone(),
            raw_value: self.form.raw_value.clone(),
        }
    }

    fn append_row(&mut self, entry: &Entry) {
        let row = RenderedRow {
            row: RowId::of(entry),
            description: entry.description().to_string(),
            value: format_amount(entry.value(), entry.kind()),
            percentage: match entry {
                Entry::Income(_) => None,
                Entry::Expense(_) => Some(UNDEFINED_PERCENTAGE.to_string()),
            },
        };
        match entry.kind() {
            EntryKind::Income => self.incomes.push(row),
            EntryKind::Expense => self.expenses.push(row),
        }
    }

    fn remove_row(&mut self, row: RowId) {
        let rows = match row.kind {
            EntryKind::Income => &mut self.incomes,
            EntryKind::Expense => &mut self.expenses,
        };
        rows.retain(|rendered| rendered.row != row);
    }

    fn clear_input_fields(&mut self) {
        self.form.description.clear();
        self.form.raw_value.clear();
        self.form.focus = FormField::Description;
    }

    fn render_aggregates(&mut self, state: &AggregateState) {
        self.budget_label = format_budget(state.budget);
        self.income_label = format_amount(state.total_income, EntryKind::Income);
        self.expense_label = format_amount(state.total_expense, EntryKind::Expense);
        self.percentage_label = format_percentage(state.overall_expense_percentage);
    }

    fn render_expense_percentages(&mut self, percentages: &[Percentage]) {
        for (row, percentage) in self.expenses.iter_mut().zip(percentages) {
            row.percentage = Some(format_percentage(*percentage));
        }
    }

    fn render_current_month_year(&mut self, month: Month, year: i32) {
        self.month_label = format!("{} {}", month.name(), year);
    }

    fn toggle_input_type_styling(&mut self) {
        self.form.expense_styling = !self.form.expense_styling;
    }

    fn register_handler(&mut self, kind: HandlerKind) {
        self.handlers.insert(kind);
    }
}
