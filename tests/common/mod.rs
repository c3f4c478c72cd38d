#![allow(dead_code)]

use budgety::{
    ledger::{AggregateState, Entry, EntryKind, Percentage},
    session::{Clock, HandlerKind, InputSnapshot, RowId, ViewPort},
};
use chrono::{Month, NaiveDate};

/// Every call the session made on the view, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewCall {
    AppendRow(RowId),
    RemoveRow(RowId),
    ClearInput,
    Aggregates(AggregateState),
    Percentages(Vec<Percentage>),
    MonthYear(Month, i32),
    ToggleStyling,
    Register(HandlerKind),
}

/// View double that serves a scripted form and records what it is told to render.
#[derive(Debug)]
pub struct RecordingView {
    pub input: InputSnapshot,
    pub calls: Vec<ViewCall>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self {
            input: InputSnapshot {
                kind: EntryKind::Income,
                description: String::new(),
                raw_value: String::new(),
            },
            calls: Vec::new(),
        }
    }

    pub fn fill(&mut self, kind: EntryKind, description: &str, raw_value: &str) {
        self.input = InputSnapshot {
            kind,
            description: description.to_string(),
            raw_value: raw_value.to_string(),
        };
    }

    pub fn take_calls(&mut self) -> Vec<ViewCall> {
        std::mem::take(&mut self.calls)
    }
}

impl ViewPort for RecordingView {
    fn read_input(&self) -> InputSnapshot {
        self.input.clone()
    }

    fn append_row(&mut self, entry: &Entry) {
        self.calls.push(ViewCall::AppendRow(RowId::of(entry)));
    }

    fn remove_row(&mut self, row: RowId) {
        self.calls.push(ViewCall::RemoveRow(row));
    }

    fn clear_input_fields(&mut self) {
        self.input.description.clear();
        self.input.raw_value.clear();
        self.calls.push(ViewCall::ClearInput);
    }

    fn render_aggregates(&mut self, state: &AggregateState) {
        self.calls.push(ViewCall::Aggregates(*state));
    }

    fn render_expense_percentages(&mut self, percentages: &[Percentage]) {
        self.calls.push(ViewCall::Percentages(percentages.to_vec()));
    }

    fn render_current_month_year(&mut self, month: Month, year: i32) {
        self.calls.push(ViewCall::MonthYear(month, year));
    }

    fn toggle_input_type_styling(&mut self) {
        self.calls.push(ViewCall::ToggleStyling);
    }

    fn register_handler(&mut self, kind: HandlerKind) {
        self.calls.push(ViewCall::Register(kind));
    }
}

pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

pub fn march_2025() -> FixedClock {
    FixedClock(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap())
}
