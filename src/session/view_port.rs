use std::{fmt, str::FromStr};

use chrono::Month;
use serde::{Deserialize, Serialize};

use crate::ledger::{AggregateState, Entry, EntryId, EntryKind, Percentage};

/// Raw contents of the entry form, exactly as the user left them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSnapshot {
    pub kind: EntryKind,
    pub description: String,
    pub raw_value: String,
}

/// Identifies a rendered entry row. Encoded as `"<kind>-<id>"`, e.g. `exp-3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RowId {
    pub kind: EntryKind,
    pub id: EntryId,
}

impl RowId {
    pub fn new(kind: EntryKind, id: EntryId) -> Self {
        Self { kind, id }
    }

    pub fn of(entry: &Entry) -> Self {
        Self::new(entry.kind(), entry.id())
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.kind.tag(), self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRowIdError(pub String);

impl fmt::Display for ParseRowIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}` is not a row id like inc-0 or exp-2", self.0)
    }
}

impl std::error::Error for ParseRowIdError {}

impl FromStr for RowId {
    type Err = ParseRowIdError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseRowIdError(raw.to_string());
        let (kind, id) = raw.split_once('-').ok_or_else(invalid)?;
        let kind = match kind {
            "inc" => EntryKind::Income,
            "exp" => EntryKind::Expense,
            _ => return Err(invalid()),
        };
        let id = id.parse::<EntryId>().map_err(|_| invalid())?;
        Ok(Self { kind, id })
    }
}

/// Events a view can raise toward the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    AddRequested,
    /// Carries the id of the row the event was traced to, if any.
    DeleteRequested { target: Option<String> },
    TypeChanged,
}

impl UiEvent {
    pub fn handler(&self) -> HandlerKind {
        match self {
            UiEvent::AddRequested => HandlerKind::Add,
            UiEvent::DeleteRequested { .. } => HandlerKind::Delete,
            UiEvent::TypeChanged => HandlerKind::TypeChanged,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandlerKind {
    Add,
    Delete,
    TypeChanged,
}

impl HandlerKind {
    pub const ALL: [HandlerKind; 3] = [
        HandlerKind::Add,
        HandlerKind::Delete,
        HandlerKind::TypeChanged,
    ];
}

/// Presentation boundary driven by the session.
pub trait ViewPort {
    fn read_input(&self) -> InputSnapshot;
    fn append_row(&mut self, entry: &Entry);
    fn remove_row(&mut self, row: RowId);
    /// Empties the description and value fields and focuses the description.
    fn clear_input_fields(&mut self);
    fn render_aggregates(&mut self, state: &AggregateState);
    fn render_expense_percentages(&mut self, percentages: &[Percentage]);
    fn render_current_month_year(&mut self, month: Month, year: i32);
    fn toggle_input_type_styling(&mut self);
    /// Starts delivering events of `kind` to the session.
    fn register_handler(&mut self, kind: HandlerKind);
}
