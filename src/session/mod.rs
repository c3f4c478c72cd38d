//! Session controller: turns view events into ledger updates and pushes the
//! results back to the view.

pub mod view_port;

use chrono::{Datelike, Month, NaiveDate};
use tracing::{debug, info};

use crate::ledger::{AggregateState, EntryKind, Ledger};

pub use view_port::{HandlerKind, InputSnapshot, ParseRowIdError, RowId, UiEvent, ViewPort};

/// Source of the current date shown in the view header.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Outcome of dispatching one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Applied,
    Ignored,
}

/// Validated add request.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEntry {
    pub kind: EntryKind,
    pub description: String,
    pub value: f64,
}

impl NewEntry {
    /// Accepts a non-empty description with a finite, positive value.
    pub fn from_input(input: &InputSnapshot) -> Option<Self> {
        if input.description.is_empty() {
            return None;
        }
        // Whole-field parse: numeric prefixes such as "12abc" or "1,000" are rejected.
        let value = input.raw_value.trim().parse::<f64>().ok()?;
        if !value.is_finite() || value <= 0.0 {
            return None;
        }
        Some(Self {
            kind: input.kind,
            description: input.description.clone(),
            value,
        })
    }
}

/// Owns the ledger and the view for one run of the application.
pub struct Session<V: ViewPort> {
    ledger: Ledger,
    view: V,
}

impl<V: ViewPort> Session<V> {
    pub fn new(view: V) -> Self {
        Self {
            ledger: Ledger::new(),
            view,
        }
    }

    /// Renders the header date and zeroed totals, then subscribes to view events.
    pub fn start(&mut self, clock: &dyn Clock) {
        let today = clock.today();
        if let Some(month) = u8::try_from(today.month())
            .ok()
            .and_then(|number| Month::try_from(number).ok())
        {
            self.view.render_current_month_year(month, today.year());
        }
        self.view.render_aggregates(&AggregateState::default());
        for kind in HandlerKind::ALL {
            self.view.register_handler(kind);
        }
        info!(date = %today, "session started");
    }

    pub fn dispatch(&mut self, event: UiEvent) -> Dispatch {
        match event {
            UiEvent::AddRequested => self.add_entry(),
            UiEvent::DeleteRequested { target } => self.delete_entry(target.as_deref()),
            UiEvent::TypeChanged => {
                self.view.toggle_input_type_styling();
                Dispatch::Applied
            }
        }
    }

    pub fn add_entry(&mut self) -> Dispatch {
        let input = self.view.read_input();
        let Some(request) = NewEntry::from_input(&input) else {
            debug!(?input, "add rejected");
            return Dispatch::Ignored;
        };

        let entry = self
            .ledger
            .add_entry(request.kind, request.description, request.value);
        debug!(row = %RowId::of(&entry), value = entry.value(), "entry added");
        self.view.append_row(&entry);
        self.view.clear_input_fields();
        self.update_cycle();
        Dispatch::Applied
    }

    /// Deletes the entry behind `target`, a row id such as `inc-2`.
    pub fn delete_entry(&mut self, target: Option<&str>) -> Dispatch {
        let Some(row) = target.and_then(|raw| raw.parse::<RowId>().ok()) else {
            debug!(?target, "delete ignored");
            return Dispatch::Ignored;
        };
        if !self.ledger.contains(row.kind, row.id) {
            debug!(%row, "delete ignored; no such entry");
            return Dispatch::Ignored;
        }

        self.ledger.remove_entry(row.kind, row.id);
        debug!(%row, "entry removed");
        self.view.remove_row(row);
        self.update_cycle();
        Dispatch::Applied
    }

    fn update_cycle(&mut self) {
        self.ledger.recompute_aggregates();
        let totals = self.ledger.current_aggregates();
        self.view.render_aggregates(&totals);

        self.ledger.recompute_percentages();
        let percentages = self.ledger.current_expense_percentages();
        self.view.render_expense_percentages(&percentages);
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(description: &str, raw_value: &str) -> InputSnapshot {
        InputSnapshot {
            kind: EntryKind::Income,
            description: description.into(),
            raw_value: raw_value.into(),
        }
    }

    #[test]
    fn validation_accepts_positive_numbers() {
        let entry = NewEntry::from_input(&input("Salary", " 1000.5 ")).unwrap();
        assert_eq!(entry.value, 1000.5);
        assert_eq!(entry.description, "Salary");
    }

    #[test]
    fn validation_rejects_bad_input() {
        for (description, raw) in [
            ("", "10"),
            ("Rent", "0"),
            ("Rent", "-5"),
            ("Rent", "abc"),
            ("Rent", ""),
            ("Rent", "inf"),
            ("Rent", "NaN"),
            ("Rent", "12abc"),
            ("Rent", "1,000"),
            ("Rent", "50 dollars"),
        ] {
            assert!(NewEntry::from_input(&input(description, raw)).is_none());
        }
    }
}
