use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Identifier assigned by the ledger, unique within one entry collection.
pub type EntryId = u64;

/// Discriminates the two entry collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    /// Short tag used when an entry is referenced by text (`inc` / `exp`).
    pub fn tag(self) -> &'static str {
        match self {
            EntryKind::Income => "inc",
            EntryKind::Expense => "exp",
        }
    }

    pub fn other(self) -> Self {
        match self {
            EntryKind::Income => EntryKind::Expense,
            EntryKind::Expense => EntryKind::Income,
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKindError(pub String);

impl fmt::Display for ParseKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown entry kind `{}` (expected inc or exp)", self.0)
    }
}

impl std::error::Error for ParseKindError {}

impl FromStr for EntryKind {
    type Err = ParseKindError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_ascii_lowercase().as_str() {
            "inc" | "income" => Ok(EntryKind::Income),
            "exp" | "expense" => Ok(EntryKind::Expense),
            _ => Err(ParseKindError(raw.to_string())),
        }
    }
}

/// Share of total income, or undefined when there is no income to compare against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Percentage {
    #[default]
    Undefined,
    Known(u64),
}

impl Percentage {
    /// `round(100 * part / whole)`, undefined unless `whole` is positive.
    pub fn of(part: f64, whole: f64) -> Self {
        if whole > 0.0 {
            Percentage::Known((part / whole * 100.0).round() as u64)
        } else {
            Percentage::Undefined
        }
    }

    pub fn value(self) -> Option<u64> {
        match self {
            Percentage::Known(value) => Some(value),
            Percentage::Undefined => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Income {
    pub id: EntryId,
    pub description: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: EntryId,
    pub description: String,
    pub value: f64,
    #[serde(default)]
    pub percentage_of_income: Percentage,
}

impl Expense {
    pub fn calc_percentage(&mut self, total_income: f64) {
        self.percentage_of_income = Percentage::of(self.value, total_income);
    }
}

/// A single income or expense record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Entry {
    Income(Income),
    Expense(Expense),
}

impl Entry {
    pub fn kind(&self) -> EntryKind {
        match self {
            Entry::Income(_) => EntryKind::Income,
            Entry::Expense(_) => EntryKind::Expense,
        }
    }

    pub fn id(&self) -> EntryId {
        match self {
            Entry::Income(income) => income.id,
            Entry::Expense(expense) => expense.id,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Entry::Income(income) => &income.description,
            Entry::Expense(expense) => &expense.description,
        }
    }

    pub fn value(&self) -> f64 {
        match self {
            Entry::Income(income) => income.value,
            Entry::Expense(expense) => expense.value,
        }
    }
}
