//! Display formatting for amounts and percentages.

use crate::ledger::{EntryKind, Percentage};

pub const DECIMAL_SEPARATOR: char = '.';
pub const GROUPING_SEPARATOR: char = ',';
pub const MINOR_UNITS: u8 = 2;

/// Label shown in place of a percentage that has no income to compare against.
pub const UNDEFINED_PERCENTAGE: &str = "---";

/// Formats a magnitude with grouped thousands and a fixed number of decimals.
///
/// Ties round away from zero, so `0.125` becomes `0.13` at two decimals.
pub fn format_number(value: f64, precision: u8) -> String {
    let factor = 10f64.powi(i32::from(precision));
    let rounded = (value.abs() * factor).round() / factor;
    let body = format!("{:.*}", precision as usize, rounded);
    match body.split_once('.') {
        Some((int_part, fraction)) => format!(
            "{}{}{}",
            group_digits(int_part, GROUPING_SEPARATOR),
            DECIMAL_SEPARATOR,
            fraction
        ),
        None => group_digits(&body, GROUPING_SEPARATOR),
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
    }
    grouped
}

pub fn sign_for(kind: EntryKind) -> char {
    match kind {
        EntryKind::Income => '+',
        EntryKind::Expense => '-',
    }
}

/// Renders `value` as `"+ 1,234.50"` for incomes or `"- 1,234.50"` for expenses.
pub fn format_amount(value: f64, kind: EntryKind) -> String {
    format!("{} {}", sign_for(kind), format_number(value, MINOR_UNITS))
}

/// Net budget is income-signed when it is zero or positive.
pub fn format_budget(budget: f64) -> String {
    let kind = if budget >= 0.0 {
        EntryKind::Income
    } else {
        EntryKind::Expense
    };
    format_amount(budget, kind)
}

pub fn format_percentage(percentage: Percentage) -> String {
    match percentage {
        Percentage::Known(value) => format!("{value}%"),
        Percentage::Undefined => UNDEFINED_PERCENTAGE.to_string(),
    }
}
