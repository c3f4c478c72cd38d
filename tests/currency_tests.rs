use budgety::{
    currency::{format_amount, format_budget, format_number, format_percentage},
    ledger::{EntryKind, Percentage},
};

#[test]
fn formats_signed_amounts() {
    assert_eq!(format_amount(1234.5, EntryKind::Expense), "- 1,234.50");
    assert_eq!(format_amount(50.0, EntryKind::Income), "+ 50.00");
}

#[test]
fn groups_large_amounts_beyond_one_separator() {
    assert_eq!(format_amount(12_345_678.0, EntryKind::Income), "+ 12,345,678.00");
    assert_eq!(format_number(100_000.0, 2), "100,000.00");
}

#[test]
fn rounds_ties_up_at_two_decimals() {
    assert_eq!(format_amount(0.125, EntryKind::Income), "+ 0.13");
    assert_eq!(format_amount(2.499, EntryKind::Expense), "- 2.50");
}

#[test]
fn budget_sign_follows_its_value() {
    assert_eq!(format_budget(700.0), "+ 700.00");
    assert_eq!(format_budget(0.0), "+ 0.00");
    assert_eq!(format_budget(-1500.25), "- 1,500.25");
}

#[test]
fn percentages_show_marker_when_undefined() {
    assert_eq!(format_percentage(Percentage::Known(30)), "30%");
    assert_eq!(format_percentage(Percentage::Known(0)), "0%");
    assert_eq!(format_percentage(Percentage::Undefined), "---");
}
