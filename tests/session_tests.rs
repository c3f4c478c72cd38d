mod common;

use budgety::{
    ledger::{AggregateState, EntryKind, Percentage},
    session::{Dispatch, HandlerKind, RowId, Session, UiEvent},
};
use chrono::Month;
use common::{march_2025, RecordingView, ViewCall};

fn started_session() -> Session<RecordingView> {
    let mut session = Session::new(RecordingView::new());
    session.start(&march_2025());
    session.view_mut().take_calls();
    session
}

fn add(session: &mut Session<RecordingView>, kind: EntryKind, description: &str, raw: &str) -> Dispatch {
    session.view_mut().fill(kind, description, raw);
    session.dispatch(UiEvent::AddRequested)
}

fn delete(session: &mut Session<RecordingView>, target: &str) -> Dispatch {
    session.dispatch(UiEvent::DeleteRequested {
        target: Some(target.to_string()),
    })
}

#[test]
fn start_renders_header_then_registers_handlers() {
    let mut session = Session::new(RecordingView::new());
    session.start(&march_2025());

    assert_eq!(
        session.view().calls,
        vec![
            ViewCall::MonthYear(Month::March, 2025),
            ViewCall::Aggregates(AggregateState::default()),
            ViewCall::Register(HandlerKind::Add),
            ViewCall::Register(HandlerKind::Delete),
            ViewCall::Register(HandlerKind::TypeChanged),
        ]
    );
    assert!(session.ledger().is_empty());
}

#[test]
fn add_runs_the_full_update_cycle_in_order() {
    let mut session = started_session();
    assert_eq!(add(&mut session, EntryKind::Income, "Salary", "1000"), Dispatch::Applied);
    session.view_mut().take_calls();

    assert_eq!(add(&mut session, EntryKind::Expense, "Rent", "300"), Dispatch::Applied);
    let calls = session.view_mut().take_calls();
    assert_eq!(
        calls,
        vec![
            ViewCall::AppendRow(RowId::new(EntryKind::Expense, 0)),
            ViewCall::ClearInput,
            ViewCall::Aggregates(AggregateState {
                total_income: 1000.0,
                total_expense: 300.0,
                budget: 700.0,
                overall_expense_percentage: Percentage::Known(30),
            }),
            ViewCall::Percentages(vec![Percentage::Known(30)]),
        ]
    );
    assert_eq!(session.view().input.description, "");
}

#[test]
fn invalid_input_is_silently_rejected() {
    let mut session = started_session();
    let cases = [
        (EntryKind::Income, "", "100"),
        (EntryKind::Income, "Gift", "0"),
        (EntryKind::Expense, "Refund", "-5"),
        (EntryKind::Expense, "Taxi", "twelve"),
        (EntryKind::Expense, "Taxi", ""),
    ];
    for (kind, description, raw) in cases {
        assert_eq!(add(&mut session, kind, description, raw), Dispatch::Ignored);
    }

    assert!(session.ledger().is_empty());
    assert!(session.view().calls.is_empty());
    assert_eq!(session.view().input.raw_value, "");
    assert_eq!(session.view().input.description, "Taxi");
}

#[test]
fn delete_removes_row_and_recomputes() {
    let mut session = started_session();
    add(&mut session, EntryKind::Income, "Salary", "2000");
    add(&mut session, EntryKind::Expense, "Rent", "500");
    add(&mut session, EntryKind::Expense, "Food", "250");
    session.view_mut().take_calls();

    assert_eq!(delete(&mut session, "exp-0"), Dispatch::Applied);
    let calls = session.view_mut().take_calls();
    assert_eq!(calls[0], ViewCall::RemoveRow(RowId::new(EntryKind::Expense, 0)));
    assert_eq!(
        calls[1],
        ViewCall::Aggregates(AggregateState {
            total_income: 2000.0,
            total_expense: 250.0,
            budget: 1750.0,
            overall_expense_percentage: Percentage::Known(13),
        })
    );
    assert_eq!(calls[2], ViewCall::Percentages(vec![Percentage::Known(13)]));
    assert_eq!(session.ledger().expenses()[0].description, "Food");
}

#[test]
fn deleting_the_only_income_clears_expense_shares() {
    let mut session = started_session();
    add(&mut session, EntryKind::Income, "Salary", "1000");
    add(&mut session, EntryKind::Expense, "Rent", "300");
    delete(&mut session, "inc-0");

    let totals = session.ledger().current_aggregates();
    assert_eq!(totals.budget, -300.0);
    assert_eq!(totals.overall_expense_percentage, Percentage::Undefined);
    assert_eq!(
        session.ledger().current_expense_percentages(),
        vec![Percentage::Undefined]
    );
}

#[test]
fn unresolvable_delete_targets_are_ignored() {
    let mut session = started_session();
    add(&mut session, EntryKind::Income, "Salary", "1000");
    session.view_mut().take_calls();

    assert_eq!(
        session.dispatch(UiEvent::DeleteRequested { target: None }),
        Dispatch::Ignored
    );
    assert_eq!(delete(&mut session, "container"), Dispatch::Ignored);
    assert_eq!(delete(&mut session, "inc-x"), Dispatch::Ignored);
    assert!(session.view().calls.is_empty());
    assert_eq!(session.ledger().len(EntryKind::Income), 1);
}

#[test]
fn deleting_absent_id_is_ignored() {
    let mut session = started_session();
    add(&mut session, EntryKind::Income, "Salary", "1000");
    session.view_mut().take_calls();

    assert_eq!(delete(&mut session, "inc-9"), Dispatch::Ignored);
    assert_eq!(delete(&mut session, "exp-0"), Dispatch::Ignored);
    assert_eq!(session.ledger().len(EntryKind::Income), 1);
    assert!(session.view().calls.is_empty());
}

#[test]
fn type_change_only_toggles_styling() {
    let mut session = started_session();
    assert_eq!(session.dispatch(UiEvent::TypeChanged), Dispatch::Applied);
    assert_eq!(session.view().calls, vec![ViewCall::ToggleStyling]);
    assert!(session.ledger().is_empty());
}

#[test]
fn row_ids_follow_last_plus_one_rule() {
    let mut session = started_session();
    for name in ["A", "B", "C"] {
        add(&mut session, EntryKind::Income, name, "10");
    }
    delete(&mut session, "inc-1");
    session.view_mut().take_calls();

    add(&mut session, EntryKind::Income, "D", "10");
    assert_eq!(
        session.view().calls[0],
        ViewCall::AppendRow(RowId::new(EntryKind::Income, 3))
    );
}
