use crate::cli::core::{CommandError, CommandResult};
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::ledger::EntryKind;
use crate::session::UiEvent;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "add",
            "Add the entry described by the form",
            "add [inc|exp] [<description> <value>]",
            cmd_add,
        ),
        CommandEntry::new(
            "delete",
            "Delete an entry by row id",
            "delete <row-id>   (e.g. inc-0, exp-2)",
            cmd_delete,
        ),
        CommandEntry::new(
            "type",
            "Switch the form between income and expense",
            "type [inc|exp]",
            cmd_type,
        ),
        CommandEntry::new("desc", "Set the form description", "desc <text>", cmd_desc),
        CommandEntry::new("value", "Set the form value", "value <amount>", cmd_value),
        CommandEntry::new("show", "Show the budget screen", "show", cmd_show),
        CommandEntry::new(
            "snapshot",
            "Print the ledger and totals as JSON",
            "snapshot",
            cmd_snapshot,
        ),
    ]
}

fn parse_kind(raw: &str) -> Result<EntryKind, CommandError> {
    raw.parse::<EntryKind>()
        .map_err(|err| CommandError::InvalidArguments(err.to_string()))
}

/// Moves the form to `kind`, firing the type-change event only on an actual change.
fn switch_kind(context: &mut ShellContext, kind: EntryKind) -> CommandResult {
    if context.view_mut().select_kind(kind) {
        context.emit(UiEvent::TypeChanged)?;
    }
    Ok(())
}

fn cmd_type(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let target = match args.first() {
        Some(raw) => parse_kind(raw)?,
        None => context.view().form().kind.other(),
    };
    switch_kind(context, target)
}

fn cmd_desc(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    context.view_mut().set_description(args.join(" "));
    Ok(())
}

fn cmd_value(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    context.view_mut().set_raw_value(args.join(" "));
    Ok(())
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let mut rest = args;
    if let Some((first, tail)) = args.split_first() {
        if let Ok(kind) = first.parse::<EntryKind>() {
            switch_kind(context, kind)?;
            rest = tail;
        }
    }

    match rest {
        [] => {}
        [_] => {
            return Err(CommandError::InvalidArguments(
                "usage: add [inc|exp] [<description> <value>]".into(),
            ))
        }
        [description @ .., value] => {
            let view = context.view_mut();
            view.set_description(description.join(" "));
            view.set_raw_value(*value);
        }
    }

    context.emit(UiEvent::AddRequested)
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(target) = args.first() else {
        return Err(CommandError::InvalidArguments("usage: delete <row-id>".into()));
    };
    context.emit(UiEvent::DeleteRequested {
        target: Some(target.to_string()),
    })
}

fn cmd_show(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.print_screen();
    Ok(())
}

fn cmd_snapshot(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let json = serde_json::to_string_pretty(context.session.ledger())?;
    println!("{json}");
    Ok(())
}
