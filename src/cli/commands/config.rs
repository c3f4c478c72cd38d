use crate::cli::core::{CommandError, CommandResult};
use crate::cli::output::{self, OutputPreferences};
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::{CliMode, ShellContext};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "Show or change shell preferences",
        "config [show | set <color|quiet|log_filter> <value>]",
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] | ["show"] => {
            show_config(context);
            Ok(())
        }
        ["set", key, value @ ..] if !value.is_empty() => {
            set_config_value(context, key, &value.join(" "))
        }
        _ => Err(CommandError::InvalidArguments(
            "usage: config [show | set <key> <value>]".into(),
        )),
    }
}

fn show_config(context: &ShellContext) {
    output::section("Configuration");
    let mut rows = context.config.entries();
    rows.push(("file", context.config_manager.path().display().to_string()));
    output::two_column(&rows);
}

fn set_config_value(context: &mut ShellContext, key: &str, value: &str) -> CommandResult {
    context.config.set(key, value)?;
    context.config_manager.save(&context.config)?;

    let mut prefs = OutputPreferences::from(&context.config);
    if context.mode == CliMode::Script {
        prefs.color = false;
    }
    output::set_preferences(prefs);
    if key == "log_filter" {
        output::info("Log filter changes apply on next start.");
    }
    output::success(format!("Set `{}`.", key));
    Ok(())
}
