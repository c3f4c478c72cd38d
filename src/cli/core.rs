//! Shell dispatch, error reporting, and the bridge from commands to view events.

use std::io;

use dialoguer::{theme::ColorfulTheme, Confirm};
use strsim::levenshtein;
use thiserror::Error;
use tracing::debug;

use crate::{
    config::{Config, ConfigManager},
    errors::{BudgetError, CliError},
    session::{Clock, Dispatch, Session, UiEvent},
};

use super::{
    commands,
    output::{self, OutputPreferences},
    registry::{CommandEntry, CommandRegistry},
    shell_context::{CliMode, ShellContext},
    system_clock::SystemClock,
    terminal_view::TerminalView,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

/// Recoverable failure of a single command; the shell keeps running.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Core(#[from] BudgetError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error("exit requested")]
    ExitRequested,
}

pub type CommandResult = Result<(), CommandError>;

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::new()?;
        let config = config_manager.load()?;
        crate::init(config.log_filter.as_deref());
        Self::build(mode, config_manager, config, &SystemClock)
    }

    /// Builds a shell over an explicit config location and clock, then starts the session.
    pub fn with_config_manager(
        mode: CliMode,
        config_manager: ConfigManager,
        clock: &dyn Clock,
    ) -> Result<Self, CliError> {
        let config = config_manager.load()?;
        Self::build(mode, config_manager, config, clock)
    }

    fn build(
        mode: CliMode,
        config_manager: ConfigManager,
        config: Config,
        clock: &dyn Clock,
    ) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let mut prefs = OutputPreferences::from(&config);
        if mode == CliMode::Script {
            prefs.color = false;
        }
        output::set_preferences(prefs);

        let mut session = Session::new(TerminalView::new());
        session.start(clock);

        Ok(ShellContext {
            mode,
            registry,
            session,
            config_manager,
            config,
            running: true,
        })
    }

    /// Delivers `event` to the session if the view has a handler registered for it.
    pub(crate) fn emit(&mut self, event: UiEvent) -> CommandResult {
        if !self.view().accepts(event.handler()) {
            debug!(?event, "no handler registered; event dropped");
            return Ok(());
        }
        if self.session.dispatch(event) == Dispatch::Applied {
            self.refresh_screen();
        }
        Ok(())
    }

    pub(crate) fn refresh_screen(&self) {
        if output::current_preferences().quiet_mode {
            return;
        }
        self.print_screen();
    }

    pub(crate) fn print_screen(&self) {
        println!("{}", self.view().render());
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn prompt(&self) -> String {
        format!("budgety [{}]> ", self.view().form().kind.tag())
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.get(command).map(|entry| entry.handler) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let needle = input.to_lowercase();
        let best = self
            .registry
            .names()
            .map(|key| (levenshtein(key, &needle), key))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, best)) = best {
            if distance <= 3 {
                output::info(format!("Suggestion: `{}`?", best));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Exit budgety?")
            .default(true)
            .interact()?)
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::info("Use `help <command>` for usage details.");
            }
            other => output::error(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tempfile::TempDir;

    use super::*;
    use crate::cli::shell::handle_line;
    use crate::ledger::{EntryKind, Percentage};

    struct FixedClock;

    impl Clock for FixedClock {
        fn today(&self) -> NaiveDate {
            NaiveDate::from_ymd_opt(2024, 2, 10).unwrap()
        }
    }

    fn shell() -> (ShellContext, TempDir) {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        let context =
            ShellContext::with_config_manager(CliMode::Script, manager, &FixedClock).unwrap();
        (context, temp)
    }

    fn run(context: &mut ShellContext, line: &str) -> LoopControl {
        handle_line(context, line).unwrap()
    }

    #[test]
    fn startup_renders_month_and_zeroed_totals() {
        let (context, _temp) = shell();
        assert_eq!(context.view().month_label(), "February 2024");
        assert_eq!(context.view().budget_label(), "+ 0.00");
        assert_eq!(context.view().percentage_label(), "---");
    }

    #[test]
    fn add_command_fills_form_and_updates_totals() {
        let (mut context, _temp) = shell();
        run(&mut context, "add Salary 1000");
        run(&mut context, "add exp \"Rent and bills\" 300");

        let ledger = context.session.ledger();
        assert_eq!(ledger.len(EntryKind::Income), 1);
        assert_eq!(ledger.expenses()[0].description, "Rent and bills");
        assert_eq!(context.view().income_label(), "+ 1,000.00");
        assert_eq!(context.view().expense_label(), "- 300.00");
        assert_eq!(context.view().budget_label(), "+ 700.00");
        assert_eq!(context.view().percentage_label(), "30%");
        assert!(context.view().form().expense_styling);
    }

    #[test]
    fn form_fields_survive_rejected_add() {
        let (mut context, _temp) = shell();
        run(&mut context, "desc Bonus");
        run(&mut context, "value -5");
        run(&mut context, "add");
        assert!(context.session.ledger().is_empty());
        assert_eq!(context.view().form().description, "Bonus");
        assert_eq!(context.view().form().raw_value, "-5");
    }

    #[test]
    fn delete_command_removes_row_and_refreshes_percentages() {
        let (mut context, _temp) = shell();
        run(&mut context, "add inc Salary 1000");
        run(&mut context, "add exp Rent 250");
        run(&mut context, "delete inc-0");

        assert!(context.view().rows(EntryKind::Income).is_empty());
        assert_eq!(
            context.session.ledger().current_expense_percentages(),
            vec![Percentage::Undefined]
        );
        assert_eq!(
            context.view().rows(EntryKind::Expense)[0].percentage.as_deref(),
            Some("---")
        );
    }

    #[test]
    fn type_toggles_without_touching_ledger() {
        let (mut context, _temp) = shell();
        run(&mut context, "type");
        assert_eq!(context.view().form().kind, EntryKind::Expense);
        assert!(context.view().form().expense_styling);
        run(&mut context, "type exp");
        assert!(context.view().form().expense_styling);
        run(&mut context, "type inc");
        assert!(!context.view().form().expense_styling);
        assert!(context.session.ledger().is_empty());
    }

    #[test]
    fn usage_errors_are_reported_not_fatal() {
        let (mut context, _temp) = shell();
        assert!(matches!(
            handle_line(&mut context, "delete"),
            Err(CommandError::InvalidArguments(_))
        ));
        assert!(matches!(
            handle_line(&mut context, "type transfer"),
            Err(CommandError::InvalidArguments(_))
        ));
        assert_eq!(run(&mut context, "unknown-command"), LoopControl::Continue);
    }

    #[test]
    fn config_set_persists_preferences() {
        let (mut context, temp) = shell();
        run(&mut context, "config set quiet on");
        assert!(context.config.quiet);

        let reloaded = ConfigManager::with_base_dir(temp.path().to_path_buf())
            .unwrap()
            .load()
            .unwrap();
        assert!(reloaded.quiet);
    }

    #[test]
    fn exit_stops_the_loop() {
        let (mut context, _temp) = shell();
        assert_eq!(run(&mut context, "exit"), LoopControl::Exit);
        assert!(!context.running);
    }
}
