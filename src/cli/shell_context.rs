use crate::{
    config::{Config, ConfigManager},
    session::Session,
};

use super::{registry::CommandRegistry, terminal_view::TerminalView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub session: Session<TerminalView>,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub running: bool,
}

impl ShellContext {
    pub fn view(&self) -> &TerminalView {
        self.session.view()
    }

    pub fn view_mut(&mut self) -> &mut TerminalView {
        self.session.view_mut()
    }
}
