//! Terminal front end: a line shell that drives the session through [`terminal_view::TerminalView`].

pub mod commands;
pub mod core;
pub mod help;
pub mod output;
pub mod registry;
mod shell;
pub mod shell_context;
pub mod system_clock;
pub mod terminal_view;

pub use shell::run_cli;
