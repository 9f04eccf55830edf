//! Interactive and scripted terminal front-end.

pub mod commands;
pub mod core;
pub mod help;
pub mod io;
pub mod output;
pub mod registry;
mod shell;
pub mod shell_context;
pub mod ui;
pub mod views;

pub use shell::run_cli;
pub use shell_context::{CliMode, ShellContext};
