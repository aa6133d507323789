pub mod commands;
pub mod errors;
pub mod help;
pub mod output;
pub mod registry;
pub mod shell;
pub mod shell_context;
pub mod table;
pub mod views;

pub use errors::{CliError, CommandError, CommandResult};
pub use shell::run_cli;
pub use shell_context::{CliMode, LoopControl, ShellContext};
