use jars_config::ConfigError;
use jars_core::CoreError;
use rustyline::error::ReadlineError;
use thiserror::Error;

/// Fatal shell failures; the binary reports them and exits.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Line editor error: {0}")]
    Readline(#[from] ReadlineError),
    #[error("Preferences error: {0}")]
    Config(#[from] ConfigError),
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Failures of a single command; reported and the shell keeps running.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Unknown command `{0}`")]
    UnknownCommand(String),
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("Preferences error: {0}")]
    Config(#[from] ConfigError),
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Interactive input is not available in script mode")]
    InteractiveOnly,
    #[error("Exit requested")]
    ExitRequested,
}

impl CommandError {
    pub fn usage(usage: &str) -> Self {
        CommandError::InvalidArguments(format!("usage: {usage}"))
    }
}

pub type CommandResult = Result<(), CommandError>;
