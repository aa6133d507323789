use std::{env, path::PathBuf};

use dialoguer::{theme::ColorfulTheme, Confirm};
use jars_config::{Config, ConfigManager};
use jars_core::{CoreError, Intent, JarsSession, Validator};

use crate::cli::commands;
use crate::cli::errors::{CliError, CommandError};
use crate::cli::output;
use crate::cli::registry::{CommandEntry, CommandRegistry};

/// Selects script mode, reading commands from stdin without prompts.
pub const SCRIPT_ENV: &str = "SIX_JARS_CLI_SCRIPT";
/// Overrides the directory holding the preferences file.
pub const HOME_ENV: &str = "SIX_JARS_HOME";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

impl CliMode {
    pub fn from_env() -> Self {
        if env::var_os(SCRIPT_ENV).is_some() {
            CliMode::Script
        } else {
            CliMode::Interactive
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Everything a command handler may touch. The allocation session lives
/// here and is handed to handlers explicitly.
pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub session: JarsSession,
    pub validator: Validator,
    pub config: Config,
    pub config_manager: ConfigManager,
    pub theme: ColorfulTheme,
    pub last_command: Option<String>,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let base = Config::resolve_base_dir(env::var_os(HOME_ENV).map(PathBuf::from));
        let config_manager = ConfigManager::with_base_dir(base)?;
        Self::with_manager(mode, config_manager)
    }

    pub fn with_manager(mode: CliMode, config_manager: ConfigManager) -> Result<Self, CliError> {
        let config = config_manager.load()?;
        output::configure(&config);
        tracing::info!(
            path = %config_manager.config_path().display(),
            ?mode,
            "shell preferences loaded"
        );

        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        Ok(Self {
            mode,
            registry,
            session: JarsSession::new(),
            validator: Validator::new(),
            config,
            config_manager,
            theme: ColorfulTheme::default(),
            last_command: None,
            running: true,
        })
    }

    pub fn prompt(&self) -> String {
        "six-jars> ".to_string()
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub fn is_interactive(&self) -> bool {
        self.mode == CliMode::Interactive
    }

    pub fn dispatch(&mut self, command: &str, args: &[&str]) -> Result<LoopControl, CommandError> {
        let Some(handler) = self.registry.handler(command) else {
            return Err(CommandError::UnknownCommand(command.to_string()));
        };
        match handler(self, args) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => {
                self.running = false;
                Ok(LoopControl::Exit)
            }
            Err(err) => Err(err),
        }
    }

    /// Validates `intent` and applies it. With auto-recompute on, the summary
    /// is re-derived in the same step.
    pub fn apply_intent(&mut self, intent: Intent) -> Result<(), CommandError> {
        if self.config.auto_recompute {
            self.session.submit(&self.validator, intent)?;
        } else {
            self.validator
                .check_intent(self.session.config(), &intent)
                .map_err(CoreError::from)?;
            self.session.dispatch(intent)?;
        }
        Ok(())
    }

    pub fn report_error(&self, err: CommandError) {
        match err {
            CommandError::Core(CoreError::Validation(failed)) => {
                output::warning("Input rejected; the summary was not changed.");
                for issue in &failed.issues {
                    output::warning(format!("  {}: {}", issue.field, issue.message));
                }
            }
            CommandError::UnknownCommand(name) => {
                output::error(format!("Unknown command `{name}`."));
                if let Some(suggestion) = self.registry.closest(&name) {
                    output::info(format!("Did you mean `{suggestion}`?"));
                } else {
                    output::info("Type `help` to list commands.");
                }
            }
            other => {
                tracing::debug!(error = %other, "command failed");
                output::error(other);
            }
        }
    }

    pub fn confirm(&self, prompt: &str, default: bool) -> Result<bool, CommandError> {
        if !self.is_interactive() {
            return Ok(true);
        }
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(CommandError::from)
    }

    pub fn confirm_exit(&self) -> Result<bool, CliError> {
        Confirm::with_theme(&self.theme)
            .with_prompt("Exit the shell?")
            .default(true)
            .interact()
            .map_err(CliError::from)
    }

    /// Writes the current preferences and re-applies them to the output.
    pub fn save_config(&self) -> Result<(), CommandError> {
        self.config_manager.save(&self.config)?;
        output::configure(&self.config);
        Ok(())
    }
}
