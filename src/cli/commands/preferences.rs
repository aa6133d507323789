use jars_config::Config;

use crate::cli::errors::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::{closest_match, CommandEntry};
use crate::cli::shell_context::ShellContext;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "prefs",
        "View or change shell preferences",
        "prefs [<key> <value>]",
        cmd_prefs,
    )]
}

fn cmd_prefs(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] | ["show"] => {
            show_preferences(context);
            Ok(())
        }
        [key, value @ ..] if !value.is_empty() => {
            let key = key.to_ascii_lowercase();
            if !Config::KEYS.iter().any(|known| *known == key) {
                let hint = closest_match(&key, Config::KEYS)
                    .map(|candidate| format!(" Did you mean `{candidate}`?"))
                    .unwrap_or_default();
                return Err(CommandError::InvalidArguments(format!(
                    "unknown preference `{key}`.{hint}"
                )));
            }
            context.config.set(&key, &value.join(" "))?;
            context.save_config()?;
            tracing::info!(key = %key, "preference updated");
            output::success(format!("Preference `{key}` saved."));
            Ok(())
        }
        _ => Err(CommandError::usage("prefs [<key> <value>]")),
    }
}

fn show_preferences(context: &ShellContext) {
    output::section("Preferences");
    for (key, value) in context.config.entries() {
        output::info(format!("  {key:<20} {value}"));
    }
    output::info(format!(
        "  Stored in {}",
        context.config_manager.config_path().display()
    ));
}
