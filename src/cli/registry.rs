use std::collections::HashMap;

use strsim::levenshtein;

use crate::cli::errors::CommandResult;
use crate::cli::shell_context::ShellContext;

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

pub struct CommandEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
}

impl CommandEntry {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            handler,
        }
    }
}

/// Command table keyed by name, remembering registration order for help.
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<&'static str, CommandEntry>,
    order: Vec<&'static str>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, entry: CommandEntry) {
        let name = entry.name;
        if self.commands.insert(name, entry).is_none() {
            self.order.push(name);
        }
    }

    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.commands.get(name)
    }

    pub fn list(&self) -> Vec<&CommandEntry> {
        self.order
            .iter()
            .filter_map(|name| self.commands.get(name))
            .collect()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.order.iter().copied()
    }

    pub fn handler(&self, name: &str) -> Option<CommandHandler> {
        self.commands.get(name).map(|entry| entry.handler)
    }

    /// Closest registered name within edit distance 3, if any.
    pub fn closest(&self, input: &str) -> Option<&'static str> {
        closest_match(input, self.names())
    }
}

/// Picks the candidate with the smallest edit distance to `input`, ignoring
/// anything more than three edits away.
pub fn closest_match<'a, I>(input: &str, candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let needle = input.to_ascii_lowercase();
    candidates
        .into_iter()
        .map(|candidate| (levenshtein(&needle, &candidate.to_ascii_lowercase()), candidate))
        .filter(|(distance, _)| *distance <= 3)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
        Ok(())
    }

    #[test]
    fn keeps_registration_order() {
        let mut registry = CommandRegistry::new();
        registry.register(CommandEntry::new("summary", "", "", noop));
        registry.register(CommandEntry::new("income", "", "", noop));
        registry.register(CommandEntry::new("summary", "", "", noop));

        assert_eq!(registry.names().collect::<Vec<_>>(), ["summary", "income"]);
    }

    #[test]
    fn suggests_close_names_only() {
        let mut registry = CommandRegistry::new();
        registry.register(CommandEntry::new("summary", "", "", noop));
        registry.register(CommandEntry::new("income", "", "", noop));

        assert_eq!(registry.closest("sumary"), Some("summary"));
        assert_eq!(registry.closest("INCOM"), Some("income"));
        assert_eq!(registry.closest("xyzzyplugh"), None);
    }
}
