use std::collections::HashMap;

use crate::cli::core::CommandResult;
use crate::cli::shell_context::ShellContext;

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

pub struct CommandEntry {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
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
            aliases: &[],
            description,
            usage,
            handler,
        }
    }

    pub fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }
}

/// Command table in registration order. Lookups go through aliases and
/// ignore ASCII case.
#[derive(Default)]
pub struct CommandRegistry {
    entries: Vec<CommandEntry>,
    index: HashMap<&'static str, usize>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `entry`; a later entry with the same name replaces the earlier one.
    pub fn register(&mut self, entry: CommandEntry) {
        let slot = match self.index.get(entry.name) {
            Some(&existing) => {
                self.entries[existing] = entry;
                existing
            }
            None => {
                self.entries.push(entry);
                self.entries.len() - 1
            }
        };
        let entry = &self.entries[slot];
        self.index.insert(entry.name, slot);
        for alias in entry.aliases {
            self.index.insert(*alias, slot);
        }
    }

    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        let key = name.trim().to_ascii_lowercase();
        self.index.get(key.as_str()).map(|&slot| &self.entries[slot])
    }

    pub fn list(&self) -> impl Iterator<Item = &CommandEntry> + '_ {
        self.entries.iter()
    }

    /// Primary names followed by aliases, for completion and suggestions.
    pub fn names(&self) -> Vec<&'static str> {
        self.entries
            .iter()
            .flat_map(|entry| std::iter::once(entry.name).chain(entry.aliases.iter().copied()))
            .collect()
    }

    pub fn handler(&self, name: &str) -> Option<CommandHandler> {
        self.get(name).map(|entry| entry.handler)
    }
}
