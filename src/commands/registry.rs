// src/commands/registry.rs
use std::collections::HashMap;
use std::sync::Arc;

use super::types::Command;

/// Verb-to-handler registry. Extending the shell means registering another
/// entry, not editing a dispatch chain. Aliases share the handler instance.
pub struct CommandRegistry {
    commands: HashMap<String, Arc<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    pub fn register(&mut self, cmd: Arc<dyn Command>) {
        for alias in cmd.aliases() {
            self.commands.insert(alias.to_string(), cmd.clone());
        }
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.commands.keys().map(|s| s.as_str()).collect()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

use super::cat_cmd::CatCommand;
use super::cd_cmd::CdCommand;
use super::clear_cmd::ClearCommand;
use super::exit_cmd::ExitCommand;
use super::help_cmd::HelpCommand;
use super::history_cmd::HistoryCommand;
use super::ls_cmd::LsCommand;
use super::pwd_cmd::PwdCommand;
use super::tail_cmd::TailCommand;
use super::vfs_info_cmd::VfsInfoCommand;
use super::whoami_cmd::WhoamiCommand;

/// Registry with every built-in verb registered.
pub fn builtin_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    registry.register(Arc::new(LsCommand));
    registry.register(Arc::new(CdCommand));
    registry.register(Arc::new(PwdCommand));
    registry.register(Arc::new(CatCommand));
    registry.register(Arc::new(TailCommand));
    registry.register(Arc::new(WhoamiCommand));
    registry.register(Arc::new(VfsInfoCommand));
    registry.register(Arc::new(HistoryCommand));
    registry.register(Arc::new(HelpCommand));
    registry.register(Arc::new(ClearCommand));
    registry.register(Arc::new(ExitCommand));
    registry
}
