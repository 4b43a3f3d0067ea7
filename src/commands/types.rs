// src/commands/types.rs
use async_trait::async_trait;

use crate::shell::Session;

/// Result of one command execution.
///
/// `terminate` is the explicit exit/quit signal: it travels back through the
/// dispatcher as a normal value and is checked by both the interactive loop
/// and the script runner. No handler exits the process itself.
#[derive(Debug, Clone)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    pub terminate: bool,
}

impl CommandResult {
    pub fn success(stdout: String) -> Self {
        Self {
            stdout,
            stderr: String::new(),
            exit_code: 0,
            terminate: false,
        }
    }

    pub fn error(stderr: String) -> Self {
        Self {
            stdout: String::new(),
            stderr,
            exit_code: 1,
            terminate: false,
        }
    }

    /// Session termination: no output, clean exit.
    pub fn terminated() -> Self {
        Self {
            stdout: String::new(),
            stderr: String::new(),
            exit_code: 0,
            terminate: true,
        }
    }
}

/// A shell verb. Handlers get mutable access to the one session structure
/// that owns the filesystem cursor and the history; there is no other shared
/// state.
#[async_trait]
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;

    /// Alternate verbs resolving to this command (e.g. `clr`, `quit`).
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    async fn execute(&self, session: &mut Session, args: &[String]) -> CommandResult;
}
