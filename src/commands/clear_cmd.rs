// src/commands/clear_cmd.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandResult};
use crate::shell::Session;

pub struct ClearCommand;

#[async_trait]
impl Command for ClearCommand {
    fn name(&self) -> &'static str {
        "clear"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["clr"]
    }

    async fn execute(&self, _session: &mut Session, _args: &[String]) -> CommandResult {
        // ANSI escape sequence: clear screen, cursor to top-left.
        CommandResult::success("\x1B[2J\x1B[H".to_string())
    }
}
