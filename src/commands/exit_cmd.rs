// src/commands/exit_cmd.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandResult};
use crate::shell::Session;

pub struct ExitCommand;

#[async_trait]
impl Command for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["quit"]
    }

    async fn execute(&self, _session: &mut Session, _args: &[String]) -> CommandResult {
        // Termination travels back through the dispatcher as a result; the
        // enclosing loop stops, the handler itself performs no output.
        CommandResult::terminated()
    }
}
