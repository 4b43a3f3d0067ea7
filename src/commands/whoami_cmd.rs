// src/commands/whoami_cmd.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandResult};
use crate::shell::Session;

pub struct WhoamiCommand;

#[async_trait]
impl Command for WhoamiCommand {
    fn name(&self) -> &'static str {
        "whoami"
    }

    async fn execute(&self, session: &mut Session, _args: &[String]) -> CommandResult {
        // Identity is captured once at session start, never re-queried here.
        CommandResult::success(format!("{}\n", session.user))
    }
}
