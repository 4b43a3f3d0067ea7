// src/commands/pwd_cmd.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandResult};
use crate::shell::Session;

pub struct PwdCommand;

#[async_trait]
impl Command for PwdCommand {
    fn name(&self) -> &'static str {
        "pwd"
    }

    async fn execute(&self, session: &mut Session, _args: &[String]) -> CommandResult {
        CommandResult::success(format!("{}\n", session.vfs.current_dir()))
    }
}
