// src/commands/cd_cmd.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandResult};
use crate::shell::Session;

pub struct CdCommand;

#[async_trait]
impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    async fn execute(&self, session: &mut Session, args: &[String]) -> CommandResult {
        // No argument means "go to root".
        let target = args.first().map(|s| s.as_str()).unwrap_or("/");
        match session.vfs.change_directory(target) {
            Ok(()) => CommandResult::success(String::new()),
            Err(e) => CommandResult::error(format!("cd: {}\n", e)),
        }
    }
}
