// src/commands/history_cmd.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandResult};
use crate::shell::Session;

/// Number of recent commands shown. The full record is kept in the session;
/// only the display is windowed.
const HISTORY_WINDOW: usize = 10;

pub struct HistoryCommand;

#[async_trait]
impl Command for HistoryCommand {
    fn name(&self) -> &'static str {
        "history"
    }

    async fn execute(&self, session: &mut Session, _args: &[String]) -> CommandResult {
        let start = session.history.len().saturating_sub(HISTORY_WINDOW);
        let mut stdout = String::new();
        // Sequence numbers reflect the position in the full record.
        for (i, cmd) in session.history.iter().enumerate().skip(start) {
            stdout.push_str(&format!("{:5}  {}\n", i + 1, cmd));
        }
        CommandResult::success(stdout)
    }
}
