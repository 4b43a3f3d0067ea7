// src/commands/tail_cmd.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandResult};
use crate::shell::Session;
use crate::vfs::VfsError;

const DEFAULT_LINES: usize = 10;

pub struct TailCommand;

#[async_trait]
impl Command for TailCommand {
    fn name(&self) -> &'static str {
        "tail"
    }

    async fn execute(&self, session: &mut Session, args: &[String]) -> CommandResult {
        if args.is_empty() || args.len() > 2 {
            return CommandResult::error("Usage: tail <file> [lines]\n".to_string());
        }

        // The count is validated before any filesystem access.
        let count = match args.get(1) {
            Some(raw) => match raw.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    let e = VfsError::InvalidArgument {
                        message: format!("line count must be a positive integer, got '{}'", raw),
                    };
                    return CommandResult::error(format!("tail: {}\n", e));
                }
            },
            None => DEFAULT_LINES,
        };

        let content = match session.vfs.read_file(&args[0]) {
            Ok(c) => c,
            Err(e) => return CommandResult::error(format!("tail: {}\n", e)),
        };

        // Original 1-based line numbers are preserved, not renumbered.
        let lines: Vec<&str> = content.split('\n').collect();
        let start = lines.len().saturating_sub(count);
        let mut stdout = String::new();
        for (i, line) in lines.iter().enumerate().skip(start) {
            stdout.push_str(&format!("{:>6}\t{}\n", i + 1, line));
        }
        CommandResult::success(stdout)
    }
}
