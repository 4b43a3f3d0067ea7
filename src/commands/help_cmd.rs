// src/commands/help_cmd.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandResult};
use crate::shell::Session;

pub struct HelpCommand;

const VERBS: &[(&str, &str)] = &[
    ("ls [dir]", "list directory contents"),
    ("cd [dir]", "change directory (no argument: go to root)"),
    ("pwd", "print the current directory"),
    ("cat <file>", "print a file with line numbers"),
    ("tail <file> [n]", "print the last n lines (default 10)"),
    ("whoami", "print the session user"),
    ("vfs-info", "show metadata of the loaded archive"),
    ("history", "show the last 10 commands"),
    ("clear, clr", "clear the terminal screen"),
    ("help", "show this table"),
    ("exit, quit", "leave the shell"),
];

#[async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    async fn execute(&self, _session: &mut Session, _args: &[String]) -> CommandResult {
        let mut stdout = String::from("Available commands:\n\n");
        for (verb, summary) in VERBS {
            stdout.push_str(&format!("  {:<18} {}\n", verb, summary));
        }
        CommandResult::success(stdout)
    }
}
