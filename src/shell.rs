//! Shell Environment
//!
//! Ties together the virtual filesystem and the command registry: one session
//! structure, a dispatcher that turns text lines into command executions, a
//! best-effort script runner, and the interactive prompt loop.

use std::io::Write as _;

use chrono::{DateTime, Local};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::commands::registry::builtin_registry;
use crate::commands::{CommandRegistry, CommandResult};
use crate::vfs::VirtualFs;

/// All mutable session state, passed explicitly to every handler: the loaded
/// (or absent) filesystem, the full command record, the user identity
/// captured once at construction, and the execution mode.
pub struct Session {
    pub vfs: VirtualFs,
    /// Append-only record of every accepted non-empty input line, kept in
    /// full; the `history` verb displays only a recent window.
    pub history: Vec<String>,
    pub user: String,
    pub started_at: DateTime<Local>,
    pub interactive: bool,
}

impl Session {
    pub fn new(vfs: VirtualFs) -> Self {
        // The acting user is queried from the OS exactly once per session.
        let user = std::env::var("USER")
            .or_else(|_| std::env::var("USERNAME"))
            .unwrap_or_else(|_| "user".to_string());
        Self {
            vfs,
            history: Vec::new(),
            user,
            started_at: Local::now(),
            interactive: false,
        }
    }
}

/// Accumulated output of a script run.
#[derive(Debug, Clone, Default)]
pub struct ExecResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    /// Set when an `exit`/`quit` line stopped the run; the caller must not
    /// start an interactive phase afterwards.
    pub terminated: bool,
}

pub struct Shell {
    pub session: Session,
    registry: CommandRegistry,
}

impl Shell {
    pub fn new(vfs: VirtualFs) -> Self {
        Self {
            session: Session::new(vfs),
            registry: builtin_registry(),
        }
    }

    pub fn prompt(&self) -> String {
        format!(
            "{}:{}> ",
            self.session.vfs.name(),
            self.session.vfs.current_dir()
        )
    }

    /// Dispatch one command line. Empty lines are ignored (`None`); anything
    /// else is recorded into history before execution, succeed or fail. An
    /// unknown verb is a reported no-op, never an abort.
    pub async fn dispatch(&mut self, line: &str) -> Option<CommandResult> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        self.session.history.push(line.to_string());

        let mut parts = line.split_whitespace();
        let verb = parts.next()?.to_lowercase();
        let args: Vec<String> = parts.map(String::from).collect();

        match self.registry.get(&verb) {
            Some(cmd) => Some(cmd.execute(&mut self.session, &args).await),
            None => Some(CommandResult::error(format!(
                "{}: command not found\n",
                verb
            ))),
        }
    }

    /// Execute a script line by line, best-effort. Blank lines are echoed as
    /// an explicit marker, comments are echoed with the `#` stripped, and
    /// every other line is echoed, recorded and dispatched. Per-command
    /// failures are reported and the run continues; only an explicit
    /// `exit`/`quit` stops it early.
    pub async fn run_script(&mut self, lines: &[String]) -> ExecResult {
        let mut out = ExecResult::default();

        for (num, raw) in lines.iter().enumerate() {
            let num = num + 1;
            let line = raw.trim();

            if line.is_empty() {
                out.stdout.push_str(&format!("[{}] (blank)\n", num));
                continue;
            }
            if let Some(comment) = line.strip_prefix('#') {
                out.stdout
                    .push_str(&format!("[{}] # {}\n", num, comment.trim_start()));
                continue;
            }

            out.stdout.push_str(&format!("[{}] {}\n", num, line));
            if let Some(result) = self.dispatch(line).await {
                out.stdout.push_str(&result.stdout);
                out.stderr.push_str(&result.stderr);
                if result.exit_code != 0 {
                    out.exit_code = result.exit_code;
                }
                if result.terminate {
                    out.terminated = true;
                    break;
                }
            }
            out.stdout.push('\n');
        }

        out
    }

    /// Interactive prompt loop. End-of-input ends the session gracefully; an
    /// interrupt during input is converted to a hint, not a termination.
    pub async fn run_interactive(&mut self) -> std::io::Result<()> {
        self.session.interactive = true;
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            print!("{}", self.prompt());
            std::io::stdout().flush()?;

            tokio::select! {
                line = lines.next_line() => {
                    match line? {
                        Some(input) => {
                            if let Some(result) = self.dispatch(&input).await {
                                print!("{}", result.stdout);
                                eprint!("{}", result.stderr);
                                if result.terminate {
                                    break;
                                }
                            }
                        }
                        None => {
                            println!();
                            break;
                        }
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    println!();
                    println!("type 'exit' or 'quit' to leave");
                }
            }
        }
        Ok(())
    }

    /// Single entry point for the CLI boundary: run the optional startup
    /// script, then (unless it terminated the session) the interactive loop.
    pub async fn run(&mut self, script: Option<&[String]>) -> std::io::Result<()> {
        if let Some(lines) = script {
            let result = self.run_script(lines).await;
            print!("{}", result.stdout);
            eprint!("{}", result.stderr);
            if result.terminated {
                return Ok(());
            }
        }
        self.run_interactive().await
    }
}

// ============================================================================
// Tests
// ============================================================================
