// src/commands/ls_cmd.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandResult};
use crate::shell::Session;

pub struct LsCommand;

#[async_trait]
impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    async fn execute(&self, session: &mut Session, args: &[String]) -> CommandResult {
        let dir = args.first().map(|s| s.as_str());

        // NotLoaded and an empty listing get distinct reports.
        let names = match session.vfs.list_files(dir) {
            Ok(names) => names,
            Err(e) => return CommandResult::error(format!("ls: {}\n", e)),
        };

        if names.is_empty() {
            return CommandResult::success("(empty directory)\n".to_string());
        }

        let mut stdout = String::new();
        for name in &names {
            // Directory-ness is re-derived per entry; the listing itself does
            // not segregate files from directories.
            let candidate = match dir {
                Some(d) => format!("{}/{}", d.trim_end_matches('/'), name),
                None => name.clone(),
            };
            if session.vfs.is_directory(&candidate) {
                stdout.push_str(&format!("{}/\n", name));
            } else {
                stdout.push_str(&format!("{}\n", name));
            }
        }
        CommandResult::success(stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::{ArchiveEntry, VirtualFs};

    fn make_session(files: Vec<(&str, &[u8])>) -> Session {
        let entries = files
            .into_iter()
            .map(|(p, c)| ArchiveEntry::new(p, c.to_vec()))
            .collect();
        Session::new(VirtualFs::from_entries("test.zip", entries))
    }

    #[tokio::test]
    async fn test_ls_root_decorates_directories() {
        let mut session = make_session(vec![
            ("readme.txt", b"hi".as_slice()),
            ("documents/doc1.txt", b"x".as_slice()),
        ]);
        let result = LsCommand.execute(&mut session, &[]).await;
        assert_eq!(result.stdout, "documents/\nreadme.txt\n");
        assert_eq!(result.exit_code, 0);
    }

    #[tokio::test]
    async fn test_ls_explicit_directory_argument() {
        let mut session = make_session(vec![
            ("documents/doc1.txt", b"x".as_slice()),
            ("documents/notes/todo.txt", b"y".as_slice()),
        ]);
        let args = vec!["documents".to_string()];
        let result = LsCommand.execute(&mut session, &args).await;
        assert_eq!(result.stdout, "doc1.txt\nnotes/\n");
    }

    #[tokio::test]
    async fn test_ls_empty_directory_message() {
        let mut session = make_session(vec![("logs/", b"".as_slice())]);
        session.vfs.change_directory("logs").unwrap();
        let result = LsCommand.execute(&mut session, &[]).await;
        assert_eq!(result.stdout, "(empty directory)\n");
    }

    #[tokio::test]
    async fn test_ls_not_loaded_is_distinct_from_empty() {
        let mut session = Session::new(VirtualFs::new());
        let result = LsCommand.execute(&mut session, &[]).await;
        assert_eq!(result.exit_code, 1);
        assert!(result.stderr.contains("not loaded"));
        assert!(result.stdout.is_empty());
    }
}
