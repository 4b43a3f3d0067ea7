// src/commands/cat_cmd.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandResult};
use crate::shell::Session;

pub struct CatCommand;

#[async_trait]
impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }

    async fn execute(&self, session: &mut Session, args: &[String]) -> CommandResult {
        if args.len() != 1 {
            return CommandResult::error("Usage: cat <file>\n".to_string());
        }

        let content = match session.vfs.read_file(&args[0]) {
            Ok(c) => c,
            Err(e) => return CommandResult::error(format!("cat: {}\n", e)),
        };

        // Literal split: a trailing terminator produces a numbered empty
        // final line, matching the content's structure.
        let mut stdout = String::new();
        for (i, line) in content.split('\n').enumerate() {
            stdout.push_str(&format!("{:>6}\t{}\n", i + 1, line));
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
    async fn test_cat_numbers_every_line() {
        let mut session = make_session(vec![("readme.txt", b"A\nB\nC".as_slice())]);
        let args = vec!["readme.txt".to_string()];
        let result = CatCommand.execute(&mut session, &args).await;
        assert_eq!(result.stdout, "     1\tA\n     2\tB\n     3\tC\n");
        assert_eq!(result.exit_code, 0);
    }

    #[tokio::test]
    async fn test_cat_trailing_terminator_yields_numbered_empty_line() {
        let mut session = make_session(vec![("end.txt", b"A\nB\n".as_slice())]);
        let args = vec!["end.txt".to_string()];
        let result = CatCommand.execute(&mut session, &args).await;
        assert_eq!(result.stdout, "     1\tA\n     2\tB\n     3\t\n");
    }

    #[tokio::test]
    async fn test_cat_requires_exactly_one_argument() {
        let mut session = make_session(vec![("readme.txt", b"A".as_slice())]);
        let result = CatCommand.execute(&mut session, &[]).await;
        assert_eq!(result.exit_code, 1);
        assert!(result.stderr.contains("Usage: cat <file>"));

        let args = vec!["a".to_string(), "b".to_string()];
        let result = CatCommand.execute(&mut session, &args).await;
        assert!(result.stderr.contains("Usage: cat <file>"));
    }

    #[tokio::test]
    async fn test_cat_missing_vs_binary_messages() {
        let mut session = make_session(vec![("blob.bin", [0x00, 0x9c, 0xff].as_slice())]);

        let args = vec!["nope.txt".to_string()];
        let result = CatCommand.execute(&mut session, &args).await;
        assert!(result.stderr.contains("file not found"));

        let args = vec!["blob.bin".to_string()];
        let result = CatCommand.execute(&mut session, &args).await;
        assert!(result.stderr.contains("not a text file"));
    }
}
