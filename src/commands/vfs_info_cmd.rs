// src/commands/vfs_info_cmd.rs
use async_trait::async_trait;
use chrono::{DateTime, Local};

use crate::commands::{Command, CommandResult};
use crate::shell::Session;

pub struct VfsInfoCommand;

#[async_trait]
impl Command for VfsInfoCommand {
    fn name(&self) -> &'static str {
        "vfs-info"
    }

    async fn execute(&self, session: &mut Session, _args: &[String]) -> CommandResult {
        let info = match session.vfs.info() {
            Ok(info) => info,
            Err(e) => return CommandResult::error(format!("vfs-info: {}\n", e)),
        };

        let modified: DateTime<Local> = info.modified.into();
        let stdout = format!(
            "Name:         {}\n\
             Source:       {}\n\
             Fingerprint:  {}\n\
             Entries:      {} ({} files, {} directory markers)\n\
             Size:         {} bytes\n\
             Modified:     {}\n",
            info.name,
            info.source_path,
            info.fingerprint,
            info.total_entries,
            info.file_count,
            info.dir_count,
            info.size_bytes,
            modified.format("%Y-%m-%d %H:%M:%S"),
        );
        CommandResult::success(stdout)
    }
}
