//! Demo asset generation for the `--demo` flag: a small ZIP archive covering
//! nested inferred directories, an explicit marker and a binary entry, plus a
//! startup script that exercises every verb.

use std::path::{Path, PathBuf};

use crate::vfs::archive::build_archive;
use crate::vfs::ArchiveEntry;

const DEMO_ARCHIVE: &str = "demo.zip";
const DEMO_SCRIPT: &str = "demo.sh";

fn demo_entries() -> Vec<ArchiveEntry> {
    vec![
        ArchiveEntry::new("readme.txt", b"A\nB\nC".to_vec()),
        ArchiveEntry::new(
            "documents/doc1.txt",
            b"first document\nwith two lines\n".to_vec(),
        ),
        ArchiveEntry::new("documents/doc2.txt", b"second document\n".to_vec()),
        ArchiveEntry::new("documents/notes/todo.txt", b"ship it\n".to_vec()),
        ArchiveEntry::new("logs/", Vec::new()),
        ArchiveEntry::new("data/blob.bin", vec![0x00, 0xde, 0xad, 0xbe, 0xef, 0x9c]),
    ]
}

const DEMO_SCRIPT_TEXT: &str = "\
# demo script: walks the archive and pokes every verb
help
vfs-info
ls
cd documents
pwd
ls
cat doc1.txt
tail /readme.txt 2

# errors are reported but do not stop the run
cd reports
cat data/blob.bin
nosuchverb

cd /
whoami
history
";

/// Write `demo.zip` and `demo.sh` into `dir`, returning both paths.
pub fn write_demo_assets(dir: &Path) -> std::io::Result<(PathBuf, PathBuf)> {
    let archive_path = dir.join(DEMO_ARCHIVE);
    let script_path = dir.join(DEMO_SCRIPT);
    std::fs::write(&archive_path, build_archive(&demo_entries()))?;
    std::fs::write(&script_path, DEMO_SCRIPT_TEXT)?;
    Ok((archive_path, script_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::archive::parse_archive;

    #[test]
    fn test_demo_entries_round_trip_through_container() {
        let parsed = parse_archive(&build_archive(&demo_entries())).unwrap();
        assert_eq!(parsed.len(), demo_entries().len());
        assert!(parsed.iter().any(|e| e.path == "documents/notes/todo.txt"));
        assert!(parsed.iter().any(|e| e.is_dir_marker()));
    }

    #[test]
    fn test_demo_script_has_comments_and_blanks() {
        assert!(DEMO_SCRIPT_TEXT.lines().any(|l| l.trim_start().starts_with('#')));
        assert!(DEMO_SCRIPT_TEXT.lines().any(|l| l.trim().is_empty()));
    }
}
