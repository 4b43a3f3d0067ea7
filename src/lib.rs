//! zipsh - a shell over a ZIP-backed virtual filesystem
//!
//! Presents the flat entry list of a read-only ZIP archive as a navigable
//! directory tree, with a small command interpreter (interactive or scripted)
//! on top of it.

pub mod commands;
pub mod demo;
pub mod shell;
pub mod vfs;

pub use shell::{ExecResult, Session, Shell};
pub use vfs::{ArchiveEntry, VfsError, VfsInfo, VirtualFs};
