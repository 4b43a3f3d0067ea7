//! Virtual File System Module
//!
//! Read-only, archive-backed virtual filesystem: ZIP container parsing plus
//! the navigable directory view inferred from the flat entry namespace.

pub mod archive;
pub mod types;
pub mod virtual_fs;

pub use types::*;
pub use virtual_fs::{LoadReport, VirtualFs, UNLOADED_NAME};
