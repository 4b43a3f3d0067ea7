// src/commands/mod.rs
pub mod cat_cmd;
pub mod cd_cmd;
pub mod clear_cmd;
pub mod exit_cmd;
pub mod help_cmd;
pub mod history_cmd;
pub mod ls_cmd;
pub mod pwd_cmd;
pub mod registry;
pub mod tail_cmd;
pub mod types;
pub mod vfs_info_cmd;
pub mod whoami_cmd;

pub use registry::{builtin_registry, CommandRegistry};
pub use types::{Command, CommandResult};
