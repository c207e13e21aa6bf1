//! CLI commands for pagezettel

pub mod dispatch;
pub mod extract;
pub mod folders;
pub mod format;
pub mod init;
pub mod notice;
pub mod picker;
pub mod template;
