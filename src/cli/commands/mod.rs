pub mod config;
pub mod consolidate;
pub mod groups;
pub mod init;
