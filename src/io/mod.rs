//! Filesystem access for the file inspector.

pub mod file_stat;

pub use file_stat::{stat_path, FileInfo, FileKind};
