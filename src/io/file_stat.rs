//! Filesystem metadata lookup for the inspector.
//!
//! Reads the metadata of a single path (without following symlinks) into a
//! plain [`FileInfo`] value that the UI can render.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Kind of filesystem object, as far as the details panel cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    File,
    Directory,
    Symlink,
    Other,
}

impl FileKind {
    /// Returns the display name for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            FileKind::File => "File",
            FileKind::Directory => "Directory",
            FileKind::Symlink => "Symbolic Link",
            FileKind::Other => "Special",
        }
    }
}

/// Metadata of one inspected path.
#[derive(Debug, Clone)]
pub struct FileInfo {
    /// Final path component, or the full path when there is none
    pub name: String,
    /// Filesystem object kind
    pub kind: FileKind,
    /// Logical size in bytes
    pub size: i64,
    /// Allocated size in bytes (block count based where available)
    pub allocated: i64,
    /// Number of hard links to this object
    pub hard_links: u64,
}

/// Reads the metadata of `path` without following symlinks.
///
/// # Errors
/// Fails when the path does not exist or its metadata cannot be read.
pub fn stat_path(path: &Path) -> Result<FileInfo> {
    let metadata = fs::symlink_metadata(path)
        .with_context(|| format!("reading metadata for {}", path.display()))?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let file_type = metadata.file_type();
    let kind = if file_type.is_symlink() {
        FileKind::Symlink
    } else if file_type.is_dir() {
        FileKind::Directory
    } else if file_type.is_file() {
        FileKind::File
    } else {
        FileKind::Other
    };

    Ok(FileInfo {
        name,
        kind,
        size: metadata.len() as i64,
        allocated: allocated_size(&metadata),
        hard_links: hard_link_count(&metadata),
    })
}

/// Returns the allocated size in bytes.
///
/// On unix this is the block count times 512 (the stat block unit, not the
/// filesystem block size); elsewhere the logical size is the best we have.
#[cfg(unix)]
fn allocated_size(metadata: &fs::Metadata) -> i64 {
    use std::os::unix::fs::MetadataExt;
    (metadata.blocks() * 512) as i64
}

#[cfg(not(unix))]
fn allocated_size(metadata: &fs::Metadata) -> i64 {
    metadata.len() as i64
}

#[cfg(unix)]
fn hard_link_count(metadata: &fs::Metadata) -> u64 {
    use std::os::unix::fs::MetadataExt;
    metadata.nlink()
}

#[cfg(not(unix))]
fn hard_link_count(_metadata: &fs::Metadata) -> u64 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    #[test]
    fn test_stat_regular_file() -> Result<()> {
        let path = env::temp_dir().join("fsinspect_stat_test.bin");
        fs::write(&path, vec![0u8; 2048])?;

        let info = stat_path(&path)?;
        assert_eq!(info.kind, FileKind::File);
        assert_eq!(info.size, 2048);
        assert_eq!(info.name, "fsinspect_stat_test.bin");
        assert!(info.hard_links >= 1);

        fs::remove_file(&path)?;
        Ok(())
    }

    #[test]
    fn test_stat_directory() -> Result<()> {
        let info = stat_path(&env::temp_dir())?;
        assert_eq!(info.kind, FileKind::Directory);
        Ok(())
    }

    #[test]
    fn test_stat_missing_path_is_error() {
        let path = env::temp_dir().join("fsinspect_does_not_exist");
        assert!(stat_path(&path).is_err());
    }
}
