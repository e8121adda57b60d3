//! Inspected-file state management.
//!
//! This module encapsulates the currently inspected path, its metadata and
//! the size label widgets derived from it.

use std::path::{Path, PathBuf};

use fsinspect::formatting::{format_byte_size, format_size};
use fsinspect::SizeLabel;

use crate::io::FileInfo;

/// State for the currently inspected filesystem object.
///
/// Responsibilities:
/// - Tracking the inspected path and its metadata
/// - Keeping the Size and Allocated label widgets in sync with the metadata
pub struct FileState {
    /// Path currently inspected
    path: Option<PathBuf>,
    /// Metadata of the inspected path
    info: Option<FileInfo>,
    /// Label widget for the logical size row
    size_label: SizeLabel,
    /// Label widget for the allocated size row
    allocated_label: SizeLabel,
}

impl Default for FileState {
    fn default() -> Self {
        Self::new()
    }
}

impl FileState {
    /// Creates a new file state with nothing inspected.
    pub fn new() -> Self {
        Self {
            path: None,
            info: None,
            size_label: SizeLabel::new(),
            allocated_label: SizeLabel::new(),
        }
    }

    /// Clears the inspected path, metadata and both labels.
    pub fn clear(&mut self) {
        self.path = None;
        self.info = None;
        self.size_label.clear();
        self.allocated_label.clear();
    }

    // ===== Queries =====

    /// Returns the inspected path, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns the metadata of the inspected path, if any.
    pub fn info(&self) -> Option<&FileInfo> {
        self.info.as_ref()
    }

    // ===== Mutations =====

    /// Stores freshly read metadata and updates both size labels.
    ///
    /// The Size row always shows the plain formatted size. The Allocated
    /// row normally does too, but for multiply hard-linked objects it shows
    /// a composite `"<size> / <n> links"` text with a popup override that
    /// spells out the byte count and link count.
    pub fn set_info(&mut self, path: PathBuf, info: FileInfo) {
        self.size_label.set_value(info.size, "");

        if info.hard_links > 1 {
            let text = format!(
                "{} / {} links",
                format_size(info.allocated),
                info.hard_links
            );
            self.allocated_label.set_text(&text, info.allocated, "");
            self.allocated_label.set_context_text(&format!(
                "{} in {} links",
                format_byte_size(info.allocated),
                info.hard_links
            ));
        } else {
            self.allocated_label.set_value(info.allocated, "");
        }

        self.path = Some(path);
        self.info = Some(info);
    }

    // ===== Low-Level Accessors (for UI handlers) =====

    /// Returns mutable references to both labels for rendering
    /// (splits borrows).
    ///
    /// # Returns
    /// Tuple of (size label, allocated label)
    pub(crate) fn labels_mut(&mut self) -> (&mut SizeLabel, &mut SizeLabel) {
        (&mut self.size_label, &mut self.allocated_label)
    }
}
