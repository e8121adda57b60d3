//! Centralized application state for the file inspector.
//!
//! Composes focused state components so that each aspect of the
//! application's state keeps its invariants local.

use std::path::Path;

use crate::io::stat_path;
use crate::state::FileState;

/// Main application state composed of focused state components.
pub struct AppState {
    /// Inspected file state (path, metadata, size labels)
    pub file: FileState,

    /// Current error message to display (if any)
    pub error_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new application state with nothing inspected.
    pub fn new() -> Self {
        Self {
            file: FileState::new(),
            error_message: None,
        }
    }

    // ===== High-Level Coordination Methods =====

    /// Stats `path` and updates the file state.
    ///
    /// On failure the previous file state is cleared and the error message
    /// is kept for the UI to display.
    pub fn open_path(&mut self, path: &Path) {
        match stat_path(path) {
            Ok(info) => {
                tracing::info!("inspecting {}", path.display());
                self.error_message = None;
                self.file.set_info(path.to_path_buf(), info);
            }
            Err(err) => {
                tracing::warn!("failed to stat {}: {err:#}", path.display());
                self.error_message = Some(format!("{err:#}"));
                self.file.clear();
            }
        }
    }
}
