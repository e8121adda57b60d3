//! Header panel UI rendering
//!
//! Handles the top bar with the file-open control.

use eframe::egui;
use std::path::PathBuf;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User picked a path to inspect
    OpenFileRequested(PathBuf),
}

/// Renders the application header with the file-open controls
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        if ui.button("📁 Open File").clicked() {
            let mut dialog = rfd::FileDialog::new();
            if let Ok(cwd) = std::env::current_dir() {
                dialog = dialog.set_directory(cwd);
            }

            if let Some(path) = dialog.pick_file() {
                interaction = Some(HeaderInteraction::OpenFileRequested(path));
            }
        }

        if ui.button("📂 Open Folder").clicked() {
            if let Some(path) = rfd::FileDialog::new().pick_folder() {
                interaction = Some(HeaderInteraction::OpenFileRequested(path));
            }
        }
    });

    interaction
}
