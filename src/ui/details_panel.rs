//! Details panel UI rendering
//!
//! Handles the central panel showing name, type and size rows for the
//! inspected filesystem object. The size rows are interactive
//! [`fsinspect::SizeLabel`] widgets with hover underline and detail popups.

use eframe::egui;
use egui::RichText;

use crate::app::AppState;

/// Renders the details panel for the currently inspected path
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state (labels hold
///   per-frame hover and popup state)
pub fn render_details_panel(ui: &mut egui::Ui, state: &mut AppState) {
    if let Some(error) = &state.error_message {
        ui.colored_label(ui.visuals().error_fg_color, error);
        return;
    }

    let Some(info) = state.file.info().cloned() else {
        ui.label("Open a file or folder to inspect it");
        return;
    };
    let path_text = state
        .file
        .path()
        .map(|p| p.display().to_string())
        .unwrap_or_default();

    ui.label(RichText::new(&info.name).strong());
    ui.separator();

    egui::Grid::new("file_details_grid")
        .num_columns(2)
        .spacing([12.0, 4.0])
        .show(ui, |ui| {
            ui.label("Type:");
            ui.label(info.kind.as_str());
            ui.end_row();

            ui.label("Path:");
            ui.label(path_text);
            ui.end_row();

            let (size_label, allocated_label) = state.file.labels_mut();

            ui.label("Size:");
            size_label.show(ui);
            ui.end_row();

            ui.label("Allocated:");
            allocated_label.show(ui);
            ui.end_row();

            if info.hard_links > 1 {
                ui.label("Links:");
                ui.label(info.hard_links.to_string());
                ui.end_row();
            }
        });
}
