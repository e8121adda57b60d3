//! Interactive label widget for file size values.
//!
//! This module provides [`SizeLabel`], a label that renders a byte count
//! with an optional prefix, underlines itself on hover when a detail popup
//! is available, and shows a single-entry popup with the full byte count
//! on left or right click.

use egui::{CursorIcon, Pos2, Sense, Stroke};

use crate::formatting::{format_byte_size, format_size};
use crate::trace::{TraceSink, TracingSink};

/// Sentinel value meaning "no size set".
pub const UNSET: i64 = -1;

/// Sizes below this threshold get no detail popup; a popup doesn't make
/// sense below 1 kB where the label already shows the exact byte count.
const CONTEXT_MENU_THRESHOLD: i64 = 1024;

/// Label widget displaying a file size with optional prefix text.
///
/// Responsibilities:
/// - Storing a byte count, prefix and the derived display text
/// - Deciding whether a detail popup is available
/// - Rendering itself with a hover underline and a click popup
///
/// The widget owns its state across frames (immediate-mode egui re-renders
/// every frame, so popup-open and hover state must persist here).
pub struct SizeLabel {
    /// Byte count shown by the label; [`UNSET`] when empty
    value: i64,
    /// Text prepended before the formatted size
    prefix: String,
    /// Optional popup override; non-empty also forces the popup on
    context_text: String,
    /// The text currently displayed
    text: String,
    /// Whether the pointer was over the label last frame
    hovered: bool,
    /// Whether the detail popup is currently open
    menu_open: bool,
    /// Screen position the popup is anchored at
    menu_pos: Pos2,
    /// Debug-trace sink injected at construction
    sink: Box<dyn TraceSink>,
}

impl Default for SizeLabel {
    fn default() -> Self {
        Self::new()
    }
}

impl SizeLabel {
    /// Creates an empty size label tracing through the `tracing` crate.
    pub fn new() -> Self {
        Self::with_sink(Box::new(TracingSink))
    }

    /// Creates an empty size label with a custom debug-trace sink.
    pub fn with_sink(sink: Box<dyn TraceSink>) -> Self {
        Self {
            value: UNSET,
            prefix: String::new(),
            context_text: String::new(),
            text: String::new(),
            hovered: false,
            menu_open: false,
            menu_pos: Pos2::ZERO,
            sink,
        }
    }

    // ===== Mutations =====

    /// Resets the label to its empty state: value unset, prefix, context
    /// text and display text cleared, popup closed.
    pub fn clear(&mut self) {
        self.value = UNSET;
        self.prefix.clear();
        self.context_text.clear();
        self.text.clear();
        self.menu_open = false;
    }

    /// Sets the size value and prefix, recomputing the display text.
    ///
    /// A negative value is treated as "unset" and clears the display text;
    /// otherwise the text becomes `prefix + format_size(value)`.
    pub fn set_value(&mut self, value: i64, prefix: &str) {
        self.value = value;
        self.prefix = prefix.to_string();

        if self.value < 0 {
            self.text.clear();
        } else {
            self.text = format!("{}{}", self.prefix, format_size(self.value));
        }
    }

    /// Sets the display text to a literal string, bypassing the formatter.
    ///
    /// The value and prefix are still stored for later popup use, and any
    /// custom context text is cleared. Use this when the caller already has
    /// a pre-formatted or composite string.
    pub fn set_text(&mut self, text: &str, value: i64, prefix: &str) {
        self.value = value;
        self.prefix = prefix.to_string();
        self.context_text.clear();

        self.text = text.to_string();
    }

    /// Sets a custom popup entry text, overriding the recomputed byte size.
    ///
    /// A non-empty override also makes the popup available regardless of
    /// the stored value.
    pub fn set_context_text(&mut self, text: &str) {
        self.context_text = text.to_string();
    }

    // ===== Queries =====

    /// Returns the stored byte count ([`UNSET`] when empty).
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Returns the stored prefix text.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the custom popup override text (empty when none).
    pub fn context_text(&self) -> &str {
        &self.context_text
    }

    /// Returns the currently displayed text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns true if the label has a detail popup to show.
    ///
    /// This is the case when a custom context text is set, or when the
    /// stored value is at least 1 kB.
    pub fn have_context_menu(&self) -> bool {
        if !self.context_text.is_empty() {
            return true;
        }
        self.value >= CONTEXT_MENU_THRESHOLD
    }

    // ===== Rendering =====

    /// Renders the label and handles hover and click events.
    ///
    /// When a detail popup is available the label is underlined on hover,
    /// and a left or right click opens a single-entry popup at the pointer
    /// position. The popup stays open until its entry is clicked or a click
    /// lands elsewhere.
    pub fn show(&mut self, ui: &mut egui::Ui) -> egui::Response {
        let font_id = egui::TextStyle::Body.resolve(ui.style());
        let color = ui.visuals().text_color();
        let galley = ui
            .painter()
            .layout_no_wrap(self.text.clone(), font_id, color);

        // Reserve at least one line of height so empty labels keep the row
        let size = egui::vec2(
            galley.size().x,
            galley
                .size()
                .y
                .max(ui.text_style_height(&egui::TextStyle::Body)),
        );
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        if ui.is_rect_visible(rect) {
            ui.painter().galley(rect.min, galley, color);
        }

        self.update_hover(response.hovered());

        if response.hovered() && self.have_context_menu() {
            // Hover affordance: underline plus pointing-hand cursor
            let y = rect.bottom() - 1.0;
            ui.painter().line_segment(
                [Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)],
                Stroke::new(1.0, color),
            );
            ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
        }

        let just_opened = (response.clicked() || response.secondary_clicked())
            && self.have_context_menu();
        if just_opened {
            self.menu_open = true;
            self.menu_pos = response
                .interact_pointer_pos()
                .unwrap_or_else(|| rect.left_bottom());
        }

        if self.menu_open {
            let (entry_clicked, clicked_elsewhere) =
                self.render_context_menu(ui.ctx(), response.id);
            // The click that opened the popup is outside it; only close on
            // "elsewhere" clicks from later frames
            if entry_clicked || (clicked_elsewhere && !just_opened) {
                self.menu_open = false;
            }
        }

        response
    }

    /// Emits enter/leave debug traces on hover transitions.
    fn update_hover(&mut self, hovered: bool) {
        if hovered == self.hovered {
            return;
        }
        self.hovered = hovered;

        if hovered {
            self.sink
                .debug(&format!("entering size label \"{}\"", self.text));
            if !self.have_context_menu() {
                self.sink
                    .debug(&format!("no context menu for \"{}\"", self.text));
            }
        } else {
            self.sink
                .debug(&format!("leaving size label \"{}\"", self.text));
        }
    }

    /// Draws the single-entry popup anchored at the stored pointer position.
    ///
    /// # Returns
    /// Tuple of (entry was clicked, a click landed outside the popup)
    fn render_context_menu(&self, ctx: &egui::Context, id: egui::Id) -> (bool, bool) {
        let entry = if self.context_text.is_empty() {
            format!("{}{}", self.prefix, format_byte_size(self.value))
        } else {
            self.context_text.clone()
        };

        let area_response = egui::Area::new(id.with("size_label_menu"))
            .order(egui::Order::Foreground)
            .fixed_pos(self.menu_pos)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style())
                    .show(ui, |ui| ui.button(entry).clicked())
                    .inner
            });

        let entry_clicked = area_response.inner;
        let clicked_elsewhere = area_response.response.clicked_elsewhere();
        (entry_clicked, clicked_elsewhere)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::NullSink;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Sink recording every message for later inspection.
    struct RecordingSink {
        messages: Rc<RefCell<Vec<String>>>,
    }

    impl TraceSink for RecordingSink {
        fn debug(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }
    }

    fn recording_label() -> (SizeLabel, Rc<RefCell<Vec<String>>>) {
        let messages = Rc::new(RefCell::new(Vec::new()));
        let label = SizeLabel::with_sink(Box::new(RecordingSink {
            messages: Rc::clone(&messages),
        }));
        (label, messages)
    }

    fn test_label() -> SizeLabel {
        SizeLabel::with_sink(Box::new(NullSink))
    }

    #[test]
    fn test_new_label_is_empty() {
        let label = test_label();
        assert_eq!(label.value(), UNSET);
        assert_eq!(label.prefix(), "");
        assert_eq!(label.context_text(), "");
        assert_eq!(label.text(), "");
        assert!(!label.have_context_menu());
    }

    #[test]
    fn test_set_value_formats_display_text() {
        let mut label = test_label();
        label.set_value(2048, "Size: ");
        assert_eq!(label.text(), format!("Size: {}", format_size(2048)));
        assert_eq!(label.text(), "Size: 2.0 kB");
        assert_eq!(label.value(), 2048);
        assert_eq!(label.prefix(), "Size: ");
    }

    #[test]
    fn test_set_value_negative_clears_text() {
        let mut label = test_label();
        label.set_value(4096, "Size: ");
        label.set_value(-1, "Size: ");
        assert_eq!(label.text(), "");
        assert_eq!(label.value(), -1);
        assert!(!label.have_context_menu());
    }

    #[test]
    fn test_context_menu_threshold() {
        let mut label = test_label();

        // Unset and sub-kilobyte values get no popup
        label.set_value(-1, "");
        assert!(!label.have_context_menu());
        label.set_value(0, "");
        assert!(!label.have_context_menu());
        label.set_value(1023, "");
        assert!(!label.have_context_menu());

        // At and above 1 kB the popup is available
        label.set_value(1024, "");
        assert!(label.have_context_menu());
        label.set_value(i64::MAX, "");
        assert!(label.have_context_menu());
    }

    #[test]
    fn test_context_text_forces_menu() {
        let mut label = test_label();
        label.set_value(100, "");
        assert!(!label.have_context_menu());

        label.set_context_text("99 Bytes uncompressed");
        assert!(label.have_context_menu());
        assert_eq!(label.context_text(), "99 Bytes uncompressed");
    }

    #[test]
    fn test_set_text_bypasses_formatter_and_clears_context() {
        let mut label = test_label();
        label.set_context_text("stale override");

        label.set_text("custom", 500, "");
        assert_eq!(label.text(), "custom");
        assert_eq!(label.value(), 500);
        assert_eq!(label.context_text(), "");
        // 500 < 1024 and no override, so no popup despite the custom text
        assert!(!label.have_context_menu());
    }

    #[test]
    fn test_set_text_keeps_value_for_menu() {
        let mut label = test_label();
        label.set_text("1.0 kB / 3 links", 1024, "Allocated: ");
        assert_eq!(label.text(), "1.0 kB / 3 links");
        assert!(label.have_context_menu());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut label = test_label();
        label.set_value(4096, "Size: ");
        label.set_context_text("override");

        label.clear();
        assert_eq!(label.value(), UNSET);
        assert_eq!(label.prefix(), "");
        assert_eq!(label.context_text(), "");
        assert_eq!(label.text(), "");
        assert!(!label.have_context_menu());
    }

    #[test]
    fn test_hover_transitions_emit_traces() {
        let (mut label, messages) = recording_label();
        label.set_value(4096, "");

        label.update_hover(true);
        label.update_hover(true); // no transition, no trace
        label.update_hover(false);

        let messages = messages.borrow();
        assert_eq!(messages.len(), 2);
        assert!(messages[0].starts_with("entering size label"));
        assert!(messages[1].starts_with("leaving size label"));
    }

    #[test]
    fn test_hover_without_menu_traces_absence() {
        let (mut label, messages) = recording_label();
        label.set_value(100, "");

        label.update_hover(true);

        let messages = messages.borrow();
        assert_eq!(messages.len(), 2);
        assert!(messages[0].starts_with("entering size label"));
        assert!(messages[1].starts_with("no context menu"));
    }
}
