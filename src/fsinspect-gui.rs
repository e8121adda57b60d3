//! File Inspector GUI Application
//!
//! A small egui application that shows the details of a single filesystem
//! object. The size rows are interactive labels: hovering underlines them
//! when a detail popup is available, and clicking shows the exact byte
//! count in a one-entry popup menu.
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `io/` - Filesystem metadata lookup
//! - `state/` - Inspected-file state
//! - `ui/` - UI panel rendering

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod app;
mod io;
mod state;
mod ui;

use app::AppState;
use ui::header::HeaderInteraction;

const PREFERENCES_KEY: &str = "preferences";

/// Preferences persisted across sessions through eframe storage.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Preferences {
    /// Path inspected when the app was last closed
    last_path: Option<PathBuf>,
}

impl Preferences {
    /// Loads preferences from storage, falling back to defaults.
    fn load(storage: Option<&dyn eframe::Storage>) -> Self {
        storage
            .and_then(|storage| storage.get_string(PREFERENCES_KEY))
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default()
    }

    /// Saves preferences to storage as a JSON string.
    fn save(&self, storage: &mut dyn eframe::Storage) {
        if let Ok(json) = serde_json::to_string(self) {
            storage.set_string(PREFERENCES_KEY, json);
            storage.flush();
        }
    }
}

/// Main application entry point that initializes and launches the inspector GUI.
fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Parse command-line arguments to check for an initial path to inspect
    let initial_path = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 320.0])
            .with_title("File Inspector"),
        ..Default::default()
    };

    eframe::run_native(
        "File Inspector",
        options,
        Box::new(move |cc| Ok(Box::new(InspectorApp::new(cc, initial_path)))),
    )
}

/// The main File Inspector application.
struct InspectorApp {
    /// Centralized application state
    state: AppState,
    /// Optional path to inspect on first frame
    pending_path: Option<PathBuf>,
}

impl InspectorApp {
    /// Creates a new inspector instance. An explicit command-line path wins
    /// over the last inspected path restored from persistent storage.
    fn new(cc: &eframe::CreationContext, initial_path: Option<PathBuf>) -> Self {
        let preferences = Preferences::load(cc.storage);
        let pending_path = initial_path.or(preferences.last_path);

        Self {
            state: AppState::new(),
            pending_path,
        }
    }
}

impl eframe::App for InspectorApp {
    /// Called when the app is being shut down - remembers the inspected path.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let preferences = Preferences {
            last_path: self.state.file.path().map(|p| p.to_path_buf()),
        };
        preferences.save(storage);
    }

    /// Main update loop that renders the header and details panels.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Inspect the initial path if one was given (only on first frame)
        if let Some(path) = self.pending_path.take() {
            self.state.open_path(&path);
        }

        let mut interaction = None;
        egui::TopBottomPanel::top("header_panel").show(ctx, |ui| {
            interaction = ui::header::render_header(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui::details_panel::render_details_panel(ui, &mut self.state);
        });

        if let Some(HeaderInteraction::OpenFileRequested(path)) = interaction {
            self.state.open_path(&path);
        }
    }
}
