//! Application-level modules for the file inspector.

mod app_state;

pub use app_state::AppState;
