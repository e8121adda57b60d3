//! State management modules for the file inspector.
//!
//! This module contains state-only logic (no UI concerns):
//! - File state (inspected path, metadata, size labels)

mod file_state;

pub use file_state::FileState;
