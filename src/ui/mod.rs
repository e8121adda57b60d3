//! UI panel rendering subsystem
//!
//! This module contains all UI panel rendering logic for the file inspector:
//! - Header panel (file-open controls)
//! - Details panel (name, type and interactive size rows)

pub mod details_panel;
pub mod header;
