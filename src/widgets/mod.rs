//! Reusable egui widgets for the file inspector.

pub mod size_label;

pub use size_label::SizeLabel;
