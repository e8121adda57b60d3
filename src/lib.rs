pub mod formatting;
pub mod trace;
pub mod widgets;

// Export formatting helpers
pub use formatting::{format_byte_size, format_size, insert_thousands_separators};

// Export trace sink abstraction
pub use trace::{NullSink, TraceSink, TracingSink};

// Export widgets
pub use widgets::SizeLabel;
