//! Debug-trace sink abstraction for widgets.
//!
//! Widgets do not log through a global facility directly; they receive a
//! trace sink at construction time. The default sink forwards to the
//! `tracing` crate, while headless code and tests can substitute a no-op
//! or recording sink.

/// Fire-and-forget sink for ad-hoc debug messages.
pub trait TraceSink {
    /// Emits a debug-level message. No return value, never fails.
    fn debug(&self, message: &str);
}

/// Default sink forwarding messages to [`tracing::debug!`].
#[derive(Debug, Default)]
pub struct TracingSink;

impl TraceSink for TracingSink {
    fn debug(&self, message: &str) {
        tracing::debug!("{message}");
    }
}

/// Sink that discards all messages.
#[derive(Debug, Default)]
pub struct NullSink;

impl TraceSink for NullSink {
    fn debug(&self, _message: &str) {}
}
