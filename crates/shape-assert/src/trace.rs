//! Trace output for successfully compared nodes.

use std::sync::atomic::{AtomicBool, Ordering};

static TRACE_LOGGING: AtomicBool = AtomicBool::new(false);

/// Routes trace output to the `log` facade for comparisons that configure no
/// sink of their own. Off by default.
pub fn set_trace_logging(enabled: bool) {
    TRACE_LOGGING.store(enabled, Ordering::Relaxed);
}

/// Returns the current process-wide trace toggle.
pub fn trace_logging() -> bool {
    TRACE_LOGGING.load(Ordering::Relaxed)
}

/// Receives one line per successfully compared node.
///
/// Writes from concurrent comparisons sharing a sink are not synchronized by
/// the engine.
pub trait TraceSink {
    /// Writes one trace line.
    fn write(&self, line: &str);
}

/// Discards every line.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {
    fn write(&self, _line: &str) {}
}

/// Emits every line as a `debug` record under the `shape_assert` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl TraceSink for LogSink {
    fn write(&self, line: &str) {
        log::debug!(target: "shape_assert", "{line}");
    }
}

impl<F: Fn(&str)> TraceSink for F {
    fn write(&self, line: &str) {
        self(line);
    }
}
