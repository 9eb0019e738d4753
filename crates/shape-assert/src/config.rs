//! Per-comparison options.

use std::fmt;

use crate::trace::TraceSink;

/// Options for a single comparison.
///
/// ```
/// use std::cell::RefCell;
///
/// use shape_assert::{AssertConfig, assert_equal_with};
///
/// let lines = RefCell::new(Vec::new());
/// let sink = |line: &str| lines.borrow_mut().push(line.to_owned());
/// let config = AssertConfig::default()
///     .with_message("totals")
///     .with_trace(&sink);
///
/// assert!(assert_equal_with(&1_i32, None, &1_i64, &config).is_err());
/// assert!(lines.borrow().is_empty());
/// ```
#[derive(Clone, Copy, Default)]
pub struct AssertConfig<'a> {
    /// Prefix for failure messages and trace lines.
    pub message: Option<&'a str>,
    /// Trace sink; `None` falls back to the process-wide toggle.
    pub trace: Option<&'a dyn TraceSink>,
}

impl<'a> AssertConfig<'a> {
    /// Sets the message.
    #[must_use]
    pub fn with_message(mut self, message: &'a str) -> Self {
        self.message = Some(message);
        self
    }

    /// Sets the trace sink.
    #[must_use]
    pub fn with_trace(mut self, trace: &'a dyn TraceSink) -> Self {
        self.trace = Some(trace);
        self
    }
}

impl fmt::Debug for AssertConfig<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssertConfig")
            .field("message", &self.message)
            .field("trace", &self.trace.is_some())
            .finish()
    }
}
