//! Per-invocation trace of cipher stages.

use core::fmt;

use crate::state::State;

/// Ordered, append-only record of the stages one cipher invocation went through.
///
/// Every [`encrypt`](crate::encrypt) or [`decrypt`](crate::decrypt) call builds and
/// returns its own trace; nothing is shared between invocations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Trace {
    lines: Vec<String>,
    silent: bool,
}

impl Trace {
    /// Creates an empty, recording trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// A trace that discards everything, used by the untraced block functions.
    pub(crate) fn silent() -> Self {
        Self {
            lines: Vec::new(),
            silent: true,
        }
    }

    /// Appends a line.
    pub fn record(&mut self, line: impl fmt::Display) {
        if !self.silent {
            self.lines.push(line.to_string());
        }
    }

    /// Appends `label: XXXX`.
    pub(crate) fn record_state(&mut self, label: impl fmt::Display, state: &State) {
        if !self.silent {
            self.lines.push(format!("{label}: {state}"));
        }
    }

    /// Appends `label: XXXX (bbbbbbbbbbbbbbbb)`.
    pub(crate) fn record_state_bits(&mut self, label: impl fmt::Display, state: &State) {
        if !self.silent {
            self.lines.push(format!("{label}: {state} ({state:b})"));
        }
    }

    /// Recorded lines in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Iterates over the recorded lines.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Number of recorded lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Consumes the trace, returning its lines.
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

/// One line per recorded entry.
impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}
