//! Structured JSON logger
//!
//! One event per line, rendered by hand so the key order is fixed: `event`
//! first, `severity` second, then the caller's fields sorted by name.
//! Identical runs therefore produce byte-identical log output. Writes are
//! synchronous and unbuffered.
//!
//! Stream routing follows the tool's surface rather than severity alone:
//! verdict lines belong to stdout, diagnostics to stderr. A failing
//! record's verdict is still a verdict and stays on stdout even though it
//! carries ERROR; the fatal diagnostic that follows it is what lands on
//! stderr.

use std::fmt::{self, Write as _};
use std::io::{self, Write};

/// Severity attached to every log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Progress lines and passing verdicts
    Info,
    /// Failing verdicts and operation failures
    Error,
    /// The run is about to exit non-zero
    Fatal,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renders one event as a single JSON line, trailing newline included.
fn render(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
    let mut line = String::with_capacity(128);
    line.push_str("{\"event\":\"");
    push_escaped(&mut line, event);
    line.push_str("\",\"severity\":\"");
    line.push_str(severity.as_str());
    line.push('"');

    let mut ordered: Vec<&(&str, &str)> = fields.iter().collect();
    ordered.sort_by_key(|(name, _)| *name);
    for (name, value) in ordered {
        line.push_str(",\"");
        push_escaped(&mut line, name);
        line.push_str("\":\"");
        push_escaped(&mut line, value);
        line.push('"');
    }

    line.push_str("}\n");
    line
}

/// JSON string escaping for the handful of characters that need it.
fn push_escaped(line: &mut String, raw: &str) {
    for ch in raw.chars() {
        match ch {
            '"' => line.push_str("\\\""),
            '\\' => line.push_str("\\\\"),
            '\n' => line.push_str("\\n"),
            '\r' => line.push_str("\\r"),
            '\t' => line.push_str("\\t"),
            _ if ch.is_control() => {
                let _ = write!(line, "\\u{:04x}", ch as u32);
            }
            _ => line.push(ch),
        }
    }
}

/// A structured logger that outputs JSON lines
pub struct Logger;

impl Logger {
    /// Progress line or passing verdict, on stdout.
    pub fn info(event: &str, fields: &[(&str, &str)]) {
        Self::emit(&mut io::stdout(), Severity::Info, event, fields);
    }

    /// Verdict line with an explicit severity, on stdout.
    pub fn verdict(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        Self::emit(&mut io::stdout(), severity, event, fields);
    }

    /// Last line before a non-zero exit, on stderr.
    pub fn fatal(event: &str, fields: &[(&str, &str)]) {
        Self::emit(&mut io::stderr(), Severity::Fatal, event, fields);
    }

    fn emit<W: Write>(writer: &mut W, severity: Severity, event: &str, fields: &[(&str, &str)]) {
        let line = render(severity, event, fields);
        // One write_all per line so interleaved streams stay line-atomic.
        let _ = writer.write_all(line.as_bytes());
        let _ = writer.flush();
    }
}

/// Render a log line to a string for test inspection
#[cfg(test)]
pub fn capture_log(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
    render(severity, event, fields)
}
