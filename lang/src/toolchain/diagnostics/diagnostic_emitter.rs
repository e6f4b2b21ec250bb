use std::fmt;

use super::DiagnosticKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiagnosticLevel {
    Warning,
    Error,
}

impl From<DiagnosticLevel> for log::Level {
    fn from(level: DiagnosticLevel) -> log::Level {
        match level {
            DiagnosticLevel::Warning => log::Level::Warn,
            DiagnosticLevel::Error => log::Level::Error,
        }
    }
}

/// A location in code referred to by the diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiagnosticLocation<'s> {
    // The 1-based character column on the line.
    pub column_number: usize,

    pub line: &'s str,
}

impl<'s> fmt::Display for DiagnosticLocation<'s> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("column {}", self.column_number))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiagnosticMessage<'s> {
    pub kind: DiagnosticKind,
    pub location: DiagnosticLocation<'s>,
    pub body: String,
}

impl<'s> fmt::Display for DiagnosticMessage<'s> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The "alternate" flag asks for the message to be printed as an error.
        let infix = match f.alternate() {
            true => "ERROR: ",
            false => "",
        };
        f.write_fmt(format_args!("{}: {}{}", self.location, infix, self.body))
    }
}

/// A complete Diagnostic, a message plus its level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic<'s> {
    pub level: DiagnosticLevel,
    pub message: DiagnosticMessage<'s>,
}

impl<'s> Diagnostic<'s> {
    pub fn new(level: DiagnosticLevel, message: DiagnosticMessage<'s>) -> Diagnostic<'s> {
        Diagnostic { level, message }
    }
}

impl<'s> fmt::Display for Diagnostic<'s> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.level == DiagnosticLevel::Error {
            f.write_fmt(format_args!("{:#}", self.message))
        } else {
            f.write_fmt(format_args!("{}", self.message))
        }
    }
}

/// An interface for an object that can receive diagnostics from the toolchain as they are emitted.
pub trait DiagnosticConsumer {
    fn handle_diagnostic(&mut self, diag: &Diagnostic);
    fn flush(&mut self) {}
}

/// Drops every diagnostic.
pub struct NullDiagnosticConsumer {}

impl DiagnosticConsumer for NullDiagnosticConsumer {
    fn handle_diagnostic(&mut self, _diag: &Diagnostic) {}
}

/// Forwards diagnostics to the `log` facade, under the `target` given at construction.
pub struct LogDiagnosticConsumer {
    target: &'static str,
    count: usize,
    flushes: usize,
}

impl LogDiagnosticConsumer {
    pub fn new(target: &'static str) -> LogDiagnosticConsumer {
        LogDiagnosticConsumer { target, count: 0, flushes: 0 }
    }

    /// Number of diagnostics handled so far.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Number of times the consumer has been flushed.
    pub fn flush_count(&self) -> usize {
        self.flushes
    }
}

impl DiagnosticConsumer for LogDiagnosticConsumer {
    fn handle_diagnostic(&mut self, diag: &Diagnostic) {
        self.count += 1;
        let level = log::Level::from(diag.level);
        log::log!(target: self.target, level, "{} in {:?}", diag, diag.message.location.line);
    }

    fn flush(&mut self) {
        self.flushes += 1;
        log::logger().flush();
    }
}
