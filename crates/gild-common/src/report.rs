//! The diagnostic reporting channel.
//!
//! The engine's only output besides the mutated tree itself is a stream of
//! human-readable notes: one when a processor initializes, one when it starts
//! a round, and one per synthesized accessor. The host supplies the sink;
//! the engine never inspects what it wrote.

use std::cell::RefCell;
use std::fmt;

use serde::Serialize;

/// How serious a reported message is.
///
/// The engine itself only ever emits `Note`; the full scale exists so hosts
/// can route warnings and errors from their own phases through the same sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    /// Advisory information, not tied to any problem.
    Note,
    /// A problem the host may want surfaced but that does not stop a build.
    Warning,
    /// A problem that should fail the build.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Note => write!(f, "note"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// One reported message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub severity: Severity,
    pub message: String,
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// A host-supplied diagnostic sink.
///
/// Writing is advisory only: a sink that discards everything is a valid
/// implementation, and nothing in the generation pipeline depends on what
/// (if anything) a sink retains.
pub trait Reporter {
    /// Write one message to the sink.
    fn report(&self, severity: Severity, message: &str);

    /// Write an advisory note.
    fn note(&self, message: &str) {
        self.report(Severity::Note, message);
    }
}

/// A sink that retains every record in order, for inspection after a run.
///
/// Processing is single threaded, so interior mutability via [`RefCell`] is
/// enough to let the engine hold the sink behind a shared handle.
#[derive(Default, Debug)]
pub struct MemoryReporter {
    records: RefCell<Vec<Record>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything reported so far, in report order.
    pub fn records(&self) -> Vec<Record> {
        self.records.borrow().clone()
    }

    /// The messages of all retained notes, in report order.
    pub fn notes(&self) -> Vec<String> {
        self.records
            .borrow()
            .iter()
            .filter(|r| r.severity == Severity::Note)
            .map(|r| r.message.clone())
            .collect()
    }
}

impl Reporter for MemoryReporter {
    fn report(&self, severity: Severity, message: &str) {
        self.records.borrow_mut().push(Record {
            severity,
            message: message.to_string(),
        });
    }
}

/// A sink that writes each record to standard error as `severity: message`.
#[derive(Default, Debug)]
pub struct StderrReporter;

impl StderrReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for StderrReporter {
    fn report(&self, severity: Severity, message: &str) {
        eprintln!("{severity}: {message}");
    }
}
