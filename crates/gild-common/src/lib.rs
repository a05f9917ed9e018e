//! Shared types for the Gild accessor generator.
//!
//! Gild synthesizes read/write accessor methods for the fields of marked
//! class-like declarations by mutating the host compiler's syntax tree in
//! place. This crate holds the pieces every other crate needs: the marker
//! flags the host's discovery phase places on type declarations, and the
//! diagnostic channel the engine writes its advisory notes to.

pub mod marker;
pub mod report;

pub use marker::Markers;
pub use report::{MemoryReporter, Record, Reporter, Severity, StderrReporter};
