//! Marker-driven processors.
//!
//! A processor is offered one round at a time and mutates the round's trees
//! in place. The two shipped configurations are symmetric runs of the same
//! pipeline, one per accessor kind; they differ only in marker, name, and
//! round-exhaustion policy.

use gild_common::Markers;
use gild_engine::{generate, AccessorKind, Tools};

use crate::store::{Round, TreeStore};

/// A processor invoked once per processing round.
pub trait Processor {
    /// The marker whose rounds this processor wants to see.
    fn marker(&self) -> Markers;

    /// Runs once per session, after the tool handles exist.
    fn init(&mut self, tools: &Tools);

    /// Process one round, mutating the annotated trees in place.
    ///
    /// Returns whether the round was consumed exhaustively: `true` means no
    /// later processor should be offered these markers this round.
    fn process(&mut self, round: &Round, tools: &mut Tools, trees: &mut TreeStore) -> bool;
}

/// The accessor processor, configured for one accessor kind.
pub struct AccessorProcessor {
    kind: AccessorKind,
}

impl AccessorProcessor {
    /// The read-accessor configuration. Leaves its rounds open: later
    /// processors still see the same markers.
    pub fn getter() -> Self {
        Self {
            kind: AccessorKind::Read,
        }
    }

    /// The write-accessor configuration. Claims its rounds exhaustively.
    pub fn setter() -> Self {
        Self {
            kind: AccessorKind::Write,
        }
    }

    /// The name used in lifecycle notes.
    pub fn display_name(&self) -> &'static str {
        match self.kind {
            AccessorKind::Read => "GetterProcessor",
            AccessorKind::Write => "SetterProcessor",
        }
    }
}

impl Processor for AccessorProcessor {
    fn marker(&self) -> Markers {
        match self.kind {
            AccessorKind::Read => Markers::GETTER,
            AccessorKind::Write => Markers::SETTER,
        }
    }

    fn init(&mut self, tools: &Tools) {
        tools.reporter.note(&format!("{} init", self.display_name()));
    }

    fn process(&mut self, round: &Round, tools: &mut Tools, trees: &mut TreeStore) -> bool {
        tools
            .reporter
            .note(&format!("{} process", self.display_name()));
        for &element in round.elements() {
            if let Some(tree) = trees.tree_mut(element) {
                generate(tools, self.kind, tree);
            }
        }
        match self.kind {
            AccessorKind::Read => false,
            AccessorKind::Write => true,
        }
    }
}
