//! Per-session processing driver.

use gild_common::Markers;
use gild_engine::Tools;

use crate::env::{unwrap_env, HostEnv};
use crate::processor::Processor;
use crate::store::{Round, TreeStore};

/// A processing session: the tool handles, initialized once, plus the
/// registered processors, reused for every round until the host is done.
///
/// Nothing persists past the session; a new compilation starts from a fresh
/// one.
pub struct Session {
    tools: Tools,
    processors: Vec<Box<dyn Processor>>,
}

impl Session {
    /// Initialize a session from the host environment.
    ///
    /// Proxy environments are unwrapped once, the shared toolset is built
    /// from whatever that resolves to, and each processor's `init` hook
    /// runs immediately, in registration order.
    pub fn new(env: &dyn HostEnv, mut processors: Vec<Box<dyn Processor>>) -> Self {
        let env = unwrap_env(env);
        let tools = Tools::new(env.reporter());
        for processor in &mut processors {
            processor.init(&tools);
        }
        Session { tools, processors }
    }

    /// The session toolset.
    pub fn tools(&self) -> &Tools {
        &self.tools
    }

    /// Mutable access to the session toolset.
    ///
    /// The host's parser shares the session interner, so element trees and
    /// synthesized nodes draw names from one table.
    pub fn tools_mut(&mut self) -> &mut Tools {
        &mut self.tools
    }

    /// Run one marker's round over the store.
    ///
    /// Every processor registered for the marker is offered the round in
    /// registration order, until one reports it exhausted.
    pub fn run_round(&mut self, trees: &mut TreeStore, marker: Markers) {
        let round = Round::of_annotated(trees, marker);
        for processor in &mut self.processors {
            if processor.marker() != marker {
                continue;
            }
            if processor.process(&round, &mut self.tools, trees) {
                break;
            }
        }
    }
}
