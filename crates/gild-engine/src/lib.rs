//! The accessor synthesis engine.
//!
//! Given a type declaration tree, the engine collects field declarations,
//! derives accessor names, synthesizes getter/setter method nodes, and
//! splices them into the owning type's member sequence in place. The host
//! drives it once per processing round; everything here is synchronous and
//! single threaded.

use std::rc::Rc;

use gild_common::Reporter;
use gild_tree::{Interner, NodeFactory};

pub mod collect;
pub mod name;
pub mod splice;
pub mod synth;
pub mod traverse;

pub use name::AccessorKind;
pub use traverse::generate;

/// The shared tool handles: identifier interner, node factory, and the
/// host's diagnostic sink.
///
/// Initialized once per processing session and passed by reference into
/// every operation; there is no global state behind these.
pub struct Tools {
    pub interner: Interner,
    pub factory: NodeFactory,
    pub reporter: Rc<dyn Reporter>,
}

impl Tools {
    /// Build a fresh toolset around the host's diagnostic sink.
    pub fn new(reporter: Rc<dyn Reporter>) -> Self {
        Tools {
            interner: Interner::new(),
            factory: NodeFactory::new(),
            reporter,
        }
    }
}
