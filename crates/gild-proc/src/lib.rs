//! Host-adapter layer for the Gild accessor generator.
//!
//! The engine itself only mutates trees; this crate is the seam it plugs
//! into a host toolchain through: the processing environment handle (with
//! proxy unwrapping), the element-to-tree store, processing rounds, the
//! processor trait with its two accessor configurations, and the session
//! driver that wires them together.

pub mod env;
pub mod processor;
pub mod session;
pub mod store;

pub use env::{unwrap_env, BasicEnv, HostEnv};
pub use processor::{AccessorProcessor, Processor};
pub use session::Session;
pub use store::{ElementId, Round, TreeStore};
