//! Identifier interning.
//!
//! Every identifier in a tree is interned once and referred to by a compact
//! [`Name`] handle. Interning makes name comparison a `u32` compare and lets
//! synthesized nodes share identifier storage with the nodes they were
//! derived from.

use rustc_hash::FxHashMap;

/// An interned identifier, identified by a `u32` index into the interner's
/// string table.
///
/// A `Name` is only meaningful together with the [`Interner`] that produced
/// it; handles from different interners must not be mixed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Name(u32);

/// The identifier interner, one of the tool handles a processing session
/// initializes once and reuses for every round.
#[derive(Default, Debug)]
pub struct Interner {
    strings: Vec<String>,
    table: FxHashMap<String, Name>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern `text`, returning its handle.
    ///
    /// Interning the same text twice returns the same handle.
    pub fn intern(&mut self, text: &str) -> Name {
        if let Some(&name) = self.table.get(text) {
            return name;
        }
        let name = Name(self.strings.len() as u32);
        self.strings.push(text.to_string());
        self.table.insert(text.to_string(), name);
        name
    }

    /// The text of an interned name.
    ///
    /// # Panics
    ///
    /// Panics if `name` came from a different interner.
    pub fn text(&self, name: Name) -> &str {
        &self.strings[name.0 as usize]
    }
}
