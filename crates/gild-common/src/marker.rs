//! Marker flags for accessor generation.

use bitflags::bitflags;

bitflags! {
    /// Markers placed on a type declaration by the host's discovery phase.
    ///
    /// A marker requests one kind of accessor for every field of the marked
    /// declaration (and of the type declarations nested inside it). Both
    /// markers may be present on the same declaration.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Markers: u8 {
        /// Read accessors (getters) requested.
        const GETTER = 1 << 0;
        /// Write accessors (setters) requested.
        const SETTER = 1 << 1;
    }
}
