//! Accessor name derivation.

use gild_tree::{Interner, Name};

/// Which accessor to synthesize for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessorKind {
    /// A getter: reads the field.
    Read,
    /// A setter: writes the field.
    Write,
}

impl AccessorKind {
    /// The method-name prefix for this kind.
    pub fn prefix(self) -> &'static str {
        match self {
            AccessorKind::Read => "get",
            AccessorKind::Write => "set",
        }
    }
}

/// Derive the accessor method name for a field.
///
/// The rule is purely mechanical: the kind's prefix, then the field name
/// with its first character upper-cased and the rest unchanged. A field
/// named `ID` yields `getID`, and a boolean named `isOpen` yields
/// `getIsOpen` -- surprising names for such inputs are a documented
/// limitation of the scheme, not something this function smooths over.
///
/// Field names are guaranteed non-empty by the host's grammar; no check is
/// made here.
pub fn accessor_name(interner: &mut Interner, kind: AccessorKind, field: Name) -> Name {
    let text = interner.text(field).to_owned();
    let mut derived = String::with_capacity(kind.prefix().len() + text.len());
    derived.push_str(kind.prefix());
    let mut chars = text.chars();
    if let Some(first) = chars.next() {
        derived.extend(first.to_uppercase());
        derived.push_str(chars.as_str());
    }
    interner.intern(&derived)
}
