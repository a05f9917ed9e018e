//! Element-to-tree lookup and processing rounds.

use gild_common::Markers;
use gild_tree::TypeDecl;

/// Identifies one top-level element for the lifetime of a store.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ElementId(u32);

/// Owns the mutable tree of every top-level element the host parsed.
///
/// This is the lookup the engine resolves annotated elements through. A
/// tree fetched mutably here is the same object the host hands to its later
/// phases, so a splice is visible to every holder the moment it happens.
///
/// Elements happen to iterate in registration order; nothing downstream is
/// allowed to rely on that.
#[derive(Default, Debug)]
pub struct TreeStore {
    roots: Vec<TypeDecl>,
}

impl TreeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a parsed top-level declaration, returning its element id.
    pub fn insert(&mut self, root: TypeDecl) -> ElementId {
        let id = ElementId(self.roots.len() as u32);
        self.roots.push(root);
        id
    }

    /// Shared view of an element's tree.
    pub fn tree(&self, element: ElementId) -> Option<&TypeDecl> {
        self.roots.get(element.0 as usize)
    }

    /// Mutable view of an element's tree.
    pub fn tree_mut(&mut self, element: ElementId) -> Option<&mut TypeDecl> {
        self.roots.get_mut(element.0 as usize)
    }

    /// The elements whose top-level declaration carries `marker`.
    ///
    /// Only top-level declarations are inspected; markers on nested types
    /// are the traversal's business, not the round's.
    pub fn annotated(&self, marker: Markers) -> Vec<ElementId> {
        self.roots
            .iter()
            .enumerate()
            .filter(|(_, root)| root.markers.contains(marker))
            .map(|(index, _)| ElementId(index as u32))
            .collect()
    }
}

/// One processing round: the top-level elements currently carrying the
/// round's marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    marker: Markers,
    elements: Vec<ElementId>,
}

impl Round {
    /// Assemble the round for `marker` from the store's current trees.
    pub fn of_annotated(store: &TreeStore, marker: Markers) -> Self {
        Round {
            marker,
            elements: store.annotated(marker),
        }
    }

    pub fn marker(&self) -> Markers {
        self.marker
    }

    pub fn elements(&self) -> &[ElementId] {
        &self.elements
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use gild_tree::{Interner, Modifiers};

    use super::*;

    fn class(interner: &mut Interner, name: &str, markers: Markers) -> TypeDecl {
        TypeDecl {
            markers,
            modifiers: Modifiers::PUBLIC,
            name: interner.intern(name),
            members: Vec::new(),
        }
    }

    #[test]
    fn annotated_filters_by_marker() {
        let mut interner = Interner::new();
        let mut store = TreeStore::new();
        let a = store.insert(class(&mut interner, "A", Markers::GETTER));
        let _b = store.insert(class(&mut interner, "B", Markers::SETTER));
        let c = store.insert(class(&mut interner, "C", Markers::GETTER | Markers::SETTER));

        assert_eq!(store.annotated(Markers::GETTER), vec![a, c]);
    }

    #[test]
    fn round_of_unmarked_store_is_empty() {
        let mut interner = Interner::new();
        let mut store = TreeStore::new();
        store.insert(class(&mut interner, "Plain", Markers::empty()));

        let round = Round::of_annotated(&store, Markers::GETTER);
        assert!(round.is_empty());
        assert_eq!(round.marker(), Markers::GETTER);
    }

    #[test]
    fn tree_mut_mutates_the_stored_object() {
        let mut interner = Interner::new();
        let mut store = TreeStore::new();
        let id = store.insert(class(&mut interner, "A", Markers::GETTER));

        store.tree_mut(id).unwrap().modifiers = Modifiers::FINAL;
        assert_eq!(store.tree(id).unwrap().modifiers, Modifiers::FINAL);
    }
}
