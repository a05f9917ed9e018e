//! Depth-first accessor generation over a type tree.

use gild_tree::{Member, TypeDecl};

use crate::collect::collect_fields;
use crate::name::AccessorKind;
use crate::splice::prepend_member;
use crate::synth::synthesize;
use crate::Tools;

/// Generate accessors of one kind for a type declaration and every type
/// declaration nested inside it, depth first.
///
/// Each type is processed before its children: collect its fields, then for
/// each field (in declaration order) synthesize one accessor and splice it
/// in at the front of the member sequence, then recurse into nested types.
/// Synthesized methods are not fields, so a single pass over a type
/// terminates without feeding itself new work.
///
/// One note per synthesized accessor (`<name> is created`) goes to the
/// reporter before the splice. The walk has no rollback: if it aborts
/// midway, already-spliced accessors stay in the tree.
pub fn generate(tools: &mut Tools, kind: AccessorKind, ty: &mut TypeDecl) {
    let fields = collect_fields(&ty.members);
    for field in &fields {
        let method = synthesize(tools, kind, field);
        tools
            .reporter
            .note(&format!("{} is created", tools.interner.text(method.name)));
        prepend_member(ty, method);
    }

    for member in &mut ty.members {
        if let Member::Type(nested) = member {
            generate(tools, kind, nested);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use gild_common::{Markers, MemoryReporter};
    use gild_tree::{FieldDecl, Member, MemberKind, Modifiers, TypeDecl, TypeRef};

    use super::*;

    fn tools_with_sink() -> (Tools, Rc<MemoryReporter>) {
        let sink = Rc::new(MemoryReporter::new());
        (Tools::new(sink.clone()), sink)
    }

    fn field(tools: &mut Tools, name: &str, ty: &str) -> Member {
        Member::Field(FieldDecl {
            modifiers: Modifiers::PRIVATE,
            name: tools.interner.intern(name),
            ty: TypeRef::Named(tools.interner.intern(ty)),
            init: None,
        })
    }

    #[test]
    fn emits_one_note_per_accessor_in_field_order() {
        let (mut tools, sink) = tools_with_sink();
        let members = vec![
            field(&mut tools, "x", "int"),
            field(&mut tools, "y", "int"),
        ];
        let mut ty = TypeDecl {
            markers: Markers::GETTER,
            modifiers: Modifiers::empty(),
            name: tools.interner.intern("Point"),
            members,
        };

        generate(&mut tools, AccessorKind::Read, &mut ty);

        assert_eq!(
            sink.notes(),
            vec!["getX is created".to_string(), "getY is created".to_string()]
        );
    }

    #[test]
    fn zero_fields_means_zero_mutation() {
        let (mut tools, sink) = tools_with_sink();
        let mut ty = TypeDecl {
            markers: Markers::GETTER,
            modifiers: Modifiers::empty(),
            name: tools.interner.intern("Empty"),
            members: Vec::new(),
        };
        let before = ty.clone();

        generate(&mut tools, AccessorKind::Read, &mut ty);

        assert_eq!(ty, before);
        assert!(sink.notes().is_empty());
    }

    #[test]
    fn nested_types_are_processed_after_their_parent() {
        let (mut tools, _sink) = tools_with_sink();
        let inner_members = vec![field(&mut tools, "depth", "int")];
        let inner = TypeDecl {
            markers: Markers::empty(),
            modifiers: Modifiers::empty(),
            name: tools.interner.intern("Inner"),
            members: inner_members,
        };
        let mut outer = TypeDecl {
            markers: Markers::GETTER,
            modifiers: Modifiers::empty(),
            name: tools.interner.intern("Outer"),
            members: vec![field(&mut tools, "width", "int"), Member::Type(inner)],
        };

        generate(&mut tools, AccessorKind::Read, &mut outer);

        // Outer gained exactly one accessor, for its own field.
        assert_eq!(outer.members.len(), 3);
        assert_eq!(outer.members[0].kind(), MemberKind::Method);

        let nested = outer
            .members
            .iter()
            .find_map(|m| match m {
                Member::Type(t) => Some(t),
                _ => None,
            })
            .expect("nested type still present");
        assert_eq!(nested.members.len(), 2);
        match &nested.members[0] {
            Member::Method(m) => assert_eq!(tools.interner.text(m.name), "getDepth"),
            other => panic!("expected the nested accessor first, got {other:?}"),
        }
    }
}
