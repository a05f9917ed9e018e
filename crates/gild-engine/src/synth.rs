//! Accessor method synthesis.
//!
//! Builds complete, self-contained method nodes: a read accessor returning
//! the field, or a write accessor assigning its single parameter to the
//! field. Synthesis validates nothing -- not the field's modifiers, not
//! collisions with existing members. A duplicate or otherwise illegal member
//! is left for the host's later semantic analysis to reject; the only
//! guarantee made here is that the emitted node is structurally well formed.

use gild_tree::{FieldDecl, MethodDecl, Modifiers, TypeRef};

use crate::name::{accessor_name, AccessorKind};
use crate::Tools;

/// Synthesize the accessor of the given kind for one field.
pub fn synthesize(tools: &mut Tools, kind: AccessorKind, field: &FieldDecl) -> MethodDecl {
    match kind {
        AccessorKind::Read => getter(tools, field),
        AccessorKind::Write => setter(tools, field),
    }
}

/// Build `public <T> get<Field>() { return this.<field>; }`.
fn getter(tools: &mut Tools, field: &FieldDecl) -> MethodDecl {
    let factory = tools.factory;
    let this = tools.interner.intern("this");
    let name = accessor_name(&mut tools.interner, AccessorKind::Read, field.name);

    let body = factory.block(vec![
        factory.ret(factory.select(factory.ident(this), field.name))
    ]);
    factory.method(
        Modifiers::PUBLIC,
        name,
        field.ty.clone(),
        Vec::new(),
        body,
    )
}

/// Build `public void set<Field>(<T> <field>) { this.<field> = <field>; }`.
///
/// The parameter deliberately reuses the field's own name; the assignment
/// disambiguates through the self reference.
fn setter(tools: &mut Tools, field: &FieldDecl) -> MethodDecl {
    let factory = tools.factory;
    let this = tools.interner.intern("this");
    let name = accessor_name(&mut tools.interner, AccessorKind::Write, field.name);

    let assignment = factory.assign(
        factory.select(factory.ident(this), field.name),
        factory.ident(field.name),
    );
    let body = factory.block(vec![factory.exec(assignment)]);
    let param = factory.param(field.name, field.ty.clone());
    factory.method(Modifiers::PUBLIC, name, TypeRef::Void, vec![param], body)
}
