//! Member-sequence splicing.

use gild_tree::{Member, MethodDecl, TypeDecl};

/// Splice a synthesized method in at the front of a type's member sequence.
///
/// The sequence is rebuilt (new accessor first, then every existing member
/// in its original relative order) rather than shifted in place, so the
/// ownership transfer and the ordering policy are both explicit. Since the
/// caller processes fields in declaration order and prepends one accessor
/// per field, the accessors end up newest-first -- field-order-reversed --
/// ahead of the original members.
pub fn prepend_member(ty: &mut TypeDecl, method: MethodDecl) {
    let mut members = Vec::with_capacity(ty.members.len() + 1);
    members.push(Member::Method(method));
    members.append(&mut ty.members);
    ty.members = members;
}
