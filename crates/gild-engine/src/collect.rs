//! Field collection.

use gild_tree::{FieldDecl, Member};

/// Collect the field declarations of a member sequence, in declaration order.
///
/// Members of any other kind (methods, nested types, initializer blocks) are
/// skipped, and nested types are not entered -- recursion belongs to the
/// traversal driver. An empty result is valid and means the enclosing type
/// is left untouched.
///
/// Fields are cloned out so the caller can keep mutating the member sequence
/// while it synthesizes from them.
pub fn collect_fields(members: &[Member]) -> Vec<FieldDecl> {
    members
        .iter()
        .filter_map(|member| match member {
            Member::Field(field) => Some(field.clone()),
            _ => None,
        })
        .collect()
}
