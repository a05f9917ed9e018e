//! Tree nodes for class-like declarations.
//!
//! The model is deliberately narrow: exactly the shapes accessor generation
//! reads (type declarations, their members, field types) and writes (method
//! declarations whose bodies are a single return or assignment). Everything
//! else a real frontend tracks -- positions, comments, annotations beyond
//! the markers -- stays on the host's side of the fence.

use bitflags::bitflags;
use gild_common::Markers;

use crate::interner::Name;

bitflags! {
    /// Declaration modifier flags.
    ///
    /// Stored as a flag word the way the host's parser emits them. The
    /// generator reads none of these and never enforces their legality; it
    /// only sets `PUBLIC` on synthesized methods and `PARAMETER` on
    /// synthesized formals.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Modifiers: u16 {
        const PUBLIC = 1 << 0;
        const PRIVATE = 1 << 1;
        const PROTECTED = 1 << 2;
        const STATIC = 1 << 3;
        const FINAL = 1 << 4;
        /// Set on formal parameters.
        const PARAMETER = 1 << 5;
    }
}

/// A class-like type declaration owning an ordered member sequence.
///
/// The member sequence is the parser's output and is never reordered except
/// by the generator's own insertions. Mutation happens in place: the host
/// keeps handing later compiler phases the same tree object it gave Gild.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDecl {
    pub markers: Markers,
    pub modifiers: Modifiers,
    pub name: Name,
    pub members: Vec<Member>,
}

/// Any member of a type declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    Field(FieldDecl),
    Method(MethodDecl),
    Type(TypeDecl),
    Init(InitBlock),
}

/// The kind of a member, for dispatch without borrowing the node itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    Field,
    Method,
    Type,
    Init,
}

impl Member {
    pub fn kind(&self) -> MemberKind {
        match self {
            Member::Field(_) => MemberKind::Field,
            Member::Method(_) => MemberKind::Method,
            Member::Type(_) => MemberKind::Type,
            Member::Init(_) => MemberKind::Init,
        }
    }
}

/// A field declaration. Immutable input to accessor synthesis.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDecl {
    pub modifiers: Modifiers,
    pub name: Name,
    pub ty: TypeRef,
    /// Initializer expression, if the declaration carries one. Synthesis
    /// ignores it.
    pub init: Option<Expr>,
}

/// A method declaration.
///
/// Synthesized methods always carry empty `throws` and `type_params` lists
/// and a body of exactly one statement; parsed methods may carry anything.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDecl {
    pub modifiers: Modifiers,
    pub name: Name,
    pub return_type: TypeRef,
    pub params: Vec<Param>,
    pub throws: Vec<TypeRef>,
    pub type_params: Vec<Name>,
    /// `None` for bodyless (abstract) parsed methods.
    pub body: Option<Block>,
}

/// A formal parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub modifiers: Modifiers,
    pub name: Name,
    pub ty: TypeRef,
}

/// An instance or static initializer block.
#[derive(Debug, Clone, PartialEq)]
pub struct InitBlock {
    pub is_static: bool,
    pub body: Block,
}

/// A reference to a declared type.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeRef {
    /// A named type (`int`, `String`, `Point`). Primitives are plain names.
    Named(Name),
    /// The return type of a method that returns nothing.
    Void,
}

/// A `{ ... }` block of statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub stmts: Vec<Stmt>,
}

/// A statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `return <expr>;`
    Return(Expr),
    /// An expression evaluated for effect: `<expr>;`
    Expr(Expr),
}

/// An expression. Only the shapes accessor bodies and field initializers
/// need.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A bare identifier.
    Ident(Name),
    /// A literal, stored as its source text.
    Literal(String),
    /// A field selection: `<base>.<field>`.
    Select { base: Box<Expr>, field: Name },
    /// An assignment: `<lhs> = <rhs>`.
    Assign { lhs: Box<Expr>, rhs: Box<Expr> },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interner::Interner;

    #[test]
    fn member_kind_dispatch() {
        let mut interner = Interner::new();
        let x = interner.intern("x");
        let int = interner.intern("int");

        let field = Member::Field(FieldDecl {
            modifiers: Modifiers::PRIVATE,
            name: x,
            ty: TypeRef::Named(int),
            init: None,
        });
        let init = Member::Init(InitBlock {
            is_static: true,
            body: Block::default(),
        });

        assert_eq!(field.kind(), MemberKind::Field);
        assert_eq!(init.kind(), MemberKind::Init);
    }
}
