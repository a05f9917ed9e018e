//! The node factory.
//!
//! One of the session's tool handles: every synthetic node the generator
//! splices into a tree is built here, so the invariants of synthesized
//! shapes (empty throws and type-parameter lists, parameter flag on
//! formals) live in one place.

use crate::interner::Name;
use crate::node::{Block, Expr, MethodDecl, Modifiers, Param, Stmt, TypeRef};

/// Builds well-formed synthetic nodes.
#[derive(Default, Debug, Clone, Copy)]
pub struct NodeFactory;

impl NodeFactory {
    pub fn new() -> Self {
        Self
    }

    /// A bare identifier expression.
    pub fn ident(&self, name: Name) -> Expr {
        Expr::Ident(name)
    }

    /// A field selection: `<base>.<field>`.
    pub fn select(&self, base: Expr, field: Name) -> Expr {
        Expr::Select {
            base: Box::new(base),
            field,
        }
    }

    /// An assignment expression: `<lhs> = <rhs>`.
    pub fn assign(&self, lhs: Expr, rhs: Expr) -> Expr {
        Expr::Assign {
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    /// A return statement: `return <value>;`.
    pub fn ret(&self, value: Expr) -> Stmt {
        Stmt::Return(value)
    }

    /// An expression statement: `<expr>;`.
    pub fn exec(&self, expr: Expr) -> Stmt {
        Stmt::Expr(expr)
    }

    /// A block of statements.
    pub fn block(&self, stmts: Vec<Stmt>) -> Block {
        Block { stmts }
    }

    /// A formal parameter. Carries the parameter modifier flag.
    pub fn param(&self, name: Name, ty: TypeRef) -> Param {
        Param {
            modifiers: Modifiers::PARAMETER,
            name,
            ty,
        }
    }

    /// A method declaration with empty throws and type-parameter lists.
    pub fn method(
        &self,
        modifiers: Modifiers,
        name: Name,
        return_type: TypeRef,
        params: Vec<Param>,
        body: Block,
    ) -> MethodDecl {
        MethodDecl {
            modifiers,
            name,
            return_type,
            params,
            throws: Vec::new(),
            type_params: Vec::new(),
            body: Some(body),
        }
    }
}
