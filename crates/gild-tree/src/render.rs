//! Source rendering for class-like trees.
//!
//! Renders a declaration back to compact class-like source text. This is a
//! debugging and testing aid -- real code emission belongs to the host -- so
//! the output favors one-line method bodies over faithful formatting.

use gild_common::Markers;

use crate::interner::Interner;
use crate::node::{
    Block, Expr, FieldDecl, InitBlock, Member, MethodDecl, Modifiers, Stmt, TypeDecl, TypeRef,
};

const INDENT: &str = "    ";

/// Render a type declaration and everything nested in it.
pub fn render_type(ty: &TypeDecl, interner: &Interner) -> String {
    let mut renderer = Renderer {
        out: String::new(),
        interner,
    };
    renderer.type_decl(ty, 0);
    renderer.out
}

struct Renderer<'a> {
    out: String,
    interner: &'a Interner,
}

impl Renderer<'_> {
    fn line(&mut self, depth: usize, text: &str) {
        for _ in 0..depth {
            self.out.push_str(INDENT);
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn type_decl(&mut self, ty: &TypeDecl, depth: usize) {
        if ty.markers.contains(Markers::GETTER) {
            self.line(depth, "@Getter");
        }
        if ty.markers.contains(Markers::SETTER) {
            self.line(depth, "@Setter");
        }
        let mods = modifiers(ty.modifiers);
        let header = format!("{}class {} {{", mods, self.interner.text(ty.name));
        if ty.members.is_empty() {
            self.line(depth, &format!("{header}}}"));
            return;
        }
        self.line(depth, &header);
        for member in &ty.members {
            match member {
                Member::Field(field) => self.field(field, depth + 1),
                Member::Method(method) => self.method(method, depth + 1),
                Member::Type(nested) => self.type_decl(nested, depth + 1),
                Member::Init(init) => self.init_block(init, depth + 1),
            }
        }
        self.line(depth, "}");
    }

    fn field(&mut self, field: &FieldDecl, depth: usize) {
        let mut text = format!(
            "{}{} {}",
            modifiers(field.modifiers),
            self.type_ref(&field.ty),
            self.interner.text(field.name)
        );
        if let Some(init) = &field.init {
            text.push_str(" = ");
            text.push_str(&self.expr(init));
        }
        text.push(';');
        self.line(depth, &text);
    }

    fn method(&mut self, method: &MethodDecl, depth: usize) {
        let mut text = modifiers(method.modifiers);
        if !method.type_params.is_empty() {
            let params: Vec<&str> = method
                .type_params
                .iter()
                .map(|&p| self.interner.text(p))
                .collect();
            text.push_str(&format!("<{}> ", params.join(", ")));
        }
        text.push_str(&format!(
            "{} {}({})",
            self.type_ref(&method.return_type),
            self.interner.text(method.name),
            method
                .params
                .iter()
                .map(|p| format!("{} {}", self.type_ref(&p.ty), self.interner.text(p.name)))
                .collect::<Vec<_>>()
                .join(", ")
        ));
        if !method.throws.is_empty() {
            let thrown: Vec<String> = method.throws.iter().map(|t| self.type_ref(t)).collect();
            text.push_str(&format!(" throws {}", thrown.join(", ")));
        }
        match &method.body {
            Some(body) => {
                text.push(' ');
                text.push_str(&self.block(body));
            }
            None => text.push(';'),
        }
        self.line(depth, &text);
    }

    fn init_block(&mut self, init: &InitBlock, depth: usize) {
        let body = self.block(&init.body);
        if init.is_static {
            self.line(depth, &format!("static {body}"));
        } else {
            self.line(depth, &body);
        }
    }

    fn block(&self, block: &Block) -> String {
        if block.stmts.is_empty() {
            return "{ }".to_string();
        }
        let stmts: Vec<String> = block.stmts.iter().map(|s| self.stmt(s)).collect();
        format!("{{ {} }}", stmts.join(" "))
    }

    fn stmt(&self, stmt: &Stmt) -> String {
        match stmt {
            Stmt::Return(value) => format!("return {};", self.expr(value)),
            Stmt::Expr(expr) => format!("{};", self.expr(expr)),
        }
    }

    fn expr(&self, expr: &Expr) -> String {
        match expr {
            Expr::Ident(name) => self.interner.text(*name).to_string(),
            Expr::Literal(text) => text.clone(),
            Expr::Select { base, field } => {
                format!("{}.{}", self.expr(base), self.interner.text(*field))
            }
            Expr::Assign { lhs, rhs } => format!("{} = {}", self.expr(lhs), self.expr(rhs)),
        }
    }

    fn type_ref(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Named(name) => self.interner.text(*name).to_string(),
            TypeRef::Void => "void".to_string(),
        }
    }
}

/// Render a modifier word, trailing space included when any flag is set.
fn modifiers(mods: Modifiers) -> String {
    let mut out = String::new();
    for (flag, word) in [
        (Modifiers::PUBLIC, "public"),
        (Modifiers::PROTECTED, "protected"),
        (Modifiers::PRIVATE, "private"),
        (Modifiers::STATIC, "static"),
        (Modifiers::FINAL, "final"),
    ] {
        if mods.contains(flag) {
            out.push_str(word);
            out.push(' ');
        }
    }
    out
}
