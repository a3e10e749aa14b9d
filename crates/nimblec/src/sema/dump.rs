//! Inferred type dump
//!
//! Flattens an annotated tree into `(depth, text, type)` records. Used to
//! print the result of a pass and to find nodes the pass never typed.

use std::fmt;

use crate::ast::*;
use crate::common::{CompileError, CompileResult, Span};
use crate::types::PrimitiveType;

/// One typed node of the tree
#[derive(Debug, Clone, PartialEq)]
pub struct TypedNode {
    /// Distance from the root passed to the collector, starting at 1
    pub depth: usize,
    pub text: String,
    pub span: Span,
    pub ty: Option<PrimitiveType>,
}

/// Types of every expression and statement node, in pre-order
#[derive(Debug, Clone, Default)]
pub struct InferredTypes {
    nodes: Vec<TypedNode>,
}

impl InferredTypes {
    /// Top-level declarations and statements are at depth 1
    pub fn from_script(script: &Script) -> Self {
        let mut types = Self::default();
        let body = &script.main.body;
        for decl in &body.vars.decls {
            types.var_dec(decl, 1);
        }
        types.block(&body.block, 1);
        types
    }

    pub fn from_var_dec(decl: &VarDec) -> Self {
        let mut types = Self::default();
        types.var_dec(decl, 1);
        types
    }

    pub fn from_stmt(stmt: &Stmt) -> Self {
        let mut types = Self::default();
        types.stmt(stmt, 1);
        types
    }

    pub fn from_expr(expr: &Expr) -> Self {
        let mut types = Self::default();
        types.expr(expr, 1);
        types
    }

    pub fn nodes(&self) -> &[TypedNode] {
        &self.nodes
    }

    pub fn node(&self, depth: usize, text: &str) -> Option<&TypedNode> {
        self.nodes.iter().find(|n| n.depth == depth && n.text == text)
    }

    /// Type of the first node at `depth` whose text is `text`
    pub fn get(&self, depth: usize, text: &str) -> Option<PrimitiveType> {
        self.node(depth, text).and_then(|n| n.ty)
    }

    pub fn unresolved(&self) -> impl Iterator<Item = &TypedNode> {
        self.nodes.iter().filter(|n| n.ty.is_none())
    }

    /// Fail on the first node the pass left without a type
    pub fn ensure_resolved(&self) -> CompileResult<()> {
        match self.unresolved().next() {
            Some(node) => Err(CompileError::internal(
                format!("'{}' was left without a type", node.text),
                node.span,
            )),
            None => Ok(()),
        }
    }

    fn push(&mut self, depth: usize, text: String, span: Span, ty: Option<PrimitiveType>) {
        self.nodes.push(TypedNode { depth, text, span, ty });
    }

    fn var_dec(&mut self, decl: &VarDec, depth: usize) {
        self.push(depth, decl.to_string(), decl.span, decl.ty);
        if let Some(init) = &decl.init {
            self.expr(init, depth + 1);
        }
    }

    fn block(&mut self, block: &Block, depth: usize) {
        for stmt in &block.stmts {
            self.stmt(stmt, depth);
        }
    }

    fn stmt(&mut self, stmt: &Stmt, depth: usize) {
        self.push(depth, stmt.to_string(), stmt.span, stmt.ty);
        match &stmt.kind {
            StmtKind::Assign { value, .. } => self.expr(value, depth + 1),
            StmtKind::While { condition, body } => {
                self.expr(condition, depth + 1);
                self.block(body, depth + 1);
            }
            StmtKind::If { condition, then_block, else_block } => {
                self.expr(condition, depth + 1);
                self.block(then_block, depth + 1);
                if let Some(else_block) = else_block {
                    self.block(else_block, depth + 1);
                }
            }
            StmtKind::Print(expr) => self.expr(expr, depth + 1),
        }
    }

    fn expr(&mut self, expr: &Expr, depth: usize) {
        self.push(depth, expr.to_string(), expr.span, expr.ty);
        match &expr.kind {
            ExprKind::IntLiteral(_)
            | ExprKind::BoolLiteral(_)
            | ExprKind::StringLiteral(_)
            | ExprKind::Variable(_) => {}
            ExprKind::Unary { operand, .. } => self.expr(operand, depth + 1),
            ExprKind::Binary { left, right, .. } => {
                self.expr(left, depth + 1);
                self.expr(right, depth + 1);
            }
            ExprKind::Parens(inner) => self.expr(inner, depth + 1),
        }
    }
}

impl fmt::Display for InferredTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in &self.nodes {
            let indent = "  ".repeat(node.depth - 1);
            match node.ty {
                Some(ty) => writeln!(f, "{}{}: {}", indent, node.text, ty)?,
                None => writeln!(f, "{}{}: <unresolved>", indent, node.text)?,
            }
        }
        Ok(())
    }
}
