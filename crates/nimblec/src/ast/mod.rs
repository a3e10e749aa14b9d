//! Abstract Syntax Tree definitions
//!
//! The tree is built by the parser. Every expression and statement node
//! carries a `ty` slot that starts as `None` and is filled exactly once by
//! the type inference pass.

mod expr;
mod stmt;

pub use expr::*;
pub use stmt::*;

use crate::common::Span;

/// A complete Nimble script
#[derive(Debug, Clone, PartialEq)]
pub struct Script {
    pub main: Main,
    pub span: Span,
}

impl Script {
    pub fn new(main: Main) -> Self {
        Self { main, span: Span::default() }
    }
}

/// The script's main section
#[derive(Debug, Clone, PartialEq)]
pub struct Main {
    pub body: Body,
    pub span: Span,
}

impl Main {
    pub fn new(body: Body) -> Self {
        Self { body, span: Span::default() }
    }
}

/// Variable declarations followed by statements
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Body {
    pub vars: VarBlock,
    pub block: Block,
    pub span: Span,
}

impl Body {
    pub fn new(vars: VarBlock, block: Block) -> Self {
        Self { vars, block, span: Span::default() }
    }
}

/// Leading block of variable declarations
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VarBlock {
    pub decls: Vec<VarDec>,
    pub span: Span,
}

impl VarBlock {
    pub fn new(decls: Vec<VarDec>) -> Self {
        Self { decls, span: Span::default() }
    }
}
