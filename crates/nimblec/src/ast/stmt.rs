//! Statement AST nodes

use std::fmt;

use super::Expr;
use crate::common::Span;
use crate::types::PrimitiveType;

/// Variable declaration: `var NAME : Type [= init]`
#[derive(Debug, Clone, PartialEq)]
pub struct VarDec {
    pub name: String,
    /// Declared type token as written in the source
    pub type_name: String,
    pub init: Option<Expr>,
    pub span: Span,
    pub ty: Option<PrimitiveType>,
    pub valid: bool,
}

impl VarDec {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>, init: Option<Expr>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            init,
            span: Span::default(),
            ty: None,
            valid: false,
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

/// Statement node
#[derive(Debug, Clone, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
    /// Type of this statement (filled in during semantic analysis)
    pub ty: Option<PrimitiveType>,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Self { kind, span, ty: None }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn assign(name: impl Into<String>, value: Expr) -> Self {
        Self::new(
            StmtKind::Assign {
                name: name.into(),
                value,
                valid: false,
            },
            Span::default(),
        )
    }

    pub fn while_loop(condition: Expr, body: Block) -> Self {
        Self::new(StmtKind::While { condition, body }, Span::default())
    }

    pub fn if_else(condition: Expr, then_block: Block, else_block: Option<Block>) -> Self {
        Self::new(
            StmtKind::If {
                condition,
                then_block,
                else_block,
            },
            Span::default(),
        )
    }

    pub fn print(expr: Expr) -> Self {
        Self::new(StmtKind::Print(expr), Span::default())
    }
}

/// Statement kinds
#[derive(Debug, Clone, PartialEq)]
pub enum StmtKind {
    /// Assignment: name = expr
    Assign {
        name: String,
        value: Expr,
        /// Set when the value's type matched the variable's type
        valid: bool,
    },

    /// While loop: while cond { body }
    While {
        condition: Expr,
        body: Block,
    },

    /// If statement: if cond { then } [else { else }]
    If {
        condition: Expr,
        then_block: Block,
        else_block: Option<Block>,
    },

    /// Print statement: print expr
    Print(Expr),
}

/// Statement block: { ... }
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Block {
    pub stmts: Vec<Stmt>,
    pub span: Span,
}

impl Block {
    pub fn new(stmts: Vec<Stmt>) -> Self {
        Self {
            stmts,
            span: Span::default(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

impl fmt::Display for VarDec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "var {} : {}", self.name, self.type_name)?;
        if let Some(init) = &self.init {
            write!(f, " = {}", init)?;
        }
        Ok(())
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            StmtKind::Assign { name, value, .. } => write!(f, "{} = {}", name, value),
            StmtKind::While { condition, body } => write!(f, "while {} {}", condition, body),
            StmtKind::If { condition, then_block, else_block } => {
                write!(f, "if {} {}", condition, then_block)?;
                if let Some(else_block) = else_block {
                    write!(f, " else {}", else_block)?;
                }
                Ok(())
            }
            StmtKind::Print(expr) => write!(f, "print {}", expr),
        }
    }
}

/// Statements inside a block are each terminated by `;` so the block
/// stays on one line.
impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{ ")?;
        for stmt in &self.stmts {
            write!(f, "{}; ", stmt)?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_text() {
        let dec = VarDec::new("Apple", "Int", Some(Expr::boolean(true)));
        assert_eq!(dec.to_string(), "var Apple : Int = true");
        assert_eq!(VarDec::new("Pear", "Bool", None).to_string(), "var Pear : Bool");

        assert_eq!(Stmt::assign("Apple", Expr::int(1)).to_string(), "Apple = 1");
        assert_eq!(Stmt::print(Expr::variable("x")).to_string(), "print x");
    }

    #[test]
    fn test_block_text() {
        let stmt = Stmt::if_else(
            Expr::int(3),
            Block::empty(),
            Some(Block::new(vec![Stmt::print(Expr::int(1))])),
        );
        assert_eq!(stmt.to_string(), "if 3 { } else { print 1; }");

        let stmt = Stmt::while_loop(Expr::boolean(true), Block::empty());
        assert_eq!(stmt.to_string(), "while true { }");
    }

    #[test]
    fn test_nested_block_text_keeps_bodies() {
        let first = Stmt::while_loop(Expr::int(3), Block::new(vec![Stmt::print(Expr::int(1))]));
        let second = Stmt::while_loop(Expr::int(3), Block::new(vec![Stmt::print(Expr::int(2))]));
        assert_eq!(first.to_string(), "while 3 { print 1; }");
        assert_ne!(first.to_string(), second.to_string());

        let nested = Stmt::if_else(
            Expr::boolean(true),
            Block::new(vec![
                Stmt::assign("x", Expr::int(1)),
                Stmt::while_loop(Expr::boolean(false), Block::new(vec![Stmt::print(Expr::variable("x"))])),
            ]),
            None,
        );
        assert_eq!(nested.to_string(), "if true { x = 1; while false { print x; }; }");
    }

    #[test]
    fn test_with_span() {
        let dec = VarDec::new("Apple", "Int", None).with_span(Span::new(0, 15));
        assert_eq!(dec.span, Span::new(0, 15));
        let stmt = Stmt::print(Expr::int(1)).with_span(Span::new(4, 11));
        assert_eq!(stmt.span, Span::new(4, 11));
        assert_eq!(stmt.ty, None);
    }
}
