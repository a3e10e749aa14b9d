//! Expression AST nodes

use std::fmt;

use crate::common::Span;
use crate::types::PrimitiveType;

/// Expression node
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
    /// Type of this expression (filled in during semantic analysis)
    pub ty: Option<PrimitiveType>,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Self {
            kind,
            span,
            ty: None,
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn int(value: i64) -> Self {
        Self::new(ExprKind::IntLiteral(value), Span::default())
    }

    pub fn boolean(value: bool) -> Self {
        Self::new(ExprKind::BoolLiteral(value), Span::default())
    }

    /// String literal from its source lexeme, quotes included
    pub fn string(lexeme: impl Into<String>) -> Self {
        Self::new(ExprKind::StringLiteral(lexeme.into()), Span::default())
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Self::new(ExprKind::Variable(name.into()), Span::default())
    }

    /// Negation whose operator directly precedes the operand, as in `-37`.
    /// Use [`Expr::unary_at`] when the operator's position is known.
    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        let span = if operand.span.is_empty() {
            operand.span
        } else {
            let start = operand.span.start.saturating_sub(op.as_str().len());
            Span::new(start, operand.span.end)
        };
        Self::new(ExprKind::Unary { op, operand: Box::new(operand) }, span)
    }

    pub fn unary_at(op: UnaryOp, op_span: Span, operand: Expr) -> Self {
        let span = op_span.merge(operand.span);
        Self::new(ExprKind::Unary { op, operand: Box::new(operand) }, span)
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        let span = left.span.merge(right.span);
        Self::new(
            ExprKind::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
            span,
        )
    }

    /// Parentheses hugging the inner expression, as in `(37)`.
    /// Use [`Expr::parens_at`] when the delimiters' positions are known.
    pub fn parens(inner: Expr) -> Self {
        let span = if inner.span.is_empty() {
            inner.span
        } else {
            Span::new(inner.span.start.saturating_sub(1), inner.span.end + 1)
        };
        Self::new(ExprKind::Parens(Box::new(inner)), span)
    }

    pub fn parens_at(open: Span, inner: Expr, close: Span) -> Self {
        Self::new(ExprKind::Parens(Box::new(inner)), open.merge(close))
    }
}

/// Expression kinds
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// Integer literal: 42
    IntLiteral(i64),

    /// Boolean literal: true, false
    BoolLiteral(bool),

    /// String literal, stored as its lexeme: "hello"
    StringLiteral(String),

    /// Variable reference: apple
    Variable(String),

    /// Negation: -x, !flag
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },

    /// Binary operation: a + b, x * y, a < b
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// Parenthesized expression: (x)
    Parens(Box<Expr>),
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    // Multiplicative
    Mul,
    Div,

    // Additive
    Add,
    Sub,

    // Comparison
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

/// Precedence family of a binary operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOpClass {
    Multiplicative,
    Additive,
    Comparison,
}

impl BinaryOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Le => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::Ge => ">=",
        }
    }

    pub fn class(&self) -> BinaryOpClass {
        match self {
            BinaryOp::Mul | BinaryOp::Div => BinaryOpClass::Multiplicative,
            BinaryOp::Add | BinaryOp::Sub => BinaryOpClass::Additive,
            BinaryOp::Eq
            | BinaryOp::Ne
            | BinaryOp::Lt
            | BinaryOp::Le
            | BinaryOp::Gt
            | BinaryOp::Ge => BinaryOpClass::Comparison,
        }
    }

    pub fn is_comparison(&self) -> bool {
        self.class() == BinaryOpClass::Comparison
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,     // -x
    Not,     // !x
}

impl UnaryOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Not => "!",
        }
    }
}

/// Renders the expression's tokens with no whitespace between them.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::IntLiteral(value) => write!(f, "{}", value),
            ExprKind::BoolLiteral(value) => write!(f, "{}", value),
            ExprKind::StringLiteral(lexeme) => f.write_str(lexeme),
            ExprKind::Variable(name) => f.write_str(name),
            ExprKind::Unary { op, operand } => write!(f, "{}{}", op.as_str(), operand),
            ExprKind::Binary { op, left, right } => {
                write!(f, "{}{}{}", left, op.as_str(), right)
            }
            ExprKind::Parens(inner) => write!(f, "({})", inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_whitespace_free() {
        let expr = Expr::parens(Expr::binary(
            BinaryOp::Sub,
            Expr::int(1),
            Expr::unary(UnaryOp::Neg, Expr::int(2)),
        ));
        assert_eq!(expr.to_string(), "(1--2)");

        let concat = Expr::binary(
            BinaryOp::Add,
            Expr::string("\"HELLO\""),
            Expr::string("\"WORLD\""),
        );
        assert_eq!(concat.to_string(), "\"HELLO\"+\"WORLD\"");
    }

    #[test]
    fn test_operator_classes() {
        assert_eq!(BinaryOp::Div.class(), BinaryOpClass::Multiplicative);
        assert_eq!(BinaryOp::Sub.class(), BinaryOpClass::Additive);
        assert!(BinaryOp::Le.is_comparison());
        assert!(!BinaryOp::Add.is_comparison());
    }

    #[test]
    fn test_binary_span_covers_operands() {
        let expr = Expr::binary(
            BinaryOp::Lt,
            Expr::int(1).with_span(Span::new(0, 1)),
            Expr::int(2).with_span(Span::new(2, 3)),
        );
        assert_eq!(expr.span, Span::new(0, 3));
        assert_eq!(expr.ty, None);
    }

    #[test]
    fn test_unary_and_parens_spans_cover_delimiters() {
        // (!true)
        let expr = Expr::parens(Expr::unary(
            UnaryOp::Not,
            Expr::boolean(true).with_span(Span::new(2, 6)),
        ));
        assert_eq!(expr.span, Span::new(0, 7));
        if let ExprKind::Parens(inner) = &expr.kind {
            assert_eq!(inner.span, Span::new(1, 6));
        }

        // ( - 37 )
        let neg = Expr::unary_at(UnaryOp::Neg, Span::new(2, 3), Expr::int(37).with_span(Span::new(4, 6)));
        assert_eq!(neg.span, Span::new(2, 6));
        let wrapped = Expr::parens_at(Span::new(0, 1), neg, Span::new(7, 8));
        assert_eq!(wrapped.span, Span::new(0, 8));
        assert_eq!(wrapped.to_string(), "(-37)");

        assert_eq!(Expr::unary(UnaryOp::Neg, Expr::int(1)).span, Span::default());
    }
}
