//! Typing rules for Nimble operators and statements

use crate::ast::{BinaryOp, BinaryOpClass, UnaryOp};
use crate::types::PrimitiveType;

/// Type checker for Nimble expressions
///
/// Each rule returns the result type, or `None` when the operand types
/// violate it. `Error` operands never satisfy a rule, so a poisoned
/// subexpression makes its parent fail too.
pub struct TypeChecker;

impl TypeChecker {
    pub fn new() -> Self {
        Self
    }

    /// Get the result type of a negation
    pub fn unary_result_type(&self, op: UnaryOp, operand: PrimitiveType) -> Option<PrimitiveType> {
        match (op, operand) {
            (UnaryOp::Neg, PrimitiveType::Int) => Some(PrimitiveType::Int),
            (UnaryOp::Not, PrimitiveType::Bool) => Some(PrimitiveType::Bool),
            _ => None,
        }
    }

    /// Get the result type of a binary operation
    pub fn binary_result_type(
        &self,
        op: BinaryOp,
        left: PrimitiveType,
        right: PrimitiveType,
    ) -> Option<PrimitiveType> {
        let both = |ty: PrimitiveType| left == ty && right == ty;
        match op.class() {
            BinaryOpClass::Multiplicative if both(PrimitiveType::Int) => Some(PrimitiveType::Int),
            BinaryOpClass::Additive if both(PrimitiveType::Int) => Some(PrimitiveType::Int),
            // Only `+` concatenates
            BinaryOpClass::Additive if op == BinaryOp::Add && both(PrimitiveType::String) => {
                Some(PrimitiveType::String)
            }
            BinaryOpClass::Comparison if both(PrimitiveType::Int) => Some(PrimitiveType::Bool),
            _ => None,
        }
    }

    /// Check if a value of type `source` may be stored in a `target` slot
    pub fn is_assignable(&self, target: PrimitiveType, source: PrimitiveType) -> bool {
        !target.is_error() && target == source
    }

    /// Check if a type can be used as an `if`/`while` condition
    pub fn is_condition_type(&self, ty: PrimitiveType) -> bool {
        ty == PrimitiveType::Bool
    }

    pub fn is_printable(&self, ty: PrimitiveType) -> bool {
        !ty.is_error()
    }
}

impl Default for TypeChecker {
    fn default() -> Self {
        Self::new()
    }
}
