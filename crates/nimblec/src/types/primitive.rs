//! Primitive types

use std::fmt;

/// The primitive types of Nimble, plus the error type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Int,
    Bool,
    String,
    /// Poison value for constructs that failed a type rule
    Error,
}

impl PrimitiveType {
    /// Resolve a declared type token (`Int`, `Bool`, `String`).
    ///
    /// Matching is exact and case-sensitive. `Error` is not nameable in
    /// source, so it is never returned.
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "Int" => Some(PrimitiveType::Int),
            "Bool" => Some(PrimitiveType::Bool),
            "String" => Some(PrimitiveType::String),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PrimitiveType::Int => "Int",
            PrimitiveType::Bool => "Bool",
            PrimitiveType::String => "String",
            PrimitiveType::Error => "Error",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, PrimitiveType::Error)
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
