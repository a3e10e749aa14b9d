//! Nimble Compiler - semantic analysis for the Nimble scripting language
//!
//! Nimble is a small statically typed language with `Int`, `Bool` and
//! `String` values, variable declarations, assignment, `if`/`while`,
//! `print` and the usual arithmetic, comparison and concatenation
//! operators. This library takes a parsed syntax tree and annotates it.
//!
//! ## Architecture
//!
//! The compiler is organized into:
//! - **AST** (`ast/`): The syntax tree handed over by the parser
//! - **Sema** (`sema/`): Type inference, symbol table and error log
//! - **Common** (`common/`): Shared infrastructure (errors, spans, reporting)
//! - **Types** (`types/`): The primitive type set

pub mod common;
pub mod types;
pub mod ast;
pub mod sema;

// Re-exports for convenience
pub use common::{CompileError, CompileResult, DiagnosticReporter, Span};
pub use sema::{check_script, Analysis, Category, ErrorLog, SemaConfig, SymbolTable, TypeInference};
pub use types::PrimitiveType;
