//! Common infrastructure shared by the tree and the analysis passes

mod error;
mod span;

pub use error::{CompileError, CompileResult, DiagnosticReporter};
pub use span::Span;
