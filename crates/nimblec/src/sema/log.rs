//! Error log for semantic violations
//!
//! The analyzer never stops at the first problem. Each violation is
//! recorded here with the offending node's text and span, and analysis
//! carries on with the node typed as `Error`.

use std::fmt;

use crate::common::Span;

/// Kind of semantic rule that was violated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    AssignToWrongType,
    ConditionNotBool,
    UnprintableExpression,
    InvalidNegation,
    InvalidBinaryOp,
    UndefinedName,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::AssignToWrongType => "ASSIGN_TO_WRONG_TYPE",
            Category::ConditionNotBool => "CONDITION_NOT_BOOL",
            Category::UnprintableExpression => "UNPRINTABLE_EXPRESSION",
            Category::InvalidNegation => "INVALID_NEGATION",
            Category::InvalidBinaryOp => "INVALID_BINARY_OP",
            Category::UndefinedName => "UNDEFINED_NAME",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single recorded violation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Source text of the offending node
    pub text: String,
    pub span: Span,
    pub category: Category,
    pub message: String,
}

/// Accumulated violations of one analysis run
#[derive(Debug, Clone, Default)]
pub struct ErrorLog {
    entries: Vec<LogEntry>,
}

impl ErrorLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(
        &mut self,
        text: impl Into<String>,
        span: Span,
        category: Category,
        message: impl Into<String>,
    ) {
        self.entries.push(LogEntry {
            text: text.into(),
            span,
            category,
            message: message.into(),
        });
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn total_entries(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count(&self, category: Category) -> usize {
        self.entries.iter().filter(|e| e.category == category).count()
    }

    /// True when exactly `count` entries of `category` were recorded for a
    /// node whose text is `text`
    pub fn includes_exactly(&self, category: Category, count: usize, text: &str) -> bool {
        let found = self
            .entries
            .iter()
            .filter(|e| e.category == category && e.text == text)
            .count();
        found == count
    }
}

impl fmt::Display for ErrorLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{}: {}: {}", entry.category, entry.text, entry.message)?;
        }
        Ok(())
    }
}
