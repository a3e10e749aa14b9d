//! Error types and diagnostic reporting

use codespan_reporting::diagnostic::{Diagnostic, Label};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, NoColor, StandardStream};
use thiserror::Error;
use super::Span;
use crate::sema::{ErrorLog, LogEntry};

/// Hard failure of the compiler itself.
///
/// Semantic rule violations in the analysed program are never reported
/// through this type; they are collected in an [`ErrorLog`].
#[derive(Error, Debug)]
pub enum CompileError {
    #[error("Internal error at {span:?}: {message}")]
    Internal { message: String, span: Span },

    #[error("Render error: {0}")]
    Render(#[from] codespan_reporting::files::Error),
}

impl CompileError {
    pub fn internal(message: impl Into<String>, span: Span) -> Self {
        Self::Internal {
            message: message.into(),
            span,
        }
    }
}

pub type CompileResult<T> = Result<T, CompileError>;

/// Diagnostic reporter for pretty error output
pub struct DiagnosticReporter {
    files: SimpleFiles<String, String>,
    writer: StandardStream,
    config: term::Config,
}

impl DiagnosticReporter {
    pub fn new() -> Self {
        Self {
            files: SimpleFiles::new(),
            writer: StandardStream::stderr(ColorChoice::Auto),
            config: term::Config::default(),
        }
    }

    pub fn add_file(&mut self, name: impl Into<String>, source: impl Into<String>) -> usize {
        self.files.add(name.into(), source.into())
    }

    pub fn report_error(&self, file_id: usize, error: &CompileError) {
        let diagnostic = match error {
            CompileError::Internal { message, span } => Diagnostic::error()
                .with_message("Internal compiler error")
                .with_labels(vec![
                    Label::primary(file_id, span.start..span.end).with_message(message)
                ]),

            CompileError::Render(err) => {
                Diagnostic::error().with_message(format!("Render error: {}", err))
            }
        };

        let _ = term::emit(&mut self.writer.lock(), &self.config, &self.files, &diagnostic);
    }

    /// Print every entry of the log to stderr
    pub fn report_log(&self, file_id: usize, log: &ErrorLog) {
        let mut writer = self.writer.lock();
        for entry in log.entries() {
            let diagnostic = entry_diagnostic(file_id, entry);
            let _ = term::emit(&mut writer, &self.config, &self.files, &diagnostic);
        }
    }

    /// Render every entry of the log without colour
    pub fn render_log(&self, file_id: usize, log: &ErrorLog) -> CompileResult<String> {
        let mut buffer = NoColor::new(Vec::new());
        for entry in log.entries() {
            let diagnostic = entry_diagnostic(file_id, entry);
            term::emit(&mut buffer, &self.config, &self.files, &diagnostic)?;
        }
        Ok(String::from_utf8_lossy(&buffer.into_inner()).into_owned())
    }
}

impl Default for DiagnosticReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn entry_diagnostic(file_id: usize, entry: &LogEntry) -> Diagnostic<usize> {
    Diagnostic::error()
        .with_code(entry.category.as_str())
        .with_message(&entry.message)
        .with_labels(vec![
            Label::primary(file_id, entry.span.start..entry.span.end).with_message(&entry.text)
        ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sema::Category;

    #[test]
    fn test_render_log_entry() {
        let source = "var Apple : Int = true\n";
        let mut reporter = DiagnosticReporter::new();
        let file_id = reporter.add_file("apple.nimble", source);

        let mut log = ErrorLog::new();
        log.add(
            "var Apple : Int = true",
            Span::new(0, 22),
            Category::AssignToWrongType,
            "Apple is declared Int but initialised with Bool",
        );

        let output = reporter.render_log(file_id, &log).unwrap();
        assert!(output.contains("error[ASSIGN_TO_WRONG_TYPE]"));
        assert!(output.contains("Apple is declared Int but initialised with Bool"));
        assert!(output.contains("apple.nimble"));
    }

    #[test]
    fn test_render_analyzed_declaration() {
        use crate::ast::{Expr, VarDec};
        use crate::sema::{SymbolTable, TypeInference};

        let source = "var Apple : Int = true\n";
        let mut reporter = DiagnosticReporter::new();
        let file_id = reporter.add_file("apple.nimble", source);

        let mut decl = VarDec::new("Apple", "Int", Some(Expr::boolean(true).with_span(Span::new(18, 22))))
            .with_span(Span::new(0, 22));
        let mut symbols = SymbolTable::new();
        let mut log = ErrorLog::new();
        TypeInference::new(&mut symbols, &mut log).analyze_var_dec(&mut decl);

        assert_eq!(log.entries()[0].span, Span::new(0, 22));
        let output = reporter.render_log(file_id, &log).unwrap();
        assert!(output.contains("apple.nimble:1:1"));
        assert!(output.contains("'Apple' is declared Int but initialised with Bool"));
    }

    #[test]
    fn test_render_empty_log() {
        let mut reporter = DiagnosticReporter::new();
        let file_id = reporter.add_file("empty.nimble", "print 1\n");
        let output = reporter.render_log(file_id, &ErrorLog::new()).unwrap();
        assert!(output.is_empty());
    }

    #[test]
    fn test_internal_error_display() {
        let err = CompileError::internal("node left untyped", Span::new(3, 5));
        assert_eq!(
            err.to_string(),
            "Internal error at Span { start: 3, end: 5 }: node left untyped"
        );
    }
}
