//! Error handling for the Ark compiler
//!
//! `CompilerError` is what a phase returns when it gives up; `Diagnostic`
//! and `ErrorReporter` collect everything a phase wants to tell the user
//! while it keeps going.

use crate::source_loc::SourceSpan;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Main compiler error type shared by all phases
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompilerError {
    #[error("Semantic error at {span}: {message}")]
    SemanticError { span: SourceSpan, message: String },

    #[error("Type error at {span}: {message}")]
    TypeError { span: SourceSpan, message: String },

    #[error("Internal compiler error: {message}")]
    InternalError { message: String },
}

impl CompilerError {
    pub fn semantic_error(message: impl Into<String>, span: SourceSpan) -> Self {
        CompilerError::SemanticError { span, message: message.into() }
    }

    pub fn type_error(message: impl Into<String>, span: SourceSpan) -> Self {
        CompilerError::TypeError { span, message: message.into() }
    }

    /// Span the error points at, if it has one
    pub fn span(&self) -> Option<&SourceSpan> {
        match self {
            CompilerError::SemanticError { span, .. } | CompilerError::TypeError { span, .. } => Some(span),
            CompilerError::InternalError { .. } => None,
        }
    }
}

impl From<String> for CompilerError {
    fn from(message: String) -> Self {
        CompilerError::InternalError { message }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
    Note,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Note => write!(f, "note"),
        }
    }
}

/// A message with a location and severity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub span: SourceSpan,
    pub notes: Vec<String>,
}

impl Diagnostic {
    pub fn new(severity: Severity, message: impl Into<String>, span: SourceSpan) -> Self {
        Self {
            severity,
            message: message.into(),
            span,
            notes: Vec::new(),
        }
    }

    pub fn error(message: impl Into<String>, span: SourceSpan) -> Self {
        Self::new(Severity::Error, message, span)
    }

    pub fn warning(message: impl Into<String>, span: SourceSpan) -> Self {
        Self::new(Severity::Warning, message, span)
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

impl From<&CompilerError> for Diagnostic {
    fn from(err: &CompilerError) -> Self {
        let span = err.span().cloned().unwrap_or_else(SourceSpan::dummy);
        Diagnostic::error(err.to_string(), span)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.severity, self.message, self.span)?;
        for note in &self.notes {
            write!(f, "\n  note: {}", note)?;
        }
        Ok(())
    }
}

/// Collects diagnostics in the order they were reported
#[derive(Debug, Clone, Default)]
pub struct ErrorReporter {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
    warning_count: usize,
}

impl ErrorReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Error => self.error_count += 1,
            Severity::Warning => self.warning_count += 1,
            Severity::Note => {}
        }
        self.diagnostics.push(diagnostic);
    }

    pub fn error(&mut self, message: impl Into<String>, span: SourceSpan) {
        self.report(Diagnostic::error(message, span));
    }

    pub fn warning(&mut self, message: impl Into<String>, span: SourceSpan) {
        self.report(Diagnostic::warning(message, span));
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn warning_count(&self) -> usize {
        self.warning_count
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn clear(&mut self) {
        self.diagnostics.clear();
        self.error_count = 0;
        self.warning_count = 0;
    }

    pub fn summary(&self) -> String {
        let plural = |n: usize| if n == 1 { "" } else { "s" };
        match (self.error_count, self.warning_count) {
            (0, 0) => "No errors or warnings".to_string(),
            (0, w) => format!("{} warning{}", w, plural(w)),
            (e, 0) => format!("{} error{}", e, plural(e)),
            (e, w) => format!("{} error{} and {} warning{}", e, plural(e), w, plural(w)),
        }
    }
}
