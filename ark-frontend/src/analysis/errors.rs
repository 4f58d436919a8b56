//! Errors an analyzer reports while walking the tree

use crate::error::AstError;
use ark_common::{CompilerError, Diagnostic, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("invalid operation {operation} on type {operand_type}")]
    InvalidOperation {
        operation: String,
        operand_type: String,
        span: SourceSpan,
    },

    #[error("mismatched operand types for {operation}: {left} and {right}")]
    OperandTypeMismatch {
        operation: String,
        left: String,
        right: String,
        span: SourceSpan,
    },

    #[error(transparent)]
    Boundary(#[from] AstError),
}

impl AnalysisError {
    pub fn span(&self) -> &SourceSpan {
        match self {
            AnalysisError::InvalidOperation { span, .. }
            | AnalysisError::OperandTypeMismatch { span, .. } => span,
            AnalysisError::Boundary(err) => err.span(),
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.to_string(), self.span().clone())
    }
}

impl From<AnalysisError> for CompilerError {
    fn from(err: AnalysisError) -> Self {
        match err {
            AnalysisError::Boundary(err) => err.into(),
            other => {
                let span = other.span().clone();
                CompilerError::semantic_error(other.to_string(), span)
            }
        }
    }
}
