//! Errors raised by the AST itself
//!
//! The tree has no fallible construction; these cover reading or writing an
//! operator expression's resolved type at the wrong moment.

use ark_common::{CompilerError, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AstError {
    #[error("type of {kind} at {span} read before analysis resolved it")]
    UnresolvedType { kind: &'static str, span: SourceSpan },

    #[error("type of {kind} at {span} already resolved to {existing}")]
    TypeAlreadyResolved {
        kind: &'static str,
        existing: String,
        span: SourceSpan,
    },

    #[error("{kind} at {span} has a fixed type and cannot be resolved")]
    FixedType { kind: &'static str, span: SourceSpan },
}

impl AstError {
    pub fn span(&self) -> &SourceSpan {
        match self {
            AstError::UnresolvedType { span, .. }
            | AstError::TypeAlreadyResolved { span, .. }
            | AstError::FixedType { span, .. } => span,
        }
    }
}

impl From<AstError> for CompilerError {
    fn from(err: AstError) -> Self {
        let span = err.span().clone();
        CompilerError::type_error(err.to_string(), span)
    }
}
