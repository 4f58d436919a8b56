//! Ark Compiler - Common Types and Utilities
//! 
//! This crate contains source location tracking, the compiler-wide error
//! type and diagnostic reporting shared by every phase of the Ark compiler.

pub mod error;
pub mod source_loc;

pub use error::{CompilerError, Diagnostic, ErrorReporter, Severity};
pub use source_loc::{HasSpan, SourceLocation, SourceSpan};
