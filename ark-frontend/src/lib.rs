//! Ark Compiler - Frontend core
//!
//! This crate holds the pieces every later phase works through:
//! - Types: primitives, structs and pointers, with raw-type and
//!   indirection queries
//! - AST: declarations, statements and expressions, plus the ordered
//!   containers that hold them
//! - Analysis: the hook surface the semantic analyzer drives, and the
//!   depth-first walk behind it
//!
//! Lexing, parsing, the analyzer's own rules and code generation live
//! elsewhere.

pub mod analysis;
pub mod ast;
pub mod error;
pub mod types;

pub use analysis::{AnalysisContext, AnalysisError, AnalysisOptions, Analyzer};
pub use ast::{
    BinaryExpr, BinaryOp, Block, Declaration, DeclarationKind, Expression, ExpressionKind,
    Function, List, Node, ParameterList, Statement, StatementKind, UnaryExpr, UnaryOp, Variable,
    VariableDecl,
};
pub use error::AstError;
pub use types::{PointerType, PrimitiveType, StructType, Type};
