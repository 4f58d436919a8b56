//! Abstract Syntax Tree definitions for Ark
//!
//! The parser builds these nodes once, in source order. The only mutation
//! afterwards is the semantic analyzer writing the resolved type of operator
//! expressions, which goes through a write-once cell.
//!
//! Every node renders a debug s-expression through `Display`:
//! `(Kind: field field ...)`, with containers putting each child on its own
//! tab-indented line.

pub mod attrs;
pub mod containers;
pub mod declarations;
pub mod expressions;
pub mod ops;
pub mod statements;

pub use attrs::Attr;
pub use containers::{Block, List, ParameterList};
pub use declarations::{
    Declaration, DeclarationKind, Function, FunctionDecl, StructDecl, Variable, VariableDecl,
};
pub use expressions::{
    BinaryExpr, Expression, ExpressionKind, FloatingLiteral, IntegerLiteral, ResolvedType,
    RuneLiteral, StringLiteral, UnaryExpr,
};
pub use ops::{BinaryOp, UnaryOp};
pub use statements::{ReturnStat, Statement, StatementKind};

use crate::analysis::Analyzer;
use serde::Serialize;
use std::fmt;

/// Any syntactic construct that can sit in a block
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Node {
    Declaration(Declaration),
    Statement(Statement),
    Expression(Expression),
}

impl Node {
    /// Run the analysis hook for this node and everything below it
    pub fn analyze<A: Analyzer + ?Sized>(&self, analyzer: &mut A) {
        analyzer.analyze_node(self);
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Declaration(decl) => decl.kind.kind_name(),
            Node::Statement(stat) => stat.kind.kind_name(),
            Node::Expression(expr) => expr.kind.kind_name(),
        }
    }
}

impl From<Declaration> for Node {
    fn from(decl: Declaration) -> Self {
        Node::Declaration(decl)
    }
}

impl From<Statement> for Node {
    fn from(stat: Statement) -> Self {
        Node::Statement(stat)
    }
}

impl From<Expression> for Node {
    fn from(expr: Expression) -> Self {
        Node::Expression(expr)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Declaration(decl) => decl.fmt(f),
            Node::Statement(stat) => stat.fmt(f),
            Node::Expression(expr) => expr.fmt(f),
        }
    }
}

/// Dump any tree fragment as pretty-printed JSON
pub fn to_json<T: Serialize + ?Sized>(node: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(node)
}

/// Write `child` on its own line, one tab deeper than the enclosing container.
pub(crate) fn write_indented(f: &mut fmt::Formatter<'_>, child: &dyn fmt::Display) -> fmt::Result {
    for line in child.to_string().lines() {
        writeln!(f, "\t{}", line)?;
    }
    Ok(())
}
