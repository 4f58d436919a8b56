//! Statement AST nodes for Ark

use super::expressions::Expression;
use crate::analysis::Analyzer;
use ark_common::{HasSpan, SourceSpan};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statement {
    pub kind: StatementKind,
    pub span: SourceSpan,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum StatementKind {
    Return(ReturnStat),
}

impl StatementKind {
    pub fn kind_name(&self) -> &'static str {
        match self {
            StatementKind::Return(_) => "ReturnStat",
        }
    }
}

impl Statement {
    pub fn new(kind: StatementKind, span: SourceSpan) -> Self {
        Self { kind, span }
    }

    pub fn ret(value: Expression, span: SourceSpan) -> Self {
        Self::new(StatementKind::Return(ReturnStat { value }), span)
    }

    pub fn analyze<A: Analyzer + ?Sized>(&self, analyzer: &mut A) {
        analyzer.analyze_statement(self);
    }
}

impl HasSpan for Statement {
    fn span(&self) -> &SourceSpan {
        &self.span
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            StatementKind::Return(stat) => stat.fmt(f),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReturnStat {
    pub value: Expression,
}

impl fmt::Display for ReturnStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(ReturnStat: {})", self.value)
    }
}
