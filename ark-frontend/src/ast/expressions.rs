//! Expression AST nodes for Ark
//!
//! Literals have a fixed type known at construction. Operator expressions
//! start out unresolved; the analyzer writes their type exactly once, and
//! `get_type` refuses to answer until it has.

use super::ops::{BinaryOp, UnaryOp};
use crate::analysis::Analyzer;
use crate::error::AstError;
use crate::types::{PrimitiveType, Type};
use ark_common::{HasSpan, SourceSpan};
use once_cell::unsync::OnceCell;
use serde::{Serialize, Serializer};
use std::fmt;
use std::rc::Rc;

/// Default type of an integer literal
pub const DEFAULT_INTEGER_TYPE: PrimitiveType = PrimitiveType::Int;
/// Default type of a floating literal
pub const DEFAULT_FLOATING_TYPE: PrimitiveType = PrimitiveType::F64;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Expression {
    pub kind: ExpressionKind,
    pub span: SourceSpan,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ExpressionKind {
    Rune(RuneLiteral),
    Integer(IntegerLiteral),
    Floating(FloatingLiteral),
    String(StringLiteral),
    Binary(BinaryExpr),
    Unary(UnaryExpr),
}

impl ExpressionKind {
    pub fn kind_name(&self) -> &'static str {
        match self {
            ExpressionKind::Rune(_) => "RuneLiteral",
            ExpressionKind::Integer(_) => "IntegerLiteral",
            ExpressionKind::Floating(_) => "FloatingLiteral",
            ExpressionKind::String(_) => "StringLiteral",
            ExpressionKind::Binary(_) => "BinaryExpr",
            ExpressionKind::Unary(_) => "UnaryExpr",
        }
    }

    /// Type of a literal; `None` for operator expressions
    pub fn fixed_type(&self) -> Option<PrimitiveType> {
        match self {
            ExpressionKind::Rune(_) => Some(PrimitiveType::Rune),
            ExpressionKind::Integer(_) => Some(DEFAULT_INTEGER_TYPE),
            ExpressionKind::Floating(_) => Some(DEFAULT_FLOATING_TYPE),
            ExpressionKind::String(_) => Some(PrimitiveType::Str),
            ExpressionKind::Binary(_) | ExpressionKind::Unary(_) => None,
        }
    }
}

impl Expression {
    pub fn new(kind: ExpressionKind, span: SourceSpan) -> Self {
        Self { kind, span }
    }

    pub fn binary(left: Expression, op: BinaryOp, right: Expression, span: SourceSpan) -> Self {
        Self::new(BinaryExpr::new(left, op, right).into(), span)
    }

    pub fn unary(op: UnaryOp, operand: Expression, span: SourceSpan) -> Self {
        Self::new(UnaryExpr::new(op, operand).into(), span)
    }

    /// The type of this expression.
    ///
    /// Fails with `AstError::UnresolvedType` for an operator expression the
    /// analyzer has not resolved yet.
    pub fn get_type(&self) -> Result<Rc<Type>, AstError> {
        let unresolved = || AstError::UnresolvedType {
            kind: self.kind.kind_name(),
            span: self.span.clone(),
        };

        match self.resolved_slot() {
            Some(slot) => slot.get().cloned().ok_or_else(unresolved),
            None => {
                let primitive = self.kind.fixed_type().ok_or_else(unresolved)?;
                Ok(Rc::new(Type::Primitive(primitive)))
            }
        }
    }

    fn resolved_slot(&self) -> Option<&ResolvedType> {
        match &self.kind {
            ExpressionKind::Binary(expr) => Some(&expr.ty),
            ExpressionKind::Unary(expr) => Some(&expr.ty),
            _ => None,
        }
    }

    /// Record the analyzer's verdict for an operator expression.
    ///
    /// Each operator expression can be resolved once; literals never.
    pub fn resolve_type(&self, ty: Rc<Type>) -> Result<(), AstError> {
        let slot = self.resolved_slot().ok_or_else(|| AstError::FixedType {
            kind: self.kind.kind_name(),
            span: self.span.clone(),
        })?;
        slot.set(ty).map_err(|_| AstError::TypeAlreadyResolved {
            kind: self.kind.kind_name(),
            existing: slot.get().map(|t| t.type_name()).unwrap_or_default(),
            span: self.span.clone(),
        })
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved_slot().map_or(true, ResolvedType::is_resolved)
    }

    pub fn analyze<A: Analyzer + ?Sized>(&self, analyzer: &mut A) {
        analyzer.analyze_expression(self);
    }
}

impl HasSpan for Expression {
    fn span(&self) -> &SourceSpan {
        &self.span
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExpressionKind::Rune(lit) => lit.fmt(f),
            ExpressionKind::Integer(lit) => lit.fmt(f),
            ExpressionKind::Floating(lit) => lit.fmt(f),
            ExpressionKind::String(lit) => lit.fmt(f),
            ExpressionKind::Binary(expr) => expr.fmt(f),
            ExpressionKind::Unary(expr) => expr.fmt(f),
        }
    }
}

/// Write-once slot for the type the analyzer assigns to an operator expression
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedType(OnceCell<Rc<Type>>);

impl ResolvedType {
    pub fn unresolved() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<&Rc<Type>> {
        self.0.get()
    }

    pub fn is_resolved(&self) -> bool {
        self.0.get().is_some()
    }

    fn set(&self, ty: Rc<Type>) -> Result<(), Rc<Type>> {
        self.0.set(ty)
    }
}

impl Serialize for ResolvedType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.get().serialize(serializer)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuneLiteral {
    pub value: char,
}

impl fmt::Display for RuneLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(RuneLiteral: {})", self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntegerLiteral {
    pub value: u64,
}

impl fmt::Display for IntegerLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(IntegerLiteral: {})", self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FloatingLiteral {
    pub value: f64,
}

impl fmt::Display for FloatingLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(FloatingLiteral: {:.6})", self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StringLiteral {
    pub value: String,
}

impl fmt::Display for StringLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(StringLiteral: {})", self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinaryExpr {
    pub left: Box<Expression>,
    pub op: BinaryOp,
    pub right: Box<Expression>,
    pub ty: ResolvedType,
}

impl BinaryExpr {
    pub fn new(left: Expression, op: BinaryOp, right: Expression) -> Self {
        Self {
            left: Box::new(left),
            op,
            right: Box::new(right),
            ty: ResolvedType::unresolved(),
        }
    }
}

impl fmt::Display for BinaryExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(BinaryExpr: {} {} {})", self.left, self.op, self.right)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnaryExpr {
    pub op: UnaryOp,
    pub operand: Box<Expression>,
    pub ty: ResolvedType,
}

impl UnaryExpr {
    pub fn new(op: UnaryOp, operand: Expression) -> Self {
        Self {
            op,
            operand: Box::new(operand),
            ty: ResolvedType::unresolved(),
        }
    }
}

impl fmt::Display for UnaryExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(UnaryExpr: {} {})", self.op, self.operand)
    }
}

macro_rules! impl_into_kind {
    ($($node:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$node> for ExpressionKind {
                fn from(node: $node) -> Self {
                    ExpressionKind::$variant(node)
                }
            }
        )*
    };
}

impl_into_kind! {
    RuneLiteral => Rune,
    IntegerLiteral => Integer,
    FloatingLiteral => Floating,
    StringLiteral => String,
    BinaryExpr => Binary,
    UnaryExpr => Unary,
}
