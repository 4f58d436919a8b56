//! Declaration AST nodes for Ark
//!
//! `Variable` and `Function` are the bindings themselves and are shared
//! through `Rc` so symbol tables can hold on to them; the `*Decl` nodes are
//! what appears in the tree.

use super::containers::{Block, ParameterList};
use super::expressions::Expression;
use super::Attr;
use crate::analysis::Analyzer;
use crate::types::{StructType, Type};
use ark_common::{HasSpan, SourceSpan};
use serde::Serialize;
use std::fmt;
use std::rc::Rc;

/// A named, typed binding: parameter, field or local
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Variable {
    pub name: String,
    pub ty: Rc<Type>,
    pub mutable: bool,
    pub attrs: Vec<Attr>,
}

impl Variable {
    pub fn new(name: impl Into<String>, ty: Rc<Type>) -> Self {
        Self {
            name: name.into(),
            ty,
            mutable: false,
            attrs: Vec::new(),
        }
    }

    pub fn mutable(mut self) -> Self {
        self.mutable = true;
        self
    }

    pub fn with_attr(mut self, attr: Attr) -> Self {
        self.attrs.push(attr);
        self
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(Variable: ")?;
        write_binding_prefix(f, self.mutable, &self.attrs)?;
        write!(f, "{} {})", self.name, self.ty.type_name())
    }
}

/// A callable. `body` is `None` for external and forward declarations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Function {
    pub name: String,
    pub parameters: ParameterList,
    pub return_type: Rc<Type>,
    pub mutable: bool,
    pub attrs: Vec<Attr>,
    pub body: Option<Block>,
}

impl Function {
    pub fn new(name: impl Into<String>, return_type: Rc<Type>) -> Self {
        Self {
            name: name.into(),
            parameters: ParameterList::new(),
            return_type,
            mutable: false,
            attrs: Vec::new(),
            body: None,
        }
    }

    pub fn is_prototype(&self) -> bool {
        self.body.is_none()
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(Function: ")?;
        write_binding_prefix(f, self.mutable, &self.attrs)?;
        write!(f, "{} {}: {}", self.name, self.parameters, self.return_type.type_name())?;
        if let Some(body) = &self.body {
            write!(f, " {}", body)?;
        }
        write!(f, ")")
    }
}

fn write_binding_prefix(f: &mut fmt::Formatter<'_>, mutable: bool, attrs: &[Attr]) -> fmt::Result {
    if mutable {
        write!(f, "[mutable] ")?;
    }
    for attr in attrs {
        write!(f, "{} ", attr)?;
    }
    Ok(())
}

/// A variable, optionally with an initializer (or a parameter default)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableDecl {
    pub variable: Rc<Variable>,
    pub assignment: Option<Expression>,
}

impl VariableDecl {
    pub fn new(variable: Variable) -> Self {
        Self {
            variable: Rc::new(variable),
            assignment: None,
        }
    }

    pub fn with_assignment(mut self, assignment: Expression) -> Self {
        self.assignment = Some(assignment);
        self
    }
}

impl fmt::Display for VariableDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.assignment {
            Some(assignment) => write!(f, "(VariableDecl: {} = {})", self.variable, assignment),
            None => write!(f, "(VariableDecl: {})", self.variable),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructDecl {
    pub struct_type: Rc<StructType>,
}

impl StructDecl {
    /// The declared struct as a type other nodes can reference
    pub fn declared_type(&self) -> Rc<Type> {
        Rc::new(Type::Struct(Rc::clone(&self.struct_type)))
    }
}

impl fmt::Display for StructDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(StructDecl: {})", self.struct_type)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionDecl {
    pub function: Rc<Function>,
}

impl fmt::Display for FunctionDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(FunctionDecl: {})", self.function)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Declaration {
    pub kind: DeclarationKind,
    pub span: SourceSpan,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DeclarationKind {
    Variable(VariableDecl),
    Struct(StructDecl),
    Function(FunctionDecl),
}

impl DeclarationKind {
    pub fn kind_name(&self) -> &'static str {
        match self {
            DeclarationKind::Variable(_) => "VariableDecl",
            DeclarationKind::Struct(_) => "StructDecl",
            DeclarationKind::Function(_) => "FunctionDecl",
        }
    }
}

impl Declaration {
    pub fn new(kind: DeclarationKind, span: SourceSpan) -> Self {
        Self { kind, span }
    }

    pub fn variable(decl: VariableDecl, span: SourceSpan) -> Self {
        Self::new(DeclarationKind::Variable(decl), span)
    }

    pub fn structure(struct_type: StructType, span: SourceSpan) -> Self {
        Self::new(
            DeclarationKind::Struct(StructDecl { struct_type: Rc::new(struct_type) }),
            span,
        )
    }

    pub fn function(function: Function, span: SourceSpan) -> Self {
        Self::new(
            DeclarationKind::Function(FunctionDecl { function: Rc::new(function) }),
            span,
        )
    }

    pub fn analyze<A: Analyzer + ?Sized>(&self, analyzer: &mut A) {
        analyzer.analyze_declaration(self);
    }
}

impl HasSpan for Declaration {
    fn span(&self) -> &SourceSpan {
        &self.span
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DeclarationKind::Variable(decl) => decl.fmt(f),
            DeclarationKind::Struct(decl) => decl.fmt(f),
            DeclarationKind::Function(decl) => decl.fmt(f),
        }
    }
}
