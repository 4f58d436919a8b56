//! Type algebra for Ark
//!
//! A type is a primitive tag, a named struct, or a pointer to another type.
//! Types are immutable once built and shared through `Rc`, so a single
//! `Rc<Type>` may be referenced by any number of variables and expressions.
//!
//! Pointer chains are finite (the parser never builds a pointer that reaches
//! itself), which is what makes `raw_type` and `levels_of_indirection` total.

mod primitive;

pub use primitive::PrimitiveType;

use crate::ast::{write_indented, Attr, ParameterList, VariableDecl};
use serde::Serialize;
use std::fmt;
use std::rc::Rc;

/// Marker prepended to the addressee's name for each pointer layer
pub const POINTER_MARKER: &str = "^";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Type {
    Primitive(PrimitiveType),
    Struct(Rc<StructType>),
    Pointer(PointerType),
}

impl Type {
    pub fn pointer_to(addressee: Rc<Type>) -> Type {
        Type::Pointer(PointerType { addressee })
    }

    pub fn type_name(&self) -> String {
        match self {
            Type::Primitive(primitive) => primitive.name().to_string(),
            Type::Struct(s) => s.name.clone(),
            Type::Pointer(pointer) => format!("{}{}", POINTER_MARKER, pointer.addressee.type_name()),
        }
    }

    /// The type with all pointer indirection stripped
    pub fn raw_type(&self) -> &Type {
        match self {
            Type::Pointer(pointer) => pointer.addressee.raw_type(),
            Type::Primitive(_) | Type::Struct(_) => self,
        }
    }

    /// Number of pointer layers between this type and its raw type
    pub fn levels_of_indirection(&self) -> usize {
        match self {
            Type::Pointer(pointer) => pointer.addressee.levels_of_indirection() + 1,
            Type::Primitive(_) | Type::Struct(_) => 0,
        }
    }

    pub fn is_integer_type(&self) -> bool {
        match self {
            Type::Primitive(primitive) => primitive.is_integer(),
            Type::Struct(_) | Type::Pointer(_) => false,
        }
    }

    pub fn is_floating_type(&self) -> bool {
        match self {
            Type::Primitive(primitive) => primitive.is_floating(),
            Type::Struct(_) | Type::Pointer(_) => false,
        }
    }

    pub fn is_pointer(&self) -> bool {
        matches!(self, Type::Pointer(_))
    }

    /// One layer down: the pointee of a pointer, `None` for anything else
    pub fn addressee(&self) -> Option<&Rc<Type>> {
        match self {
            Type::Pointer(pointer) => Some(&pointer.addressee),
            _ => None,
        }
    }

    pub fn as_primitive(&self) -> Option<PrimitiveType> {
        match self {
            Type::Primitive(primitive) => Some(*primitive),
            _ => None,
        }
    }

    pub fn as_struct(&self) -> Option<&Rc<StructType>> {
        match self {
            Type::Struct(s) => Some(s),
            _ => None,
        }
    }
}

impl From<PrimitiveType> for Type {
    fn from(primitive: PrimitiveType) -> Self {
        Type::Primitive(primitive)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.type_name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointerType {
    pub addressee: Rc<Type>,
}

/// Named aggregate with fields in declaration order
#[derive(Debug, Clone, Serialize)]
pub struct StructType {
    pub name: String,
    pub fields: ParameterList,
    pub attrs: Vec<Attr>,
}

impl StructType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: ParameterList::new(),
            attrs: Vec::new(),
        }
    }

    pub fn field(&self, name: &str) -> Option<&VariableDecl> {
        self.fields.iter().find(|field| field.variable.name == name)
    }
}

// Structs are nominal: two struct types are the same type iff they share a name.
impl PartialEq for StructType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Display for StructType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(StructType: ")?;
        for attr in &self.attrs {
            write!(f, "{} ", attr)?;
        }
        writeln!(f, "{}", self.name)?;
        for field in &self.fields {
            write_indented(f, field)?;
        }
        write!(f, ")")
    }
}
