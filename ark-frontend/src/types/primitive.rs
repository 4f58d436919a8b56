//! Primitive types
//!
//! Every primitive is a plain tag. The display table in `name` is the single
//! source of truth for spelling; `from_name` is its inverse.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveType {
    I8,
    I16,
    I32,
    I64,
    I128,

    U8,
    U16,
    U32,
    U64,
    U128,

    F32,
    F64,
    F128,

    Str,
    Rune,

    /// Platform-width signed integer
    Int,
    /// Platform-width unsigned integer
    Uint,

    Bool,
}

impl PrimitiveType {
    pub const ALL: [PrimitiveType; 18] = [
        PrimitiveType::I8,
        PrimitiveType::I16,
        PrimitiveType::I32,
        PrimitiveType::I64,
        PrimitiveType::I128,
        PrimitiveType::U8,
        PrimitiveType::U16,
        PrimitiveType::U32,
        PrimitiveType::U64,
        PrimitiveType::U128,
        PrimitiveType::F32,
        PrimitiveType::F64,
        PrimitiveType::F128,
        PrimitiveType::Str,
        PrimitiveType::Rune,
        PrimitiveType::Int,
        PrimitiveType::Uint,
        PrimitiveType::Bool,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PrimitiveType::I8 => "i8",
            PrimitiveType::I16 => "i16",
            PrimitiveType::I32 => "i32",
            PrimitiveType::I64 => "i64",
            PrimitiveType::I128 => "i128",
            PrimitiveType::U8 => "u8",
            PrimitiveType::U16 => "u16",
            PrimitiveType::U32 => "u32",
            PrimitiveType::U64 => "u64",
            PrimitiveType::U128 => "u128",
            PrimitiveType::F32 => "f32",
            PrimitiveType::F64 => "f64",
            PrimitiveType::F128 => "f128",
            PrimitiveType::Str => "str",
            PrimitiveType::Rune => "rune",
            PrimitiveType::Int => "int",
            PrimitiveType::Uint => "uint",
            PrimitiveType::Bool => "bool",
        }
    }

    /// Look up a primitive by the keyword the parser saw
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    pub fn is_integer(self) -> bool {
        matches!(
            self,
            PrimitiveType::I8
                | PrimitiveType::I16
                | PrimitiveType::I32
                | PrimitiveType::I64
                | PrimitiveType::I128
                | PrimitiveType::U8
                | PrimitiveType::U16
                | PrimitiveType::U32
                | PrimitiveType::U64
                | PrimitiveType::U128
                | PrimitiveType::Int
                | PrimitiveType::Uint
        )
    }

    pub fn is_floating(self) -> bool {
        matches!(self, PrimitiveType::F32 | PrimitiveType::F64 | PrimitiveType::F128)
    }

    /// Signed integers and floats; `false` for everything non-numeric
    pub fn is_signed(self) -> bool {
        matches!(
            self,
            PrimitiveType::I8
                | PrimitiveType::I16
                | PrimitiveType::I32
                | PrimitiveType::I64
                | PrimitiveType::I128
                | PrimitiveType::Int
        ) || self.is_floating()
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
