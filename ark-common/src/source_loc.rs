//! Source locations attached to AST nodes
//!
//! The parser stamps every declaration, statement and expression with the
//! span it was read from so later phases can point diagnostics at code.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in a source file (line and column are 1-based)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    pub filename: String,
    pub line: u32,
    pub column: u32,
}

impl SourceLocation {
    pub fn new(filename: &str, line: u32, column: u32) -> Self {
        Self {
            filename: filename.to_string(),
            line,
            column,
        }
    }

    /// Location used for synthesized nodes and tests
    pub fn dummy() -> Self {
        Self::new("<unknown>", 0, 0)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.filename, self.line, self.column)
    }
}

/// Range between two locations of the same file
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceSpan {
    pub start: SourceLocation,
    pub end: SourceLocation,
}

impl SourceSpan {
    pub fn new(start: SourceLocation, end: SourceLocation) -> Self {
        Self { start, end }
    }

    pub fn from_location(location: SourceLocation) -> Self {
        Self {
            end: location.clone(),
            start: location,
        }
    }

    pub fn dummy() -> Self {
        Self::from_location(SourceLocation::dummy())
    }

    /// Smallest span covering both `self` and `other`.
    ///
    /// Spans from different files cannot be merged; `self` is returned as-is.
    pub fn to(&self, other: &SourceSpan) -> SourceSpan {
        if self.start.filename != other.start.filename {
            return self.clone();
        }

        let key = |loc: &SourceLocation| (loc.line, loc.column);
        let start = if key(&self.start) <= key(&other.start) {
            self.start.clone()
        } else {
            other.start.clone()
        };
        let end = if key(&self.end) >= key(&other.end) {
            self.end.clone()
        } else {
            other.end.clone()
        };

        SourceSpan::new(start, end)
    }
}

impl fmt::Display for SourceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start.filename != self.end.filename {
            write!(f, "{} to {}", self.start, self.end)
        } else if self.start.line != self.end.line {
            write!(
                f,
                "{}:{}:{}-{}:{}",
                self.start.filename, self.start.line, self.start.column, self.end.line, self.end.column
            )
        } else if self.start.column != self.end.column {
            write!(
                f,
                "{}:{}:{}-{}",
                self.start.filename, self.start.line, self.start.column, self.end.column
            )
        } else {
            write!(f, "{}:{}", self.start.filename, self.start.line)
        }
    }
}

/// Anything the parser attached a span to
pub trait HasSpan {
    fn span(&self) -> &SourceSpan;
}
