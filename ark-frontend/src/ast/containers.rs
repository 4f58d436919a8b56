//! Ordered containers
//!
//! `Block` holds mixed nodes in source order; `List<T>` is a homogeneous
//! sequence, used as `ParameterList` for function parameters and struct
//! fields. Both are append-only: `push` is the only mutator.

use super::declarations::VariableDecl;
use super::{write_indented, Node};
use crate::analysis::Analyzer;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Block {
    nodes: Vec<Node>,
}

impl Block {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: impl Into<Node>) {
        self.nodes.push(node.into());
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn analyze<A: Analyzer + ?Sized>(&self, analyzer: &mut A) {
        analyzer.analyze_block(self);
    }
}

impl<'a> IntoIterator for &'a Block {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

impl FromIterator<Node> for Block {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Self { nodes: iter.into_iter().collect() }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nodes.is_empty() {
            return write!(f, "(Block: )");
        }

        writeln!(f, "(Block:")?;
        for node in &self.nodes {
            write_indented(f, node)?;
        }
        write!(f, ")")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct List<T> {
    items: Vec<T>,
}

/// Parameters of a function, fields of a struct
pub type ParameterList = List<VariableDecl>;

impl<T> List<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { items: iter.into_iter().collect() }
    }
}

impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.items.is_empty() {
            return write!(f, "(List: )");
        }

        writeln!(f, "(List:")?;
        for item in &self.items {
            write_indented(f, item)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Expression, IntegerLiteral, StringLiteral};
    use ark_common::SourceSpan;

    fn int(value: u64) -> Node {
        Expression::new(IntegerLiteral { value }.into(), SourceSpan::dummy()).into()
    }

    #[test]
    fn test_block_keeps_append_order() {
        let mut block = Block::new();
        block.push(int(1));
        block.push(Expression::new(StringLiteral { value: "b".into() }.into(), SourceSpan::dummy()));
        block.push(int(3));

        let kinds: Vec<_> = block.iter().map(Node::kind_name).collect();
        assert_eq!(kinds, ["IntegerLiteral", "StringLiteral", "IntegerLiteral"]);
        assert_eq!(
            block.to_string(),
            "(Block:\n\t(IntegerLiteral: 1)\n\t(StringLiteral: b)\n\t(IntegerLiteral: 3)\n)"
        );
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(Block::new().to_string(), "(Block: )");
        assert!(Block::new().is_empty());
        assert_eq!(List::<VariableDecl>::new().to_string(), "(List: )");
    }

    #[test]
    fn test_list_collects_in_order() {
        let list: List<u32> = (1..=3).collect();
        assert_eq!(list.as_slice(), &[1, 2, 3]);
        assert_eq!(list.to_string(), "(List:\n\t1\n\t2\n\t3\n)");
    }
}
