//! Analysis dispatch
//!
//! The semantic analyzer lives outside this crate. What lives here is the
//! contract between it and the tree: the `Analyzer` trait with one hook per
//! node kind, and the `walk_*` functions that give every hook its default
//! depth-first, source-order traversal.
//!
//! An analyzer supplies the operator typing rules (`binary_type`,
//! `unary_type`) and somewhere to put errors (`report`). The walk writes
//! the result into the expression, so no consumer ever sees an operator
//! expression that was visited but left unresolved without an error having
//! been reported for it. Overriding a hook and calling the matching `walk_*`
//! function from it keeps the default traversal.

pub mod errors;

pub use errors::AnalysisError;

use crate::ast::*;
use crate::types::Type;
use ark_common::{ErrorReporter, SourceSpan};
use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};
use std::rc::Rc;

pub trait Analyzer {
    /// Result type of `expr.left op expr.right`. Both operands have been analyzed.
    fn binary_type(&mut self, expr: &BinaryExpr, span: &SourceSpan) -> Result<Rc<Type>, AnalysisError>;

    /// Result type of `op expr.operand`. The operand has been analyzed.
    fn unary_type(&mut self, expr: &UnaryExpr, span: &SourceSpan) -> Result<Rc<Type>, AnalysisError>;

    fn report(&mut self, error: AnalysisError);

    /// Stop descending into further nodes. Checked before each child.
    fn should_abort(&self) -> bool {
        false
    }

    fn analyze_block(&mut self, block: &Block) {
        walk_block(self, block);
    }

    fn analyze_node(&mut self, node: &Node) {
        walk_node(self, node);
    }

    fn analyze_declaration(&mut self, decl: &Declaration) {
        walk_declaration(self, decl);
    }

    fn analyze_variable_decl(&mut self, decl: &VariableDecl) {
        walk_variable_decl(self, decl);
    }

    fn analyze_struct_decl(&mut self, decl: &StructDecl) {
        walk_struct_decl(self, decl);
    }

    fn analyze_function(&mut self, function: &Function) {
        walk_function(self, function);
    }

    fn analyze_statement(&mut self, stat: &Statement) {
        walk_statement(self, stat);
    }

    fn analyze_return(&mut self, stat: &ReturnStat) {
        walk_return(self, stat);
    }

    fn analyze_expression(&mut self, expr: &Expression) {
        walk_expression(self, expr);
    }
}

pub fn walk_block<A: Analyzer + ?Sized>(analyzer: &mut A, block: &Block) {
    for (index, node) in block.iter().enumerate() {
        if analyzer.should_abort() {
            warn!("analysis aborted; skipping {} remaining node(s) in block", block.len() - index);
            return;
        }
        analyzer.analyze_node(node);
    }
}

pub fn walk_node<A: Analyzer + ?Sized>(analyzer: &mut A, node: &Node) {
    match node {
        Node::Declaration(decl) => analyzer.analyze_declaration(decl),
        Node::Statement(stat) => analyzer.analyze_statement(stat),
        Node::Expression(expr) => analyzer.analyze_expression(expr),
    }
}

pub fn walk_declaration<A: Analyzer + ?Sized>(analyzer: &mut A, decl: &Declaration) {
    trace!("analyzing {} at {}", decl.kind.kind_name(), decl.span);
    match &decl.kind {
        DeclarationKind::Variable(var) => analyzer.analyze_variable_decl(var),
        DeclarationKind::Struct(s) => analyzer.analyze_struct_decl(s),
        DeclarationKind::Function(f) => analyzer.analyze_function(&f.function),
    }
}

pub fn walk_variable_decl<A: Analyzer + ?Sized>(analyzer: &mut A, decl: &VariableDecl) {
    if let Some(assignment) = &decl.assignment {
        analyzer.analyze_expression(assignment);
    }
}

pub fn walk_struct_decl<A: Analyzer + ?Sized>(analyzer: &mut A, decl: &StructDecl) {
    walk_variable_decls(analyzer, &decl.struct_type.fields);
}

pub fn walk_function<A: Analyzer + ?Sized>(analyzer: &mut A, function: &Function) {
    walk_variable_decls(analyzer, &function.parameters);
    if let Some(body) = &function.body {
        if !analyzer.should_abort() {
            analyzer.analyze_block(body);
        }
    }
}

fn walk_variable_decls<A: Analyzer + ?Sized>(analyzer: &mut A, decls: &ParameterList) {
    for decl in decls {
        if analyzer.should_abort() {
            return;
        }
        analyzer.analyze_variable_decl(decl);
    }
}

pub fn walk_statement<A: Analyzer + ?Sized>(analyzer: &mut A, stat: &Statement) {
    trace!("analyzing {} at {}", stat.kind.kind_name(), stat.span);
    match &stat.kind {
        StatementKind::Return(ret) => analyzer.analyze_return(ret),
    }
}

pub fn walk_return<A: Analyzer + ?Sized>(analyzer: &mut A, stat: &ReturnStat) {
    analyzer.analyze_expression(&stat.value);
}

pub fn walk_expression<A: Analyzer + ?Sized>(analyzer: &mut A, expr: &Expression) {
    trace!("analyzing {} at {}", expr.kind.kind_name(), expr.span);
    let verdict = match &expr.kind {
        ExpressionKind::Binary(binary) => {
            analyzer.analyze_expression(&binary.left);
            if analyzer.should_abort() {
                return;
            }
            analyzer.analyze_expression(&binary.right);
            if analyzer.should_abort() {
                return;
            }
            analyzer.binary_type(binary, &expr.span)
        }
        ExpressionKind::Unary(unary) => {
            analyzer.analyze_expression(&unary.operand);
            if analyzer.should_abort() {
                return;
            }
            analyzer.unary_type(unary, &expr.span)
        }
        ExpressionKind::Rune(_)
        | ExpressionKind::Integer(_)
        | ExpressionKind::Floating(_)
        | ExpressionKind::String(_) => return,
    };

    let outcome = verdict.and_then(|ty| {
        debug!("{} at {} resolved to {}", expr.kind.kind_name(), expr.span, ty);
        expr.resolve_type(ty).map_err(AnalysisError::from)
    });
    if let Err(err) = outcome {
        debug!("analysis error: {}", err);
        analyzer.report(err);
    }
}

/// Error policy for an analysis pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    /// Abort once this many errors were reported. `None` visits everything.
    pub max_errors: Option<usize>,
}

/// Error bookkeeping an analyzer can embed to implement `report` and
/// `should_abort`.
#[derive(Debug, Default)]
pub struct AnalysisContext {
    options: AnalysisOptions,
    reporter: ErrorReporter,
}

impl AnalysisContext {
    pub fn new(options: AnalysisOptions) -> Self {
        Self {
            options,
            reporter: ErrorReporter::new(),
        }
    }

    pub fn report(&mut self, error: &AnalysisError) {
        self.reporter.report(error.to_diagnostic());
        if self.should_abort() {
            warn!("error limit reached ({}); aborting analysis", self.reporter.error_count());
        }
    }

    pub fn should_abort(&self) -> bool {
        self.options
            .max_errors
            .is_some_and(|max| self.reporter.error_count() >= max)
    }

    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    pub fn reporter(&self) -> &ErrorReporter {
        &self.reporter
    }

    pub fn into_reporter(self) -> ErrorReporter {
        self.reporter
    }
}
