//! Driving the analysis hooks with a small rule set
//!
//! `OperatorTyper` stands in for the real semantic analyzer: it types
//! arithmetic over matching numeric operands, comparisons and logic as
//! `bool`, and `&`/`^` as adding/removing a pointer layer.

use ark_common::{SourceLocation, SourceSpan};
use ark_frontend::analysis::{self, AnalysisContext, AnalysisError, AnalysisOptions, Analyzer};
use ark_frontend::ast::*;
use ark_frontend::types::{PrimitiveType, Type};
use ark_frontend::AstError;
use std::rc::Rc;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn at(line: u32, column: u32) -> SourceSpan {
    SourceSpan::from_location(SourceLocation::new("ops.ark", line, column))
}

fn int(value: u64) -> Expression {
    Expression::new(IntegerLiteral { value }.into(), at(1, 1))
}

fn string(value: &str) -> Expression {
    Expression::new(StringLiteral { value: value.to_string() }.into(), at(1, 1))
}

fn prim(p: PrimitiveType) -> Rc<Type> {
    Rc::new(Type::Primitive(p))
}

struct OperatorTyper {
    context: AnalysisContext,
    visited: Vec<String>,
}

impl OperatorTyper {
    fn new(options: AnalysisOptions) -> Self {
        Self {
            context: AnalysisContext::new(options),
            visited: Vec::new(),
        }
    }
}

impl Analyzer for OperatorTyper {
    fn binary_type(&mut self, expr: &BinaryExpr, span: &SourceSpan) -> Result<Rc<Type>, AnalysisError> {
        let left = expr.left.get_type()?;
        let right = expr.right.get_type()?;

        if expr.op.is_comparison() || expr.op.is_logical() {
            return Ok(prim(PrimitiveType::Bool));
        }
        if left != right {
            return Err(AnalysisError::OperandTypeMismatch {
                operation: expr.op.to_string(),
                left: left.type_name(),
                right: right.type_name(),
                span: span.clone(),
            });
        }
        let numeric = left.is_integer_type() || (left.is_floating_type() && expr.op.is_arithmetic());
        if !numeric {
            return Err(AnalysisError::InvalidOperation {
                operation: expr.op.to_string(),
                operand_type: left.type_name(),
                span: span.clone(),
            });
        }
        Ok(left)
    }

    fn unary_type(&mut self, expr: &UnaryExpr, span: &SourceSpan) -> Result<Rc<Type>, AnalysisError> {
        let operand = expr.operand.get_type()?;
        let invalid = || AnalysisError::InvalidOperation {
            operation: expr.op.to_string(),
            operand_type: operand.type_name(),
            span: span.clone(),
        };

        match expr.op {
            UnaryOp::AddressOf => Ok(Rc::new(Type::pointer_to(Rc::clone(&operand)))),
            UnaryOp::Dereference => operand.addressee().cloned().ok_or_else(invalid),
            UnaryOp::LogicalNot => Ok(prim(PrimitiveType::Bool)),
            UnaryOp::Negate if operand.is_integer_type() || operand.is_floating_type() => Ok(Rc::clone(&operand)),
            UnaryOp::BitNot if operand.is_integer_type() => Ok(Rc::clone(&operand)),
            UnaryOp::Negate | UnaryOp::BitNot => Err(invalid()),
        }
    }

    fn report(&mut self, error: AnalysisError) {
        self.context.report(&error);
    }

    fn should_abort(&self) -> bool {
        self.context.should_abort()
    }

    fn analyze_expression(&mut self, expr: &Expression) {
        self.visited.push(expr.to_string());
        analysis::walk_expression(self, expr);
    }
}

#[test]
fn binary_expression_is_unresolved_until_analyzed() {
    init_logger();
    let sum = Expression::binary(int(2), BinaryOp::Add, int(3), at(1, 1));
    assert!(matches!(sum.get_type(), Err(AstError::UnresolvedType { kind: "BinaryExpr", .. })));

    let mut typer = OperatorTyper::new(AnalysisOptions::default());
    sum.analyze(&mut typer);

    assert_eq!(*sum.get_type().unwrap(), Type::Primitive(PrimitiveType::Int));
    assert!(!typer.context.reporter().has_errors());
}

#[test]
fn children_are_visited_depth_first_in_source_order() {
    init_logger();
    // (1 + 2) < -3
    let lhs = Expression::binary(int(1), BinaryOp::Add, int(2), at(1, 1));
    let rhs = Expression::unary(UnaryOp::Negate, int(3), at(1, 9));
    let cmp = Expression::binary(lhs, BinaryOp::Less, rhs, at(1, 1));

    let mut typer = OperatorTyper::new(AnalysisOptions::default());
    cmp.analyze(&mut typer);

    let order: Vec<_> = typer.visited.iter().map(|s| s.split(':').next().unwrap_or_default()).collect();
    assert_eq!(
        order,
        ["(BinaryExpr", "(BinaryExpr", "(IntegerLiteral", "(IntegerLiteral", "(UnaryExpr", "(IntegerLiteral"]
    );
    assert_eq!(*cmp.get_type().unwrap(), Type::Primitive(PrimitiveType::Bool));
}

#[test]
fn pointer_operators_move_between_indirection_levels() {
    init_logger();
    let addr = Expression::unary(UnaryOp::AddressOf, Expression::new(RuneLiteral { value: 'r' }.into(), at(2, 2)), at(2, 1));
    let deref = Expression::unary(UnaryOp::Dereference, addr, at(2, 1));

    let mut typer = OperatorTyper::new(AnalysisOptions::default());
    deref.analyze(&mut typer);

    let ExpressionKind::Unary(outer) = &deref.kind else {
        panic!("expected unary");
    };
    assert_eq!(outer.operand.get_type().unwrap().type_name(), "^rune");
    assert_eq!(deref.get_type().unwrap().levels_of_indirection(), 0);
}

#[test]
fn failed_sibling_does_not_stop_the_walk() {
    init_logger();
    let mut block = Block::new();
    block.push(Expression::binary(string("a"), BinaryOp::Sub, string("b"), at(1, 1)));
    block.push(Statement::ret(Expression::binary(int(4), BinaryOp::Mul, int(5), at(2, 8)), at(2, 1)));

    let mut typer = OperatorTyper::new(AnalysisOptions::default());
    block.analyze(&mut typer);

    let Node::Expression(bad) = &block.nodes()[0] else {
        panic!("expected expression");
    };
    assert!(bad.get_type().is_err());

    let Node::Statement(Statement { kind: StatementKind::Return(ret), .. }) = &block.nodes()[1] else {
        panic!("expected return");
    };
    assert_eq!(*ret.value.get_type().unwrap(), Type::Primitive(PrimitiveType::Int));

    let reporter = typer.context.reporter();
    assert_eq!(reporter.error_count(), 1);
    assert_eq!(reporter.diagnostics()[0].message, "invalid operation - on type str");
    assert_eq!(reporter.diagnostics()[0].span, at(1, 1));
}

#[test]
fn error_limit_stops_descent() {
    init_logger();
    let mut block = Block::new();
    block.push(Expression::binary(int(1), BinaryOp::Add, string("x"), at(1, 1)));
    block.push(Expression::binary(int(2), BinaryOp::Add, int(3), at(2, 1)));

    let mut typer = OperatorTyper::new(AnalysisOptions { max_errors: Some(1) });
    block.analyze(&mut typer);

    assert!(typer.should_abort());
    let Node::Expression(untouched) = &block.nodes()[1] else {
        panic!("expected expression");
    };
    assert!(!untouched.is_resolved());
    assert_eq!(typer.context.reporter().summary(), "1 error");
}

#[test]
fn function_parameters_and_body_are_analyzed() {
    init_logger();
    let mut function = Function::new("area", prim(PrimitiveType::F64));
    function.parameters.push(
        VariableDecl::new(Variable::new("scale", prim(PrimitiveType::F64))).with_assignment(Expression::unary(
            UnaryOp::Negate,
            Expression::new(FloatingLiteral { value: 1.0 }.into(), at(1, 20)),
            at(1, 19),
        )),
    );
    let mut body = Block::new();
    body.push(Statement::ret(
        Expression::binary(
            Expression::new(FloatingLiteral { value: 2.0 }.into(), at(2, 12)),
            BinaryOp::Div,
            Expression::new(FloatingLiteral { value: 4.0 }.into(), at(2, 18)),
            at(2, 12),
        ),
        at(2, 5),
    ));
    function.body = Some(body);
    let decl = Declaration::function(function, at(1, 1));

    let mut typer = OperatorTyper::new(AnalysisOptions::default());
    decl.analyze(&mut typer);

    let DeclarationKind::Function(f) = &decl.kind else {
        panic!("expected function");
    };
    let default = f.function.parameters.as_slice()[0].assignment.as_ref().unwrap();
    assert_eq!(default.get_type().unwrap().type_name(), "f64");
    assert_eq!(typer.visited.len(), 5);
    assert!(!typer.context.reporter().has_errors());
}

#[test]
fn struct_field_initializers_are_analyzed() {
    init_logger();
    let mut flags = ark_frontend::StructType::new("Flags");
    flags.fields.push(
        VariableDecl::new(Variable::new("mask", prim(PrimitiveType::Int)))
            .with_assignment(Expression::binary(int(1), BinaryOp::LeftShift, int(4), at(3, 14))),
    );
    let decl = Declaration::structure(flags, at(1, 1));

    let mut typer = OperatorTyper::new(AnalysisOptions::default());
    decl.analyze(&mut typer);

    let DeclarationKind::Struct(s) = &decl.kind else {
        panic!("expected struct");
    };
    let mask = s.struct_type.field("mask").unwrap();
    assert!(mask.assignment.as_ref().unwrap().is_resolved());
}

#[test]
fn second_pass_reports_already_resolved() {
    init_logger();
    let sum = Expression::binary(int(2), BinaryOp::Add, int(3), at(4, 4));

    let mut typer = OperatorTyper::new(AnalysisOptions::default());
    sum.analyze(&mut typer);
    sum.analyze(&mut typer);

    let reporter = typer.context.reporter();
    assert_eq!(reporter.error_count(), 1);
    assert_eq!(
        reporter.diagnostics()[0].message,
        "type of BinaryExpr at ops.ark:4 already resolved to int"
    );
}
