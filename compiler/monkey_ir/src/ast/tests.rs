use std::rc::Rc;

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_let_statement_display() {
    let program = Program::new(vec![Statement::Let {
        name: Identifier::new("myVar"),
        value: Expression::identifier("anotherVar"),
    }]);

    assert_eq!(program.to_string(), "let myVar = anotherVar;");
}

#[test]
fn test_operators_parenthesise() {
    let expr = Expression::infix(
        InfixOp::Add,
        Expression::identifier("a"),
        Expression::infix(
            InfixOp::Mul,
            Expression::identifier("b"),
            Expression::identifier("c"),
        ),
    );
    assert_eq!(expr.to_string(), "(a + (b * c))");

    let neg = Expression::prefix(PrefixOp::Neg, Expression::Integer(5));
    assert_eq!(neg.to_string(), "(-5)");
}

#[test]
fn test_call_arguments_have_no_spaces() {
    let call = Expression::call(
        Expression::identifier("add"),
        vec![Expression::identifier("a"), Expression::identifier("b")],
    );
    assert_eq!(
        Expression::prefix(PrefixOp::Neg, call).to_string(),
        "(-add(a,b))"
    );
}

#[test]
fn test_function_if_array_index_display() {
    let body = BlockStatement::new(vec![Statement::Expression(Expression::infix(
        InfixOp::Add,
        Expression::identifier("x"),
        Expression::identifier("y"),
    ))]);
    let literal = FunctionLiteral::new(vec![Identifier::new("x"), Identifier::new("y")], body);
    assert_eq!(
        Expression::Function(Rc::new(literal)).to_string(),
        "fn(x, y) (x + y)"
    );

    let cond = Expression::If {
        condition: Box::new(Expression::identifier("c")),
        consequence: BlockStatement::new(vec![Statement::Expression(Expression::identifier("x"))]),
        alternative: Some(BlockStatement::new(vec![Statement::Return(
            Expression::identifier("y"),
        )])),
    };
    assert_eq!(cond.to_string(), "ifc xelse return y;");

    let array = Expression::Array(vec![Expression::Integer(1), Expression::Boolean(true)]);
    let index = Expression::index(array, Expression::Integer(0));
    assert_eq!(index.to_string(), "([1, true][0])");
}

#[test]
fn test_program_concatenates_statements() {
    let program = Program::new(vec![
        Statement::Expression(Expression::Integer(1)),
        Statement::Expression(Expression::String("two".to_string())),
    ]);
    assert_eq!(program.to_string(), "1two");
    assert_eq!(program.len(), 2);
    assert!(!program.is_empty());
}

#[test]
fn test_deep_trees_render_and_drop() {
    let depth = 200_000;
    let mut expr = Expression::identifier("x");
    for _ in 0..depth {
        expr = Expression::prefix(PrefixOp::Not, expr);
    }
    assert_eq!(expr.to_string().len(), depth * 3 + 1);
    drop(expr);

    let mut expr = Expression::Integer(0);
    for i in 0..depth {
        let body = BlockStatement::new(vec![Statement::Expression(expr)]);
        expr = if i % 2 == 0 {
            Expression::If {
                condition: Box::new(Expression::Boolean(true)),
                consequence: body,
                alternative: None,
            }
        } else {
            Expression::call(
                Expression::Function(Rc::new(FunctionLiteral::new(Vec::new(), body))),
                vec![Expression::Array(vec![Expression::Integer(1)])],
            )
        };
    }
    drop(expr);
}

#[test]
fn test_shared_function_body_outlives_tree() {
    let body = BlockStatement::new(vec![Statement::Return(Expression::identifier("y"))]);
    let literal = Rc::new(FunctionLiteral::new(vec![Identifier::new("y")], body));
    let expr = Expression::Function(Rc::clone(&literal));
    drop(expr);
    assert_eq!(literal.body.to_string(), "return y;");
}
