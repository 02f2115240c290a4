use crate::expression::{Expression, ExpressionError};
use crate::operator::{BinaryOp, DomainError, UnaryOp};

fn four() -> Box<Expression> {
    Box::new(Expression::Literal { digit: 4, count: 1 })
}

#[test]
fn test_parse_literal() {
    let result = Expression::parse("444");
    assert_eq!(result, Ok(Expression::Literal { digit: 4, count: 3 }));
}

#[test]
fn test_parse_prefix_and_postfix() {
    assert_eq!(
        Expression::parse("(-4)"),
        Ok(Expression::Unary(UnaryOp::Neg, four()))
    );
    assert_eq!(
        Expression::parse("(√4)"),
        Ok(Expression::Unary(UnaryOp::Sqrt, four()))
    );
    assert_eq!(
        Expression::parse("(4!)"),
        Ok(Expression::Unary(UnaryOp::Factorial, four()))
    );
}

#[test]
fn test_parse_subtraction_of_negation() {
    let result = Expression::parse("((-4)-4)");
    assert_eq!(
        result,
        Ok(Expression::Binary(
            BinaryOp::Sub,
            Box::new(Expression::Unary(UnaryOp::Neg, four())),
            four()
        ))
    );
}

#[test]
fn test_display_round_trips_path() {
    for path in ["4", "(4+(√4))", "((4!)/(-(√4)))", "(((4+4)!)^44)", "(-(4!))"] {
        let expr = Expression::parse(path);
        assert!(expr.is_ok(), "failed to parse {}", path);
        if let Ok(expr) = expr {
            assert_eq!(expr.to_string(), path);
        }
    }
}

#[test]
fn test_evaluate() {
    let cases = [
        ("(4/4)", 1),
        ("(4-4)", 0),
        ("(4+(√4))", 6),
        ("((4!)-(√4))", 22),
        ("(-(4!))", -24),
        ("(44^(√4))", 1936),
    ];
    for (path, expected) in cases {
        let result = Expression::parse(path).and_then(|e| e.evaluate());
        assert_eq!(result, Ok(expected), "path {}", path);
    }
}

#[test]
fn test_evaluate_domain_error() {
    let result = Expression::parse("(4/(4-4))").and_then(|e| e.evaluate());
    assert_eq!(
        result,
        Err(ExpressionError::Domain(DomainError::DivisionByZero))
    );

    let result = Expression::parse("(√(-4))").and_then(|e| e.evaluate());
    assert_eq!(
        result,
        Err(ExpressionError::Domain(DomainError::NegativeRoot))
    );
}

#[test]
fn test_uses_and_unary_run() {
    let result = Expression::parse("((√(√(44^4)))+(-4))");
    assert!(result.is_ok());
    if let Ok(expr) = result {
        assert_eq!(expr.uses(), 4);
        assert_eq!(expr.max_unary_run(), 2);
    }

    let result = Expression::parse("(-((√4)!))");
    assert!(result.is_ok());
    if let Ok(expr) = result {
        assert_eq!(expr.uses(), 1);
        assert_eq!(expr.max_unary_run(), 3);
    }
}

#[test]
fn test_parse_errors() {
    assert_eq!(Expression::parse(""), Err(ExpressionError::UnexpectedEnd));
    assert_eq!(Expression::parse("(4+4"), Err(ExpressionError::UnexpectedEnd));
    assert_eq!(
        Expression::parse("45"),
        Err(ExpressionError::MixedDigits("45".to_string()))
    );
    assert_eq!(
        Expression::parse("(4%4)"),
        Err(ExpressionError::UnexpectedChar {
            found: '%',
            position: 2
        })
    );
    assert_eq!(
        Expression::parse("(4+4))"),
        Err(ExpressionError::TrailingInput(5))
    );
}
