use peano::ast::{Ast, Definition, EqCond, Expr};
use peano::lexer::{self, TokenKind};
use peano::parser::{Error, parse};

fn var(name: &str) -> Expr {
    Expr::Var(name.to_string())
}

fn succ(expr: Expr) -> Expr {
    Expr::Succ(Box::new(expr))
}

fn call(name: &str, args: Vec<Expr>) -> Expr {
    Expr::Call {
        name: name.to_string(),
        args,
    }
}

#[test]
fn empty_program() {
    assert_eq!(parse(""), Ok(Ast::default()));
    assert_eq!(parse(" \n\t "), Ok(Ast::default()));
}

#[test]
fn zero() {
    assert_eq!(
        parse("z"),
        Ok(Ast {
            definitions: vec![],
            expr: Some(Expr::Zero),
        })
    );
}

#[test]
fn variable_definition() {
    assert_eq!(
        parse("def var1 = s(s(z))"),
        Ok(Ast {
            definitions: vec![Definition::Var {
                name: "var1".to_string(),
                value: succ(succ(Expr::Zero)),
            }],
            expr: None,
        })
    );
}

#[test]
fn function_definition() {
    let ast = parse("def myFunc(x1, x2) = add(x1, x2)").unwrap();
    assert_eq!(
        ast.definitions,
        vec![Definition::Func {
            name: "myFunc".to_string(),
            params: vec!["x1".to_string(), "x2".to_string()],
            body: call("add", vec![var("x1"), var("x2")]),
        }]
    );
    assert_eq!(ast.expr, None);
}

#[test]
fn definition_allows_space_before_params() {
    let ast = parse("def f (x) = x").unwrap();
    assert_eq!(ast.definitions[0].name(), "f");
    assert!(matches!(ast.definitions[0], Definition::Func { .. }));
}

#[test]
fn nested_calls() {
    let ast = parse("func1(func2(z, x1), func3(s(s(z))), s(z))").unwrap();
    assert_eq!(
        ast.expr,
        Some(call(
            "func1",
            vec![
                call("func2", vec![Expr::Zero, var("x1")]),
                call("func3", vec![succ(succ(Expr::Zero))]),
                succ(Expr::Zero),
            ]
        ))
    );
}

#[test]
fn conditional() {
    let ast = parse("if (eq(x1, s(s(z)))) then add(inc(x1), x2) else sub(x1, x2)").unwrap();
    assert_eq!(
        ast.expr,
        Some(Expr::Cond {
            cond: EqCond {
                lhs: Box::new(var("x1")),
                rhs: Box::new(succ(succ(Expr::Zero))),
            },
            then_expr: Box::new(call("add", vec![call("inc", vec![var("x1")]), var("x2")])),
            else_expr: Box::new(call("sub", vec![var("x1"), var("x2")])),
        })
    );
}

#[test]
fn definitions_then_expression() {
    let ast = parse("def add3(x1) = add(x1, s(s(s(z))))\n add3(s(z))").unwrap();
    assert_eq!(ast.definitions.len(), 1);
    assert_eq!(ast.definitions[0].name(), "add3");
    assert_eq!(ast.expr, Some(call("add3", vec![succ(Expr::Zero)])));
}

#[test]
fn keyword_prefixed_names() {
    let ast = parse("def defX = z\ndef ifVal = defX\nifVal").unwrap();
    assert_eq!(
        ast.definitions,
        vec![
            Definition::Var {
                name: "defX".to_string(),
                value: Expr::Zero,
            },
            Definition::Var {
                name: "ifVal".to_string(),
                value: var("defX"),
            },
        ]
    );
    assert_eq!(ast.expr, Some(var("ifVal")));
}

#[test]
fn trailing_input_after_expression() {
    assert!(matches!(
        parse("def x = z\nx y"),
        Err(Error::ExpectedEof { found: TokenKind::Ident(_), .. })
    ));
    assert!(matches!(
        parse("z\ndef x = z"),
        Err(Error::ExpectedEof {
            found: TokenKind::Def,
            ..
        })
    ));
}

#[test]
fn call_needs_adjacent_paren() {
    assert!(matches!(
        parse("f (z)"),
        Err(Error::ExpectedEof {
            found: TokenKind::ParenL,
            ..
        })
    ));
}

#[test]
fn empty_argument_list() {
    assert!(matches!(
        parse("f()"),
        Err(Error::ExpectedExpression {
            found: TokenKind::ParenR,
            ..
        })
    ));
    assert!(matches!(
        parse("def f() = z"),
        Err(Error::ExpectedIdentifier {
            found: TokenKind::ParenR,
            ..
        })
    ));
}

#[test]
fn malformed_conditions() {
    for source in [
        "if eq(z, z) then z else z",
        "if (eq z, z) then z else z",
        "if (eq(z z)) then z else z",
        "if (eq(z, z) then z else z",
        "if (eq(z, z)) z else z",
        "if (eq(z, z)) then z",
    ] {
        assert!(parse(source).is_err(), "{source}");
    }
}

#[test]
fn missing_assign() {
    assert!(matches!(
        parse("def x s(z)"),
        Err(Error::UnexpectedToken {
            expected: TokenKind::Assign,
            found: TokenKind::Succ,
            ..
        })
    ));
}

#[test]
fn unexpected_leading_token() {
    assert!(matches!(
        parse(") z"),
        Err(Error::ExpectedDefinition {
            found: TokenKind::ParenR,
            ..
        })
    ));
    assert!(matches!(
        parse("then"),
        Err(Error::ExpectedDefinition {
            found: TokenKind::Then,
            ..
        })
    ));
}

#[test]
fn unexpected_end() {
    assert_eq!(
        parse("def x ="),
        Err(Error::ExpectedExpression {
            found: TokenKind::Eof,
            span: (7..7).into(),
        })
    );
}

#[test]
fn lexical_error() {
    assert!(matches!(
        parse("def x = s(z) + z"),
        Err(Error::Lex(lexer::Error::UnrecognizedCharacter { found: '+', .. }))
    ));
}
