use aurora::{
    ast::{BinaryOperator, Expr, LiteralValue, Statement},
    error::ParseError,
    parse, scan,
};

fn parse_source(source: &str) -> Vec<Statement> {
    parse(&scan(source)).unwrap_or_else(|e| panic!("Failed to parse {source:?}: {e}"))
}

fn parse_failure(source: &str) -> ParseError {
    match parse(&scan(source)) {
        Ok(program) => panic!("Parsed {source:?} but expected an error: {program:?}"),
        Err(e) => e,
    }
}

fn expression(source: &str) -> Expr {
    match parse_source(source).into_iter().next() {
        Some(Statement::Expression { expr, .. } | Statement::Say { expr, .. }) => expr,
        other => panic!("Expected an expression statement, got {other:?}"),
    }
}

fn number(value: f64, line: usize) -> Expr {
    Expr::Literal { value: LiteralValue::Number(value),
                    line }
}

fn variable(name: &str, line: usize) -> Expr {
    Expr::Variable { name: name.to_string(),
                     line }
}

#[test]
fn comparison_shares_the_additive_level() {
    let Expr::BinaryOp { left, op, right, .. } = expression("1 + 2 > 2") else {
        panic!("Expected a binary operation");
    };

    assert_eq!(op, BinaryOperator::Greater);
    assert_eq!(*right, number(2.0, 1));
    assert!(matches!(*left, Expr::BinaryOp { op: BinaryOperator::Add, .. }));
}

#[test]
fn multiplication_binds_tighter() {
    let Expr::BinaryOp { left, op, right, .. } = expression("2 + 3 * 4") else {
        panic!("Expected a binary operation");
    };

    assert_eq!(op, BinaryOperator::Add);
    assert_eq!(*left, number(2.0, 1));
    assert!(matches!(*right, Expr::BinaryOp { op: BinaryOperator::Mul, .. }));
}

#[test]
fn chained_assignment_is_right_associative() {
    let expected = Expr::Assign { name:  "a".to_string(),
                                  value: Box::new(Expr::Assign { name:  "b".to_string(),
                                                                 value: Box::new(number(3.0, 1)),
                                                                 line:  1, }),
                                  line:  1, };

    assert_eq!(expression("a = b = 3"), expected);
}

#[test]
fn let_forms() {
    let program = parse_source("let x = 1\nlet self.count = 0");

    let Statement::Expression { expr: Expr::Assign { name, .. }, .. } = &program[0] else {
        panic!("Expected an assignment");
    };
    assert_eq!(name, "x");

    let Statement::Expression { expr: Expr::SetAttr { target, name, .. }, .. } = &program[1] else {
        panic!("Expected an attribute write");
    };
    assert_eq!(**target, variable("self", 2));
    assert_eq!(name, "count");
}

#[test]
fn call_chains() {
    let Expr::Call { callee, arguments, .. } = expression("c.inc(1)(2)") else {
        panic!("Expected a call");
    };
    assert_eq!(arguments, [number(2.0, 1)]);

    let Expr::Call { callee, arguments, .. } = *callee else {
        panic!("Expected a nested call");
    };
    assert_eq!(arguments, [number(1.0, 1)]);
    assert!(matches!(*callee, Expr::GetAttr { ref name, .. } if name == "inc"));
}

#[test]
fn list_literals() {
    assert_eq!(expression("[]"),
               Expr::ListLiteral { elements: Vec::new(),
                                   line:     1, });
    assert_eq!(expression("[1, x]"),
               Expr::ListLiteral { elements: vec![number(1.0, 1), variable("x", 1)],
                                   line:     1, });
}

#[test]
fn blocks_and_lines() {
    let program = parse_source("if x:\n  say 1\nelse\n  say 2\nend\nwhile x: x = 0 end");

    assert_eq!(program.len(), 2);
    let Statement::If { then_branch, else_branch: Some(else_branch), line, .. } = &program[0] else {
        panic!("Expected an if statement with an else branch");
    };
    assert_eq!(*line, 1);
    assert_eq!(then_branch[0].line_number(), 2);
    assert_eq!(else_branch[0].line_number(), 4);
    assert_eq!(program[1].line_number(), 6);
}

#[test]
fn class_bodies_keep_only_methods() {
    let program = parse_source("class A:\n  1 + 1\n  define m(self): return 1 end\n  \"x\"\nend");

    let Statement::Class(class) = &program[0] else {
        panic!("Expected a class definition");
    };
    assert_eq!(class.name, "A");
    assert_eq!(class.methods.len(), 1);
    assert_eq!(class.methods[0].params, ["self"]);
}

#[test]
fn stray_end_stops_the_program() {
    assert_eq!(parse_source("say 1\nend\nsay 2").len(), 1);
    assert_eq!(parse_source("say 1\nelse\nsay 2").len(), 1);
}

#[test]
fn error_kinds() {
    assert!(matches!(parse_failure("say (1 + 2"), ParseError::ExpectedClosingParen { line: 1 }));
    assert!(matches!(parse_failure("f(1, 2"), ParseError::ExpectedClosingParen { .. }));
    assert!(matches!(parse_failure("1 = 2"), ParseError::InvalidAssignmentTarget { line: 1 }));
    assert!(matches!(parse_failure("f() = 2"), ParseError::InvalidAssignmentTarget { .. }));
    assert!(matches!(parse_failure("import tools"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_failure("say [1, 2"), ParseError::Expected { .. }));
    assert!(matches!(parse_failure("define f(1) end"), ParseError::Expected { .. }));
    assert!(matches!(parse_failure("c."), ParseError::Expected { .. }));
}

#[test]
fn unclosed_blocks() {
    assert!(matches!(parse_failure("while 1:\n  say 1"),
                     ParseError::UnexpectedEndOfInput { ref construct, line: 1 } if construct == "while"));
    assert!(matches!(parse_failure("\n\ndefine f():\n  say 1"),
                     ParseError::UnexpectedEndOfInput { line: 3, .. }));
    assert!(matches!(parse_failure("class A:\n  define m(self): end"),
                     ParseError::UnexpectedEndOfInput { ref construct, .. } if construct == "class"));
}

#[test]
fn error_messages() {
    assert_eq!(parse_failure("repeat 3: say 1 end").to_string(),
               "Syntax Error: Expected 'times', found ':' at line 1");
    assert_eq!(parse_failure("say 1\nsay 2 +").to_string(),
               "Syntax Error: Unexpected token 'EOF' at line 2");
    assert_eq!(parse_failure("\nsay (1").to_string(), "Syntax Error: Expected ')' at line 2");
    assert_eq!(parse_failure("if 1:\n  say 1\n").to_string(),
               "Syntax Error: Unexpected end of input, 'if' block is missing 'end' at line 1");
    assert_eq!(parse_failure("say\n1 = 2").to_string(),
               "Syntax Error: Unexpected token 'NEWLINE' at line 1");
}
