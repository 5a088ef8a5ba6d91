use std::fs;

use letcalc::{
    error::{EvalError, ValidationError},
    get_result,
};

fn assert_result(src: &str, expected: i64) {
    match get_result(src) {
        Ok(value) => assert_eq!(value, expected, "Command {src} evaluated to the wrong value"),
        Err(e) => panic!("Command {src} failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    if let Ok(value) = get_result(src) {
        panic!("Command {src} evaluated to {value} but was expected to fail")
    }
}

fn validation_error(src: &str) -> ValidationError {
    let error = get_result(src).expect_err("command should be rejected");
    error.downcast_ref::<ValidationError>()
         .unwrap_or_else(|| panic!("expected a validation error, got: {error}"))
         .clone()
}

fn eval_error(src: &str) -> EvalError {
    let error = get_result(src).expect_err("command should fail");
    error.downcast_ref::<EvalError>()
         .unwrap_or_else(|| panic!("expected an evaluation error, got: {error}"))
         .clone()
}

#[test]
fn basic_arithmetic() {
    assert_result("add(1, 2)", 3);
    assert_result("sub(10, 4)", 6);
    assert_result("mult(2, 3)", 6);
    assert_result("div(9, 2)", 4);
}

#[test]
fn nested_operations() {
    assert_result("add(1, mult(2, 3))", 7);
    assert_result("mult(add(2, 2), div(9, 3))", 12);
    assert_result("sub(mult(add(1, 1), 5), div(sub(20, 2), 3))", 4);
}

#[test]
fn negative_literals_and_truncating_division() {
    assert_result("add(-3, 5)", 2);
    assert_result("div(-9, 2)", -4);
    assert_result("mult(-2, -3)", 6);
}

#[test]
fn results_exceed_thirty_two_bits() {
    assert_result("mult(2000000000, 3)", 6_000_000_000);
    assert_result("mult(mult(100000, 100000), 100000)", 1_000_000_000_000_000);
}

#[test]
fn keywords_are_case_and_whitespace_insensitive() {
    assert_result(" Add ( 1 , 2 ) ", 3);
    assert_result("MULT(sub(5,1),Div(8,2))", 16);
    assert_result("addd(1, 2)", 3);
}

#[test]
fn names_sharing_a_keyword_prefix() {
    assert_result("let(le, 2, add(le, 1))", 3);
    assert_result("let(su, 4, let(mul, 3, mult(su, mul)))", 12);
}

#[test]
fn let_with_literal_value() {
    assert_result("let(x, 3, add(x, 2))", 5);
    assert_result("let(a, 5, add(a, a))", 10);
    assert_result("let(x, -4, mult(x, x))", 16);
    assert_result("let(x, 3, x)", 3);
}

#[test]
fn let_with_expression_value() {
    assert_result("let(x, add(1, 2), x)", 3);
    assert_result("let(x, add(1, 2), mult(x, 2))", 6);
    assert_result("let(x, mult(add(1, 2), 4), sub(x, 2))", 10);
}

#[test]
fn nested_lets() {
    assert_result("let(a, 5, let(b, mult(a, 10), add(b, a)))", 55);
    assert_result("let(a, let(b, 10, add(b, b)), let(b, 20, add(a, b)))", 40);
    assert_result("let(a, let(b, 10, add(b, b)), a)", 20);
    assert_result("let(x, 5, let(y, x, add(y, 1)))", 6);
}

#[test]
fn let_inside_an_operation() {
    assert_result("add(let(x, 3, x), 1)", 4);
    assert_result("add(let(x, add(1, 2), x), 1)", 4);
    assert_result("add(let(x, 3, x), let(y, 4, y))", 7);
    assert_result("sub(8, mult(let(a, 2, add(a, 1)), 2))", 2);
    assert_result("add(1, mult(let(a, 2, add(a, 1)), 2))", 7);
}

#[test]
fn repeated_evaluation_is_identical() {
    let src = "let(a, let(b, 10, add(b, b)), let(b, 20, add(a, b)))";
    let first = get_result(src).unwrap();
    let second = get_result(src).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_script_file() {
    let script = fs::read_to_string("tests/example.calc").expect("missing file");
    let mut count = 0;

    for line in script.lines()
                      .map(str::trim)
                      .filter(|l| !l.is_empty() && !l.starts_with("//"))
    {
        let (src, expected) = line.rsplit_once('=')
                                  .unwrap_or_else(|| panic!("malformed line: {line}"));
        let expected = expected.trim()
                               .parse()
                               .unwrap_or_else(|e| panic!("bad expected value in {line}: {e}"));
        assert_result(src.trim(), expected);
        count += 1;
    }

    assert!(count > 0, "No examples found in tests/example.calc");
}

#[test]
fn division_by_zero_is_error() {
    assert!(matches!(eval_error("div(5, 0)"), EvalError::DivisionByZero { .. }));
    assert!(matches!(eval_error("div(1, sub(2, 2))"), EvalError::DivisionByZero { .. }));
}

#[test]
fn unknown_variable_is_error() {
    assert_eq!(eval_error("add(x, 2)"),
               EvalError::UnresolvedVariable { names: vec!["X".to_string()] });
    assert_eq!(eval_error("add(1, y)"),
               EvalError::UnresolvedVariable { names: vec!["Y".to_string()] });
}

#[test]
fn let_name_without_comma_is_error() {
    assert!(matches!(eval_error("let(x1, 2, x)"),
                     EvalError::InvalidArgument { ref name, .. } if name == "X"));
}

#[test]
fn variable_followed_by_digit_is_error() {
    assert!(matches!(eval_error("let(x, 2, add(xy2, 1))"),
                     EvalError::InvalidArgument { ref name, .. } if name == "XY"));
}

#[test]
fn overflow_is_error() {
    assert!(matches!(eval_error("mult(9223372036854775807, 2)"), EvalError::Overflow { .. }));
    assert!(matches!(eval_error("add(99999999999999999999, 1)"),
                     EvalError::LiteralTooLarge { .. }));
}

#[test]
fn malformed_input_is_rejected_before_evaluation() {
    assert_eq!(validation_error(""), ValidationError::EmptyCommand);
    assert_eq!(validation_error("   "), ValidationError::EmptyCommand);
    assert_eq!(validation_error("add 1 2"), ValidationError::MissingParentheses);
    assert_eq!(validation_error("add(1, 2"),
               ValidationError::UnbalancedParentheses { position: 5 });
    assert_eq!(validation_error("add(1, 2))"),
               ValidationError::UnbalancedParentheses { position: 6 });
    assert_eq!(validation_error("foo(1, 2)"),
               ValidationError::InvalidFirstOperation { found: "FO".to_string() });
    assert_eq!(validation_error("(add(1,2))"),
               ValidationError::InvalidFirstOperation { found: "(+".to_string() });
    assert_eq!(validation_error("let(x)"), ValidationError::CommandTooShort { length: 4 });
}

#[test]
fn raw_tokens_are_not_accepted() {
    assert_eq!(validation_error("add(1, 2) + 3"),
               ValidationError::InvalidCharacter { character: '+',
                                                   position:  8, });
    assert_eq!(validation_error("+(1,2)"),
               ValidationError::InvalidCharacter { character: '+',
                                                   position:  0, });
    assert_failure("add(1; 2)");
}
