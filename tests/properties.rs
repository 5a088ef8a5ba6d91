//! Property-based tests for the evaluator.
//!
//! Random literal expression trees are checked against a straightforward
//! recursive evaluator. `let` shapes are limited to the ones the single pass
//! scan is known to resolve: a binding with a literal or compound value and a
//! body that may use the name, a binding nested in the body of another, and a
//! binding used as one argument of an operation.

use letcalc::{
    get_result,
    interpreter::{evaluator::core::evaluate, operator::Operator},
};
use proptest::prelude::*;

/// A reference expression tree.
#[derive(Debug, Clone)]
enum Expr {
    Literal(i64),
    Var(&'static str),
    Binary(char, Box<Self>, Box<Self>),
}

impl Expr {
    /// Renders the token form read by `evaluate`.
    fn tokens(&self) -> String {
        match self {
            Self::Literal(n) => n.to_string(),
            Self::Var(name) => (*name).to_string(),
            Self::Binary(op, left, right) => {
                format!("{op}({},{})", left.tokens(), right.tokens())
            },
        }
    }

    /// Renders the keyword form a user would type.
    fn keywords(&self) -> String {
        match self {
            Self::Literal(n) => n.to_string(),
            Self::Var(name) => (*name).to_lowercase(),
            Self::Binary(op, left, right) => {
                let keyword = Operator::classify(*op).and_then(Operator::keyword)
                                                    .unwrap_or_default();
                format!("{keyword}({}, {})", left.keywords(), right.keywords())
            },
        }
    }

    /// Evaluates recursively; `None` on division by zero or overflow.
    fn eval(&self, env: &[(&str, i64)]) -> Option<i64> {
        match self {
            Self::Literal(n) => Some(*n),
            Self::Var(name) => env.iter().find(|(n, _)| n == name).map(|(_, v)| *v),
            Self::Binary(op, left, right) => {
                let left = left.eval(env)?;
                let right = right.eval(env)?;
                match op {
                    '+' => left.checked_add(right),
                    '_' => left.checked_sub(right),
                    '*' => left.checked_mul(right),
                    _ => {
                        if right == 0 {
                            None
                        } else {
                            left.checked_div(right)
                        }
                    },
                }
            },
        }
    }
}

fn operator_strategy() -> impl Strategy<Value = char> {
    prop::sample::select(vec!['+', '_', '*', '/'])
}

fn literal_strategy() -> impl Strategy<Value = Expr> {
    (-50_i64..50).prop_map(Expr::Literal)
}

/// Trees whose leaves are literals or one of `names`.
fn tree_strategy(names: &'static [&'static str]) -> impl Strategy<Value = Expr> {
    let leaf = if names.is_empty() {
        literal_strategy().boxed()
    } else {
        prop_oneof![literal_strategy(),
                    prop::sample::select(names).prop_map(Expr::Var)].boxed()
    };

    leaf.prop_recursive(4, 32, 2, |inner| {
            (operator_strategy(), inner.clone(), inner).prop_map(|(op, l, r)| {
                                                           Expr::Binary(op,
                                                                        Box::new(l),
                                                                        Box::new(r))
                                                       })
        })
}

/// Trees with an operator at the root.
fn compound_strategy(names: &'static [&'static str]) -> impl Strategy<Value = Expr> {
    (operator_strategy(), tree_strategy(names), tree_strategy(names))
        .prop_map(|(op, l, r)| Expr::Binary(op, Box::new(l), Box::new(r)))
}

fn assert_matches_reference(command: &str, expected: Option<i64>) {
    match expected {
        Some(value) => assert_eq!(evaluate(command), Ok(value), "command: {command}"),
        None => assert!(evaluate(command).is_err(), "command: {command}"),
    }
}

proptest! {
    #[test]
    fn literal_trees_match_reference(expr in compound_strategy(&[])) {
        assert_matches_reference(&expr.tokens(), expr.eval(&[]));
    }

    #[test]
    fn evaluation_is_idempotent(expr in compound_strategy(&[])) {
        let command = expr.tokens();
        prop_assert_eq!(evaluate(&command), evaluate(&command));
    }

    #[test]
    fn keyword_form_matches_token_form(expr in compound_strategy(&[])) {
        let pipeline = get_result(&expr.keywords()).ok();
        prop_assert_eq!(pipeline, evaluate(&expr.tokens()).ok());
    }

    #[test]
    fn let_with_literal_value(value in -50_i64..50, body in tree_strategy(&["X"])) {
        let command = format!("#(X,{value},{})", body.tokens());
        assert_matches_reference(&command, body.eval(&[("X", value)]));
    }

    #[test]
    fn let_with_compound_value(value in compound_strategy(&[]),
                               body in tree_strategy(&["X"])) {
        let command = format!("#(X,{},{})", value.tokens(), body.tokens());
        let expected = value.eval(&[]).and_then(|x| body.eval(&[("X", x)]));
        assert_matches_reference(&command, expected);
    }

    #[test]
    fn let_nested_in_let_body(outer in -50_i64..50,
                              inner in compound_strategy(&["A"]),
                              body in tree_strategy(&["A", "B"])) {
        let command = format!("#(A,{outer},#(B,{},{}))", inner.tokens(), body.tokens());
        let expected = inner.eval(&[("A", outer)])
                            .and_then(|b| body.eval(&[("A", outer), ("B", b)]));
        assert_matches_reference(&command, expected);
    }

    #[test]
    fn let_as_operator_argument(outer in operator_strategy(),
                                left in -50_i64..50,
                                inner in operator_strategy(),
                                sibling in -50_i64..50,
                                let_first in any::<bool>(),
                                value in prop_oneof![literal_strategy(), compound_strategy(&[])],
                                body in tree_strategy(&["X"])) {
        let binding = format!("#(X,{},{})", value.tokens(), body.tokens());
        let arguments = if let_first {
            format!("{binding},{sibling}")
        } else {
            format!("{sibling},{binding}")
        };
        let command = format!("{outer}({left},{inner}({arguments}))");

        let expected = value.eval(&[]).and_then(|x| body.eval(&[("X", x)])).and_then(|bound| {
            let (l, r) = if let_first { (bound, sibling) } else { (sibling, bound) };
            let operation = Expr::Binary(inner,
                                         Box::new(Expr::Literal(l)),
                                         Box::new(Expr::Literal(r)));
            Expr::Binary(outer, Box::new(Expr::Literal(left)), Box::new(operation)).eval(&[])
        });
        assert_matches_reference(&command, expected);
    }
}
