//! Property-based tests for the interpreter.
//!
//! These tests use proptest to generate random inputs and check invariants
//! of the parser and evaluator that must hold for every input.

use hulk::{
    Context, Value,
    diagnostics::{Diagnostic, Diagnostics},
    evaluate, get_result,
    interpreter::lexer::tokenize,
    parse,
};
use proptest::prelude::*;

/// Strategy for the arithmetic operators.
fn arb_op() -> impl Strategy<Value = char> {
    prop_oneof![Just('+'), Just('-'), Just('*'), Just('/'), Just('%'), Just('^')]
}

fn apply(a: f64, op: char, b: f64) -> f64 {
    match op {
        '+' => a + b,
        '-' => a - b,
        '*' => a * b,
        '/' => a / b,
        '%' => a % b,
        _ => a.powf(b),
    }
}

const fn precedence(op: char) -> u8 {
    match op {
        '^' => 6,
        '*' | '/' => 4,
        '+' | '-' => 3,
        _ => 2,
    }
}

/// Whether `a op1 b op2 c` groups as `a op1 (b op2 c)`.
const fn groups_right(op1: char, op2: char) -> bool {
    precedence(op2) > precedence(op1) || (op1 == '^' && op2 == '^')
}

fn same_number(actual: &Result<Option<Value>, Diagnostics>, expected: f64) -> bool {
    match actual {
        Ok(Some(Value::Number(n))) => {
            n.to_bits() == expected.to_bits() || (n.is_nan() && expected.is_nan())
        },
        _ => false,
    }
}

/// Strategy for chains of `let` bindings over a few names, ending in a
/// reference that may or may not be bound.
fn arb_nested_lets() -> impl Strategy<Value = String> {
    (prop::collection::vec(("[abc]", 0u8..10), 0..6), "[abcd]").prop_map(|(bindings, body)| {
        let mut source = String::new();
        for (name, value) in bindings {
            source.push_str(&format!("let {name} = {value} in "));
        }
        source.push_str(&body);
        source.push(';');
        source
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn arithmetic_follows_precedence(a in 0u16..1000,
                                     b in 0u16..1000,
                                     c in 0u16..1000,
                                     op1 in arb_op(),
                                     op2 in arb_op()) {
        let (a, b, c) = (f64::from(a), f64::from(b), f64::from(c));
        let (expected, parenthesized) = if groups_right(op1, op2) {
            (apply(a, op1, apply(b, op2, c)), format!("{a} {op1} ({b} {op2} {c});"))
        } else {
            (apply(apply(a, op1, b), op2, c), format!("({a} {op1} {b}) {op2} {c};"))
        };
        let flat = format!("{a} {op1} {b} {op2} {c};");

        let mut context = Context::new();
        let actual = get_result(&flat, &mut context);
        prop_assert!(same_number(&actual, expected), "{flat} gave {actual:?}, expected {expected}");
        let actual = get_result(&parenthesized, &mut context);
        prop_assert!(same_number(&actual, expected),
                     "{parenthesized} gave {actual:?}, expected {expected}");
    }

    #[test]
    fn concatenation_with_a_string_never_reports(text in "[a-z ]{0,10}", n in 0u32..10_000) {
        let mut context = Context::new();

        for (source, expected) in [(format!("\"{text}\" @ {n};"), format!("{text}{n}")),
                                   (format!("{n} @ \"{text}\";"), format!("{n}{text}"))] {
            let trees = parse(&source, &mut context);
            prop_assert_eq!(trees.len(), 1);
            let root = trees[0].root.as_ref().unwrap();
            let evaluation = evaluate(root, &mut context);
            prop_assert!(evaluation.diagnostics.is_empty());
            prop_assert_eq!(evaluation.value, Some(Value::Str(expected)));
        }
    }

    #[test]
    fn scopes_are_empty_after_every_evaluation(source in arb_nested_lets()) {
        let mut context = Context::new();

        let trees = parse(&source, &mut context);
        prop_assert_eq!(trees.len(), 1);
        let root = trees[0].root.as_ref().unwrap();
        let evaluation = evaluate(root, &mut context);

        prop_assert_eq!(evaluation.value.is_some(), evaluation.diagnostics.is_empty());
        prop_assert_eq!(context.environment.scopes.depth(), 0);
    }

    #[test]
    fn lexer_and_parser_accept_any_input(source in "\\PC{0,40}") {
        let (lexemes, errors) = tokenize(&source);
        let len = source.chars().count();
        prop_assert!(lexemes.iter().all(|lexeme| lexeme.column <= len));
        prop_assert!(errors.iter().all(|error| error.column <= len));

        let mut context = Context::new();
        let trees = parse(&source, &mut context);
        let lexical = trees.iter()
                           .flat_map(|tree| tree.diagnostics.iter())
                           .filter(|diagnostic| matches!(diagnostic, Diagnostic::Lexical(_)))
                           .count();
        prop_assert_eq!(lexical, errors.len());

        for tree in &trees {
            if tree.root.is_none() && tree.diagnostics.is_empty() {
                prop_assert!(source.contains("function"), "statement vanished: {source:?}");
            }
        }
    }
}
