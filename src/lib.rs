//! # hulk
//!
//! hulk is a tree-walking interpreter for a small expression language written
//! in Rust. It tokenizes, parses and evaluates one line at a time, with
//! support for variables, functions, conditionals, loops, strings and
//! vectors, and reports every problem as a positioned diagnostic.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    diagnostics::{Diagnostic, Diagnostics},
    interpreter::{lexer::tokenize, parser::Parser},
};
pub use crate::{
    config::Limits,
    interpreter::{
        evaluator::core::{Context, Evaluation},
        parser::SyntaxTree,
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of source code as a tree. The AST is built by the parser
/// and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression types for all language constructs.
/// - Attaches the source column to every node for error reporting.
/// - Describes declared functions together with their inferred types.
pub mod ast;
/// Session limits.
///
/// Declares the ceilings on parse depth, call depth and range length that
/// keep hostile input from exhausting the stack or memory.
pub mod config;
/// Collects reported problems.
///
/// Wraps lexical, syntax and runtime errors into one ordered list per
/// statement, from which the front end shows the first entry.
pub mod diagnostics;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while processing code.
/// Each error carries the column it points at and renders the message shown
/// to the user.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches columns and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, type inference, evaluation and
/// value representations to provide a complete runtime for source lines.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Holds the scopes and function table of a session.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion and stack growth.
///
/// # Responsibilities
/// - Safely convert between `i64`, `usize`, and `f64` without silent data
///   loss.
/// - Grow the native stack on deep recursion.
pub mod util;

/// Parses one line of source text.
///
/// The line is split into `;`-terminated statements, each producing its own
/// [`SyntaxTree`]. Function declarations are entered into the context's
/// function table as they parse, so they are visible to the following
/// statements and to later lines.
///
/// # Example
/// ```
/// use hulk::{Context, parse};
///
/// let mut context = Context::new();
/// let trees = parse("function double(x) => x * 2; double(4);", &mut context);
///
/// assert_eq!(trees.len(), 2);
/// assert!(trees[0].root.is_none());
/// assert!(trees[1].is_valid());
/// assert!(context.functions().contains("double"));
/// ```
pub fn parse(source: &str, context: &mut Context) -> Vec<SyntaxTree> {
    let (lexemes, lexical_errors) = tokenize(source);
    let end_column = source.chars().count() + 1;
    let limits = context.limits;

    Parser::new(lexemes, end_column, &mut context.environment.functions, limits)
        .parse_program(lexical_errors)
}

/// Evaluates a parsed expression.
///
/// Variable scopes are reset first; declared functions are kept.
///
/// # Example
/// ```
/// use hulk::{Context, Value, evaluate, parse};
///
/// let mut context = Context::new();
/// let trees = parse("print(\"life is \" @ 42);", &mut context);
/// let root = trees[0].root.as_ref().unwrap();
///
/// let evaluation = evaluate(root, &mut context);
/// assert_eq!(evaluation.value, Some(Value::from("life is 42")));
/// assert!(evaluation.print_requested);
/// ```
pub fn evaluate(expr: &ast::Expr, context: &mut Context) -> Evaluation {
    context.evaluate(expr)
}

/// Parses and evaluates a whole line.
///
/// Statements run in order. Function declarations produce no value.
///
/// # Returns
/// The value of the last statement that produced one, or `None` if the line
/// only declared functions.
///
/// # Errors
/// The diagnostics of the first statement that failed to parse or evaluate.
/// Statements after it are not evaluated.
///
/// # Examples
/// ```
/// use hulk::{Context, Value, get_result};
///
/// let mut context = Context::new();
///
/// let value = get_result("let a = 6, b = a * 7 in b;", &mut context).unwrap();
/// assert_eq!(value, Some(Value::Number(42.0)));
///
/// let diagnostics = get_result("let y = x + 1 in y;", &mut context).unwrap_err();
/// assert_eq!(diagnostics.messages(),
///            vec!["! SEMANTIC ERROR: Variable \"x\" is not defined (column 9)"]);
/// ```
pub fn get_result(source: &str, context: &mut Context) -> Result<Option<Value>, Diagnostics> {
    let mut result = None;

    for tree in parse(source, context) {
        if !tree.is_valid() {
            return Err(tree.diagnostics);
        }
        let Some(root) = tree.root else {
            continue;
        };

        let evaluation = context.evaluate(&root);
        match evaluation.value {
            Some(value) => result = Some(value),
            None => return Err(evaluation.diagnostics),
        }
    }

    Ok(result)
}

/// What one line of input produced, in the form the front end shows it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineOutput {
    /// The value of every statement that produced one, in order.
    pub values: Vec<Value>,
    /// The first diagnostic of the statement that failed, if any.
    pub error:  Option<Diagnostic>,
}

/// Runs a line the way the interactive session does.
///
/// Every statement that produces a value contributes it to the output, not
/// only `print`; function declarations contribute nothing. Running stops at
/// the first failing statement, whose first diagnostic is kept.
///
/// # Example
/// ```
/// use hulk::{Context, Value, run_line};
///
/// let mut context = Context::new();
/// let output = run_line("function sq(x) => x * x; sq(3); print(sq(4)); sq(\"a\");",
///                       &mut context);
///
/// assert_eq!(output.values, vec![Value::Number(9.0), Value::Number(16.0)]);
/// assert!(output.error.is_some());
/// ```
pub fn run_line(source: &str, context: &mut Context) -> LineOutput {
    let mut output = LineOutput::default();

    for tree in parse(source, context) {
        let mut diagnostics = tree.diagnostics;
        if let Some(diagnostic) = diagnostics.take_first() {
            output.error = Some(diagnostic);
            break;
        }
        let Some(root) = tree.root else {
            continue;
        };

        let mut evaluation = context.evaluate(&root);
        match evaluation.value {
            Some(value) => output.values.push(value),
            None => {
                output.error = evaluation.diagnostics.take_first();
                break;
            },
        }
    }

    output
}
