/// The environment module holds variable scopes and declared functions.
///
/// Scopes form a stack of frames that `let`, function calls and loop
/// iterations push and pop. Functions live for the whole session.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST, evaluates expressions, applies operators,
/// manages variable scopes and calls functions.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variables, functions, loops and conditionals.
/// - Reports runtime errors such as type mismatches or undefined names.
pub mod evaluator;
/// The infer module computes static types of function bodies.
///
/// Used when a function is declared to reject bodies that can never
/// produce a value and to record the type each parameter is used as.
pub mod infer;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// strings, identifiers, operators, delimiters and keywords. This is the first
/// stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with their columns.
/// - Handles numeric and string literals, identifiers and operators.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// one tree per statement. Function declarations are entered into the
/// session's function table as they are parsed.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates the grammar, reporting errors with their columns.
/// - Recovers after an error so later statements still parse.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Declares the `Value` enum (numbers, booleans, strings and vectors) and how
/// each is displayed.
pub mod value;
