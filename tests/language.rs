use std::fs;

use hulk::{
    Context, Limits, Value,
    ast::{BinaryOperator, Expr, MathConstant},
    evaluate, get_result,
    interpreter::lexer::{Token, tokenize},
    parse, run_line,
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn script_corpus_matches_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "hulk"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let mut context = Context::new();

        for (i, line) in content.lines().enumerate() {
            let Some((source, expected)) = line.split_once("//=>") else {
                continue;
            };
            count += 1;
            let source = source.trim_end();
            let actual = match get_result(source, &mut context) {
                Ok(Some(value)) => value.to_string(),
                Ok(None) => String::new(),
                Err(diagnostics) => diagnostics.first().map(ToString::to_string).unwrap_or_default(),
            };
            assert_eq!(actual,
                       expected.trim(),
                       "line {} of {:?}: {}",
                       i + 1,
                       path,
                       source);
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

fn run(src: &str) -> Result<Option<Value>, Vec<String>> {
    get_result(src, &mut Context::new()).map_err(|diagnostics| diagnostics.messages())
}

fn assert_value(src: &str, expected: impl Into<Value>) {
    match run(src) {
        Ok(Some(value)) => assert_eq!(value, expected.into(), "script: {src}"),
        Ok(None) => panic!("Script produced no value: {src}"),
        Err(e) => panic!("Script failed: {src}\n{e:?}"),
    }
}

fn assert_failure(src: &str, expected: &str) {
    match run(src) {
        Ok(value) => panic!("Script succeeded with {value:?} but was expected to fail: {src}"),
        Err(messages) => assert_eq!(messages[0], expected, "script: {src}"),
    }
}

#[test]
fn arithmetic_and_precedence() {
    assert_value("1 + 2 * 3;", 7.0);
    assert_value("(1 + 2) * 3;", 9.0);
    assert_value("10 - 4 - 3;", 3.0);
    assert_value("2 * 3 + 4 * 5 - 6 / 3;", 24.0);
    assert_value("7 / 2;", 3.5);
    assert_value("10 % 3;", 1.0);
    assert_value("-7 % 3;", -1.0);
}

#[test]
fn power_is_right_associative_and_binds_tighter_than_negation() {
    assert_value("2 ^ 3 ^ 2;", 512.0);
    assert_value("-2 ^ 2;", -4.0);
    assert_value("-2 * 3;", -6.0);
    assert_value("+5;", 5.0);
}

#[test]
fn division_by_zero_follows_ieee() {
    assert_value("1 / 0;", f64::INFINITY);
    assert_value("-1 / 0;", f64::NEG_INFINITY);
}

#[test]
fn logical_operators_bind_loosest() {
    assert_value("3 > 3 | 4 < 4 + 2;", true);
    assert_value("2 + 3 == 5 & 1 < 2;", true);
    assert_value("!false & false;", false);
    assert_value("!1 == 2;", true);
    assert_value("true | false & false;", false);
}

#[test]
fn logical_operators_evaluate_both_sides() {
    assert_failure("false & x;", "! SEMANTIC ERROR: Variable \"x\" is not defined (column 9)");
    assert_failure("true | 1;",
                   "! SEMANTIC ERROR: Operator '|' cannot be used between 'boolean' and 'number' (column 6)");
}

#[test]
fn concatenation_accepts_a_string_on_either_side() {
    assert_value("\"life is \" @ 42;", "life is 42");
    assert_value("42 @ \" is the answer\";", "42 is the answer");
    assert_value("\"a\" @ true;", "atrue");
    assert_value("\"v = \" @ [1, 2];", "v = [1, 2]");
    assert_failure("1 @ 2;",
                   "! SEMANTIC ERROR: At least one of the elements to concatenate must be a string (column 3)");
}

#[test]
fn string_escapes_are_resolved() {
    assert_value("\"tab\\there\";", "tab\there");
    assert_value("\"say \\\"hi\\\"\";", "say \"hi\"");
    assert_value("\"back\\\\slash\";", "back\\slash");
}

#[test]
fn equality_compares_like_kinds_only() {
    assert_value("\"a\" == \"a\";", true);
    assert_value("true != false;", true);
    assert_value("1 == 1.0;", true);
    assert_value("\"a\" != \"b\";", true);
    assert_failure("1 == \"1\";",
                   "! SEMANTIC ERROR: Operator '==' cannot be used between 'number' and 'string' (column 3)");
}

#[test]
fn relational_operators_require_numbers() {
    assert_value("1 <= 1;", true);
    assert_value("2 >= 3;", false);
    assert_failure("\"a\" < \"b\";",
                   "! SEMANTIC ERROR: Operator '<' cannot be used between 'string' and 'string' (column 5)");
}

#[test]
fn unary_operators_check_their_operand() {
    assert_failure("!1;", "! SEMANTIC ERROR: Operator '!' cannot be applied to 'number' (column 1)");
    assert_failure("-true;",
                   "! SEMANTIC ERROR: Operator '-' cannot be applied to 'boolean' (column 1)");
}

#[test]
fn let_bindings_are_sequential_and_shadow() {
    assert_value("let a = 6, b = a * 7 in b;", 42.0);
    assert_value("let x = 1 in let x = 2 in x;", 2.0);
    assert_value("let x = 1 in (let x = 2 in x) + x;", 3.0);
    assert_failure("let x = 1 in x; x;",
                   "! SEMANTIC ERROR: Variable \"x\" is not defined (column 17)");
}

#[test]
fn conditionals_select_one_branch() {
    assert_value("if (1 < 2) \"yes\" else \"no\";", "yes");
    assert_value("let x = 5 in if (x < 0) \"neg\" elif (x == 0) \"zero\" else \"pos\";", "pos");
    assert_value("let x = 0 in if (x < 0) \"neg\" elif (x == 0) \"zero\" else \"pos\";", "zero");
    assert_value("if (true) 1 else undefined_name;", 1.0);
    assert_failure("if (1) 2 else 3;",
                   "! SEMANTIC ERROR: Can't convert the given condition of type 'number' to bool (column 5)");
}

#[test]
fn recursive_functions() {
    assert_value("function fib(n) => if (n <= 1) 1 else fib(n - 1) + fib(n - 2); fib(6);", 13.0);
    assert_value("function mcd(a, b) => if (b == 0) a else mcd(b, a % b); mcd(36, 24);", 12.0);
}

#[test]
fn functions_persist_across_lines() {
    let mut context = Context::new();

    assert_eq!(get_result("function double(x) => x * 2;", &mut context), Ok(None));
    assert_eq!(get_result("double(21);", &mut context), Ok(Some(Value::Number(42.0))));
    assert_eq!(get_result("double(double(1));", &mut context), Ok(Some(Value::Number(4.0))));
}

#[test]
fn function_bodies_see_the_callers_variables() {
    assert_value("function getx() => x; let x = 5 in getx();", 5.0);
    assert_value("function add(a) => a + offset; let offset = 10 in add(1);", 11.0);
}

#[test]
fn function_call_errors() {
    assert_failure("g(1);", "! SEMANTIC ERROR: Function \"g\" is not defined (column 1)");
    assert_failure("function f(x) => x; f(1, 2);",
                   "! SEMANTIC ERROR: Function \"f\" does not take 2 arguments, it takes 1 (column 21)");
    assert_failure("function neg(b) => !b; neg(3);",
                   "! SEMANTIC ERROR: Argument \"b\" of function \"neg\" must be Bool, found Number (column 24)");
}

#[test]
fn function_declaration_errors() {
    assert_failure("function f(x) => x; function f(y) => y;",
                   "! SEMANTIC ERROR: Function \"f\" is already defined (column 30)");
    assert_failure("function bad(x) => \"a\" + 1;",
                   "! SEMANTIC ERROR: The body of function \"bad\" does not have a valid type (column 10)");
    assert_failure("function h(a, a) => a;",
                   "! SEMANTIC ERROR: Parameter \"a\" is declared more than once (column 15)");
}

#[test]
fn failed_declarations_are_not_registered() {
    let mut context = Context::new();

    assert!(get_result("function bad(x) => \"a\" + 1;", &mut context).is_err());
    assert!(!context.functions().contains("bad"));
    assert!(get_result("function f(x) => x $;", &mut context).is_err());
    assert!(!context.functions().contains("f"));
}

#[test]
fn unbounded_recursion_is_a_diagnostic() {
    let mut context = Context::new();

    let diagnostics = get_result("function f(x) => f(x + 1); f(0);", &mut context).unwrap_err();
    assert_eq!(diagnostics.messages(),
               vec!["! SEMANTIC ERROR: Stack overflow: more than 1000 nested function calls (column 18)"]);
    assert_eq!(context.environment.scopes.depth(), 0);

    assert_eq!(get_result("1 + 1;", &mut context), Ok(Some(Value::Number(2.0))));
}

#[test]
fn call_depth_follows_the_configured_limit() {
    let mut context = Context::with_limits(Limits::default().with_max_call_depth(5));

    assert!(get_result("function down(n) => if (n == 0) 0 else down(n - 1);", &mut context).is_ok());
    assert_eq!(get_result("down(4);", &mut context), Ok(Some(Value::Number(0.0))));
    assert!(get_result("down(5);", &mut context).is_err());
}

#[test]
fn for_loops_join_iteration_values() {
    assert_value("for (i in range(0, 3)) i;", "0\n1\n2");
    assert_value("let v = [1, 2, 3] in for (x in v) x * 2;", "2\n4\n6");
    assert_value("for (i in range(3, 3)) i;", "");
    assert_value("let i = 10 in for (i in range(0, 2)) i;", "0\n1");
    assert_failure("for (i in range(0, 1.5)) i;",
                   "! SEMANTIC ERROR: Range bounds must be integers, found '1.5' (column 1)");
    assert_failure("for (x in v) x;", "! SEMANTIC ERROR: Variable \"v\" is not defined (column 11)");
}

#[test]
fn while_loops_reevaluate_their_condition() {
    assert_value("while (false) 1;", "");
    assert_value("let v = [1, 2, 3] in while (v.next() < 3) v.current();", "1\n2");
    assert_failure("while (1) 1;",
                   "! SEMANTIC ERROR: Can't convert the given condition of type 'number' to bool (column 8)");
}

#[test]
fn ranges_and_vectors() {
    let expected: Vec<Value> = (0..5).map(|i| Value::Number(f64::from(i))).collect();
    assert_value("range(0, 5);", expected);
    assert_value("range(2, 1);", Vec::<Value>::new());
    assert_value("[1, \"a\", true];",
                 vec![Value::Number(1.0), Value::from("a"), Value::Bool(true)]);
    assert_value("let v = [10, 20, 30] in v[1];", 20.0);
    assert_value("let v = [10, 20, 30] in v.size();", 3.0);
    assert_value("let v = range(0, 4) in v[v.size() - 1];", 3.0);
}

#[test]
fn vector_errors() {
    assert_failure("let v = [1] in v[3];",
                   "! SEMANTIC ERROR: Index 3 is out of bounds for vector \"v\" of size 1 (column 16)");
    assert_failure("let v = [1] in v[0.5];",
                   "! SEMANTIC ERROR: Index must be a non-negative integer, found '0.5' (column 16)");
    assert_failure("let v = 1 in v[0];", "! SEMANTIC ERROR: Variable \"v\" is not a vector (column 14)");
}

#[test]
fn vector_cursor_moves_forward_only() {
    assert_value("let v = [1, 2] in v.next() + v.next();", 3.0);
    assert_value("let v = [1, 2] in \"\" @ v.next() @ v.current();", "11");
    assert_failure("let v = [1] in v.next() + v.next();",
                   "! SEMANTIC ERROR: Vector \"v\" has no more elements (column 27)");
    assert_failure("let v = [1] in v.current();",
                   "! SEMANTIC ERROR: Vector \"v\" has no current element, call next() first (column 16)");
    assert_failure("let v = [] in v.next();",
                   "! SEMANTIC ERROR: Vector \"v\" has no more elements (column 15)");
}

#[test]
fn range_length_is_limited() {
    let mut context = Context::with_limits(Limits::default().with_max_range_len(10));

    assert!(get_result("range(0, 10);", &mut context).is_ok());
    let diagnostics = get_result("range(0, 11);", &mut context).unwrap_err();
    assert_eq!(diagnostics.messages(),
               vec!["! SEMANTIC ERROR: Range of 11 elements exceeds the limit of 10 (column 1)"]);
}

#[test]
fn math_builtins() {
    assert_value("sqrt(16);", 4.0);
    assert_value("cos(PI);", -1.0);
    assert_value("sin(0);", 0.0);
    assert_value("exp(0);", 1.0);
    assert_value("log(10, 100);", 2.0);
    assert_value("E;", std::f64::consts::E);
    assert_failure("log(1, 5);", "! SEMANTIC ERROR: Invalid logarithm: base cannot be 1 (column 1)");
    assert_failure("log(2, -1);",
                   "! SEMANTIC ERROR: Invalid logarithm: argument must be positive (column 1)");
    assert_failure("sin(\"a\");",
                   "! SEMANTIC ERROR: Function 'sin' expects a number, found 'string' (column 1)");
}

#[test]
fn rand_is_uniform_and_reproducible_with_a_seed() {
    let mut context = Context::new();
    for _ in 0..100 {
        let Ok(Some(Value::Number(n))) = get_result("rand();", &mut context) else {
            panic!("rand() did not produce a number");
        };
        assert!((0.0..1.0).contains(&n));
    }

    let mut first = Context::new().with_seed(7);
    let mut second = Context::new().with_seed(7);
    assert_eq!(get_result("rand();", &mut first), get_result("rand();", &mut second));
}

#[test]
fn print_marks_the_result_for_display() {
    let mut context = Context::new();

    let trees = parse("print(1 + 1); 1 + 1;", &mut context);
    let printed = evaluate(trees[0].root.as_ref().unwrap(), &mut context);
    assert_eq!(printed.value, Some(Value::Number(2.0)));
    assert!(printed.print_requested);

    let silent = evaluate(trees[1].root.as_ref().unwrap(), &mut context);
    assert_eq!(silent.value, Some(Value::Number(2.0)));
    assert!(!silent.print_requested);
}

#[test]
fn lexical_errors() {
    assert_failure("let x = 4 in x $;", "! LEXICAL ERROR: '$' isn't a valid token (column 16)");
    assert_failure("12abc;", "! LEXICAL ERROR: '12abc' isn't a valid token (column 1)");
    assert_failure("let v = [1] in v.foo();",
                   "! LEXICAL ERROR: '.foo' isn't a valid vector method (column 17)");
    assert_failure("\"abc;", "! LEXICAL ERROR: Unterminated string \"abc; (column 1)");
}

#[test]
fn syntax_errors() {
    assert_failure("let x = 5 x;",
                   "! SYNTAX ERROR: Unexpected identifier 'x', expected 'in' (column 11)");
    assert_failure("1 + 2", "! SYNTAX ERROR: Unexpected end of input, expected ';' (column 6)");
    assert_failure("if (true) 1;", "! SYNTAX ERROR: Unexpected ';', expected 'else' (column 12)");
    assert_failure("1 + ;", "! SYNTAX ERROR: Unexpected ';', expected expression (column 5)");
}

#[test]
fn parsing_recovers_at_the_next_statement() {
    let mut context = Context::new();

    let trees = parse("1 +; 2 + 2;", &mut context);
    assert_eq!(trees.len(), 2);
    assert!(!trees[0].is_valid());
    assert!(trees[1].is_valid());

    let evaluation = evaluate(trees[1].root.as_ref().unwrap(), &mut context);
    assert_eq!(evaluation.value, Some(Value::Number(4.0)));
}

#[test]
fn deep_nesting_is_a_syntax_error() {
    let mut context = Context::with_limits(Limits::default().with_max_parse_depth(50));
    let source = format!("{}1{};", "(".repeat(100), ")".repeat(100));

    let diagnostics = get_result(&source, &mut context).unwrap_err();
    assert!(diagnostics.messages()[0].starts_with("! SYNTAX ERROR: Expression nested deeper than 50 levels"));

    let source = format!("{}1{};", "(".repeat(20), ")".repeat(20));
    assert_eq!(get_result(&source, &mut context), Ok(Some(Value::Number(1.0))));
}

#[test]
fn deep_nesting_within_limits_does_not_overflow_the_stack() {
    let mut context = Context::new();
    let source = format!("{}1{};", "(".repeat(900), ")".repeat(900));

    assert_eq!(get_result(&source, &mut context), Ok(Some(Value::Number(1.0))));
}

#[test]
fn scopes_are_unwound_after_errors() {
    let mut context = Context::new();

    let trees = parse("let x = 1 in let y = 2 in z;", &mut context);
    let evaluation = evaluate(trees[0].root.as_ref().unwrap(), &mut context);
    assert_eq!(evaluation.value, None);
    assert_eq!(evaluation.diagnostics.len(), 1);
    assert_eq!(context.environment.scopes.depth(), 0);
}

#[test]
fn successful_evaluation_leaves_no_diagnostics() {
    let mut context = Context::new();

    for source in ["\"a\" @ 1;", "1 @ \"a\";", "\"a\" == \"a\";", "true == false;"] {
        let trees = parse(source, &mut context);
        let evaluation = evaluate(trees[0].root.as_ref().unwrap(), &mut context);
        assert!(evaluation.diagnostics.is_empty(), "{source}");
    }
}

#[test]
fn only_declarations_produce_no_value() {
    assert_eq!(run("function id(x) => x;"), Ok(None));
    assert_eq!(run(""), Ok(None));
}

#[test]
fn diagnostics_keep_report_order() {
    let mut context = Context::new();
    let mut diagnostics = parse("1 + ) $;", &mut context).remove(0).diagnostics;

    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics.first().map(|d| d.column()), Some(7));
    assert_eq!(diagnostics.last().map(|d| d.column()), Some(5));

    let last = diagnostics.pop().unwrap();
    assert_eq!(last.to_string(), "! SYNTAX ERROR: Unexpected ')', expected expression (column 5)");
    assert_eq!(diagnostics.messages(),
               vec!["! LEXICAL ERROR: '$' isn't a valid token (column 7)"]);

    assert!(diagnostics.take_first().is_some());
    assert!(diagnostics.is_empty());
}

#[test]
fn long_function_bodies_are_inferred_and_evaluated() {
    let body = vec!["x"; 10_000].join(" + ");
    let source = format!("function f(x) => {body}; f(1);");

    assert_eq!(run(&source), Ok(Some(Value::Number(10_000.0))));
}

#[test]
fn deep_trees_are_dropped_without_overflowing_the_stack() {
    let mut expr = Expr::Number { value: 1.0, column: 1 };
    for _ in 0..100_000 {
        expr = Expr::BinaryOp { left:   Box::new(expr),
                                op:     BinaryOperator::Add,
                                right:  Box::new(Expr::Number { value: 1.0, column: 1 }),
                                column: 1, };
    }

    assert_eq!(expr.column(), 1);
    drop(expr);
}

#[test]
fn columns_on_long_lines() {
    let source = format!("{};", vec!["x"; 20_000].join(" + "));
    let (lexemes, errors) = tokenize(&source);

    assert!(errors.is_empty());
    let columns: Vec<usize> = lexemes.iter()
                                     .filter(|lexeme| matches!(lexeme.token, Token::Identifier(_)))
                                     .map(|lexeme| lexeme.column)
                                     .collect();
    assert_eq!(columns.len(), 20_000);
    assert!(columns.iter().enumerate().all(|(i, column)| *column == 1 + 4 * i));
    assert_eq!(lexemes.last().map(|lexeme| lexeme.column), Some(4 * 19_999 + 2));
}

#[test]
fn columns_count_characters_not_bytes() {
    let (lexemes, _) = tokenize("\"é\" @ x;");
    let columns: Vec<usize> = lexemes.iter().map(|lexeme| lexeme.column).collect();
    assert_eq!(columns, vec![1, 5, 7, 8]);

    assert_failure("\"ñandú\" @ y;", "! SEMANTIC ERROR: Variable \"y\" is not defined (column 11)");
}

#[test]
fn constants_are_whole_words() {
    let (lexemes, _) = tokenize("PI E PIx Ex e");
    let tokens: Vec<Token> = lexemes.into_iter().map(|lexeme| lexeme.token).collect();
    assert_eq!(tokens,
               vec![Token::Constant(MathConstant::Pi),
                    Token::Constant(MathConstant::E),
                    Token::Identifier("PIx".into()),
                    Token::Identifier("Ex".into()),
                    Token::Identifier("e".into())]);

    assert_value("PI > 3 & E > 2 & E < 3;", true);
    assert_value("let Ex = 5 in Ex;", 5.0);
}

#[test]
fn every_statement_value_is_shown() {
    let mut context = Context::new();

    let output = run_line("function fib(n) => if (n <= 1) 1 else fib(n - 1) + fib(n - 2); fib(6);",
                          &mut context);
    assert_eq!(output.values, vec![Value::Number(13.0)]);
    assert_eq!(output.error, None);

    let output = run_line("1 + 1; print(\"a\"); for (i in range(0, 3)) i;", &mut context);
    assert_eq!(output.values,
               vec![Value::Number(2.0), Value::from("a"), Value::from("0\n1\n2")]);
}

#[test]
fn shown_values_stop_at_the_first_error() {
    let mut context = Context::new();

    let output = run_line("1; x; 2;", &mut context);
    assert_eq!(output.values, vec![Value::Number(1.0)]);
    assert_eq!(output.error.map(|d| d.to_string()),
               Some("! SEMANTIC ERROR: Variable \"x\" is not defined (column 4)".to_string()));

    let output = run_line("3; 4 +; 5;", &mut context);
    assert_eq!(output.values, vec![Value::Number(3.0)]);
    assert!(output.error.is_some());
}

#[test]
fn loops_mark_their_result_for_display() {
    let mut context = Context::new();

    for source in ["for (i in range(0, 3)) i;", "let n = 0 in while (n < 0) n;"] {
        let trees = parse(source, &mut context);
        let evaluation = evaluate(trees[0].root.as_ref().unwrap(), &mut context);
        assert!(evaluation.value.is_some(), "{source}");
        assert!(evaluation.print_requested, "{source}");
    }
}
