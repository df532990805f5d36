use std::{fs, path::Path};

use lambra::{
    error::{ParseError, RuntimeError},
    grammar::GrammarTable,
    interpreter::{
        evaluator::core::Context,
        lexer::{tokenize, Pos, Token},
        value::Value,
    },
    parse_source, run_source,
};
use walkdir::WalkDir;

fn assert_success(src: &str) {
    let context = Context::new();
    match run_source(src, &context) {
        Ok(outcomes) => {
            for (i, outcome) in outcomes.iter().enumerate() {
                if let Err(e) = outcome {
                    panic!("Statement {} failed:\n{}\nError: {e}", i + 1, src);
                }
            }
        },
        Err(e) => panic!("Script failed to parse:\n{src}\nError: {e}"),
    }
}

fn assert_failure(src: &str) {
    let context = Context::new();
    if let Ok(outcomes) = run_source(src, &context) {
        if outcomes.iter().all(Result::is_ok) {
            panic!("Script succeeded but was expected to fail:\n{src}")
        }
    }
}

/// Runs a script and returns the last non-void statement result.
fn last_value(src: &str) -> Value {
    let context = Context::new();
    let outcomes = run_source(src, &context).unwrap_or_else(|e| panic!("Parse failed: {e}"));
    outcomes.into_iter()
            .map(|outcome| outcome.unwrap_or_else(|e| panic!("Statement failed: {e}")))
            .flatten()
            .last()
            .expect("script produced no value")
}

#[test]
fn tokenizing_a_call_yields_positions() {
    let tokens = tokenize("factorial(5)").unwrap();

    assert_eq!(tokens,
               vec![(Token::Identifier("factorial".to_string()), Pos { line: 1, column: 0 }),
                    (Token::LParen, Pos { line: 1, column: 9 }),
                    (Token::Integer(5), Pos { line: 1, column: 10 }),
                    (Token::RParen, Pos { line: 1, column: 11 }),]);
}

#[test]
fn newlines_and_comments_shape_positions() {
    let tokens = tokenize("# a comment\n  foo\n").unwrap();

    assert_eq!(tokens,
               vec![(Token::Identifier("foo".to_string()), Pos { line: 2, column: 2 })]);
}

#[test]
fn signed_literal_wins_the_longest_match() {
    // `10 -1` is two statements: the literal 10, then the literal -1.
    let context = Context::new();
    let outcomes = run_source("10 -1", &context).unwrap();
    assert_eq!(outcomes,
               vec![Ok(Some(Value::Integer(10))), Ok(Some(Value::Integer(-1)))]);

    // `10 - 1` is a subtraction.
    assert_eq!(last_value("10 - 1"), Value::Integer(9));
}

#[test]
fn basic_arithmetic() {
    assert_eq!(last_value("1 + 2"), Value::Integer(3));
    assert_eq!(last_value("7 * 9"), Value::Integer(63));
    assert_eq!(last_value("8 - 5"), Value::Integer(3));
    assert_eq!(last_value("10 / 2"), Value::Integer(5));
    assert_eq!(last_value("10 % 3"), Value::Integer(1));
}

#[test]
fn division_is_floor_division() {
    assert_eq!(last_value("7 / 2"), Value::Integer(3));
    assert_eq!(last_value("-7 / 2"), Value::Integer(-4));
    assert_eq!(last_value("7 / -2"), Value::Integer(-4));
    assert_eq!(last_value("-7 / -2"), Value::Integer(3));
}

#[test]
fn modulo_takes_the_divisor_sign() {
    assert_eq!(last_value("-7 % 2"), Value::Integer(1));
    assert_eq!(last_value("7 % -2"), Value::Integer(-1));
    assert_eq!(last_value("-7 % -2"), Value::Integer(-1));
}

#[test]
fn division_by_zero_is_error() {
    let context = Context::new();
    let outcomes = run_source("1 / 0", &context).unwrap();
    assert!(matches!(outcomes[0], Err(RuntimeError::DivisionByZero { line: 1 })));

    assert_failure("1 % 0");
}

#[test]
fn overflow_is_reported_not_wrapped() {
    let context = Context::new();
    let outcomes = run_source("9223372036854775807 + 1", &context).unwrap();
    assert!(matches!(outcomes[0], Err(RuntimeError::Overflow { .. })));
}

#[test]
fn operators_bind_flat_and_left_associative() {
    // No precedence: `2 + 3 * 4` groups as `(2 + 3) * 4`.
    assert_eq!(last_value("2 + 3 * 4"), Value::Integer(20));
    assert_eq!(last_value("2 + (3 * 4)"), Value::Integer(14));
    assert_eq!(last_value("2 + 3 == 5 && True"), Value::Bool(true));
}

#[test]
fn not_negates_the_whole_rest_of_the_expression() {
    assert_eq!(last_value("!True"), Value::Bool(false));
    assert_eq!(last_value("!0"), Value::Bool(true));
    // `!` consumes everything to its right: `!True && False` is
    // `!(True && False)`.
    assert_eq!(last_value("!True && False"), Value::Bool(true));
}

#[test]
fn logical_short_circuit_laws() {
    // The right operand would fail to resolve; short-circuiting must keep
    // it unevaluated.
    assert_eq!(last_value("True || boom"), Value::Bool(true));
    assert_eq!(last_value("False && boom"), Value::Bool(false));

    // Without short-circuiting the failure surfaces.
    assert_failure("False || boom");
    assert_failure("True && boom");
}

#[test]
fn truthiness_of_integers() {
    assert_eq!(last_value("if 5 {1} else {2}"), Value::Integer(1));
    assert_eq!(last_value("if 0 {1} else {2}"), Value::Integer(2));
    assert_eq!(last_value("3 && True"), Value::Bool(true));
    assert_eq!(last_value("0 || False"), Value::Bool(false));
}

#[test]
fn comparisons() {
    assert_eq!(last_value("2 < 3"), Value::Bool(true));
    assert_eq!(last_value("3 >= 3"), Value::Bool(true));
    assert_eq!(last_value("2 != 3"), Value::Bool(true));
    assert_eq!(last_value("1 < 2 == True"), Value::Bool(true));
    assert_eq!(last_value("False == False"), Value::Bool(true));
}

#[test]
fn mixed_kind_comparison_is_error() {
    assert_failure("1 == True");
    assert_failure("True > False");
    assert_failure("1 + True");
    assert_failure("(Lambd x. x) == (Lambd x. x)");
}

#[test]
fn if_without_else_can_be_void() {
    let context = Context::new();
    let outcomes = run_source("if (False) {1}", &context).unwrap();
    assert_eq!(outcomes, vec![Ok(None)]);

    assert_eq!(last_value("if (True) {7}"), Value::Integer(7));
    assert_eq!(last_value("if (False) {1} else {2}"), Value::Integer(2));
}

#[test]
fn recursion_through_the_defining_frame() {
    let program = "Defun {name: factorial, arguments: (n,)} \
                   if (n == 0) {1} else {n * factorial(n - 1)}\n\
                   factorial(5)";
    assert_eq!(last_value(program), Value::Integer(120));

    let program = "Defun {name: fib, arguments: (n,)} \
                   if (n < 2) {n} else {fib(n - 1) + fib(n - 2)}\n\
                   fib(10)";
    assert_eq!(last_value(program), Value::Integer(55));
}

#[test]
fn zero_parameter_functions() {
    assert_eq!(last_value("Defun {name: five, arguments: ()} 5\nfive()"),
               Value::Integer(5));
}

#[test]
fn parameters_require_a_trailing_comma() {
    assert!(parse_source("Defun {name: f, arguments: (n)} n").is_err());
    assert!(parse_source("Defun {name: f, arguments: (n,)} n").is_ok());
    assert!(parse_source("Defun {name: f, arguments: (a, b,)} a + b").is_ok());
}

#[test]
fn curried_application_folds_one_argument_at_a_time() {
    assert_eq!(last_value("(Lambd x. (Lambd y. (y + x)))(5, 3)"),
               Value::Integer(8));
    assert_eq!(last_value("(Lambd a. (Lambd b. (Lambd c. ((a + b) * c))))(2, 3, 4)"),
               Value::Integer(20));
    assert_eq!(last_value("(Lambd n. (n * n))(9)"), Value::Integer(81));

    // More arguments than the lambda chain can consume.
    assert_failure("(Lambd x. x)(1, 2)");
}

#[test]
fn partial_application_retains_the_captured_binding() {
    let context = Context::new();

    let outcomes = run_source("(Lambd x. (Lambd y. (y + x)))(5)", &context).unwrap();
    let partial = outcomes[0].clone().unwrap().unwrap();
    assert!(matches!(partial, Value::Lambda(_)));

    // The outer frame is no longer directly reachable; the inner lambda
    // must still see x = 5.
    context.globals().define("add5", partial);
    let outcomes = run_source("add5(3)", &context).unwrap();
    assert_eq!(outcomes, vec![Ok(Some(Value::Integer(8)))]);
}

#[test]
fn unapplied_lambda_is_a_value() {
    let context = Context::new();
    let outcomes = run_source("(Lambd x. x)", &context).unwrap();
    assert!(matches!(outcomes[0], Ok(Some(Value::Lambda(_)))));
}

#[test]
fn arity_mismatch_is_isolated_from_later_statements() {
    let context = Context::new();
    let outcomes =
        run_source("Defun {name: add, arguments: (a, b,)} a + b\nadd(3)\nadd(3, 4)",
                   &context).unwrap();

    assert_eq!(outcomes[0], Ok(None));
    assert!(matches!(outcomes[1],
                     Err(RuntimeError::ArityMismatch { expected: 2,
                                                       found: 1,
                                                       .. })));
    assert_eq!(outcomes[2], Ok(Some(Value::Integer(7))));
}

#[test]
fn applying_a_non_closure_is_error() {
    let context = Context::new();
    context.globals().define("x", Value::Integer(7));
    let outcomes = run_source("x(1)", &context).unwrap();
    assert!(matches!(outcomes[0], Err(RuntimeError::TypeMismatch { .. })));
}

#[test]
fn undefined_identifier_is_error() {
    let context = Context::new();
    let outcomes = run_source("foo", &context).unwrap();
    assert!(matches!(&outcomes[0],
                     Err(RuntimeError::UndefinedIdentifier { name, line: 1 }) if name == "foo"));
}

#[test]
fn definitions_persist_across_inputs() {
    let context = Context::new();
    run_source("Defun {name: double, arguments: (x,)} x * 2", &context).unwrap();
    let outcomes = run_source("double(21)", &context).unwrap();
    assert_eq!(outcomes, vec![Ok(Some(Value::Integer(42)))]);
}

#[test]
fn syntax_error_reports_the_offending_position() {
    // The comma after the function name is missing; `arguments` on line 2
    // starts at column 15.
    let err = parse_source("\nDefun {name: f arguments: (n,)} n").unwrap_err();
    assert!(matches!(err,
                     ParseError::UnexpectedToken { line: 2,
                                                   column: 15,
                                                   .. }),
            "unexpected error: {err:?}");
}

#[test]
fn lexical_error_reports_the_offending_character() {
    let err = parse_source("2 $ 2").unwrap_err();
    assert_eq!(err,
               ParseError::UnexpectedCharacter { found: "$".to_string(),
                                                 line:  1, });

    // Assignment is not part of the language.
    assert!(matches!(parse_source("x = 1"),
                     Err(ParseError::UnexpectedCharacter { .. })));

    // An integer literal that does not fit in 64 bits.
    assert!(matches!(parse_source("99999999999999999999"),
                     Err(ParseError::UnexpectedCharacter { .. })));
}

#[test]
fn boolean_results_display_as_literals() {
    assert_eq!(last_value("2 == 2").to_string(), "True");
    assert_eq!(last_value("2 == 3").to_string(), "False");
}

#[test]
fn demo_scripts_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "lambda"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        count += 1;
        assert_success(&content);
    }

    assert!(count > 0, "No demo scripts found in demos/");
}

#[test]
fn example_script_produces_the_expected_values() {
    let script = fs::read_to_string("tests/example.lambda").expect("missing file");
    let context = Context::new();
    let outcomes = run_source(&script, &context).expect("parse failed");

    let values: Vec<_> = outcomes.into_iter()
                                 .map(|outcome| outcome.expect("statement failed"))
                                 .flatten()
                                 .collect();

    assert_eq!(values,
               vec![Value::Integer(720),
                    Value::Integer(6),
                    Value::Integer(42),
                    Value::Integer(1)]);
}

#[test]
fn grammar_table_loads_and_renders() {
    let table = GrammarTable::load(Path::new("grammar.bnf")).expect("missing grammar.bnf");
    assert!(!table.is_empty());
    assert!(table.rules().iter().any(|(lhs, _)| lhs == "expression"));
    assert!(table.to_string().contains("::="));
}

#[test]
fn grammar_continuation_lines_extend_the_previous_rule() {
    let table = GrammarTable::from_source("op ::= '+' | '-'\n     | '*'\n");
    assert_eq!(table.rules().len(), 1);
    assert_eq!(table.rules()[0].1,
               vec!["'+'".to_string(), "'-'".to_string(), "'*'".to_string()]);
}
