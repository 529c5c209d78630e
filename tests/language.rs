use numera::{
    error::RuntimeError,
    eval_line,
    interpreter::{
        evaluator::core::{Outcome, ScopeMode, Session, SessionOptions, UndefinedNames},
        lexer::{Token, lex},
        parser::{
            core::{OperatorFolding, ParseOptions},
            statement::parse_statement,
        },
    },
    run_source,
};

fn eval_all(source: &str) -> Result<Option<f64>, Box<dyn std::error::Error>> {
    let mut session = Session::new();
    run_source(&mut session, source, false)
}

fn assert_value(source: &str, expected: f64) {
    match eval_all(source) {
        Ok(Some(value)) => assert_eq!(value, expected, "script: {source:?}"),
        other => panic!("script {source:?} produced {other:?}, expected {expected}"),
    }
}

fn assert_failure(source: &str) {
    if eval_all(source).is_ok() {
        panic!("script {source:?} succeeded but was expected to fail")
    }
}

fn token_kinds(source: &str) -> Vec<Token> {
    lex(source, 1).unwrap().into_iter().map(|(tok, _)| tok).collect()
}

#[test]
fn lexing_basic_arithmetic() {
    assert_eq!(token_kinds("12 + 34"),
               vec![Token::Number(12.0), Token::Plus, Token::Number(34.0)]);
}

#[test]
fn lexing_function_declaration() {
    assert_eq!(token_kinds("let f(x) = x * 2"),
               vec![Token::Let,
                    Token::Identifier("f".to_string()),
                    Token::LParen,
                    Token::Identifier("x".to_string()),
                    Token::RParen,
                    Token::Equals,
                    Token::Identifier("x".to_string()),
                    Token::Star,
                    Token::Number(2.0)]);
}

#[test]
fn lexing_number_forms_and_keywords() {
    assert_eq!(token_kinds("3.14 .5 2e3 clear exit let ans"),
               vec![Token::Number(3.14),
                    Token::Number(0.5),
                    Token::Number(2000.0),
                    Token::Clear,
                    Token::Exit,
                    Token::Let,
                    Token::Ans]);
    // a keyword prefix is still an ordinary identifier
    assert_eq!(token_kinds("clearx"),
               vec![Token::Identifier("clearx".to_string())]);
}

#[test]
fn lexing_rejects_junk_characters() {
    assert!(lex("1 $ 2", 1).is_err());
}

#[test]
fn addition_sets_answer_and_display() {
    let mut session = Session::new();

    let outcome = eval_line(&mut session, "3 + 4", 1).unwrap();

    assert_eq!(outcome, Outcome::Value(7.0));
    assert!(session.show);
    assert_eq!(session.ans, 7.0);
}

#[test]
fn assignment_is_silent_and_persists() {
    let mut session = Session::new();

    assert_eq!(eval_line(&mut session, "let x = 5", 1).unwrap(),
               Outcome::Silent);
    assert!(!session.show);

    assert_eq!(eval_line(&mut session, "x + 1", 2).unwrap(),
               Outcome::Value(6.0));
}

#[test]
fn reassignment_overwrites() {
    assert_value("let x = 1\nlet x = 2\nx", 2.0);
    assert_value("let f(x) = x\nlet f(x) = x * 2\nf(4)", 8.0);
}

#[test]
fn user_functions() {
    assert_value("let sq(n) = n * n\nsq(6)", 36.0);
    assert_value("let add(a, b) = a + b\nadd(2, 5)", 7.0);
    assert_value("let five() = 5\nfive()", 5.0);
    assert_value("let add(a, b) = a + b\nadd(add(1, 2), 3)", 6.0);
}

#[test]
fn wrong_arity_is_an_error() {
    let mut session = Session::new();
    eval_line(&mut session, "let sq(n) = n * n", 1).unwrap();

    let err = eval_line(&mut session, "sq(1, 2)", 2).unwrap_err();
    let runtime = err.downcast_ref::<RuntimeError>().expect("runtime error");
    assert!(matches!(runtime,
                     RuntimeError::ArityMismatch { expected: 1,
                                                   found: 2,
                                                   .. }));

    // the declaration survives the failed call
    assert_eq!(eval_line(&mut session, "sq(6)", 3).unwrap(),
               Outcome::Value(36.0));
}

#[test]
fn parameters_never_outlive_a_call() {
    for scope in [ScopeMode::CallBindings, ScopeMode::SharedVariables] {
        let mut session = Session::with_options(SessionOptions { scope,
                                                                 ..SessionOptions::default() });

        eval_line(&mut session, "let sq(n) = n * n", 1).unwrap();
        eval_line(&mut session, "sq(6)", 2).unwrap();

        assert!(!session.variables.contains_key("n"),
                "parameter leaked in {scope:?} mode");
    }
}

#[test]
fn call_bindings_preserve_shadowed_variables() {
    let mut session = Session::new();

    eval_line(&mut session, "let n = 10", 1).unwrap();
    eval_line(&mut session, "let sq(n) = n * n", 2).unwrap();
    assert_eq!(eval_line(&mut session, "sq(6)", 3).unwrap(),
               Outcome::Value(36.0));

    assert_eq!(eval_line(&mut session, "n", 4).unwrap(),
               Outcome::Value(10.0));
}

#[test]
fn shared_scope_deletes_shadowed_variables() {
    let options = SessionOptions { scope: ScopeMode::SharedVariables,
                                   ..SessionOptions::default() };
    let mut session = Session::with_options(options);

    eval_line(&mut session, "let n = 10", 1).unwrap();
    eval_line(&mut session, "let sq(n) = n * n", 2).unwrap();
    assert_eq!(eval_line(&mut session, "sq(6)", 3).unwrap(),
               Outcome::Value(36.0));

    // the caller's n was unconditionally deleted with the parameter
    assert!(eval_line(&mut session, "n", 4).is_err());
}

#[test]
fn shared_scope_arguments_see_earlier_parameters() {
    let options = SessionOptions { scope: ScopeMode::SharedVariables,
                                   ..SessionOptions::default() };
    let mut session = Session::with_options(options);

    eval_line(&mut session, "let add(a, b) = a + b", 1).unwrap();
    // the second argument reads the already-bound first parameter
    assert_eq!(eval_line(&mut session, "add(1, a)", 2).unwrap(),
               Outcome::Value(2.0));

    // with private frames the same call cannot see 'a'
    let mut session = Session::new();
    eval_line(&mut session, "let add(a, b) = a + b", 1).unwrap();
    assert!(eval_line(&mut session, "add(1, a)", 2).is_err());
}

#[test]
fn unknown_identifier_is_recoverable() {
    let mut session = Session::new();

    let err = eval_line(&mut session, "y", 1).unwrap_err();
    let runtime = err.downcast_ref::<RuntimeError>().expect("runtime error");
    assert!(matches!(runtime, RuntimeError::UnknownIdentifier { .. }));

    // the aborted path leaves a zero answer, and the session lives on
    assert_eq!(session.ans, 0.0);
    assert!(!session.show);
    assert_eq!(eval_line(&mut session, "1 + 1", 2).unwrap(),
               Outcome::Value(2.0));
}

#[test]
fn unknown_function_is_recoverable() {
    let mut session = Session::new();

    let err = eval_line(&mut session, "f(3)", 1).unwrap_err();
    let runtime = err.downcast_ref::<RuntimeError>().expect("runtime error");
    assert!(matches!(runtime, RuntimeError::UnknownFunction { .. }));
}

#[test]
fn ans_refers_to_the_previous_result() {
    let mut session = Session::new();

    eval_line(&mut session, "2 + 3", 1).unwrap();
    assert_eq!(eval_line(&mut session, "ans * 2", 2).unwrap(),
               Outcome::Value(10.0));
}

#[test]
fn chained_folding_is_left_associative() {
    assert_value("1 + 2 + 3", 6.0);
    assert_value("10 - 2 - 3", 5.0);
    assert_value("2 * 3 * 4", 24.0);
    assert_value("100 / 10 / 5", 2.0);
}

#[test]
fn first_pair_folding_drops_the_rest_of_the_chain() {
    let options = SessionOptions { folding: OperatorFolding::FirstPairOnly,
                                   ..SessionOptions::default() };

    for (line, expected) in [("1 + 2 + 3", 3.0),
                             ("10 - 2 - 3", 8.0),
                             ("2 * 3 * 4", 6.0),
                             // precedence still applies within the pair
                             ("1 + 2 * 3", 7.0)]
    {
        let mut session = Session::with_options(options);
        assert_eq!(eval_line(&mut session, line, 1).unwrap(),
                   Outcome::Value(expected),
                   "line: {line:?}");
    }
}

#[test]
fn precedence_and_grouping() {
    assert_value("1 + 2 * 3", 7.0);
    assert_value("(1 + 2) * 3", 9.0);
    assert_value("let x = -2 * 3\nx", -6.0);
    assert_value("let y = --5\ny", 5.0);
    assert_value("(-5)", -5.0);
}

#[test]
fn leading_minus_is_not_a_statement() {
    let mut session = Session::new();
    assert!(eval_line(&mut session, "-5", 1).is_err());
}

#[test]
fn division_by_zero_follows_ieee_semantics() {
    let positive = eval_all("1 / 0").unwrap().unwrap();
    assert!(positive.is_infinite() && positive > 0.0);

    let indeterminate = eval_all("0 / 0").unwrap().unwrap();
    assert!(indeterminate.is_nan());
}

#[test]
fn zero_undefined_profile() {
    let options = SessionOptions { undefined: UndefinedNames::Zero,
                                   ..SessionOptions::default() };
    let mut session = Session::with_options(options);

    assert_eq!(eval_line(&mut session, "y", 1).unwrap(),
               Outcome::Value(0.0));
    assert_eq!(eval_line(&mut session, "f(3)", 2).unwrap(),
               Outcome::Value(0.0));
    assert_eq!(eval_line(&mut session, "y + 7", 3).unwrap(),
               Outcome::Value(7.0));
}

#[test]
fn clear_and_exit_outcomes() {
    let mut session = Session::new();

    assert_eq!(eval_line(&mut session, "clear", 1).unwrap(),
               Outcome::ClearScreen);
    assert!(!session.show);

    assert_eq!(eval_line(&mut session, "exit", 2).unwrap(), Outcome::Exit);
}

#[test]
fn blank_lines_are_noops() {
    let mut session = Session::new();

    assert_eq!(eval_line(&mut session, "", 1).unwrap(), Outcome::Silent);
    assert_eq!(eval_line(&mut session, "   \t", 2).unwrap(), Outcome::Silent);
}

#[test]
fn exit_stops_a_script() {
    let mut session = Session::new();
    let result = run_source(&mut session, "5\nexit\n6", false).unwrap();

    assert_eq!(result, Some(5.0));
}

#[test]
fn trailing_tokens_are_rejected() {
    assert_failure("1 2");
    assert_failure("sq 6");
}

#[test]
fn chained_calls_parse_but_do_not_evaluate() {
    let mut session = Session::new();
    eval_line(&mut session, "let id(x) = x", 1).unwrap();

    let err = eval_line(&mut session, "id(1)(2)", 2).unwrap_err();
    let runtime = err.downcast_ref::<RuntimeError>().expect("runtime error");
    assert!(matches!(runtime, RuntimeError::NotCallable { .. }));
}

#[test]
fn malformed_statements_fail_to_parse() {
    assert_failure("let = 5");
    assert_failure("let x 5");
    assert_failure("1 +");
    assert_failure("+");
    assert_failure(")");
    assert_failure("let f(x y) = x");
    assert_failure("let f(x = x");
    // ans is a keyword, not an assignable name
    assert_failure("let ans = 1");
}

#[test]
fn pretty_printing_round_trips() {
    let opts = ParseOptions::default();

    for line in ["1 + 2 * 3",
                 "(1 + 2) * 3",
                 "2 * -(4 + 5)",
                 "10 - 2 - 3",
                 "3.5 + .5",
                 "((7))"]
    {
        let tokens = lex(line, 1).unwrap();
        let statement = parse_statement(&mut tokens.iter().peekable(), opts).unwrap();

        let printed = statement.to_string();
        let reparsed_tokens = lex(&printed, 1).unwrap();
        let reparsed =
            parse_statement(&mut reparsed_tokens.iter().peekable(), opts).unwrap();

        let mut first = Session::new();
        let mut second = Session::new();
        let (a, b) = match (first.eval_statement(&statement).unwrap(),
                            second.eval_statement(&reparsed).unwrap())
        {
            (Outcome::Value(a), Outcome::Value(b)) => (a, b),
            other => panic!("unexpected outcomes for {line:?}: {other:?}"),
        };

        assert_eq!(a, b, "round trip changed the value of {line:?} (printed as {printed:?})");
    }
}

#[test]
fn declarations_print_in_source_form() {
    let opts = ParseOptions::default();

    for line in ["let sq(n) = n * n", "let x = (1 + 2) * 3", "let f() = 5"] {
        let tokens = lex(line, 1).unwrap();
        let statement = parse_statement(&mut tokens.iter().peekable(), opts).unwrap();

        assert_eq!(statement.to_string(), line);
    }
}
