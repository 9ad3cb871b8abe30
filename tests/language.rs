use std::{
    cell::RefCell,
    fs,
    io::{self, Cursor, Write},
    rc::Rc,
};

use lip::{
    error::{ParseError, RuntimeError},
    get_result,
    interpreter::{
        evaluator::core::{Context, MAX_CALL_DEPTH},
        lexer::{Token, tokenize},
        value::core::Value,
    },
    parse, run,
};
use walkdir::WalkDir;

/// Output sink that stays readable after the context took ownership of it.
#[derive(Clone, Default)]
struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

fn context_with_input(input: &str) -> (Context, SharedBuffer) {
    let buffer = SharedBuffer::default();
    let context = Context::with_io(Box::new(buffer.clone()), Box::new(Cursor::new(input.to_string())));
    (context, buffer)
}

fn output_with_input(src: &str, input: &str) -> String {
    let (mut context, buffer) = context_with_input(input);
    if let Err(e) = run(src, &mut context) {
        panic!("Script failed: {e}\n{src}");
    }
    buffer.contents()
}

fn output_of(src: &str) -> String {
    output_with_input(src, "")
}

fn assert_success(src: &str) {
    let (mut context, _) = context_with_input("");
    if let Err(e) = run(src, &mut context) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    let (mut context, _) = context_with_input("");
    if run(src, &mut context).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

fn runtime_error_with_input(src: &str, input: &str) -> RuntimeError {
    let (mut context, _) = context_with_input(input);
    match run(src, &mut context) {
        Ok(_) => panic!("Script succeeded but was expected to fail:\n{src}"),
        Err(e) => *e.downcast::<RuntimeError>()
                    .unwrap_or_else(|e| panic!("Expected a runtime error, got: {e}")),
    }
}

fn runtime_error(src: &str) -> RuntimeError {
    runtime_error_with_input(src, "")
}

fn parse_error(src: &str) -> ParseError {
    match tokenize(src).and_then(|tokens| parse(&tokens)) {
        Ok(_) => panic!("Source parsed but was expected to fail:\n{src}"),
        Err(e) => e,
    }
}

#[test]
fn script_files_match_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "lip"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = fs::read_to_string(path.with_extension("out"))
            .unwrap_or_else(|e| panic!("Missing expected output for {path:?}: {e}"));
        let input = fs::read_to_string(path.with_extension("in")).unwrap_or_default();

        count += 1;
        assert_eq!(output_with_input(&source, &input), expected, "output of {path:?}");
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

#[test]
fn arithmetic_and_decimal_widening() {
    assert_eq!(output_of("drucken(1 + 2 * 3)"), "7\n");
    assert_eq!(output_of("drucken((1 + 2) * 3)"), "9\n");
    assert_eq!(output_of("drucken(10 - 4 - 3)"), "3\n");
    assert_eq!(output_of("drucken(1 + 2.5)"), "3.5\n");
    assert_eq!(output_of("drucken(2 * 1.5)"), "3.0\n");
    assert_eq!(output_of("drucken(-3 + 1)"), "-2\n");
}

#[test]
fn large_integers_widen_to_decimals() {
    let (mut context, _) = context_with_input("");
    run("dec d = 9007199254740993\nx = 9007199254740993 + 0.5\ny = 9007199254740993 / 1",
        &mut context).unwrap();

    assert_eq!(context.env.get("d"), Some(&Value::Decimal(9_007_199_254_740_992.0)));
    assert_eq!(context.env.get("x"), Some(&Value::Decimal(9_007_199_254_740_992.0)));
    assert_eq!(context.env.get("y"), Some(&Value::Decimal(9_007_199_254_740_992.0)));
    assert_eq!(output_of("drucken(9007199254740993 == 9007199254740992.0)"), "true\n");
}

#[test]
fn division_is_true_division() {
    assert_eq!(output_of("drucken(7 / 2)"), "3.5\n");
    assert_eq!(output_of("drucken(6 / 3)"), "2.0\n");
}

#[test]
fn division_by_zero_is_error() {
    assert!(matches!(runtime_error("x = 1 / 0"), RuntimeError::DivisionByZero { line: 1 }));
    assert!(matches!(runtime_error("x = 1.5 / 0.0"), RuntimeError::DivisionByZero { .. }));
    assert!(matches!(runtime_error("n = 0\n\nx = 4 / n"), RuntimeError::DivisionByZero { line: 3 }));
}

#[test]
fn integer_overflow_is_error() {
    assert!(matches!(runtime_error("x = 9223372036854775807 + 1"),
                     RuntimeError::Overflow { .. }));
    assert!(matches!(runtime_error("x = 4611686018427387904 * 2"),
                     RuntimeError::Overflow { .. }));
}

#[test]
fn string_operations() {
    assert_eq!(output_of(r#"drucken("ab" + "cd")"#), "abcd\n");
    assert_eq!(output_of("drucken('x' + 'y')"), "xy\n");
    assert_eq!(output_of(r#"drucken("ab" * 3)"#), "ababab\n");
    assert_eq!(output_of(r#"drucken(2 * "-")"#), "--\n");
    assert_eq!(output_of(r#"drucken("a\tb\\n")"#), "a\tb\\n\n");
    assert!(matches!(runtime_error(r#"x = "a" + 1"#), RuntimeError::TypeMismatch { .. }));
    assert!(matches!(runtime_error(r#"x = "abc" - "c""#), RuntimeError::TypeMismatch { .. }));
}

#[test]
fn comparisons() {
    assert_eq!(output_of("drucken(1 < 2)"), "true\n");
    assert_eq!(output_of("drucken(2 <= 1)"), "false\n");
    assert_eq!(output_of("drucken(1 == 1.0)"), "true\n");
    assert_eq!(output_of(r#"drucken(1 == "1")"#), "false\n");
    assert_eq!(output_of(r#"drucken(1 != "1")"#), "true\n");
    assert_eq!(output_of(r#"drucken("a" == 'a')"#), "true\n");
    assert_eq!(output_of(r#"drucken("apple" < "banana")"#), "true\n");
    assert!(matches!(runtime_error(r#"x = "a" < 1"#), RuntimeError::TypeMismatch { .. }));
}

#[test]
fn typed_declarations_start_at_zero_values() {
    assert_eq!(output_of("num n\ndrucken(n)"), "0\n");
    assert_eq!(output_of("dec d\ndrucken(d)"), "0.0\n");
    assert_eq!(output_of("str s\ndrucken(len(s))"), "0\n");
    assert_eq!(output_of("chr c\ndrucken(len(c))"), "0\n");
    assert_eq!(output_of("bool b\ndrucken(b)"), "false\n");
}

#[test]
fn typed_assignment_enforces_type() {
    assert_eq!(output_of("dec d = 3\ndrucken(d)"), "3.0\n");
    assert_eq!(output_of("chr c = \"a\"\ndrucken(c)"), "a\n");
    assert_eq!(output_of("str s = 'z'\ndrucken(s + s)"), "zz\n");
    assert_success("bool b = 1 < 2");

    for src in ["num n = 2.5",
                "num n = \"1\"",
                "chr c = \"ab\"",
                "str s = 5",
                "bool b = 1",
                "dec d = true"]
    {
        assert!(matches!(runtime_error(src), RuntimeError::TypeMismatch { .. }),
                "expected a type mismatch for {src}");
    }
}

#[test]
fn declared_type_is_checked_on_every_write() {
    assert!(matches!(runtime_error("num n = 1\nn = \"x\""),
                     RuntimeError::TypeMismatch { line: 2, .. }));
    assert!(matches!(runtime_error("num n\nfor (n = 0; n < 3; n = n + 0.5) { }"),
                     RuntimeError::TypeMismatch { .. }));
    assert_eq!(output_of("dec d = 1.5\nd = 2\ndrucken(d)"), "2.0\n");
    assert_eq!(output_of("x = 1\nx = \"now text\"\ndrucken(x)"), "now text\n");
}

#[test]
fn unknown_variable_is_error() {
    let err = runtime_error("y = x + 1");
    assert!(matches!(err, RuntimeError::UnknownVariable { ref name, line: 1 } if name == "x"));
}

#[test]
fn errors_report_their_line() {
    assert_eq!(runtime_error("a = 1\nb = 2\nc = a / 0").line(), 3);
    assert_eq!(runtime_error("func f() { return g() }\n\nf()").line(), 1);
    assert_eq!(parse_error("x = 1\ny = (2").line(), 2);
    assert_eq!(parse_error("x = 1\n\nfunc 3").line(), 3);
}

#[test]
fn functions_cannot_see_caller_variables() {
    let err = runtime_error("x = 5\nfunc f() { return x }\nf()");
    assert!(matches!(err, RuntimeError::UnknownVariable { ref name, .. } if name == "x"));
}

#[test]
fn caller_environment_is_restored_after_call() {
    let src = "x = 1
               func f(a) { x = a * 10; return x }
               y = f(9)
               drucken(x)
               drucken(y)";
    assert_eq!(output_of(src), "1\n90\n");
}

#[test]
fn caller_environment_is_restored_after_failed_call() {
    let (mut context, _) = context_with_input("");
    assert!(run("x = 1\nfunc f(a) { y = a; return a / 0 }\nf(2)", &mut context).is_err());

    assert_eq!(context.env.get("x"), Some(&Value::Integer(1)));
    assert_eq!(context.env.get("y"), None);
    assert_eq!(context.env.get("a"), None);
}

#[test]
fn return_at_top_of_body_ends_the_function() {
    let src = "func f() { drucken(1)\nreturn 2\ndrucken(3) }\ndrucken(f())";
    assert_eq!(output_of(src), "1\n2\n");
}

#[test]
fn nested_return_only_yields_its_value() {
    let src = "func f(n) { if n < 0 { return 0 }\n n * 2 }\ndrucken(f(-1))";
    assert_eq!(output_of(src), "-2\n");

    let src = "func count() {
                   s = 0
                   for (i = 0; i < 3; i = i + 1) { return 99; s = s + 1 }
                   s
               }
               drucken(count())";
    assert_eq!(output_of(src), "3\n");
}

#[test]
fn function_without_return_yields_last_statement() {
    assert_eq!(output_of("func sq(x) { x * x }\ndrucken(sq(7))"), "49\n");
    assert_eq!(output_of("func sign(x) { if x < 0 { -1 } elf x > 0 { 1 } el { 0 } }\ndrucken(sign(-4))"),
               "-1\n");
}

#[test]
fn function_without_value_cannot_be_an_operand() {
    assert!(matches!(runtime_error("func f() { num n }\nx = f() + 1"),
                     RuntimeError::MissingValue { line: 2 }));
}

#[test]
fn recursion() {
    let src = "func fact(n) { if n <= 1 { 1 } el { n * fact(n - 1) } }\ndrucken(fact(10))";
    assert_eq!(output_of(src), "3628800\n");
}

#[test]
fn runaway_recursion_hits_the_call_depth_limit() {
    let handle = std::thread::Builder::new().stack_size(8 * 1024 * 1024)
                                            .spawn(|| {
                                                let src = "func down(n) { down(n + 1) }\ndown(0)";
                                                match runtime_error(src) {
                                                    RuntimeError::RecursionLimit { depth, .. } => depth,
                                                    other => panic!("unexpected error: {other}"),
                                                }
                                            })
                                            .unwrap();

    assert_eq!(handle.join().unwrap(), MAX_CALL_DEPTH);
}

#[test]
fn functions_are_registered_when_defined() {
    assert!(matches!(runtime_error("f(1)\nfunc f(x) { x }"),
                     RuntimeError::UnknownFunction { line: 1, .. }));
    assert_eq!(output_of("func f() { 1 }\nfunc f() { 2 }\ndrucken(f())"), "2\n");
}

#[test]
fn wrong_function_arity_is_error() {
    let err = runtime_error("func add(a, b) { a + b }\nadd(1)");
    assert!(matches!(err,
                     RuntimeError::ArgumentCountMismatch { expected: 2,
                                                           found: 1,
                                                           .. }));
    assert!(matches!(runtime_error("to_num(\"1\", \"2\")"),
                     RuntimeError::ArgumentCountMismatch { expected: 1,
                                                           found: 2,
                                                           .. }));
}

#[test]
fn redefinition_of_builtin_function_is_error() {
    assert!(matches!(runtime_error("func to_num(x) { x }"),
                     RuntimeError::BuiltinFunctionRedefinition { .. }));
}

#[test]
fn to_num_converts_text() {
    assert_eq!(output_of("drucken(to_num(\"42\") + 1)"), "43\n");
    assert_eq!(output_of("drucken(to_num(\" 4.5 \"))"), "4.5\n");
    assert_eq!(output_of("drucken(to_num(7))"), "7\n");
    assert_eq!(output_of("drucken(to_num('9') * 2)"), "18\n");
    assert!(matches!(runtime_error("to_num(\"abc\")"), RuntimeError::ConversionError { .. }));
    assert!(matches!(runtime_error("to_num(true)"), RuntimeError::TypeMismatch { .. }));
}

#[test]
fn len_counts_characters() {
    assert_eq!(output_of("drucken(len(\"hello\"))"), "5\n");
    assert_eq!(output_of("s = \"ab\" * 4\ndrucken(len(s))"), "8\n");
    assert_eq!(output_of("drucken(len('q'))"), "1\n");
    assert!(matches!(runtime_error("len(42)"), RuntimeError::TypeMismatch { .. }));
}

#[test]
fn for_loop_runs_until_condition_fails() {
    let (mut context, buffer) = context_with_input("");
    run("for (i = 0; i < 3; i = i + 1) { drucken(i) }", &mut context).unwrap();

    assert_eq!(buffer.contents(), "0\n1\n2\n");
    assert_eq!(context.env.get("i"), Some(&Value::Integer(3)));
}

#[test]
fn for_loop_with_false_condition_never_runs_body() {
    assert_eq!(output_of("for (i = 5; i < 3; i = i + 1) { drucken(i) }\ndrucken(i)"), "5\n");
}

#[test]
fn else_if_chain_runs_only_the_matching_branch() {
    let src = "if false { drucken(\"a\") } elf true { drucken(\"b\") } el { drucken(\"c\") }";
    assert_eq!(output_of(src), "b\n");

    let src = "x = 3
               if x == 1 { drucken(1) }
               elf x == 2 { drucken(2) }
               el if x == 3 { drucken(3) }
               else { drucken(4) }";
    assert_eq!(output_of(src), "3\n");

    assert_eq!(output_of("if 0 { drucken(1) } elf 0 { drucken(2) }"), "");
}

#[test]
fn truthiness_of_conditions() {
    assert_eq!(output_of("if \"\" { drucken(1) } el { drucken(2) }"), "2\n");
    assert_eq!(output_of("if 0.0 { drucken(1) } el { drucken(2) }"), "2\n");
    assert_eq!(output_of("chr c\nif c { drucken(1) } el { drucken(2) }"), "2\n");
    assert_eq!(output_of("if \"x\" { drucken(1) } el { drucken(2) }"), "1\n");
}

#[test]
fn input_with_prompt_and_type() {
    let out = output_with_input("x = eingabe(\"Zahl: \", num)\ndrucken(x * 2)", "21\n");
    assert_eq!(out, "Zahl: 42\n");

    let out = output_with_input("d = eingabe(dec)\ndrucken(d)", "2.5\r\n");
    assert_eq!(out, "2.5\n");

    let out = output_with_input("s = eingabe()\ndrucken(len(s))", "hello\n");
    assert_eq!(out, "5\n");

    let out = output_with_input("if eingabe(\"ok? \", bool) { drucken(\"yes\") }", "Y\n");
    assert_eq!(out, "ok? yes\n");

    let out = output_with_input("c = eingabe(chr)\ndrucken(c + c)", "q\n");
    assert_eq!(out, "qq\n");
}

#[test]
fn input_failures() {
    assert!(matches!(runtime_error_with_input("x = eingabe(num)", "abc\n"),
                     RuntimeError::ConversionError { .. }));
    assert!(matches!(runtime_error_with_input("x = eingabe(bool)", "maybe\n"),
                     RuntimeError::ConversionError { .. }));
    assert!(matches!(runtime_error_with_input("x = eingabe(chr)", "ab\n"),
                     RuntimeError::ConversionError { .. }));
    assert!(matches!(runtime_error_with_input("x = eingabe()", ""),
                     RuntimeError::InputUnavailable { line: 1 }));
}

#[test]
fn decimal_literal_keeps_its_value() {
    let tokens = tokenize("2.75 42 'a'").unwrap();
    let kinds: Vec<Token> = tokens.into_iter().map(|(tok, _)| tok).collect();

    assert_eq!(kinds,
               vec![Token::Decimal(2.75),
                    Token::Integer(42),
                    Token::Str("a".into()),
                    Token::EndOfInput]);
}

#[test]
fn keywords_only_match_whole_words() {
    let tokens = tokenize("iffy elfen format").unwrap();
    let kinds: Vec<Token> = tokens.into_iter().map(|(tok, _)| tok).collect();

    assert_eq!(kinds,
               vec![Token::Identifier("iffy".into()),
                    Token::Identifier("elfen".into()),
                    Token::Identifier("format".into()),
                    Token::EndOfInput]);
}

#[test]
fn tokens_carry_their_line() {
    let tokens = tokenize("x = 1\n\n// comment\ny = 2").unwrap();
    let lines: Vec<usize> = tokens.iter().map(|(_, line)| *line).collect();

    assert_eq!(lines, vec![1, 1, 1, 4, 4, 4, 4]);
}

#[test]
fn unexpected_character_is_lex_error() {
    assert_eq!(tokenize("x = 1\ny = 2 # 3"),
               Err(ParseError::UnexpectedCharacter { character: '#',
                                                     offset:    12,
                                                     line:      2, }));
}

#[test]
fn oversized_integer_literal_is_lex_error() {
    assert_eq!(tokenize("x = 1\ny = 99999999999999999999"),
               Err(ParseError::IntegerOutOfRange { literal: "99999999999999999999".into(),
                                                   line:    2, }));
    assert!(tokenize("y = 9223372036854775807").is_ok());
}

#[test]
fn syntax_errors() {
    assert!(matches!(parse_error("drucken(1"), ParseError::UnexpectedEndOfInput { .. }));
    assert!(matches!(parse_error("if x { drucken(1)"), ParseError::UnexpectedEndOfInput { .. }));
    assert!(matches!(parse_error("func (a) { a }"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_error("for (i = 0, i < 3; i = i + 1) { }"),
                     ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_error("x = num"), ParseError::TypeInExpression { .. }));
    assert!(matches!(parse_error("x = )"), ParseError::UnexpectedToken { line: 1, .. }));
}

#[test]
fn separators_between_statements_are_optional() {
    assert_eq!(output_of("a = 1; b = 2;; drucken(a + b);"), "3\n");
    assert_eq!(output_of("if true { ; drucken(1); drucken(2) ; }"), "1\n2\n");
}

#[test]
fn failed_program_reports_error() {
    assert_failure("x = 1\ny = x +");
    assert_failure("x = \"unterminated");
    assert!(get_result("num x = 2 + 2", false).is_ok());
    assert!(get_result("num x = 2.5", false).is_err());
}
