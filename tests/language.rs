use std::{
    fs,
    io::{self, Cursor, Write},
    path::Path,
};

use juicy::{
    ast::Position,
    error::{Diagnostic, Severity},
    interpreter::{evaluator::core::Interpreter, value::core::Value},
    run,
};
use walkdir::WalkDir;

/// Everything a run produced.
struct Outcome {
    output:      String,
    diagnostics: Vec<Diagnostic>,
    failed:      bool,
}

impl Outcome {
    fn messages(&self) -> Vec<&str> {
        self.diagnostics.iter().map(|d| d.message.as_str()).collect()
    }
}

fn run_with_input(src: &str, stdin: &str) -> Outcome {
    let mut input = Cursor::new(stdin.as_bytes());
    let mut output = Vec::new();
    let mut diagnostics = Vec::new();

    let failed = run(src, &mut input, &mut output, &mut diagnostics).is_err();

    Outcome { output: String::from_utf8(output).expect("output is UTF-8"),
              diagnostics,
              failed }
}

fn run_program(src: &str) -> Outcome {
    run_with_input(src, "")
}

/// Runs a program that must succeed without diagnostics and returns its
/// output.
fn assert_clean(src: &str) -> String {
    let outcome = run_program(src);
    assert!(!outcome.failed, "Script failed: {src}");
    assert!(outcome.diagnostics.is_empty(),
            "Unexpected diagnostics for {src}: {:?}",
            outcome.diagnostics);
    outcome.output
}

fn assert_syntax_error(src: &str) -> Outcome {
    let outcome = run_program(src);
    assert!(outcome.failed, "Script succeeded but was expected to fail: {src}");
    assert_eq!(outcome.output, "", "A syntax error must prevent all output");
    assert_eq!(outcome.diagnostics.len(), 1);
    assert_eq!(outcome.diagnostics[0].severity, Severity::Error);
    outcome
}

#[test]
fn example_programs_match_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "jul"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = fs::read_to_string(path.with_extension("out")).unwrap_or_else(|e| {
                                                                         panic!("Missing expected output for {path:?}: {e}")
                                                                     });
        let stdin = read_optional(&path.with_extension("in"));

        count += 1;
        let outcome = run_with_input(&source, &stdin);
        assert!(!outcome.failed, "Program {path:?} failed: {:?}", outcome.diagnostics);
        assert_eq!(outcome.output, expected, "Output of {path:?} differs");
    }

    assert!(count > 0, "No programs found in tests/programs");
}

fn read_optional(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_default()
}

#[test]
fn arithmetic_agrees_with_standard_arithmetic() {
    assert_eq!(assert_clean(r#"print(1 + 2 * 3, " ", 7 / 2, " ", 2 ^ 10, " ", 2 ^ -1);"#),
               "7 3.5 1024 0.5\n");
    assert_eq!(assert_clean(r#"print(-3 - 4, " ", 1.5 * 2, " ", 10 - 2.5, " ", 6 / 3);"#),
               "-7 3.0 7.5 2.0\n");
}

#[test]
fn operator_precedence_and_associativity() {
    assert_eq!(assert_clean("print(2 + 3 * 4 ^ 2);"), "50\n");
    assert_eq!(assert_clean("print(-2 ^ 2);"), "4\n");
    assert_eq!(assert_clean("print(2 ^ 3 ^ 2);"), "64\n");
    assert_eq!(assert_clean("print(10 - 4 - 3);"), "3\n");
    assert_eq!(assert_clean("print((1 + 2) * 3);"), "9\n");
}

#[test]
fn assignment_is_an_expression() {
    assert_eq!(assert_clean("a := b := 4; print(a + b);"), "8\n");
    assert_eq!(assert_clean("print(c := 3, c);"), "33\n");
    // Assignment binds tighter than comparison.
    assert_eq!(assert_clean(r#"print(d := 1 < 2, " ", d);"#), "True 1\n");
}

#[test]
fn float_text_form() {
    assert_eq!(assert_clean(r#"print(0.1 + 0.2, " ", 1.0e20, " ", 2.5e-7, " ", 100.0);"#),
               "0.30000000000000004 1e+20 2.5e-07 100.0\n");
}

#[test]
fn string_operations() {
    assert_eq!(assert_clean(r#"s := "hello"; print(s[0], s[4], len(s), s + "!");"#),
               "ho5hello!\n");
    assert_eq!(assert_clean(r#"s := "hello"; print(s[1:3], "|", s[:2], "|", s[3:], "|", s[-3:]);"#),
               "el|he|lo|llo\n");
    assert_eq!(assert_clean(r#"s := "hello"; print(s[2:99], "|", s[4:1], "|", s[:], "|");"#),
               "llo||hello|\n");
    assert_eq!(assert_clean(r#"print("abc"[1:][0]);"#), "b\n");
}

#[test]
fn index_out_of_range() {
    for src in [r#"s := "abc"; print(s[3]);"#, r#"s := "abc"; print(s[-1]);"#] {
        let outcome = run_program(src);
        assert_eq!(outcome.output, "\n");
        assert_eq!(outcome.messages(), vec!["Index is out of range"]);
    }
}

#[test]
fn indexing_type_errors() {
    let outcome = run_program(r#"print(5[0]); print("ab"[1.0]); print(5[0:1]); print("ab"["x":]);"#);
    assert_eq!(outcome.output, "\n\n\n\n");
    assert_eq!(outcome.messages(),
               vec!["Value is not indexable",
                    "Index is not 'int'",
                    "Value is not subscriptable",
                    "Index is not 'int'"]);
    assert_eq!(outcome.diagnostics[1].position, Position::new(1, 25));
}

#[test]
fn chained_comparisons() {
    assert_eq!(assert_clean(r#"print(1 < 2 < 3, " ", 3 < 2 < 5, " ", 1 < 2 > 0, " ", 0 < 0 <= 5);"#),
               "True False True False\n");
    assert_eq!(assert_clean(r#"print(2 = 2.0, " ", 1 <> 1, " ", 3 >= 3 >= 2);"#),
               "True False True\n");
}

#[test]
fn comparing_non_numbers_is_absent() {
    let outcome = run_program(r#"print(1 < "x");"#);
    assert_eq!(outcome.output, "\n");
    assert_eq!(outcome.messages(), vec!["Non-numerical expressions are not comparable"]);
    assert_eq!(outcome.diagnostics[0].position, Position::new(1, 9));
}

#[test]
fn failed_chain_step_skips_the_type_check() {
    assert_eq!(assert_clean(r#"print(3 < 2 < "x");"#), "False\n");
}

#[test]
fn every_chain_operand_is_evaluated() {
    assert_eq!(assert_clean("x := 0; print(5 < 1 < (x := 7), x);"), "False7\n");
}

#[test]
fn conversions_set_the_error_register() {
    let outcome = run_program(r#"x := to_int("abc"); print(err()); y := to_int("42"); print(err(), " ", y);"#);
    assert_eq!(outcome.output, "1\n0 42\n");
    assert!(outcome.diagnostics.is_empty());

    assert_eq!(assert_clean(r#"print(to_float("2.5") + 1, " ", to_int(3.9), " ", to_str(1.0) + "!");"#),
               "3.5 3 1.0!\n");
    assert_eq!(assert_clean(r#"print(to_int(" 7 ") * 2, " ", to_int(true), " ", to_float(false));"#),
               "14 1 0.0\n");
}

#[test]
fn integer_text_beyond_64_bits_fails_conversion() {
    let outcome = run_program(r#"x := to_int("99999999999999999999"); print(err()); y := to_float("99999999999999999999"); print(err());"#);
    assert!(!outcome.failed);
    assert_eq!(outcome.output, "1\n0\n");
    assert!(outcome.diagnostics.is_empty());
}

#[test]
fn absent_assignment_does_not_store() {
    let outcome = run_program(r#"x := to_int("nope"); print(x);"#);
    assert_eq!(outcome.messages(), vec!["Variable 'x' is not defined"]);
}

#[test]
fn absent_values_propagate_without_further_diagnostics() {
    let outcome = run_program("print(z + 1 * 2, -z, len(z), z < 3);");
    assert_eq!(outcome.output, "\n");
    assert_eq!(outcome.diagnostics.len(), 4);
    assert!(outcome.messages().iter().all(|m| *m == "Variable 'z' is not defined"));
    assert_eq!(outcome.diagnostics[0].position, Position::new(1, 7));
}

#[test]
fn operator_type_mismatches_are_warnings() {
    let outcome = run_program(r#"print("a" + 1); print("a" * 2); print(-"a"); print(true + 1);"#);
    assert_eq!(outcome.output, "\n\n\n\n");
    assert!(outcome.diagnostics.iter().all(|d| d.severity == Severity::Warning));
    assert_eq!(outcome.messages(),
               vec!["Operator '+' is not defined for 'str' and 'int'",
                    "Operator '*' is only defined for 'int' and 'float'",
                    "Operator '-' is only defined for 'int' and 'float'",
                    "Operator '+' is not defined for 'bool' and 'int'"]);
}

#[test]
fn len_only_accepts_strings() {
    let outcome = run_program("print(len(12));");
    assert_eq!(outcome.messages(), vec!["'len' only accepts string"]);
    assert_eq!(outcome.diagnostics[0].severity, Severity::Error);
}

#[test]
fn arithmetic_errors() {
    let outcome = run_program("print(1 / 0); print(1.5 / 0.0); print(9223372036854775807 + 1); print(0 ^ -1);");
    assert_eq!(outcome.output, "\n\n\n\n");
    assert_eq!(outcome.messages(),
               vec!["Division by zero", "Division by zero", "Integer overflow", "Division by zero"]);
}

#[test]
fn booleans_print_capitalised() {
    assert_eq!(assert_clean(r#"print(not "", not 0.0, bool 2.5);"#), "TrueTrueTrue\n");
    assert_eq!(assert_clean(r#"s := to_str(2 < 1); print(s, " ", len(s));"#), "False 5\n");
    assert_eq!(assert_clean("print(true, false);"), "TrueFalse\n");
}

#[test]
fn power_and_subtraction_warn_on_non_numbers() {
    let outcome = run_program(r#"print("a" ^ 2); print(true - 1);"#);
    assert_eq!(outcome.output, "\n\n");
    assert_eq!(outcome.messages(),
               vec!["Operator '^' is only defined for 'int' and 'float'",
                    "Operator '-' is only defined for 'int' and 'float'"]);
    assert!(outcome.diagnostics.iter().all(|d| d.severity == Severity::Warning));
}

#[test]
fn boolean_connectives_and_truthiness() {
    assert_eq!(assert_clean(r#"print(1 < 2 and 2 < 3, " ", not 0, " ", bool "", " ", true or false);"#),
               "True True False True\n");
    assert_eq!(assert_clean(r#"print(not 1 < 2, " ", bool "x", " ", not not 3);"#),
               "False True True\n");
}

#[test]
fn connectives_evaluate_both_sides() {
    assert_eq!(assert_clean("false and (x := 5) > 0; print(x);"), "5\n");
    assert_eq!(assert_clean("true or (y := 6) > 0; print(y);"), "6\n");
}

#[test]
fn if_else_runs_exactly_one_branch() {
    assert_eq!(assert_clean("if (false) { x := 1; } else { x := 2; } print(x);"), "2\n");
    assert_eq!(assert_clean("if (1 < 2) { print(\"yes\"); } else { print(\"no\"); }"),
               "yes\n");
    assert_eq!(assert_clean("if (\"\") { print(1); }"), "");
}

#[test]
fn else_if_chains() {
    let src = r#"
        n := 15;
        if (n < 10) { print("small"); }
        else if (n < 20) { print("medium"); }
        else { print("large"); }
    "#;
    assert_eq!(assert_clean(src), "medium\n");
}

#[test]
fn absent_condition_takes_the_else_branch() {
    let outcome = run_program("if (missing) { print(1); } else { print(2); }");
    assert_eq!(outcome.output, "2\n");
    assert_eq!(outcome.messages(), vec!["Variable 'missing' is not defined"]);
}

#[test]
fn while_loop_counts() {
    assert_eq!(assert_clean("i := 0; while (i < 3) { print(i); i := i + 1; }"),
               "0\n1\n2\n");
    assert_eq!(assert_clean("while (false) { print(1); } print(\"done\");"), "done\n");
}

#[test]
fn nested_loops() {
    let src = r#"
        i := 1;
        while (i <= 3) {
            line := "";
            j := 0;
            while (j < i) { line := line + "*"; j := j + 1; }
            print(line);
            i := i + 1;
        }
    "#;
    assert_eq!(assert_clean(src), "*\n**\n***\n");
}

#[test]
fn skipped_blocks_have_no_effects() {
    let outcome =
        run_program("if (false) { print(undefined); y := 1 / 0; while (true) { print(1); } } print(2);");
    assert_eq!(outcome.output, "2\n");
    assert!(outcome.diagnostics.is_empty());
}

#[test]
fn nested_comments_are_ignored() {
    assert_eq!(assert_clean("/* a /* b */ c */ print(1);"), "1\n");
}

#[test]
fn unclosed_comment_is_a_warning() {
    let outcome = run_program("print(1);\n/* print(2);");
    assert!(!outcome.failed);
    assert_eq!(outcome.output, "1\n");
    assert_eq!(outcome.diagnostics,
               vec![Diagnostic::warning("Comment is not closed before the end of input",
                                        Position::new(2, 1))]);
}

#[test]
fn illegal_characters_do_not_stop_the_program() {
    let outcome = run_program("print(1 # );");
    assert!(!outcome.failed);
    assert_eq!(outcome.output, "1\n");
    assert_eq!(outcome.messages(), vec!["Illegal character '#'"]);
}

#[test]
fn program_may_be_wrapped_in_braces() {
    assert_eq!(assert_clean("{ x := 1; print(x); }"), "1\n");
}

#[test]
fn print_without_arguments_writes_an_empty_line() {
    assert_eq!(assert_clean("print();"), "\n");
}

#[test]
fn input_reads_lines() {
    let src = r#"name := input("Name? "); print("Hi ", name); rest := input(); print(len(rest));"#;
    let outcome = run_with_input(src, "Ann\r\n");
    assert_eq!(outcome.output, "Name? Hi Ann\n0\n");
    assert!(outcome.diagnostics.is_empty());
}

#[test]
fn input_prompt_uses_the_text_form() {
    let outcome = run_with_input("print(to_int(input(2.0)) + 1);", "41\n");
    assert_eq!(outcome.output, "2.042\n");
}

#[test]
fn syntax_errors_abort_before_any_output() {
    assert_syntax_error(r#"print("before"); x := ;"#);
    assert_syntax_error("print(1);\nif (1) print(2);");
    assert_syntax_error("print(1)");
    assert_syntax_error("{ print(1); } print(2);");
}

#[test]
fn connectives_require_boolean_operands() {
    let outcome = assert_syntax_error("print(1 and 2 < 3);");
    assert_eq!(outcome.messages(),
               vec!["Syntax error: 'and' and 'or' only accept boolean expressions"]);
    assert_eq!(outcome.diagnostics[0].position, Position::new(1, 7));

    assert_eq!(assert_clean("print(bool 1 and (2 < 3));"), "True\n");
}

#[test]
fn unclosed_block_is_reported_at_the_end_of_input() {
    let outcome = assert_syntax_error("while (true) {\n  print(1);\n");
    assert_eq!(outcome.diagnostics[0].position, Position::new(3, 1));
}

#[test]
fn unterminated_string_aborts() {
    let outcome = assert_syntax_error("print(1);\nprint(\"abc);");
    assert_eq!(outcome.messages(), vec!["Unterminated string literal"]);
    assert_eq!(outcome.diagnostics[0].position, Position::new(2, 7));
}

#[test]
fn interpreter_exposes_its_state() {
    let mut input = io::empty();
    let mut output = Vec::new();
    let mut diagnostics: Vec<Diagnostic> = Vec::new();

    let mut interpreter = Interpreter::new(&mut input, &mut output, &mut diagnostics);
    interpreter.run(r#"n := 3; s := "x" + "y"; bad := to_float("?");"#)
               .expect("program runs");

    assert_eq!(interpreter.variable("n"), Some(&Value::Int(3)));
    assert_eq!(interpreter.variable("s"), Some(&Value::from("xy")));
    assert_eq!(interpreter.variable("bad"), None);
    assert_eq!(interpreter.error_register(), 1);
    assert_eq!(interpreter.block_depth(), 1);
}

/// A writer whose every write fails.
struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn output_failure_is_fatal_and_leaves_the_gate_balanced() {
    let mut input = io::empty();
    let mut output = BrokenPipe;
    let mut diagnostics: Vec<Diagnostic> = Vec::new();

    let mut interpreter = Interpreter::new(&mut input, &mut output, &mut diagnostics);
    let result = interpreter.run("i := 0; while (true) { if (i < 5) { print(i); } i := i + 1; }");

    let error = result.expect_err("writing must fail");
    assert!(error.to_string().starts_with("Error on line 1: Failed to write output"));
    assert_eq!(interpreter.block_depth(), 1);
    assert_eq!(interpreter.variable("i"), Some(&Value::Int(0)));
}
