use std::{collections::VecDeque, fs, io::Write};

use octane::{
    error::{Category, ScriptError},
    interpreter::{
        runtime::{
            commands::CommandTable,
            engine::{Interpreter, Outcome},
        },
        value::core::Value,
    },
    run_script,
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_dsl_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = run_script(&code, Vec::<u8>::new()) {
                panic!("DSL example {} in {:?} failed:\n{}\nError: {}", i + 1, path, code, e);
            }
        }
    }

    assert!(count > 0, "No DSL examples found in book/src");
}

#[test]
fn example_script_runs() {
    let script = fs::read_to_string("tests/example.oct").expect("example script is readable");
    let output = assert_success(&script);

    assert_eq!(output,
               "Hello, octane!\n\
                area: 78.5\n\
                9 is fizz\n\
                <1, 2, 3> is sorted before <1, 2, 4>\n\
                found a @Type:Array\n");
}

fn extract_dsl_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```octane") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

/// Runs a script in batch mode and in interactive mode, checks that both agree,
/// and returns the batch result with its output.
fn run_both(src: &str) -> (Result<Outcome, ScriptError>, String) {
    let commands = CommandTable::standard();

    let mut batch = Interpreter::new(&commands, Vec::<u8>::new());
    let batch_result = batch.run_script(src);
    let batch_output = String::from_utf8(batch.into_output()).unwrap();

    let mut interactive = Interpreter::new(&commands, Vec::<u8>::new());
    let mut lines = src.lines().map(ToString::to_string).collect::<VecDeque<_>>();
    let interactive_result = interactive.run_interactive(&mut lines);
    let interactive_output = String::from_utf8(interactive.into_output()).unwrap();

    assert_eq!(batch_result, interactive_result);
    assert_eq!(batch_output, interactive_output);

    (batch_result, batch_output)
}

fn assert_success(src: &str) -> String {
    match run_both(src) {
        (Ok(_), output) => output,
        (Err(e), _) => panic!("Script failed: {e}"),
    }
}

fn assert_failure(src: &str) -> ScriptError {
    match run_both(src) {
        (Err(e), _) => e,
        (Ok(_), _) => panic!("Script succeeded but was expected to fail"),
    }
}

fn final_value(src: &str, name: &str) -> Option<Value> {
    let commands = CommandTable::standard();
    let mut interpreter = Interpreter::new(&commands, Vec::<u8>::new());
    interpreter.run_script(src).unwrap_or_else(|e| panic!("Script failed: {e}"));
    interpreter.variable(name).cloned()
}

#[test]
fn commands_and_assignment() {
    assert_eq!(assert_success("print 'test'"), "test\n");
    assert_eq!(assert_success("printInline 'a'\nprintInline 'b'\nprint ''"), "ab\n");
    assert_eq!(assert_success("set x to 'value'\nprint x"), "value\n");
    assert_eq!(assert_success("set x to 1\nset x to x . 0\nprint x"), "10\n");
    assert_eq!(final_value("set x to (2 * (1 + 1))", "x"), Some(Value::Integer(4)));
    assert_eq!(final_value("set x to ((1 / (2 + 2)) * 5)", "x"), Some(Value::Real(1.25)));
    assert_eq!(final_value("set x to", "x"), Some(Value::from("")));
}

#[test]
fn comments_and_blanks_are_ignored() {
    assert_eq!(assert_success("\n    \n# This is a comment\n\t# indented"), "");
}

#[test]
fn invalid_commands_fail() {
    for src in ["invalid", "exitProgram", "setVal", "Print 'x'"] {
        assert_eq!(assert_failure(src).category(), Category::Dispatch, "{src}");
    }
}

#[test]
fn exit_is_graceful() {
    assert_eq!(run_both("exit").0, Ok(Outcome::Exited));
    assert_eq!(run_both("print 1\nexit\nprint 2"), (Ok(Outcome::Exited), "1\n".to_string()));
    assert_eq!(run_both("if [true]\n    exit\n").0, Ok(Outcome::Exited));
}

#[test]
fn if_only() {
    let src = "\nset x to \"Unchanged\"\nif [true]\n    set x to \"Changed\"\nend\nprint x";
    assert_eq!(assert_success(src), "Changed\n");

    let src = "\nset x to \"Unchanged\"\nif [false]\n    set x to \"Changed\"\nend\nprint x";
    assert_eq!(assert_success(src), "Unchanged\n");
}

#[test]
fn if_and_else() {
    let src = r#"
set x to "Unchanged"
if [false]
    set x to "Changed by if"
else
    set x to "Changed by else"
end
print x"#;
    assert_eq!(assert_success(src), "Changed by else\n");

    let src = r#"
set x to "Unchanged"
if [true]
    set x to "Changed by if"
else
    set x to "Changed by else"
end
print x"#;
    assert_eq!(assert_success(src), "Changed by if\n");
}

#[test]
fn if_and_else_if() {
    let src = r#"
set x to "Unchanged"
if [false]
    set x to "Changed by if"
elseIf [true]
    set x to "Changed by elseIf"
end
print x"#;
    assert_eq!(assert_success(src), "Changed by elseIf\n");

    let src = r#"
set x to "Unchanged"
if [true]
    set x to "Changed by if"
elseIf [true]
    set x to "Changed by elseIf"
end
print x"#;
    assert_eq!(assert_success(src), "Changed by if\n");
}

#[test]
fn if_else_if_and_else() {
    let src = r#"
set x to "A"
if [false]
    set x to "B"
elseIf [true]
    set x to "C"
else
    set x to "D"
end"#;
    assert_eq!(final_value(src, "x"), Some(Value::from("C")));

    let src = r#"
set x to "A"
if [false]
    set x to "B"
elseIf [false]
    set x to "C"
elseIf [x equals "A"]
    set x to "E"
else
    set x to "D"
end"#;
    assert_eq!(final_value(src, "x"), Some(Value::from("E")));
}

#[test]
fn nested_conditionals() {
    let src = r#"
set x to 5
if [x greaterThan 1]
    if [x lessThan 3]
        print "small"
    elseIf [x lessThan 10]
        if [x equals 5]
            print "five"
        end
    else
        print "large"
    end
else
    if [true]
        print "never"
    end
end"#;
    assert_eq!(assert_success(src), "five\n");
}

#[test]
fn indentation_is_not_significant() {
    let src = "if [true]\nprint 1\n        if [false]\n  print 2\n            else\nprint 3\n end\n    end";
    assert_eq!(assert_success(src), "1\n3\n");
}

#[test]
fn bad_code_that_does_not_execute_will_not_fail() {
    let src = r#"
set x to "Unchanged"
if [false]
    set x to "Changed by if"
elseif [false]
    invalid
    print "unterminated
    set 9 to [1 equals
else
    set x to "All bad code has been skipped"
end
print x"#;
    assert_eq!(assert_success(src), "All bad code has been skipped\n");
}

#[test]
fn missing_end_fails() {
    let src = r#"
if [true]
    print "This will cause error"
if [true]
    print "This code should not be reached"
end"#;
    let error = assert_failure(src);

    assert_eq!(error.category(), Category::Syntax);
    assert_eq!(error.line_numbers(), vec![2]);
}

#[test]
fn extra_end_fails() {
    let src = r#"
if [true]
    print "first if will execute"
end
if [true]
    print "second if will execute"
end
end
print "Error will occur before this is reached.""#;
    let (result, output) = run_both(src);
    let error = result.unwrap_err();

    assert_eq!(output, "first if will execute\nsecond if will execute\n");
    assert_eq!(error.category(), Category::Syntax);
    assert_eq!(error.line_numbers(), vec![8]);
}

#[test]
fn dangling_else_and_else_if_fail() {
    let src = "\nelse\n    print \"This should fail\"\nend";
    assert_eq!(assert_failure(src).line_numbers(), vec![2]);

    let src = "\nelseIf [true]\n    print \"This should fail\"\nend";
    assert_eq!(assert_failure(src).line_numbers(), vec![2]);
}

#[test]
fn nested_extra_end_fails() {
    let src = r#"
if [true]
    else
        print "This should fail"
    end
end
print "Error will occur before this is reached.""#;
    let error = assert_failure(src);

    assert_eq!(error.category(), Category::Syntax);
    assert_eq!(error.line_numbers(), vec![6]);
}

#[test]
fn stack_trace_for_single_line() {
    assert_eq!(assert_failure("print \"err").line_numbers(), vec![1]);
}

#[test]
fn stack_trace_for_multi_line() {
    let src = r#"
# This is a comment
print "test"
print "err
print "This will not be executed""#;
    let (result, output) = run_both(src);

    assert_eq!(output, "test\n");
    assert_eq!(result.unwrap_err().line_numbers(), vec![4]);
}

#[test]
fn stack_trace_for_nesting() {
    let src = r#"
print "Outside of if"
if [true]
    print "In first if"
    if [false]
        print "This wont print"
    else
        if [false]
            print "This won't print"
        elseIf [true]
            print "err
        else
            print "This wont print"
        end
    end
end
print "This won't print""#;
    let error = assert_failure(src);

    assert_eq!(error.line_numbers(), vec![11, 10, 7, 3]);
    assert_eq!(error.category(), Category::Expression);
    assert_eq!(error.to_string(),
               "Expression Error: String opened with \" is never closed.\n  \
                at line 11: print \"err\n  \
                at line 10: elseIf [true]\n  \
                at line 7: else\n  \
                at line 3: if [true]");
}

#[test]
fn stack_trace_after_completion_of_if() {
    let src = r#"
print "Outside of if"
if [true]
    print "Inside if"
end
if [true]
    print "err
end"#;
    assert_eq!(assert_failure(src).line_numbers(), vec![7, 6]);
}

#[test]
fn errors_are_fatal() {
    let (result, output) = run_both("print 1\nprint (1 / 0)\nprint 2");

    assert_eq!(output, "1\n");
    assert_eq!(result.unwrap_err().category(), Category::Arithmetic);
}

#[test]
fn error_categories() {
    for (src, category) in [("print \"a\" \"b\"", Category::Expression),
                            ("print nope", Category::Expression),
                            ("print (1 +)", Category::Arithmetic),
                            ("print (1 2)", Category::Arithmetic),
                            ("print (x + 1)", Category::Arithmetic),
                            ("print [1 equals \"a\"]", Category::Boolean),
                            ("if [1 is 1]\nend", Category::Boolean),
                            ("if [[true]\nend", Category::Boolean),
                            ("print <1, 2", Category::Boolean),
                            ("print @Type:Float", Category::Boolean),
                            ("set 2x to 1", Category::Syntax),
                            ("set and to 1", Category::Syntax),
                            ("launch 1", Category::Dispatch)]
    {
        assert_eq!(assert_failure(src).category(), category, "{src}");
    }
}

#[test]
fn oversized_numerals() {
    let nines = "9".repeat(400);

    assert_eq!(assert_success(&format!("print \"{nines}\" . \"\"")), format!("{nines}\n"));
    assert_eq!(final_value(&format!("set x to \"{nines}\" . \"\""), "x"),
               Some(Value::String(nines.clone())));

    for src in [format!("print {nines}"),
                format!("set x to {nines}\nif [x greaterThan 1]\nend")]
    {
        let error = assert_failure(&src);
        assert_eq!(error.category(), Category::Expression, "{error}");
        assert!(error.to_string().contains("too large"), "{error}");
    }

    assert_eq!(assert_failure(&format!("print ({nines} + 1)")).category(), Category::Arithmetic);
}

#[test]
fn exit_codes() {
    assert_eq!(run_both("print 1").0.map(Outcome::exit_code), Ok(0));
    assert_eq!(run_both("exit").0.map(Outcome::exit_code), Ok(0));
    assert_eq!(assert_failure("end").exit_code(), 1);
}

#[test]
fn custom_commands_are_reserved() {
    let mut commands = CommandTable::standard();
    commands.register("shout", |value, output| writeln!(output, "{value}!"));

    let mut interpreter = Interpreter::new(&commands, Vec::<u8>::new());
    assert_eq!(interpreter.run_script("shout \"hey\""), Ok(Outcome::Completed));
    assert_eq!(interpreter.into_output(), b"hey!\n");

    let mut interpreter = Interpreter::new(&commands, Vec::<u8>::new());
    let error = interpreter.run_script("set shout to 1").unwrap_err();
    assert_eq!(error.category(), Category::Syntax);
}
