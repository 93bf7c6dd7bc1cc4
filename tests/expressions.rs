use octane::{
    error::{Category, Error, ParseError, RuntimeError},
    interpreter::{evaluator::core::Environment, value::core::Value},
};
use pretty_assertions::assert_eq;

fn environment() -> Environment {
    let mut environment = Environment::new();
    environment.set("x", Value::Integer(2));
    environment.set("y", Value::Real(3.0));
    environment.set("greeting", Value::from("hello"));
    environment.set("list", Value::from(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]));
    environment
}

fn assert_true(text: &str) {
    match environment().evaluate_boolean(text) {
        Ok(result) => assert!(result, "{text} evaluated to false"),
        Err(e) => panic!("{text} failed: {e}"),
    }
}

fn assert_false(text: &str) {
    match environment().evaluate_boolean(text) {
        Ok(result) => assert!(!result, "{text} evaluated to true"),
        Err(e) => panic!("{text} failed: {e}"),
    }
}

fn assert_failure(text: &str, category: Category) {
    match environment().evaluate_boolean(text) {
        Ok(result) => panic!("{text} evaluated to {result} but was expected to fail"),
        Err(e) => assert_eq!(e.category(), category, "{text}: {e}"),
    }
}

#[test]
fn arithmetic_results_are_decimal() {
    let environment = environment();

    assert_eq!(environment.calculate("(1 + 1)").unwrap(), "2.0");
    assert_eq!(environment.calculate("(10 * 2 * ((1 + 1) rootOf 25) + 1)").unwrap(), "101.0");
    assert_eq!(environment.calculate("(1 + 2 * 3)").unwrap(), "9.0");
    assert_eq!(environment.calculate("(x ^ y)").unwrap(), "8.0");
    assert_eq!(environment.calculate("(-1.5 - 1)").unwrap(), "-2.5");
    assert_eq!(environment.calculate("(7)").unwrap(), "7.0");
}

#[test]
fn arithmetic_errors() {
    let environment = environment();

    for text in ["(1 + 1", "1 + 1)", "((1 + 1)", "(1 + 1))", "(1 $ 1)", "(1 plus 1)", "(1 1)",
                 "(greeting + 1)", "(z + 1)", "(1 / 0)", "()"]
    {
        let error = environment.calculate(text).unwrap_err();
        assert_eq!(error.category(), Category::Arithmetic, "{text}: {error}");
    }
}

#[test]
fn expressions() {
    let environment = environment();

    assert_eq!(environment.evaluate_expression("greeting . \", \" . 'world'").unwrap(),
               Value::from("hello, world"));
    assert_eq!(environment.evaluate_expression("\"x = \" . (x + 1)").unwrap(),
               Value::from("x = 3.0"));
    assert_eq!(environment.evaluate_expression("x . x").unwrap(), Value::Integer(22));
    assert_eq!(environment.evaluate_expression("y").unwrap(), Value::Real(3.0));
    assert_eq!(environment.evaluate_expression("\"list: \" . list").unwrap(),
               Value::from("list: <1, 2, 3>"));
    assert_eq!(environment.evaluate_expression("-4").unwrap(), Value::Integer(-4));
    assert_eq!(environment.evaluate_expression("\"\"").unwrap(), Value::from(""));
}

#[test]
fn oversized_numerals_stay_text() {
    let environment = environment();
    let nines = "9".repeat(400);

    assert_eq!(environment.evaluate_expression(&format!("\"{nines}\" . \"\"")).unwrap(),
               Value::String(nines.clone()));
    assert!(matches!(environment.evaluate_expression(&nines),
                     Err(Error::Parse(ParseError::NumberOutOfRange { .. }))));
    assert_failure(&format!("[{nines} greaterThan 1]"), Category::Expression);
}

#[test]
fn expression_errors() {
    let environment = environment();

    for text in ["\"hello", "'hello", "\"a\" . . \"b\"", "\"a\" .", ". \"a\"", "\"a\" \"b\"",
                 "nothing", "x y"]
    {
        let error = environment.evaluate_expression(text).unwrap_err();
        assert_eq!(error.category(), Category::Expression, "{text}: {error}");
    }
}

#[test]
fn array_reflexivity_and_order() {
    assert_true("[list equals list]");
    assert_true("[<1, 2, 3> equals <1, 2, 3>]");
    assert_true("[<1, 2, 3> lessThan <1, 2, 4>]");
    assert_false("[<1, 2, 4> lessThan <1, 2, 3>]");
    assert_true("[<\"b\"> greaterThan <\"a\", \"z\">]");
    assert_true("[<<1, 2>, <3>> equals <<1, 2>, <3>>]");
    assert_true("[<(1 + 1), x> equals <2, 2>]");
}

#[test]
fn truthiness() {
    for operand in ["1", "0", "-1", "2.5", "x", "y", "(0 * 1)", "[true]"] {
        assert_true(&format!("[{operand} and true]"));
        assert_true(&format!("[{operand} or true]"));
    }
    assert_false("[false and false]");
    assert_false("[false or false]");
    assert_false("[true and false]");
    assert_true("[greeting]");
    assert_true("[list]");
}

#[test]
fn type_mismatches() {
    for text in ["[1 equals \"hello\"]",
                 "[\"hello\" or 1]",
                 "[<1,2,3> or true]",
                 "[list equals 1]",
                 "[@Type:Array equals list]"]
    {
        let error = environment().evaluate_boolean(text).unwrap_err();
        assert!(matches!(error, Error::Runtime(RuntimeError::TypeMismatch { .. })), "{text}: {error}");
    }

    for text in ["[@Type:String lessThan @Type:String]",
                 "[@Type:Number greaterThanEquals @Type:Array]",
                 "[@Type:Number or @Type:Array]"]
    {
        assert_failure(text, Category::Boolean);
    }
}

#[test]
fn chained_comparisons() {
    assert_true("[\"hello\" equals \"hello\" equals true]");
    assert_true("[[true] and [true] and [true] and [true]]");
    assert_true("[1 lessThan 2 and 3]");
    assert_false("[x equals 2 and false]");
    assert_failure("[\"hello\" equals \"hello\" equals \"hello\"]", Category::Boolean);
    assert_failure("[1 equals 1 and <1>]", Category::Boolean);
}

#[test]
fn bracket_structure() {
    assert_true("[[x equals 2] and [[y equals 3] or [false]]]");
    assert_true("[[1 lessThan 2]and[2 lessThan 3]]");

    for text in ["[true", "true]", "[[true]", "[true]]", "[[true] [true]]", "[true false]",
                 "[1 is 1]", "[1 equals]", "[]", "[<1, 2]", "[<1,, 2> equals <>]"]
    {
        assert_failure(text, Category::Boolean);
    }
}

#[test]
fn embedded_errors_keep_their_category() {
    assert_failure("[(1 + ) equals 1]", Category::Arithmetic);
    assert_failure("[\"open equals 1]", Category::Expression);
    assert_failure("[unknown equals 1]", Category::Expression);
}

#[test]
fn nesting_limit() {
    let deep = format!("{}true{}", "[".repeat(200), "]".repeat(200));
    let error = environment().evaluate_boolean(&deep).unwrap_err();

    assert!(matches!(error, Error::Parse(ParseError::NestingTooDeep { .. })));
    assert_eq!(error.category(), Category::Boolean);

    let shallow = format!("{}true{}", "[".repeat(10), "]".repeat(10));
    assert_true(&shallow);
}
