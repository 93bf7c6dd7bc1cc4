use crate::{ast::Statement, error::SyntaxError};

/// Words with a fixed meaning in the language. None of them can be used as a
/// variable name.
pub const KEYWORDS: &[&str] = &["set",
                                "to",
                                "exit",
                                "if",
                                "elseIf",
                                "else",
                                "end",
                                "true",
                                "false",
                                "and",
                                "or",
                                "equals",
                                "notEquals",
                                "lessThan",
                                "lessThanEquals",
                                "greaterThan",
                                "greaterThanEquals",
                                "rootOf"];

/// Classifies a source line by its leading word.
///
/// Classification is purely lexical: the text after the keyword is returned
/// as-is and never parsed here. Leading and trailing whitespace is ignored, so
/// indentation has no meaning.
///
/// # Example
/// ```
/// use octane::{ast::Statement, interpreter::parser::statement::classify};
///
/// assert_eq!(classify("    if [x lessThan 3]"), Statement::If("[x lessThan 3]"));
/// assert_eq!(classify("print \"hi\""),
///            Statement::Command { name:     "print",
///                                 argument: "\"hi\"", });
/// assert_eq!(classify("  # note"), Statement::Comment);
/// ```
#[must_use]
pub fn classify(line: &str) -> Statement<'_> {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return Statement::Blank;
    }
    if trimmed.starts_with('#') {
        return Statement::Comment;
    }

    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (trimmed, ""),
    };

    match word {
        "set" => Statement::Set(rest),
        "exit" => Statement::Exit(rest),
        "if" => Statement::If(rest),
        "elseIf" => Statement::ElseIf(rest),
        "else" => Statement::Else(rest),
        "end" => Statement::End(rest),
        name => Statement::Command { name,
                                     argument: rest },
    }
}

/// Splits the text after `set` into the target name and the expression text.
///
/// Grammar: `assignment := name "to" expression`
///
/// # Errors
/// `MalformedAssignment` if the name or the `to` keyword is missing.
///
/// # Example
/// ```
/// use octane::interpreter::parser::statement::split_assignment;
///
/// assert_eq!(split_assignment("x to (1 + 1)").unwrap(), ("x", "(1 + 1)"));
/// assert!(split_assignment("x (1 + 1)").is_err());
/// ```
pub fn split_assignment(text: &str) -> Result<(&str, &str), SyntaxError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(malformed("missing variable name"));
    }

    let Some((name, rest)) = text.split_once(char::is_whitespace) else {
        return Err(malformed("missing 'to'"));
    };

    match rest.trim_start().strip_prefix("to") {
        Some(expression) if expression.is_empty() || expression.starts_with(char::is_whitespace) => {
            Ok((name, expression.trim()))
        },
        _ => Err(malformed("missing 'to'")),
    }
}

/// Returns `true` if `name` consists of one or more ASCII letters or
/// underscores.
#[must_use]
pub fn is_identifier(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphabetic() || c == '_')
}

fn malformed(details: &str) -> SyntaxError {
    SyntaxError::MalformedAssignment { details: details.to_string() }
}
