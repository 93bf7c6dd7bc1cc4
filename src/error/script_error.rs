use crate::{
    error::{Category, Error},
    interpreter::runtime::call_stack::Frame,
};

/// A fatal error annotated with the call stack at the moment of failure.
///
/// The trace is ordered innermost first: the failing line, then every block
/// header the line was executing inside.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptError {
    /// The underlying error.
    pub error: Error,
    /// The active frames when the error was raised, innermost first.
    pub trace: Vec<Frame>,
}

impl ScriptError {
    /// Creates a diagnostic from an error and a stack snapshot.
    #[must_use]
    pub const fn new(error: Error, trace: Vec<Frame>) -> Self {
        Self { error, trace }
    }

    /// Returns the category of the underlying error.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.error.category()
    }

    /// Returns the 1-based line numbers of the trace, innermost first.
    ///
    /// # Example
    /// ```
    /// use octane::{
    ///     error::{Error, ScriptError, SyntaxError},
    ///     interpreter::runtime::call_stack::Frame,
    /// };
    ///
    /// let error = ScriptError::new(Error::from(SyntaxError::MissingEnd { open: 1 }),
    ///                              vec![Frame::new(4, "if [true]")]);
    /// assert_eq!(error.line_numbers(), vec![4]);
    /// ```
    #[must_use]
    pub fn line_numbers(&self) -> Vec<usize> {
        self.trace.iter().map(|frame| frame.line).collect()
    }

    /// The process exit status for a failed session.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        1
    }
}

impl std::fmt::Display for ScriptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.category(), self.error)?;
        for frame in &self.trace {
            write!(f, "\n  at {frame}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ScriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
