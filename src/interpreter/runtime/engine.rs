use std::io::Write;

use tracing::{debug, trace};

use crate::{
    ast::Statement,
    error::{Error, ScriptError, SyntaxError},
    interpreter::{
        evaluator::core::{Environment, EvalResult},
        parser::statement::{KEYWORDS, classify, is_identifier, split_assignment},
        runtime::{
            call_stack::CallStack, commands::CommandTable, construct::Construct,
            source::LineSource,
        },
        value::core::Value,
    },
};

/// How a session ended without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every line was executed.
    Completed,
    /// An `exit` statement ended the session early.
    Exited,
}

impl Outcome {
    /// The process exit status for a successful session.
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        0
    }
}

/// What the session does after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Executes source lines one at a time.
///
/// An interpreter owns one session: its variables, call stack and the stack of
/// open `if` constructs. Lines are fed through [`Interpreter::execute_line`],
/// either from a fixed script or from an interactive [`LineSource`], and the
/// session is closed with [`Interpreter::finish`].
///
/// The first error ends the session; the interpreter is not meant to be used
/// after a line has failed.
///
/// # Example
/// ```
/// use octane::interpreter::runtime::{
///     commands::CommandTable,
///     engine::{Interpreter, Outcome},
/// };
///
/// let commands = CommandTable::standard();
/// let mut interpreter = Interpreter::new(&commands, Vec::<u8>::new());
///
/// let script = "set x to 3\nif [x greaterThan 2]\n  print \"big\"\nelse\n  print \"small\"\nend";
///
/// assert_eq!(interpreter.run_script(script).unwrap(), Outcome::Completed);
/// assert_eq!(interpreter.into_output(), b"big\n");
/// ```
#[derive(Debug)]
pub struct Interpreter<'a, W> {
    environment: Environment,
    commands:    &'a CommandTable,
    output:      W,
    call_stack:  CallStack,
    constructs:  Vec<Construct>,
    /// `if` constructs opened inside a clause that is being skipped.
    skip_depth:  usize,
}

impl<'a, W: Write> Interpreter<'a, W> {
    /// Creates a session that dispatches commands through `commands` and
    /// writes their output to `output`.
    pub fn new(commands: &'a CommandTable, output: W) -> Self {
        Self { environment: Environment::new(),
               commands,
               output,
               call_stack: CallStack::new(),
               constructs: Vec::new(),
               skip_depth: 0 }
    }

    /// Runs a whole script, one line per source line, numbering from 1.
    pub fn run_script(&mut self, source: &str) -> Result<Outcome, ScriptError> {
        self.run_lines(source.lines())
    }

    /// Runs a fixed sequence of lines, numbering from 1.
    pub fn run_lines<'l>(&mut self,
                         lines: impl IntoIterator<Item = &'l str>)
                         -> Result<Outcome, ScriptError> {
        for (index, line) in lines.into_iter().enumerate() {
            if self.execute_line(index + 1, line)? == Flow::Exit {
                return Ok(Outcome::Exited);
            }
        }
        self.finish()
    }

    /// Pulls lines from `source` until it is exhausted, an `exit` runs or a
    /// line fails.
    ///
    /// Each line is executed before the next one is requested.
    ///
    /// # Example
    /// ```
    /// use std::collections::VecDeque;
    ///
    /// use octane::interpreter::runtime::{commands::CommandTable, engine::Interpreter};
    ///
    /// let commands = CommandTable::standard();
    /// let mut interpreter = Interpreter::new(&commands, Vec::<u8>::new());
    /// let mut lines = VecDeque::from(vec!["set x to 1".to_string(), "if [x equals 1]".to_string()]);
    ///
    /// let error = interpreter.run_interactive(&mut lines).unwrap_err();
    /// assert_eq!(error.line_numbers(), vec![2]);
    /// ```
    pub fn run_interactive(&mut self,
                           source: &mut impl LineSource)
                           -> Result<Outcome, ScriptError> {
        let mut number = 0;

        while let Some(line) = self.read_line(source)? {
            number += 1;
            if self.execute_line(number, &line)? == Flow::Exit {
                return Ok(Outcome::Exited);
            }
        }

        self.finish()
    }

    fn read_line(&self, source: &mut impl LineSource) -> Result<Option<String>, ScriptError> {
        source.next_line().map_err(|e| {
                              self.fail(Error::Input { details: e.to_string() })
                          })
    }

    /// Executes one source line.
    ///
    /// # Parameters
    /// - `number`: The 1-based line number, used in the call stack.
    /// - `text`: The raw line.
    ///
    /// # Returns
    /// Whether the session should go on.
    pub fn execute_line(&mut self, number: usize, text: &str) -> Result<Flow, ScriptError> {
        let result = if self.is_skipping() {
            self.skip_line(number, text).map(|()| Flow::Continue)
        } else {
            self.run_line(number, text)
        };

        result.map_err(|error| self.fail(error))
    }

    /// Ends the session, checking that every construct was closed.
    pub fn finish(&mut self) -> Result<Outcome, ScriptError> {
        let open = self.depth();
        if open > 0 {
            return Err(self.fail(SyntaxError::MissingEnd { open }.into()));
        }
        Ok(Outcome::Completed)
    }

    /// The number of `if` constructs currently open, including those inside
    /// skipped clauses.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.constructs.len() + self.skip_depth
    }

    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Looks up a variable of the session.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.environment.get(name)
    }

    #[must_use]
    pub const fn call_stack(&self) -> &CallStack {
        &self.call_stack
    }

    /// Consumes the session and returns the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn fail(&self, error: Error) -> ScriptError {
        debug!(lines = ?self.call_stack.line_numbers(), %error, "session failed");
        ScriptError::new(error, self.call_stack.snapshot())
    }

    fn is_skipping(&self) -> bool {
        self.skip_depth > 0 || self.constructs.last().is_some_and(|c| !c.executing)
    }

    /// Handles a line inside a clause that is not running.
    ///
    /// Only block keywords are looked at, to keep track of nesting. Nothing
    /// else on the line is parsed.
    fn skip_line(&mut self, number: usize, text: &str) -> EvalResult<()> {
        match classify(text) {
            Statement::If(_) => self.skip_depth += 1,
            Statement::End(_) if self.skip_depth > 0 => self.skip_depth -= 1,
            Statement::ElseIf(condition) if self.skip_depth == 0 => {
                return self.next_clause(number, text, "elseIf", Some(condition));
            },
            Statement::Else(argument) if self.skip_depth == 0 => {
                return self.else_clause(number, text, argument);
            },
            Statement::End(argument) => return self.close_construct(number, text, argument),
            _ => trace!(line = number, "skipped"),
        }
        Ok(())
    }

    fn run_line(&mut self, number: usize, text: &str) -> EvalResult<Flow> {
        trace!(line = number, text, "executing");

        match classify(text) {
            Statement::Blank | Statement::Comment => {},
            Statement::Set(assignment) => {
                self.framed(number, text, |this| this.assign(assignment))?;
            },
            Statement::Command { name, argument } => {
                self.framed(number, text, |this| this.invoke(name, argument))?;
            },
            Statement::Exit(argument) => {
                self.call_stack.push(number, text);
                no_argument("exit", argument)?;
                self.call_stack.pop();
                debug!(line = number, "exit");
                return Ok(Flow::Exit);
            },
            Statement::If(condition) => {
                self.call_stack.push(number, text);
                let guard = self.environment.evaluate_boolean(condition)?;
                debug!(line = number, guard, "if");
                self.constructs.push(Construct::open(guard));
            },
            Statement::ElseIf(condition) => self.next_clause(number, text, "elseIf", Some(condition))?,
            Statement::Else(argument) => self.else_clause(number, text, argument)?,
            Statement::End(argument) => self.close_construct(number, text, argument)?,
        }

        Ok(Flow::Continue)
    }

    /// Runs a simple statement inside its own frame.
    ///
    /// The frame is left on the stack if the statement fails.
    fn framed(&mut self,
              number: usize,
              text: &str,
              run: impl FnOnce(&mut Self) -> EvalResult<()>)
              -> EvalResult<()> {
        self.call_stack.push(number, text);
        run(self)?;
        self.call_stack.pop();
        Ok(())
    }

    fn else_clause(&mut self, number: usize, text: &str, argument: &str) -> EvalResult<()> {
        if let Err(error) = no_argument("else", argument) {
            self.call_stack.push(number, text);
            return Err(error.into());
        }
        self.next_clause(number, text, "else", None)
    }

    /// Moves the innermost construct to its next clause. The header frame of
    /// the previous clause is replaced by this one.
    fn next_clause(&mut self,
                   number: usize,
                   text: &str,
                   keyword: &str,
                   condition: Option<&str>)
                   -> EvalResult<()> {
        let Some(construct) = self.constructs.last_mut() else {
            self.call_stack.push(number, text);
            return Err(SyntaxError::DanglingKeyword { keyword: keyword.to_string() }.into());
        };

        if construct.seen_else {
            self.call_stack.push(number, text);
            return Err(SyntaxError::ClauseAfterElse { keyword: keyword.to_string() }.into());
        }

        self.call_stack.pop();
        self.call_stack.push(number, text);

        let environment = &self.environment;
        construct.switch(condition.is_none(), || match condition {
                      Some(condition) => environment.evaluate_boolean(condition),
                      None => Ok(true),
                  })?;

        debug!(line = number, keyword, executing = construct.executing, "clause");
        Ok(())
    }

    fn close_construct(&mut self, number: usize, text: &str, argument: &str) -> EvalResult<()> {
        if self.constructs.is_empty() {
            self.call_stack.push(number, text);
            return Err(SyntaxError::DanglingKeyword { keyword: "end".to_string() }.into());
        }
        if let Err(error) = no_argument("end", argument) {
            self.call_stack.push(number, text);
            return Err(error.into());
        }

        self.constructs.pop();
        self.call_stack.pop();
        debug!(line = number, "end");
        Ok(())
    }

    /// `set NAME to EXPR`
    fn assign(&mut self, assignment: &str) -> EvalResult<()> {
        let (name, expression) = split_assignment(assignment)?;

        if !is_identifier(name) {
            return Err(SyntaxError::InvalidIdentifier { name: name.to_string() }.into());
        }
        if KEYWORDS.contains(&name) || self.commands.contains(name) {
            return Err(SyntaxError::IdentifierReserved { name: name.to_string() }.into());
        }

        let value = self.environment.evaluate_expression(expression)?;
        trace!(name, %value, "assigned");
        self.environment.set(name, value);
        Ok(())
    }

    /// `COMMAND EXPR`
    fn invoke(&mut self, name: &str, argument: &str) -> EvalResult<()> {
        if !self.commands.contains(name) {
            return Err(SyntaxError::UnknownCommand { name: name.to_string() }.into());
        }

        let value = self.environment.evaluate_expression(argument)?;
        self.commands.invoke(name, &value, &mut self.output)
    }
}

fn no_argument(keyword: &str, argument: &str) -> Result<(), SyntaxError> {
    if argument.is_empty() {
        Ok(())
    } else {
        Err(SyntaxError::UnexpectedArgument { keyword:  keyword.to_string(),
                                              argument: argument.to_string(), })
    }
}
