use std::{collections::HashMap, io::Write};

use crate::{
    error::{Error, RuntimeError, SyntaxError},
    interpreter::value::core::Value,
};

/// A reserved command: takes the evaluated argument and the output sink.
pub type Command = Box<dyn Fn(&Value, &mut dyn Write) -> std::io::Result<()>>;

/// Maps reserved command names to their implementations.
///
/// Names are matched exactly. Every name in the table is also reserved, so it
/// cannot be used as a variable.
///
/// # Example
/// ```
/// use octane::interpreter::{runtime::commands::CommandTable, value::core::Value};
///
/// let commands = CommandTable::standard();
/// let mut output: Vec<u8> = Vec::new();
///
/// commands.invoke("print", &Value::Integer(4), &mut output).unwrap();
/// commands.invoke("printInline", &Value::from("ok"), &mut output).unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(), "4\nok");
/// assert!(!commands.contains("echo"));
/// ```
#[derive(Default)]
pub struct CommandTable {
    commands: HashMap<String, Command>,
}

impl CommandTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in commands: `print`, which writes the value and a newline,
    /// and `printInline`, which writes the value alone.
    #[must_use]
    pub fn standard() -> Self {
        let mut table = Self::new();
        table.register("print", |value, output| writeln!(output, "{value}"));
        table.register("printInline", |value, output| {
                 write!(output, "{value}")?;
                 output.flush()
             });
        table
    }

    /// Adds or replaces a command.
    pub fn register<F>(&mut self, name: impl Into<String>, command: F)
        where F: Fn(&Value, &mut dyn Write) -> std::io::Result<()> + 'static {
        self.commands.insert(name.into(), Box::new(command));
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Command> {
        self.commands.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Runs a command against a sink.
    ///
    /// # Errors
    /// - `UnknownCommand` if no command has this name. The sink is untouched.
    /// - `CommandFailed` if the command could not write its output.
    pub fn invoke(&self, name: &str, argument: &Value, output: &mut dyn Write) -> Result<(), Error> {
        let Some(command) = self.get(name) else {
            return Err(SyntaxError::UnknownCommand { name: name.to_string() }.into());
        };

        command(argument, output).map_err(|e| RuntimeError::CommandFailed { name:    name.to_string(),
                                                                            details: e.to_string(), })?;
        Ok(())
    }
}

impl std::fmt::Debug for CommandTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names = self.commands.keys().collect::<Vec<_>>();
        names.sort();
        f.debug_struct("CommandTable").field("commands", &names).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn custom_commands() {
        let mut commands = CommandTable::new();
        commands.register("shout", |value, output| {
                    writeln!(output, "{}!", value.to_string().to_uppercase())
                });

        let mut output: Vec<u8> = Vec::new();
        commands.invoke("shout", &Value::from("hey"), &mut output).unwrap();
        assert_eq!(commands.invoke("print", &Value::from("hey"), &mut output),
                   Err(Error::from(SyntaxError::UnknownCommand { name: "print".to_string() })));
        assert_eq!(output, b"HEY!\n");
    }

    #[test]
    fn sink_failures_are_reported() {
        let commands = CommandTable::standard();

        let error = commands.invoke("print", &Value::Integer(1), &mut BrokenSink).unwrap_err();
        assert!(matches!(error,
                         Error::Runtime(RuntimeError::CommandFailed { ref name, .. }) if name == "print"));
    }

    #[test]
    fn debug_lists_names() {
        assert_eq!(format!("{:?}", CommandTable::standard()),
                   r#"CommandTable { commands: ["print", "printInline"] }"#);
    }
}
