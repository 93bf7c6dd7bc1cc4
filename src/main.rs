use std::{
    fs,
    io::{self, BufRead, IsTerminal, Write},
    process,
    sync::Once,
};

use clap::Parser;
use octane::{
    error::ScriptError,
    interpreter::runtime::{
        commands::CommandTable,
        engine::{Interpreter, Outcome},
        source::{LineSource, ReaderSource},
    },
};

static TRACING_INIT: Once = Once::new();

/// octane is a small line-oriented scripting language with conditional blocks,
/// arrays and type tags.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells octane to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// The script, or its path with `--file`. Without it, octane reads lines
    /// from standard input one at a time.
    contents: Option<String>,
}

/// Writes a prompt to stderr before every line read from a terminal.
struct Prompt<R> {
    inner:  ReaderSource<R>,
    prompt: bool,
}

impl<R: BufRead> LineSource for Prompt<R> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        if self.prompt {
            let mut stderr = io::stderr();
            write!(stderr, "> ")?;
            stderr.flush()?;
        }
        self.inner.next_line()
    }
}

/// Installs a log subscriber when `OCTANE_LOG` is set, e.g.
/// `OCTANE_LOG=octane=debug`.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
                    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

                    if let Ok(directives) = std::env::var("OCTANE_LOG") {
                        tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)
                                                                        .with_target(true)
                                                                        .with_level(true))
                                                      .with(EnvFilter::new(directives))
                                                      .init();
                    }
                });
}

fn main() {
    init_tracing();

    let args = Args::parse();
    let commands = CommandTable::standard();
    let mut interpreter = Interpreter::new(&commands, io::stdout().lock());

    let result = match args.contents {
        Some(contents) => {
            let script = if args.file {
                fs::read_to_string(&contents).unwrap_or_else(|_| {
                    eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                    process::exit(1);
                })
            } else {
                contents
            };
            interpreter.run_script(&script)
        },
        None => {
            let stdin = io::stdin();
            let prompt = stdin.is_terminal();
            let mut source = Prompt { inner: ReaderSource::new(stdin.lock()),
                                      prompt };
            interpreter.run_interactive(&mut source)
        },
    };

    let flushed = interpreter.into_output().flush();
    process::exit(exit_code(&result, flushed));
}

/// Reports a script error or lost output on stderr and picks the exit code.
fn exit_code(result: &Result<Outcome, ScriptError>, flushed: io::Result<()>) -> i32 {
    let code = match result {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            eprintln!("{e}");
            e.exit_code()
        },
    };

    if let Err(e) = flushed {
        eprintln!("Failed to write output: {e}");
        return 1;
    }
    code
}
