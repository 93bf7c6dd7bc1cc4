use std::{collections::VecDeque, io::BufRead};

/// Supplies source lines one at a time.
///
/// Lines are consumed strictly in order; the interpreter never asks for a line
/// before it has finished executing the previous one.
pub trait LineSource {
    /// Returns the next line without its line terminator, or `None` once the
    /// source is exhausted.
    fn next_line(&mut self) -> std::io::Result<Option<String>>;
}

impl LineSource for VecDeque<String> {
    fn next_line(&mut self) -> std::io::Result<Option<String>> {
        Ok(self.pop_front())
    }
}

/// Reads lines from any buffered reader, such as locked stdin.
///
/// # Example
/// ```
/// use octane::interpreter::runtime::source::{LineSource, ReaderSource};
///
/// let mut source = ReaderSource::new("set x to 1\r\nprint x\n".as_bytes());
///
/// assert_eq!(source.next_line().unwrap().as_deref(), Some("set x to 1"));
/// assert_eq!(source.next_line().unwrap().as_deref(), Some("print x"));
/// assert_eq!(source.next_line().unwrap(), None);
/// ```
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn next_line(&mut self) -> std::io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
