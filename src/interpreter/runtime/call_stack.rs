/// One active line: a statement being executed or a block header whose body is
/// running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// The 1-based line number.
    pub line: usize,
    /// The raw text of the line.
    pub text: String,
}

impl Frame {
    /// Creates a frame for a source line.
    #[must_use]
    pub fn new(line: usize, text: &str) -> Self {
        Self { line,
               text: text.to_string() }
    }
}

impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.text.trim())
    }
}

/// The stack of active frames of a session.
///
/// A frame is pushed just before a line starts executing and popped once it
/// completes. When a line fails its frame is left in place, so the stack then
/// holds exactly the failing line and the block headers around it.
///
/// # Example
/// ```
/// use octane::interpreter::runtime::call_stack::CallStack;
///
/// let mut stack = CallStack::new();
/// stack.push(3, "if [true]");
/// stack.push(4, "print x");
///
/// assert_eq!(stack.line_numbers(), vec![4, 3]);
///
/// stack.pop();
/// assert_eq!(stack.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallStack {
    frames: Vec<Frame>,
}

impl CallStack {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a frame for the given line.
    pub fn push(&mut self, line: usize, text: &str) {
        self.frames.push(Frame::new(line, text));
    }

    /// Pops the innermost frame.
    pub fn pop(&mut self) -> Option<Frame> {
        self.frames.pop()
    }

    /// The innermost frame.
    #[must_use]
    pub fn top(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Copies the frames, innermost first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Frame> {
        self.frames.iter().rev().cloned().collect()
    }

    /// The line numbers of the frames, innermost first.
    #[must_use]
    pub fn line_numbers(&self) -> Vec<usize> {
        self.frames.iter().rev().map(|frame| frame.line).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
