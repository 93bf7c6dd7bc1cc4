/// State of one `if ... [elseIf ...]* [else] end` group.
///
/// At most one clause of a construct runs: once `taken` is set, every later
/// clause is skipped regardless of its guard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Construct {
    /// Some clause's guard has already held.
    pub taken:     bool,
    /// The current clause is running.
    pub executing: bool,
    /// The `else` clause has been reached.
    pub seen_else: bool,
}

impl Construct {
    /// Opens a construct whose `if` guard evaluated to `guard`.
    #[must_use]
    pub const fn open(guard: bool) -> Self {
        Self { taken:     guard,
               executing: guard,
               seen_else: false, }
    }

    /// Moves to the next clause.
    ///
    /// `guard` is evaluated only if no earlier clause ran, so a clause after a
    /// taken one never has its condition looked at.
    pub fn switch<E>(&mut self,
                     is_else: bool,
                     guard: impl FnOnce() -> Result<bool, E>)
                     -> Result<(), E> {
        self.seen_else = is_else;

        if self.taken {
            self.executing = false;
        } else {
            self.executing = guard()?;
            self.taken = self.executing;
        }

        Ok(())
    }
}
