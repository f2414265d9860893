//! Forward-only reader over the fully buffered input.
//!
//! The cursor never moves backwards. Lookahead is limited to [`Cursor::peek`]
//! (one character) and [`Cursor::peek_equals`] (a fixed literal at the current
//! offset), which is why the whole input is decoded up front.

use crate::error::{EducateError, SourceLocation};
use crate::sink::Sink;

/// Why a parselet stopped before reaching its exit condition.
#[derive(Debug)]
pub(crate) enum Halt {
    /// Input ran out.
    Exhausted,
    /// Anything else; never recovered from.
    Failed(EducateError),
}

impl From<EducateError> for Halt {
    fn from(err: EducateError) -> Self {
        Halt::Failed(err)
    }
}

/// Result of a parse step.
pub(crate) type Step<T = ()> = Result<T, Halt>;

#[derive(Debug)]
pub(crate) struct Cursor {
    chars: Vec<char>,
    offset: usize,
    line: usize,
    column: usize,
}

impl Cursor {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Number of characters consumed so far.
    pub(crate) fn offset(&self) -> usize {
        self.offset
    }

    /// Location of the next character to be read.
    pub(crate) fn location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }

    pub(crate) fn peek(&self) -> Option<char> {
        self.chars.get(self.offset).copied()
    }

    /// Consumes the next character.
    pub(crate) fn read(&mut self) -> Step<char> {
        let c = self.peek().ok_or(Halt::Exhausted)?;
        self.offset += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Ok(c)
    }

    /// Returns true if `literal` starts at the current offset.
    ///
    /// The next call to [`Cursor::read`] would return the first character of `literal`.
    pub(crate) fn peek_equals(&self, literal: &str) -> bool {
        let mut rest = self.chars.get(self.offset..).unwrap_or_default().iter();
        literal.chars().all(|c| rest.next() == Some(&c))
    }

    /// Reads and writes `n` characters.
    pub(crate) fn advance_by(&mut self, n: usize, sink: &mut Sink) -> Step {
        for _ in 0..n {
            let c = self.read()?;
            sink.write(c);
        }
        Ok(())
    }

    /// Reads and writes while the next character satisfies `keep`.
    ///
    /// The first character failing `keep` stays unread. Running out of input
    /// before finding one is [`Halt::Exhausted`].
    pub(crate) fn advance_while(&mut self, sink: &mut Sink, keep: impl Fn(char) -> bool) -> Step {
        loop {
            let p = self.peek().ok_or(Halt::Exhausted)?;
            if !keep(p) {
                return Ok(());
            }
            let c = self.read()?;
            sink.write(c);
        }
    }

    /// Reads and writes until the next character satisfies `stop`, leaving it unread.
    pub(crate) fn advance_until(&mut self, sink: &mut Sink, stop: impl Fn(char) -> bool) -> Step {
        self.advance_while(sink, |c| !stop(c))
    }

    /// Reads and writes up to and including the next occurrence of `literal`.
    pub(crate) fn advance_through(&mut self, literal: &str, sink: &mut Sink) -> Step {
        while !self.peek_equals(literal) {
            let c = self.read()?;
            sink.write(c);
        }
        self.advance_by(literal.chars().count(), sink)
    }
}
