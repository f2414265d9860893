//! The parse context and the top-level dispatch loop.
//!
//! Parselets come in two flavours:
//!
//! - `at_*` functions are entered with the trigger character still unread. They
//!   read it themselves, check it, and decide what it starts.
//! - `in_*` functions are entered with the opening delimiter already written.
//!   They consume the body of their construct and return with the next unread
//!   character being the one right after the construct's terminator.
//!
//! Spans dispatch recursively through [`Context::step`], so a construct nested
//! in another one is handled by its own stack frame and each frame only looks
//! for its own terminator.

mod html;
mod literal;
mod quotes;

use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

use crate::cursor::{Cursor, Halt, Step};
use crate::error::{Construct, Diagnostics, EducateError, SourceLocation, Warning};
use crate::options::Options;
use crate::sink::Sink;
use crate::trigger::Trigger;

/// Maximum number of spans open at once.
///
/// Each open span holds several stack frames, so unbounded nesting would
/// overflow the stack before input runs out.
pub(crate) const MAX_SPAN_DEPTH: usize = 128;

/// Whether `c` is in one of the Unicode letter categories (`L*`).
pub(crate) fn is_letter(c: char) -> bool {
    c.general_category_group() == GeneralCategoryGroup::Letter
}

/// Mutable state threaded through every parselet.
#[derive(Debug)]
pub(crate) struct Context<'o> {
    pub(crate) cursor: Cursor,
    pub(crate) sink: Sink,
    /// Number of `<code>` start tags entered and not yet left.
    pub(crate) code_depth: usize,
    /// Number of spans currently open, across every construct.
    span_depth: usize,
    pub(crate) options: &'o Options,
    pub(crate) diagnostics: Diagnostics,
}

impl<'o> Context<'o> {
    pub(crate) fn new(input: &str, options: &'o Options) -> Self {
        Self {
            cursor: Cursor::new(input),
            sink: Sink::with_capacity(input.len()),
            code_depth: 0,
            span_depth: 0,
            options,
            diagnostics: Diagnostics::new(),
        }
    }

    /// Runs the dispatch loop until input is exhausted or a parselet fails.
    pub(crate) fn run(&mut self) -> Result<(), EducateError> {
        while let Some(p) = self.cursor.peek() {
            match self.step(p) {
                Ok(()) => {}
                Err(Halt::Exhausted) => break,
                Err(Halt::Failed(err)) => return Err(err),
            }
        }
        Ok(())
    }

    pub(crate) fn finish(self) -> (String, Diagnostics) {
        (self.sink.finish(), self.diagnostics)
    }

    /// Handles the peeked-at character `p`: its parselet if it is a trigger, a plain copy otherwise.
    pub(crate) fn step(&mut self, p: char) -> Step {
        match Trigger::of(p) {
            Some(trigger) => self.dispatch(trigger),
            None => self.copy_one(),
        }
    }

    fn dispatch(&mut self, trigger: Trigger) -> Step {
        match trigger {
            Trigger::Backslash => literal::at_backslash(self),
            Trigger::DoubleQuote => quotes::at_double_quote(self),
            Trigger::SingleQuote => quotes::at_single_quote(self),
            Trigger::Hyphen => literal::at_hyphen(self),
            Trigger::Backtick => literal::at_backtick(self),
            Trigger::LessThan => html::at_less_than(self),
        }
    }

    /// Reads one character and writes it unchanged.
    pub(crate) fn copy_one(&mut self) -> Step {
        let c = self.cursor.read()?;
        self.sink.write(c);
        Ok(())
    }

    pub(crate) fn advance_while(&mut self, keep: impl Fn(char) -> bool) -> Step {
        self.cursor.advance_while(&mut self.sink, keep)
    }

    pub(crate) fn advance_until(&mut self, stop: impl Fn(char) -> bool) -> Step {
        self.cursor.advance_until(&mut self.sink, stop)
    }

    pub(crate) fn advance_through(&mut self, literal: &str) -> Step {
        self.cursor.advance_through(literal, &mut self.sink)
    }

    /// Reads the character an `at_*` parselet was dispatched on and checks it.
    pub(crate) fn expect(&mut self, accepted: &[char], parselet: &str) -> Step<char> {
        let location = self.cursor.location();
        let c = self.cursor.read()?;
        if accepted.contains(&c) {
            return Ok(c);
        }
        Err(EducateError::internal(
            format!(
                "{parselet} expected one of {accepted:?}, got «{c}» (U+{:04X})",
                u32::from(c)
            ),
            location,
        )
        .into())
    }

    /// Runs `body`, reporting exhausted input as an unterminated `construct` opened at `start`.
    ///
    /// Fails without running `body` once [`MAX_SPAN_DEPTH`] spans are already open.
    pub(crate) fn within<T>(
        &mut self,
        construct: Construct,
        start: SourceLocation,
        body: impl FnOnce(&mut Self) -> Step<T>,
    ) -> Step<T> {
        if self.span_depth >= MAX_SPAN_DEPTH {
            return Err(EducateError::NestedTooDeep {
                construct,
                location: start,
                limit: MAX_SPAN_DEPTH,
            }
            .into());
        }
        log::trace!("entering {construct} at {start}");
        self.span_depth += 1;
        let result = body(self);
        self.span_depth -= 1;
        result.map_err(|halt| match halt {
            Halt::Exhausted => Halt::Failed(EducateError::Unterminated {
                construct,
                location: start,
            }),
            failed @ Halt::Failed(_) => failed,
        })
    }

    pub(crate) fn report(&mut self, level: log::Level, warning: Warning) {
        log::log!(level, "{warning}");
        self.diagnostics.add_warning(warning);
    }
}
