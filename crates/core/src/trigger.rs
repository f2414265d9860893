//! Characters that get special handling instead of being copied verbatim.

/// A trigger character class with its own parselet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// `\` escapes the following character.
    Backslash,
    /// `"` or `“` opens a double-quoted span.
    DoubleQuote,
    /// `'` or `‘` is an apostrophe or opens a single-quoted span.
    SingleQuote,
    /// `-` may start YAML front matter at the very beginning of input.
    Hyphen,
    /// `` ` `` starts a code span or a fenced block.
    Backtick,
    /// `<` may start an HTML tag.
    LessThan,
}

impl Trigger {
    /// Looks up the trigger for a character, if it has one.
    ///
    /// Closing curly quotes (`”`, `’`) are not triggers: outside of a span they
    /// are already in their final form.
    ///
    /// ```
    /// use educator_core::Trigger;
    ///
    /// assert_eq!(Trigger::of('“'), Some(Trigger::DoubleQuote));
    /// assert_eq!(Trigger::of('’'), None);
    /// ```
    pub const fn of(c: char) -> Option<Self> {
        match c {
            '\\' => Some(Trigger::Backslash),
            '"' | '“' => Some(Trigger::DoubleQuote),
            '\'' | '‘' => Some(Trigger::SingleQuote),
            '-' => Some(Trigger::Hyphen),
            '`' => Some(Trigger::Backtick),
            '<' => Some(Trigger::LessThan),
            _ => None,
        }
    }
}
