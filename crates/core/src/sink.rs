//! Append-only output accumulator.

/// Collects produced characters.
///
/// Lookbehind decisions read what was actually emitted, so a quote that was
/// already curled counts as its curled form.
#[derive(Debug, Default)]
pub(crate) struct Sink {
    buf: String,
}

impl Sink {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: String::with_capacity(capacity),
        }
    }

    pub(crate) fn write(&mut self, c: char) {
        self.buf.push(c);
    }

    /// The most recently written character, or `None` at the beginning of output.
    pub(crate) fn last_written(&self) -> Option<char> {
        self.buf.chars().next_back()
    }

    pub(crate) fn last_matches(&self, f: impl Fn(char) -> bool) -> bool {
        self.last_written().is_some_and(f)
    }

    /// Returns the first candidate the output currently ends with.
    pub(crate) fn ends_with_any<'a, I>(&self, candidates: I) -> Option<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        candidates
            .into_iter()
            .find(|candidate| !candidate.is_empty() && self.buf.ends_with(*candidate))
    }

    /// A position in the output, for reading back what gets written after it.
    pub(crate) fn mark(&self) -> usize {
        self.buf.len()
    }

    /// Everything written since `mark`.
    pub(crate) fn since(&self, mark: usize) -> &str {
        self.buf.get(mark..).unwrap_or_default()
    }

    pub(crate) fn finish(self) -> String {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_written_starts_empty() {
        let mut sink = Sink::default();
        assert_eq!(sink.last_written(), None);
        assert!(!sink.last_matches(char::is_alphabetic));
        sink.write('’');
        assert_eq!(sink.last_written(), Some('’'));
    }

    #[test]
    fn ends_with_any_picks_matching_stem() {
        let mut sink = Sink::with_capacity(8);
        for c in "‘you".chars() {
            sink.write(c);
        }
        assert_eq!(sink.ends_with_any(["can", "you", "don"]), Some("you"));
        assert_eq!(sink.ends_with_any(["", "can"]), None);
    }

    #[test]
    fn since_reads_back_recent_output() {
        let mut sink = Sink::default();
        sink.write('<');
        let mark = sink.mark();
        for c in "code".chars() {
            sink.write(c);
        }
        assert_eq!(sink.since(mark), "code");
        assert_eq!(sink.since(sink.mark()), "");
    }
}
