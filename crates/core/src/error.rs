use thiserror::Error;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed, in characters)
    pub column: usize,
}

impl SourceLocation {
    /// Create a new source location
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Default for SourceLocation {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A construct whose body is being consumed when input runs out.
///
/// Each variant names one of the parse states that can only be left through
/// its own terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Construct {
    /// A `“…”` span opened by `"` or `“`.
    DoubleQuotes,
    /// A `‘…’` span opened by `'` or `‘`.
    SingleQuotes,
    /// A leading `---` YAML block.
    FrontMatter,
    /// A single-backtick code span.
    CodeSpan,
    /// A triple-backtick fenced block.
    CodeFence,
    /// An HTML start tag (name and attributes).
    HtmlStartTag,
    /// An HTML end tag.
    HtmlEndTag,
    /// A quoted HTML attribute value.
    AttributeValue,
    /// The body of a `<code>` element.
    CodeElement,
}

impl std::fmt::Display for Construct {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Construct::DoubleQuotes => "double-quoted span",
            Construct::SingleQuotes => "single-quoted span",
            Construct::FrontMatter => "YAML front matter",
            Construct::CodeSpan => "code span",
            Construct::CodeFence => "fenced code block",
            Construct::HtmlStartTag => "HTML start tag",
            Construct::HtmlEndTag => "HTML end tag",
            Construct::AttributeValue => "HTML attribute value",
            Construct::CodeElement => "<code> element",
        };
        f.write_str(name)
    }
}

/// Errors that can stop a transformation.
#[derive(Debug, Error)]
pub enum EducateError {
    /// Input bytes were not valid UTF-8.
    #[error("Encoding error: {0}")]
    Decode(#[from] std::str::Utf8Error),
    /// Input ended inside a construct that needs a terminator.
    #[error("Unterminated {construct} starting at {location}")]
    Unterminated {
        /// The innermost open construct
        construct: Construct,
        /// Where the construct started
        location: SourceLocation,
    },
    /// Spans were nested deeper than the parser is willing to recurse.
    #[error("{construct} starting at {location} is nested more than {limit} spans deep")]
    NestedTooDeep {
        /// The construct that would have exceeded the limit
        construct: Construct,
        /// Where that construct started
        location: SourceLocation,
        /// Maximum number of open spans
        limit: usize,
    },
    /// A parselet found itself in a state it should never reach.
    #[error("Internal error at {location}: {message}")]
    Internal {
        /// Error message
        message: String,
        /// Source location
        location: SourceLocation,
    },
    /// IO error while reading or writing a stream.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EducateError {
    /// Create an internal error with location
    pub fn internal(message: impl Into<String>, location: SourceLocation) -> Self {
        Self::Internal {
            message: message.into(),
            location,
        }
    }

    /// Whether input ran out inside a construct.
    ///
    /// The whole input was consumed in this case, so the partial output covers all of it.
    pub fn is_unterminated(&self) -> bool {
        matches!(self, EducateError::Unterminated { .. })
    }
}

/// A failed transformation: the error plus whatever output was produced before it.
#[derive(Debug, Error)]
#[error("stopped after {} characters of output", .partial.chars().count())]
pub struct EducateFailure {
    /// Output produced before the error
    pub partial: String,
    /// Why the transformation stopped
    #[source]
    pub error: EducateError,
    /// Warnings gathered before the error
    pub diagnostics: Diagnostics,
}

impl EducateFailure {
    /// Wrap an error that happened before any output was produced.
    pub fn without_output(error: impl Into<EducateError>) -> Self {
        Self {
            partial: String::new(),
            error: error.into(),
            diagnostics: Diagnostics::new(),
        }
    }
}

/// Non-fatal warnings about guesses the transducer had to make
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A `'` right after `>` or `)` was left straight.
    AmbiguousApostrophe {
        /// Where the apostrophe was read
        location: SourceLocation,
        /// The character written just before it
        preceding: char,
    },
    /// A closing-looking `'` inside single quotes was kept as an apostrophe.
    AssumedContraction {
        /// Where the apostrophe was read
        location: SourceLocation,
        /// The contraction stem that matched
        stem: String,
    },
}

impl Warning {
    /// Get the location of this warning
    pub fn location(&self) -> &SourceLocation {
        match self {
            Warning::AmbiguousApostrophe { location, .. } => location,
            Warning::AssumedContraction { location, .. } => location,
        }
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::AmbiguousApostrophe {
                location,
                preceding,
            } => {
                write!(
                    f,
                    "{}: cannot tell whether «{}'» is a quote mark or an apostrophe; left unchanged",
                    location, preceding
                )
            }
            Warning::AssumedContraction { location, stem } => {
                write!(
                    f,
                    "{}: «{}» before an apostrophe inside single quotes; assumed a contraction",
                    location, stem
                )
            }
        }
    }
}

/// Collection of warnings gathered during one transformation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    /// List of non-fatal warnings
    pub warnings: Vec<Warning>,
}

impl Diagnostics {
    /// Create a new empty diagnostics collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a warning to the diagnostics collection
    pub fn add_warning(&mut self, warning: Warning) {
        self.warnings.push(warning);
    }

    /// Check if there are any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Get total count of all diagnostics
    pub fn count(&self) -> usize {
        self.warnings.len()
    }
}
