#![deny(missing_docs)]
//! Educator core: curls straight quotes in Markdown with embedded HTML.
//!
//! Quote marks inside code spans, fenced code blocks, HTML attribute values,
//! `<code>` elements, and a leading YAML front-matter block are left exactly
//! as they are. Everything else that is not a quote mark passes through
//! unchanged.
//!
//! ```
//! let out = educator_core::educate(r#"I like "scare quotes"."#).unwrap();
//! assert_eq!(out, "I like “scare quotes”.");
//! ```

mod cursor;
/// Error and diagnostic types.
pub mod error;
/// Transformation options.
pub mod options;
mod parser;
mod sink;
/// Trigger characters and their classes.
pub mod trigger;

use std::io::{Read, Write};

pub use error::{
    Construct, Diagnostics, EducateError, EducateFailure, SourceLocation, Warning,
};
pub use options::{DEFAULT_CONTRACTION_STEMS, Options};
pub use trigger::Trigger;

use parser::Context;

/// Output of a successful transformation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Educated {
    /// The transformed text.
    pub output: String,
    /// Guesses worth double-checking.
    pub diagnostics: Diagnostics,
}

/// Curls the quotes in `input` with default options.
///
/// On failure the returned [`EducateFailure`] carries the output produced
/// before the error.
pub fn educate(input: &str) -> Result<String, EducateFailure> {
    educate_with_options(input, &Options::default()).map(|educated| educated.output)
}

/// Curls the quotes in `input`, returning the output with any diagnostics.
pub fn educate_with_options(input: &str, options: &Options) -> Result<Educated, EducateFailure> {
    log::debug!("educating {} bytes", input.len());
    let mut ctx = Context::new(input, options);
    let result = ctx.run();
    let (output, diagnostics) = ctx.finish();

    match result {
        Ok(()) => {
            log::debug!(
                "educated {} bytes with {} warning(s)",
                output.len(),
                diagnostics.count()
            );
            Ok(Educated {
                output,
                diagnostics,
            })
        }
        Err(error) => Err(EducateFailure {
            partial: output,
            error,
            diagnostics,
        }),
    }
}

/// Decodes `input` as UTF-8 and curls its quotes.
///
/// Malformed input is rejected before any output is produced.
pub fn educate_bytes(input: &[u8], options: &Options) -> Result<Educated, EducateFailure> {
    let text = std::str::from_utf8(input).map_err(EducateFailure::without_output)?;
    educate_with_options(text, options)
}

/// Reads all of `source`, curls its quotes, and writes the result to `destination`.
///
/// Returns the number of characters written. Nothing is written when the
/// transformation fails.
pub fn educate_stream<R, W>(
    mut source: R,
    mut destination: W,
    options: &Options,
) -> Result<usize, EducateFailure>
where
    R: Read,
    W: Write,
{
    let mut input = Vec::new();
    source
        .read_to_end(&mut input)
        .map_err(EducateFailure::without_output)?;

    let Educated {
        output,
        diagnostics,
    } = educate_bytes(&input, options)?;

    if let Err(err) = destination
        .write_all(output.as_bytes())
        .and_then(|()| destination.flush())
    {
        return Err(EducateFailure {
            partial: output,
            error: err.into(),
            diagnostics,
        });
    }
    Ok(output.chars().count())
}
