//! Double- and single-quote parselets.

use super::{Context, is_letter};
use crate::cursor::{Halt, Step};
use crate::error::{Construct, Warning};

const OPEN_DOUBLE: char = '“';
const CLOSE_DOUBLE: char = '”';
const OPEN_SINGLE: char = '‘';
/// Also the apostrophe.
const CLOSE_SINGLE: char = '’';

/// Reads a `"` or `“`, writes `“`, and consumes the quoted span.
///
/// Exit: the next character is the one after the closing quote.
pub(super) fn at_double_quote(ctx: &mut Context<'_>) -> Step {
    let start = ctx.cursor.location();
    ctx.expect(&['"', OPEN_DOUBLE], "at_double_quote")?;
    ctx.sink.write(OPEN_DOUBLE);
    ctx.within(Construct::DoubleQuotes, start, in_double_quotes)
}

/// Copies the body of a double-quoted span, still honouring every trigger,
/// until a `"` or `”`, which is written as `”`.
fn in_double_quotes(ctx: &mut Context<'_>) -> Step {
    loop {
        let p = ctx.cursor.peek().ok_or(Halt::Exhausted)?;
        if matches!(p, '"' | CLOSE_DOUBLE) {
            // The closer is always written curly, whatever was read.
            ctx.cursor.read()?;
            ctx.sink.write(CLOSE_DOUBLE);
            return Ok(());
        }
        ctx.step(p)?;
    }
}

/// Reads a `'` or `‘` and decides whether it is an apostrophe or an opening quote.
///
/// After a letter it is an apostrophe. A straight `'` after `>` or `)` cannot
/// be told apart, so it is left alone and reported. Anything else opens a
/// single-quoted span.
///
/// Exit: the next character is the one after the apostrophe, or after the
/// span's closing quote.
pub(super) fn at_single_quote(ctx: &mut Context<'_>) -> Step {
    let start = ctx.cursor.location();
    let r = ctx.expect(&['\'', OPEN_SINGLE], "at_single_quote")?;

    if ctx.sink.last_matches(is_letter) {
        ctx.sink.write(CLOSE_SINGLE);
        return Ok(());
    }

    if r == '\''
        && let Some(preceding @ ('>' | ')')) = ctx.sink.last_written()
    {
        ctx.report(
            log::Level::Warn,
            Warning::AmbiguousApostrophe {
                location: start,
                preceding,
            },
        );
        ctx.sink.write(r);
        return Ok(());
    }

    ctx.sink.write(OPEN_SINGLE);
    ctx.within(Construct::SingleQuotes, start, in_single_quotes)
}

/// Copies the body of a single-quoted span until a `'` or `’` that does not
/// follow a contraction stem.
///
/// Contractions whose stem is not listed ("isn't", "won't") still close the span.
fn in_single_quotes(ctx: &mut Context<'_>) -> Step {
    loop {
        let p = ctx.cursor.peek().ok_or(Halt::Exhausted)?;
        if !matches!(p, '\'' | CLOSE_SINGLE) {
            ctx.step(p)?;
            continue;
        }

        let location = ctx.cursor.location();
        ctx.cursor.read()?;
        let stem = ctx
            .sink
            .ends_with_any(ctx.options.contraction_stems.iter().map(String::as_str))
            .map(str::to_owned);
        ctx.sink.write(CLOSE_SINGLE);

        match stem {
            Some(stem) => ctx.report(
                log::Level::Info,
                Warning::AssumedContraction { location, stem },
            ),
            None => return Ok(()),
        }
    }
}
