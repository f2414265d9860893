//! Just enough HTML recognition to keep attribute values and `<code>`
//! bodies away from quote curling. Text between ordinary tags is still curled.

use super::{Context, is_letter};
use super::literal::through_unescaped;
use crate::cursor::{Halt, Step};
use crate::error::{Construct, EducateError};

const CODE_ELEMENT: &str = "code";

/// Reads a `<` and, if it starts a tag, consumes the tag.
///
/// A `<` followed by anything but a letter or `/` is a less-than sign, and
/// the character after it goes back through normal dispatch.
pub(super) fn at_less_than(ctx: &mut Context<'_>) -> Step {
    let start = ctx.cursor.location();
    let r = ctx.expect(&['<'], "at_less_than")?;
    ctx.sink.write(r);

    // Tag names never start with a digit or punctuation.
    let p = ctx.cursor.peek().ok_or(Halt::Exhausted)?;
    if is_letter(p) {
        return ctx.within(Construct::HtmlStartTag, start, in_start_tag);
    }
    if p == '/' {
        return ctx.within(Construct::HtmlEndTag, start, in_end_tag);
    }
    Ok(())
}

/// Consumes a start tag's name and attributes.
///
/// Exit: the next character is the tag's closing `>` (or whatever stopped
/// attribute parsing), unless the tag opened a `<code>` element, in which
/// case the whole element up to and including `</code>` has been consumed.
fn in_start_tag(ctx: &mut Context<'_>) -> Step {
    let depth_at_start = ctx.code_depth;
    if tag_name(ctx)? == CODE_ELEMENT {
        ctx.code_depth += 1;
    }

    ctx.advance_while(is_html_whitespace)?;
    while ctx.cursor.peek().is_some_and(is_letter) {
        attribute(ctx)?;
        ctx.advance_while(is_html_whitespace)?;
    }
    // Self-closing syntax.
    if ctx.cursor.peek() == Some('/') {
        ctx.copy_one()?;
    }

    if ctx.code_depth > depth_at_start {
        let location = ctx.cursor.location();
        match ctx.cursor.peek().ok_or(Halt::Exhausted)? {
            '>' => {}
            p => {
                return Err(EducateError::internal(
                    format!("expected `>` to end a <code> start tag, got «{p}»"),
                    location,
                )
                .into());
            }
        }
        ctx.within(Construct::CodeElement, location, in_code_element)?;
        ctx.code_depth = depth_at_start;
    }
    Ok(())
}

/// Copies an end tag through its closing `>`.
fn in_end_tag(ctx: &mut Context<'_>) -> Step {
    ctx.copy_one()?;
    if tag_name(ctx)? == CODE_ELEMENT {
        ctx.code_depth = ctx.code_depth.saturating_sub(1);
    }
    ctx.advance_through(">")
}

/// Copies a tag name, stopping before whitespace or `>`, and returns it.
fn tag_name(ctx: &mut Context<'_>) -> Step<String> {
    let mark = ctx.sink.mark();
    ctx.advance_until(|c| is_html_whitespace(c) || c == '>')?;
    Ok(ctx.sink.since(mark).to_owned())
}

/// Copies one attribute: its name and, if present, `=` and a value.
///
/// Values are never curled, whichever way they are quoted.
fn attribute(ctx: &mut Context<'_>) -> Step {
    ctx.advance_while(is_attribute_name_char)?;
    ctx.advance_while(is_html_whitespace)?;
    if ctx.cursor.peek() != Some('=') {
        return Ok(());
    }
    ctx.copy_one()?;
    ctx.advance_while(is_html_whitespace)?;

    let start = ctx.cursor.location();
    match ctx.cursor.peek().ok_or(Halt::Exhausted)? {
        delimiter @ ('"' | '\'') => {
            ctx.copy_one()?;
            ctx.within(Construct::AttributeValue, start, |ctx| {
                through_unescaped(ctx, delimiter)
            })
        }
        p if is_unquoted_attribute_value_char(p) => {
            ctx.advance_while(is_unquoted_attribute_value_char)
        }
        p => Err(EducateError::internal(
            format!("unexpected «{p}» (U+{:04X}) starting an HTML attribute value", u32::from(p)),
            start,
        )
        .into()),
    }
}

/// Copies a `<code>` element's body verbatim, then its `</code>` end tag.
///
/// Entry: the next character is the start tag's `>`.
fn in_code_element(ctx: &mut Context<'_>) -> Step {
    ctx.advance_through("</code")?;
    ctx.advance_while(is_html_whitespace)?;

    let location = ctx.cursor.location();
    let c = ctx.cursor.read()?;
    if c != '>' {
        return Err(EducateError::internal(
            format!("expected `>` after </code, got «{c}»"),
            location,
        )
        .into());
    }
    ctx.sink.write(c);
    Ok(())
}

fn is_html_whitespace(c: char) -> bool {
    c.is_ascii_whitespace()
}

fn is_attribute_name_char(c: char) -> bool {
    !c.is_control() && !matches!(c, ' ' | '"' | '\'' | '>' | '/' | '=') && !is_noncharacter(c)
}

fn is_unquoted_attribute_value_char(c: char) -> bool {
    !is_html_whitespace(c) && !matches!(c, '"' | '\'' | '=' | '<' | '>' | '`')
}

/// `U+FDD0..=U+FDEF` plus the last two code points of every plane.
fn is_noncharacter(c: char) -> bool {
    let cp = u32::from(c);
    (0xFDD0..=0xFDEF).contains(&cp) || cp & 0xFFFE == 0xFFFE
}
