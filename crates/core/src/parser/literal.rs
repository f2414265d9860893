//! Parselets for spans that are copied through without curling: backslash
//! escapes, YAML front matter, code spans and fenced code blocks.

use super::Context;
use crate::cursor::Step;
use crate::error::Construct;

const FRONT_MATTER_END: &str = "\n---\n";
const FENCE_END: &str = "\n```\n";

/// Copies a `\` and the character after it without looking at either.
pub(super) fn at_backslash(ctx: &mut Context<'_>) -> Step {
    let r = ctx.expect(&['\\'], "at_backslash")?;
    ctx.sink.write(r);
    ctx.copy_one()
}

/// Reads a `-`. At the very start of input and followed by `--`, it opens
/// YAML front matter; anywhere else it is just a hyphen.
///
/// Exit: the next character is the one after the hyphen, or the first one
/// on the line after the closing `---`.
pub(super) fn at_hyphen(ctx: &mut Context<'_>) -> Step {
    let at_start = ctx.cursor.offset() == 0;
    let start = ctx.cursor.location();
    let r = ctx.expect(&['-'], "at_hyphen")?;
    ctx.sink.write(r);

    if at_start && ctx.options.front_matter && ctx.cursor.peek_equals("--") {
        return ctx.within(Construct::FrontMatter, start, in_front_matter);
    }
    Ok(())
}

fn in_front_matter(ctx: &mut Context<'_>) -> Step {
    ctx.advance_through(FRONT_MATTER_END)
}

/// Reads a `` ` `` and copies the code span or fenced block it starts.
///
/// A fence needs three backticks at the start of a line; anything else is a
/// single-backtick span.
pub(super) fn at_backtick(ctx: &mut Context<'_>) -> Step {
    let start = ctx.cursor.location();
    let at_line_start = matches!(ctx.sink.last_written(), None | Some('\n'));
    let r = ctx.expect(&['`'], "at_backtick")?;
    let fence = at_line_start && ctx.cursor.peek_equals("``");
    ctx.sink.write(r);

    if fence {
        ctx.within(Construct::CodeFence, start, in_code_fence)
    } else {
        ctx.within(Construct::CodeSpan, start, |ctx| through_unescaped(ctx, '`'))
    }
}

/// Copies through a ```` ``` ```` alone on its line.
///
/// Exit: the next character is the first one on the line after the closing fence.
fn in_code_fence(ctx: &mut Context<'_>) -> Step {
    ctx.advance_through(FENCE_END)
}

/// Copies through the first `sentinel` not preceded by a backslash.
///
/// Exit: the next character is the one after the sentinel.
pub(super) fn through_unescaped(ctx: &mut Context<'_>, sentinel: char) -> Step {
    loop {
        let previous = ctx.sink.last_written();
        let c = ctx.cursor.read()?;
        ctx.sink.write(c);
        if c == sentinel && previous != Some('\\') {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::{Construct, EducateError};
    use crate::{Options, educate, educate_with_options};

    #[test]
    fn backslash_protects_next_character() {
        assert_eq!(
            educate("Some Europeans use \\` instead of ' when they're typing in English.")
                .unwrap(),
            "Some Europeans use \\` instead of ‘ when they’re typing in English."
        );
    }

    #[test]
    fn escaped_quote_stays_straight() {
        assert_eq!(educate(r#"a \"b\" c"#).unwrap(), r#"a \"b\" c"#);
    }

    #[test]
    fn front_matter_is_left_alone() {
        let input = "---\ntitle: 'Zelda: Breath of the Wild vignettes'\n---\n\nYou can't just fall on a horse.\n";
        assert_eq!(
            educate(input).unwrap(),
            "---\ntitle: 'Zelda: Breath of the Wild vignettes'\n---\n\nYou can’t just fall on a horse.\n"
        );
    }

    #[test]
    fn later_rule_is_not_front_matter() {
        assert_eq!(
            educate("Let's take a breather.\n\n---\n\nWasn't that nice?.").unwrap(),
            "Let’s take a breather.\n\n---\n\nWasn’t that nice?."
        );
    }

    #[test]
    fn front_matter_can_be_disabled() {
        let options = Options::default().with_front_matter(false);
        let result = educate_with_options("---\nit's: 'x'\n---\n", &options).unwrap();
        assert_eq!(result.output, "---\nit’s: ‘x’\n---\n");
    }

    #[test]
    fn unterminated_front_matter_is_an_error() {
        let err = educate("---\ntitle: 'x'\n").unwrap_err();
        assert!(matches!(
            err.error,
            EducateError::Unterminated {
                construct: Construct::FrontMatter,
                ..
            }
        ));
        assert_eq!(err.partial, "---\ntitle: 'x'\n");
    }

    #[test]
    fn code_span_is_verbatim() {
        assert_eq!(
            educate("It's merely `print(\"Hello, World\")`. Now let's go").unwrap(),
            "It’s merely `print(\"Hello, World\")`. Now let’s go"
        );
    }

    #[test]
    fn escaped_backtick_does_not_close_span() {
        assert_eq!(
            educate("`⌘\\`` isn't easy to get used to").unwrap(),
            "`⌘\\`` isn’t easy to get used to"
        );
    }

    #[test]
    fn fence_is_verbatim() {
        assert_eq!(
            educate("I'd show you:\n\n```\nprint 'Hello, world!'\n```\n\nWasn't that hard?")
                .unwrap(),
            "I’d show you:\n\n```\nprint 'Hello, world!'\n```\n\nWasn’t that hard?"
        );
    }

    #[test]
    fn fence_at_start_of_input_with_info_string() {
        assert_eq!(
            educate("```sh\necho 'hi' \"there\"\n```\nIt's done.").unwrap(),
            "```sh\necho 'hi' \"there\"\n```\nIt’s done."
        );
    }

    #[test]
    fn fence_without_closing_line_is_unterminated() {
        let err = educate("text\n```\ncode 'x'\n```").unwrap_err();
        assert!(matches!(
            err.error,
            EducateError::Unterminated {
                construct: Construct::CodeFence,
                ..
            }
        ));
        assert_eq!(err.partial, "text\n```\ncode 'x'\n```");
    }

    #[test]
    fn unterminated_code_span_reports_its_start() {
        let err = educate("ok\nthe `tick").unwrap_err();
        match err.error {
            EducateError::Unterminated {
                construct,
                location,
            } => {
                assert_eq!(construct, Construct::CodeSpan);
                assert_eq!((location.line, location.column), (2, 5));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
