//! Invariants that must hold for any input.

use educator_core::{EducateFailure, educate};
use proptest::prelude::*;
use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

/// Markdown-ish text with markup characters but no quote marks of any kind.
fn quoteless_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            8 => prop::char::range('a', 'z'),
            2 => Just(' '),
            1 => Just('\n'),
            1 => prop::sample::select(vec!['-', '`', '<', '>', '/', '=', '\\', '(', ')', 'é', '∆']),
        ],
        0..200,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

/// Prose with straight quotes and no suppressed spans.
fn quoted_prose() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            6 => prop::char::range('a', 'z'),
            2 => Just(' '),
            1 => prop::sample::select(vec!['"', '\'', '.', ',', '?', '\n']),
        ],
        0..120,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

fn word() -> impl Strategy<Value = String> {
    "[a-z]{1,8}"
}

fn words() -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 1..5).prop_map(|words| words.join(" "))
}

fn contraction() -> impl Strategy<Value = String> {
    (word(), "[a-z]{1,2}").prop_map(|(stem, tail)| format!("{stem}'{tail}"))
}

/// Prose whose quote marks always pair up, so every input educates cleanly.
///
/// Single-quoted spans hold no apostrophes and end in punctuation, which keeps
/// contraction stems from holding them open.
fn balanced_prose() -> impl Strategy<Value = String> {
    let segment = prop_oneof![
        4 => word(),
        2 => contraction(),
        1 => words().prop_map(|inner| format!("\"{inner}\"")),
        1 => (words(), contraction()).prop_map(|(inner, c)| format!("\"{inner} {c}\"")),
        1 => words().prop_map(|inner| format!("'{inner}.'")),
        1 => (words(), word()).prop_map(|(inner, tail)| format!("\"'{inner}.' {tail}\"")),
        1 => words().prop_map(|inner| format!("'\"{inner}\" x.'")),
    ];
    (
        prop::collection::vec(segment, 0..20),
        prop::sample::select(vec![" ", "\n", ", "]),
    )
        .prop_map(|(segments, separator)| segments.join(separator))
}

fn is_letter(c: char) -> bool {
    c.general_category_group() == GeneralCategoryGroup::Letter
}

fn output_of(result: &Result<String, EducateFailure>) -> &str {
    match result {
        Ok(output) => output,
        Err(failure) => &failure.partial,
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        .. ProptestConfig::default()
    })]

    /// Without quote marks there is nothing to curl, whatever markup surrounds the text.
    #[test]
    fn text_without_quotes_is_unchanged(input in quoteless_text()) {
        let result = educate(&input);
        match &result {
            Ok(output) => prop_assert_eq!(output, &input),
            Err(_) => prop_assert!(input.starts_with(output_of(&result))),
        }
    }

    /// Curled output fed back in comes out the same.
    #[test]
    fn educating_is_idempotent(input in balanced_prose()) {
        let once = educate(&input);
        prop_assert!(once.is_ok(), "{input:?} failed: {once:?}");
        let once = once.unwrap_or_default();
        let twice = educate(&once);
        prop_assert_eq!(twice.ok(), Some(once));
    }

    /// Arbitrarily deep quote nesting ends in a result, never a stack overflow.
    #[test]
    fn unbalanced_nesting_returns(marks in prop::collection::vec(prop::sample::select(vec!["\" ", "' ", "a "]), 0..2_000)) {
        let input = marks.concat();
        let result = educate(&input);
        prop_assert!(output_of(&result).chars().count() <= input.chars().count());
    }

    /// A single quote right after a letter is always an apostrophe.
    #[test]
    fn no_opening_single_quote_after_a_letter(input in quoted_prose()) {
        let result = educate(&input);
        let output = output_of(&result);
        let mut previous: Option<char> = None;
        for c in output.chars() {
            if c == '‘' {
                prop_assert!(!previous.is_some_and(is_letter), "{output:?}");
            }
            previous = Some(c);
        }
    }

    /// Output never contains a straight quote that came from ordinary prose.
    #[test]
    fn terminated_prose_has_no_straight_quotes(input in quoted_prose()) {
        if let Ok(output) = educate(&input) {
            prop_assert!(!output.contains(['"', '\'']), "{output:?}");
        }
    }
}
