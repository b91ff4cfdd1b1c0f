#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;

fn parse(line: &str) -> (&str, &str) {
    let parsed = parse_enum_line(line).unwrap();
    (parsed.value, parsed.comment)
}

#[test]
fn bare_value() {
    assert_eq!(parse("RED"), ("RED", ""));
}

#[test]
fn trailing_comma_only() {
    assert_eq!(parse("RED,"), ("RED", ""));
}

#[test]
fn comma_and_comment() {
    assert_eq!(parse("RED, // the color red"), ("RED", "// the color red"));
}

#[test]
fn comment_without_comma() {
    assert_eq!(parse("RED // the color red"), ("RED", "// the color red"));
}

#[test]
fn space_before_comma() {
    assert_eq!(parse("RED ,  primary"), ("RED", "primary"));
}

#[test]
fn hash_text_is_dropped() {
    assert_eq!(parse("RED, primary # not emitted"), ("RED", "primary"));
    assert_eq!(parse("RED # not emitted"), ("RED", ""));
}

#[test]
fn sentinel_line() {
    assert_eq!(
        parse("INVALID_ENUM_VALUE,// invalid enum values are mapped to this"),
        (
            "INVALID_ENUM_VALUE",
            "// invalid enum values are mapped to this"
        )
    );
}

#[test]
fn value_stops_at_punctuation() {
    // Anything after the identifier run is comment text.
    assert_eq!(parse("RED-ish"), ("RED", "-ish"));
}

#[test]
fn empty_value_rejected() {
    let err = parse_enum_line(", just a comment").unwrap_err();
    assert_eq!(err.kind, LineParseErrorKind::EmptyName);
    assert_eq!(err.line, ", just a comment");
}

#[test]
fn empty_line_rejected() {
    assert_eq!(
        parse_enum_line("").unwrap_err().kind,
        LineParseErrorKind::EmptyName
    );
}

mod proptest_grammar {
    use super::super::parse_enum_line;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn value_and_comment_recovered(
            value in "[A-Z_][A-Z0-9_]{0,16}",
            comment in "[a-z/ ]{0,24}",
        ) {
            let line = format!("{value}, {comment}");
            let parsed = parse_enum_line(&line).unwrap();
            prop_assert_eq!(parsed.value, value.as_str());
            prop_assert_eq!(parsed.comment, comment.trim());
        }

        #[test]
        fn arbitrary_input_never_panics(line in any::<String>()) {
            let _ = parse_enum_line(&line);
        }
    }
}
