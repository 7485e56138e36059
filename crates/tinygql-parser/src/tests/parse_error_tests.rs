//! Tests for `ParseError` construction and rendering.

use crate::tests::utils::parse_err;
use crate::ErrorLocation;
use crate::ErrorNoteKind;
use crate::LexError;
use crate::LexErrorKind;
use crate::ParseError;
use crate::ParseErrorKind;

fn location(line: usize, column: usize, start: usize, end: usize) -> ErrorLocation {
    ErrorLocation {
        source_name: "test.graphql".to_string(),
        line,
        column,
        start,
        end,
    }
}

#[test]
fn format_oneline() {
    let error = parse_err("{ user(id 4) }");
    assert_eq!(
        error.format_oneline(),
        "test.graphql:1:11: error: expected `:`, found `4`"
    );
    assert_eq!(error.to_string(), error.format_oneline());
}

#[test]
fn format_detailed_with_snippet() {
    let source = "{ user(id 4) }";
    let error = parse_err(source);
    assert_eq!(
        error.format_detailed(Some(source)),
        "error: expected `:`, found `4`\n\
         \x20 --> test.graphql:1:11\n\
         \x20  |\n\
         \x201 | { user(id 4) }\n\
         \x20  |           ^\n"
    );
}

#[test]
fn format_detailed_without_source() {
    let error = parse_err("{ user(id 4) }");
    assert_eq!(
        error.format_detailed(None),
        "error: expected `:`, found `4`\n  --> test.graphql:1:11\n"
    );
}

/// Verifies that notes with a location get their own snippet, underlined
/// with `-`.
#[test]
fn format_detailed_with_located_note() {
    let source = "{\n  a";
    let error = parse_err(source);
    assert_eq!(
        error.format_detailed(Some(source)),
        "error: expected `}`, found <EOF>\n\
         \x20 --> test.graphql:2:4\n\
         \x20  |\n\
         \x202 |   a\n\
         \x20  |    ^\n\
         \x20  = note: `{` opened here\n\
         \x20  |\n\
         \x201 | {\n\
         \x20  | -\n"
    );
}

/// Verifies that the underline spans the whole offending token.
#[test]
fn underline_covers_token_width() {
    let source = "query Q {\n  a\n}\nfragment on on T { a }";
    let error = parse_err(source);
    let rendered = error.format_detailed(Some(source));
    assert!(rendered.contains(" 4 | fragment on on T { a }\n"), "{rendered}");
    assert!(rendered.contains("   |          ^^\n"), "{rendered}");
    assert!(rendered.contains("   = spec: https://"), "{rendered}");
}

/// Verifies that snippets respect lone CR line terminators.
#[test]
fn snippet_with_carriage_returns() {
    let source = "{ a }\r{ b ( }";
    let error = parse_err(source);
    assert_eq!(error.location().line, 2);
    let rendered = error.format_detailed(Some(source));
    assert!(rendered.contains(" 2 | { b ( }\n"), "{rendered}");
}

#[test]
fn notes_are_appended_in_order() {
    let mut error = ParseError::new(
        "expected name, found `1`",
        location(1, 3, 2, 3),
        ParseErrorKind::UnexpectedToken {
            expected: vec!["name".to_string()],
            found: "`1`".to_string(),
        },
    );
    error.add_note("plain note");
    error.add_help("try a name");
    error.add_spec("https://spec.graphql.org/September2025/#Name");
    error.add_note_with_location("related", location(1, 1, 0, 1));

    let kinds: Vec<_> = error.notes().iter().map(|note| note.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ErrorNoteKind::General,
            ErrorNoteKind::Help,
            ErrorNoteKind::Spec,
            ErrorNoteKind::General,
        ]
    );
    assert!(error.notes()[3].location.is_some());

    let rendered = error.format_detailed(None);
    assert!(rendered.contains("   = note: plain note\n"));
    assert!(rendered.contains("   = help: try a name\n"));
}

/// Verifies the conversion of a lexical error, keeping its notes.
#[test]
fn from_lex_error() {
    let lex_error = LexError::new(LexErrorKind::SingleQuote, location(1, 1, 0, 1));
    let error = ParseError::from(lex_error);
    assert!(error.is_lexical());
    assert_eq!(error.kind(), &ParseErrorKind::Lexer(LexErrorKind::SingleQuote));
    assert_eq!(error.message(), LexErrorKind::SingleQuote.to_string());
    assert_eq!(error.location(), &location(1, 1, 0, 1));
}
