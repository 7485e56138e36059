//! Tests for syntax errors: kinds, messages, locations and notes.

use crate::tests::utils::parse;
use crate::tests::utils::parse_err;
use crate::ErrorNoteKind;
use crate::LexErrorKind;
use crate::ParseErrorKind;
use crate::QueryParser;

// =============================================================================
// Reserved names
// =============================================================================

/// Verifies that a fragment named `on` fails at the fragment-name position.
#[test]
fn fragment_named_on() {
    let error = parse_err("fragment on on X { a }");
    assert_eq!(
        error.kind(),
        &ParseErrorKind::ReservedName {
            name: "on".to_string(),
        }
    );
    assert_eq!(error.message(), "fragment name cannot be `on`");
    assert_eq!(error.location().line, 1);
    assert_eq!(error.location().column, 10);
    assert_eq!(error.location().start, 9);
    assert_eq!(error.location().end, 11);
    assert!(error.notes().iter().any(|note| note.kind == ErrorNoteKind::Spec));
}

/// Verifies that `...on` without a type name is an inline fragment missing
/// its type, not a spread of a fragment called `on`.
#[test]
fn spread_of_on_is_an_inline_fragment() {
    let error = parse_err("{ ...on }");
    assert_eq!(error.message(), "expected name, found `}`");
}

// =============================================================================
// Empty constructs
// =============================================================================

#[test]
fn empty_selection_set() {
    let error = parse_err("{}");
    assert_eq!(
        error.kind(),
        &ParseErrorKind::EmptyConstruct {
            construct: "selection set".to_string(),
        }
    );
    assert_eq!(error.message(), "expected at least one definition, found `}`");
    assert_eq!(error.location().column, 2);
}

#[test]
fn empty_nested_selection_set() {
    let error = parse_err("query { user {} }");
    assert!(matches!(error.kind(), ParseErrorKind::EmptyConstruct { .. }));
    assert_eq!(error.location().column, 15);
}

#[test]
fn empty_argument_list() {
    let error = parse_err("{ a() }");
    assert_eq!(
        error.kind(),
        &ParseErrorKind::EmptyConstruct {
            construct: "argument list".to_string(),
        }
    );
    assert_eq!(error.message(), "expected at least one argument, found `)`");
}

#[test]
fn empty_variable_definitions() {
    let error = parse_err("query Q() { a }");
    assert_eq!(
        error.kind(),
        &ParseErrorKind::EmptyConstruct {
            construct: "variable definitions".to_string(),
        }
    );
}

// =============================================================================
// Unexpected tokens
// =============================================================================

/// Verifies the "expected X, found Y" message and the location of Y.
#[test]
fn missing_colon_in_argument() {
    let error = parse_err("{ user(id 4) }");
    assert_eq!(
        error.kind(),
        &ParseErrorKind::UnexpectedToken {
            expected: vec!["`:`".to_string()],
            found: "`4`".to_string(),
        }
    );
    assert_eq!(error.message(), "expected `:`, found `4`");
    assert_eq!(error.location().column, 11);
}

#[test]
fn missing_value() {
    let error = parse_err("{ f(a: ) }");
    assert_eq!(error.message(), "expected value, found `)`");
}

#[test]
fn missing_type_condition_keyword() {
    let error = parse_err("fragment F T { a }");
    assert_eq!(error.message(), "expected `on`, found `T`");
}

#[test]
fn missing_field_name_after_alias() {
    let error = parse_err("{ a: }");
    assert_eq!(error.message(), "expected name, found `}`");
}

#[test]
fn bad_type_references() {
    assert_eq!(parse_err("query($v: ) { a }").message(), "expected type, found `)`");
    assert_eq!(parse_err("query($v: [Int) { a }").message(), "expected `]`, found `)`");
    assert_eq!(parse_err("query($v: !) { a }").message(), "expected type, found `!`");
}

/// Verifies that string tokens are described with their value.
#[test]
fn string_where_name_expected() {
    let error = parse_err(r#"{ "a" }"#);
    assert_eq!(error.message(), r#"expected name, found string "a""#);
}

/// Verifies that a stray token at the top level is reported with a help note
/// listing what can start a definition.
#[test]
fn unexpected_top_level_token() {
    let error = parse_err("{ a } type Query { a: Int }");
    assert_eq!(error.message(), "unexpected `type`");
    let ParseErrorKind::UnexpectedToken { expected, found } = error.kind() else {
        panic!("expected UnexpectedToken, got {:?}", error.kind());
    };
    assert_eq!(found, "`type`");
    assert!(expected.contains(&"`fragment`".to_string()));
    assert!(error.notes().iter().any(|note| note.kind == ErrorNoteKind::Help));
}

#[test]
fn operation_keyword_without_selection_set() {
    let error = parse_err("query");
    assert_eq!(
        error.kind(),
        &ParseErrorKind::UnexpectedEof {
            expected: vec!["`{`".to_string()],
        }
    );
    assert_eq!(error.message(), "expected `{`, found <EOF>");
}

// =============================================================================
// End of input
// =============================================================================

/// Verifies that an unclosed brace reports the end of input with a note
/// pointing at the opening brace.
#[test]
fn unclosed_selection_set() {
    let error = parse_err("{\n  a");
    assert_eq!(
        error.kind(),
        &ParseErrorKind::UnexpectedEof {
            expected: vec!["`}`".to_string()],
        }
    );
    assert_eq!(error.message(), "expected `}`, found <EOF>");
    assert_eq!(error.location().line, 2);
    assert_eq!(error.location().column, 4);

    let note = &error.notes()[0];
    assert_eq!(note.message, "`{` opened here");
    let opened_at = note.location.as_ref().unwrap();
    assert_eq!((opened_at.line, opened_at.column), (1, 1));
}

#[test]
fn unclosed_list_value() {
    let error = parse_err("{ f(a: [1, 2");
    assert_eq!(error.message(), "expected `]`, found <EOF>");
}

#[test]
fn unclosed_argument_list() {
    let error = parse_err("{ f(a: 1");
    assert_eq!(error.message(), "expected `)`, found <EOF>");
}

// =============================================================================
// Const contexts
// =============================================================================

#[test]
fn variable_in_default_value() {
    let error = parse_err("query($a: Int = $b) { a }");
    assert_eq!(
        error.kind(),
        &ParseErrorKind::VariableNotAllowed {
            context: "variable default values".to_string(),
        }
    );
    assert_eq!(error.message(), "variables are not allowed in variable default values");
    assert_eq!(error.location().column, 17);
}

#[test]
fn variable_nested_in_default_value() {
    let error = parse_err("query($a: [Int] = [1, $b]) { a }");
    assert!(matches!(error.kind(), ParseErrorKind::VariableNotAllowed { .. }));
}

#[test]
fn variable_in_variable_directive() {
    let error = parse_err("query($a: Int @dir(x: $b)) { a }");
    assert_eq!(
        error.kind(),
        &ParseErrorKind::VariableNotAllowed {
            context: "variable definition directives".to_string(),
        }
    );
}

// =============================================================================
// Lexical errors
// =============================================================================

/// Verifies that a lexical error becomes the parse error.
#[test]
fn lexical_error_surfaces_as_parse_error() {
    let error = parse_err("{ a(x: \"abc) }");
    assert!(error.is_lexical());
    assert_eq!(
        error.kind(),
        &ParseErrorKind::Lexer(LexErrorKind::UnterminatedString)
    );
    assert_eq!(error.message(), "unterminated string");
}

/// Verifies that a lexical error inside a comment-free region is reported
/// even when it follows valid definitions.
#[test]
fn lexical_error_after_valid_definitions() {
    let result = parse("{ a } { b ? }");
    assert_eq!(result.ast().operations.len(), 1);
    let error = result.error().unwrap();
    assert_eq!(
        error.kind(),
        &ParseErrorKind::Lexer(LexErrorKind::UnexpectedCharacter("`?`".to_string()))
    );
    assert_eq!(error.location().column, 11);
}

// =============================================================================
// Nesting limit
// =============================================================================

/// Verifies that selection sets may nest exactly up to the limit.
#[test]
fn selection_sets_nested_to_the_limit() {
    let depth = QueryParser::MAX_RECURSION_DEPTH;
    let text = format!("{}leaf{}", "{ a ".repeat(depth - 1) + "{ ", " }".repeat(depth));
    let result = parse(&text);
    assert!(result.is_ok(), "{:?}", result.error());
}

#[test]
fn selection_sets_nested_past_the_limit() {
    let depth = QueryParser::MAX_RECURSION_DEPTH + 1;
    let text = format!("{}leaf{}", "{ a ".repeat(depth - 1) + "{ ", " }".repeat(depth));
    let error = parse_err(&text);
    assert_eq!(
        error.kind(),
        &ParseErrorKind::NestingTooDeep {
            limit: QueryParser::MAX_RECURSION_DEPTH,
        }
    );
    assert_eq!(error.message(), "maximum nesting depth exceeded");
}

/// Verifies that deeply nested list values fail cleanly instead of
/// overflowing the stack.
#[test]
fn deeply_nested_list_value() {
    let text = format!("{{ f(a: {}) }}", "[".repeat(10_000));
    let error = parse_err(&text);
    assert!(matches!(error.kind(), ParseErrorKind::NestingTooDeep { .. }));
}

#[test]
fn deeply_nested_list_type() {
    let text = format!("query($v: {}Int{}) {{ a }}", "[".repeat(100), "]".repeat(100));
    let error = parse_err(&text);
    assert!(matches!(error.kind(), ParseErrorKind::NestingTooDeep { .. }));
}
