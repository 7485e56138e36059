//! Literal tests for the block string value algorithm.
//!
//! <https://spec.graphql.org/September2025/#BlockStringValue()>

use crate::lexer::block_string_value;

/// Verifies that the first line keeps its indentation while the common
/// indentation of the remaining lines is stripped.
#[test]
fn first_line_is_not_dedented() {
    assert_eq!(
        block_string_value("first\n    second\n      third"),
        "first\nsecond\n  third"
    );
}

/// Verifies that blank lines do not count toward the common indentation.
#[test]
fn blank_lines_do_not_affect_indent() {
    assert_eq!(block_string_value("\n    a\n\n  \n    b"), "a\n\n\nb");
}

/// Verifies that all leading and trailing blank lines are dropped.
#[test]
fn leading_and_trailing_blank_lines_dropped() {
    assert_eq!(block_string_value("\n\n  a\n  \n\n"), "a");
}

/// Verifies that whitespace-only input becomes the empty string.
#[test]
fn whitespace_only() {
    assert_eq!(block_string_value(""), "");
    assert_eq!(block_string_value("   \n \t \n"), "");
}

/// Verifies that tabs count as indentation.
#[test]
fn tabs_are_indentation() {
    assert_eq!(block_string_value("\n\tx\n\t\ty"), "x\n\ty");
}

/// Verifies that text without indentation is left alone.
#[test]
fn no_indentation() {
    assert_eq!(block_string_value("a\nb"), "a\nb");
    assert_eq!(block_string_value("  only line  "), "  only line  ");
}

/// Verifies that interior whitespace and trailing spaces on content lines
/// are preserved.
#[test]
fn interior_whitespace_preserved() {
    assert_eq!(
        block_string_value("\n  a  b  \n    c\n"),
        "a  b  \n  c"
    );
}
