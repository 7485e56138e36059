//! Various test utils.

use crate::ast::QueryDocument;
use crate::parse_query;
use crate::ParseError;
use crate::ParseResult;
use crate::SourceInput;

pub(super) const TEST_SOURCE_NAME: &str = "test.graphql";

/// Parses `text` as a query document named `test.graphql`.
pub(super) fn parse(text: &str) -> ParseResult<QueryDocument> {
    let source = SourceInput::new(TEST_SOURCE_NAME, text);
    parse_query(&source)
}

/// Parses `text`, panicking with the rendered diagnostic if it fails.
pub(super) fn parse_ok(text: &str) -> QueryDocument {
    let source = SourceInput::new(TEST_SOURCE_NAME, text);
    let result = parse_query(&source);
    if let Some(error) = result.error() {
        panic!(
            "expected `{text}` to parse:\n{}",
            error.format_detailed(Some(source.content())),
        );
    }
    result.into_ast()
}

/// Parses `text`, panicking if it succeeds.
pub(super) fn parse_err(text: &str) -> ParseError {
    match parse(text).into_parts() {
        (_, Some(error)) => error,
        (doc, None) => panic!("expected `{text}` to fail, got {doc:#?}"),
    }
}
