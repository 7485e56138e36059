//! Helpers shared by the lexer tests.

use crate::lexer::QueryLexer;
use crate::token::TokenKind;
use crate::LexError;
use crate::SourceInput;

/// Collects the kinds of every token the lexer's iterator yields.
pub(super) fn token_kinds(text: &str) -> Vec<TokenKind> {
    let source = SourceInput::new("test.graphql", text);
    QueryLexer::new(&source).map(|token| token.kind).collect()
}

/// Collects `(kind, value)` pairs of every token the iterator yields.
pub(super) fn tokens(text: &str) -> Vec<(TokenKind, String)> {
    let source = SourceInput::new("test.graphql", text);
    QueryLexer::new(&source)
        .map(|token| (token.kind, token.value.into_owned()))
        .collect()
}

/// Lexes `text` as exactly one token (plus `Eof`) and returns its kind and
/// value.
pub(super) fn single_token(text: &str) -> (TokenKind, String) {
    let mut all = tokens(text);
    assert_eq!(all.len(), 2, "expected exactly one token in {text:?}: {all:?}");
    assert_eq!(all[1].0, TokenKind::Eof);
    all.swap_remove(0)
}

/// Reads tokens until the first lexical error and returns it.
pub(super) fn first_lex_error(text: &str) -> LexError {
    let source = SourceInput::new("test.graphql", text);
    let mut lexer = QueryLexer::new(&source);
    loop {
        match lexer.read_token() {
            Ok(token) if token.kind == TokenKind::Eof => {
                panic!("expected a lexical error in {text:?}");
            },
            Ok(_) => continue,
            Err(error) => return error,
        }
    }
}
