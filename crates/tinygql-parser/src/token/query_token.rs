use crate::token::TokenKind;
use crate::SourcePosition;
use std::borrow::Cow;

/// A single lexical token.
///
/// `value` is:
/// - the decoded literal for `Name`, `Int`, `Float`, `String`, `BlockString`
///   and `Comment` tokens (string delimiters and the leading `#` excluded)
/// - the symbol text for punctuators
/// - the empty string for `Eof`
/// - the error message for `Error`
///
/// Values borrow from the source text unless decoding (escapes, block-string
/// indentation) required a new buffer.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub value: Cow<'src, str>,
    pub position: SourcePosition<'src>,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, value: Cow<'src, str>, position: SourcePosition<'src>) -> Self {
        Self {
            kind,
            value,
            position,
        }
    }

    /// Returns `true` if this is a `Name` token spelled exactly `keyword`.
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.kind == TokenKind::Name && self.value == keyword
    }
}

impl std::fmt::Display for Token<'_> {
    /// Renders the token for diagnostics: punctuators and `<EOF>` as-is,
    /// everything else as its kind followed by its quoted value.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.kind.is_punctuator() || self.kind == TokenKind::Eof {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{} {:?}", self.kind, self.value.as_ref())
        }
    }
}
