/// Categorizes lexical errors for programmatic handling.
///
/// The `#[error(...)]` text of each variant is the human-readable message
/// reported for that error.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize, thiserror::Error)]
pub enum LexErrorKind {
    /// A character that cannot begin any token.
    #[error("unexpected character {0}")]
    UnexpectedCharacter(String),

    /// `'` used as a string delimiter.
    #[error("unexpected single quote character (`'`), did you mean to use a double quote (`\"`)?")]
    SingleQuote,

    /// One or two dots where `...` was required.
    #[error("unexpected `{0}`")]
    InvalidSpread(String),

    /// `01`, `-00`, ...
    #[error("invalid number, unexpected digit after 0: `{0}`")]
    UnexpectedDigitAfterZero(char),

    /// A digit was required (after `-`, `.` or an exponent marker).
    #[error("invalid number, expected digit but got {found}")]
    ExpectedDigit {
        /// Description of what was found instead, e.g. `` `x` `` or
        /// `<EOF>`.
        found: String,
    },

    #[error("unterminated string")]
    UnterminatedString,

    #[error("unterminated block string")]
    UnterminatedBlockString,

    /// A raw control character inside a string or block string.
    #[error("invalid character within string: U+{0:04X}")]
    InvalidCharacterInString(u32),

    /// A `\` followed by something other than a recognized escape.
    #[error("invalid character escape sequence: `\\{0}`")]
    InvalidEscapeSequence(String),

    /// `\u` not followed by four hex digits, or a lone surrogate.
    #[error("invalid Unicode escape sequence: `\\u{0}`")]
    InvalidUnicodeEscape(String),
}
