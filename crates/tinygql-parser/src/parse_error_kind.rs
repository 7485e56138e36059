use crate::LexErrorKind;

/// Categorizes parse errors for programmatic handling.
///
/// Each variant contains minimal data needed for programmatic decisions.
/// The full human-readable text is [`ParseError::message()`](crate::ParseError::message).
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ParseErrorKind {
    /// The lexer rejected the input while the parser was pulling tokens.
    #[error("lexer error: {0}")]
    Lexer(LexErrorKind),

    /// Expected specific token(s) but found something else.
    ///
    /// # Example
    /// ```text
    /// query { user(id 4) }
    ///                 ^ expected `:`, found `4`
    /// ```
    #[error("unexpected token: `{found}`")]
    UnexpectedToken {
        /// What was expected (e.g. ``["`:`"]``, `["name"]`).
        expected: Vec<String>,
        /// Description of what was found.
        found: String,
    },

    /// The document ended before a complete construct was parsed.
    #[error("unexpected end of input")]
    UnexpectedEof {
        expected: Vec<String>,
    },

    /// A delimited list that requires at least one element was empty
    /// (`{}` selection sets, `()` argument lists, ...).
    #[error("empty {construct}")]
    EmptyConstruct {
        construct: String,
    },

    /// A name that is reserved in this position (`fragment on on X`).
    #[error("reserved name: `{name}`")]
    ReservedName {
        name: String,
    },

    /// A `$variable` inside a constant value.
    #[error("variable not allowed in {context}")]
    VariableNotAllowed {
        context: String,
    },

    /// Values, selection sets or list types nested beyond the parser's
    /// recursion limit.
    #[error("nesting deeper than {limit} levels")]
    NestingTooDeep {
        limit: usize,
    },
}
