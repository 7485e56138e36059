/// The kind of a lexical token.
///
/// Literal payloads (names, numbers, decoded strings) live in
/// [`Token::value`](crate::token::Token::value); the kind itself is a plain
/// tag.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum TokenKind {
    /// End of input. Returned forever once the input is exhausted.
    Eof,
    /// Malformed input. Only produced by the lexer's `Iterator` adapter; the
    /// token's value holds the error message.
    Error,

    // Literals
    Name,
    Int,
    Float,
    String,
    BlockString,
    /// `# ...` up to (not including) the line terminator.
    Comment,

    // Punctuators
    /// `!`
    Bang,
    /// `$`
    Dollar,
    /// `&`
    Amp,
    /// `:`
    Colon,
    /// `=`
    Equals,
    /// `@`
    At,
    /// `|`
    Pipe,
    /// `(`
    ParenL,
    /// `)`
    ParenR,
    /// `[`
    BracketL,
    /// `]`
    BracketR,
    /// `{`
    BraceL,
    /// `}`
    BraceR,
    /// `...`
    Spread,
}

impl TokenKind {
    /// Returns `true` if this token is a punctuator.
    pub fn is_punctuator(&self) -> bool {
        self.as_punctuator_str().is_some()
    }

    /// Returns the punctuator's source text, or `None` for non-punctuator
    /// kinds.
    pub fn as_punctuator_str(&self) -> Option<&'static str> {
        match self {
            Self::Bang => Some("!"),
            Self::Dollar => Some("$"),
            Self::Amp => Some("&"),
            Self::Colon => Some(":"),
            Self::Equals => Some("="),
            Self::At => Some("@"),
            Self::Pipe => Some("|"),
            Self::ParenL => Some("("),
            Self::ParenR => Some(")"),
            Self::BracketL => Some("["),
            Self::BracketR => Some("]"),
            Self::BraceL => Some("{"),
            Self::BraceR => Some("}"),
            Self::Spread => Some("..."),

            Self::Eof
            | Self::Error
            | Self::Name
            | Self::Int
            | Self::Float
            | Self::String
            | Self::BlockString
            | Self::Comment => None,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::Eof => "<EOF>",
            Self::Error => "Error",
            Self::Name => "Name",
            Self::Int => "Int",
            Self::Float => "Float",
            Self::String => "String",
            Self::BlockString => "BlockString",
            Self::Comment => "Comment",
            punctuator => punctuator.as_punctuator_str().unwrap_or_default(),
        };
        f.write_str(text)
    }
}
