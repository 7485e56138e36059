//! A cursor-based lexer over a [`SourceInput`].
//!
//! Each call to [`QueryLexer::read_token()`] skips ignored characters
//! (whitespace, commas, line terminators, byte-order marks) and returns
//! exactly one token. Token values borrow from the source text; a buffer is
//! only allocated when a string contains escapes or when a block string has
//! to be normalized.
//!
//! # Usage
//!
//! ```rust
//! use tinygql_parser::SourceInput;
//! use tinygql_parser::lexer::QueryLexer;
//! use tinygql_parser::token::TokenKind;
//!
//! let source = SourceInput::new("example", "{ name }");
//! let kinds: Vec<TokenKind> =
//!     QueryLexer::new(&source).map(|token| token.kind).collect();
//! assert_eq!(kinds, vec![
//!     TokenKind::BraceL,
//!     TokenKind::Name,
//!     TokenKind::BraceR,
//!     TokenKind::Eof,
//! ]);
//! ```

use crate::token::Token;
use crate::token::TokenKind;
use crate::ErrorLocation;
use crate::ErrorNote;
use crate::LexError;
use crate::LexErrorKind;
use crate::SourceInput;
use crate::SourcePosition;
use std::borrow::Cow;

/// Snapshot of the lexer's cursor, used to mark where a token starts.
#[derive(Clone, Copy, Debug)]
struct Cursor {
    offset: usize,
    line: usize,
    column: usize,
}

/// Lexer over a borrowed [`SourceInput`].
///
/// The `'src` lifetime ties every produced token (and its position) to the
/// source input.
pub struct QueryLexer<'src> {
    source: &'src SourceInput,

    /// Shortcut for `source.content()`.
    text: &'src str,

    /// The remaining text to lex is `&text[curr_byte_offset..]`.
    curr_byte_offset: usize,

    /// Current 1-based line number.
    curr_line: usize,

    /// Current 1-based character column.
    curr_column: usize,

    /// Whether the previous character was `\r`, so that the `\n` of a `\r\n`
    /// pair does not count as a second line break.
    last_char_was_cr: bool,

    /// Whether the `Iterator` impl has yielded its final token.
    finished: bool,
}

impl<'src> QueryLexer<'src> {
    pub fn new(source: &'src SourceInput) -> Self {
        Self {
            source,
            text: source.content(),
            curr_byte_offset: 0,
            curr_line: 1,
            curr_column: 1,
            last_char_was_cr: false,
            finished: false,
        }
    }

    /// The source input being lexed.
    pub fn source(&self) -> &'src SourceInput {
        self.source
    }

    /// Lexes the next token.
    ///
    /// Returns `Eof` forever once the input is exhausted. On malformed input
    /// returns a [`LexError`]; the cursor is left just past the offending
    /// text, so calling again resumes lexing after it.
    pub fn read_token(&mut self) -> Result<Token<'src>, LexError> {
        self.skip_ignored();

        let start = self.cursor();
        let Some(ch) = self.peek_char() else {
            return Ok(self.make_token(TokenKind::Eof, Cow::Borrowed(""), start));
        };

        if let Some(kind) = punctuator_kind(ch) {
            self.consume();
            let symbol = kind.as_punctuator_str().unwrap_or_default();
            return Ok(self.make_token(kind, Cow::Borrowed(symbol), start));
        }

        match ch {
            '#' => Ok(self.lex_comment(start)),
            '.' => self.lex_spread(start),
            '"' if self.remaining().starts_with("\"\"\"") => self.lex_block_string(start),
            '"' => self.lex_string(start),
            '\'' => {
                self.consume();
                Err(self
                    .make_error(LexErrorKind::SingleQuote, start)
                    .with_note(ErrorNote::help("GraphQL strings are delimited by `\"`")))
            },
            c if is_name_start(c) => Ok(self.lex_name(start)),
            c if c == '-' || c.is_ascii_digit() => self.lex_number(start),
            c => {
                self.consume();
                Err(self.make_error(LexErrorKind::UnexpectedCharacter(describe_char(c)), start))
            },
        }
    }

    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    fn remaining(&self) -> &'src str {
        &self.text[self.curr_byte_offset..]
    }

    fn cursor(&self) -> Cursor {
        Cursor {
            offset: self.curr_byte_offset,
            line: self.curr_line,
            column: self.curr_column,
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// `peek_char_nth(0)` is equivalent to `peek_char()`.
    fn peek_char_nth(&self, n: usize) -> Option<char> {
        self.remaining().chars().nth(n)
    }

    /// Consumes the next character and updates position tracking.
    ///
    /// `\n`, `\r` and `\r\n` each count as exactly one line break.
    fn consume(&mut self) -> Option<char> {
        let ch = self.peek_char()?;

        if ch == '\n' {
            if self.last_char_was_cr {
                self.last_char_was_cr = false;
            } else {
                self.curr_line += 1;
                self.curr_column = 1;
            }
        } else if ch == '\r' {
            self.curr_line += 1;
            self.curr_column = 1;
            self.last_char_was_cr = true;
        } else {
            self.curr_column += 1;
            self.last_char_was_cr = false;
        }

        self.curr_byte_offset += ch.len_utf8();
        Some(ch)
    }

    fn consume_n(&mut self, n: usize) {
        for _ in 0..n {
            self.consume();
        }
    }

    /// Position spanning from `start` to the current cursor.
    fn make_position(&self, start: Cursor) -> SourcePosition<'src> {
        SourcePosition::new(
            start.offset,
            self.curr_byte_offset,
            start.line,
            start.column,
            self.source,
        )
    }

    fn make_token(&self, kind: TokenKind, value: Cow<'src, str>, start: Cursor) -> Token<'src> {
        Token::new(kind, value, self.make_position(start))
    }

    /// Error located from `start` to the current cursor.
    fn make_error(&self, kind: LexErrorKind, start: Cursor) -> LexError {
        log::trace!(
            "{}:{}:{}: lexical error: {kind}",
            self.source.name(),
            start.line,
            start.column,
        );
        LexError::new(kind, self.make_location(start))
    }

    fn make_location(&self, start: Cursor) -> ErrorLocation {
        ErrorLocation::from(&self.make_position(start))
    }

    // =========================================================================
    // Ignored characters and comments
    // =========================================================================

    /// Skips the characters GraphQL ignores between tokens: space, tab,
    /// comma, line terminators and the Unicode BOM.
    ///
    /// See: <https://spec.graphql.org/September2025/#sec-Language.Source-Text.Ignored-Tokens>
    fn skip_ignored(&mut self) {
        while let Some(ch) = self.peek_char() {
            match ch {
                ' ' | '\t' | ',' | '\n' | '\r' | '\u{FEFF}' => {
                    self.consume();
                },
                _ => break,
            }
        }
    }

    /// Lexes a `#` comment. The value excludes the `#` and stops before the
    /// line terminator.
    fn lex_comment(&mut self, start: Cursor) -> Token<'src> {
        self.consume();
        let content_start = self.curr_byte_offset;
        let rest = self.remaining().as_bytes();
        let content_len = memchr::memchr2(b'\n', b'\r', rest).unwrap_or(rest.len());
        let content = &self.text[content_start..content_start + content_len];

        // No line terminators inside, so only the column moves.
        self.curr_byte_offset += content_len;
        self.curr_column += content.chars().count();
        self.last_char_was_cr = false;

        self.make_token(TokenKind::Comment, Cow::Borrowed(content), start)
    }

    // =========================================================================
    // Punctuator-like tokens
    // =========================================================================

    /// Lexes `...`. One or two dots are an error.
    fn lex_spread(&mut self, start: Cursor) -> Result<Token<'src>, LexError> {
        if self.remaining().starts_with("...") {
            self.consume_n(3);
            return Ok(self.make_token(TokenKind::Spread, Cow::Borrowed("..."), start));
        }

        if self.remaining().starts_with("..") {
            self.consume_n(2);
            return Err(self
                .make_error(LexErrorKind::InvalidSpread("..".to_string()), start)
                .with_note(ErrorNote::help(
                    "add one more `.` to form the spread operator `...`",
                )));
        }

        self.consume();
        Err(self.make_error(LexErrorKind::InvalidSpread(".".to_string()), start))
    }

    /// Lexes a name: `/[_A-Za-z][_0-9A-Za-z]*/`.
    ///
    /// Keywords are not special here; `query`, `on`, `true`, ... are plain
    /// names that the parser recognizes by value.
    fn lex_name(&mut self, start: Cursor) -> Token<'src> {
        let name_len = self
            .remaining()
            .bytes()
            .take_while(|b| is_name_continue(char::from(*b)))
            .count();
        let name = &self.text[start.offset..start.offset + name_len];

        // Names are ASCII: one byte per column.
        self.curr_byte_offset += name_len;
        self.curr_column += name_len;
        self.last_char_was_cr = false;

        self.make_token(TokenKind::Name, Cow::Borrowed(name), start)
    }

    // =========================================================================
    // Number lexing
    // =========================================================================

    /// Lexes an `Int` or `Float`.
    ///
    /// ```text
    /// IntValue   : -? (0 | [1-9][0-9]*)
    /// FloatValue : IntValue ('.' [0-9]+)? ([eE] [+-]? [0-9]+)?
    /// ```
    ///
    /// The token is a `Float` if a fractional or exponent part was consumed.
    fn lex_number(&mut self, start: Cursor) -> Result<Token<'src>, LexError> {
        if self.peek_char() == Some('-') {
            self.consume();
        }

        match self.peek_char() {
            Some('0') => {
                self.consume();
                if let Some(digit) = self.peek_char()
                    && digit.is_ascii_digit()
                {
                    self.consume();
                    return Err(self
                        .make_error(LexErrorKind::UnexpectedDigitAfterZero(digit), start)
                        .with_note(ErrorNote::spec(
                            "https://spec.graphql.org/September2025/#sec-Int-Value",
                        )));
                }
            },
            _ => self.lex_digits(start)?,
        }

        let mut is_float = false;

        if self.peek_char() == Some('.') {
            is_float = true;
            self.consume();
            self.lex_digits(start)?;
        }

        if matches!(self.peek_char(), Some('e' | 'E')) {
            is_float = true;
            self.consume();
            if matches!(self.peek_char(), Some('+' | '-')) {
                self.consume();
            }
            self.lex_digits(start)?;
        }

        let kind = if is_float {
            TokenKind::Float
        } else {
            TokenKind::Int
        };
        let text = &self.text[start.offset..self.curr_byte_offset];
        Ok(self.make_token(kind, Cow::Borrowed(text), start))
    }

    /// Consumes one or more ASCII digits.
    fn lex_digits(&mut self, number_start: Cursor) -> Result<(), LexError> {
        let next = self.peek_char();
        if !next.is_some_and(|ch| ch.is_ascii_digit()) {
            return Err(self.make_error(
                LexErrorKind::ExpectedDigit {
                    found: describe_next(next),
                },
                number_start,
            ));
        }
        while self.peek_char().is_some_and(|ch| ch.is_ascii_digit()) {
            self.consume();
        }
        Ok(())
    }

    // =========================================================================
    // String lexing
    // =========================================================================

    /// Lexes a single-line string and decodes its escape sequences.
    ///
    /// The token's position covers both quotes; its value excludes them.
    fn lex_string(&mut self, start: Cursor) -> Result<Token<'src>, LexError> {
        self.consume();
        let content_start = self.curr_byte_offset;

        // Only allocated once an escape sequence shows up.
        let mut decoded: Option<String> = None;
        let mut chunk_start = content_start;

        loop {
            let here = self.cursor();
            match self.peek_char() {
                None => {
                    let opened_at = self.make_location(start);
                    return Err(self
                        .make_error(LexErrorKind::UnterminatedString, here)
                        .with_note(ErrorNote::general_with_location(
                            "string started here",
                            opened_at,
                        )));
                },
                Some('\n' | '\r') => {
                    return Err(self
                        .make_error(LexErrorKind::UnterminatedString, here)
                        .with_note(ErrorNote::help(
                            "use a block string (`\"\"\"`) for multi-line strings, or escape \
                             the line break with `\\n`",
                        )));
                },
                Some('"') => {
                    let content = &self.text[chunk_start..self.curr_byte_offset];
                    self.consume();
                    let value = match decoded {
                        None => Cow::Borrowed(content),
                        Some(mut buffer) => {
                            buffer.push_str(content);
                            Cow::Owned(buffer)
                        },
                    };
                    return Ok(self.make_token(TokenKind::String, value, start));
                },
                Some('\\') => {
                    let preceding = &self.text[chunk_start..self.curr_byte_offset];
                    self.consume();
                    let ch = self.lex_escape_sequence(here)?;
                    let buffer = decoded.get_or_insert_with(String::new);
                    buffer.push_str(preceding);
                    buffer.push(ch);
                    chunk_start = self.curr_byte_offset;
                },
                Some(ch) if is_disallowed_control(ch, false) => {
                    self.consume();
                    return Err(self.make_error(
                        LexErrorKind::InvalidCharacterInString(u32::from(ch)),
                        here,
                    ));
                },
                Some(_) => {
                    self.consume();
                },
            }
        }
    }

    /// Decodes the escape sequence following a `\` (already consumed).
    fn lex_escape_sequence(&mut self, escape_start: Cursor) -> Result<char, LexError> {
        let ch = match self.peek_char() {
            None | Some('\n' | '\r') => {
                return Err(self.make_error(LexErrorKind::UnterminatedString, escape_start));
            },
            Some(ch) => ch,
        };
        self.consume();

        match ch {
            '"' => Ok('"'),
            '\\' => Ok('\\'),
            '/' => Ok('/'),
            'b' => Ok('\u{0008}'),
            'f' => Ok('\u{000C}'),
            'n' => Ok('\n'),
            'r' => Ok('\r'),
            't' => Ok('\t'),
            'u' => self.lex_unicode_escape(escape_start),
            other => Err(self.make_error(
                LexErrorKind::InvalidEscapeSequence(other.to_string()),
                escape_start,
            )),
        }
    }

    /// Decodes the four hex digits of a `\uXXXX` escape.
    ///
    /// A high surrogate immediately followed by a `\uXXXX` low surrogate is
    /// combined into one scalar value; any other surrogate is an error.
    fn lex_unicode_escape(&mut self, escape_start: Cursor) -> Result<char, LexError> {
        let high = self.lex_hex4(escape_start)?;

        let code_point = if (0xD800..=0xDBFF).contains(&high) {
            let low = self
                .remaining()
                .strip_prefix("\\u")
                .and_then(|rest| rest.get(..4))
                .and_then(|digits| u32::from_str_radix(digits, 16).ok())
                .filter(|low| (0xDC00..=0xDFFF).contains(low));
            match low {
                Some(low) => {
                    self.consume_n(6);
                    0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00)
                },
                None => high,
            }
        } else {
            high
        };

        char::from_u32(code_point).ok_or_else(|| {
            self.make_error(
                LexErrorKind::InvalidUnicodeEscape(format!("{high:04X}")),
                escape_start,
            )
        })
    }

    fn lex_hex4(&mut self, escape_start: Cursor) -> Result<u32, LexError> {
        let digits = self.remaining().get(..4).filter(|digits| {
            digits.bytes().all(|b| b.is_ascii_hexdigit())
        });

        match digits.and_then(|digits| u32::from_str_radix(digits, 16).ok()) {
            Some(value) => {
                self.consume_n(4);
                Ok(value)
            },
            None => {
                let shown: String = self
                    .remaining()
                    .chars()
                    .take(4)
                    .take_while(|ch| !matches!(ch, '"' | '\n' | '\r'))
                    .collect();
                self.consume_n(shown.chars().count());
                Err(self.make_error(LexErrorKind::InvalidUnicodeEscape(shown), escape_start))
            },
        }
    }

    /// Lexes a `"""` block string.
    ///
    /// Only `\"""` is an escape. Line terminators are normalized to `\n`
    /// before the common indentation is removed (see
    /// [`block_string_value()`](super::block_string_value)).
    fn lex_block_string(&mut self, start: Cursor) -> Result<Token<'src>, LexError> {
        self.consume_n(3);

        let mut raw = String::new();
        let mut chunk_start = self.curr_byte_offset;

        loop {
            let here = self.cursor();
            let remaining = self.remaining();
            match self.peek_char() {
                None => {
                    let opened_at = self.make_location(start);
                    return Err(self
                        .make_error(LexErrorKind::UnterminatedBlockString, here)
                        .with_note(ErrorNote::general_with_location(
                            "block string started here",
                            opened_at,
                        )));
                },
                Some('"') if remaining.starts_with("\"\"\"") => {
                    raw.push_str(&self.text[chunk_start..self.curr_byte_offset]);
                    self.consume_n(3);
                    break;
                },
                Some('\\') if remaining.starts_with("\\\"\"\"") => {
                    raw.push_str(&self.text[chunk_start..self.curr_byte_offset]);
                    raw.push_str("\"\"\"");
                    self.consume_n(4);
                    chunk_start = self.curr_byte_offset;
                },
                Some('\r') => {
                    raw.push_str(&self.text[chunk_start..self.curr_byte_offset]);
                    raw.push('\n');
                    self.consume();
                    if self.peek_char() == Some('\n') {
                        self.consume();
                    }
                    chunk_start = self.curr_byte_offset;
                },
                Some(ch) if is_disallowed_control(ch, true) => {
                    self.consume();
                    return Err(self.make_error(
                        LexErrorKind::InvalidCharacterInString(u32::from(ch)),
                        here,
                    ));
                },
                Some(_) => {
                    self.consume();
                },
            }
        }

        let value = super::block_string_value(&raw);
        Ok(self.make_token(TokenKind::BlockString, Cow::Owned(value), start))
    }
}

// =============================================================================
// Iterator implementation
// =============================================================================

/// Yields tokens up to and including the first `Eof`.
///
/// A lexical error is yielded once as a [`TokenKind::Error`] token whose
/// value is the error message, and ends the iteration. Use
/// [`QueryLexer::read_token()`] to get the structured [`LexError`].
impl<'src> Iterator for QueryLexer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.read_token() {
            Ok(token) => {
                if token.kind == TokenKind::Eof {
                    self.finished = true;
                }
                Some(token)
            },
            Err(error) => {
                self.finished = true;
                let location = error.location();
                let position = SourcePosition::new(
                    location.start,
                    location.end,
                    location.line,
                    location.column,
                    self.source,
                );
                Some(Token::new(TokenKind::Error, Cow::Owned(error.message()), position))
            },
        }
    }
}

// =============================================================================
// Helper functions
// =============================================================================

fn punctuator_kind(ch: char) -> Option<TokenKind> {
    let kind = match ch {
        '!' => TokenKind::Bang,
        '$' => TokenKind::Dollar,
        '&' => TokenKind::Amp,
        ':' => TokenKind::Colon,
        '=' => TokenKind::Equals,
        '@' => TokenKind::At,
        '|' => TokenKind::Pipe,
        '(' => TokenKind::ParenL,
        ')' => TokenKind::ParenR,
        '[' => TokenKind::BracketL,
        ']' => TokenKind::BracketR,
        '{' => TokenKind::BraceL,
        '}' => TokenKind::BraceR,
        _ => return None,
    };
    Some(kind)
}

/// See: <https://spec.graphql.org/September2025/#NameStart>
fn is_name_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

/// See: <https://spec.graphql.org/September2025/#NameContinue>
fn is_name_continue(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphanumeric()
}

/// Control characters below U+0020 are not allowed raw in strings, except
/// tab (and LF/CR in block strings).
fn is_disallowed_control(ch: char, is_block: bool) -> bool {
    match ch {
        '\t' => false,
        '\n' | '\r' => !is_block,
        ch => u32::from(ch) < 0x20,
    }
}

/// Describes a character for error messages: printable characters in
/// backticks, invisible ones by code point.
fn describe_char(ch: char) -> String {
    if ch.is_control() || (ch.is_whitespace() && ch != ' ') || ch == '\u{200B}' {
        format!("U+{:04X}", u32::from(ch))
    } else {
        format!("`{ch}`")
    }
}

fn describe_next(ch: Option<char>) -> String {
    ch.map_or_else(|| "<EOF>".to_string(), describe_char)
}
