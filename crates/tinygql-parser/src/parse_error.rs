use crate::ErrorLocation;
use crate::ErrorNote;
use crate::ErrorNotes;
use crate::LexError;
use crate::ParseErrorKind;

/// A parse error with location information and contextual notes.
///
/// Both lexical and syntactic problems surface as a `ParseError`; lexical
/// ones carry [`ParseErrorKind::Lexer`].
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct ParseError {
    /// Human-readable primary error message.
    ///
    /// Examples: "expected `:`, found `4`", "unterminated string"
    message: String,

    /// Where the error was detected.
    ///
    /// - For "unexpected token" errors: the unexpected token
    /// - For "unexpected end of input": the end of the last token
    location: ErrorLocation,

    kind: ParseErrorKind,

    notes: ErrorNotes,
}

impl ParseError {
    /// Creates a new parse error with no notes.
    pub fn new(
        message: impl Into<String>,
        location: ErrorLocation,
        kind: ParseErrorKind,
    ) -> Self {
        Self {
            message: message.into(),
            location,
            kind,
            notes: ErrorNotes::new(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn location(&self) -> &ErrorLocation {
        &self.location
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    pub fn notes(&self) -> &ErrorNotes {
        &self.notes
    }

    /// `true` if the error came from the lexer rather than the grammar.
    pub fn is_lexical(&self) -> bool {
        matches!(self.kind, ParseErrorKind::Lexer(_))
    }

    /// Adds a general note.
    pub fn add_note(&mut self, message: impl Into<String>) {
        self.notes.push(ErrorNote::general(message));
    }

    /// Adds a general note pointing at a related location.
    pub fn add_note_with_location(
        &mut self,
        message: impl Into<String>,
        location: ErrorLocation,
    ) {
        self.notes.push(ErrorNote::general_with_location(message, location));
    }

    /// Adds a help note.
    pub fn add_help(&mut self, message: impl Into<String>) {
        self.notes.push(ErrorNote::help(message));
    }

    /// Adds a note linking to the GraphQL language reference.
    pub fn add_spec(&mut self, url: impl Into<String>) {
        self.notes.push(ErrorNote::spec(url));
    }

    /// Formats this error as a diagnostic string for CLI output.
    ///
    /// Produces output like:
    /// ```text
    /// error: expected `:`, found `4`
    ///   --> query.graphql:1:17
    ///    |
    ///  1 | query { user(id 4) }
    ///    |                 ^
    ///    |
    /// ```
    ///
    /// `source` is the text the error was produced from. When `None`,
    /// snippets are omitted but the location line is still shown.
    pub fn format_detailed(&self, source: Option<&str>) -> String {
        let mut output = String::new();

        output.push_str("error: ");
        output.push_str(&self.message);
        output.push('\n');
        output.push_str(&format!("  --> {}\n", self.location));

        if let Some(src) = source
            && let Some(snippet) = format_source_snippet(src, &self.location, '^')
        {
            output.push_str(&snippet);
        }

        for note in &self.notes {
            output.push_str(&format!("   = {}: {}\n", note.kind.prefix(), note.message));
            if let (Some(location), Some(src)) = (&note.location, source)
                && let Some(snippet) = format_source_snippet(src, location, '-')
            {
                output.push_str(&snippet);
            }
        }

        output
    }

    /// Formats this error as a single-line summary.
    ///
    /// ```text
    /// query.graphql:1:17: error: expected `:`, found `4`
    /// ```
    pub fn format_oneline(&self) -> String {
        format!("{}: error: {}", self.location, self.message)
    }
}

impl From<LexError> for ParseError {
    fn from(error: LexError) -> Self {
        let (kind, location, notes) = error.into_parts();
        Self {
            message: kind.to_string(),
            location,
            kind: ParseErrorKind::Lexer(kind),
            notes,
        }
    }
}

/// Renders the line `location` points at with an underline below the
/// offending text.
fn format_source_snippet(
    source: &str,
    location: &ErrorLocation,
    underline_char: char,
) -> Option<String> {
    let line_content = nth_line(source, location.line.checked_sub(1)?)?;
    let line_num_width = location.line.to_string().len().max(2);

    // Underline up to the end of the offending text, clipped to this line.
    let underline_len = source
        .get(location.start..location.end.max(location.start))
        .and_then(|text| text.split(['\n', '\r']).next())
        .map_or(0, |text| text.chars().count())
        .max(1);

    let mut output = String::new();
    output.push_str(&format!("{:>width$} |\n", "", width = line_num_width));
    output.push_str(&format!(
        "{:>width$} | {line_content}\n",
        location.line,
        width = line_num_width,
    ));
    output.push_str(&format!(
        "{:>width$} | {:>padding$}{}\n",
        "",
        "",
        underline_char.to_string().repeat(underline_len),
        width = line_num_width,
        padding = location.column.saturating_sub(1),
    ));
    Some(output)
}

/// Returns the 0-based `index`th line of `source`, treating LF, CR and CRLF
/// as line terminators (matching the lexer's line counting).
fn nth_line(source: &str, index: usize) -> Option<&str> {
    let mut rest = source;
    for _ in 0..index {
        let terminator = rest.find(['\n', '\r'])?;
        let terminator_len = if rest[terminator..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[terminator + terminator_len..];
    }
    rest.split(['\n', '\r']).next()
}
