use crate::SourceInput;
use serde::ser::SerializeStruct;

/// Location of a token within a [`SourceInput`].
///
/// # Indexing Convention
///
/// - `start`/`end`: half-open byte range into [`SourceInput::content()`]
/// - `line`: 1-based line number of `start`
/// - `column`: 1-based character (not byte) column of `start`
///
/// The position never owns the text it describes; it borrows the
/// `SourceInput` for the lifetime `'src`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SourcePosition<'src> {
    start: usize,
    end: usize,
    line: usize,
    column: usize,
    source: &'src SourceInput,
}

impl<'src> SourcePosition<'src> {
    pub fn new(
        start: usize,
        end: usize,
        line: usize,
        column: usize,
        source: &'src SourceInput,
    ) -> Self {
        Self {
            start,
            end,
            line,
            column,
            source,
        }
    }

    /// Byte offset of the first byte of the token.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset one past the last byte of the token.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Returns the 1-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 1-based character column.
    pub fn column(&self) -> usize {
        self.column
    }

    /// The `SourceInput` this position points into.
    pub fn source(&self) -> &'src SourceInput {
        self.source
    }

    /// The slice of source text covered by this position.
    pub fn text(&self) -> &'src str {
        &self.source.content()[self.start..self.end]
    }
}

impl serde::Serialize for SourcePosition<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SourcePosition", 5)?;
        state.serialize_field("start", &self.start)?;
        state.serialize_field("end", &self.end)?;
        state.serialize_field("line", &self.line)?;
        state.serialize_field("column", &self.column)?;
        state.serialize_field("source", self.source.name())?;
        state.end()
    }
}
