use crate::ErrorLocation;
use crate::ErrorNote;
use crate::ErrorNotes;
use crate::LexErrorKind;

/// A lexical error: the input could not be split into tokens at
/// [`location()`](Self::location).
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{location}: error: {kind}")]
pub struct LexError {
    kind: LexErrorKind,
    location: ErrorLocation,
    notes: ErrorNotes,
}

impl LexError {
    pub fn new(kind: LexErrorKind, location: ErrorLocation) -> Self {
        Self {
            kind,
            location,
            notes: ErrorNotes::new(),
        }
    }

    pub(crate) fn with_note(mut self, note: ErrorNote) -> Self {
        self.notes.push(note);
        self
    }

    pub fn kind(&self) -> &LexErrorKind {
        &self.kind
    }

    pub fn location(&self) -> &ErrorLocation {
        &self.location
    }

    pub fn notes(&self) -> &ErrorNotes {
        &self.notes
    }

    /// The human-readable error message (without location).
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    pub(crate) fn into_parts(self) -> (LexErrorKind, ErrorLocation, ErrorNotes) {
        (self.kind, self.location, self.notes)
    }
}
