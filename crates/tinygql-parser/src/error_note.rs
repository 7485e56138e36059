use crate::ErrorLocation;
use crate::ErrorNoteKind;
use smallvec::SmallVec;

/// Extra context attached to a [`LexError`](crate::LexError) or
/// [`ParseError`](crate::ParseError).
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct ErrorNote {
    pub kind: ErrorNoteKind,
    pub message: String,

    /// Related location (e.g. where an unterminated string was opened).
    pub location: Option<ErrorLocation>,
}

impl ErrorNote {
    pub fn general(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorNoteKind::General,
            message: message.into(),
            location: None,
        }
    }

    pub fn general_with_location(message: impl Into<String>, location: ErrorLocation) -> Self {
        Self {
            kind: ErrorNoteKind::General,
            message: message.into(),
            location: Some(location),
        }
    }

    pub fn help(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorNoteKind::Help,
            message: message.into(),
            location: None,
        }
    }

    pub fn spec(url: impl Into<String>) -> Self {
        Self {
            kind: ErrorNoteKind::Spec,
            message: url.into(),
            location: None,
        }
    }
}

/// Most errors carry zero to two notes, so these live inline.
pub type ErrorNotes = SmallVec<[ErrorNote; 2]>;
