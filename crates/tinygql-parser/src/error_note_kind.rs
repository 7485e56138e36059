/// The kind of an error note (determines how the note is rendered).
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
pub enum ErrorNoteKind {
    /// Context about the error.
    ///
    /// Rendered as `= note: ...` in CLI output.
    General,

    /// Actionable suggestion for fixing the error.
    ///
    /// Rendered as `= help: ...` in CLI output.
    /// Example: "did you mean to use a double quote (`\"`)?"
    Help,

    /// Link to the relevant section of the GraphQL language reference.
    ///
    /// Rendered as `= spec: ...` in CLI output.
    Spec,
}

impl ErrorNoteKind {
    pub(crate) fn prefix(&self) -> &'static str {
        match self {
            Self::General => "note",
            Self::Help => "help",
            Self::Spec => "spec",
        }
    }
}
