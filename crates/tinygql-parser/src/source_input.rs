/// A named piece of GraphQL source text.
///
/// `SourceInput` is owned by the caller and is never mutated by lexing or
/// parsing. Tokens and [`SourcePosition`](crate::SourcePosition)s borrow it,
/// so one `SourceInput` can back many tokens without copying the text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SourceInput {
    name: String,
    content: String,
    built_in: bool,
}

impl SourceInput {
    /// Creates a `SourceInput` with the given origin name (a file path, a
    /// request id, ...) and text.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            built_in: false,
        }
    }

    /// Creates a `SourceInput` that is flagged as built-in (shipped with the
    /// host program rather than supplied by a client).
    pub fn built_in(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            built_in: true,
            ..Self::new(name, content)
        }
    }

    /// The origin name used in diagnostics.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The full source text.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_built_in(&self) -> bool {
        self.built_in
    }
}
