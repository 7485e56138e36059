use crate::SourcePosition;

/// Owned copy of the location an error points at.
///
/// Errors outlive the [`SourceInput`](crate::SourceInput) they were produced
/// from, so they carry the source name by value instead of borrowing it.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct ErrorLocation {
    pub source_name: String,
    /// 1-based.
    pub line: usize,
    /// 1-based, in characters.
    pub column: usize,
    /// Half-open byte range of the offending text.
    pub start: usize,
    pub end: usize,
}

impl From<&SourcePosition<'_>> for ErrorLocation {
    fn from(position: &SourcePosition<'_>) -> Self {
        Self {
            source_name: position.source().name().to_string(),
            line: position.line(),
            column: position.column(),
            start: position.start(),
            end: position.end(),
        }
    }
}

impl std::fmt::Display for ErrorLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.source_name, self.line, self.column)
    }
}
