//! Result type for parsing operations that may produce partial results.

use crate::ParseError;

/// The result of a parsing operation.
///
/// Unlike `Result<T, E>`, a `ParseResult` always carries an AST, plus the
/// first error encountered (if any). Parsing stops at the first error, so on
/// failure the AST holds only the definitions that were completed before it.
///
/// # Accessing the AST
///
/// - [`valid_ast()`](Self::valid_ast) returns the AST only if parsing was
///   completely successful. Anything that executes a document must use this.
///
/// - [`ast()`](Self::ast) returns the AST regardless of errors, for tools that
///   want best-effort results (formatters, editors, logging).
///
/// # Example
///
/// ```
/// # use tinygql_parser::SourceInput;
/// # use tinygql_parser::parse_query;
/// let source = SourceInput::new("query.graphql", "{ user { name } }");
/// let result = parse_query(&source);
///
/// if let Some(doc) = result.valid_ast() {
///     assert_eq!(doc.operations.len(), 1);
/// }
///
/// if let Some(error) = result.error() {
///     eprintln!("{}", error.format_detailed(Some(source.content())));
/// }
/// ```
#[derive(Debug)]
pub struct ParseResult<TAst> {
    ast: TAst,
    error: Option<ParseError>,
}

impl<TAst> ParseResult<TAst> {
    /// Creates a successful parse result with no error.
    pub(crate) fn ok(ast: TAst) -> Self {
        Self { ast, error: None }
    }

    /// Creates a result holding a partial AST and the error that stopped the
    /// parse.
    pub(crate) fn partial(ast: TAst, error: ParseError) -> Self {
        Self {
            ast,
            error: Some(error),
        }
    }

    /// Returns the AST only if parsing was completely successful.
    pub fn valid_ast(&self) -> Option<&TAst> {
        if self.error.is_none() {
            Some(&self.ast)
        } else {
            None
        }
    }

    /// Returns the AST whether or not an error occurred.
    ///
    /// Check [`has_error()`](Self::has_error) to find out whether the AST is
    /// partial.
    pub fn ast(&self) -> &TAst {
        &self.ast
    }

    /// Consuming version of [`valid_ast()`](Self::valid_ast).
    pub fn into_valid_ast(self) -> Option<TAst> {
        if self.error.is_none() {
            Some(self.ast)
        } else {
            None
        }
    }

    /// Consuming version of [`ast()`](Self::ast).
    pub fn into_ast(self) -> TAst {
        self.ast
    }

    /// Splits the result into the (possibly partial) AST and the error.
    pub fn into_parts(self) -> (TAst, Option<ParseError>) {
        (self.ast, self.error)
    }

    /// The first error encountered, if any.
    pub fn error(&self) -> Option<&ParseError> {
        self.error.as_ref()
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Formats the error (if any) for display.
    ///
    /// `source` is used for snippet extraction.
    pub fn format_error(&self, source: Option<&str>) -> Option<String> {
        self.error.as_ref().map(|e| e.format_detailed(source))
    }
}

impl<TAst> From<ParseResult<TAst>> for Result<TAst, ParseError> {
    /// Converts to a standard `Result`, discarding a partial AST.
    fn from(result: ParseResult<TAst>) -> Self {
        match result.error {
            None => Ok(result.ast),
            Some(error) => Err(error),
        }
    }
}
