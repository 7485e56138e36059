//! A lexer and recursive descent parser for GraphQL query documents.
//!
//! The pipeline is [`SourceInput`] → [`lexer::QueryLexer`] →
//! [`QueryParser`] → [`ast::QueryDocument`]. Every token carries a
//! [`SourcePosition`] (byte span, 1-based line and column) so diagnostics
//! point at exact source locations.
//!
//! ```
//! use tinygql_parser::SourceInput;
//! use tinygql_parser::ast::Selection;
//! use tinygql_parser::parse_query;
//!
//! let source = SourceInput::new("query.graphql", "{ user(id: 4) { name } }");
//! let doc = parse_query(&source).into_valid_ast().unwrap();
//!
//! let Selection::Field(user) = &doc.operations[0].selection_set[0] else {
//!     panic!("expected a field");
//! };
//! assert_eq!(user.name, "user");
//! assert_eq!(user.argument("id").and_then(|v| v.raw()), Some("4"));
//! ```

pub mod ast;
mod error_location;
mod error_note;
mod error_note_kind;
mod lex_error;
mod lex_error_kind;
pub mod lexer;
mod parse_error;
mod parse_error_kind;
mod parse_result;
mod query_parser;
mod source_input;
mod source_position;
pub mod token;

pub use error_location::ErrorLocation;
pub use error_note::ErrorNote;
pub use error_note::ErrorNotes;
pub use error_note_kind::ErrorNoteKind;
pub use lex_error::LexError;
pub use lex_error_kind::LexErrorKind;
pub use parse_error::ParseError;
pub use parse_error_kind::ParseErrorKind;
pub use parse_result::ParseResult;
pub use query_parser::QueryParser;
pub use query_parser::parse_query;
pub use source_input::SourceInput;
pub use source_position::SourcePosition;

#[cfg(test)]
mod tests;
