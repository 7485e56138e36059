//! The token types produced by [`QueryLexer`](crate::lexer::QueryLexer) and
//! consumed by the parser.

mod query_token;
mod token_kind;

pub use query_token::Token;
pub use token_kind::TokenKind;
