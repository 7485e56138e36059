//! Lexing of GraphQL query text into [`Token`](crate::token::Token)s.

mod block_string;
mod query_lexer;

pub use block_string::block_string_value;
pub use query_lexer::QueryLexer;

#[cfg(test)]
mod tests;
