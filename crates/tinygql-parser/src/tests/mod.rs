mod ast_utils;
mod parse_error_tests;
mod query_parser_document_tests;
mod query_parser_error_tests;
mod utils;
