#![no_main]

use libfuzzer_sys::fuzz_target;
use tinygql_parser::SourceInput;
use tinygql_parser::lexer::QueryLexer;
use tinygql_parser::token::TokenKind;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let source = SourceInput::new("fuzz.graphql", text);

    let mut previous_end = 0;
    let mut count = 0;
    for token in QueryLexer::new(&source) {
        assert!(token.position.start() >= previous_end);
        assert!(token.position.end() <= text.len());
        previous_end = token.position.end();
        count += 1;
        if matches!(token.kind, TokenKind::Eof | TokenKind::Error) {
            break;
        }
    }
    assert!(count <= text.len() + 1);
});
