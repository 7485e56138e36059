#![no_main]

use libfuzzer_sys::fuzz_target;
use tinygql_parser::SourceInput;
use tinygql_parser::parse_query;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let source = SourceInput::new("fuzz.graphql", text);
    let result = parse_query(&source);

    match result.error() {
        Some(error) => {
            let _ = error.format_detailed(Some(text));
        },
        None => {
            // Printed documents must parse back to the same tree.
            let printed = result.ast().to_string();
            let reprinted = SourceInput::new("fuzz-printed.graphql", printed);
            let reparsed = parse_query(&reprinted);
            assert_eq!(reparsed.valid_ast(), Some(result.ast()));
        },
    }
});
