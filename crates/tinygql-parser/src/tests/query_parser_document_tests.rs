//! Document-level tests: definition counts, ordering, partial results and
//! insensitivity to ignored tokens.

use crate::ast::OperationType;
use crate::tests::ast_utils::count_selections;
use crate::tests::utils::parse;
use crate::tests::utils::parse_ok;
use crate::SourceInput;
use crate::parse_query;

const KITCHEN_SINK: &str = r#"
# A document exercising most of the query grammar.
query HeroForEpisode($ep: Episode = JEDI, $withFriends: Boolean!) @live {
  hero(episode: $ep) {
    name
    ... on Droid { primaryFunction }
    friends @include(if: $withFriends) { ...FriendFields }
  }
}

mutation AddReview($review: ReviewInput!) {
  createReview(episode: EMPIRE, review: $review) { stars commentary }
}

fragment FriendFields on Character @deprecated {
  id
  nick: name
  appearsIn
}

{ viewer { login } }
"#;

/// Verifies definition counts and source order.
#[test]
fn kitchen_sink_counts() {
    let doc = parse_ok(KITCHEN_SINK);
    assert_eq!(doc.operations.len(), 3);
    assert_eq!(doc.fragments.len(), 1);
    assert_eq!(doc.definition_count(), 4);

    let names: Vec<_> = doc.operations.iter().map(|op| op.name.as_deref()).collect();
    assert_eq!(names, vec![Some("HeroForEpisode"), Some("AddReview"), None]);
    assert_eq!(doc.operations[1].operation_type, OperationType::Mutation);
    assert_eq!(doc.operations[2].operation_type, OperationType::Query);
    assert_eq!(count_selections(&doc), 14);
}

/// Verifies the lookup helpers on `QueryDocument`.
#[test]
fn document_lookups() {
    let doc = parse_ok(KITCHEN_SINK);
    assert!(doc.operation(Some("AddReview")).is_some());
    assert!(doc.operation(Some("Missing")).is_none());
    assert!(doc.operation(None).is_none(), "ambiguous with several operations");
    assert_eq!(doc.fragment("FriendFields").map(|f| f.type_condition.as_str()), Some("Character"));

    let single = parse_ok("{ a }");
    assert!(single.operation(None).is_some());
}

/// Verifies that an empty document is valid and has no definitions.
#[test]
fn empty_document() {
    for text in ["", "   ", "# only a comment\n", ",,,"] {
        let doc = parse_ok(text);
        assert_eq!(doc.definition_count(), 0, "{text:?}");
    }
}

/// Verifies that fragments and operations may be interleaved and each list
/// keeps source order.
#[test]
fn interleaved_definitions_keep_order() {
    let doc = parse_ok("fragment A on T { a } { x } fragment B on T { b } query Y { y }");
    let fragments: Vec<_> = doc.fragments.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(fragments, vec!["A", "B"]);
    let operations: Vec<_> = doc.operations.iter().map(|op| op.name.as_deref()).collect();
    assert_eq!(operations, vec![None, Some("Y")]);
}

/// Verifies that parsing the same input twice yields equal documents.
#[test]
fn parsing_is_deterministic() {
    assert_eq!(parse_ok(KITCHEN_SINK), parse_ok(KITCHEN_SINK));
}

/// Verifies that commas, extra whitespace and comments do not change the
/// document.
#[test]
fn ignored_tokens_do_not_change_the_document() {
    let compact = parse_ok("query Q($a:Int=1,$b:[ID!]){f(x:$a,y:[1,2]){g h}...F}fragment F on T{i}");
    let spaced = parse_ok(
        "\u{FEFF}query Q ( $a : Int = 1 $b : [ ID ! ] )\r\n\
         {\t# comment\n\
           f ( x : $a , y : [ 1 , 2 , ] , ) { g , h , }\n\
           ... F\n\
         }\n\
         # trailing comment\n\
         fragment F on T { i , }",
    );
    assert_eq!(compact, spaced);
}

/// Verifies that a failed parse keeps the definitions completed before the
/// error and drops the one in progress.
#[test]
fn partial_document_on_error() {
    let result = parse("{ a } fragment F on T { b } query Broken { c(");
    assert!(result.has_error());
    assert!(result.valid_ast().is_none());

    let doc = result.ast();
    assert_eq!(doc.operations.len(), 1);
    assert_eq!(doc.fragments.len(), 1);
    assert_eq!(doc.fragments[0].name, "F");
}

/// Verifies that the document owns its data and outlives the source.
#[test]
fn document_outlives_source() {
    let doc = {
        let source = SourceInput::new("short-lived.graphql", "{ a(x: \"y\") }");
        parse_query(&source).into_valid_ast().unwrap()
    };
    assert_eq!(doc.to_string(), "{ a(x: \"y\") }");
}

/// Verifies that built-in sources parse the same way.
#[test]
fn built_in_source() {
    let source = SourceInput::built_in("introspection.graphql", "{ __schema { types { name } } }");
    assert!(source.is_built_in());
    let result = parse_query(&source);
    assert!(result.is_ok());
}
