//! AST for GraphQL query documents.
//!
//! The tree is built by one [`parse_query()`](crate::parse_query) call and
//! exclusively owned by the returned [`QueryDocument`]. Nodes own their
//! strings, so a document outlives the [`SourceInput`](crate::SourceInput)
//! it was parsed from.
//!
//! Every node implements [`AstNode`], which prints the node back to compact
//! GraphQL text. Parsing that text again yields an equal tree.

mod ast_node;
mod directive;
mod fragment_definition;
mod operation_definition;
mod query_document;
mod selection;
mod type_ref;
mod value;
mod variable_definition;

pub use ast_node::AstNode;
pub use directive::Argument;
pub use directive::Directive;
pub use fragment_definition::FragmentDefinition;
pub use operation_definition::OperationDefinition;
pub use operation_definition::OperationType;
pub use query_document::QueryDocument;
pub use selection::Field;
pub use selection::FragmentSpread;
pub use selection::InlineFragment;
pub use selection::Selection;
pub use type_ref::TypeRef;
pub use value::ObjectField;
pub use value::Value;
pub use value::ValueKind;
pub use variable_definition::VariableDefinition;
