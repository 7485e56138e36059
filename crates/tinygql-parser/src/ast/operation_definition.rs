use crate::ast::ast_node::append_directives;
use crate::ast::ast_node::append_selection_set;
use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Selection;
use crate::ast::VariableDefinition;
use inherent::inherent;

/// `query`, `mutation` or `subscription`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum OperationType {
    Query,
    Mutation,
    Subscription,
}

impl OperationType {
    /// Maps an operation keyword to its type.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "query" => Some(Self::Query),
            "mutation" => Some(Self::Mutation),
            "subscription" => Some(Self::Subscription),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Subscription => "subscription",
        }
    }
}

impl std::fmt::Display for OperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A query, mutation or subscription.
///
/// The `{ ... }` shorthand produces an anonymous `Query` with no variables
/// or directives.
///
/// Grammar:
/// [Operations](https://spec.graphql.org/September2025/#sec-Language.Operations).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct OperationDefinition {
    pub operation_type: OperationType,
    pub name: Option<String>,
    pub variable_definitions: Vec<VariableDefinition>,
    pub directives: Vec<Directive>,
    /// Never empty.
    pub selection_set: Vec<Selection>,
}

impl OperationDefinition {
    /// `true` if this operation can be written with the `{ ... }` shorthand.
    pub fn is_shorthand(&self) -> bool {
        self.operation_type == OperationType::Query
            && self.name.is_none()
            && self.variable_definitions.is_empty()
            && self.directives.is_empty()
    }
}

#[inherent]
impl AstNode for OperationDefinition {
    pub fn append_source(&self, sink: &mut String) {
        if !self.is_shorthand() {
            sink.push_str(self.operation_type.as_str());
            if let Some(name) = &self.name {
                sink.push(' ');
                sink.push_str(name);
            }
            if !self.variable_definitions.is_empty() {
                sink.push('(');
                for (i, definition) in self.variable_definitions.iter().enumerate() {
                    if i > 0 {
                        sink.push_str(", ");
                    }
                    definition.append_source(sink);
                }
                sink.push(')');
            }
            append_directives(&self.directives, sink);
            sink.push(' ');
        }
        append_selection_set(&self.selection_set, sink);
    }
}
