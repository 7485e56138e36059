use crate::ast::ast_node::append_directives;
use crate::ast::ast_node::append_selection_set;
use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Selection;
use inherent::inherent;

/// `fragment Name on Type @directives { selections }`
///
/// Grammar:
/// [Fragments](https://spec.graphql.org/September2025/#sec-Language.Fragments).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FragmentDefinition {
    /// Never `on`.
    pub name: String,
    pub type_condition: String,
    pub directives: Vec<Directive>,
    /// Never empty.
    pub selection_set: Vec<Selection>,
}

#[inherent]
impl AstNode for FragmentDefinition {
    pub fn append_source(&self, sink: &mut String) {
        sink.push_str("fragment ");
        sink.push_str(&self.name);
        sink.push_str(" on ");
        sink.push_str(&self.type_condition);
        append_directives(&self.directives, sink);
        sink.push(' ');
        append_selection_set(&self.selection_set, sink);
    }
}
