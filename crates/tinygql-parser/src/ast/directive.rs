use crate::ast::ast_node::append_arguments;
use crate::ast::AstNode;
use crate::ast::Value;
use inherent::inherent;

/// `@name(arguments)`
///
/// Grammar:
/// [Directives](https://spec.graphql.org/September2025/#sec-Language.Directives).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Directive {
    pub name: String,
    pub arguments: Vec<Argument>,
}

impl Directive {
    /// The value of the first argument called `name`.
    pub fn argument(&self, name: &str) -> Option<&Value> {
        find_argument(&self.arguments, name)
    }
}

#[inherent]
impl AstNode for Directive {
    pub fn append_source(&self, sink: &mut String) {
        sink.push('@');
        sink.push_str(&self.name);
        append_arguments(&self.arguments, sink);
    }
}

/// `name: value`
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Argument {
    pub name: String,
    pub value: Value,
}

#[inherent]
impl AstNode for Argument {
    pub fn append_source(&self, sink: &mut String) {
        sink.push_str(&self.name);
        sink.push_str(": ");
        self.value.append_source(sink);
    }
}

pub(crate) fn find_argument<'a>(arguments: &'a [Argument], name: &str) -> Option<&'a Value> {
    arguments
        .iter()
        .find(|argument| argument.name == name)
        .map(|argument| &argument.value)
}
