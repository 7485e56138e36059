use crate::ast::ast_node::append_directives;
use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::TypeRef;
use crate::ast::Value;
use inherent::inherent;

/// `$variable: Type = default @directives`
///
/// Grammar:
/// [Variables](https://spec.graphql.org/September2025/#sec-Language.Variables).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct VariableDefinition {
    /// The variable name without `$`.
    pub variable: String,
    pub var_type: TypeRef,
    pub directives: Vec<Directive>,
    /// Constant; never contains a `Value::Variable`.
    pub default_value: Option<Value>,
}

#[inherent]
impl AstNode for VariableDefinition {
    pub fn append_source(&self, sink: &mut String) {
        sink.push('$');
        sink.push_str(&self.variable);
        sink.push_str(": ");
        self.var_type.append_source(sink);
        if let Some(default_value) = &self.default_value {
            sink.push_str(" = ");
            default_value.append_source(sink);
        }
        append_directives(&self.directives, sink);
    }
}
