use crate::ast::ast_node::append_arguments;
use crate::ast::ast_node::append_directives;
use crate::ast::ast_node::append_selection_set;
use crate::ast::directive::find_argument;
use crate::ast::Argument;
use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Value;
use inherent::inherent;

/// One entry of a selection set.
///
/// Grammar:
/// [Selection Sets](https://spec.graphql.org/September2025/#sec-Selection-Sets).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind")]
pub enum Selection {
    Field(Field),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}

impl Selection {
    pub fn as_field(&self) -> Option<&Field> {
        match self {
            Self::Field(field) => Some(field),
            _ => None,
        }
    }

    pub fn directives(&self) -> &[Directive] {
        match self {
            Self::Field(field) => &field.directives,
            Self::FragmentSpread(spread) => &spread.directives,
            Self::InlineFragment(inline) => &inline.directives,
        }
    }
}

#[inherent]
impl AstNode for Selection {
    pub fn append_source(&self, sink: &mut String) {
        match self {
            Self::Field(field) => field.append_source(sink),
            Self::FragmentSpread(spread) => spread.append_source(sink),
            Self::InlineFragment(inline) => inline.append_source(sink),
        }
    }
}

/// A field selection, optionally aliased, with arguments, directives and a
/// nested selection set.
///
/// `alias` is always populated: it equals `name` when no alias was written,
/// so consumers can use it as the response key unconditionally.
///
/// Grammar:
/// [Fields](https://spec.graphql.org/September2025/#sec-Language.Fields).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Field {
    pub alias: String,
    pub name: String,
    pub arguments: Vec<Argument>,
    pub directives: Vec<Directive>,
    /// `None` for leaf fields written without braces.
    pub selection_set: Option<Vec<Selection>>,
}

impl Field {
    /// `true` if an alias different from the field name was written.
    pub fn is_aliased(&self) -> bool {
        self.alias != self.name
    }

    /// The value of the first argument called `name`.
    pub fn argument(&self, name: &str) -> Option<&Value> {
        find_argument(&self.arguments, name)
    }
}

#[inherent]
impl AstNode for Field {
    pub fn append_source(&self, sink: &mut String) {
        if self.is_aliased() {
            sink.push_str(&self.alias);
            sink.push_str(": ");
        }
        sink.push_str(&self.name);
        append_arguments(&self.arguments, sink);
        append_directives(&self.directives, sink);
        if let Some(selection_set) = &self.selection_set {
            sink.push(' ');
            append_selection_set(selection_set, sink);
        }
    }
}

/// `...FragmentName @directives`
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FragmentSpread {
    /// Never `on`.
    pub name: String,
    pub directives: Vec<Directive>,
}

#[inherent]
impl AstNode for FragmentSpread {
    pub fn append_source(&self, sink: &mut String) {
        sink.push_str("...");
        sink.push_str(&self.name);
        append_directives(&self.directives, sink);
    }
}

/// `... on Type @directives { selections }` (type condition optional)
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct InlineFragment {
    pub type_condition: Option<String>,
    pub directives: Vec<Directive>,
    /// Never empty.
    pub selection_set: Vec<Selection>,
}

#[inherent]
impl AstNode for InlineFragment {
    pub fn append_source(&self, sink: &mut String) {
        sink.push_str("...");
        if let Some(type_condition) = &self.type_condition {
            sink.push_str(" on ");
            sink.push_str(type_condition);
        }
        append_directives(&self.directives, sink);
        sink.push(' ');
        append_selection_set(&self.selection_set, sink);
    }
}
