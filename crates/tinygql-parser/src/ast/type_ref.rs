use crate::ast::AstNode;
use inherent::inherent;

/// A type reference in a variable definition: `ID`, `[Int!]`, `[[String]]!`.
///
/// `non_null` applies to this reference only; `[Int!]` is a nullable list
/// whose `elem` is non-null.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
#[serde(tag = "kind")]
pub enum TypeRef {
    Named {
        name: String,
        non_null: bool,
    },
    List {
        elem: Box<TypeRef>,
        non_null: bool,
    },
}

impl TypeRef {
    /// The type name, for a named type.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Named { name, .. } => Some(name.as_str()),
            Self::List { .. } => None,
        }
    }

    /// The element type, for a list type.
    pub fn elem(&self) -> Option<&TypeRef> {
        match self {
            Self::Named { .. } => None,
            Self::List { elem, .. } => Some(elem),
        }
    }

    pub fn non_null(&self) -> bool {
        match self {
            Self::Named { non_null, .. } | Self::List { non_null, .. } => *non_null,
        }
    }

    /// The named type at the bottom of any list wrappers.
    pub fn innermost_name(&self) -> &str {
        match self {
            Self::Named { name, .. } => name,
            Self::List { elem, .. } => elem.innermost_name(),
        }
    }

    pub(crate) fn set_non_null(&mut self) {
        match self {
            Self::Named { non_null, .. } | Self::List { non_null, .. } => *non_null = true,
        }
    }
}

#[inherent]
impl AstNode for TypeRef {
    pub fn append_source(&self, sink: &mut String) {
        match self {
            Self::Named { name, .. } => sink.push_str(name),
            Self::List { elem, .. } => {
                sink.push('[');
                elem.append_source(sink);
                sink.push(']');
            },
        }
        if self.non_null() {
            sink.push('!');
        }
    }
}

impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_source())
    }
}
