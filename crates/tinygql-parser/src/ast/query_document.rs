use crate::ast::AstNode;
use crate::ast::FragmentDefinition;
use crate::ast::OperationDefinition;
use inherent::inherent;

/// The root of a parsed query document.
///
/// Operations and fragments are each kept in source order.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct QueryDocument {
    pub operations: Vec<OperationDefinition>,
    pub fragments: Vec<FragmentDefinition>,
}

impl QueryDocument {
    /// Finds an operation by name, or the only operation when `name` is
    /// `None` and the document has exactly one.
    pub fn operation(&self, name: Option<&str>) -> Option<&OperationDefinition> {
        match name {
            Some(name) => self
                .operations
                .iter()
                .find(|operation| operation.name.as_deref() == Some(name)),
            None if self.operations.len() == 1 => self.operations.first(),
            None => None,
        }
    }

    /// Finds a fragment definition by name.
    pub fn fragment(&self, name: &str) -> Option<&FragmentDefinition> {
        self.fragments.iter().find(|fragment| fragment.name == name)
    }

    /// Total number of top-level definitions.
    pub fn definition_count(&self) -> usize {
        self.operations.len() + self.fragments.len()
    }
}

#[inherent]
impl AstNode for QueryDocument {
    /// Operations are written first, then fragments, one definition per
    /// line.
    pub fn append_source(&self, sink: &mut String) {
        let operations = self.operations.iter().map(|o| o as &dyn AstNode);
        let fragments = self.fragments.iter().map(|f| f as &dyn AstNode);
        for (i, definition) in operations.chain(fragments).enumerate() {
            if i > 0 {
                sink.push('\n');
            }
            definition.append_source(sink);
        }
    }
}

impl std::fmt::Display for QueryDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_source())
    }
}
