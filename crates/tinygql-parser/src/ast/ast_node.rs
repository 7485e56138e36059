use crate::ast::Argument;
use crate::ast::Directive;
use crate::ast::Selection;

/// Trait implemented by all AST node types.
///
/// All node types implement this trait via `#[inherent] impl AstNode`, so
/// `append_source()` is callable without importing the trait.
///
/// The emitted text is canonical rather than lossless: single spaces, no
/// insignificant commas, aliases only where they differ from the field name.
pub trait AstNode {
    /// Appends this node's GraphQL source representation to `sink`.
    fn append_source(&self, sink: &mut String);

    /// Returns this node's GraphQL source representation.
    fn to_source(&self) -> String {
        let mut sink = String::new();
        self.append_source(&mut sink);
        sink
    }
}

/// ` @a(x: 1) @b` (each directive preceded by a space).
pub(crate) fn append_directives(directives: &[Directive], sink: &mut String) {
    for directive in directives {
        sink.push(' ');
        directive.append_source(sink);
    }
}

/// `(a: 1, b: 2)`, or nothing when there are no arguments.
pub(crate) fn append_arguments(arguments: &[Argument], sink: &mut String) {
    if arguments.is_empty() {
        return;
    }
    sink.push('(');
    for (i, argument) in arguments.iter().enumerate() {
        if i > 0 {
            sink.push_str(", ");
        }
        argument.append_source(sink);
    }
    sink.push(')');
}

/// `{ a b { c } }`
pub(crate) fn append_selection_set(selections: &[Selection], sink: &mut String) {
    sink.push('{');
    for selection in selections {
        sink.push(' ');
        selection.append_source(sink);
    }
    sink.push_str(" }");
}
