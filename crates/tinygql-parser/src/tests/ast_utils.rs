//! Helpers for digging specific nodes out of parsed documents.

use crate::ast::Field;
use crate::ast::OperationDefinition;
use crate::ast::QueryDocument;
use crate::ast::Selection;
use crate::tests::utils::parse_ok;

/// Parses `text` and returns its only operation.
pub(super) fn only_operation(text: &str) -> OperationDefinition {
    let mut doc = parse_ok(text);
    assert_eq!(doc.operations.len(), 1, "expected exactly one operation");
    assert!(doc.fragments.is_empty(), "expected no fragments");
    doc.operations.remove(0)
}

/// Returns the field at `index` in a selection set.
pub(super) fn field_at(selections: &[Selection], index: usize) -> &Field {
    match &selections[index] {
        Selection::Field(field) => field,
        other => panic!("expected a field at index {index}, got {other:?}"),
    }
}

/// Parses `{ <selection> }` and returns its first field.
pub(super) fn first_field(text: &str) -> Field {
    let operation = only_operation(text);
    field_at(&operation.selection_set, 0).clone()
}

/// Names of the fields in a selection set, in order.
pub(super) fn field_names(selections: &[Selection]) -> Vec<&str> {
    selections
        .iter()
        .filter_map(Selection::as_field)
        .map(|field| field.name.as_str())
        .collect()
}

/// Total number of selections (at every depth) in a document.
pub(super) fn count_selections(doc: &QueryDocument) -> usize {
    fn count(selections: &[Selection]) -> usize {
        selections
            .iter()
            .map(|selection| {
                1 + match selection {
                    Selection::Field(field) => {
                        field.selection_set.as_deref().map_or(0, count)
                    },
                    Selection::FragmentSpread(_) => 0,
                    Selection::InlineFragment(inline) => count(&inline.selection_set),
                }
            })
            .sum()
    }
    doc.operations
        .iter()
        .map(|operation| count(&operation.selection_set))
        .chain(doc.fragments.iter().map(|fragment| count(&fragment.selection_set)))
        .sum()
}
