//! Generated query documents for scaling benchmarks.

use std::fmt::Write;

/// A query whose selection sets nest `depth` levels deep:
/// `{ node { id node { id ... leaf } } }`.
pub fn nested_selections(depth: usize) -> String {
    let mut out = String::with_capacity(depth * 24);
    for level in 0..depth {
        let indent = "  ".repeat(level);
        writeln!(out, "{indent}{}{{", if level == 0 { "" } else { "node " }).unwrap();
        writeln!(out, "{indent}  id").unwrap();
    }
    writeln!(out, "{}leaf", "  ".repeat(depth)).unwrap();
    for level in (0..depth).rev() {
        writeln!(out, "{}}}", "  ".repeat(level)).unwrap();
    }
    out
}

/// A document with `count` named operations followed by `count` fragments.
pub fn many_definitions(count: usize) -> String {
    let mut out = String::with_capacity(count * 120);
    for i in 0..count {
        writeln!(
            out,
            "query Op{i}($id: ID!, $n: Int = {i}) {{ node(id: $id) {{ id ...Frag{i} alias{i}: name }} }}",
        )
        .unwrap();
    }
    for i in 0..count {
        writeln!(out, "fragment Frag{i} on Node {{ createdAt updatedAt }}").unwrap();
    }
    out
}

/// A query whose single argument is a list nested `depth` deep,
/// e.g. `[[[1]]]`.
pub fn nested_list_value(depth: usize) -> String {
    format!("{{ field(arg: {}1{}) }}\n", "[".repeat(depth), "]".repeat(depth))
}

/// A query with `count` string arguments that need escape decoding.
pub fn escaped_strings(count: usize) -> String {
    let mut out = String::with_capacity(count * 40);
    out.push_str("{\n");
    for i in 0..count {
        writeln!(out, "  f{i}(s: \"line\\n\\t\\\"quoted\\\" \\u00e9 {i}\")").unwrap();
    }
    out.push_str("}\n");
    out
}
