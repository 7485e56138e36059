use crate::ast::AstNode;
use inherent::inherent;
use std::num::ParseFloatError;
use std::num::ParseIntError;

/// The tag of a [`Value`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum ValueKind {
    Variable,
    Int,
    Float,
    String,
    BlockString,
    Boolean,
    Null,
    Enum,
    List,
    Object,
}

/// A GraphQL input value literal (or variable reference).
///
/// Scalars keep their text as written: `Int`/`Float` hold the lexeme,
/// `String`/`BlockString` hold the token value (escapes decoded, block
/// indentation removed), `Variable` holds the variable name without `$`.
/// Coercion against a schema type is left to the consumer; see
/// [`parse_int()`](Self::parse_int) and [`parse_float()`](Self::parse_float)
/// for the common conversions.
///
/// Grammar:
/// [Input Values](https://spec.graphql.org/September2025/#sec-Input-Values).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", content = "value")]
pub enum Value {
    Variable(String),
    Int(String),
    Float(String),
    String(String),
    BlockString(String),
    Boolean(bool),
    Null,
    Enum(String),
    List(Vec<Value>),
    /// Fields in source order. Duplicate names are kept as written.
    Object(Vec<ObjectField>),
}

/// One `name: value` entry of an object value.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ObjectField {
    pub name: String,
    pub value: Value,
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Variable(_) => ValueKind::Variable,
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::String(_) => ValueKind::String,
            Self::BlockString(_) => ValueKind::BlockString,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Null => ValueKind::Null,
            Self::Enum(_) => ValueKind::Enum,
            Self::List(_) => ValueKind::List,
            Self::Object(_) => ValueKind::Object,
        }
    }

    /// The raw text of a scalar value, or `None` for lists and objects.
    pub fn raw(&self) -> Option<&str> {
        match self {
            Self::Variable(raw)
            | Self::Int(raw)
            | Self::Float(raw)
            | Self::String(raw)
            | Self::BlockString(raw)
            | Self::Enum(raw) => Some(raw.as_str()),
            Self::Boolean(true) => Some("true"),
            Self::Boolean(false) => Some("false"),
            Self::Null => Some("null"),
            Self::List(_) | Self::Object(_) => None,
        }
    }

    /// Nested values: list items, or the values of object fields.
    pub fn children(&self) -> Vec<&Value> {
        match self {
            Self::List(items) => items.iter().collect(),
            Self::Object(fields) => fields.iter().map(|field| &field.value).collect(),
            _ => vec![],
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&[ObjectField]> {
        match self {
            Self::Object(fields) => Some(fields.as_slice()),
            _ => None,
        }
    }

    /// The value of the first object field called `name`.
    pub fn get_field(&self, name: &str) -> Option<&Value> {
        self.as_object()?
            .iter()
            .find(|field| field.name == name)
            .map(|field| &field.value)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    /// The variable name referenced by a `$variable`.
    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Self::Variable(name) => Some(name.as_str()),
            _ => None,
        }
    }

    /// Parses an `Int` value as an `i64`.
    ///
    /// Returns `None` if this is not an `Int`. Values outside the `i64`
    /// range produce `Some(Err(..))`.
    pub fn parse_int(&self) -> Option<Result<i64, ParseIntError>> {
        match self {
            Self::Int(raw) => Some(raw.parse()),
            _ => None,
        }
    }

    /// Parses an `Int` or `Float` value as an `f64`.
    pub fn parse_float(&self) -> Option<Result<f64, ParseFloatError>> {
        match self {
            Self::Int(raw) | Self::Float(raw) => Some(raw.parse()),
            _ => None,
        }
    }
}

#[inherent]
impl AstNode for Value {
    pub fn append_source(&self, sink: &mut String) {
        match self {
            Self::Variable(name) => {
                sink.push('$');
                sink.push_str(name);
            },
            Self::Int(raw) | Self::Float(raw) | Self::Enum(raw) => sink.push_str(raw),
            Self::String(value) => append_string_literal(value, sink),
            Self::BlockString(value) => append_block_string_literal(value, sink),
            Self::Boolean(value) => sink.push_str(if *value { "true" } else { "false" }),
            Self::Null => sink.push_str("null"),
            Self::List(items) => {
                sink.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        sink.push_str(", ");
                    }
                    item.append_source(sink);
                }
                sink.push(']');
            },
            Self::Object(fields) => {
                sink.push('{');
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        sink.push_str(", ");
                    }
                    sink.push_str(&field.name);
                    sink.push_str(": ");
                    field.value.append_source(sink);
                }
                sink.push('}');
            },
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_source())
    }
}

fn append_string_literal(value: &str, sink: &mut String) {
    sink.push('"');
    for ch in value.chars() {
        match ch {
            '"' => sink.push_str("\\\""),
            '\\' => sink.push_str("\\\\"),
            '\n' => sink.push_str("\\n"),
            '\r' => sink.push_str("\\r"),
            '\t' => sink.push_str("\\t"),
            '\u{0008}' => sink.push_str("\\b"),
            '\u{000C}' => sink.push_str("\\f"),
            ch if u32::from(ch) < 0x20 => {
                sink.push_str(&format!("\\u{:04X}", u32::from(ch)));
            },
            ch => sink.push(ch),
        }
    }
    sink.push('"');
}

/// Multi-line values start on the line after the opening `"""`, so every
/// value line counts toward the common indentation when the text is lexed
/// again. That minimum is 0, nothing is stripped, and the leading empty line
/// is dropped. Single-line values stay on the delimiter line, where leading
/// whitespace is kept as-is. A trailing `"` or `\` needs a line break so it
/// doesn't merge with the closing delimiter.
fn append_block_string_literal(value: &str, sink: &mut String) {
    sink.push_str("\"\"\"");
    if value.contains('\n') {
        sink.push('\n');
    }
    sink.push_str(&value.replace("\"\"\"", "\\\"\"\""));
    if value.ends_with(['"', '\\']) {
        sink.push('\n');
    }
    sink.push_str("\"\"\"");
}
