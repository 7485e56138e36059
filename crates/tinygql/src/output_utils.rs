pub(crate) const GREEN_CHECK: &str = "\u{2705}";
pub(crate) const RED_X: &str = "\u{274C}";

/// Reads a source file into a [`SourceInput`](tinygql_parser::SourceInput)
/// named after its path.
pub(crate) async fn read_source(
    path: &std::path::Path,
) -> anyhow::Result<tinygql_parser::SourceInput> {
    use anyhow::Context;

    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(tinygql_parser::SourceInput::new(path.display().to_string(), content))
}

/// Serializes `value` as JSON, indented when `pretty` is set.
pub(crate) fn to_json<T: serde::Serialize>(
    value: &T,
    pretty: bool,
) -> anyhow::Result<String> {
    let json =
        if pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
    Ok(json)
}
