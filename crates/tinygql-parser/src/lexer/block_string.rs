/// Computes the value of a block string from its raw content.
///
/// `raw` is the text between the opening and closing `"""`, with `\"""`
/// already unescaped and line terminators already normalized to `\n`.
///
/// 1. The common indentation is the smallest run of leading spaces/tabs over
///    every line except the first that has any non-whitespace character.
/// 2. That indentation is removed from every line except the first.
/// 3. Leading and trailing lines that are empty or whitespace-only are
///    dropped.
///
/// See: <https://spec.graphql.org/September2025/#BlockStringValue()>
pub fn block_string_value(raw: &str) -> String {
    let lines: Vec<&str> = raw.split('\n').collect();

    let common_indent = lines
        .iter()
        .skip(1)
        .filter_map(|line| {
            let indent = leading_whitespace_len(line);
            (indent < line.len()).then_some(indent)
        })
        .min();

    let dedented: Vec<&str> = lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| match common_indent {
            // Indentation is ASCII, so byte and char counts agree.
            Some(indent) if i > 0 => &line[indent.min(line.len())..],
            _ => line,
        })
        .collect();

    let first = dedented
        .iter()
        .position(|line| !is_blank(line))
        .unwrap_or(dedented.len());
    let last = dedented
        .iter()
        .rposition(|line| !is_blank(line))
        .map_or(first, |i| i + 1);

    dedented[first..last].join("\n")
}

fn leading_whitespace_len(line: &str) -> usize {
    line.bytes().take_while(|b| *b == b' ' || *b == b'\t').count()
}

fn is_blank(line: &str) -> bool {
    leading_whitespace_len(line) == line.len()
}
