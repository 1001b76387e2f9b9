/// Target line width for wrapped Javadoc, including the indent prefix.
const WIDTH: usize = 120;

/// Wrap help text into comment lines, each prefixed with `indent`.
///
/// Always yields at least one line so callers can emit the result
/// unconditionally inside a comment block.
pub fn wrap(text: &str, indent: &str) -> String {
    wrap_indented(text, indent, true)
}

/// Like [`wrap`], but the first line carries no indent prefix. Used when the
/// caller has already emitted a prefix (e.g. an `@param name ` lead-in) and
/// the wrapped text continues on the same line.
pub fn wrap_continued(text: &str, indent: &str) -> String {
    wrap_indented(text, indent, false)
}

fn wrap_indented(text: &str, indent: &str, indent_first: bool) -> String {
    let width = WIDTH.saturating_sub(indent.len()).max(20);
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return if indent_first {
            indent.trim_end().to_string()
        } else {
            String::new()
        };
    }
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in words {
        if !current.is_empty() && current.len() + 1 + word.len() > width {
            lines.push(current.clone());
            current.clear();
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 && !indent_first {
                line.clone()
            } else {
                format!("{indent}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
