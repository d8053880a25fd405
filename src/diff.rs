use similar::TextDiff;

const CONTEXT_LINES: usize = 3;

/// Line-based unified diff between the on-disk text and the formatter output,
/// labelled `a/<path>` and `b/<path>`. Returns `None` when the texts match.
pub fn unified_diff(original: &str, formatted: &str, path: &str) -> Option<String> {
    if original == formatted {
        return None;
    }
    let diff = TextDiff::configure()
        .newline_terminated(true)
        .diff_lines(original, formatted);
    let text = diff
        .unified_diff()
        .context_radius(CONTEXT_LINES)
        .missing_newline_hint(true)
        .header(&format!("a/{path}"), &format!("b/{path}"))
        .to_string();
    if text.is_empty() { None } else { Some(text) }
}
