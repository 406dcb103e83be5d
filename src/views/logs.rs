//! Log detail shaping.

/// Maximum length of a free-text input/output preview, in characters.
pub const PREVIEW_MAX_CHARS: usize = 200;

/// Bounded preview of a free-text payload field.
///
/// Absent or empty fields yield an empty preview, never an error. Truncation
/// counts characters, not bytes, so multi-byte text is never split.
pub fn preview(text: Option<&str>) -> String {
    let text = match text {
        Some(t) if !t.is_empty() => t,
        _ => return String::new(),
    };

    if text.chars().count() <= PREVIEW_MAX_CHARS {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(PREVIEW_MAX_CHARS).collect();
        format!("{}...", truncated)
    }
}
