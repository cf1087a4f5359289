const MAX_PREVIEW_CHARS: usize = 120;

/// Length-capped excerpt of free-form text (transcripts, model replies) for
/// log lines. Truncation is char-boundary safe.
pub fn text_preview(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    match trimmed.char_indices().nth(MAX_PREVIEW_CHARS) {
        Some((cut, _)) => format!(
            "{}... ({} chars total)",
            &trimmed[..cut],
            trimmed.chars().count()
        ),
        None => trimmed.to_string(),
    }
}
