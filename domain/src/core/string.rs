//! String helpers for log lines and progress messages.

/// One-line preview of agent output for logs.
///
/// Newlines and runs of whitespace collapse to single spaces; the result is
/// cut at a UTF-8 character boundary no later than `max_len` bytes and marked
/// with `...` when shortened.
pub fn preview(text: &str, max_len: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.len() <= max_len {
        return flat;
    }
    let mut end = max_len.saturating_sub(3).min(flat.len());
    while end > 0 && !flat.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &flat[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short_text_is_flattened() {
        assert_eq!(preview("a thesis\n\nin  two lines", 80), "a thesis in two lines");
    }

    #[test]
    fn test_preview_truncates_with_ellipsis() {
        assert_eq!(preview("the sky is blue", 10), "the sky...");
    }

    #[test]
    fn test_preview_respects_char_boundaries() {
        // 'é' is 2 bytes; cutting inside it backs up to the previous boundary
        assert_eq!(preview("éééééé", 8), "éé...");
    }
}
