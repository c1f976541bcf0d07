/// Count whitespace-delimited words, ignoring leading and trailing whitespace
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// True when the text has nothing but whitespace in it
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Truncate a string for one-line previews
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let head: String = s.chars().take(max_chars).collect();
    format!("{}...", head)
}
