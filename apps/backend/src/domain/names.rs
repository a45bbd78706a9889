use unicode_normalization::UnicodeNormalization;

/// Canonical form used to match player names within a season.
pub fn normalize_name(raw: &str) -> String {
    raw.trim().nfkc().collect::<String>().to_lowercase()
}

/// Display form: trimmed, inner whitespace collapsed.
pub fn clean_display_name(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
