/// Case-folds text for substring search, dropping invisible characters that sneak in
/// from spreadsheet exports.
pub(crate) fn normalize_text(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    cleaned.to_lowercase()
}

/// Normalized search query, or `None` when the query is blank. Surrounding whitespace
/// is kept and takes part in the match.
pub(crate) fn normalize_query(query: &str) -> Option<String> {
    let normalized = normalize_text(query);
    if normalized.trim().is_empty() {
        None
    } else {
        Some(normalized)
    }
}

pub(crate) fn contains_normalized(haystack: &str, normalized_query: &str) -> bool {
    normalize_text(haystack).contains(normalized_query)
}
