//! Whitespace normalization of captured text.

/// Normalize whitespace in captured element text.
///
/// Leading and trailing whitespace is trimmed and every internal run of
/// whitespace collapses to a single space. Empty or all-whitespace input
/// yields an empty string. The result never exceeds the input in length,
/// and normalizing already-normalized text is a no-op.
///
/// Whitespace classification follows [`char::is_whitespace`], which covers
/// the ASCII set (space, tab, newline, carriage return, form feed) plus
/// Unicode whitespace. Use [`normalize_with`] for a different classifier.
///
/// # Examples
/// ```
/// use xmltract::normalize;
///
/// assert_eq!(normalize("  a   b  "), "a b");
/// assert_eq!(normalize("   "), "");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    normalize_with(text, char::is_whitespace)
}

/// Normalize whitespace using a custom character classifier.
///
/// # Arguments
/// * `text` - Text to normalize
/// * `is_space` - Predicate deciding which characters count as whitespace
#[must_use]
pub fn normalize_with(text: &str, is_space: impl Fn(char) -> bool) -> String {
    let trimmed = text
        .trim_start_matches(|c: char| is_space(c))
        .trim_end_matches(|c: char| is_space(c));

    let mut out = String::with_capacity(trimmed.len());
    let mut in_run = false;
    for c in trimmed.chars() {
        if is_space(c) {
            if !in_run {
                out.push(' ');
                in_run = true;
            }
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}
