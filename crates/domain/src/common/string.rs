//! String utilities.

/// Ellipsis appended to truncated excerpts.
pub const ELLIPSIS: &str = "...";

/// Converts a blank (empty or whitespace-only) string to `None`.
///
/// # Examples
///
/// ```
/// use blogs_domain::common::none_if_blank;
///
/// assert_eq!(none_if_blank(Some("Ada")), Some("Ada"));
/// assert_eq!(none_if_blank(Some("  ")), None);
/// assert_eq!(none_if_blank(None), None);
/// ```
pub fn none_if_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Returns the first `max_chars` characters of `content`, followed by
/// [`ELLIPSIS`] when anything was cut off.
///
/// Counts `char`s, not bytes, so multi-byte text is never split.
///
/// # Examples
///
/// ```
/// use blogs_domain::common::excerpt;
///
/// assert_eq!(excerpt("short", 100), "short");
/// assert_eq!(excerpt("abcdef", 3), "abc...");
/// ```
pub fn excerpt(content: &str, max_chars: usize) -> String {
    match content.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{}", &content[..cut], ELLIPSIS),
        None => content.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_exact_length_is_untouched() {
        let content = "a".repeat(100);
        assert_eq!(excerpt(&content, 100), content);
    }

    #[test]
    fn test_excerpt_one_over_is_truncated() {
        let content = "a".repeat(101);
        let result = excerpt(&content, 100);
        assert_eq!(result.len(), 103);
        assert!(result.ends_with(ELLIPSIS));
    }

    #[test]
    fn test_excerpt_counts_chars_not_bytes() {
        let content = "é".repeat(5);
        assert_eq!(excerpt(&content, 2), "éé...");
    }

    #[test]
    fn test_none_if_blank() {
        assert_eq!(none_if_blank(Some("")), None);
        assert_eq!(none_if_blank(Some(" x ")), Some(" x "));
    }
}
