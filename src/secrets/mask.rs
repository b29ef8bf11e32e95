//! Preview masking for secret values.

/// Number of characters kept at each end of a masked value.
pub const PREVIEW_EDGE: usize = 4;

/// Mask used when a value is too short to show any of it.
pub const PLACEHOLDER_MASK: &str = "***";

/// Render a redacted preview of `value`.
///
/// Values longer than `2 * PREVIEW_EDGE` characters keep their first and last
/// [`PREVIEW_EDGE`] characters around `...`. Anything shorter collapses to
/// [`PLACEHOLDER_MASK`]. Counts characters, not bytes.
///
/// # Example
///
/// ```
/// use mcp_validate::secrets::mask_preview;
///
/// assert_eq!(mask_preview("https://gitlab.example.com"), "http....com");
/// assert_eq!(mask_preview("12345678"), "***");
/// ```
pub fn mask_preview(value: &str) -> String {
    let len = value.chars().count();
    if len <= PREVIEW_EDGE * 2 {
        return PLACEHOLDER_MASK.to_string();
    }

    let head: String = value.chars().take(PREVIEW_EDGE).collect();
    let tail: String = value.chars().skip(len - PREVIEW_EDGE).collect();
    format!("{}...{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_value_keeps_edges() {
        assert_eq!(mask_preview("glpat-1234567890abcd"), "glpa...abcd");
    }

    #[test]
    fn nine_chars_is_first_masked_length() {
        assert_eq!(mask_preview("123456789"), "1234...6789");
    }

    #[test]
    fn eight_chars_uses_placeholder() {
        assert_eq!(mask_preview("12345678"), PLACEHOLDER_MASK);
    }

    #[test]
    fn short_and_empty_values_use_placeholder() {
        assert_eq!(mask_preview("abc"), "***");
        assert_eq!(mask_preview(""), "***");
    }

    #[test]
    fn preview_never_contains_full_secret() {
        for secret in [
            "squ_0123456789abcdef0123456789abcdef",
            "https://sonar.internal.example.org",
            "123456789",
        ] {
            let masked = mask_preview(secret);
            assert!(!masked.contains(secret), "leaked {}", secret);
        }
    }

    #[test]
    fn preview_length_is_independent_of_secret_length() {
        let short = mask_preview("aaaaaaaaa");
        let long = mask_preview(&"a".repeat(500));
        assert_eq!(short.len(), long.len());
        assert_eq!(long.len(), PREVIEW_EDGE * 2 + 3);
    }

    #[test]
    fn multibyte_values_split_on_char_boundaries() {
        assert_eq!(mask_preview("ééééXXXXéééé"), "éééé...éééé");
        assert_eq!(mask_preview("日本語テキスト"), "***");
    }
}
