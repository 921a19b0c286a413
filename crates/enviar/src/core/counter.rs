//! Character counting for the live counter label.
//!
//! The counter mirrors the RAW textarea value; trimming happens only at
//! validation time.

/// Returns the character count of the raw prompt value
///
/// Counted in Unicode scalar values, matching the validator.
#[must_use]
pub fn prompt_char_count(raw: &str) -> usize {
    raw.chars().count()
}

/// Returns the counter label text for the raw prompt value
///
/// Plain base-10 integer, no formatting.
#[must_use]
pub fn counter_text(raw: &str) -> String {
    prompt_char_count(raw).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== prompt_char_count tests =====

    #[test]
    fn test_char_count_empty() {
        assert_eq!(prompt_char_count(""), 0);
    }

    #[test]
    fn test_char_count_ascii() {
        assert_eq!(prompt_char_count("Generate a sunset"), 17);
    }

    #[test]
    fn test_char_count_includes_whitespace() {
        // Raw count, no trimming
        assert_eq!(prompt_char_count("  hi  "), 6);
    }

    #[test]
    fn test_char_count_multibyte() {
        assert_eq!(prompt_char_count("日本語"), 3);
        assert_eq!(prompt_char_count("naïve"), 5);
    }

    #[test]
    fn test_char_count_newlines() {
        assert_eq!(prompt_char_count("a\nb\nc"), 5);
    }

    // ===== counter_text tests =====

    #[test]
    fn test_counter_text_empty() {
        assert_eq!(counter_text(""), "0");
    }

    #[test]
    fn test_counter_text_simple() {
        assert_eq!(counter_text("hello"), "5");
    }

    #[test]
    fn test_counter_text_whitespace_only() {
        assert_eq!(counter_text("   "), "3");
    }

    #[test]
    fn test_counter_text_long_value() {
        let raw = "x".repeat(501);
        assert_eq!(counter_text(&raw), "501");
    }

    #[test]
    fn test_counter_text_no_formatting() {
        let raw = "x".repeat(1234);
        assert_eq!(counter_text(&raw), "1234");
    }
}
