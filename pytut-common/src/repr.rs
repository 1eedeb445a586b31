//! # Abbreviated Display
//!
//! Python's `reprlib.repr` produces a size-limited `repr()` for large
//! values, keeping the head and tail of the text around an ellipsis. The
//! sentence examples use it so `__repr__` stays one line no matter how long
//! the wrapped text is. [`abbrev`] is the Rust counterpart the example
//! types call from their `Debug` impls.

/// Shortens `text` to at most `max_len` characters, keeping the head and
/// tail around a `...` marker like `reprlib.repr` does.
///
/// Texts that already fit are returned unchanged. Budgets too small to
/// hold the marker plus text degrade to as much of the marker as fits, so
/// the result never exceeds `max_len` characters.
///
/// # Example
/// ```
/// use pytut_common::repr::abbrev;
/// assert_eq!(abbrev("short", 30), "short");
/// assert_eq!(
///     abbrev("The time has come, the Walrus said", 20),
///     "The time ...rus said",
/// );
/// ```
pub fn abbrev(text: &str, max_len: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_len {
        return text.to_string();
    }
    if max_len < 3 {
        return ".".repeat(max_len);
    }
    let keep = max_len - 3;
    let head = keep - keep / 2;
    let tail = keep / 2;
    let mut out = String::with_capacity(max_len);
    out.extend(&chars[..head]);
    out.push_str("...");
    out.extend(&chars[chars.len() - tail..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_unchanged() {
        assert_eq!(abbrev("spam", 10), "spam");
        assert_eq!(abbrev("", 10), "");
    }

    #[test]
    fn test_exact_fit_unchanged() {
        assert_eq!(abbrev("0123456789", 10), "0123456789");
    }

    #[test]
    fn test_abbreviated_length_is_max_len() {
        let long = "supercalifragilisticexpialidocious";
        let short = abbrev(long, 20);
        assert_eq!(short.chars().count(), 20);
        assert!(short.contains("..."));
        assert!(short.starts_with("super"));
        assert!(short.ends_with("ocious"));
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        // Multi-byte characters must not be split
        let text = "café au lait, café au lait, café au lait";
        let short = abbrev(text, 15);
        assert_eq!(short.chars().count(), 15);
    }

    #[test]
    fn test_tiny_budget_is_just_ellipsis() {
        assert_eq!(abbrev("long enough text", 4), "l...");
        assert_eq!(abbrev("long enough text", 3), "...");
    }

    #[test]
    fn test_never_exceeds_the_budget() {
        // Degenerate budgets get a truncated marker, not a 3-char floor
        for max_len in 0..10 {
            let out = abbrev("long enough text", max_len);
            assert!(
                out.chars().count() <= max_len,
                "budget {max_len} produced {out:?}"
            );
        }
        assert_eq!(abbrev("long enough text", 2), "..");
        assert_eq!(abbrev("long enough text", 0), "");
    }
}
