//! # Word Extraction
//!
//! The Python sentence examples all start from the same line:
//!
//! ```python
//! RE_WORD = re.compile(r'\w+')
//! ```
//!
//! This module keeps that pattern, compiled once behind a [`LazyLock`] so
//! every crate in the workspace shares the same regex, and exposes it two
//! ways: a borrowing iterator for lazy pipelines and an eager collector for
//! types that store their word list up front.

use std::sync::LazyLock;

use regex::Regex;

/// The `\w+` word pattern from the Python examples, compiled once.
pub static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("is a valid regex"));

/// Returns the word-like tokens of `text`, left to right, as owned strings.
///
/// # Python equivalent
/// ```python
/// RE_WORD.findall(text)
/// ```
///
/// # Example
/// ```
/// use pytut_common::words::find_words;
/// let words = find_words("The quick brown fox!");
/// assert_eq!(words, vec!["The", "quick", "brown", "fox"]);
/// ```
pub fn find_words(text: &str) -> Vec<String> {
    iter_words(text).map(str::to_string).collect()
}

/// Lazily yields the word-like tokens of `text` as slices of the input.
///
/// Equivalent to [`find_words`] without the allocation; the returned
/// iterator borrows `text`.
///
/// # Example
/// ```
/// use pytut_common::words::iter_words;
/// let first = iter_words("which foot or hand fell fastest").next();
/// assert_eq!(first, Some("which"));
/// ```
pub fn iter_words(text: &str) -> impl Iterator<Item = &str> {
    WORD_RE.find_iter(text).map(|m| m.as_str())
}
