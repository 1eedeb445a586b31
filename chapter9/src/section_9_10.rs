//! Section 9.10: Generator Expressions
//!
//! Generator expressions are comprehensions that produce values on demand
//! instead of building a list first, which is why the tutorial calls them
//! "more memory friendly". Rust iterator pipelines are the same thing with
//! the laziness turned on by default: nothing runs until a consumer such as
//! `sum()` or `collect()` pulls.
//!
//! The tutorial's three one-liners are rendered below, plus an
//! eager-versus-lazy pair that makes the memory argument concrete.

use std::collections::HashSet;

use pytut_common::words::iter_words;

/// Sum of squares of `0..n`.
///
/// # Python equivalent
/// ```python
/// sum(i*i for i in range(10))
/// ```
///
/// # Example
/// ```
/// use pytut_chapter9::section_9_10::sum_of_squares;
/// assert_eq!(sum_of_squares(10), 285);
/// ```
pub fn sum_of_squares(n: u64) -> u64 {
    (0..n).map(|i| i * i).sum()
}

/// Dot product of two vectors, pairing elements with `zip`.
///
/// # Python equivalent
/// ```python
/// sum(x*y for x, y in zip(x_vec, y_vec))
/// ```
///
/// # Example
/// ```
/// use pytut_chapter9::section_9_10::dot_product;
/// assert_eq!(dot_product(&[10, 20, 30], &[7, 5, 3]), 260);
/// ```
pub fn dot_product(xs: &[i64], ys: &[i64]) -> i64 {
    xs.iter().zip(ys).map(|(x, y)| x * y).sum()
}

/// The distinct words across a page of lines.
///
/// The nested comprehension becomes a `flat_map`; the enclosing `set()`
/// becomes the `HashSet` the pipeline is collected into. Tokenizing uses
/// the shared `\w+` pattern, so punctuation never sticks to a word the way
/// it would with a plain whitespace split.
///
/// # Python equivalent
/// ```python
/// unique_words = set(word for line in page
///                         for word in RE_WORD.findall(line))
/// ```
pub fn unique_words<'a>(page: impl IntoIterator<Item = &'a str>) -> HashSet<String> {
    page.into_iter()
        .flat_map(iter_words)
        .map(str::to_string)
        .collect()
}

/// Finds the nth word of a page eagerly (for comparison): every word on
/// every line is extracted and stored before one is picked.
pub fn nth_word_eager<'a>(page: impl IntoIterator<Item = &'a str>, n: usize) -> Option<String> {
    let words: Vec<String> = page
        .into_iter()
        .flat_map(iter_words)
        .map(str::to_string)
        .collect();
    words.get(n).cloned()
}

/// Finds the nth word lazily: extraction stops as soon as the answer is
/// pulled, and no intermediate list exists.
pub fn nth_word_lazy<'a>(page: impl IntoIterator<Item = &'a str>, n: usize) -> Option<String> {
    page.into_iter()
        .flat_map(iter_words)
        .nth(n)
        .map(str::to_string)
}
