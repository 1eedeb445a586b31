//! A sentence as a sequence of words.
//!
//! `Sentence` is the classic iterable-versus-iterator example: the sentence
//! holds the text and its extracted words, and every iteration request
//! hands out a *fresh* cursor. The original comes in two flavors, one with
//! an explicit iterator class and one as a generator; both are here, as
//! [`SentenceIter`] and [`Sentence::words_gen`].

use std::fmt;

use pytut_common::repr::abbrev;
use pytut_common::words::find_words;

/// A piece of text viewed as the ordered sequence of its word-like tokens.
///
/// The word list is derived once, at construction, with the shared `\w+`
/// pattern; after that the sentence is read-only.
///
/// # Python equivalent
/// ```python
/// class Sentence:
///     def __init__(self, text):
///         self.text = text
///         self.words = RE_WORD.findall(text)
///
///     def __repr__(self):
///         return f"Sentence({reprlib.repr(self.text)})"
///
///     def __iter__(self):
///         return SentenceIterator(self.words)
/// ```
///
/// # Example
/// ```
/// use pytut_iterables::Sentence;
/// let s = Sentence::new("The quick brown fox");
/// let words: Vec<&str> = (&s).into_iter().collect();
/// assert_eq!(words, ["The", "quick", "brown", "fox"]);
/// ```
pub struct Sentence {
    text: String,
    words: Vec<String>,
}

impl Sentence {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let words = find_words(&text);
        Sentence { text, words }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// The generator version of the same iteration: no hand-written cursor
    /// type, just a borrowing pipeline over the stored words.
    ///
    /// # Python equivalent
    /// ```python
    /// def __iter__(self):
    ///     for word in self.words:
    ///         yield word
    /// ```
    pub fn words_gen(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

/// `Debug` plays the role of `__repr__`, abbreviating long text the way
/// `reprlib.repr` does.
impl fmt::Debug for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Sentence({:?})", abbrev(&self.text, 30))
    }
}

/// The explicit iterator class: a borrowed word list plus a cursor index.
///
/// Fetching past the end is an `IndexError` in the Python version, turned
/// into `StopIteration`; here `slice::get` gives `None` directly.
///
/// # Python equivalent
/// ```python
/// class SentenceIterator:
///     def __init__(self, words):
///         self.words = words
///         self.index = 0
///
///     def __next__(self):
///         try:
///             word = self.words[self.index]
///         except IndexError:
///             raise StopIteration()
///         self.index += 1
///         return word
///
///     def __iter__(self):
///         return self
/// ```
pub struct SentenceIter<'a> {
    words: &'a [String],
    index: usize,
}

impl<'a> Iterator for SentenceIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        // No word at self.index means the sequence is exhausted
        let word = self.words.get(self.index)?;
        self.index += 1;
        Some(word.as_str())
    }
}

/// The iterable protocol: every `&Sentence` loop gets a fresh cursor, which
/// is what makes iteration repeatable.
impl<'a> IntoIterator for &'a Sentence {
    type Item = &'a str;
    type IntoIter = SentenceIter<'a>;

    fn into_iter(self) -> SentenceIter<'a> {
        SentenceIter {
            words: &self.words,
            index: 0,
        }
    }
}
