//! Section 9.8: Iterators
//!
//! Behind the scenes, Python's `for` statement calls `iter()` on the
//! container, then calls `next()` on the resulting iterator until it raises
//! `StopIteration`. Rust has the same protocol with the `IntoIterator` and
//! `Iterator` traits, except exhaustion is a value (`None`) instead of an
//! exception, so the consuming loop treats end-of-sequence as ordinary
//! control flow rather than a caught fault.
//!
//! To add iterator behavior to a Python class you define `__iter__`
//! returning an object with `__next__`; if the class defines `__next__`
//! itself, `__iter__` just returns `self`. The Rust counterpart of that
//! second shape is a type that implements `Iterator` directly - every
//! `Iterator` is already `IntoIterator` over itself.

// =============================================================================
// The for statement, desugared
// =============================================================================

/// Walks a string the way `for letter in s` actually executes.
///
/// # Python equivalent
/// ```python
/// it = iter(s)
/// while True:
///     try:
///         print(next(it))
///     except StopIteration:
///         break
/// ```
///
/// # Example
/// ```
/// use pytut_chapter9::section_9_8::spell_out;
/// assert_eq!(spell_out("ABC"), vec!['A', 'B', 'C']);
/// ```
pub fn spell_out(s: &str) -> Vec<char> {
    // Build an iterator: iter(s)
    let mut it = s.chars();
    let mut letters = Vec::new();
    loop {
        // Repeatedly ask for the next item: next(it)
        match it.next() {
            Some(letter) => letters.push(letter),
            // None is StopIteration; the loop ends normally
            None => break,
        }
    }
    // `it` is dropped here, exhausted and useless, exactly like the
    // discarded Python iterator object
    letters
}

// =============================================================================
// A class-based iterator: looping over a sequence backwards
// =============================================================================

/// Iterator for looping over a sequence backwards.
///
/// The cursor starts at `len` and is decremented on each retrieval; the
/// sequence is exhausted when it reaches zero. Because the exhausted state
/// is simply "cursor at zero", further calls keep returning `None` instead
/// of failing some other way.
///
/// # Python equivalent
/// ```python
/// class Reverse:
///     def __init__(self, data):
///         self.data = data
///         self.index = len(data)
///
///     def __iter__(self):
///         return self
///
///     def __next__(self):
///         if self.index == 0:
///             raise StopIteration
///         self.index = self.index - 1
///         return self.data[self.index]
/// ```
///
/// # Example
/// ```
/// use pytut_chapter9::section_9_8::Reverse;
/// let rev: String = Reverse::of_str("spam").collect();
/// assert_eq!(rev, "maps");
/// ```
pub struct Reverse<T> {
    data: Vec<T>,
    index: usize,
}

impl<T> Reverse<T> {
    pub fn new(data: Vec<T>) -> Self {
        let index = data.len();
        Reverse { data, index }
    }
}

impl Reverse<char> {
    /// Convenience constructor over the characters of a string, the shape
    /// the tutorial demonstrates with `Reverse("spam")`.
    pub fn of_str(s: &str) -> Self {
        Reverse::new(s.chars().collect())
    }
}

impl<T: Clone> Iterator for Reverse<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        Some(self.data[self.index].clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.index, Some(self.index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spell_out() {
        assert_eq!(spell_out("abc"), vec!['a', 'b', 'c']);
        assert_eq!(spell_out(""), Vec::<char>::new());
    }

    #[test]
    fn test_reverse_spam() {
        let mut rev = Reverse::of_str("spam");
        assert_eq!(rev.next(), Some('m'));
        assert_eq!(rev.next(), Some('a'));
        assert_eq!(rev.next(), Some('p'));
        assert_eq!(rev.next(), Some('s'));
        assert_eq!(rev.next(), None);
    }

    #[test]
    fn test_exhausted_reverse_stays_exhausted() {
        // Post-exhaustion retrieval signals end-of-sequence again, it does
        // not panic or wrap around
        let mut rev = Reverse::new(vec![1, 2]);
        assert_eq!(rev.next(), Some(2));
        assert_eq!(rev.next(), Some(1));
        assert_eq!(rev.next(), None);
        assert_eq!(rev.next(), None);
    }

    #[test]
    fn test_reverse_in_a_for_loop() {
        let mut collected = Vec::new();
        for ch in Reverse::of_str("golf") {
            collected.push(ch);
        }
        assert_eq!(collected, vec!['f', 'l', 'o', 'g']);
    }

    #[test]
    fn test_size_hint_tracks_the_cursor() {
        let mut rev = Reverse::new(vec![10, 20, 30]);
        assert_eq!(rev.size_hint(), (3, Some(3)));
        rev.next();
        assert_eq!(rev.size_hint(), (2, Some(2)));
    }

    #[test]
    fn test_empty_sequence_is_born_exhausted() {
        let mut rev = Reverse::<i32>::new(Vec::new());
        assert_eq!(rev.next(), None);
    }
}
