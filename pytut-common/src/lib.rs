//! # Python Tutorial Common Utilities
//!
//! Shared helpers for the Python-tutorial-in-Rust example crates.
//!
//! ## Modules
//!
//! - [`words`]: word extraction with the same `\w+` pattern the Python
//!   examples compile with the `re` module
//! - [`repr`]: abbreviated display of long strings, in the spirit of
//!   Python's `reprlib.repr`
//!
//! ## Design Principles
//!
//! These helpers exist so the chapter crates show the *language feature*
//! under discussion rather than repeating the same tokenizing and
//! formatting plumbing:
//!
//! 1. **One compiled regex**: the word pattern is compiled once and shared,
//!    the way the Python examples keep a module-level `RE_WORD`
//! 2. **Borrow where possible**: [`words::iter_words`] yields `&str` slices
//!    of the input; callers that need owned strings use
//!    [`words::find_words`]
//! 3. **No hidden state**: every function is a pure transformation of its
//!    input

pub mod repr;
pub mod words;

// Re-export the items the example crates reach for most often
pub use repr::abbrev;
pub use words::{find_words, iter_words};
