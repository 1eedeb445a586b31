//! # Iterable Teaching Classes
//!
//! The standalone examples that accompany the tutorial notes: a sentence
//! wrapper that iterates over its words and a two-component vector. Both
//! exist to show where the iterator protocol hooks into a user-defined
//! type.
//!
//! The distinction the sentence example teaches:
//!
//! - An **iterable** produces a new iterator over its elements on demand.
//!   In Python that is `__iter__`; in Rust it is `IntoIterator`, usually
//!   implemented for a reference so the collection survives the loop.
//! - An **iterator** produces the next element or signals exhaustion. In
//!   Python that is `__next__` raising `StopIteration`; in Rust it is
//!   `Iterator::next` returning `None`.
//!
//! An iterable can be iterated many times because each pass gets a fresh
//! cursor; an iterator is spent once exhausted.

pub mod sentence;
pub mod vector2d;

pub use sentence::{Sentence, SentenceIter};
pub use vector2d::Vector2d;
