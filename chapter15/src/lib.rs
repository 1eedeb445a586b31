//! The Python Tutorial, Chapter 15: Floating Point Arithmetic
//!
//! Both languages store an f64 the same way, so everything the tutorial
//! says about representation error holds verbatim in Rust: most decimal
//! fractions have no exact binary representation, the machine keeps the
//! nearest fraction with a power-of-two denominator, and the printed
//! decimal is only the shortest string that rounds back to the stored bits.

pub mod section_15_1;

pub use section_15_1::{almost_equal, as_pow2_ratio, ratio_string, round_to};
