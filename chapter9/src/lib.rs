//! 파이썬 튜토리얼 9장: 클래스 (The Python Tutorial, Chapter 9: Classes)
//!
//! 이 장은 파이썬의 클래스 기능을 러스트 관용구로 옮긴다
//! (This chapter maps Python's class machinery onto Rust idioms):
//! - 클래스 정의와 데이터 번들링 (Class definitions and data bundling: struct + impl)
//! - 덕 타이핑 (Duck typing: traits and trait objects)
//! - 이터레이터 프로토콜 (The iterator protocol: the `Iterator` trait)
//! - 제너레이터 (Generators: iterators without a hand-written cursor)
//! - 제너레이터 표현식 (Generator expressions: lazy combinator pipelines)

pub mod section_9_3; // A First Look at Classes
pub mod section_9_8; // Iterators
pub mod section_9_9; // Generators
pub mod section_9_10; // Generator Expressions

// 자주 사용되는 항목들을 재수출한다 (Re-export commonly used items).
pub use section_9_8::Reverse;
