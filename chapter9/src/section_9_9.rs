//! 9.9절: 제너레이터 (Section 9.9: Generators)
//!
//! 파이썬 제너레이터는 yield 지점에서 실행을 멈추고 다음 `next()` 호출에서 재개한다
//! (A Python generator suspends at each `yield` and resumes on the next call
//! to `next()`). 러스트에는 `yield` 키워드가 없지만, 제너레이터가 자동으로
//! 만들어 주는 것들은 모두 직접 표현할 수 있다
//! (Rust has no `yield` keyword, but everything a generator builds for you
//! automatically can be written out directly):
//!
//! 핵심 매핑 (Key mappings):
//! - `yield value` → 상태를 저장하고 `Some(value)`를 반환 (save state, return `Some(value)`)
//! - 함수 끝에서 자동 `StopIteration` → `None` 반환 (automatic `StopIteration` at the end → return `None`)
//! - 지역 변수와 실행 위치의 자동 저장 → 구조체 필드 또는 클로저 캡처
//!   (automatic saving of locals and execution position → struct fields or closure captures)
//!
//! 튜토리얼의 말대로, 제너레이터로 할 수 있는 일은 클래스 기반 이터레이터로도
//! 할 수 있다 (As the tutorial says, anything done with generators can also
//! be done with class-based iterators) - 9.8절의 `Reverse`가 그 증거다
//! (section 9.8's `Reverse` is the proof). 아래는 같은 `reverse(data)`
//! 제너레이터를 세 가지 방식으로 옮긴 것이다
//! (Below is the same `reverse(data)` generator rendered three ways).

/// 제너레이터가 컴파일되는 형태: 명시적 상태 기계
/// (What the generator compiles down to: an explicit state machine).
///
/// `data`와 `index`가 제너레이터의 지역 변수 역할을 한다
/// (`data` and `index` play the role of the generator's local variables).
///
/// # Python equivalent
/// ```python
/// def reverse(data):
///     for index in range(len(data)-1, -1, -1):
///         yield data[index]
/// ```
pub struct ReverseGen<'a, T> {
    data: &'a [T],
    index: usize,
}

impl<'a, T> ReverseGen<'a, T> {
    pub fn new(data: &'a [T]) -> Self {
        ReverseGen {
            data,
            index: data.len(),
        }
    }
}

impl<'a, T> Iterator for ReverseGen<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        self.data.get(self.index)
    }
}

/// 같은 제너레이터를 클로저 캡처로 옮긴 것: `from_fn`이 구조체 선언을 대신한다
/// (The same generator as a closure capture: `from_fn` replaces the struct
/// declaration). 커서는 캡처된 `index`에 산다 (the cursor lives in the
/// captured `index`).
///
/// # Example
/// ```
/// use pytut_chapter9::section_9_9::reverse_from_fn;
/// let letters: Vec<char> = "golf".chars().collect();
/// let rev: String = reverse_from_fn(&letters).collect();
/// assert_eq!(rev, "flog");
/// ```
pub fn reverse_from_fn<T: Clone>(data: &[T]) -> impl Iterator<Item = T> + '_ {
    let mut index = data.len();
    std::iter::from_fn(move || {
        if index == 0 {
            return None;
        }
        index -= 1;
        data.get(index).cloned()
    })
}

/// 러스트 작성자가 실제로 쓰는 형태 (What a Rust author would actually
/// write): 표준 컴비네이터 (the standard combinator).
pub fn reverse_idiomatic<T: Clone>(data: &[T]) -> impl Iterator<Item = T> + '_ {
    data.iter().rev().cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section_9_8::Reverse;

    #[test]
    fn test_state_machine_reverses_golf() {
        let letters: Vec<char> = "golf".chars().collect();
        let rev: String = ReverseGen::new(&letters).collect();
        assert_eq!(rev, "flog");
    }

    #[test]
    fn test_state_machine_is_exhausted_at_zero() {
        let data = [1];
        let mut gen = ReverseGen::new(&data);
        assert_eq!(gen.next(), Some(&1));
        assert_eq!(gen.next(), None);
        assert_eq!(gen.next(), None);
    }

    #[test]
    fn test_all_three_renderings_agree() {
        let letters: Vec<char> = "generator".chars().collect();
        let a: Vec<char> = ReverseGen::new(&letters).copied().collect();
        let b: Vec<char> = reverse_from_fn(&letters).collect();
        let c: Vec<char> = reverse_idiomatic(&letters).collect();
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn test_generator_matches_class_based_iterator() {
        // The tutorial's claim, checked: the generator renderings and the
        // class-based Reverse of section 9.8 produce the same sequence
        let letters: Vec<char> = "spam".chars().collect();
        let from_gen: Vec<char> = reverse_from_fn(&letters).collect();
        let from_class: Vec<char> = Reverse::of_str("spam").collect();
        assert_eq!(from_gen, from_class);
    }

    #[test]
    fn test_empty_input() {
        let empty: [i32; 0] = [];
        assert_eq!(reverse_from_fn(&empty).count(), 0);
        assert_eq!(ReverseGen::new(&empty).count(), 0);
    }
}
