//! 15.1절: 표현 오차 (Section 15.1: Representation Error)
//!
//! 대부분의 십진 소수는 이진 소수로 정확히 표현할 수 없다
//! (Most decimal fractions cannot be represented exactly as binary
//! fractions). 기계는 분모가 2의 거듭제곱인 가장 가까운 분수를 저장한다
//! (The machine stores the nearest fraction whose denominator is a power
//! of two). 0.1을 입력하면 실제로 저장되는 값은
//! (Enter 0.1 and what is actually stored is):
//!
//! ```text
//! 3602879701896397 / 2^55
//! ```
//!
//! 이 모듈은 저장된 비트에서 그 분수를 직접 읽어내고, 표현 오차를 다루는
//! 올바른 관용구인 허용 오차 비교를 제공한다
//! (This module reads that fraction straight out of the stored bits and
//! provides the tolerance comparison that is the correct idiom for
//! handling representation error).

/// Decomposes a finite f64 into the exact fraction it stores, returned as
/// `(m, e)` with `x == m × 2^e` and `m` odd (or zero).
///
/// This is `float.as_integer_ratio()` with the denominator kept as an
/// exponent, since `2^1074` does not fit any primitive integer.
///
/// # Panics
/// Panics if `x` is NaN or infinite - those store no fraction to report.
///
/// # Example
/// ```
/// use pytut_chapter15::as_pow2_ratio;
/// assert_eq!(as_pow2_ratio(0.1), (3602879701896397, -55));
/// assert_eq!(as_pow2_ratio(0.5), (1, -1));
/// assert_eq!(as_pow2_ratio(3.0), (3, 0));
/// ```
pub fn as_pow2_ratio(x: f64) -> (i64, i32) {
    assert!(x.is_finite(), "only finite values store a fraction");
    if x == 0.0 {
        return (0, 0);
    }

    let bits = x.to_bits();
    let negative = bits >> 63 == 1;
    let exp_bits = ((bits >> 52) & 0x7ff) as i32;
    let frac = (bits & ((1u64 << 52) - 1)) as i64;

    // Normal values carry an implicit leading mantissa bit; subnormals
    // (exp_bits == 0) do not
    let (mut mantissa, mut exponent) = if exp_bits == 0 {
        (frac, -1074)
    } else {
        (frac | (1 << 52), exp_bits - 1075)
    };

    // Reduce the fraction: fold factors of two out of the mantissa
    while mantissa & 1 == 0 {
        mantissa >>= 1;
        exponent += 1;
    }

    if negative {
        mantissa = -mantissa;
    }
    (mantissa, exponent)
}

/// Renders the stored fraction of `x` the way the tutorial prints it,
/// e.g. `"3602879701896397 / 2^55"` for 0.1.
pub fn ratio_string(x: f64) -> String {
    let (m, e) = as_pow2_ratio(x);
    match e.signum() {
        -1 => format!("{m} / 2^{}", -e),
        0 => m.to_string(),
        _ => format!("{m} * 2^{e}"),
    }
}

/// Rounds `x` to `ndigits` decimal places the way Python's `round` does:
/// ties go to the nearest *even* digit (banker's rounding), so `round(0.5)`
/// is 0 and `round(1.5)` is 2.
///
/// The tutorial's caveat applies here too: the tie the rule sees is the tie
/// in the *stored* value, so `round_to(2.675, 2)` gives 2.67 - the machine
/// holds a fraction slightly below 2.675, and no tie ever happens.
///
/// # Python equivalent
/// ```python
/// round(2.675, 2)   # 2.67, not 2.68
/// ```
///
/// # Example
/// ```
/// use pytut_chapter15::round_to;
/// assert_eq!(round_to(0.5, 0), 0.0);
/// assert_eq!(round_to(1.5, 0), 2.0);
/// assert_eq!(round_to(2.675, 2), 2.67);
/// ```
pub fn round_to(x: f64, ndigits: i32) -> f64 {
    let factor = 10f64.powi(ndigits);
    (x * factor).round_ties_even() / factor
}

/// Tolerance comparison, the correct way to test floats for "equality".
///
/// # Example
/// ```
/// use pytut_chapter15::almost_equal;
/// assert!(0.1 + 0.2 != 0.3);
/// assert!(almost_equal(0.1 + 0.2, 0.3, 1e-9));
/// ```
pub fn almost_equal(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}

/// Adds 0.1 to itself `n` times, letting the representation error of each
/// step accumulate. Ten steps famously do not reach 1.0.
pub fn sum_of_tenths(n: u32) -> f64 {
    (0..n).fold(0.0, |acc, _| acc + 0.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_tenth_is_not_one_tenth() {
        // The fraction the machine stores for 0.1
        assert_eq!(as_pow2_ratio(0.1), (3602879701896397, -55));
        assert_eq!(ratio_string(0.1), "3602879701896397 / 2^55");

        // ...which is slightly more than 1/10
        let (m, e) = as_pow2_ratio(0.1);
        let as_stored = m as f64 * 2f64.powi(e);
        assert_eq!(as_stored, 0.1);
    }

    #[test]
    fn test_exactly_representable_values() {
        assert_eq!(as_pow2_ratio(0.0), (0, 0));
        assert_eq!(as_pow2_ratio(0.5), (1, -1));
        assert_eq!(as_pow2_ratio(0.25), (1, -2));
        assert_eq!(as_pow2_ratio(3.0), (3, 0));
        assert_eq!(as_pow2_ratio(-0.5), (-1, -1));
        assert_eq!(as_pow2_ratio(1024.0), (1, 10));
        assert_eq!(ratio_string(1024.0), "1 * 2^10");
        assert_eq!(ratio_string(3.0), "3");
    }

    #[test]
    fn test_subnormals_have_a_fraction_too() {
        assert_eq!(as_pow2_ratio(f64::MIN_POSITIVE / 2.0).1, -1023);
        assert_eq!(as_pow2_ratio(5e-324), (1, -1074));
    }

    #[test]
    #[should_panic(expected = "only finite values")]
    fn test_nan_has_no_fraction() {
        as_pow2_ratio(f64::NAN);
    }

    #[test]
    fn test_point_one_plus_point_two() {
        assert!(0.1 + 0.2 != 0.3);
        assert!(almost_equal(0.1 + 0.2, 0.3, 1e-9));
        // The shortest decimal that rounds back to the stored sum
        assert_eq!(format!("{}", 0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format!("{}", 0.1), "0.1");
    }

    #[test]
    fn test_round_half_to_even() {
        // Exact ties round to the nearest even digit
        assert_eq!(round_to(0.5, 0), 0.0);
        assert_eq!(round_to(1.5, 0), 2.0);
        assert_eq!(round_to(2.5, 0), 2.0);
        assert_eq!(round_to(3.5, 0), 4.0);
        // 0.125 is exactly representable, so this tie is real: 12.5 -> 12
        assert_eq!(round_to(0.125, 2), 0.12);
        // Negative ndigits round to tens, hundreds, ...
        assert_eq!(round_to(25.0, -1), 20.0);
        assert_eq!(round_to(35.0, -1), 40.0);
    }

    #[test]
    fn test_rounding_sees_the_stored_value() {
        // 2.675 is stored as a fraction slightly below 2.675, so there is
        // no tie and the result is 2.67, not 2.68
        assert_eq!(round_to(2.675, 2), 2.67);
        // The scaled value falls short of the tie point
        assert!(2.675_f64 * 100.0 < 267.5);
    }

    #[test]
    fn test_accumulated_error() {
        let almost_one = sum_of_tenths(10);
        assert!(almost_one != 1.0);
        assert!(almost_equal(almost_one, 1.0, 1e-9));
    }
}
