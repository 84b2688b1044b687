//! Modular arithmetic helpers.
//!
//! Rust's `%` truncates toward zero, so `-2 % 8 == -2`. Shift offsets need the
//! mathematical residue instead, which is always in `[0, modulus)`.

use std::num::NonZeroUsize;

/// Reduces `value` modulo `modulus`, always returning a result in
/// `[0, modulus)`, including for negative `value`.
///
/// The reduction is carried out in `i128`, so every `i64` value and every
/// `usize` modulus is handled without overflow.
///
/// # Parameters
/// - `value`: Any signed integer, possibly negative or larger than `modulus`.
/// - `modulus`: The (non-zero) modulus.
///
/// # Returns
/// The normalized residue of `value` modulo `modulus`.
///
/// # Examples
///
/// ```
/// use std::num::NonZeroUsize;
/// use unclefeistel::utils::modular::normalized_mod;
///
/// let eight = NonZeroUsize::new(8).unwrap();
/// assert_eq!(normalized_mod(10, eight), 2);
/// assert_eq!(normalized_mod(-2, eight), 6);
/// ```
pub fn normalized_mod(value: i64, modulus: NonZeroUsize) -> usize {
    let m = modulus.get() as i128;
    // rem_euclid on a positive modulus lands in [0, m), which fits in usize.
    (value as i128).rem_euclid(m) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nz(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_positive_in_range() {
        assert_eq!(normalized_mod(3, nz(8)), 3);
    }

    #[test]
    fn test_zero() {
        assert_eq!(normalized_mod(0, nz(8)), 0);
        assert_eq!(normalized_mod(0, nz(1)), 0);
    }

    #[test]
    fn test_exact_multiple() {
        assert_eq!(normalized_mod(8, nz(8)), 0);
        assert_eq!(normalized_mod(-16, nz(8)), 0);
    }

    #[test]
    fn test_larger_than_modulus() {
        assert_eq!(normalized_mod(10, nz(8)), 2);
        assert_eq!(normalized_mod(1_000_003, nz(10)), 3);
    }

    #[test]
    fn test_negative() {
        assert_eq!(normalized_mod(-2, nz(8)), 6);
        assert_eq!(normalized_mod(-1, nz(8)), 7);
        assert_eq!(normalized_mod(-10, nz(8)), 6);
    }

    #[test]
    fn test_modulus_one_always_zero() {
        for value in [-5, -1, 0, 1, 7, i64::MAX, i64::MIN] {
            assert_eq!(normalized_mod(value, nz(1)), 0, "value={}", value);
        }
    }

    #[test]
    fn test_extremes_do_not_overflow() {
        // i64::MAX = 9223372036854775807, i64::MIN = -9223372036854775808
        assert_eq!(normalized_mod(i64::MAX, nz(10)), 7);
        assert_eq!(normalized_mod(i64::MIN, nz(10)), 2);
        assert!(normalized_mod(i64::MIN, nz(usize::MAX)) < usize::MAX);
    }

    #[test]
    fn test_matches_add_then_reduce_form() {
        for n in 1..=13usize {
            let ni = n as i64;
            for value in -40i64..=40 {
                let expected = (((value % ni) + ni) % ni) as usize;
                assert_eq!(
                    normalized_mod(value, nz(n)),
                    expected,
                    "value={}, modulus={}",
                    value,
                    n
                );
            }
        }
    }
}
