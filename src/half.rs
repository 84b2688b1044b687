//! Half: one side of a Feistel block.
//!
//! A [`Half`] is a fixed-length sequence of bits. Its length is set at
//! construction and never changes; bitwise operations and circular shifts
//! rewrite the bit contents in place. Independent copies are only ever made
//! explicitly, through [`Half::copy_of`] or [`Clone`].

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use crate::error::FeistelError;
use crate::utils::modular::normalized_mod;

/// Fixed-length, mutable bit vector.
///
/// Bit `0` is the leftmost bit in the string form. Two halves are equal iff
/// they have the same length and the same bits; halves of different lengths
/// are simply unequal.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Half {
    bits: Vec<bool>,
}

impl Half {
    /// Creates a half from an explicit bit sequence.
    ///
    /// # Parameters
    /// - `bits`: The bits, leftmost first. Must hold at least one bit.
    ///
    /// # Errors
    /// Returns [`FeistelError::InvalidShape`] if `bits` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use unclefeistel::Half;
    ///
    /// let h = Half::from_bits(vec![false, true, true]).unwrap();
    /// assert_eq!(h.to_string(), "[011]");
    /// assert!(Half::from_bits(Vec::<bool>::new()).is_err());
    /// ```
    pub fn from_bits(bits: impl Into<Vec<bool>>) -> Result<Self, FeistelError> {
        let bits = bits.into();
        if bits.is_empty() {
            return Err(FeistelError::invalid_shape(
                "a half must hold at least one bit",
            ));
        }
        Ok(Half { bits })
    }

    /// Parses a half from a string of `'0'` and `'1'` characters.
    ///
    /// Character `i` becomes bit `i`. No separators or whitespace are
    /// accepted anywhere in the string.
    ///
    /// # Errors
    /// Returns [`FeistelError::InvalidShape`] if `repr` is empty or contains
    /// any character other than `'0'` or `'1'`.
    pub fn parse(repr: &str) -> Result<Self, FeistelError> {
        if repr.is_empty() {
            return Err(FeistelError::invalid_shape(
                "binary representation must not be empty",
            ));
        }
        let bits = repr
            .chars()
            .enumerate()
            .map(|(i, c)| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(FeistelError::invalid_shape(format!(
                    "invalid binary digit {:?} at position {}",
                    other, i
                ))),
            })
            .collect::<Result<Vec<bool>, _>>()?;
        Half::from_bits(bits)
    }

    /// Creates an all-zero half of `len` bits.
    ///
    /// # Errors
    /// Returns [`FeistelError::InvalidShape`] if `len == 0`.
    pub fn zeroed(len: usize) -> Result<Self, FeistelError> {
        Half::from_bits(vec![false; len])
    }

    /// Returns a deep, independently owned copy of `original`.
    pub fn copy_of(original: &Half) -> Half {
        original.clone()
    }

    /// Number of bits. Always at least 1.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Always `false`: a half holds at least one bit.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Returns bit `index`, or `None` if it is out of range.
    pub fn bit(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    /// Borrows the bits, leftmost first.
    pub fn as_bits(&self) -> &[bool] {
        &self.bits
    }

    /// Consumes the half and returns its bits.
    pub fn into_bits(self) -> Vec<bool> {
        self.bits
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Returns `true` if no bit is set.
    pub fn is_zero(&self) -> bool {
        !self.bits.contains(&true)
    }

    /// In-place bitwise AND with `other`.
    ///
    /// # Errors
    /// Returns [`FeistelError::IncompatibleOperands`] if the lengths differ.
    /// `self` is left unmodified in that case.
    pub fn and(&mut self, other: &Half) -> Result<(), FeistelError> {
        self.combine(other, |a, b| a & b)
    }

    /// In-place bitwise OR with `other`.
    ///
    /// # Errors
    /// Returns [`FeistelError::IncompatibleOperands`] if the lengths differ.
    pub fn or(&mut self, other: &Half) -> Result<(), FeistelError> {
        self.combine(other, |a, b| a | b)
    }

    /// In-place bitwise XOR with `other`.
    ///
    /// # Errors
    /// Returns [`FeistelError::IncompatibleOperands`] if the lengths differ.
    ///
    /// # Examples
    ///
    /// ```
    /// use unclefeistel::Half;
    ///
    /// let mut h: Half = "10101010".parse().unwrap();
    /// h.xor(&"11110000".parse().unwrap()).unwrap();
    /// assert_eq!(h, "01011010".parse().unwrap());
    /// ```
    pub fn xor(&mut self, other: &Half) -> Result<(), FeistelError> {
        self.combine(other, |a, b| a ^ b)
    }

    fn combine(
        &mut self,
        other: &Half,
        op: impl Fn(bool, bool) -> bool,
    ) -> Result<(), FeistelError> {
        if other.len() != self.len() {
            return Err(FeistelError::IncompatibleOperands {
                expected: self.len(),
                actual: other.len(),
            });
        }
        for (bit, &rhs) in self.bits.iter_mut().zip(other.bits.iter()) {
            *bit = op(*bit, rhs);
        }
        Ok(())
    }

    /// Circular left shift by `offset` positions, in place.
    ///
    /// The offset is reduced with [`normalized_mod`], so any `i64` is valid:
    /// - `0` and multiples of `len()` leave the half unchanged
    /// - offsets larger than `len()` wrap around
    /// - a negative offset `-n` rotates right by `n`
    ///
    /// The bit at position `i` ends up at `(i - offset) mod len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use unclefeistel::Half;
    ///
    /// let mut h: Half = "01001001".parse().unwrap();
    /// h.shift_left(2);
    /// assert_eq!(h.to_string(), "[00100101]");
    /// ```
    pub fn shift_left(&mut self, offset: i64) {
        let len = self.nz_len();
        self.bits.rotate_left(normalized_mod(offset, len));
    }

    /// Circular right shift by `offset` positions, in place.
    ///
    /// Equivalent to `shift_left(-offset)` for every `offset`, including
    /// `i64::MIN`, whose negation does not fit in an `i64`.
    pub fn shift_right(&mut self, offset: i64) {
        let len = self.nz_len();
        self.bits.rotate_right(normalized_mod(offset, len));
    }

    // Construction rejects empty sequences, so the fallback is never taken.
    fn nz_len(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.bits.len()).unwrap_or(NonZeroUsize::MIN)
    }

    fn write_bits(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for &b in &self.bits {
            f.write_str(if b { "1" } else { "0" })?;
        }
        f.write_str("]")
    }
}

impl fmt::Display for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_bits(f)
    }
}

impl fmt::Debug for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Half")?;
        self.write_bits(f)
    }
}

impl FromStr for Half {
    type Err = FeistelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Half::parse(s)
    }
}

impl TryFrom<Vec<bool>> for Half {
    type Error = FeistelError;

    fn try_from(bits: Vec<bool>) -> Result<Self, Self::Error> {
        Half::from_bits(bits)
    }
}

impl TryFrom<&[bool]> for Half {
    type Error = FeistelError;

    fn try_from(bits: &[bool]) -> Result<Self, Self::Error> {
        Half::from_bits(bits.to_vec())
    }
}
