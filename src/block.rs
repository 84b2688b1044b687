//! Block: a pair of equal-length halves.

use std::fmt;

use crate::error::FeistelError;
use crate::half::Half;

/// Ordered pair `(left, right)` of halves with equal length.
///
/// The length check runs once in [`Block::new`]; the pairing cannot change
/// afterwards because the halves are only reachable through shared borrows or
/// by consuming the block.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Block {
    left: Half,
    right: Half,
}

impl Block {
    /// Pairs two halves into a block.
    ///
    /// # Errors
    /// Returns [`FeistelError::InvalidShape`] if `left.len() != right.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use unclefeistel::{Block, Half};
    ///
    /// let block = Block::new("01".parse().unwrap(), "10".parse().unwrap()).unwrap();
    /// assert_eq!(block.to_string(), "[[01][10]]");
    ///
    /// let odd = Block::new("01".parse().unwrap(), "1".parse().unwrap());
    /// assert!(odd.is_err());
    /// ```
    pub fn new(left: Half, right: Half) -> Result<Self, FeistelError> {
        if left.len() != right.len() {
            return Err(FeistelError::invalid_shape(format!(
                "both halves must have the same length (left {}, right {})",
                left.len(),
                right.len()
            )));
        }
        Ok(Block { left, right })
    }

    pub fn left(&self) -> &Half {
        &self.left
    }

    pub fn right(&self) -> &Half {
        &self.right
    }

    /// Length shared by both halves.
    pub fn half_len(&self) -> usize {
        self.left.len()
    }

    /// Consumes the block, returning `(left, right)`.
    pub fn into_halves(self) -> (Half, Half) {
        (self.left, self.right)
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}{}]", self.left, self.right)
    }
}
