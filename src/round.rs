//! Forward and inverse Feistel round.
//!
//! ```text
//! [ L ][ R ]  --round-->  [ R ][ L ^ f(R) ]
//! [ L'][ R']  --unround-> [ R' ^ f(L') ][ L' ]
//! ```
//!
//! Since `(L ^ f(R)) ^ f(R) == L` and `R` travels through unchanged, the
//! inverse only ever evaluates `f` in the forward direction. `f` itself never
//! has to be invertible.

use crate::block::Block;
use crate::error::FeistelError;
use crate::half::Half;

/// A round function: a length-preserving mapping from one half to another.
///
/// Implemented for every `Fn(&Half) -> Half`, so plain functions and closures
/// can be passed directly to [`round`] and [`unround`].
///
/// Implementations must return a half of the same length as their input. The
/// round transform checks this and fails with
/// [`FeistelError::InvalidShape`] otherwise.
pub trait RoundFunction {
    fn apply(&self, half: &Half) -> Half;
}

impl<F> RoundFunction for F
where
    F: Fn(&Half) -> Half,
{
    fn apply(&self, half: &Half) -> Half {
        self(half)
    }
}

/// The identity round function.
pub fn identity(half: &Half) -> Half {
    Half::copy_of(half)
}

/// Round function that rotates its input left by a fixed offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotate(pub i64);

impl RoundFunction for Rotate {
    fn apply(&self, half: &Half) -> Half {
        let mut out = Half::copy_of(half);
        out.shift_left(self.0);
        out
    }
}

/// Round function that XORs its input with a fixed key.
///
/// `apply` cannot report errors, so a key whose length differs from the
/// input is returned unchanged. [`round`] and [`unround`] compare the output
/// length with the input and reject it with [`FeistelError::InvalidShape`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XorKey(pub Half);

impl RoundFunction for XorKey {
    fn apply(&self, half: &Half) -> Half {
        if self.0.len() != half.len() {
            tracing::warn!(
                key_len = self.0.len(),
                half_len = half.len(),
                "xor key does not match the half length"
            );
            return self.0.clone();
        }
        let mut out = Half::copy_of(half);
        match out.xor(&self.0) {
            Ok(()) => out,
            // Lengths were compared above.
            Err(_) => self.0.clone(),
        }
    }
}

/// Applies one forward Feistel round: `(L, R) -> (R, L ^ f(R))`.
///
/// The input block is not modified; the result is a freshly built block.
///
/// # Errors
/// Returns [`FeistelError::InvalidShape`] if `f` returns a half whose length
/// differs from its input.
///
/// # Examples
///
/// ```
/// use unclefeistel::{identity, round, unround, Block};
///
/// let block = Block::new(
///     "0001000111001010".parse().unwrap(),
///     "1101010101010001".parse().unwrap(),
/// )
/// .unwrap();
///
/// let mixed = round(&identity, &block).unwrap();
/// assert_eq!(mixed.right().to_string(), "[1100010010011011]");
/// assert_eq!(unround(&identity, &mixed).unwrap(), block);
/// ```
pub fn round<F>(f: &F, block: &Block) -> Result<Block, FeistelError>
where
    F: RoundFunction + ?Sized,
{
    tracing::debug!(input = %block, "starting forward round");

    let mask = apply_checked(f, block.right())?;
    let mut right = Half::copy_of(block.left());
    right.xor(&mask)?;
    let result = Block::new(Half::copy_of(block.right()), right)?;

    tracing::debug!(output = %result, "finished forward round");
    Ok(result)
}

/// Inverts one Feistel round: `(L', R') -> (R' ^ f(L'), L')`.
///
/// `unround(f, &round(f, &b)?)? == b` and `round(f, &unround(f, &b)?)? == b`
/// for every block `b` and every length-preserving `f`.
///
/// # Errors
/// Returns [`FeistelError::InvalidShape`] if `f` returns a half whose length
/// differs from its input.
pub fn unround<F>(f: &F, block: &Block) -> Result<Block, FeistelError>
where
    F: RoundFunction + ?Sized,
{
    tracing::debug!(input = %block, "starting inverse round");

    let mask = apply_checked(f, block.left())?;
    let mut left = Half::copy_of(block.right());
    left.xor(&mask)?;
    let result = Block::new(left, Half::copy_of(block.left()))?;

    tracing::debug!(output = %result, "finished inverse round");
    Ok(result)
}

fn apply_checked<F>(f: &F, input: &Half) -> Result<Half, FeistelError>
where
    F: RoundFunction + ?Sized,
{
    let output = f.apply(input);
    if output.len() != input.len() {
        tracing::warn!(
            input_len = input.len(),
            output_len = output.len(),
            "round function changed the half length"
        );
        return Err(FeistelError::invalid_shape(format!(
            "round function returned {} bits for a {}-bit half",
            output.len(),
            input.len()
        )));
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn half(repr: &str) -> Half {
        repr.parse().unwrap()
    }

    fn block(left: &str, right: &str) -> Block {
        Block::new(half(left), half(right)).unwrap()
    }

    fn reference_block() -> Block {
        block("0001000111001010", "1101010101010001")
    }

    #[test]
    fn test_round_identity() {
        let result = round(&identity, &reference_block()).unwrap();
        assert_eq!(result, block("1101010101010001", "1100010010011011"));
    }

    #[test]
    fn test_left_inverse() {
        let input = reference_block();
        let forward = round(&identity, &input).unwrap();
        assert_eq!(unround(&identity, &forward).unwrap(), input);
    }

    #[test]
    fn test_right_inverse() {
        let input = reference_block();
        let backward = unround(&identity, &input).unwrap();
        assert_eq!(round(&identity, &backward).unwrap(), input);
    }

    #[test]
    fn test_unround_layout() {
        // (L', R') -> (R' ^ f(L'), L') with f = identity
        let result = unround(&identity, &block("1100", "1010")).unwrap();
        assert_eq!(result, block("0110", "1100"));
    }

    #[test]
    fn test_input_not_mutated() {
        let input = reference_block();
        let snapshot = input.clone();
        let _ = round(&Rotate(3), &input).unwrap();
        let _ = unround(&Rotate(3), &input).unwrap();
        assert_eq!(input, snapshot);
    }

    #[test]
    fn test_round_function_never_sees_left() {
        let seen = std::cell::RefCell::new(Vec::new());
        let f = |h: &Half| {
            seen.borrow_mut().push(h.clone());
            identity(h)
        };
        let input = reference_block();
        let forward = round(&f, &input).unwrap();
        let _ = unround(&f, &forward).unwrap();
        let seen = seen.into_inner();
        assert_eq!(seen, vec![input.right().clone(), input.right().clone()]);
    }

    #[test]
    fn test_rotate_round_function() {
        assert_eq!(Rotate(2).apply(&half("01001001")), half("00100101"));
        let input = reference_block();
        let forward = round(&Rotate(-5), &input).unwrap();
        assert_eq!(unround(&Rotate(-5), &forward).unwrap(), input);
    }

    #[test]
    fn test_xor_key_round_function() {
        let key = XorKey(half("1111000011110000"));
        assert_eq!(
            key.apply(&half("1010101010101010")),
            half("0101101001011010")
        );
        let input = reference_block();
        let forward = round(&key, &input).unwrap();
        assert_eq!(unround(&key, &forward).unwrap(), input);
    }

    #[test]
    fn test_xor_key_wrong_length_rejected() {
        let key = XorKey(half("101"));
        assert_eq!(key.apply(&half("11")), half("101"));
        assert_eq!(
            round(&key, &reference_block()),
            Err(FeistelError::invalid_shape(
                "round function returned 3 bits for a 16-bit half"
            ))
        );
        assert_eq!(
            unround(&XorKey(half("1")), &block("01", "10")),
            Err(FeistelError::invalid_shape(
                "round function returned 1 bits for a 2-bit half"
            ))
        );
    }

    #[test]
    fn test_length_changing_function_rejected() {
        let truncate = |h: &Half| Half::from_bits(h.as_bits()[1..].to_vec()).unwrap();
        let input = reference_block();
        assert_eq!(
            round(&truncate, &input),
            Err(FeistelError::invalid_shape(
                "round function returned 15 bits for a 16-bit half"
            ))
        );
        assert!(matches!(
            unround(&truncate, &input),
            Err(FeistelError::InvalidShape { .. })
        ));
    }

    #[test]
    fn test_trait_object() {
        let functions: Vec<Box<dyn RoundFunction>> = vec![
            Box::new(identity),
            Box::new(Rotate(1)),
            Box::new(XorKey(half("0110011001100110"))),
        ];
        let input = reference_block();
        for f in &functions {
            let forward = round(f.as_ref(), &input).unwrap();
            assert_eq!(unround(f.as_ref(), &forward).unwrap(), input);
        }
    }

    #[test]
    fn test_single_bit_block() {
        let input = block("1", "0");
        let forward = round(&identity, &input).unwrap();
        assert_eq!(forward, block("0", "1"));
        assert_eq!(unround(&identity, &forward).unwrap(), input);
    }

    #[test]
    fn test_types_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Half>();
        assert_send_sync::<Block>();
        assert_send_sync::<Rotate>();
        assert_send_sync::<XorKey>();
    }
}
