//! Feistel network primitives.
//!
//! This crate provides the structural core of a Feistel network: a
//! fixed-width block split into two equal halves, bitwise operations on a
//! half, and the forward/inverse round transform parameterized by a
//! caller-supplied round function. It is a building block for block ciphers,
//! not a cipher: there is no key schedule and no multi-round driver.
//!
//! # Architecture
//!
//! ```text
//! Half   (fixed-length bit vector — AND/OR/XOR, circular shifts)
//!     ↕ paired, equal lengths
//! Block  (immutable (left, right) pairing)
//!     ↕ round / unround with a RoundFunction f
//! Block' (fresh block, input untouched)
//! ```
//!
//! # Examples
//!
//! Apply a round and invert it with a closure as the round function:
//!
//! ```
//! use unclefeistel::{round, unround, Block, Half};
//!
//! let f = |h: &Half| {
//!     let mut out = h.clone();
//!     out.shift_left(3);
//!     out
//! };
//!
//! let block = Block::new("10110010".parse().unwrap(), "01101100".parse().unwrap()).unwrap();
//! let mixed = round(&f, &block).unwrap();
//! assert_ne!(mixed, block);
//! assert_eq!(unround(&f, &mixed).unwrap(), block);
//! ```
//!
//! Bit-level operations on a half:
//!
//! ```
//! use unclefeistel::Half;
//!
//! let mut h: Half = "10101010".parse().unwrap();
//! h.and(&"11110000".parse().unwrap()).unwrap();
//! assert_eq!(h.to_string(), "[10100000]");
//!
//! h.shift_right(1);
//! assert_eq!(h.to_string(), "[01010000]");
//! ```

#![deny(clippy::all)]

pub mod block;
pub mod error;
pub mod half;
pub mod round;
pub mod utils;

pub use block::Block;
pub use error::FeistelError;
pub use half::Half;
pub use round::{identity, round, unround, Rotate, RoundFunction, XorKey};
