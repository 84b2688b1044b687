//! CLI definitions for the unclefeistel command-line interface.
//!
//! Four subcommands: `round` and `unround` run the Feistel transform on a
//! block given as two bit strings, `shift` rotates a single half, and
//! `bitwise` combines two halves.

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "unclefeistel",
    about = "Feistel round transform and bit-half operations",
    version
)]
pub struct Cli {
    /// Log every round at debug level (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply one forward Feistel round: (L, R) -> (R, L ^ f(R))
    Round(RoundArgs),

    /// Apply one inverse Feistel round: (L', R') -> (R' ^ f(L'), L')
    Unround(RoundArgs),

    /// Circularly shift a half
    Shift {
        /// The half as a string of 0s and 1s
        #[arg(long)]
        half: String,

        /// Shift offset; negative values shift the other way
        #[arg(long, allow_hyphen_values = true)]
        offset: i64,

        /// Shift right instead of left
        #[arg(long)]
        right: bool,
    },

    /// Combine two halves of equal length bit by bit
    Bitwise {
        /// Receiver half
        #[arg(long)]
        half: String,

        /// Operand half
        #[arg(long)]
        other: String,

        /// Operator to apply
        #[arg(long, value_enum)]
        op: BitOp,
    },
}

#[derive(Args)]
pub struct RoundArgs {
    /// Left half as a string of 0s and 1s
    #[arg(short, long)]
    pub left: String,

    /// Right half as a string of 0s and 1s
    #[arg(short, long)]
    pub right: String,

    /// Round function: rotate the half left by this offset
    ///
    /// Combined with --key, the rotation is applied first.
    /// Without --rotate or --key the identity function is used.
    #[arg(long, allow_hyphen_values = true)]
    pub rotate: Option<i64>,

    /// Round function: XOR the half with this key (same length as a half)
    #[arg(long)]
    pub key: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum BitOp {
    And,
    Or,
    Xor,
}
