use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use unclefeistel::{identity, round, unround, Block, Half, Rotate, RoundFunction, XorKey};

mod cli;
use cli::{BitOp, Cli, Commands, RoundArgs};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Round(args) => {
            let block = run_round(&args, Direction::Forward)?;
            println!("{}", block);
        }
        Commands::Unround(args) => {
            let block = run_round(&args, Direction::Inverse)?;
            println!("{}", block);
        }
        Commands::Shift {
            half,
            offset,
            right,
        } => {
            println!("{}", run_shift(&half, offset, right)?);
        }
        Commands::Bitwise { half, other, op } => {
            println!("{}", run_bitwise(&half, &other, op)?);
        }
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[derive(Clone, Copy)]
enum Direction {
    Forward,
    Inverse,
}

/// Round function assembled from the command line: optional rotation, then
/// optional key XOR. Identity when neither is given.
struct CliRoundFunction {
    rotate: Option<Rotate>,
    key: Option<XorKey>,
}

impl CliRoundFunction {
    /// Builds the round function for halves of `half_len` bits.
    ///
    /// # Errors
    /// Fails if `--key` is not a binary string of exactly `half_len` bits.
    fn from_args(args: &RoundArgs, half_len: usize) -> Result<Self> {
        let key = match &args.key {
            Some(repr) => {
                let key = parse_half("--key", repr)?;
                if key.len() != half_len {
                    bail!(
                        "--key has {} bits but each half has {}",
                        key.len(),
                        half_len
                    );
                }
                Some(XorKey(key))
            }
            None => None,
        };
        Ok(CliRoundFunction {
            rotate: args.rotate.map(Rotate),
            key,
        })
    }
}

impl RoundFunction for CliRoundFunction {
    fn apply(&self, half: &Half) -> Half {
        let mut out = match self.rotate {
            Some(rotate) => rotate.apply(half),
            None => identity(half),
        };
        if let Some(key) = &self.key {
            out = key.apply(&out);
        }
        out
    }
}

fn run_round(args: &RoundArgs, direction: Direction) -> Result<Block> {
    let left = parse_half("--left", &args.left)?;
    let right = parse_half("--right", &args.right)?;
    let block = Block::new(left, right).context("cannot build block")?;
    let f = CliRoundFunction::from_args(args, block.half_len())?;

    let result = match direction {
        Direction::Forward => round(&f, &block),
        Direction::Inverse => unround(&f, &block),
    };
    result.context("round failed")
}

fn run_shift(half: &str, offset: i64, right: bool) -> Result<Half> {
    let mut half = parse_half("--half", half)?;
    if right {
        half.shift_right(offset);
    } else {
        half.shift_left(offset);
    }
    Ok(half)
}

fn run_bitwise(half: &str, other: &str, op: BitOp) -> Result<Half> {
    let mut half = parse_half("--half", half)?;
    let other = parse_half("--other", other)?;
    let combined = match op {
        BitOp::And => half.and(&other),
        BitOp::Or => half.or(&other),
        BitOp::Xor => half.xor(&other),
    };
    combined.context("cannot combine halves")?;
    Ok(half)
}

fn parse_half(flag: &str, repr: &str) -> Result<Half> {
    repr.parse::<Half>()
        .with_context(|| format!("invalid {} value {:?}", flag, repr))
}
