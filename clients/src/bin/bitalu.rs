//! `bitalu` - evaluate bit-serial ALU operations from the command line.
//!
//! **Usage:**
//! ```text
//! bitalu [--width 4|8|16|32|64] [--json] eval <OP> <A> [B]
//! ```
//!
//! Operands are decimal (`-7`) or binary (`0b1010`). For `ash`, `lsh`, `csh`
//! and `mask` the second operand is a signed count.
//!
//! Logs go to stderr, filtered by `BITALU_LOG` (default `warn`).

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::cmp::Ordering;

use anyhow::{bail, Context, Result};
use bitalu::alu::{AluOps, BitSerialAlu};
use bitalu::word::{parse_literal, Binary, BitWord, Word16, Word32, Word4, Word64, Word8};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Bit-serial two's-complement ALU.
#[derive(Parser)]
#[command(name = "bitalu", version, about = "Evaluate bit-serial ALU operations")]
struct Args {
    /// Word width in bits.
    #[arg(long, value_enum, default_value_t = Width::W32, global = true)]
    width: Width,

    /// Print machine-readable JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

/// Supported word widths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Width {
    /// 4-bit words.
    #[value(name = "4")]
    W4,
    /// 8-bit words.
    #[value(name = "8")]
    W8,
    /// 16-bit words.
    #[value(name = "16")]
    W16,
    /// 32-bit words.
    #[value(name = "32")]
    W32,
    /// 64-bit words.
    #[value(name = "64")]
    W64,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate a single operation.
    #[command(allow_negative_numbers = true)]
    Eval {
        /// Operation to perform.
        #[arg(value_enum)]
        op: Op,
        /// First operand.
        a: String,
        /// Second operand, or the count for shift and mask operations.
        b: Option<String>,
    },
}

/// ALU operations reachable from the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Op {
    /// a + b
    Add,
    /// a - b
    Sub,
    /// a * b
    Mul,
    /// a / b (truncating; saturates on zero)
    Div,
    /// a % b
    Rem,
    /// quotient and remainder
    #[value(name = "divrem")]
    DivRem,
    /// a & b
    And,
    /// a | b
    Or,
    /// a ^ b
    Xor,
    /// !a
    Not,
    /// -a
    Neg,
    /// arithmetic shift by a signed count
    Ash,
    /// logical shift by a signed count
    Lsh,
    /// circular shift by a signed count
    Csh,
    /// keep the low (count > 0) or high (count < 0) bits
    Mask,
    /// signed comparison
    Cmp,
}

impl Op {
    fn name(self) -> &'static str {
        match self {
            Op::Add => "add",
            Op::Sub => "sub",
            Op::Mul => "mul",
            Op::Div => "div",
            Op::Rem => "rem",
            Op::DivRem => "divrem",
            Op::And => "and",
            Op::Or => "or",
            Op::Xor => "xor",
            Op::Not => "not",
            Op::Neg => "neg",
            Op::Ash => "ash",
            Op::Lsh => "lsh",
            Op::Csh => "csh",
            Op::Mask => "mask",
            Op::Cmp => "cmp",
        }
    }
}

/// A word in both renderings.
#[derive(Debug, Serialize)]
struct WordReport {
    binary: String,
    decimal: i64,
}

impl WordReport {
    fn new<W: BitWord>(word: W) -> Self {
        Self {
            binary: Binary(word).to_string(),
            decimal: word.to_i64(),
        }
    }
}

/// Second operand of `eval`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
enum SecondOperand {
    Word(WordReport),
    Count(i32),
}

/// Result of `eval`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
enum Outcome {
    Word(WordReport),
    DivRem {
        quotient: WordReport,
        remainder: WordReport,
    },
    Ordering(&'static str),
}

#[derive(Debug, Serialize)]
struct EvalReport {
    op: &'static str,
    width: usize,
    a: WordReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    b: Option<SecondOperand>,
    result: Outcome,
}

fn parse_word<W: BitWord>(text: &str) -> Result<W> {
    parse_literal(text).with_context(|| format!("invalid {}-bit operand `{text}`", W::BITS))
}

/// Evaluate `op` on `W`-wide operands.
///
/// # Errors
///
/// Fails on malformed operands or the wrong number of them.
fn evaluate<W: BitWord>(op: Op, a: &str, b: Option<&str>) -> Result<EvalReport> {
    let alu = BitSerialAlu;
    let lhs: W = parse_word(a)?;
    let second = || b.with_context(|| format!("`{}` takes two operands", op.name()));

    let (b, result) = match op {
        Op::Not | Op::Neg => {
            if b.is_some() {
                bail!("`{}` takes one operand", op.name());
            }
            let value = if op == Op::Not {
                alu.not(lhs)
            } else {
                alu.negate(lhs)
            };
            (None, Outcome::Word(WordReport::new(value)))
        }
        Op::Ash | Op::Lsh | Op::Csh | Op::Mask => {
            let text = second()?;
            let count: i32 = text
                .trim()
                .parse()
                .with_context(|| format!("invalid count `{text}`"))?;
            let value = match op {
                Op::Ash => alu.arithmetic_shift(lhs, count),
                Op::Lsh => alu.logical_shift(lhs, count),
                Op::Csh => alu.circular_shift(lhs, count),
                _ => alu.mask(lhs, count),
            };
            (
                Some(SecondOperand::Count(count)),
                Outcome::Word(WordReport::new(value)),
            )
        }
        _ => {
            let rhs: W = parse_word(second()?)?;
            let result = match op {
                Op::DivRem => {
                    let result = alu.div_rem(lhs, rhs);
                    Outcome::DivRem {
                        quotient: WordReport::new(result.quotient),
                        remainder: WordReport::new(result.remainder),
                    }
                }
                Op::Cmp => Outcome::Ordering(match alu.compare(lhs, rhs) {
                    Ordering::Less => "less",
                    Ordering::Equal => "equal",
                    Ordering::Greater => "greater",
                }),
                _ => {
                    let value = match op {
                        Op::Add => alu.add(lhs, rhs),
                        Op::Sub => alu.sub(lhs, rhs),
                        Op::Mul => alu.mul(lhs, rhs),
                        Op::Div => alu.div(lhs, rhs),
                        Op::Rem => alu.rem(lhs, rhs),
                        Op::And => alu.and(lhs, rhs),
                        Op::Or => alu.or(lhs, rhs),
                        _ => alu.xor(lhs, rhs),
                    };
                    Outcome::Word(WordReport::new(value))
                }
            };
            (Some(SecondOperand::Word(WordReport::new(rhs))), result)
        }
    };

    Ok(EvalReport {
        op: op.name(),
        width: W::BITS,
        a: WordReport::new(lhs),
        b,
        result,
    })
}

fn print_word(label: &str, word: &WordReport) {
    println!("{label:<10}{}  ({})", word.binary, word.decimal);
}

/// Execute the parsed command for one word width.
///
/// # Errors
///
/// Propagates evaluation and serialization errors.
fn dispatch<W: BitWord>(args: &Args) -> Result<()> {
    match &args.command {
        Command::Eval { op, a, b } => {
            let report = evaluate::<W>(*op, a, b.as_deref())?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
                return Ok(());
            }
            match &report.result {
                Outcome::Word(word) => print_word(report.op, word),
                Outcome::DivRem {
                    quotient,
                    remainder,
                } => {
                    print_word("quotient", quotient);
                    print_word("remainder", remainder);
                }
                Outcome::Ordering(ordering) => println!("{ordering}"),
            }
        }
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("BITALU_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();
    debug!(width = ?args.width, json = args.json, "bitalu starting");

    match args.width {
        Width::W4 => dispatch::<Word4>(&args),
        Width::W8 => dispatch::<Word8>(&args),
        Width::W16 => dispatch::<Word16>(&args),
        Width::W32 => dispatch::<Word32>(&args),
        Width::W64 => dispatch::<Word64>(&args),
    }
}
