//! bitalu - a bit-serial two's-complement ALU
//!
//! Fixed-width word arithmetic and logic computed one bit at a time, the way
//! a hardware ALU does it, without handing the arithmetic to the host's
//! integer instructions.
//!
//! # Layers
//!
//! ```text
//! alu      AluOps, BitSerialAlu               method facade
//!          divide, multiply                   restoring divide, shift-and-add
//!          adder, logic, shift, compare       ripple carry, gates, shifts
//! word     BitWord, Bit, Word<N>              one-bit read/write seam
//! ```
//!
//! Every algorithm in [`alu`] is generic over [`BitWord`], which exposes
//! nothing but single-bit access, whole-word copy and the width constants.
//!
//! # Semantics
//!
//! | Situation | Behavior |
//! |-----------|----------|
//! | Overflow in add, sub, mul | wraps modulo `2^BITS` |
//! | `divide(a, 0)` | `MAX` if `a >= 0`, else `MIN`; remainder `ZERO` |
//! | `MIN / -1` | `MIN` |
//! | Shift count beyond the width | clamped (`BITS - 1` for shifts, `BITS` for mask) |
//! | Circular shift | amount taken modulo `BITS` |
//!
//! # Example
//!
//! ```
//! use bitalu::prelude::*;
//!
//! let alu = BitSerialAlu;
//! let a: Word8 = "0000 0110".parse().unwrap();
//! let b = Word8::from_i64(-1);
//!
//! assert_eq!(alu.add(a, b).to_string(), "0000 0101");
//! assert_eq!(alu.arithmetic_shift(b, -3), b);
//! assert_eq!(alu.div(a, Word8::ZERO), Word8::MAX);
//!
//! // Word<N> also has the usual operators
//! assert_eq!((a * b).to_i64(), -6);
//! ```
//!
//! # Features
//!
//! - `std` (default): text parsing of words (`FromStr`, [`word::parse_literal`])
//!   and its error type. Without it the crate is `no_std` and allocation free.

#![cfg_attr(not(feature = "std"), no_std)]

// Bits, words and the accessor seam
pub mod word;

// Comparator, shifts, logic, adder, multiplier, divider
pub mod alu;

pub use alu::{AluOps, BitSerialAlu, DivRem};
pub use word::{Bit, BitWord, Word, Word16, Word32, Word4, Word64, Word8};

/// Prelude module for convenient imports.
///
/// ```
/// use bitalu::prelude::*;
/// ```
pub mod prelude {
    pub use crate::alu::{AluOps, BitSerialAlu, DivRem};
    #[cfg(feature = "std")]
    pub use crate::word::parse_literal;
    pub use crate::word::{
        Binary, Bit, BitWord, Direction, Word, Word16, Word32, Word4, Word64, Word8,
    };
}
