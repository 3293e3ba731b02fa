//! Bit-serial arithmetic and logic.
//!
//! Every algorithm in this module reads and writes words one bit at a time
//! through [`BitWord`](crate::word::BitWord); host integer operators are never
//! used on word contents.
//!
//! # Units
//!
//! | Unit | Module | Operations |
//! |------|--------|------------|
//! | Comparator | [`compare`] | `is_negative`, `is_non_negative`, `is_zero`, `compare` |
//! | Shift/mask | [`shift`] | `arithmetic_shift`, `logical_shift`, `circular_shift`, `mask` |
//! | Logic | [`logic`] | `and`, `or`, `xor`, `not`, `negate`, `nand`, `nor`, `xnor`, `andn` |
//! | Adder | [`adder`] | `RippleCarryAdder::{add, sub, inc, dec}` |
//! | Multiplier | [`multiply`] | `ShiftAddMultiplier::mul` |
//! | Divider | [`divide`] | `RestoringDivider::{div_rem, div, rem}` |
//!
//! The multiplier and divider sit on top of the other units. [`AluOps`]
//! exposes all of them as methods on a backend such as [`BitSerialAlu`].
//!
//! # Overflow
//!
//! Arithmetic wraps modulo `2^BITS`, shift counts are clamped, and division
//! by zero saturates. No operation fails.

pub mod adder;
pub mod compare;
pub mod divide;
pub mod logic;
pub mod multiply;
pub mod ops;
mod operators;
pub mod shift;

pub use adder::{full_add, RippleCarryAdder};
pub use divide::{DivRem, RestoringDivider};
pub use multiply::ShiftAddMultiplier;
pub use ops::{AluOps, BitSerialAlu};
