//! Method-style access to every ALU operation.
//!
//! The `AluOps` trait gathers the comparator, shift unit, logic unit, adder,
//! multiplier and divider behind one receiver. Every method has a default
//! implementation delegating to the bit-serial algorithms, so a backend only
//! overrides what it can do better.

use core::cmp::Ordering;

use super::adder::RippleCarryAdder;
use super::divide::{DivRem, RestoringDivider};
use super::multiply::ShiftAddMultiplier;
use super::{compare, logic, shift};
use crate::word::BitWord;

/// The full operation set of the ALU over words of type `W`.
///
/// All operands are taken by value and the result is returned, so storing a
/// result over one of its own operands is always safe:
///
/// ```
/// use bitalu::alu::{AluOps, BitSerialAlu};
/// use bitalu::word::{BitWord, Word8};
///
/// let alu = BitSerialAlu;
/// let mut x = Word8::from_i64(20);
/// let y = Word8::from_i64(22);
/// x = alu.add(x, y);
/// x = alu.mul(x, x);
/// assert_eq!(x.to_i64(), (42 * 42) as i8 as i64);
/// ```
///
/// # Overriding
///
/// ```
/// use bitalu::alu::AluOps;
///
/// struct NativeAdd;
///
/// impl AluOps<u32> for NativeAdd {
///     fn add(&self, a: u32, b: u32) -> u32 {
///         a.wrapping_add(b)
///     }
///     // everything else stays bit-serial
/// }
///
/// let alu = NativeAdd;
/// assert_eq!(alu.add(u32::MAX, 2), 1);
/// assert_eq!(alu.mul(6, 7), 42);
/// ```
pub trait AluOps<W: BitWord> {
    // -------------------------------------------------------------------------
    // Comparison
    // -------------------------------------------------------------------------

    /// True iff the sign bit is set.
    #[inline]
    fn is_negative(&self, op: W) -> bool {
        compare::is_negative(op)
    }

    /// True iff the sign bit is clear.
    #[inline]
    fn is_non_negative(&self, op: W) -> bool {
        compare::is_non_negative(op)
    }

    /// True iff every bit is clear.
    #[inline]
    fn is_zero(&self, op: W) -> bool {
        compare::is_zero(op)
    }

    /// Signed ordering of `a` and `b`.
    #[inline]
    fn compare(&self, a: W, b: W) -> Ordering {
        compare::compare(a, b)
    }

    /// Signed `a < b`.
    #[inline]
    fn lt(&self, a: W, b: W) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    /// Signed `a <= b`.
    #[inline]
    fn le(&self, a: W, b: W) -> bool {
        self.compare(a, b) != Ordering::Greater
    }

    /// Signed `a > b`.
    #[inline]
    fn gt(&self, a: W, b: W) -> bool {
        self.compare(a, b) == Ordering::Greater
    }

    /// Signed `a >= b`.
    #[inline]
    fn ge(&self, a: W, b: W) -> bool {
        self.compare(a, b) != Ordering::Less
    }

    /// `a == b`, decided by the comparator rather than `PartialEq`.
    #[inline]
    fn eq(&self, a: W, b: W) -> bool {
        self.compare(a, b) == Ordering::Equal
    }

    /// `a != b`
    #[inline]
    fn ne(&self, a: W, b: W) -> bool {
        !self.eq(a, b)
    }

    // -------------------------------------------------------------------------
    // Shift and mask
    // -------------------------------------------------------------------------

    /// Arithmetic shift; see [`shift::arithmetic_shift`].
    #[inline]
    fn arithmetic_shift(&self, op: W, count: i32) -> W {
        shift::arithmetic_shift(op, count)
    }

    /// Logical shift; see [`shift::logical_shift`].
    #[inline]
    fn logical_shift(&self, op: W, count: i32) -> W {
        shift::logical_shift(op, count)
    }

    /// Rotation; see [`shift::circular_shift`].
    #[inline]
    fn circular_shift(&self, op: W, count: i32) -> W {
        shift::circular_shift(op, count)
    }

    /// Keep the low or high `|count|` bits; see [`shift::mask`].
    #[inline]
    fn mask(&self, op: W, count: i32) -> W {
        shift::mask(op, count)
    }

    // -------------------------------------------------------------------------
    // Logic
    // -------------------------------------------------------------------------

    /// `a & b`
    #[inline]
    fn and(&self, a: W, b: W) -> W {
        logic::and(a, b)
    }

    /// `a | b`
    #[inline]
    fn or(&self, a: W, b: W) -> W {
        logic::or(a, b)
    }

    /// `a ^ b`
    #[inline]
    fn xor(&self, a: W, b: W) -> W {
        logic::xor(a, b)
    }

    /// `!a`
    #[inline]
    fn not(&self, a: W) -> W {
        logic::not(a)
    }

    /// `-a`, wrapping.
    #[inline]
    fn negate(&self, a: W) -> W {
        logic::negate(a)
    }

    /// `!(a & b)`
    #[inline]
    fn nand(&self, a: W, b: W) -> W {
        logic::nand(a, b)
    }

    /// `!(a | b)`
    #[inline]
    fn nor(&self, a: W, b: W) -> W {
        logic::nor(a, b)
    }

    /// `!(a ^ b)`
    #[inline]
    fn xnor(&self, a: W, b: W) -> W {
        logic::xnor(a, b)
    }

    /// `a & !b`
    #[inline]
    fn andn(&self, a: W, b: W) -> W {
        logic::andn(a, b)
    }

    // -------------------------------------------------------------------------
    // Arithmetic
    // -------------------------------------------------------------------------

    /// `a + b`, wrapping.
    #[inline]
    fn add(&self, a: W, b: W) -> W {
        RippleCarryAdder::add(a, b)
    }

    /// `a - b`, wrapping.
    #[doc(alias = "subtract")]
    #[inline]
    fn sub(&self, a: W, b: W) -> W {
        RippleCarryAdder::sub(a, b)
    }

    /// `a + 1`, wrapping.
    #[inline]
    fn inc(&self, a: W) -> W {
        RippleCarryAdder::inc(a)
    }

    /// `a - 1`, wrapping.
    #[inline]
    fn dec(&self, a: W) -> W {
        RippleCarryAdder::dec(a)
    }

    /// `a * b`, wrapping.
    #[doc(alias = "multiply")]
    #[inline]
    fn mul(&self, a: W, b: W) -> W {
        ShiftAddMultiplier::mul(a, b)
    }

    /// Truncated `a / b`; saturates to `MAX`/`MIN` when `b` is zero.
    #[doc(alias = "divide")]
    #[inline]
    fn div(&self, a: W, b: W) -> W {
        RestoringDivider::div(a, b)
    }

    /// Remainder of `a / b`, with the sign of `a`; `ZERO` when `b` is zero.
    #[doc(alias = "remainder")]
    #[inline]
    fn rem(&self, a: W, b: W) -> W {
        RestoringDivider::rem(a, b)
    }

    /// Quotient and remainder in one pass.
    #[inline]
    fn div_rem(&self, a: W, b: W) -> DivRem<W> {
        RestoringDivider::div_rem(a, b)
    }
}

/// Bit-serial backend: every operation runs the default algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub struct BitSerialAlu;

impl<W: BitWord> AluOps<W> for BitSerialAlu {}
