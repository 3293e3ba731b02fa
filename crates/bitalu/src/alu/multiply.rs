//! Shift-and-add multiplier.
//!
//! Both operands are reduced to magnitudes, multiplied as unsigned words by
//! adding the (left-shifting) multiplicand for every set bit of the
//! (right-shifting) multiplier, and the product is negated when exactly one
//! operand was negative. Everything is modulo `2^BITS`, so high-order bits of
//! the product are lost and the result wraps like native two's-complement
//! multiplication.

use tracing::trace;

use super::adder::RippleCarryAdder;
use super::compare::is_zero;
use super::logic::{magnitude, negate};
use super::shift::logical_shift;
use crate::word::{Bit, BitWord};

/// Shift-and-add multiplier.
///
/// This struct provides a namespace for the multiplication algorithm.
/// It has no state - all operations are through associated functions.
pub struct ShiftAddMultiplier;

impl ShiftAddMultiplier {
    /// `a * b`, wrapping.
    ///
    /// Runs at most `BITS` iterations: the multiplier loses one bit per step
    /// and the loop ends as soon as it reaches zero.
    pub fn mul<W: BitWord>(a: W, b: W) -> W {
        let negative = (a.sign() ^ b.sign()) == Bit::One;
        let mut multiplicand = magnitude(a);
        let mut multiplier = magnitude(b);
        let mut product = W::ZERO;

        while !is_zero(multiplier) {
            if multiplier.bit(0) == Bit::One {
                product = RippleCarryAdder::add(product, multiplicand);
            }
            multiplicand = logical_shift(multiplicand, 1);
            multiplier = logical_shift(multiplier, -1);
            trace!(
                product = ?product,
                multiplicand = ?multiplicand,
                multiplier = ?multiplier,
                "shift-add step"
            );
        }

        if negative {
            negate(product)
        } else {
            product
        }
    }
}
