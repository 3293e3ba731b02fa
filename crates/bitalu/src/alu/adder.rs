//! Ripple-carry adder and subtractor.
//!
//! Addition walks from bit 0 to the sign bit. At each position the two
//! operand bits and the incoming carry sum to a value in `0..=3`; its low bit
//! is the result bit and its high bit is carried into the next position.
//! Overflow out of the sign bit is dropped, so results wrap.
//!
//! ```text
//!     0 1 1 0  (6)
//!   + 1 1 1 1  (-1)
//!     -------
//!           1  sum
//!         0    carry
//!     -------
//!         0 1  sum
//!       1      carry
//!     -------
//!       1 0 1  sum
//!     1        carry
//!     -------
//!     0 1 0 1  sum
//!   1          carry (dropped)
//! ```
//!
//! Subtraction reuses the same ripple: `a - b = a + !b + 1`, with the `+ 1`
//! supplied as the initial carry.

use super::logic;
use crate::word::{Bit, BitWord, Direction};

/// One full-adder cell: `(sum, carry_out)` for `a + b + carry_in`.
#[inline]
pub fn full_add(a: Bit, b: Bit, carry_in: Bit) -> (Bit, Bit) {
    let sum = a.value() + b.value() + carry_in.value();
    (Bit::narrow(sum), Bit::carry(sum))
}

/// Ripple-carry adder.
///
/// This struct provides a namespace for the adder algorithm.
/// It has no state - all operations are through associated functions.
pub struct RippleCarryAdder;

impl RippleCarryAdder {
    /// `a + b`, wrapping.
    #[inline]
    pub fn add<W: BitWord>(a: W, b: W) -> W {
        Self::ripple(a, b, Bit::Zero)
    }

    /// `a - b`, wrapping. Computed as `a + !b` with an initial carry of 1.
    #[inline]
    pub fn sub<W: BitWord>(a: W, b: W) -> W {
        Self::ripple(a, logic::not(b), Bit::One)
    }

    /// `a + 1`, wrapping.
    #[inline]
    pub fn inc<W: BitWord>(a: W) -> W {
        Self::ripple(a, W::ZERO, Bit::One)
    }

    /// `a - 1`, wrapping: `a` plus the all-ones word.
    #[inline]
    pub fn dec<W: BitWord>(a: W) -> W {
        Self::ripple(a, logic::not(W::ZERO), Bit::Zero)
    }

    fn ripple<W: BitWord>(a: W, b: W, carry_in: Bit) -> W {
        let mut result = W::ZERO;
        let mut carry = carry_in;
        for i in W::positions(Direction::Ascending) {
            let (sum, carry_out) = full_add(a.bit(i), b.bit(i), carry);
            result.set_bit(i, sum);
            carry = carry_out;
        }
        result
    }
}
