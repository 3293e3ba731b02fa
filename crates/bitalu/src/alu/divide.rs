//! Restoring divider.
//!
//! Division works on magnitudes. Walking the dividend from its most
//! significant bit down, each step shifts the partial remainder left, brings
//! in the next dividend bit, and tries to subtract the divisor. A
//! non-negative trial difference is kept and sets the matching quotient bit;
//! a negative one is discarded (the remainder is "restored").
//!
//! The partial remainder never exceeds `2^(BITS-1)` and stays below twice
//! the divisor, so the signed test on the trial difference is exact even for
//! the magnitude of `MIN`.
//!
//! Signs follow truncating division: the quotient is negative iff the operand
//! signs differ and the remainder takes the sign of the dividend.
//!
//! # Division by zero
//!
//! Not an error. The quotient saturates to `MAX` for a non-negative dividend
//! and `MIN` for a negative one; the remainder is `ZERO`.

use tracing::{debug, trace};

use super::adder::RippleCarryAdder;
use super::compare::{is_negative, is_non_negative, is_zero};
use super::logic::{magnitude, negate};
use super::shift::logical_shift;
use crate::word::{Bit, BitWord, Direction};

/// Quotient and remainder of one division.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DivRem<W> {
    /// Truncated quotient.
    pub quotient: W,
    /// Remainder, with the sign of the dividend.
    pub remainder: W,
}

/// Restoring binary divider.
///
/// This struct provides a namespace for the division algorithm.
/// It has no state - all operations are through associated functions.
pub struct RestoringDivider;

impl RestoringDivider {
    /// Quotient and remainder of `dividend / divisor`.
    pub fn div_rem<W: BitWord>(dividend: W, divisor: W) -> DivRem<W> {
        if is_zero(divisor) {
            let quotient = if is_non_negative(dividend) { W::MAX } else { W::MIN };
            debug!(dividend = ?dividend, quotient = ?quotient, "division by zero saturates");
            return DivRem {
                quotient,
                remainder: W::ZERO,
            };
        }

        let negative_quotient = (dividend.sign() ^ divisor.sign()) == Bit::One;
        let negative_remainder = is_negative(dividend);
        let numerator = magnitude(dividend);
        let denominator = magnitude(divisor);

        let mut quotient = W::ZERO;
        let mut remainder = W::ZERO;
        for i in W::positions(Direction::Descending) {
            remainder = logical_shift(remainder, 1);
            remainder.set_bit(0, numerator.bit(i));

            let trial = RippleCarryAdder::sub(remainder, denominator);
            if is_non_negative(trial) {
                remainder = trial;
                quotient.set_bit(i, Bit::One);
            }
            trace!(bit = i, quotient = ?quotient, remainder = ?remainder, "restoring step");
        }

        DivRem {
            quotient: if negative_quotient {
                negate(quotient)
            } else {
                quotient
            },
            remainder: if negative_remainder {
                negate(remainder)
            } else {
                remainder
            },
        }
    }

    /// Truncated quotient of `dividend / divisor`.
    #[inline]
    pub fn div<W: BitWord>(dividend: W, divisor: W) -> W {
        Self::div_rem(dividend, divisor).quotient
    }

    /// Remainder of `dividend / divisor`.
    #[inline]
    pub fn rem<W: BitWord>(dividend: W, divisor: W) -> W {
        Self::div_rem(dividend, divisor).remainder
    }
}
