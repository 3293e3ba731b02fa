//! Shift and mask unit.
//!
//! Every operation takes a signed count: positive moves bits toward the
//! sign bit (left), negative moves them toward bit 0 (right). For `mask` the
//! sign instead picks which end of the word is kept.
//!
//! Operands arrive by value, so each function reads from its own snapshot
//! while assembling the result in a fresh local word.
//!
//! # Examples (most significant bit first)
//!
//! ```text
//! arithmetic_shift(1010 1011 1111 1111,  5) -> 1111 1111 1110 0000
//! arithmetic_shift(1111 1111 0000 0000, -5) -> 1111 1111 1111 1000
//! logical_shift   (1111 1111 1111 1111, -5) -> 0000 0111 1111 1111
//! circular_shift  (1010 1011 1111 1111,  4) -> 1011 1111 1111 1010
//! circular_shift  (1010 1011 1111 1111, -4) -> 1111 1010 1011 1111
//! mask            (1010 1011 1111 1111,  5) -> 0000 0000 0001 1111
//! mask            (1010 1011 1111 1111, -5) -> 1010 1000 0000 0000
//! ```

use crate::word::{BitPositions, BitWord, Direction};

/// Magnitude of `count`, clamped to `limit`.
#[inline]
fn clamp(count: i32, limit: usize) -> usize {
    (count.unsigned_abs() as usize).min(limit)
}

/// Arithmetic shift: signed multiply (`count > 0`) or divide (`count < 0`)
/// by a power of two.
///
/// Left shifts fill with zeros from bit 0; right shifts replicate the sign
/// bit into the vacated high positions. In both directions the result keeps
/// the operand's sign bit. The count magnitude is clamped to `BITS - 1`.
pub fn arithmetic_shift<W: BitWord>(op: W, count: i32) -> W {
    let c = clamp(count, W::TOP_BIT);
    let sign = op.sign();
    let mut result = W::ZERO;

    if count < 0 {
        // move value bits right
        for b in BitPositions::new(c..W::TOP_BIT, Direction::Ascending) {
            result.set_bit(b - c, op.bit(b));
        }
        // sign-extend the vacated high bits
        for b in BitPositions::new(W::TOP_BIT - c..W::TOP_BIT, Direction::Ascending) {
            result.set_bit(b, sign);
        }
    } else {
        // move value bits left; vacated low bits stay zero
        for b in BitPositions::new(c..W::TOP_BIT, Direction::Descending) {
            result.set_bit(b, op.bit(b - c));
        }
    }

    result.set_bit(W::TOP_BIT, sign);
    result
}

/// Logical shift: zero-fill from whichever end is vacated, sign included.
///
/// The count magnitude is clamped to `BITS - 1`.
pub fn logical_shift<W: BitWord>(op: W, count: i32) -> W {
    let c = clamp(count, W::TOP_BIT);
    let mut result = W::ZERO;

    if count < 0 {
        for b in BitPositions::new(c..W::BITS, Direction::Ascending) {
            result.set_bit(b - c, op.bit(b));
        }
    } else {
        for b in BitPositions::new(c..W::BITS, Direction::Descending) {
            result.set_bit(b, op.bit(b - c));
        }
    }

    result
}

/// Circular shift (rotation).
///
/// Bits leaving one end re-enter at the other. The effective amount is
/// `|count| mod BITS`; a zero amount returns the operand unchanged.
pub fn circular_shift<W: BitWord>(op: W, count: i32) -> W {
    let amount = (count.unsigned_abs() as usize) % W::BITS;
    if amount == 0 {
        return op;
    }

    // a right rotation by r is a left rotation by BITS - r
    let left = if count < 0 { W::BITS - amount } else { amount };

    let mut result = W::ZERO;
    for b in W::positions(Direction::Ascending) {
        result.set_bit((b + left) % W::BITS, op.bit(b));
    }
    result
}

/// Keep the low (`count > 0`) or high (`count < 0`) `|count|` bits and clear
/// the rest.
///
/// The count magnitude is clamped to `BITS`; a zero count clears everything.
pub fn mask<W: BitWord>(op: W, count: i32) -> W {
    let c = clamp(count, W::BITS);
    let kept = if count < 0 { W::BITS - c..W::BITS } else { 0..c };

    let mut result = W::ZERO;
    for b in BitPositions::new(kept, Direction::Ascending) {
        result.set_bit(b, op.bit(b));
    }
    result
}
