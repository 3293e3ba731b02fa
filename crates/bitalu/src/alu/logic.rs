//! Bitwise logic unit.
//!
//! Each output bit depends only on the input bits at the same index, so
//! these operations carry nothing between positions.
//!
//! ```text
//! and(1111 0000 0110 1001, 1111 1111 0000 0000) -> 1111 0000 0000 0000
//! or (1111 0000 0110 1001, 0000 1111 0000 0000) -> 1111 1111 0110 1001
//! xor(1111 0000 0110 1001, 1111 1111 1111 1111) -> 0000 1111 1001 0110
//! not(0011 0000 0000 0000)                      -> 1100 1111 1111 1111
//! ```

use super::adder::RippleCarryAdder;
use super::compare::is_negative;
use crate::word::{Bit, BitWord, Direction};

#[inline]
fn combine<W: BitWord>(a: W, b: W, gate: impl Fn(Bit, Bit) -> Bit) -> W {
    let mut result = W::ZERO;
    for i in W::positions(Direction::Ascending) {
        result.set_bit(i, gate(a.bit(i), b.bit(i)));
    }
    result
}

/// Bitwise AND.
pub fn and<W: BitWord>(a: W, b: W) -> W {
    combine(a, b, |x, y| x & y)
}

/// Bitwise OR.
pub fn or<W: BitWord>(a: W, b: W) -> W {
    combine(a, b, |x, y| x | y)
}

/// Bitwise XOR.
pub fn xor<W: BitWord>(a: W, b: W) -> W {
    combine(a, b, |x, y| x ^ y)
}

/// Bitwise NOT.
pub fn not<W: BitWord>(a: W) -> W {
    let mut result = W::ZERO;
    for i in W::positions(Direction::Ascending) {
        result.set_bit(i, a.bit(i).complement());
    }
    result
}

/// Two's complement negation, `0 - a`.
///
/// `negate(MIN) == MIN`: the most negative word has no positive counterpart.
pub fn negate<W: BitWord>(a: W) -> W {
    RippleCarryAdder::sub(W::ZERO, a)
}

/// `a` if non-negative, otherwise `negate(a)`.
///
/// The result read as unsigned is always the true magnitude, including for
/// `MIN`.
pub fn magnitude<W: BitWord>(a: W) -> W {
    if is_negative(a) {
        negate(a)
    } else {
        a
    }
}

/// NAND: `!(a & b)`
pub fn nand<W: BitWord>(a: W, b: W) -> W {
    combine(a, b, |x, y| !(x & y))
}

/// NOR: `!(a | b)`
pub fn nor<W: BitWord>(a: W, b: W) -> W {
    combine(a, b, |x, y| !(x | y))
}

/// XNOR (equivalence): `!(a ^ b)`
pub fn xnor<W: BitWord>(a: W, b: W) -> W {
    combine(a, b, |x, y| !(x ^ y))
}

/// AND-NOT (bit clear): `a & !b`
pub fn andn<W: BitWord>(a: W, b: W) -> W {
    combine(a, b, |x, y| x & !y)
}
