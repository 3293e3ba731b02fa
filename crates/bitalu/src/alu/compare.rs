//! Sign and zero predicates.

use core::cmp::Ordering;

use super::adder::RippleCarryAdder;
use crate::word::{Bit, BitWord, Direction};

/// True iff the sign bit is set.
#[inline]
pub fn is_negative<W: BitWord>(op: W) -> bool {
    op.sign() == Bit::One
}

/// True iff the sign bit is clear.
#[inline]
pub fn is_non_negative<W: BitWord>(op: W) -> bool {
    !is_negative(op)
}

/// True iff every bit is clear.
#[inline]
pub fn is_zero<W: BitWord>(op: W) -> bool {
    W::positions(Direction::Ascending).all(|b| op.bit(b) == Bit::Zero)
}

/// Signed comparison of two words.
///
/// Operands of opposite sign are ordered by sign alone. Operands of the same
/// sign cannot overflow when subtracted, so the sign of `a - b` decides.
pub fn compare<W: BitWord>(a: W, b: W) -> Ordering {
    match (is_negative(a), is_negative(b)) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => {
            let diff = RippleCarryAdder::sub(a, b);
            if is_zero(diff) {
                Ordering::Equal
            } else if is_negative(diff) {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word::{Word4, Word8};

    #[test]
    fn test_sign_predicates() {
        let negative: Word8 = "1111 0000".parse().unwrap();
        let positive: Word8 = "0001 0000".parse().unwrap();

        assert!(is_negative(negative));
        assert!(!is_non_negative(negative));
        assert!(!is_negative(positive));
        assert!(is_non_negative(positive));

        // zero is non-negative
        assert!(is_non_negative(Word8::ZERO));
        assert!(is_negative(Word8::MIN));
        assert!(is_non_negative(Word8::MAX));
    }

    #[test]
    fn test_is_zero() {
        assert!(is_zero(Word8::ZERO));
        assert!(is_zero(0u32));
        assert!(!is_zero(Word8::MIN));
        assert!(!is_zero(Word8::one()));
        assert!(!is_zero(0x0FFF_FFFFu32));
    }

    #[test]
    fn test_compare_exhaustive_4_bit() {
        for a in -8..=7i64 {
            for b in -8..=7i64 {
                assert_eq!(
                    compare(Word4::from_i64(a), Word4::from_i64(b)),
                    a.cmp(&b),
                    "compare({a}, {b})"
                );
            }
        }
    }

    #[test]
    fn test_compare_extremes() {
        assert_eq!(compare(Word8::MIN, Word8::MAX), Ordering::Less);
        assert_eq!(compare(Word8::MAX, Word8::MIN), Ordering::Greater);
        assert_eq!(compare(Word8::MIN, Word8::MIN), Ordering::Equal);
        assert_eq!(compare(u32::MIN, u32::MAX), Ordering::Greater); // 0 > -1
    }
}
