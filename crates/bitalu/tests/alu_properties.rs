//! Property-based tests for the bit-serial ALU.
//!
//! Native scalars (`u8`, `u16`, `u32`) implement `BitWord`, so every
//! algorithm can run on host integers and be checked against the host's own
//! wrapping two's-complement instructions.

use std::cmp::Ordering;

use bitalu::alu::{AluOps, BitSerialAlu};
use bitalu::word::{BitWord, Word16, Word32};
use proptest::prelude::*;

const ALU: BitSerialAlu = BitSerialAlu;

fn native_mask(x: u32, count: i32) -> u32 {
    let k = count.unsigned_abs().min(32);
    let low = if k >= 32 { u32::MAX } else { (1u32 << k) - 1 };
    if count < 0 {
        x & low.rotate_right(k)
    } else {
        x & low
    }
}

// =============================================================================
// Agreement with native integer arithmetic
// =============================================================================

proptest! {
    /// add/sub/mul match native wrapping ops on 32 bits
    #[test]
    fn prop_arithmetic_matches_native_32(a: i32, b: i32) {
        let (x, y) = (a as u32, b as u32);
        prop_assert_eq!(ALU.add(x, y) as i32, a.wrapping_add(b));
        prop_assert_eq!(ALU.sub(x, y) as i32, a.wrapping_sub(b));
        prop_assert_eq!(ALU.mul(x, y) as i32, a.wrapping_mul(b));
    }

    /// div/rem match native truncating division on 32 bits
    #[test]
    fn prop_division_matches_native_32(a in any::<i32>(), b in any::<i32>().prop_filter("non-zero", |b| *b != 0)) {
        let (x, y) = (a as u32, b as u32);
        prop_assert_eq!(ALU.div(x, y) as i32, a.wrapping_div(b));
        prop_assert_eq!(ALU.rem(x, y) as i32, a.wrapping_rem(b));
    }

    /// every arithmetic op matches native on 16 bits
    #[test]
    fn prop_arithmetic_matches_native_16(a: i16, b: i16) {
        let (x, y) = (a as u16, b as u16);
        prop_assert_eq!(ALU.add(x, y) as i16, a.wrapping_add(b));
        prop_assert_eq!(ALU.sub(x, y) as i16, a.wrapping_sub(b));
        prop_assert_eq!(ALU.mul(x, y) as i16, a.wrapping_mul(b));
        if b != 0 {
            prop_assert_eq!(ALU.div(x, y) as i16, a.wrapping_div(b));
            prop_assert_eq!(ALU.rem(x, y) as i16, a.wrapping_rem(b));
        }
    }

    /// every arithmetic op matches native on 8 bits
    #[test]
    fn prop_arithmetic_matches_native_8(a: i8, b: i8) {
        let (x, y) = (a as u8, b as u8);
        prop_assert_eq!(ALU.add(x, y) as i8, a.wrapping_add(b));
        prop_assert_eq!(ALU.sub(x, y) as i8, a.wrapping_sub(b));
        prop_assert_eq!(ALU.mul(x, y) as i8, a.wrapping_mul(b));
        if b != 0 {
            prop_assert_eq!(ALU.div(x, y) as i8, a.wrapping_div(b));
            prop_assert_eq!(ALU.rem(x, y) as i8, a.wrapping_rem(b));
        }
    }

    /// logic gates match native bitwise ops
    #[test]
    fn prop_logic_matches_native(x: u32, y: u32) {
        prop_assert_eq!(ALU.and(x, y), x & y);
        prop_assert_eq!(ALU.or(x, y), x | y);
        prop_assert_eq!(ALU.xor(x, y), x ^ y);
        prop_assert_eq!(ALU.not(x), !x);
        prop_assert_eq!(ALU.negate(x), x.wrapping_neg());
    }

    /// compare matches signed native ordering
    #[test]
    fn prop_compare_matches_native(a: i32, b: i32) {
        prop_assert_eq!(ALU.compare(a as u32, b as u32), a.cmp(&b));
        prop_assert_eq!(ALU.lt(a as u32, b as u32), a < b);
        prop_assert_eq!(ALU.is_negative(a as u32), a < 0);
        prop_assert_eq!(ALU.is_zero(a as u32), a == 0);
    }
}

// =============================================================================
// Shifts and masks against native shifts
// =============================================================================

proptest! {
    /// right arithmetic shift is native `>>` on i32 with the count clamped
    #[test]
    fn prop_ash_right_matches_native(a in any::<i32>(), c in 0i32..100) {
        let k = c.min(31) as u32;
        prop_assert_eq!(ALU.arithmetic_shift(a as u32, -c) as i32, a >> k);
    }

    /// left arithmetic shift is native `<<` with the sign bit restored
    #[test]
    fn prop_ash_left_keeps_sign(a in any::<i32>(), c in 0i32..100) {
        let k = c.min(31) as u32;
        let sign = (a as u32) & 0x8000_0000;
        let expected = (((a as u32) << k) & 0x7FFF_FFFF) | sign;
        prop_assert_eq!(ALU.arithmetic_shift(a as u32, c), expected);
    }

    /// logical shifts are native `<<` and `>>` on u32 with the count clamped
    #[test]
    fn prop_lsh_matches_native(x in any::<u32>(), c in 0i32..100) {
        let k = c.min(31) as u32;
        prop_assert_eq!(ALU.logical_shift(x, c), x << k);
        prop_assert_eq!(ALU.logical_shift(x, -c), x >> k);
    }

    /// circular shifts are native rotations
    #[test]
    fn prop_csh_matches_native(x in any::<u32>(), c in -200i32..200) {
        let expected = if c < 0 {
            x.rotate_right(c.unsigned_abs())
        } else {
            x.rotate_left(c.unsigned_abs())
        };
        prop_assert_eq!(ALU.circular_shift(x, c), expected);
    }

    /// masks keep exactly the low or high `|c|` bits
    #[test]
    fn prop_mask_matches_native(x in any::<u32>(), c in -40i32..40) {
        prop_assert_eq!(ALU.mask(x, c), native_mask(x, c));
    }

    /// i32::MIN counts clamp instead of overflowing
    #[test]
    fn prop_extreme_counts(x: u32) {
        prop_assert_eq!(ALU.arithmetic_shift(x, i32::MIN), ALU.arithmetic_shift(x, -31));
        prop_assert_eq!(ALU.logical_shift(x, i32::MIN), x >> 31);
        prop_assert_eq!(ALU.mask(x, i32::MIN), x);
        prop_assert_eq!(ALU.circular_shift(x, i32::MIN), x);
    }
}

// =============================================================================
// Algebraic properties
// =============================================================================

proptest! {
    /// add(w, negate(w)) = 0
    #[test]
    fn prop_additive_inverse(x: u32) {
        prop_assert_eq!(ALU.add(x, ALU.negate(x)), 0);
    }

    /// sub(a, b) = add(a, negate(b))
    #[test]
    fn prop_sub_is_add_negate(x: u32, y: u32) {
        prop_assert_eq!(ALU.sub(x, y), ALU.add(x, ALU.negate(y)));
    }

    /// not is an involution
    #[test]
    fn prop_not_involution(x: u32) {
        prop_assert_eq!(ALU.not(ALU.not(x)), x);
    }

    /// inc and dec are inverses
    #[test]
    fn prop_inc_dec_inverse(x: u32) {
        prop_assert_eq!(ALU.inc(ALU.dec(x)), x);
        prop_assert_eq!(ALU.dec(ALU.inc(x)), x);
    }

    /// ash by c then -c keeps the sign and restores the surviving bits
    #[test]
    fn prop_ash_round_trip(x in any::<u32>(), c in 0i32..32) {
        let back = ALU.arithmetic_shift(ALU.arithmetic_shift(x, c), -c);
        let surviving = 31 - c.min(31);
        prop_assert_eq!(back.sign(), x.sign());
        prop_assert_eq!(ALU.mask(back, surviving), ALU.mask(x, surviving));
    }

    /// a == div(a, b) * b + rem(a, b), with truncating signs
    #[test]
    fn prop_division_identity(a in any::<i32>(), b in any::<i32>().prop_filter("non-zero", |b| *b != 0)) {
        let (x, y) = (a as u32, b as u32);
        let q = ALU.div(x, y);
        let r = ALU.rem(x, y);
        prop_assert_eq!(ALU.add(ALU.mul(q, y), r), x);

        if !ALU.is_zero(q) && !(a == i32::MIN && b == -1) {
            prop_assert_eq!(ALU.is_negative(q), (a < 0) != (b < 0));
        }
        if !ALU.is_zero(r) {
            prop_assert_eq!(ALU.is_negative(r), a < 0);
        }
    }

    /// division by zero saturates and leaves no remainder
    #[test]
    fn prop_divide_by_zero(a: i32) {
        let expected = if a >= 0 { <u32 as BitWord>::MAX } else { <u32 as BitWord>::MIN };
        let result = ALU.div_rem(a as u32, 0);
        prop_assert_eq!(result.quotient, expected);
        prop_assert_eq!(result.remainder, 0);
    }

    /// BITS rotations, or +k then -k, are the identity
    #[test]
    fn prop_rotation_identity(x in any::<u16>(), k in -64i32..64) {
        let mut w = x;
        for _ in 0..16 {
            w = ALU.circular_shift(w, k);
        }
        prop_assert_eq!(w, x);
        prop_assert_eq!(ALU.circular_shift(ALU.circular_shift(x, k), -k), x);
    }

    /// mul and add commute
    #[test]
    fn prop_commutative(x: u32, y: u32) {
        prop_assert_eq!(ALU.add(x, y), ALU.add(y, x));
        prop_assert_eq!(ALU.mul(x, y), ALU.mul(y, x));
    }
}

// =============================================================================
// Word<N> agrees with native storage
// =============================================================================

proptest! {
    /// bit-array words and native scalars give identical results
    #[test]
    fn prop_word_matches_scalar_16(a in any::<i16>(), b in any::<i16>(), c in -20i32..20) {
        let (wa, wb) = (Word16::from_i64(a.into()), Word16::from_i64(b.into()));
        let (sa, sb) = (a as u16, b as u16);
        prop_assert_eq!(ALU.mul(wa, wb).to_i64(), ALU.mul(sa, sb).to_i64());
        prop_assert_eq!(ALU.div(wa, wb).to_i64(), ALU.div(sa, sb).to_i64());
        prop_assert_eq!(ALU.rem(wa, wb).to_i64(), ALU.rem(sa, sb).to_i64());
        prop_assert_eq!(ALU.arithmetic_shift(wa, c).to_i64(), ALU.arithmetic_shift(sa, c).to_i64());
        prop_assert_eq!(ALU.circular_shift(wa, c).to_i64(), ALU.circular_shift(sa, c).to_i64());
        prop_assert_eq!(ALU.mask(wa, c).to_i64(), ALU.mask(sa, c).to_i64());
    }

    /// operators on Word32 follow native i32 semantics
    #[test]
    fn prop_word_operators_32(a: i32, b: i32) {
        let (wa, wb) = (Word32::from_i64(a.into()), Word32::from_i64(b.into()));
        prop_assert_eq!((wa + wb).to_i64(), i64::from(a.wrapping_add(b)));
        prop_assert_eq!((wa * wb).to_i64(), i64::from(a.wrapping_mul(b)));
        prop_assert_eq!((-wa).to_i64(), i64::from(a.wrapping_neg()));
        prop_assert_eq!(wa.cmp(&wb), a.cmp(&b));
        if b != 0 {
            prop_assert_eq!((wa / wb).to_i64(), i64::from(a.wrapping_div(b)));
        }
        prop_assert_eq!(wa.cmp(&wa), Ordering::Equal);
    }
}
