//! `core::ops` operators and signed ordering for [`Word<N>`].
//!
//! Every operator runs the same bit-serial algorithm as the matching
//! [`AluOps`](super::AluOps) method; nothing here touches host integer
//! arithmetic.
//!
//! ```
//! use bitalu::word::{BitWord, Word8};
//!
//! let a = Word8::from_i64(-20);
//! let b = Word8::from_i64(6);
//! assert_eq!((a * b).to_i64(), -120);
//! assert_eq!((a / b).to_i64(), -3);
//! assert_eq!((a % b).to_i64(), -2);
//! assert!(a < b);
//! ```

use core::cmp::Ordering;
use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Sub, SubAssign,
};

use super::adder::RippleCarryAdder;
use super::compare::compare;
use super::divide::RestoringDivider;
use super::logic;
use super::multiply::ShiftAddMultiplier;
use crate::word::Word;

macro_rules! impl_binary_operator {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:path) => {
        impl<const N: usize> $trait for Word<N> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                $op(self, rhs)
            }
        }

        impl<const N: usize> $assign_trait for Word<N> {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                *self = $op(*self, rhs);
            }
        }
    };
}

impl_binary_operator!(Add, add, AddAssign, add_assign, RippleCarryAdder::add);
impl_binary_operator!(Sub, sub, SubAssign, sub_assign, RippleCarryAdder::sub);
impl_binary_operator!(Mul, mul, MulAssign, mul_assign, ShiftAddMultiplier::mul);
impl_binary_operator!(Div, div, DivAssign, div_assign, RestoringDivider::div);
impl_binary_operator!(Rem, rem, RemAssign, rem_assign, RestoringDivider::rem);
impl_binary_operator!(BitAnd, bitand, BitAndAssign, bitand_assign, logic::and);
impl_binary_operator!(BitOr, bitor, BitOrAssign, bitor_assign, logic::or);
impl_binary_operator!(BitXor, bitxor, BitXorAssign, bitxor_assign, logic::xor);

impl<const N: usize> Neg for Word<N> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        logic::negate(self)
    }
}

impl<const N: usize> Not for Word<N> {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        logic::not(self)
    }
}

/// Signed two's-complement order.
impl<const N: usize> Ord for Word<N> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        compare(*self, *other)
    }
}

impl<const N: usize> PartialOrd for Word<N> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
