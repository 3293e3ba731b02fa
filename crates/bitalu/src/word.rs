//! Bits, words, and the bit accessor seam.
//!
//! Everything the ALU knows about storage goes through [`BitWord`]: read one
//! bit, write one bit, copy a whole word (`Copy`), and the width constants.
//! The algorithms in [`crate::alu`] never look at the representation behind
//! a word, so any fixed-width container can be plugged in.
//!
//! # Implementors
//!
//! - [`Word<N>`]: an `N`-bit array, with aliases [`Word4`], [`Word8`],
//!   [`Word16`], [`Word32`], [`Word64`]
//! - `u8`, `u16`, `u32`, `u64`: native storage addressed bit by bit, which
//!   makes them handy as an oracle against host integer arithmetic
//!
//! # Bit Order
//!
//! Index 0 is the least significant bit and [`BitWord::TOP_BIT`] is the sign
//! bit. Text forms (`Display`, and `FromStr` with the `std` feature) are
//! written most significant bit first:
//!
//! ```
//! use bitalu::word::{BitWord, Bit, Word8};
//!
//! let w: Word8 = "0000 0110".parse().unwrap();
//! assert_eq!(w.bit(1), Bit::One);
//! assert_eq!(w.bit(0), Bit::Zero);
//! assert_eq!(w.to_i64(), 6);
//! assert_eq!(w.to_string(), "0000 0110");
//! ```

use core::fmt;
use core::ops::{BitAnd, BitOr, BitXor, Not, Range};
#[cfg(feature = "std")]
use core::str::FromStr;

#[cfg(feature = "std")]
use thiserror::Error;

// ============================================================================
// Bit
// ============================================================================

/// A single binary digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(u8)]
pub enum Bit {
    /// 0
    #[default]
    Zero = 0,
    /// 1
    One = 1,
}

impl Bit {
    /// Bit for a boolean: `true` is one.
    #[inline]
    pub const fn from_bool(set: bool) -> Self {
        if set {
            Self::One
        } else {
            Self::Zero
        }
    }

    /// Whether this bit is one.
    #[inline]
    pub const fn is_set(self) -> bool {
        matches!(self, Self::One)
    }

    /// Numeric value, 0 or 1.
    #[inline]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// The opposite bit.
    #[inline]
    pub const fn complement(self) -> Self {
        match self {
            Self::Zero => Self::One,
            Self::One => Self::Zero,
        }
    }

    /// Low bit of a carry-inclusive sum in `0..=3`.
    #[inline]
    pub const fn narrow(sum: u8) -> Self {
        debug_assert!(sum <= 3, "bit sum out of range");
        match sum {
            1 | 3 => Self::One,
            _ => Self::Zero,
        }
    }

    /// High bit (the carry out) of a carry-inclusive sum in `0..=3`.
    #[inline]
    pub const fn carry(sum: u8) -> Self {
        debug_assert!(sum <= 3, "bit sum out of range");
        match sum {
            2 | 3 => Self::One,
            _ => Self::Zero,
        }
    }

    /// Binary digit character.
    #[inline]
    pub const fn digit(self) -> char {
        match self {
            Self::Zero => '0',
            Self::One => '1',
        }
    }
}

impl Not for Bit {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        self.complement()
    }
}

impl BitAnd for Bit {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::One, Self::One) => Self::One,
            _ => Self::Zero,
        }
    }
}

impl BitOr for Bit {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Zero, Self::Zero) => Self::Zero,
            _ => Self::One,
        }
    }
}

impl BitXor for Bit {
    type Output = Self;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        if self == rhs {
            Self::Zero
        } else {
            Self::One
        }
    }
}

impl From<bool> for Bit {
    fn from(set: bool) -> Self {
        Self::from_bool(set)
    }
}

impl From<Bit> for bool {
    fn from(bit: Bit) -> Self {
        bit.is_set()
    }
}

// ============================================================================
// Bit positions
// ============================================================================

/// Walk order over bit indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Least significant first.
    Ascending,
    /// Most significant first.
    Descending,
}

/// Iterator over a range of bit indices in a chosen [`Direction`].
///
/// ```
/// use bitalu::word::{BitPositions, Direction};
///
/// let down: Vec<usize> = BitPositions::new(1..4, Direction::Descending).collect();
/// assert_eq!(down, [3, 2, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct BitPositions {
    front: usize,
    back: usize,
    direction: Direction,
}

impl BitPositions {
    /// Positions in `range`, walked in `direction`.
    #[inline]
    pub fn new(range: Range<usize>, direction: Direction) -> Self {
        Self {
            front: range.start,
            back: range.end.max(range.start),
            direction,
        }
    }
}

impl Iterator for BitPositions {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.front >= self.back {
            return None;
        }
        match self.direction {
            Direction::Ascending => {
                self.front += 1;
                Some(self.front - 1)
            }
            Direction::Descending => {
                self.back -= 1;
                Some(self.back)
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl ExactSizeIterator for BitPositions {}

// ============================================================================
// BitWord
// ============================================================================

/// A fixed-width two's-complement word addressed one bit at a time.
///
/// This is the only interface the ALU algorithms use. Implementors provide
/// storage; the ALU provides arithmetic.
///
/// # Contract
///
/// - `bit` and `set_bit` are only called with `index < BITS`. Out of range
///   indices are a caller error; implementors may panic.
/// - `ZERO`, `MAX` and `MIN` are the all-zero word, the most positive word
///   (sign 0, rest 1) and the most negative word (sign 1, rest 0).
pub trait BitWord: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Number of bits in the word.
    const BITS: usize;

    /// Index of the sign bit.
    const TOP_BIT: usize = Self::BITS - 1;

    /// All bits zero.
    const ZERO: Self;

    /// Most positive value: sign bit 0, every other bit 1.
    const MAX: Self;

    /// Most negative value: sign bit 1, every other bit 0.
    const MIN: Self;

    /// Read the bit at `index`.
    fn bit(&self, index: usize) -> Bit;

    /// Overwrite the bit at `index`.
    fn set_bit(&mut self, index: usize, bit: Bit);

    /// The sign bit.
    #[inline]
    fn sign(&self) -> Bit {
        self.bit(Self::TOP_BIT)
    }

    /// Every bit index of this word type, walked in `direction`.
    #[inline]
    fn positions(direction: Direction) -> BitPositions {
        BitPositions::new(0..Self::BITS, direction)
    }

    /// The word with only bit 0 set.
    #[inline]
    fn one() -> Self {
        let mut word = Self::ZERO;
        word.set_bit(0, Bit::One);
        word
    }

    /// Load a host integer, keeping the low `BITS` bits and sign-extending
    /// beyond 64.
    fn from_i64(value: i64) -> Self {
        let mut word = Self::ZERO;
        for index in Self::positions(Direction::Ascending) {
            let set = if index < 64 {
                (value >> index) & 1 == 1
            } else {
                value < 0
            };
            word.set_bit(index, Bit::from_bool(set));
        }
        word
    }

    /// Read the word back as a host integer, sign-extended from the top bit.
    ///
    /// Words wider than 64 bits are truncated to their low 64 bits.
    fn to_i64(&self) -> i64 {
        let width = Self::BITS.min(64);
        let mut raw = 0u64;
        for index in BitPositions::new(0..width, Direction::Ascending) {
            if self.bit(index).is_set() {
                raw |= 1 << index;
            }
        }
        let unused = 64 - width;
        ((raw << unused) as i64) >> unused
    }

    /// Parse binary digits (most significant first), zero-extending inputs
    /// shorter than `BITS`.
    ///
    /// An optional `0b` prefix is accepted; `_` and spaces are ignored.
    ///
    /// # Errors
    ///
    /// Fails on an empty literal, a non-binary digit, or more than `BITS`
    /// digits.
    #[cfg(feature = "std")]
    fn from_binary_str(text: &str) -> Result<Self, ParseWordError> {
        parse_digits(text, Width::AtMost(Self::BITS))
    }
}

// -----------------------------------------------------------------------------
// Scalar implementations
// -----------------------------------------------------------------------------

macro_rules! impl_bit_word_scalar {
    ($ty:ty, $signed:ty) => {
        impl BitWord for $ty {
            const BITS: usize = <$ty>::BITS as usize;
            const ZERO: Self = 0;
            const MAX: Self = <$signed>::MAX as $ty;
            const MIN: Self = <$signed>::MIN as $ty;

            #[inline(always)]
            fn bit(&self, index: usize) -> Bit {
                debug_assert!(index < <Self as BitWord>::BITS, "bit index out of range");
                Bit::from_bool((*self >> index) & 1 == 1)
            }

            #[inline(always)]
            fn set_bit(&mut self, index: usize, bit: Bit) {
                debug_assert!(index < <Self as BitWord>::BITS, "bit index out of range");
                let mask: $ty = 1 << index;
                match bit {
                    Bit::Zero => *self &= !mask,
                    Bit::One => *self |= mask,
                }
            }
        }
    };
}

impl_bit_word_scalar!(u8, i8);
impl_bit_word_scalar!(u16, i16);
impl_bit_word_scalar!(u32, i32);
impl_bit_word_scalar!(u64, i64);

// ============================================================================
// Word<N>
// ============================================================================

/// An `N`-bit word stored as an array of [`Bit`], least significant first.
///
/// `N` must be at least 1.
///
/// ```
/// use bitalu::word::{BitWord, Word4};
///
/// assert_eq!(Word4::MAX.to_string(), "0111");
/// assert_eq!(Word4::MIN.to_i64(), -8);
/// assert_eq!(Word4::from_i64(-3).to_string(), "1101");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Word<const N: usize> {
    bits: [Bit; N],
}

/// 4-bit word.
pub type Word4 = Word<4>;
/// 8-bit word.
pub type Word8 = Word<8>;
/// 16-bit word.
pub type Word16 = Word<16>;
/// 32-bit word.
pub type Word32 = Word<32>;
/// 64-bit word.
pub type Word64 = Word<64>;

impl<const N: usize> Word<N> {
    /// Build a word from bits, least significant first.
    #[inline]
    pub const fn from_bits(bits: [Bit; N]) -> Self {
        Self { bits }
    }

    /// The bits of this word, least significant first.
    #[inline]
    pub const fn bits(&self) -> &[Bit; N] {
        &self.bits
    }

    const fn split(sign: Bit, rest: Bit) -> Self {
        let mut bits = [rest; N];
        bits[N - 1] = sign;
        Self { bits }
    }
}

impl<const N: usize> BitWord for Word<N> {
    const BITS: usize = N;
    const ZERO: Self = Self {
        bits: [Bit::Zero; N],
    };
    const MAX: Self = Self::split(Bit::Zero, Bit::One);
    const MIN: Self = Self::split(Bit::One, Bit::Zero);

    #[inline]
    fn bit(&self, index: usize) -> Bit {
        self.bits[index]
    }

    #[inline]
    fn set_bit(&mut self, index: usize, bit: Bit) {
        self.bits[index] = bit;
    }
}

impl<const N: usize> Default for Word<N> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize> From<[Bit; N]> for Word<N> {
    fn from(bits: [Bit; N]) -> Self {
        Self::from_bits(bits)
    }
}

impl<const N: usize> fmt::Display for Word<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Binary(*self), f)
    }
}

impl<const N: usize> fmt::Debug for Word<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word{}({})", N, Binary(*self))
    }
}

#[cfg(feature = "std")]
impl<const N: usize> FromStr for Word<N> {
    type Err = ParseWordError;

    /// Parse exactly `N` binary digits, most significant first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_digits(s, Width::Exactly(N))
    }
}

// ============================================================================
// Text forms
// ============================================================================

/// Binary rendering of any [`BitWord`], most significant bit first.
///
/// Widths that are a multiple of 4 (and wider than 4) are grouped into
/// nibbles separated by a space.
///
/// ```
/// use bitalu::word::Binary;
///
/// assert_eq!(Binary(0x5Au8).to_string(), "0101 1010");
/// ```
#[derive(Clone, Copy)]
pub struct Binary<W>(pub W);

impl<W: BitWord> fmt::Display for Binary<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grouped = W::BITS > 4 && W::BITS % 4 == 0;
        for (written, index) in W::positions(Direction::Descending).enumerate() {
            if grouped && written > 0 && written % 4 == 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", self.0.bit(index).digit())?;
        }
        Ok(())
    }
}

/// Error when parsing a word from text.
#[cfg(feature = "std")]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseWordError {
    /// No digits at all.
    #[error("empty word literal")]
    Empty,
    /// A character other than `0`, `1`, `_` or space.
    #[error("invalid binary digit '{digit}' at position {position}")]
    InvalidDigit {
        /// The offending character.
        digit: char,
        /// Character position in the input.
        position: usize,
    },
    /// Digit count differs from the word width.
    #[error("expected {expected} binary digits, found {found}")]
    WrongLength {
        /// The word width.
        expected: usize,
        /// Digits present.
        found: usize,
    },
    /// More digits than the word can hold.
    #[error("{found} binary digits do not fit in a {bits}-bit word")]
    TooLong {
        /// The word width.
        bits: usize,
        /// Digits present.
        found: usize,
    },
    /// A decimal literal that is not an integer.
    #[error("invalid decimal literal `{0}`")]
    InvalidDecimal(String),
    /// A decimal literal outside the word's signed range.
    #[error("{value} does not fit in a {bits}-bit word")]
    OutOfRange {
        /// The parsed value.
        value: i64,
        /// The word width.
        bits: usize,
    },
}

#[cfg(feature = "std")]
enum Width {
    Exactly(usize),
    AtMost(usize),
}

#[cfg(feature = "std")]
fn parse_digits<W: BitWord>(text: &str, width: Width) -> Result<W, ParseWordError> {
    let body = text.strip_prefix("0b").unwrap_or(text);
    let offset = text.len() - body.len();

    let mut digits = Vec::with_capacity(W::BITS);
    for (position, c) in body.chars().enumerate() {
        match c {
            '0' => digits.push(Bit::Zero),
            '1' => digits.push(Bit::One),
            '_' | ' ' => {}
            _ => {
                return Err(ParseWordError::InvalidDigit {
                    digit: c,
                    position: position + offset,
                })
            }
        }
    }

    if digits.is_empty() {
        return Err(ParseWordError::Empty);
    }
    match width {
        Width::Exactly(expected) if digits.len() != expected => {
            return Err(ParseWordError::WrongLength {
                expected,
                found: digits.len(),
            })
        }
        Width::AtMost(bits) if digits.len() > bits => {
            return Err(ParseWordError::TooLong {
                bits,
                found: digits.len(),
            })
        }
        _ => {}
    }

    let mut word = W::ZERO;
    for (index, bit) in digits.iter().rev().enumerate() {
        word.set_bit(index, *bit);
    }
    Ok(word)
}

/// Parse an operand literal: `0b`-prefixed binary, or a signed decimal that
/// fits the word's two's-complement range.
///
/// ```
/// use bitalu::word::{parse_literal, BitWord, Word8};
///
/// let w: Word8 = parse_literal("-3").unwrap();
/// assert_eq!(w.to_string(), "1111 1101");
/// let w: Word8 = parse_literal("0b101").unwrap();
/// assert_eq!(w.to_i64(), 5);
/// assert!(parse_literal::<Word8>("200").is_err());
/// ```
///
/// # Errors
///
/// Returns [`ParseWordError`] for malformed digits or out-of-range values.
#[cfg(feature = "std")]
pub fn parse_literal<W: BitWord>(text: &str) -> Result<W, ParseWordError> {
    let text = text.trim();
    if text.starts_with("0b") {
        return W::from_binary_str(text);
    }
    let value: i64 = text
        .parse()
        .map_err(|_| ParseWordError::InvalidDecimal(text.to_string()))?;
    let word = W::from_i64(value);
    if word.to_i64() != value {
        return Err(ParseWordError::OutOfRange {
            value,
            bits: W::BITS,
        });
    }
    Ok(word)
}
