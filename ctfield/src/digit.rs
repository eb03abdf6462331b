//! Word-level primitives: add with carry, subtract with borrow and double-width multiply.
//!
//! Every function here is branch-free and runs in time independent of its operands. Carries and
//! borrows are always normalized to `0` or `1`.

use bigint::{WideWord, Word};

/// Number of bits in a [`Word`].
pub const WORD_BITS: u32 = Word::BITS;

/// Computes `a + b + carry`, returning the result along with the new carry.
#[inline(always)]
pub const fn adc(a: Word, b: Word, carry: Word) -> (Word, Word) {
    let ret = (a as WideWord) + (b as WideWord) + (carry as WideWord);
    (ret as Word, (ret >> WORD_BITS) as Word)
}

/// Computes `a - (b + borrow)`, returning the result along with the new borrow.
#[inline(always)]
pub const fn sbb(a: Word, b: Word, borrow: Word) -> (Word, Word) {
    let ret = (a as WideWord).wrapping_sub((b as WideWord) + (borrow as WideWord));
    (ret as Word, ((ret >> WORD_BITS) as Word) & 1)
}

/// Computes the full product `a * b`, returning `(high, low)`.
#[inline(always)]
pub const fn wide_mul(a: Word, b: Word) -> (Word, Word) {
    let ret = (a as WideWord) * (b as WideWord);
    ((ret >> WORD_BITS) as Word, ret as Word)
}

/// Computes `a + (b * c) + carry`, returning the result along with the new carry.
#[inline(always)]
pub const fn mac(a: Word, b: Word, c: Word, carry: Word) -> (Word, Word) {
    let ret = (a as WideWord) + ((b as WideWord) * (c as WideWord)) + (carry as WideWord);
    (ret as Word, (ret >> WORD_BITS) as Word)
}

/// Broadcast a `0`/`1` flag to an all-zeros/all-ones word.
#[inline(always)]
pub const fn mask(bit: Word) -> Word {
    (0 as Word).wrapping_sub(bit)
}
