//! Fixed addition chains for exponentiation by public, per-modulus constants.
//!
//! A chain is a list of [`Step`]s run against an accumulator and a small table of cached powers.
//! Slot 0 holds the base and the accumulator starts out equal to it. The sequence of squarings
//! and multiplications depends only on the chain, never on the value being exponentiated.

/// Number of cached power slots available to a chain.
pub const SLOTS: usize = 12;

/// A single exponentiation step.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Step {
    /// Square the accumulator `n` times.
    Sqn(u32),

    /// Multiply the accumulator by the power cached in slot `k`.
    Mul(u8),

    /// Cache the accumulator in slot `k`.
    Store(u8),

    /// Replace the accumulator with the power cached in slot `k`.
    Load(u8),
}

/// Static exponent chain.
pub type Chain = &'static [Step];

/// Values a chain can be executed over.
pub trait ChainElement: Clone {
    /// Product of `self` and `rhs`.
    fn mul(&self, rhs: &Self) -> Self;

    /// `self` squared.
    fn square(&self) -> Self;
}

/// Raise `base` to the exponent encoded by `chain`.
pub fn exec<T: ChainElement>(base: &T, chain: Chain) -> T {
    let mut slots: [T; SLOTS] = core::array::from_fn(|_| base.clone());
    let mut acc = base.clone();

    for step in chain {
        match *step {
            Step::Sqn(n) => {
                for _ in 0..n {
                    acc = acc.square();
                }
            }
            Step::Mul(k) => acc = acc.mul(&slots[k as usize]),
            Step::Store(k) => slots[k as usize] = acc.clone(),
            Step::Load(k) => acc = slots[k as usize].clone(),
        }
    }

    acc
}

/// Check that a chain only touches slots which exist and have been written.
///
/// Intended for compile-time assertions on chain constants.
pub const fn validate(chain: Chain) -> bool {
    let mut written: u32 = 1;
    let mut i = 0;

    while i < chain.len() {
        let ok = match chain[i] {
            Step::Sqn(n) => n > 0,
            Step::Mul(k) | Step::Load(k) => {
                (k as usize) < SLOTS && written & (1u32 << (k as u32)) != 0
            }
            Step::Store(k) => {
                let in_range = (k as usize) < SLOTS;
                if in_range {
                    written |= 1u32 << (k as u32);
                }
                in_range
            }
        };

        if !ok {
            return false;
        }
        i += 1;
    }

    !chain.is_empty()
}

#[cfg(test)]
mod tests {
    use super::{ChainElement, Step::*, exec, validate};

    /// Tracks the exponent a chain produces instead of a power.
    #[derive(Clone, Debug, PartialEq)]
    struct Exponent(u128);

    impl ChainElement for Exponent {
        fn mul(&self, rhs: &Self) -> Self {
            Exponent(self.0 + rhs.0)
        }

        fn square(&self) -> Self {
            Exponent(self.0 * 2)
        }
    }

    #[test]
    fn runs_of_ones() {
        // x^(2^4 - 1) then x^(2^8 - 1)
        let chain = &[
            Sqn(1),
            Mul(0),
            Store(1),
            Sqn(2),
            Mul(1),
            Store(2),
            Sqn(4),
            Mul(2),
        ];
        assert!(validate(chain));
        assert_eq!(exec(&Exponent(1), chain), Exponent(0xff));
    }

    #[test]
    fn load_restores_cached_power() {
        let chain = &[Sqn(3), Store(1), Load(0), Mul(1)];
        assert!(validate(chain));
        assert_eq!(exec(&Exponent(1), chain), Exponent(9));
    }

    #[test]
    fn rejects_unwritten_or_missing_slots() {
        assert!(!validate(&[Mul(1)]));
        assert!(!validate(&[Load(3)]));
        assert!(!validate(&[Store(12)]));
        assert!(!validate(&[Sqn(0)]));
        assert!(!validate(&[]));
    }
}
