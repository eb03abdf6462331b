//! Square roots, selected per modulus by the residue class of `p`.

use super::{FieldElement, FieldParams, quadratic::Quadratic};
use crate::{
    Error, Result,
    chain::{self, Chain},
    ct,
    descriptor::FieldDescriptor,
    monty, reduce,
};
use bigint::Uint;
use rand_core::TryRngCore;
use subtle::CtOption;
use tracing::{instrument, trace, warn};

/// Upper bound on random draws made by the general (Cipolla) square root before giving up.
///
/// Each draw succeeds with probability close to 1/2, so reaching the bound indicates a broken
/// random number generator rather than bad luck.
pub const SQRT_MAX_ATTEMPTS: u32 = 256;

/// Square root method for a modulus, together with its exponent chain.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SqrtStrategy<const LIMBS: usize> {
    /// `p ≡ 3 (mod 4)`: `chain` computes `a^((p+1)/4)`.
    ThreeModFour {
        /// Exponent chain.
        chain: Chain,
    },

    /// `p ≡ 5 (mod 8)`: `chain` computes `a^((p-5)/8)`.
    FiveModEight {
        /// Exponent chain.
        chain: Chain,
        /// Square root of `-1`, in Montgomery form.
        psi: Uint<LIMBS>,
    },

    /// Any odd prime, using Cipolla's method: `chain` computes `a^((p+1)/2)`.
    ///
    /// Not constant time: the number of random draws varies from call to call, independently
    /// of the input.
    General {
        /// Exponent chain.
        chain: Chain,
    },
}

impl<const LIMBS: usize> SqrtStrategy<LIMBS> {
    /// Square root as a single exponentiation.
    ///
    /// # Panics
    ///
    /// If the modulus is not `3 mod 4` or the chain is malformed.
    pub const fn three_mod_four(descriptor: &FieldDescriptor<LIMBS>, chain: Chain) -> Self {
        assert!(
            descriptor.modulus.as_words()[0] & 3 == 3,
            "modulus is not 3 mod 4"
        );
        assert!(chain::validate(chain), "invalid square root chain");
        Self::ThreeModFour { chain }
    }

    /// Square root through `a^((p-5)/8)` corrected by `psi`.
    ///
    /// `psi_hex` is the canonical big endian encoding of a square root of `-1`.
    ///
    /// # Panics
    ///
    /// If the modulus is not `5 mod 8`, the chain is malformed or `psi² ≠ -1`.
    pub const fn five_mod_eight(
        descriptor: &FieldDescriptor<LIMBS>,
        chain: Chain,
        psi_hex: &str,
    ) -> Self {
        let p = descriptor.modulus.as_words();
        assert!(p[0] & 7 == 5, "modulus is not 5 mod 8");
        assert!(chain::validate(chain), "invalid square root chain");

        let psi = Uint::<LIMBS>::from_be_hex(psi_hex);
        assert!(
            reduce::is_less(psi.as_words(), p) == 1,
            "psi overflows modulus"
        );

        let psi = monty::to_montgomery(psi.as_words(), descriptor);
        let psi_squared = monty::mont_mul(&psi, &psi, p, descriptor.p_inv.as_words());
        assert!(
            ct::equals(&psi_squared, descriptor.minus_one.as_words()) == 1,
            "psi is not a square root of -1"
        );

        Self::FiveModEight {
            chain,
            psi: Uint::from_words(psi),
        }
    }

    /// Randomized square root in the quadratic extension.
    ///
    /// # Panics
    ///
    /// If the modulus is even or the chain is malformed.
    pub const fn general(descriptor: &FieldDescriptor<LIMBS>, chain: Chain) -> Self {
        assert!(descriptor.modulus.as_words()[0] & 1 == 1, "modulus is even");
        assert!(chain::validate(chain), "invalid square root chain");
        Self::General { chain }
    }
}

impl<P, const LIMBS: usize> FieldElement<P, LIMBS>
where
    P: FieldParams<LIMBS>,
{
    /// Compute a square root of `self`.
    ///
    /// Only the general strategy draws from `rng`; the `3 mod 4` and `5 mod 8` strategies are
    /// single fixed exponentiations and never fail.
    ///
    /// # Returns
    ///
    /// The `CtOption` equivalent of `None` if `self` is not a square. Errors come only from the
    /// random number generator or from exhausting [`SQRT_MAX_ATTEMPTS`].
    pub fn sqrt_with_rng<R: TryRngCore + ?Sized>(&self, rng: &mut R) -> Result<CtOption<Self>> {
        let root = match P::SQRT {
            SqrtStrategy::ThreeModFour { chain } => self.pow_chain(chain),
            SqrtStrategy::FiveModEight { chain, psi } => {
                self.sqrt_five_mod_eight(chain, &Self::from_montgomery(psi))
            }
            SqrtStrategy::General { chain } => self.sqrt_cipolla(chain, rng)?,
        };

        Ok(CtOption::new(root, root.square().equals(self)))
    }

    /// Compute a square root of `self` using the operating system's random number generator.
    #[cfg(feature = "os_rng")]
    pub fn sqrt(&self) -> Result<CtOption<Self>> {
        self.sqrt_with_rng(&mut rand_core::OsRng)
    }

    fn sqrt_five_mod_eight(&self, chain: Chain, psi: &Self) -> Self {
        let s = self.pow_chain(chain);
        let r = s * self;
        let d = s.square() * self;

        // d = a^((p-1)/4) is 1 when r already squares to a, -1 when r·ψ does.
        Self::select(&(r * psi), &r, d.equals(&Self::ONE))
    }

    #[instrument(level = "trace", skip_all)]
    fn sqrt_cipolla<R: TryRngCore + ?Sized>(&self, chain: Chain, rng: &mut R) -> Result<Self> {
        let is_zero = self.is_zero();
        let a = Self::select(self, &Self::ONE, is_zero);

        for attempt in 1..=SQRT_MAX_ATTEMPTS {
            let r = Self::try_random(rng)?;
            let w = r.square() - a;

            if bool::from(w.legendre()) {
                // (r - x)^((p+1)/2) = sqrt(r² - w) = sqrt(a)
                let root = chain::exec(&Quadratic::new(r, Self::MINUS_ONE, w), chain).re;
                return Ok(Self::select(&root, &Self::ZERO, is_zero));
            }

            trace!(attempt, "r² - a is a square, drawing again");
        }

        warn!(
            attempts = SQRT_MAX_ATTEMPTS,
            "square root search found no non-residue"
        );
        Err(Error::SqrtRetryLimit)
    }
}
