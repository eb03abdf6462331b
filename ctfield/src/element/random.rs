//! Random field elements.

use super::{FieldElement, FieldParams};
use crate::{Error, Result};
use bigint::{Uint, Word};
use rand_core::{RngCore, TryRngCore};
use tracing::warn;

impl<P, const LIMBS: usize> FieldElement<P, LIMBS>
where
    P: FieldParams<LIMBS>,
{
    /// Generate a random element from `LIMBS` random words, reduced modulo `p` and used directly
    /// as a Montgomery form value.
    ///
    /// # ⚠️ Warning
    ///
    /// The result is **not uniform** when `p` is far from `R`: there is no rejection sampling,
    /// so residues which several raw values reduce to are proportionally more likely.
    pub fn try_random<R: TryRngCore + ?Sized>(rng: &mut R) -> Result<Self> {
        let mut words = [0 as Word; LIMBS];

        for word in words.iter_mut() {
            let mut bytes = [0u8; size_of::<Word>()];
            rng.try_fill_bytes(&mut bytes).map_err(|err| {
                warn!(error = %err, "random number generator failed");
                Error::Entropy
            })?;
            *word = Word::from_le_bytes(bytes);
        }

        Ok(Self::from_random_words(words))
    }

    /// Infallible version of [`Self::try_random`], with the same distribution.
    pub fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let mut words = [0 as Word; LIMBS];

        for word in words.iter_mut() {
            let mut bytes = [0u8; size_of::<Word>()];
            rng.fill_bytes(&mut bytes);
            *word = Word::from_le_bytes(bytes);
        }

        Self::from_random_words(words)
    }

    fn from_random_words(words: [Word; LIMBS]) -> Self {
        Self::from_montgomery(Self::reduce(&Uint::from_words(words)))
    }
}
