//! Arithmetic in `F_p[x]/(x² - w)` for a non-residue `w`.

use super::{FieldElement, FieldParams};
use crate::chain::ChainElement;

/// `re + im·x` with `x² = w`.
#[derive(Clone, Copy)]
pub(super) struct Quadratic<P, const LIMBS: usize>
where
    P: FieldParams<LIMBS>,
{
    pub(super) re: FieldElement<P, LIMBS>,
    im: FieldElement<P, LIMBS>,
    w: FieldElement<P, LIMBS>,
}

impl<P, const LIMBS: usize> Quadratic<P, LIMBS>
where
    P: FieldParams<LIMBS>,
{
    pub(super) fn new(
        re: FieldElement<P, LIMBS>,
        im: FieldElement<P, LIMBS>,
        w: FieldElement<P, LIMBS>,
    ) -> Self {
        Self { re, im, w }
    }
}

impl<P, const LIMBS: usize> ChainElement for Quadratic<P, LIMBS>
where
    P: FieldParams<LIMBS>,
{
    fn mul(&self, rhs: &Self) -> Self {
        Self {
            re: self.re * rhs.re + self.im * rhs.im * self.w,
            im: self.re * rhs.im + self.im * rhs.re,
            w: self.w,
        }
    }

    fn square(&self) -> Self {
        Self {
            re: self.re.square() + self.im.square() * self.w,
            im: (self.re * self.im).double(),
            w: self.w,
        }
    }
}
