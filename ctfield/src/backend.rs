//! Interchangeable implementations of the hot field operations.
//!
//! A backend works on Montgomery form values which are already reduced into `[0, p)` and must
//! return reduced values. Every backend is observably identical: the choice only affects speed.
//! Which backend a field uses is fixed at build time by [`FieldParams::Backend`].
//!
//! [`FieldParams::Backend`]: crate::FieldParams::Backend

mod modular;
mod portable;

pub use self::{modular::Bigint, portable::Portable};

use crate::descriptor::FieldDescriptor;
use bigint::Uint;

/// Field arithmetic over Montgomery form values.
pub trait Backend<const LIMBS: usize>: 'static {
    /// `a + b mod p`.
    fn add(a: &Uint<LIMBS>, b: &Uint<LIMBS>, descriptor: &FieldDescriptor<LIMBS>) -> Uint<LIMBS>;

    /// `a - b mod p`.
    fn sub(a: &Uint<LIMBS>, b: &Uint<LIMBS>, descriptor: &FieldDescriptor<LIMBS>) -> Uint<LIMBS>;

    /// `-a mod p`.
    fn neg(a: &Uint<LIMBS>, descriptor: &FieldDescriptor<LIMBS>) -> Uint<LIMBS>;

    /// Montgomery product `a·b·R⁻¹ mod p`.
    fn mul(a: &Uint<LIMBS>, b: &Uint<LIMBS>, descriptor: &FieldDescriptor<LIMBS>) -> Uint<LIMBS>;

    /// Montgomery square `a²·R⁻¹ mod p`.
    fn square(a: &Uint<LIMBS>, descriptor: &FieldDescriptor<LIMBS>) -> Uint<LIMBS> {
        Self::mul(a, a, descriptor)
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "portable")] {
        /// Backend used by fields that do not ask for a specific one.
        pub type DefaultBackend = Portable;
    } else if #[cfg(feature = "bigint-backend")] {
        /// Backend used by fields that do not ask for a specific one.
        pub type DefaultBackend = Bigint;
    } else {
        /// Backend used by fields that do not ask for a specific one.
        pub type DefaultBackend = Portable;
    }
}
