//! Backends for the NIST P-256 base field.

#[cfg(target_pointer_width = "64")]
mod nist64;

#[cfg(target_pointer_width = "64")]
pub use self::nist64::Nist64;

cfg_if::cfg_if! {
    if #[cfg(all(target_pointer_width = "64", not(feature = "portable")))] {
        /// Backend used by [`Fp256`](crate::Fp256).
        pub type FieldBackend = Nist64;
    } else {
        /// Backend used by [`Fp256`](crate::Fp256).
        pub type FieldBackend = ctfield::backend::DefaultBackend;
    }
}
