#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

#[cfg(any(feature = "std", test))]
extern crate std;

pub mod backend;
pub mod chain;
pub mod ct;
pub mod descriptor;
pub mod digit;
pub mod monty;
pub mod mul;
pub mod reduce;

mod dev;
mod element;
mod error;
mod macros;

pub use crate::{
    backend::Backend,
    chain::{Chain, ChainElement, Step},
    descriptor::{FieldDescriptor, Reduction},
    element::{FieldElement, FieldParams, SQRT_MAX_ATTEMPTS, SqrtStrategy},
    error::{Error, Result},
};
pub use bigint;
pub use rand_core;
pub use subtle;
pub use zeroize;
