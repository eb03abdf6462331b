//! Error types.

use core::fmt;

/// Error type.
///
/// Field arithmetic itself is total; only operations which consume randomness can fail.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The random number generator failed to produce bytes.
    Entropy,

    /// The randomized square root search exhausted its attempt budget.
    SqrtRetryLimit,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Entropy => write!(f, "entropy source failure"),
            Error::SqrtRetryLimit => write!(f, "square root search exceeded retry limit"),
        }
    }
}

impl core::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
