//! Error types.

use core::fmt;

/// Result type with this crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Errors produced by fallible big integer operations.
///
/// Allocation failure is the only runtime failure mode in this crate:
/// arithmetic itself cannot fail, and precondition violations (zero
/// modulus, division by zero) panic rather than erroring.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A heap allocation for a big integer buffer could not be satisfied.
    AllocationFailed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::AllocationFailed => f.write_str("big integer allocation failed"),
        }
    }
}

impl core::error::Error for Error {}
