//! Modular reduction strategies.
//!
//! Each strategy precomputes a context from the modulus once, then reduces
//! every intermediate product of one exponentiation through it. A context
//! is valid only for the modulus it was built from.

pub(crate) mod barrett;
pub(crate) mod dr;
pub(crate) mod montgomery;
