//! Arbitrary-precision modular exponentiation in pure Rust.
//!
//! # About
//! This library computes `Y = G^X mod P` for heap-backed big unsigned
//! integers of arbitrary size, the workhorse operation of RSA,
//! Diffie-Hellman and related public-key primitives. Each call is routed
//! to the faster of two strategies: a Montgomery-class path for odd (or
//! diminished-radix) moduli of moderate size, and a generic fixed-window
//! path backed by Barrett reduction for everything else. Both compute the
//! same value.
//!
//! # Goals
//! - `no_std`-friendly: only the `alloc` crate is required.
//! - Fallible allocation throughout the exponentiation path: heap
//!   exhaustion surfaces as [`Error::AllocationFailed`] rather than an
//!   abort, and every partially built resource is released on the way
//!   out.
//! - Exact routing: misrouting a modulus costs speed, never correctness.
//!
//! # ⚠️ Security warning
//! This crate is **not constant-time**. The exponentiation branch
//! structure and its table access pattern depend on the bits of the
//! exponent, so an observer able to time the operation can learn them.
//! Do not use it with secret exponents in the presence of a timing side
//! channel.

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications
)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod exptmod;
mod limb;
mod reduce;
mod uint;

pub use crate::{
    error::{Error, Result},
    exptmod::exptmod,
    limb::{Limb, WideWord, Word},
    uint::MpUint,
};

#[cfg(feature = "rand")]
pub use rand_core;

#[cfg(feature = "zeroize")]
pub use zeroize;
