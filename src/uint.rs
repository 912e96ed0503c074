//! Heap-allocated big unsigned integers.

mod add;
mod bits;
mod cmp;
mod div;
mod encoding;
mod mul;
mod shift;

#[cfg(feature = "rand")]
mod rand;

use crate::{Error, Limb, Result};
use alloc::vec::Vec;
use core::{fmt, mem};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// Reserve a buffer of exactly `capacity` elements, reporting exhaustion
/// as [`Error::AllocationFailed`].
///
/// Every allocation made on the exponentiation path funnels through this
/// function, so a single injected failure exercises every cleanup path.
pub(crate) fn try_alloc<T>(capacity: usize) -> Result<Vec<T>> {
    #[cfg(test)]
    alloc_failpoint::tick()?;

    let mut buf = Vec::new();
    buf.try_reserve_exact(capacity)
        .map_err(|_| Error::AllocationFailed)?;
    Ok(buf)
}


/// Heap-allocated arbitrary-precision big unsigned integer.
///
/// Stored as a vector of [`Limb`]s, least significant limb first, and kept
/// *clamped*: the vector never ends in a zero limb, and the empty vector
/// is the value zero. The vector length is therefore the significant limb
/// count, and its capacity the allocated size.
#[derive(Clone, Default, Eq, PartialEq)]
pub struct MpUint {
    /// Limbs from least significant to most significant, clamped.
    pub(crate) limbs: Vec<Limb>,
}

impl MpUint {
    /// Get the value `0`, which owns no allocation.
    pub const fn zero() -> Self {
        Self { limbs: Vec::new() }
    }

    /// Get the value `1`.
    pub fn one() -> Self {
        let mut limbs = Vec::with_capacity(1);
        limbs.push(Limb::ONE);
        Self { limbs }
    }

    /// Get the value `0` with space for `capacity` limbs reserved.
    pub fn try_with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self {
            limbs: try_alloc(capacity)?,
        })
    }

    /// Build a value from a `u64`, reporting allocation failure.
    // the u64 -> Word cast is a no-op on 64-bit targets only
    #[allow(trivial_numeric_casts)]
    pub fn try_from_u64(value: u64) -> Result<Self> {
        let mut limbs = try_alloc(8 / Limb::BYTES)?;
        let mut v = value;
        while v != 0 {
            limbs.push(Limb(v as crate::Word));
            v = (v >> (Limb::BITS - 1)) >> 1;
        }
        Ok(Self { limbs })
    }

    /// Deep copy, reporting allocation failure.
    ///
    /// The `Clone` impl is equivalent but aborts if the heap is exhausted.
    pub fn try_clone(&self) -> Result<Self> {
        let mut limbs = try_alloc(self.limbs.len())?;
        limbs.extend_from_slice(&self.limbs);
        Ok(Self { limbs })
    }

    /// Exchange the values of `self` and `other` by swapping their owned
    /// buffers; no limbs are copied.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.limbs, &mut other.limbs);
    }

    /// Is this value equal to zero?
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    /// Is this value odd? Zero is even.
    #[inline]
    pub fn is_odd(&self) -> bool {
        self.limbs.first().is_some_and(|limb| limb.0 & 1 == 1)
    }

    /// Get the number of significant limbs.
    #[inline]
    pub fn nlimbs(&self) -> usize {
        self.limbs.len()
    }

    /// Borrow the limbs of this value.
    pub fn as_limbs(&self) -> &[Limb] {
        self.limbs.as_slice()
    }

    /// Strip trailing zero limbs, restoring the representation invariant
    /// after an operation that may have produced them.
    pub(crate) fn clamp(&mut self) {
        while self.limbs.last() == Some(&Limb::ZERO) {
            self.limbs.pop();
        }
    }
}

impl From<u8> for MpUint {
    fn from(n: u8) -> Self {
        Self::from(n as u64)
    }
}

impl From<u16> for MpUint {
    fn from(n: u16) -> Self {
        Self::from(n as u64)
    }
}

impl From<u32> for MpUint {
    fn from(n: u32) -> Self {
        Self::from(n as u64)
    }
}

impl From<u64> for MpUint {
    #[allow(trivial_numeric_casts)]
    fn from(n: u64) -> Self {
        let mut limbs = Vec::with_capacity(8 / Limb::BYTES);
        let mut v = n;
        while v != 0 {
            limbs.push(Limb(v as crate::Word));
            v = (v >> (Limb::BITS - 1)) >> 1;
        }
        Self { limbs }
    }
}

impl fmt::Debug for MpUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MpUint(0x{self:X})")
    }
}

impl fmt::Display for MpUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(self, f)
    }
}

impl fmt::LowerHex for MpUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.limbs.is_empty() {
            return fmt::LowerHex::fmt(&Limb::ZERO, f);
        }

        for limb in self.limbs.iter().rev() {
            fmt::LowerHex::fmt(limb, f)?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for MpUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.limbs.is_empty() {
            return fmt::UpperHex::fmt(&Limb::ZERO, f);
        }

        for limb in self.limbs.iter().rev() {
            fmt::UpperHex::fmt(limb, f)?;
        }
        Ok(())
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for MpUint {
    fn zeroize(&mut self) {
        for limb in &mut self.limbs {
            limb.zeroize();
        }
        self.limbs.clear();
    }
}
