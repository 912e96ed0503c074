//! Big-endian byte encoding for [`MpUint`].

use crate::{Limb, MpUint, Result, Word, uint::try_alloc};
use alloc::vec::Vec;

impl MpUint {
    /// Decode from big-endian bytes. Leading zero bytes are accepted and
    /// ignored; the empty slice decodes to zero.
    pub fn from_be_slice(bytes: &[u8]) -> Result<Self> {
        let nlimbs = bytes.len().div_ceil(Limb::BYTES);
        let mut limbs = try_alloc(nlimbs)?;
        limbs.resize(nlimbs, Limb::ZERO);

        for (i, &byte) in bytes.iter().rev().enumerate() {
            limbs[i / Limb::BYTES].0 |= (byte as Word) << (8 * (i % Limb::BYTES));
        }

        let mut ret = Self { limbs };
        MpUint::clamp(&mut ret);
        Ok(ret)
    }

    /// Encode as minimal big-endian bytes: no leading zero bytes, and
    /// zero encodes to the empty vector.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.nlimbs() * Limb::BYTES);
        for limb in self.limbs.iter().rev() {
            bytes.extend_from_slice(&limb.0.to_be_bytes());
        }

        let leading = bytes.iter().take_while(|&&b| b == 0).count();
        bytes.drain(..leading);
        bytes
    }
}
