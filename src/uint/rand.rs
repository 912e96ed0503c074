//! Random number generator support.

use crate::{Limb, MpUint, Result, Word, uint::try_alloc};
use rand_core::RngCore;

impl MpUint {
    /// Generate a uniformly random value in `[0, 2^bit_length)`.
    #[allow(trivial_numeric_casts)]
    pub fn try_random_bits<R: RngCore + ?Sized>(rng: &mut R, bit_length: u32) -> Result<Self> {
        if bit_length == 0 {
            return Ok(Self::zero());
        }

        let nlimbs = bit_length.div_ceil(Limb::BITS) as usize;
        let mut limbs = try_alloc(nlimbs)?;
        for _ in 0..nlimbs {
            limbs.push(Limb(rng.next_u64() as Word));
        }

        let partial = bit_length % Limb::BITS;
        if partial != 0 {
            if let Some(hi) = limbs.last_mut() {
                hi.0 &= Word::MAX >> (Limb::BITS - partial);
            }
        }

        let mut ret = Self { limbs };
        MpUint::clamp(&mut ret);
        Ok(ret)
    }
}
