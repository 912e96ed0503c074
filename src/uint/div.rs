//! [`MpUint`] division.

use crate::{Limb, MpUint, Result, Word, uint::try_alloc};

impl MpUint {
    /// Binary long division: returns `(self / rhs, self mod rhs)`.
    ///
    /// Used only on setup paths (initial `G mod P`, Barrett `mu`,
    /// Montgomery domain entry); the exponentiation inner loop reduces
    /// through the precomputed contexts instead.
    ///
    /// # Panics
    /// If `rhs` is zero.
    pub fn try_div_rem(&self, rhs: &Self) -> Result<(Self, Self)> {
        assert!(!rhs.is_zero(), "division by zero");

        if self < rhs {
            return Ok((Self::zero(), self.try_clone()?));
        }

        let mut quot = try_alloc(self.nlimbs())?;
        quot.resize(self.nlimbs(), Limb::ZERO);

        // The remainder stays below rhs between iterations, so one extra
        // limb of headroom covers the shift.
        let mut rem = Self::try_with_capacity(rhs.nlimbs() + 1)?;

        let mut i = self.bits();
        while i > 0 {
            i -= 1;
            rem.shl1_assign();
            if self.bit(i) {
                match rem.limbs.first_mut() {
                    Some(limb) => limb.0 |= 1,
                    None => rem.limbs.push(Limb::ONE),
                }
            }
            if rem >= *rhs {
                rem.sub_assign(rhs);
                quot[(i / Limb::BITS) as usize].0 |= (1 as Word) << (i % Limb::BITS);
            }
        }

        let mut quotient = Self { limbs: quot };
        MpUint::clamp(&mut quotient);
        Ok((quotient, rem))
    }

    /// Compute `self mod rhs`, with the result in `[0, rhs)`.
    ///
    /// # Panics
    /// If `rhs` is zero.
    pub fn try_rem(&self, rhs: &Self) -> Result<Self> {
        Ok(self.try_div_rem(rhs)?.1)
    }
}
