//! [`MpUint`] multiplication operations.

use crate::{Limb, MpUint, Result, uint::try_alloc};

impl MpUint {
    /// Multiply `self` by `rhs`, producing the exact double-width product.
    pub fn try_mul(&self, rhs: &Self) -> Result<Self> {
        if self.is_zero() || rhs.is_zero() {
            return Ok(Self::zero());
        }

        let mut limbs = try_alloc(self.nlimbs() + rhs.nlimbs())?;
        limbs.resize(self.nlimbs() + rhs.nlimbs(), Limb::ZERO);

        // Schoolbook multiplication.
        for i in 0..self.nlimbs() {
            let mut carry = Limb::ZERO;

            for j in 0..rhs.nlimbs() {
                let k = i + j;
                let (n, c) = limbs[k].mac(self.limbs[i], rhs.limbs[j], carry);
                limbs[k] = n;
                carry = c;
            }

            limbs[i + rhs.nlimbs()] = carry;
        }

        let mut ret = Self { limbs };
        MpUint::clamp(&mut ret);
        Ok(ret)
    }

    /// Square `self`.
    pub fn try_sqr(&self) -> Result<Self> {
        self.try_mul(self)
    }

    /// Multiply `self` by a single limb.
    pub fn try_mul_limb(&self, rhs: Limb) -> Result<Self> {
        if self.is_zero() || rhs.is_zero() {
            return Ok(Self::zero());
        }

        let mut limbs = try_alloc(self.nlimbs() + 1)?;
        let mut carry = Limb::ZERO;

        for &limb in &self.limbs {
            let (n, c) = Limb::ZERO.mac(limb, rhs, carry);
            limbs.push(n);
            carry = c;
        }
        limbs.push(carry);

        let mut ret = Self { limbs };
        MpUint::clamp(&mut ret);
        Ok(ret)
    }
}
