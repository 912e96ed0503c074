//! [`MpUint`] shifts, at limb granularity plus the single-bit shift the
//! division loop needs.

use crate::{Limb, MpUint, Result, uint::try_alloc};

impl MpUint {
    /// Shift left by `n` whole limbs: multiply by `B^n`.
    pub fn try_shl_limbs(&self, n: usize) -> Result<Self> {
        if self.is_zero() {
            return Ok(Self::zero());
        }

        let mut limbs = try_alloc(self.nlimbs() + n)?;
        limbs.resize(n, Limb::ZERO);
        limbs.extend_from_slice(&self.limbs);
        Ok(Self { limbs })
    }

    /// Shift right by `n` whole limbs in place: divide by `B^n`, dropping
    /// the remainder.
    pub fn shr_limbs_assign(&mut self, n: usize) {
        if n >= self.limbs.len() {
            self.limbs.clear();
        } else {
            self.limbs.drain(..n);
        }
    }

    /// Shift left by one bit in place. Grows by at most one limb.
    pub(crate) fn shl1_assign(&mut self) {
        let mut carry = Limb::ZERO;
        for limb in &mut self.limbs {
            let hi = Limb(limb.0 >> (Limb::BITS - 1));
            limb.0 = (limb.0 << 1) | carry.0;
            carry = hi;
        }
        if carry != Limb::ZERO {
            self.limbs.push(carry);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::MpUint;

    #[test]
    fn shl_limbs_then_shr_round_trips() {
        let n = MpUint::from(0xabcdu64);
        let mut shifted = n.try_shl_limbs(3).unwrap();
        assert_eq!(shifted.nlimbs(), n.nlimbs() + 3);
        shifted.shr_limbs_assign(3);
        assert_eq!(shifted, n);
    }

    #[test]
    fn shr_past_end_is_zero() {
        let mut n = MpUint::from(0xabcdu64);
        n.shr_limbs_assign(5);
        assert!(n.is_zero());
    }

    #[test]
    fn shl1_doubles() {
        let mut n = MpUint::from(u64::MAX);
        n.shl1_assign();
        let expected = MpUint::from(u64::MAX).try_add(&MpUint::from(u64::MAX)).unwrap();
        assert_eq!(n, expected);
    }
}
