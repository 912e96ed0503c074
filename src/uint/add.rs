//! [`MpUint`] addition and subtraction.

use crate::{Limb, MpUint, Result, uint::try_alloc};

impl MpUint {
    /// Compute `self + rhs`.
    pub fn try_add(&self, rhs: &Self) -> Result<Self> {
        let (shorter, longer) = if self.nlimbs() <= rhs.nlimbs() {
            (self, rhs)
        } else {
            (rhs, self)
        };

        let mut limbs = try_alloc(longer.nlimbs() + 1)?;
        let mut carry = Limb::ZERO;

        for i in 0..longer.nlimbs() {
            let &a = shorter.limbs.get(i).unwrap_or(&Limb::ZERO);
            let (limb, c) = longer.limbs[i].carrying_add(a, carry);
            limbs.push(limb);
            carry = c;
        }
        limbs.push(carry);

        let mut ret = Self { limbs };
        MpUint::clamp(&mut ret);
        Ok(ret)
    }

    /// In-place `self -= rhs`.
    ///
    /// Requires `self >= rhs`; the final borrow is debug-asserted away.
    pub(crate) fn sub_assign(&mut self, rhs: &Self) {
        debug_assert!(*self >= *rhs);
        let mut borrow = Limb::ZERO;

        for i in 0..self.limbs.len() {
            let &b = rhs.limbs.get(i).unwrap_or(&Limb::ZERO);
            let (limb, br) = self.limbs[i].borrowing_sub(b, borrow);
            self.limbs[i] = limb;
            borrow = br;
        }

        debug_assert_eq!(borrow, Limb::ZERO);
        MpUint::clamp(self);
    }
}
