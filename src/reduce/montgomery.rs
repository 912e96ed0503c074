//! Montgomery reduction.
//!
//! Algorithm 14.32 in Handbook of Applied Cryptography
//! <https://cacr.uwaterloo.ca/hac/about/chap14.pdf>, word-by-word over a
//! double-width buffer. Requires an odd modulus; the dispatcher only
//! routes odd moduli here.

use crate::{Limb, MpUint, Result, uint::try_alloc};

/// Precomputed Montgomery context for a `k`-limb odd modulus `p`:
/// `neg_inv = -p^-1 mod B`. Holds no heap state.
pub(crate) struct Montgomery {
    k: usize,
    neg_inv: Limb,
}

impl Montgomery {
    /// Precompute the reduction context for an odd `p`.
    pub(crate) fn setup(p: &MpUint) -> Self {
        debug_assert!(p.is_odd());
        Self {
            k: p.nlimbs(),
            neg_inv: p.limbs[0].invert_mod_word().wrapping_neg(),
        }
    }

    /// The Montgomery form of 1, i.e. `B^k mod p`.
    pub(crate) fn try_one(&self, p: &MpUint) -> Result<MpUint> {
        MpUint::try_from_u64(1)?.try_shl_limbs(self.k)?.try_rem(p)
    }

    /// Bring `x` into the Montgomery domain: `x * B^k mod p`.
    pub(crate) fn try_to_domain(&self, x: &MpUint, p: &MpUint) -> Result<MpUint> {
        x.try_shl_limbs(self.k)?.try_rem(p)
    }

    /// Compute `x * B^-k mod p`, the Montgomery reduction of `x`.
    ///
    /// Requires `x < p * B^k`; every product of two values below `p`
    /// qualifies. One reduction applied to a value already below `p`
    /// converts it out of the Montgomery domain.
    pub(crate) fn reduce(&self, x: MpUint, p: &MpUint) -> Result<MpUint> {
        let k = self.k;
        debug_assert!(x.nlimbs() <= 2 * k);

        let mut buf = try_alloc(2 * k)?;
        buf.extend_from_slice(&x.limbs);
        buf.resize(2 * k, Limb::ZERO);
        let (lower, upper) = buf.split_at_mut(k);

        let mut meta_carry = Limb::ZERO;

        for i in 0..k {
            let u = lower[i].wrapping_mul(self.neg_inv);

            let (_, mut carry) = lower[i].mac(u, p.limbs[0], Limb::ZERO);

            let mut j = 1;
            while j < k - i {
                let (n, c) = lower[i + j].mac(u, p.limbs[j], carry);
                lower[i + j] = n;
                carry = c;
                j += 1;
            }
            while j < k {
                let (n, c) = upper[i + j - k].mac(u, p.limbs[j], carry);
                upper[i + j - k] = n;
                carry = c;
                j += 1;
            }

            let (n, c) = upper[i].carrying_add(carry, meta_carry);
            upper[i] = n;
            meta_carry = c;
        }

        // Division by B^k is simply taking the upper half of the buffer.
        // The value there is below 2p, so meta_carry is 0 or 1 and a
        // single conditional subtraction finishes the reduction.
        let mut limbs = try_alloc(k + 1)?;
        limbs.extend_from_slice(upper);
        limbs.push(meta_carry);

        let mut r = MpUint { limbs };
        MpUint::clamp(&mut r);
        if r >= *p {
            r.sub_assign(p);
        }
        Ok(r)
    }
}

#[cfg(test)]
mod tests {
    use super::Montgomery;
    use crate::MpUint;

    fn modulus() -> MpUint {
        // odd, three bytes over a limb boundary
        MpUint::from_be_slice(&[0x03, 0x7f, 0x21, 0xee, 0x45, 0x90, 0x01, 0x23, 0x45, 0x67, 0x89])
            .unwrap()
    }

    #[test]
    fn round_trip_through_domain() {
        let p = modulus();
        let mont = Montgomery::setup(&p);

        for value in [0u64, 1, 2, 496, 0xffff_ffff_ffff_fffd] {
            let a = MpUint::from(value);
            let a_bar = mont.try_to_domain(&a, &p).unwrap();
            assert_eq!(mont.reduce(a_bar, &p).unwrap(), a.try_rem(&p).unwrap());
        }
    }

    #[test]
    fn domain_multiplication() {
        let p = modulus();
        let mont = Montgomery::setup(&p);

        let a = MpUint::from(0x1234_5678_9abc_def1u64);
        let b = MpUint::from(0xfedc_ba98_7654_3210u64);

        let a_bar = mont.try_to_domain(&a, &p).unwrap();
        let b_bar = mont.try_to_domain(&b, &p).unwrap();
        let ab_bar = mont.reduce(a_bar.try_mul(&b_bar).unwrap(), &p).unwrap();

        let ab = a.try_mul(&b).unwrap().try_rem(&p).unwrap();
        assert_eq!(ab_bar, mont.try_to_domain(&ab, &p).unwrap());
    }

    #[test]
    fn one_is_normalization() {
        let p = modulus();
        let mont = Montgomery::setup(&p);
        let one_bar = mont.try_one(&p).unwrap();
        assert_eq!(mont.reduce(one_bar, &p).unwrap(), MpUint::one());
    }
}
