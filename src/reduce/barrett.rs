//! Barrett reduction.
//!
//! Algorithm 14.42 in Handbook of Applied Cryptography
//! <https://cacr.uwaterloo.ca/hac/about/chap14.pdf>. Works for any
//! positive modulus, odd or even, which is why the generic
//! exponentiation path is built on it.

use crate::{MpUint, Result};

/// Precomputed Barrett context: `mu = floor(B^2k / p)` for a `k`-limb
/// modulus `p`.
pub(crate) struct Barrett {
    mu: MpUint,
    k: usize,
}

impl Barrett {
    /// Precompute the reduction context for `p`.
    pub(crate) fn setup(p: &MpUint) -> Result<Self> {
        let k = p.nlimbs();
        let mu = MpUint::try_from_u64(1)?
            .try_shl_limbs(2 * k)?
            .try_div_rem(p)?
            .0;
        Ok(Self { mu, k })
    }

    /// Reduce `x` modulo the `p` this context was built from.
    ///
    /// Requires `x < B^2k` (in particular any `x < p^2` qualifies). The
    /// estimated quotient `q = ((x / B^(k-1)) * mu) / B^(k+1)` never
    /// overestimates and falls short by at most two, so the correction
    /// loop runs at most twice.
    pub(crate) fn reduce(&self, x: MpUint, p: &MpUint) -> Result<MpUint> {
        debug_assert!(x.nlimbs() <= 2 * self.k);

        let mut q = x.try_clone()?;
        q.shr_limbs_assign(self.k - 1);
        q = q.try_mul(&self.mu)?;
        q.shr_limbs_assign(self.k + 1);

        let mut r = x;
        r.sub_assign(&q.try_mul(p)?);
        while r >= *p {
            r.sub_assign(p);
        }
        Ok(r)
    }
}
