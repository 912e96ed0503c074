//! Diminished-radix modulus support.
//!
//! Moduli of the form `p = B^k - d` with `0 < d < B` admit a reduction
//! that folds the limbs above `B^k` back in with one single-limb multiply
//! per pass, using `B^k ≡ d (mod p)`. Detection is purely structural, so
//! the dispatcher can use it as a routing hint.

use crate::{Limb, MpUint, Result};

/// Does `p` have the diminished-radix shape? True iff `p` has at least
/// two limbs, every limb above the lowest is all ones, and the lowest
/// limb is nonzero (so `d = B - p[0]` fits a limb).
pub(crate) fn is_dr_modulus(p: &MpUint) -> bool {
    if p.nlimbs() < 2 || p.limbs[0] == Limb::ZERO {
        return false;
    }
    p.limbs[1..].iter().all(|&limb| limb == Limb::MAX)
}

/// Compute `d = B - p[0]` for a diminished-radix `p`.
pub(crate) fn setup(p: &MpUint) -> Limb {
    debug_assert!(is_dr_modulus(p));
    p.limbs[0].wrapping_neg()
}

/// Reduce `x` modulo the diminished-radix `p` with fold constant `d`.
///
/// Each fold replaces `x` with `(x mod B^k) + d * (x div B^k)`, a
/// strictly smaller value congruent to `x`, until `x` fits in `k` limbs;
/// a value below `B^k = p + d` needs at most one final subtraction.
pub(crate) fn reduce(x: MpUint, p: &MpUint, d: Limb) -> Result<MpUint> {
    let k = p.nlimbs();
    let mut r = x;

    while r.nlimbs() > k {
        let mut hi = MpUint::try_with_capacity(r.nlimbs() - k)?;
        hi.limbs.extend_from_slice(&r.limbs[k..]);
        r.limbs.truncate(k);
        MpUint::clamp(&mut r);
        r = r.try_add(&hi.try_mul_limb(d)?)?;
    }

    while r >= *p {
        r.sub_assign(p);
    }
    Ok(r)
}
