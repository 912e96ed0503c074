//! The fast exponentiation path for odd and diminished-radix moduli.
//!
//! Same window machinery as the generic path, with the per-step Barrett
//! reduction swapped for Montgomery reduction (operands carried in the
//! Montgomery domain) or, when the modulus has the diminished-radix
//! shape, the single-limb fold reduction in the natural domain.

use crate::exptmod::{ScanMode, try_power_table, window_size};
use crate::reduce::{dr, montgomery::Montgomery};
use crate::{Limb, MpUint, Result};

/// Reduction strategy, fixed once per call.
enum Redux {
    Montgomery(Montgomery),
    DiminishedRadix(Limb),
}

impl Redux {
    fn reduce(&self, x: MpUint, p: &MpUint) -> Result<MpUint> {
        match self {
            Redux::Montgomery(mont) => mont.reduce(x, p),
            Redux::DiminishedRadix(d) => dr::reduce(x, p, *d),
        }
    }
}

/// Compute `g^x mod p` where `p` is odd (`dr_hint == false`, Montgomery
/// reduction) or of diminished-radix shape (`dr_hint == true`).
///
/// Semantically identical to the Barrett path for every modulus the
/// dispatcher routes here; variable-time like it.
pub(crate) fn exptmod_fast(g: &MpUint, x: &MpUint, p: &MpUint, dr_hint: bool) -> Result<MpUint> {
    let winsize = window_size(x.bits());
    let table_len = 1usize << winsize;

    let mut table = try_power_table(table_len)?;

    // The Montgomery variant works on transformed operands: the
    // accumulator starts at B^k mod p (the domain image of 1) and the
    // base enters the domain; one extra reduction at the end undoes it.
    // The diminished-radix variant stays in the natural domain.
    let (redux, mut res) = if dr_hint {
        table[1] = g.try_rem(p)?;
        (Redux::DiminishedRadix(dr::setup(p)), MpUint::try_from_u64(1)?)
    } else {
        let mont = Montgomery::setup(p);
        let one = mont.try_one(p)?;
        table[1] = mont.try_to_domain(&g.try_rem(p)?, p)?;
        (Redux::Montgomery(mont), one)
    };

    let half = table_len >> 1;
    table[half] = table[1].try_clone()?;
    for _ in 0..winsize - 1 {
        table[half] = redux.reduce(table[half].try_sqr()?, p)?;
    }
    for i in half + 1..table_len {
        table[i] = redux.reduce(table[i - 1].try_mul(&table[1])?, p)?;
    }

    let mut mode = ScanMode::Idle;
    let mut window = 0usize;
    let mut filled = 0u32;

    for &limb in x.as_limbs().iter().rev() {
        let mut shift = Limb::BITS;
        while shift > 0 {
            shift -= 1;
            let bit = ((limb.0 >> shift) & 1) as usize;

            if mode == ScanMode::Idle && bit == 0 {
                continue;
            }

            if mode == ScanMode::Square && bit == 0 {
                res = redux.reduce(res.try_sqr()?, p)?;
                continue;
            }

            filled += 1;
            window |= bit << (winsize - filled);
            mode = ScanMode::Window;

            if filled == winsize {
                for _ in 0..winsize {
                    res = redux.reduce(res.try_sqr()?, p)?;
                }
                res = redux.reduce(res.try_mul(&table[window])?, p)?;
                window = 0;
                filled = 0;
                mode = ScanMode::Square;
            }
        }
    }

    if mode == ScanMode::Window && filled > 0 {
        for _ in 0..filled {
            res = redux.reduce(res.try_sqr()?, p)?;

            window <<= 1;
            if window & (1 << winsize) != 0 {
                res = redux.reduce(res.try_mul(&table[1])?, p)?;
            }
        }
    }

    // leave the Montgomery domain
    if let Redux::Montgomery(mont) = &redux {
        res = mont.reduce(res, p)?;
    }

    Ok(res)
}
