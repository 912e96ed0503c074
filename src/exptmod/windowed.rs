//! The generic exponentiation path: fixed-window square-and-multiply with
//! Barrett reduction.
//!
//! Works for any positive modulus. The window width comes from the
//! exponent's bit length; the table of base powers is built once and the
//! exponent is then swept most-significant-bit first, squaring per bit and
//! multiplying by a table entry per full window.

use crate::exptmod::{ScanMode, try_power_table, window_size};
use crate::reduce::barrett::Barrett;
use crate::{Limb, MpUint, Result};

/// Compute `g^x mod p` with a fixed sliding window and Barrett reduction
/// after every multiply and square.
///
/// Variable-time: branch structure and table indices depend on the bits
/// of `x`.
pub(crate) fn exptmod_barrett(g: &MpUint, x: &MpUint, p: &MpUint) -> Result<MpUint> {
    let winsize = window_size(x.bits());
    let table_len = 1usize << winsize;

    let mut table = try_power_table(table_len)?;

    let barrett = Barrett::setup(p)?;

    // table[i] = g^i mod p for i in {1} ∪ [2^(w-1), 2^w). The slots below
    // the half point stay at zero; the scan never addresses them.
    table[1] = g.try_rem(p)?;

    // the half-point entry by repeated squaring of table[1],
    let half = table_len >> 1;
    table[half] = table[1].try_clone()?;
    for _ in 0..winsize - 1 {
        table[half] = barrett.reduce(table[half].try_sqr()?, p)?;
    }

    // then the rest of the upper half by multiplying up from it
    for i in half + 1..table_len {
        table[i] = barrett.reduce(table[i - 1].try_mul(&table[1])?, p)?;
    }

    let mut res = MpUint::try_from_u64(1)?;

    let mut mode = ScanMode::Idle;
    let mut window = 0usize;
    let mut filled = 0u32;

    for &limb in x.as_limbs().iter().rev() {
        let mut shift = Limb::BITS;
        while shift > 0 {
            shift -= 1;
            let bit = ((limb.0 >> shift) & 1) as usize;

            // leading zeros ahead of the first set bit cost nothing
            if mode == ScanMode::Idle && bit == 0 {
                continue;
            }

            // a zero bit between windows squares the accumulator
            if mode == ScanMode::Square && bit == 0 {
                res = barrett.reduce(res.try_sqr()?, p)?;
                continue;
            }

            // otherwise the bit joins the pending window
            filled += 1;
            window |= bit << (winsize - filled);
            mode = ScanMode::Window;

            if filled == winsize {
                for _ in 0..winsize {
                    res = barrett.reduce(res.try_sqr()?, p)?;
                }
                res = barrett.reduce(res.try_mul(&table[window])?, p)?;
                window = 0;
                filled = 0;
                mode = ScanMode::Square;
            }
        }
    }

    // Leftover bits of a partial window, one at a time. No table lookup
    // is needed here: each squaring shifts the pending value up, and the
    // multiply by table[1] fires exactly when a set bit reaches the
    // window's top position.
    if mode == ScanMode::Window && filled > 0 {
        for _ in 0..filled {
            res = barrett.reduce(res.try_sqr()?, p)?;

            window <<= 1;
            if window & (1 << winsize) != 0 {
                res = barrett.reduce(res.try_mul(&table[1])?, p)?;
            }
        }
    }

    Ok(res)
}
