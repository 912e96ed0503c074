//! Modular exponentiation.
//!
//! [`exptmod`] is a shell that routes each call to the faster of two
//! strategies: a Montgomery-class path for odd (or diminished-radix)
//! moduli of moderate size, and a generic windowed path backed by
//! Barrett reduction for everything else. Both paths compute the same
//! value; the routing decision is purely about speed.

mod fast;
mod windowed;

use crate::{MpUint, Result, reduce::dr, uint::try_alloc};
use alloc::vec::Vec;

/// Window-size schedule, selected by exponent bit length: exponents up to
/// the first element of a pair use the paired window width. Larger
/// exponents justify larger windows because the table-build cost
/// amortizes over more squarings.
const WINDOW_THRESHOLDS: [(u32, u32); 6] = [
    (7, 2),
    (36, 3),
    (140, 4),
    (450, 5),
    (1303, 6),
    (3529, 7),
];

/// Window width for exponents beyond the last schedule entry.
const MAX_WINDOW_SIZE: u32 = 8;

/// Odd moduli with at least this many limbs take the Barrett path anyway.
pub(crate) const MONTGOMERY_CUTOFF_LIMBS: usize = 512;

/// The fast path requires strictly more limbs than this to pay off.
pub(crate) const FAST_PATH_MIN_LIMBS: usize = 4;

/// Pick the window width for an exponent of the given bit length.
pub(crate) fn window_size(exponent_bits: u32) -> u32 {
    for &(bits, size) in &WINDOW_THRESHOLDS {
        if exponent_bits <= bits {
            return size;
        }
    }
    MAX_WINDOW_SIZE
}

/// State of the MSB-first exponent scan.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) enum ScanMode {
    /// Before the first set exponent bit; zeros are skipped outright.
    Idle,
    /// Between windows; a zero bit squares the accumulator.
    Square,
    /// A window is being collected.
    Window,
}

/// Allocate `len` power-table slots, each a benign zero with one limb of
/// capacity, before any slot is populated. Cleanup on a later failure is
/// then uniform: dropping the vector releases exactly what was acquired.
pub(crate) fn try_power_table(len: usize) -> Result<Vec<MpUint>> {
    let mut table = try_alloc(len)?;
    for _ in 0..len {
        table.push(MpUint::try_with_capacity(1)?);
    }
    Ok(table)
}

/// Compute `base^exponent mod modulus`.
///
/// The modulus may be any positive value; odd and diminished-radix moduli
/// of suitable size are routed to a Montgomery-class fast path, everything
/// else to the windowed Barrett path.
///
/// This operation is **not constant-time**: its branch structure and table
/// access pattern depend on the bits of `exponent`. Do not use it where a
/// timing side channel on the exponent matters.
///
/// # Panics
///
/// If `modulus` is zero.
///
/// ```
/// use exptmod::{MpUint, exptmod};
///
/// let y = exptmod(&MpUint::from(4u64), &MpUint::from(13u64), &MpUint::from(497u64))?;
/// assert_eq!(y, MpUint::from(445u64));
/// # Ok::<(), exptmod::Error>(())
/// ```
pub fn exptmod(base: &MpUint, exponent: &MpUint, modulus: &MpUint) -> Result<MpUint> {
    let dr_hint = dr::is_dr_modulus(modulus);

    if ((modulus.is_odd() && modulus.nlimbs() < MONTGOMERY_CUTOFF_LIMBS) || dr_hint)
        && modulus.nlimbs() > FAST_PATH_MIN_LIMBS
    {
        fast::exptmod_fast(base, exponent, modulus, dr_hint)
    } else {
        windowed::exptmod_barrett(base, exponent, modulus)
    }
}

impl MpUint {
    /// Method form of [`exptmod`]: `self^exponent mod modulus`.
    pub fn exptmod(&self, exponent: &Self, modulus: &Self) -> Result<Self> {
        exptmod(self, exponent, modulus)
    }
}

#[cfg(test)]
mod tests {
    use super::{exptmod, fast, window_size, windowed};
    use crate::MpUint;

    #[test]
    fn window_size_schedule() {
        assert_eq!(window_size(0), 2);
        assert_eq!(window_size(7), 2);
        assert_eq!(window_size(8), 3);
        assert_eq!(window_size(36), 3);
        assert_eq!(window_size(37), 4);
        assert_eq!(window_size(140), 4);
        assert_eq!(window_size(141), 5);
        assert_eq!(window_size(450), 5);
        assert_eq!(window_size(451), 6);
        assert_eq!(window_size(1303), 6);
        assert_eq!(window_size(1304), 7);
        assert_eq!(window_size(3529), 7);
        assert_eq!(window_size(3530), 8);
        assert_eq!(window_size(u32::MAX), 8);
    }

    #[test]
    fn known_answers() {
        let cases: &[(u64, u64, u64, u64)] = &[
            (4, 13, 497, 445),
            (2, 10, 1000, 24),
            (7, 0, 13, 1),
            (0, 5, 13, 0),
            (12, 1, 13, 12),
            (2, 64, 0xffff_ffff_ffff_ffc5, 0x3b),
        ];

        for &(g, x, p, want) in cases {
            let got = exptmod(&MpUint::from(g), &MpUint::from(x), &MpUint::from(p)).unwrap();
            assert_eq!(got, MpUint::from(want), "{g}^{x} mod {p}");
        }
    }

    /// A modulus wide enough for the fast path: odd, more than four limbs.
    fn wide_odd_modulus() -> MpUint {
        let mut bytes = [0xa7u8; 5 * 8 + 1];
        bytes[0] = 0x01;
        MpUint::from_be_slice(&bytes).unwrap()
    }

    #[test]
    fn dispatch_equivalence_montgomery() {
        let p = wide_odd_modulus();
        assert!(p.is_odd());

        let g = MpUint::from(0x1234_5678_9abc_def0u64);
        let x = MpUint::from_be_slice(&[0xc3; 11]).unwrap();

        let via_fast = fast::exptmod_fast(&g, &x, &p, false).unwrap();
        let via_barrett = windowed::exptmod_barrett(&g, &x, &p).unwrap();
        assert_eq!(via_fast, via_barrett);
        assert_eq!(exptmod(&g, &x, &p).unwrap(), via_barrett);
    }

    #[test]
    fn dispatch_equivalence_diminished_radix() {
        // p = B^6 - 0x4e1f
        let mut p = MpUint::one().try_shl_limbs(6).unwrap();
        p.sub_assign(&MpUint::from(0x4e1fu64));
        assert!(crate::reduce::dr::is_dr_modulus(&p));

        let g = MpUint::from_be_slice(&[0x77; 13]).unwrap();
        let x = MpUint::from_be_slice(&[0x5a; 9]).unwrap();

        let via_fast = fast::exptmod_fast(&g, &x, &p, true).unwrap();
        let via_barrett = windowed::exptmod_barrett(&g, &x, &p).unwrap();
        assert_eq!(via_fast, via_barrett);
        assert_eq!(exptmod(&g, &x, &p).unwrap(), via_barrett);
    }

    #[test]
    fn even_modulus_takes_barrett_path() {
        // 3 * B^3 + 2: wide and even, so only Barrett applies
        let p = MpUint::from(3u64)
            .try_shl_limbs(3)
            .unwrap()
            .try_add(&MpUint::from(2u64))
            .unwrap();
        assert!(!p.is_odd());

        let g = MpUint::from(0xdecafu64);
        let x = MpUint::from(65537u64);
        let got = exptmod(&g, &x, &p).unwrap();
        assert_eq!(got, windowed::exptmod_barrett(&g, &x, &p).unwrap());
        assert!(got < p);
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn zero_modulus_panics() {
        let _ = exptmod(&MpUint::from(2u64), &MpUint::from(3u64), &MpUint::zero());
    }
}
