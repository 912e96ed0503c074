//! [`MpUint`] comparisons.
//!
//! Comparisons are variable-time; the clamped representation makes the
//! limb count alone decide between values of different magnitude classes.

use crate::MpUint;
use core::cmp::Ordering;

impl Ord for MpUint {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.limbs.len().cmp(&other.limbs.len()) {
            Ordering::Equal => (),
            ord => return ord,
        }

        for (a, b) in self.limbs.iter().rev().zip(other.limbs.iter().rev()) {
            match a.cmp(b) {
                Ordering::Equal => (),
                ord => return ord,
            }
        }

        Ordering::Equal
    }
}

impl PartialOrd for MpUint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
