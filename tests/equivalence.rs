//! Equivalence tests between every registry entry and the reference oracle.

mod common;

use common::{positive_modulus, to_bigint};
use modexp_harness::{Kind, MontyCtx, REGISTRY, modexp, registry};
use num_bigint::{BigInt, Sign};
use num_traits::{One, Zero};
use proptest::prelude::*;

prop_compose! {
    /// Generate a random signed operand.
    fn operand()(bytes in any::<Vec<u8>>(), negative in any::<bool>()) -> BigInt {
        to_bigint(&bytes, negative)
    }
}
prop_compose! {
    /// Generate a random odd modulus of either sign.
    fn modulus()(mut bytes in proptest::collection::vec(any::<u8>(), 1..48), negative in any::<bool>()) -> BigInt {
        *bytes.last_mut().expect("at least one byte") |= 1;
        to_bigint(&bytes, negative)
    }
}

proptest! {
    #[test]
    fn every_entry_agrees_with_oracle(a in operand(), p in operand(), m in modulus()) {
        let want = modexp::mod_exp_simple(&a, &p, &m).expect("oracle");

        for entry in REGISTRY {
            let got = registry::invoke(entry, &a, &p, &m, None).expect(entry.name);
            prop_assert_eq!(&got, &want, "{} disagrees", entry.name);
        }
    }

    #[test]
    fn inflating_the_base_by_modulus_multiples_is_invisible(
        a in operand(), p in operand(), m in modulus(), k in 0u32..17,
    ) {
        let offset = BigInt::from_biguint(Sign::Plus, m.magnitude() * k);
        let inflated = &a + offset;

        for entry in REGISTRY {
            let direct = registry::invoke(entry, &a, &p, &m, None).expect(entry.name);
            let shifted = registry::invoke(entry, &inflated, &p, &m, None).expect(entry.name);
            prop_assert_eq!(&direct, &shifted, "{} is not reduction-invariant", entry.name);
        }
    }

    #[test]
    fn two_term_matches_composed_oracle(
        a in operand(), p in operand(), b in operand(), q in operand(), m in modulus(),
    ) {
        let want = if m.magnitude().is_one() {
            BigInt::zero()
        } else {
            let fact1 = modexp::mod_exp_simple(&a, &p, &m).expect("oracle");
            let fact2 = modexp::mod_exp_simple(&b, &q, &m).expect("oracle");
            fact1 * fact2 % positive_modulus(&m)
        };

        let got = modexp::mod_exp2_mont(Some(&a), Some(&p), Some(&b), Some(&q), &m, None)
            .expect("mod_exp2_mont");
        prop_assert_eq!(got, want);
    }

    #[test]
    fn zero_exponent_modulus_one_is_zero(a in operand()) {
        let p = BigInt::zero();
        let m = BigInt::one();

        for entry in REGISTRY {
            let got = registry::invoke(entry, &a, &p, &m, None).expect(entry.name);
            prop_assert!(got.is_zero(), "{} returned nonzero", entry.name);
        }
    }

    #[test]
    fn precomputed_context_is_equivalent_to_derived(
        a in operand(), p in operand(), m in modulus(),
    ) {
        let ctx = MontyCtx::new(&m).expect("odd nonzero modulus");

        for entry in REGISTRY {
            if matches!(entry.kind, Kind::Plain(_)) {
                continue;
            }
            let derived = registry::invoke(entry, &a, &p, &m, None).expect(entry.name);
            let precomputed =
                registry::invoke(entry, &a, &p, &m, Some(&ctx)).expect(entry.name);
            prop_assert_eq!(&derived, &precomputed, "{} context mismatch", entry.name);
        }
    }
}
