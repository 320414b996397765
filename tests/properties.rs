// tests/properties.rs

use num_integer::Integer;
use proptest::prelude::*;
use ratio64::Rational;
use std::cmp::Ordering;

fn small_rational() -> impl Strategy<Value = Rational> {
    (-1000i64..1000, 1i64..1000).prop_map(|(n, d)| Rational::new(n, d).unwrap())
}

proptest! {
    #[test]
    fn decimal_matches_float_division(n in any::<i32>(), d in any::<i32>().prop_filter("non-zero", |d| *d != 0)) {
        let f = Rational::new(i64::from(n), i64::from(d)).unwrap();
        prop_assert_eq!(f.to_decimal(), n as f64 / d as f64);
    }

    #[test]
    fn simplified_terms_are_coprime(n in -1_000_000i64..1_000_000, d in 1i64..1_000_000) {
        let (sn, sd) = Rational::new(n, d).unwrap().simplified_terms();
        prop_assert_eq!(sn.abs().gcd(&sd.abs()), 1);
        if n == 0 {
            prop_assert_eq!((sn, sd), (0, 1));
        }
    }

    #[test]
    fn simplify_is_idempotent(n in -1_000_000i64..1_000_000, d in -1_000_000i64..1_000_000) {
        prop_assume!(d != 0);
        let once = Rational::new(n, d).unwrap().simplified();
        let twice = once.simplified();
        prop_assert!(twice == once);
        prop_assert!(twice.exact_eq(&once));
        if n >= 0 && d > 0 {
            prop_assert_eq!(twice.terms(), once.terms());
        }
    }

    #[test]
    fn add_then_sub_restores_value(a in small_rational(), b in small_rational()) {
        prop_assert!((a + b) - b == a);
    }

    #[test]
    fn one_is_multiplicative_identity(a in small_rational()) {
        prop_assert!(a * Rational::from_integer(1) == a);
    }

    #[test]
    fn exact_and_decimal_ordering_agree(a in small_rational(), b in small_rational()) {
        prop_assert_eq!(Some(a.exact_cmp(&b)), a.partial_cmp(&b));
        prop_assert_eq!(a.exact_cmp(&b) == Ordering::Equal, a == b);
    }

    #[test]
    fn display_parses_back(n in 0i64..i64::MAX, d in 1i64..i64::MAX) {
        let f = Rational::new(n, d).unwrap();
        let parsed: Rational = f.to_string().parse().unwrap();
        prop_assert_eq!(parsed.terms(), f.terms());
    }
}
