//! Property-based tests for arbitrary precision arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Integer, Rational};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    // Every finite double, subnormals and both zeros included
    fn finite_f64() -> impl Strategy<Value = f64> {
        any::<u64>()
            .prop_map(f64::from_bits)
            .prop_filter("finite", |x| x.is_finite())
    }

    proptest! {
        #[test]
        fn rational_has_positive_denominator_and_sign(
            num in small_int(),
            den in non_zero_int()
        ) {
            let r = Rational::from_i64(num, den);
            prop_assert!(r.denominator().is_positive());
            prop_assert_eq!(r.is_positive(), (num > 0) == (den > 0) && num != 0);
            prop_assert_eq!(r.is_negative(), (num > 0) != (den > 0) && num != 0);
            // Same value as the unreduced pair.
            prop_assert_eq!(r.numerator() * Integer::new(den), Integer::new(num) * r.denominator());
        }

        #[test]
        fn rational_order_matches_cross_multiplication(
            num_a in small_int(),
            den_a in 1i64..1000i64,
            num_b in small_int(),
            den_b in 1i64..1000i64
        ) {
            let a = Rational::from_i64(num_a, den_a);
            let b = Rational::from_i64(num_b, den_b);
            prop_assert_eq!(a.cmp(&b), (num_a * den_b).cmp(&(num_b * den_a)));
            prop_assert_eq!((-b.clone()).cmp(&-a.clone()), a.cmp(&b));
        }

        #[test]
        fn f64_round_trips_exactly(x in finite_f64()) {
            let exact = Rational::try_from_f64(x).unwrap();
            prop_assert_eq!(exact.to_f64().to_bits(), if x == 0.0 { 0 } else { x.to_bits() });
        }

        #[test]
        fn to_f64_matches_hardware_division(n in -(1i64 << 53)..(1i64 << 53), d in 1i64..(1i64 << 53)) {
            // Both operands are exact doubles, so IEEE division is correctly rounded.
            prop_assert_eq!(Rational::from_i64(n, d).to_f64(), n as f64 / d as f64);
        }

        #[test]
        fn f64_order_is_preserved(x in finite_f64(), y in finite_f64()) {
            let a = Rational::try_from_f64(x).unwrap();
            let b = Rational::try_from_f64(y).unwrap();
            prop_assert_eq!(a.partial_cmp(&b), x.partial_cmp(&y));
        }
    }
}
