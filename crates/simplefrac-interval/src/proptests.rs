//! Property-based tests for simplest-fraction search.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use simplefrac_integers::Rational;

    use crate::{simplest_from_float, Bound, Endpoint, Interval, RoundingInterval};

    // Small fractions, so that exhaustive comparison stays cheap
    fn small_fraction() -> impl Strategy<Value = Rational> {
        (-60i64..60i64, 1i64..25i64).prop_map(|(n, d)| Rational::from_i64(n, d))
    }

    // Mostly small fractions, with zero, ±1 and the infinities forced often
    // enough that intervals bounded by them come up in every run
    fn endpoint() -> impl Strategy<Value = Endpoint> {
        prop_oneof![
            6 => small_fraction().prop_map(Endpoint::Finite),
            3 => prop_oneof![Just(0i64), Just(1i64), Just(-1i64)].prop_map(Endpoint::from),
            1 => Just(Endpoint::NegInfinity),
            1 => Just(Endpoint::PosInfinity),
        ]
    }

    fn interval() -> impl Strategy<Value = Interval> {
        (endpoint(), any::<bool>(), endpoint(), any::<bool>()).prop_filter_map(
            "valid interval",
            |(left, include_left, right, include_right)| {
                let (left, right) = if left <= right { (left, right) } else { (right, left) };
                Interval::new(
                    Bound {
                        included: include_left && left.is_finite(),
                        endpoint: left,
                    },
                    Bound {
                        included: include_right && right.is_finite(),
                        endpoint: right,
                    },
                )
                .ok()
            },
        )
    }

    fn finite_f64() -> impl Strategy<Value = f64> {
        any::<u64>()
            .prop_map(f64::from_bits)
            .prop_filter("finite", |x| x.is_finite())
    }

    proptest! {
        #[test]
        fn simplest_is_a_member(interval in interval()) {
            let simplest = interval.simplest();
            prop_assert!(interval.contains(&simplest), "{} not in {}", simplest, interval);
        }

        #[test]
        fn nothing_else_is_as_simple(interval in interval()) {
            let simplest = interval.simplest();
            let max_numerator = simplest.numerator().abs().to_i64().unwrap();
            let max_denominator = simplest.denominator().to_i64().unwrap();

            for d in 1..=max_denominator {
                for n in -max_numerator..=max_numerator {
                    let candidate = Rational::from_i64(n, d);
                    if candidate != simplest && interval.contains(&candidate) {
                        prop_assert!(
                            !candidate.is_simpler_or_equal(&simplest),
                            "{} is at least as simple as {} in {}",
                            candidate,
                            simplest,
                            interval
                        );
                    }
                }
            }
        }

        #[test]
        fn reflection_negates_the_answer(interval in interval()) {
            let reflected = Interval::new(
                Bound { endpoint: -&interval.right().endpoint, included: interval.right().included },
                Bound { endpoint: -&interval.left().endpoint, included: interval.left().included },
            ).unwrap();
            prop_assert_eq!(reflected.simplest(), -interval.simplest());
        }

        #[test]
        fn simplest_from_float_round_trips(x in finite_f64()) {
            let simplest = simplest_from_float(x).unwrap();
            prop_assert_eq!(simplest.to_f64(), x);
            prop_assert!(RoundingInterval::of(x).unwrap().contains(&simplest));
        }

        #[test]
        fn simplest_from_float_recovers_small_fractions(n in 1i64..100_000, d in 1i64..100_000) {
            let fraction = Rational::from_i64(n, d);
            let x = fraction.to_f64();
            let simplest = simplest_from_float(x).unwrap();
            prop_assert_eq!(simplest.to_f64(), x);
            prop_assert!(simplest.is_simpler_or_equal(&fraction), "{} vs {}", simplest, fraction);
        }

        #[test]
        fn rounding_interval_is_tight(x in finite_f64()) {
            let rounding = RoundingInterval::of(x).unwrap();
            prop_assert_eq!(rounding.left.to_f64() == x, rounding.closed);
            prop_assert_eq!(rounding.right.to_f64() == x, rounding.closed);
            let inner = (rounding.left.clone() + &rounding.right) * Rational::from_i64(1, 2);
            prop_assert_eq!(inner.to_f64(), x);
        }
    }
}
