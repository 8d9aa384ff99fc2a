//! Property-based tests for the BMI calculation
//!
//! These verify the ordering guarantees of the calculator over the whole
//! range of plausible human measurements, not just hand-picked examples.

#[cfg(test)]
mod tests {
    use crate::core::bmi::*;
    use proptest::prelude::*;

    fn height_cm() -> impl Strategy<Value = f64> {
        50.0f64..250.0
    }

    fn weight_kg() -> impl Strategy<Value = f64> {
        2.0f64..300.0
    }

    proptest! {
        #[test]
        fn test_heavier_never_lowers_bmi(
            height in height_cm(),
            weight in weight_kg(),
            extra in 0.0f64..50.0,
        ) {
            let lighter = compute_bmi(height, weight).unwrap();
            let heavier = compute_bmi(height, weight + extra).unwrap();
            prop_assert!(heavier.value >= lighter.value);
        }

        #[test]
        fn test_taller_never_raises_bmi(
            height in height_cm(),
            weight in weight_kg(),
            extra in 0.0f64..50.0,
        ) {
            let shorter = compute_bmi(height, weight).unwrap();
            let taller = compute_bmi(height + extra, weight).unwrap();
            prop_assert!(taller.value <= shorter.value);
        }

        #[test]
        fn test_value_is_rounded_to_one_decimal(
            height in height_cm(),
            weight in weight_kg(),
        ) {
            let result = compute_bmi(height, weight).unwrap();
            let scaled = result.value * 10.0;
            prop_assert!((scaled - scaled.round()).abs() < 1e-6);
        }

        #[test]
        fn test_ratio_and_gauge_stay_in_bounds(
            height in height_cm(),
            weight in weight_kg(),
        ) {
            let result = compute_bmi(height, weight).unwrap();
            prop_assert!((0.0..=1.0).contains(&result.ratio));

            let (filled, remaining) = gauge_segments(&result);
            prop_assert!(filled >= 0.0 && remaining >= 0.0);
            prop_assert!((filled + remaining - GAUGE_CEILING).abs() < 1e-9);
        }

        #[test]
        fn test_non_positive_inputs_always_rejected(
            bad in -1000.0f64..=0.0,
            good in 1.0f64..200.0,
        ) {
            prop_assert!(compute_bmi(bad, good).is_err());
            prop_assert!(compute_bmi(good, bad).is_err());
        }

        #[test]
        fn test_parse_measurement_never_panics(raw in ".*") {
            let _ = parse_measurement(&raw, "height");
        }
    }
}
