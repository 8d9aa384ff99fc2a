//! Property-based tests for the sleep-duration calculation

#[cfg(test)]
mod tests {
    use crate::core::sleep::*;
    use proptest::prelude::*;

    prop_compose! {
        fn time_of_day()(hour in 0u32..24, minute in 0u32..60) -> TimeOfDay {
            TimeOfDay::new(hour, minute).unwrap()
        }
    }

    proptest! {
        #[test]
        fn test_hours_within_a_day(bed in time_of_day(), wake in time_of_day()) {
            let result = compute_sleep_hours(bed, wake);
            prop_assert!(result.hours >= 0.0);
            prop_assert!(result.hours <= 24.0);
        }

        #[test]
        fn test_equal_times_are_zero(time in time_of_day()) {
            prop_assert_eq!(compute_sleep_hours(time, time).hours, 0.0);
        }

        #[test]
        fn test_both_directions_cover_the_day(bed in time_of_day(), wake in time_of_day()) {
            prop_assume!(bed != wake);
            let there = compute_sleep_hours(bed, wake).hours;
            let back = compute_sleep_hours(wake, bed).hours;
            // Each leg is rounded separately, so allow one tenth either way.
            prop_assert!((there + back - 24.0).abs() <= 0.1 + 1e-9);
        }

        #[test]
        fn test_display_round_trips_through_parse(time in time_of_day()) {
            let parsed: TimeOfDay = time.to_string().parse().unwrap();
            prop_assert_eq!(parsed, time);
        }

        #[test]
        fn test_out_of_range_hours_rejected(hour in 24u32..1000, minute in 0u32..60) {
            prop_assert!(TimeOfDay::new(hour, minute).is_err());
        }
    }
}
