//! Property tests for the schedule's integral/inverse pair

use proptest::prelude::*;
use sis_simulator_core_rs::TransmissibilitySchedule;

/// Schedules with strictly positive rates in both phases, so the integral is
/// strictly increasing and its inverse is unique
fn schedule_strategy() -> impl Strategy<Value = TransmissibilitySchedule> {
    (0.5f64..10.0, 0.5f64..10.0, 0.1f64..5.0, 0.1f64..5.0).prop_map(
        |(t1, phase2_len, lambda, second_rate)| {
            TransmissibilitySchedule::new(t1, t1 + phase2_len, lambda, second_rate - lambda)
                .expect("strategy only yields valid parameters")
        },
    )
}

proptest! {
    #[test]
    fn integral_then_inverse_round_trips(
        schedule in schedule_strategy(),
        t in 0.0f64..500.0,
    ) {
        let back = schedule.evaluate_integral_inverse(schedule.evaluate_integral(t));
        prop_assert!(
            (back - t).abs() <= 1e-6 * t.abs().max(1.0),
            "t = {}, back = {}", t, back
        );
    }

    #[test]
    fn inverse_then_integral_round_trips(
        schedule in schedule_strategy(),
        l in 0.0f64..500.0,
    ) {
        let back = schedule.evaluate_integral(schedule.evaluate_integral_inverse(l));
        prop_assert!(
            (back - l).abs() <= 1e-6 * l.abs().max(1.0),
            "l = {}, back = {}", l, back
        );
    }

    #[test]
    fn integral_is_non_decreasing(
        schedule in schedule_strategy(),
        a in 0.0f64..200.0,
        b in 0.0f64..200.0,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let lo_value = schedule.evaluate_integral(lo);
        let hi_value = schedule.evaluate_integral(hi);
        prop_assert!(lo_value <= hi_value + 1e-9 * hi_value.abs().max(1.0));
    }

    #[test]
    fn rate_is_periodic(
        schedule in schedule_strategy(),
        t in 0.0f64..100.0,
        k in 1u32..5,
    ) {
        let t2 = schedule.period();
        let dt = t - (t / t2).floor() * t2;
        // stay clear of the phase edges, where a shifted evaluation point
        // can land on the other side through rounding alone
        prop_assume!((dt - schedule.phase_boundary()).abs() > 1e-6);
        prop_assume!(dt > 1e-6 && t2 - dt > 1e-6);

        prop_assert_eq!(
            schedule.evaluate(t),
            schedule.evaluate(t + f64::from(k) * t2)
        );
    }

    #[test]
    fn rate_stays_within_phase_bounds(
        schedule in schedule_strategy(),
        t in 0.0f64..200.0,
    ) {
        let rate = schedule.evaluate(t);
        let first = schedule.base_rate();
        let second = schedule.base_rate() + schedule.rate_increment();
        prop_assert!(rate == first || rate == second);
    }
}
