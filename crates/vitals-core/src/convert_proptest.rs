#[cfg(test)]
mod proptest_vitals {
    use crate::convert::*;
    use crate::heart_rate::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10000))]

        // SpO2 stays inside 90..=100 for every ADC value
        #[test]
        fn spo2_within_band(raw in 0i32..=ADC_MAX) {
            let pct = spo2_percent(raw);
            prop_assert!((90.0..=100.0).contains(&pct), "raw={} pct={}", raw, pct);
        }

        // SpO2 never decreases as the raw value rises
        #[test]
        fn spo2_monotonic(a in 0i32..=ADC_MAX, b in 0i32..=ADC_MAX) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(spo2_percent(lo) <= spo2_percent(hi));
        }

        #[test]
        fn emg_within_full_scale(raw in 0i32..=ADC_MAX) {
            let mv = emg_millivolts(raw);
            prop_assert!((0.0..=EMG_FULL_SCALE_MV).contains(&mv), "raw={} mv={}", raw, mv);
        }

        // Out-of-range negative input still yields a non-negative voltage
        #[test]
        fn emg_never_negative(raw in i32::MIN / 4..0) {
            prop_assert!(emg_millivolts(raw) >= 0.0);
        }

        #[test]
        fn finite_temperature_untouched(t in -40.0f32..=80.0) {
            prop_assert_eq!(temperature_or_sentinel(t), t);
        }

        // Any sequence of steps keeps the walk in band and moves at most 2 per step
        #[test]
        fn heart_rate_walk_bounded(steps in proptest::collection::vec(-2i32..=2, 0..400)) {
            let mut hr = HeartRate::new();
            prop_assert_eq!(hr.bpm(), HEART_RATE_INITIAL_BPM);
            for delta in steps {
                let before = hr.bpm();
                let after = hr.apply_step(delta);
                prop_assert!((HEART_RATE_MIN_BPM..=HEART_RATE_MAX_BPM).contains(&after));
                prop_assert!((after - before).abs() <= HEART_RATE_MAX_STEP);
            }
        }
    }
}
