//! Unit conversions applied to raw peripheral readings.

/// Full-scale value of the 10-bit ADC.
pub const ADC_MAX: i32 = 1023;

pub const SPO2_MIN_PERCENT: i32 = 90;
pub const SPO2_MAX_PERCENT: i32 = 100;

/// ADC reference voltage in millivolts.
pub const EMG_FULL_SCALE_MV: f64 = 3300.0;

/// Substituted for a temperature read that came back NaN. A genuine 0 °C
/// reading looks the same downstream.
pub const TEMPERATURE_SENTINEL_C: f32 = 0.0;

/// Returns the reading unchanged, or the sentinel when it is NaN.
pub fn temperature_or_sentinel(raw_c: f32) -> f32 {
    if raw_c.is_nan() {
        TEMPERATURE_SENTINEL_C
    } else {
        raw_c
    }
}

/// Integer linear rescale with truncating division, the same arithmetic as
/// the Arduino `map()` helper. Inputs outside the source range are not clamped.
/// A degenerate source range maps everything to `out_min`.
pub fn map_range(x: i64, in_min: i64, in_max: i64, out_min: i64, out_max: i64) -> i64 {
    if in_max == in_min {
        return out_min;
    }
    (x - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// Blood-oxygen proxy: raw 0..=1023 onto 90..=100 %.
pub fn spo2_percent(raw: i32) -> f32 {
    map_range(
        i64::from(raw),
        0,
        i64::from(ADC_MAX),
        i64::from(SPO2_MIN_PERCENT),
        i64::from(SPO2_MAX_PERCENT),
    ) as f32
}

/// Muscle-signal proxy: raw 0..=1023 onto 0..=3300 mV, never negative.
/// Computed in double precision; the value is printed to three decimals.
pub fn emg_millivolts(raw: i32) -> f64 {
    let mv = f64::from(raw) * EMG_FULL_SCALE_MV / f64::from(ADC_MAX);
    if mv < 0.0 {
        0.0
    } else {
        mv
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_temperature_becomes_zero() {
        assert_eq!(temperature_or_sentinel(f32::NAN), 0.0);
    }

    #[test]
    fn valid_temperature_passes_through() {
        assert_eq!(temperature_or_sentinel(36.5), 36.5);
        assert_eq!(temperature_or_sentinel(-4.0), -4.0);
    }

    #[test]
    fn spo2_endpoints() {
        assert_eq!(spo2_percent(0), 90.0);
        assert_eq!(spo2_percent(1023), 100.0);
    }

    #[test]
    fn spo2_truncates_like_integer_map() {
        // 511 * 10 / 1023 = 4.995..., truncated to 4
        assert_eq!(spo2_percent(511), 94.0);
        assert_eq!(spo2_percent(512), 95.0);
    }

    #[test]
    fn emg_endpoints() {
        assert_eq!(format!("{:.3}", emg_millivolts(1023)), "3300.000");
        assert_eq!(format!("{:.3}", emg_millivolts(0)), "0.000");
    }

    #[test]
    fn emg_interior_values_keep_third_decimal() {
        assert_eq!(format!("{:.3}", emg_millivolts(638)), "2058.065");
        assert_eq!(format!("{:.3}", emg_millivolts(664)), "2141.935");
        assert_eq!(format!("{:.3}", emg_millivolts(669)), "2158.065");
    }

    #[test]
    fn emg_negative_raw_clamps() {
        assert_eq!(emg_millivolts(-17), 0.0);
    }

    #[test]
    fn map_range_degenerate_source() {
        assert_eq!(map_range(5, 3, 3, 90, 100), 90);
    }
}
