use crate::convert::ADC_MAX;
use crate::hal::SensorIO;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    /// When false every temperature read is NaN, like an unplugged DHT11.
    pub temperature_sensor_present: bool,
    /// Probability that a single temperature read fails.
    pub temperature_dropout: f64,
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            temperature_sensor_present: true,
            temperature_dropout: 0.0,
            seed: 0,
        }
    }
}

/// Simulated wearable: skin temperature drift plus two noisy ADC channels.
#[derive(Debug, Clone)]
pub struct SimulatedSensors {
    config: SimulationConfig,
    rng: StdRng,
    started: bool,

    temperature_c: f32,
    ambient_temp: f32,
    temp_noise: f32,

    spo2_raw: i32,
    spo2_drift: i32,

    emg_baseline: i32,
    emg_burst_chance: f64,
}

impl SimulatedSensors {
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            rng: StdRng::seed_from_u64(config.seed),
            config,
            started: false,
            temperature_c: 36.6,
            ambient_temp: 36.6,
            temp_noise: 0.05,
            spo2_raw: 870,
            spo2_drift: 12,
            emg_baseline: 40,
            emg_burst_chance: 0.1,
        }
    }
}

impl Default for SimulatedSensors {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}

impl SensorIO for SimulatedSensors {
    fn begin(&mut self) {
        self.started = true;
    }

    fn read_temperature(&mut self) -> f32 {
        if !self.started || !self.config.temperature_sensor_present {
            return f32::NAN;
        }
        if self.config.temperature_dropout > 0.0
            && self.rng.gen_bool(self.config.temperature_dropout.clamp(0.0, 1.0))
        {
            return f32::NAN;
        }

        // Relax toward ambient with a little jitter.
        let noise = self.rng.gen_range(-self.temp_noise..=self.temp_noise);
        self.temperature_c += 0.1 * (self.ambient_temp - self.temperature_c) + noise;
        self.temperature_c
    }

    fn read_spo2_raw(&mut self) -> i32 {
        let step = self.rng.gen_range(-self.spo2_drift..=self.spo2_drift);
        self.spo2_raw = (self.spo2_raw + step).clamp(0, ADC_MAX);
        self.spo2_raw
    }

    fn read_emg_raw(&mut self) -> i32 {
        let noise = self.rng.gen_range(0..=self.emg_baseline);
        let burst = if self.rng.gen_bool(self.emg_burst_chance) {
            self.rng.gen_range(200..=ADC_MAX)
        } else {
            0
        };
        (noise + burst).min(ADC_MAX)
    }

    fn is_healthy(&self) -> bool {
        self.started && self.config.temperature_sensor_present
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(config: SimulationConfig) -> SimulatedSensors {
        let mut sim = SimulatedSensors::new(config);
        sim.begin();
        sim
    }

    #[test]
    fn reads_are_nan_before_begin() {
        let mut sim = SimulatedSensors::default();
        assert!(sim.read_temperature().is_nan());
        assert!(!sim.is_healthy());
    }

    #[test]
    fn raw_channels_stay_in_adc_range() {
        let mut sim = started(SimulationConfig::default());
        for _ in 0..2_000 {
            assert!((0..=ADC_MAX).contains(&sim.read_spo2_raw()));
            assert!((0..=ADC_MAX).contains(&sim.read_emg_raw()));
        }
    }

    #[test]
    fn temperature_stays_plausible() {
        let mut sim = started(SimulationConfig::default());
        for _ in 0..2_000 {
            let t = sim.read_temperature();
            assert!((35.0..=38.5).contains(&t), "t = {t}");
        }
    }

    #[test]
    fn absent_sensor_always_nan() {
        let mut sim = started(SimulationConfig {
            temperature_sensor_present: false,
            ..Default::default()
        });
        assert!(!sim.is_healthy());
        assert!((0..50).all(|_| sim.read_temperature().is_nan()));
    }

    #[test]
    fn full_dropout_always_nan() {
        let mut sim = started(SimulationConfig {
            temperature_dropout: 1.0,
            ..Default::default()
        });
        assert!(sim.is_healthy());
        assert!((0..50).all(|_| sim.read_temperature().is_nan()));
    }

    #[test]
    fn same_seed_same_stream() {
        let config = SimulationConfig {
            seed: 9,
            ..Default::default()
        };
        let mut a = started(config);
        let mut b = started(config);
        for _ in 0..100 {
            assert_eq!(a.read_spo2_raw(), b.read_spo2_raw());
            assert_eq!(a.read_emg_raw(), b.read_emg_raw());
        }
    }
}
