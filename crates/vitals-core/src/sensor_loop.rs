use crate::convert::{emg_millivolts, spo2_percent, temperature_or_sentinel};
use crate::hal::{Delay, SensorIO};
use crate::heart_rate::HeartRate;
use crate::reading::{ConsoleFormat, VitalsReading};
use log::{debug, info, warn};
use rand::Rng;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use thiserror::Error;

pub const DEFAULT_BAUD_RATE: u32 = 115_200;

#[derive(Clone, Debug)]
pub struct LoopConfig {
    pub cycle_time: Duration,
    /// Line rate of the console. Host consoles ignore it; kept for parity with the board.
    pub baud_rate: u32,
    pub format: ConsoleFormat,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            cycle_time: Duration::from_millis(500),
            baud_rate: DEFAULT_BAUD_RATE,
            format: ConsoleFormat::Text,
        }
    }
}

#[derive(Clone, Default, Debug)]
pub struct LoopStats {
    pub cycles_executed: u64,
    /// Temperature reads replaced by the sentinel.
    pub sentinel_substitutions: u64,
    pub output_failures: u64,
    /// Longest time spent reading and emitting, excluding the delay.
    pub max_work_us: u64,
}

#[derive(Debug, Error)]
pub enum LoopError {
    #[error("console write failed: {0}")]
    Output(#[from] std::io::Error),
}

/// Read, convert, print, sleep. The heart-rate walk is the only state carried
/// from one cycle to the next.
pub struct SensorLoop<IO: SensorIO, D: Delay, R: Rng> {
    io: IO,
    delay: D,
    rng: R,
    config: LoopConfig,
    heart_rate: HeartRate,
    stats: LoopStats,
    /// Reading timestamps count from here.
    started: Instant,
}

impl<IO: SensorIO, D: Delay, R: Rng> SensorLoop<IO, D, R> {
    pub fn new(io: IO, delay: D, rng: R, config: LoopConfig) -> Self {
        Self {
            io,
            delay,
            rng,
            config,
            heart_rate: HeartRate::new(),
            stats: LoopStats::default(),
            started: Instant::now(),
        }
    }

    pub fn initialize(&mut self) {
        self.io.begin();
        info!(
            "sensor loop ready: baud={} cycle={}ms format={:?} sensors_healthy={}",
            self.config.baud_rate,
            self.config.cycle_time.as_millis(),
            self.config.format,
            self.io.is_healthy()
        );
    }

    /// One full cycle, delay included. The delay runs even if the console write failed.
    pub fn cycle<W: Write + ?Sized>(&mut self, out: &mut W) -> Result<VitalsReading, LoopError> {
        let work_start = Instant::now();
        let timestamp_us = work_start.duration_since(self.started).as_micros() as u64;

        let raw_temp = self.io.read_temperature();
        if raw_temp.is_nan() {
            self.stats.sentinel_substitutions += 1;
            debug!("temperature read invalid, substituting sentinel");
        }
        let temperature = temperature_or_sentinel(raw_temp);

        let spo2 = spo2_percent(self.io.read_spo2_raw());
        let emg = emg_millivolts(self.io.read_emg_raw());
        let heart_rate = self.heart_rate.advance(&mut self.rng);

        let reading = VitalsReading {
            timestamp_us,
            temperature,
            spo2,
            emg,
            heart_rate,
        };

        let emitted = reading.write_to(self.config.format, out);
        self.stats.cycles_executed += 1;
        let work_us = work_start.elapsed().as_micros() as u64;
        self.stats.max_work_us = self.stats.max_work_us.max(work_us);

        self.delay.delay(self.config.cycle_time);

        emitted?;
        Ok(reading)
    }

    /// Runs `initialize` then cycles until `stop` is raised or `max_cycles` is reached.
    /// Console failures are counted and logged; the loop keeps going.
    pub fn run<W: Write + ?Sized>(&mut self, out: &mut W, stop: &AtomicBool, max_cycles: Option<u64>) {
        self.initialize();

        while !stop.load(Ordering::Relaxed) {
            if max_cycles.is_some_and(|max| self.stats.cycles_executed >= max) {
                break;
            }
            if let Err(e) = self.cycle(out) {
                self.stats.output_failures += 1;
                warn!("{e}");
            }
        }
    }

    pub fn heart_rate(&self) -> HeartRate {
        self.heart_rate
    }

    pub fn config(&self) -> &LoopConfig {
        &self.config
    }

    pub fn stats(&self) -> &LoopStats {
        &self.stats
    }

    pub fn uptime(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn io(&self) -> &IO {
        &self.io
    }
}
