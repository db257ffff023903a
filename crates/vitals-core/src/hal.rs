use std::time::Duration;

/// Peripheral wiring of the vitals board: a DHT-class temperature sensor on a
/// digital line and two analog channels sampled by a 10-bit ADC.
pub trait SensorIO: Send {
    /// Prepare the sensor driver. Absent hardware is not reported here; reads
    /// from it simply come back invalid.
    fn begin(&mut self);
    /// Degrees Celsius, or NaN when the sensor did not answer.
    fn read_temperature(&mut self) -> f32;
    /// Raw blood-oxygen proxy, nominally 0..=1023.
    fn read_spo2_raw(&mut self) -> i32;
    /// Raw muscle-signal proxy, nominally 0..=1023.
    fn read_emg_raw(&mut self) -> i32;
    fn is_healthy(&self) -> bool;
}

/// Blocking suspension between cycles.
pub trait Delay {
    fn delay(&mut self, duration: Duration);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadDelay;

impl Delay for ThreadDelay {
    fn delay(&mut self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}
