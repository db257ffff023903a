pub mod convert;
mod convert_proptest;
pub mod hal;
#[cfg(feature = "simulation")]
pub mod hal_sim;
pub mod heart_rate;
pub mod reading;
pub mod sensor_loop;
pub mod tags;

pub use convert::{emg_millivolts, spo2_percent, temperature_or_sentinel};
pub use hal::{Delay, SensorIO, ThreadDelay};
#[cfg(feature = "simulation")]
pub use hal_sim::{SimulatedSensors, SimulationConfig};
pub use heart_rate::HeartRate;
pub use reading::{ConsoleFormat, VitalsReading};
pub use sensor_loop::{LoopConfig, LoopError, LoopStats, SensorLoop, DEFAULT_BAUD_RATE};
