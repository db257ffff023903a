use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use vitals_core::{ConsoleFormat, DEFAULT_BAUD_RATE};

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{flag} expects a value")]
    MissingValue { flag: &'static str },
    #[error("invalid value {value:?} for {flag}")]
    InvalidValue { flag: &'static str, value: String },
    #[error("unknown console format {0:?} (expected text or json)")]
    UnknownFormat(String),
    #[error("--temp-dropout must be between 0 and 1, got {0}")]
    DropoutOutOfRange(f64),
}

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub show_help: bool,
    pub cycle_time: Duration,
    pub baud_rate: u32,
    pub run_seconds: Option<u64>,
    pub cycles: Option<u64>,
    pub seed: Option<u64>,
    pub format: ConsoleFormat,
    pub output: Option<PathBuf>,
    pub temperature_sensor_present: bool,
    pub temperature_dropout: f64,
    pub json_logs: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            show_help: false,
            cycle_time: Duration::from_millis(500),
            baud_rate: DEFAULT_BAUD_RATE,
            run_seconds: None,
            cycles: None,
            seed: None,
            format: ConsoleFormat::Text,
            output: None,
            temperature_sensor_present: true,
            temperature_dropout: 0.0,
            json_logs: false,
        }
    }
}

fn value<'a>(args: &'a [String], i: &mut usize, flag: &'static str) -> Result<&'a str, ConfigError> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or(ConfigError::MissingValue { flag })
}

fn parsed<T: FromStr>(args: &[String], i: &mut usize, flag: &'static str) -> Result<T, ConfigError> {
    let raw = value(args, i, flag)?;
    raw.parse().map_err(|_| ConfigError::InvalidValue {
        flag,
        value: raw.to_string(),
    })
}

impl RuntimeConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let args: Vec<String> = std::env::args().collect();
        Self::from_args(&args)
    }

    pub fn from_args(args: &[String]) -> Result<Self, ConfigError> {
        let mut cfg = RuntimeConfig::default();
        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--cycle-ms" => {
                    cfg.cycle_time = Duration::from_millis(parsed(args, &mut i, "--cycle-ms")?);
                }
                "--baud" => {
                    cfg.baud_rate = parsed(args, &mut i, "--baud")?;
                }
                "--run-seconds" => {
                    cfg.run_seconds = Some(parsed(args, &mut i, "--run-seconds")?);
                }
                "--cycles" => {
                    cfg.cycles = Some(parsed(args, &mut i, "--cycles")?);
                }
                "--seed" => {
                    cfg.seed = Some(parsed(args, &mut i, "--seed")?);
                }
                "--format" => {
                    let raw = value(args, &mut i, "--format")?;
                    cfg.format = raw.parse().map_err(ConfigError::UnknownFormat)?;
                }
                "--output" => {
                    cfg.output = Some(PathBuf::from(value(args, &mut i, "--output")?));
                }
                "--no-temp-sensor" => {
                    cfg.temperature_sensor_present = false;
                }
                "--temp-dropout" => {
                    let p: f64 = parsed(args, &mut i, "--temp-dropout")?;
                    if !(0.0..=1.0).contains(&p) {
                        return Err(ConfigError::DropoutOutOfRange(p));
                    }
                    cfg.temperature_dropout = p;
                }
                "--json-logs" => {
                    cfg.json_logs = true;
                }
                "--help" | "-h" => {
                    cfg.show_help = true;
                    break;
                }
                _ => {}
            }
            i += 1;
        }
        Ok(cfg)
    }

    pub fn print_help() {
        println!(
            r#"vitals-monitor - polls body sensors and prints readings to the console

USAGE:
    vitals-monitor [OPTIONS]

OPTIONS:
    --cycle-ms <MS>         Delay at the end of each cycle [default: 500]
    --baud <RATE>           Console line rate [default: 115200]
    --run-seconds <SECS>    Run for a fixed duration then exit
    --cycles <N>            Run a fixed number of cycles then exit
    --seed <N>              Seed for the simulated sensors and heart-rate walk
    --format <FMT>          Console format (text|json) [default: text]
    --output <PATH>         Append console records to a file instead of stdout
    --no-temp-sensor        Simulate an unplugged temperature sensor
    --temp-dropout <P>      Probability (0..1) that a temperature read fails
    --json-logs             Output logs in JSON format
    -h, --help              Print this help message

ENVIRONMENT VARIABLES:
    RUST_LOG                Set log filter (e.g., RUST_LOG=debug,vitals_core=trace)

Logs go to stderr; stdout carries only the sensor records.

EXAMPLES:
    # Run forever at the board's cadence
    vitals-monitor

    # Ten quick cycles as JSON
    vitals-monitor --cycles 10 --cycle-ms 0 --format json
"#
        );
    }
}
