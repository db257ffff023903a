use crate::runtime::config::RuntimeConfig;
use crate::runtime::console::open_console;
use crate::runtime::logging::init_tracing;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::process::ExitCode;
use std::sync::{atomic::AtomicBool, Arc};
use std::thread;
use std::time::Duration;
use tracing::{error, info, warn};
use vitals_core::{LoopConfig, SensorLoop, SimulatedSensors, SimulationConfig, ThreadDelay};

pub fn run_from_args() -> ExitCode {
    let config = match RuntimeConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("run with --help for usage");
            return ExitCode::from(2);
        }
    };
    if config.show_help {
        RuntimeConfig::print_help();
        return ExitCode::SUCCESS;
    }
    run(config)
}

pub fn run(config: RuntimeConfig) -> ExitCode {
    let _log_guard = init_tracing(config.json_logs);

    let mut console = match open_console(config.output.as_deref()) {
        Ok(console) => console,
        Err(e) => {
            error!(error = %e, path = ?config.output, "Failed to open console output");
            return ExitCode::FAILURE;
        }
    };

    let seed = config.seed.unwrap_or_else(rand::random);
    let io = SimulatedSensors::new(SimulationConfig {
        temperature_sensor_present: config.temperature_sensor_present,
        temperature_dropout: config.temperature_dropout,
        seed,
    });
    // Heart-rate walk draws from its own stream so sensor noise does not shift it.
    let rng = StdRng::seed_from_u64(seed.wrapping_add(1));
    let loop_config = LoopConfig {
        cycle_time: config.cycle_time,
        baud_rate: config.baud_rate,
        format: config.format,
    };

    info!(
        cycle_time_ms = loop_config.cycle_time.as_millis() as u64,
        baud_rate = loop_config.baud_rate,
        console_format = ?loop_config.format,
        seed,
        output = ?config.output,
        "Starting sensor loop"
    );
    if !config.temperature_sensor_present {
        warn!("Temperature sensor disabled; every temperature reading will print as 0");
    }

    let stop = Arc::new(AtomicBool::new(false));
    if let Some(seconds) = config.run_seconds {
        info!(seconds, "Running for limited duration");
        spawn_deadline(Arc::clone(&stop), Duration::from_secs(seconds));
    }

    let mut sensor_loop = SensorLoop::new(io, ThreadDelay, rng, loop_config);
    sensor_loop.run(&mut console, &stop, config.cycles);

    let stats = sensor_loop.stats();
    info!(
        cycles_executed = stats.cycles_executed,
        sentinel_substitutions = stats.sentinel_substitutions,
        output_failures = stats.output_failures,
        max_work_us = stats.max_work_us,
        final_heart_rate = sensor_loop.heart_rate().bpm(),
        uptime_ms = sensor_loop.uptime().as_millis() as u64,
        "Run complete"
    );
    ExitCode::SUCCESS
}

/// Raises `stop` once `after` has elapsed. Not joined: a cycle limit may end the run first.
fn spawn_deadline(stop: Arc<AtomicBool>, after: Duration) {
    thread::spawn(move || {
        thread::sleep(after);
        stop.store(true, std::sync::atomic::Ordering::Relaxed);
    });
}
