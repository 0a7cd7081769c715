//! Record-file appender.
//!
//! Writes one fixed 4-line entry per invocation to the append-only record
//! file that the status report tails. Readings are simulated until real
//! sensors are wired up.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub temperature: f64,
    pub humidity: f64,
}

/// Simulated temperature (20–30 °C) and humidity (40–60 %) readings,
/// rounded to two decimals.
pub fn simulated_reading() -> Reading {
    let mut rng = rand::rng();

    Reading {
        temperature: round2(rng.random_range(20.0..=30.0)),
        humidity: round2(rng.random_range(40.0..=60.0)),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Append one entry: `Time:`, `Temperature:`, `Humidity:`, and the `---`
/// separator, each on its own line.
pub fn append_record(path: &Path, timestamp: &str, reading: &Reading) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;

    writeln!(file, "Time: {timestamp}")?;
    writeln!(file, "Temperature: {}°C", reading.temperature)?;
    writeln!(file, "Humidity: {}%", reading.humidity)?;
    writeln!(file, "---")?;

    Ok(())
}
