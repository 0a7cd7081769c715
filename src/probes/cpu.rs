//! CPU probes: thermal-zone temperature, aggregate usage, load averages.

use std::fmt;
use std::path::Path;

use super::{ProbeError, ProbeResult, read_pseudo_file, run_command};

const LOADAVG: &str = "/proc/loadavg";

/// Thermal-zone reading in degrees Celsius.
///
/// The kernel exposes millidegrees as a bare integer; the zone path is
/// configurable because it varies between boards.
pub fn temperature(thermal_zone: &Path) -> ProbeResult<f64> {
    let raw = read_pseudo_file(thermal_zone)?;
    parse_millidegrees(&raw)
}

fn parse_millidegrees(raw: &str) -> ProbeResult<f64> {
    let millidegrees: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ProbeError::Parse(format!("not a millidegree counter: {:?}", raw.trim())))?;

    Ok(millidegrees as f64 / 1000.0)
}

/// Aggregate CPU usage percentage from the `top -bn1` summary line.
pub fn usage() -> ProbeResult<f64> {
    let output = run_command("top", &["-bn1"])?;
    parse_cpu_summary(&output)
}

fn parse_cpu_summary(output: &str) -> ProbeResult<f64> {
    for line in output.lines() {
        if !line.contains("Cpu(s)") {
            continue;
        }

        // "%Cpu(s):  3.2 us,  1.1 sy, ..." -> segment between ':' and the
        // first ',', with the "us" suffix stripped
        let after_colon = line
            .split(':')
            .nth(1)
            .ok_or_else(|| ProbeError::Parse(String::from("summary line has no ':'")))?;
        let segment = after_colon.split(',').next().unwrap_or_default();
        let value = segment.trim().trim_end_matches("us").trim();

        return value
            .parse()
            .map_err(|_| ProbeError::Parse(format!("bad cpu field: {value:?}")));
    }

    Err(ProbeError::Parse(String::from("no Cpu(s) summary line")))
}

/// The three load-average fields, kept verbatim to preserve the kernel's
/// own formatting precision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadAverage {
    pub one: String,
    pub five: String,
    pub fifteen: String,
}

impl fmt::Display for LoadAverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "1m: {}, 5m: {}, 15m: {}", self.one, self.five, self.fifteen)
    }
}

pub fn load_average() -> ProbeResult<LoadAverage> {
    let raw = read_pseudo_file(Path::new(LOADAVG))?;
    parse_load_average(&raw)
}

fn parse_load_average(raw: &str) -> ProbeResult<LoadAverage> {
    let mut fields = raw.split_whitespace();

    match (fields.next(), fields.next(), fields.next()) {
        (Some(one), Some(five), Some(fifteen)) => Ok(LoadAverage {
            one: one.to_string(),
            five: five.to_string(),
            fifteen: fifteen.to_string(),
        }),
        _ => Err(ProbeError::Parse(String::from(
            "fewer than three load fields",
        ))),
    }
}
