//! Host-level probes: uptime, process count, USB devices, login history.

use std::path::Path;

use super::{ProbeError, ProbeResult, read_pseudo_file, run_command};

const UPTIME: &str = "/proc/uptime";

/// Seconds since boot, formatted as `H h M m S s`.
pub fn uptime() -> ProbeResult<String> {
    let raw = read_pseudo_file(Path::new(UPTIME))?;
    parse_uptime(&raw)
}

fn parse_uptime(raw: &str) -> ProbeResult<String> {
    let seconds: f64 = raw
        .split_whitespace()
        .next()
        .ok_or_else(|| ProbeError::Parse(String::from("empty uptime counter")))?
        .parse()
        .map_err(|_| ProbeError::Parse(format!("bad uptime counter: {:?}", raw.trim())))?;

    Ok(format_duration(seconds))
}

/// Floor division into hour/minute/second components, no rounding.
pub fn format_duration(total_seconds: f64) -> String {
    let total = total_seconds as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    format!("{hours}h {minutes}m {seconds}s")
}

/// Number of active processes: `ps -e` line count minus the header.
pub fn active_processes() -> ProbeResult<usize> {
    let output = run_command("ps", &["-e"])?;
    parse_process_count(&output)
}

fn parse_process_count(output: &str) -> ProbeResult<usize> {
    let lines = output.trim().lines().count();

    if lines == 0 {
        return Err(ProbeError::Parse(String::from("empty process table")));
    }

    Ok(lines - 1)
}

/// Raw `lsusb` listing.
pub fn usb_devices() -> ProbeResult<String> {
    let output = run_command("lsusb", &[])?;
    Ok(output.trim().to_string())
}

/// Last five login records via `last -n 5`; the command itself bounds the
/// output, no further truncation here.
pub fn login_history() -> ProbeResult<String> {
    let output = run_command("last", &["-n", "5"])?;
    Ok(output.trim().to_string())
}
