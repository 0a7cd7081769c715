//! Network identity and traffic probes: local IP, wireless association,
//! link quality, and per-interface byte counters.

use std::fmt;
use std::path::Path;

use regex::Regex;

use super::{ProbeError, ProbeResult, read_pseudo_file, run_command};

const NET_DEV: &str = "/proc/net/dev";

const BYTES_PER_MIB: f64 = 1_048_576.0;

/// First local address reported by `hostname -I`.
pub fn ip_address() -> ProbeResult<String> {
    let output = run_command("hostname", &["-I"])?;
    parse_first_address(&output)
}

fn parse_first_address(output: &str) -> ProbeResult<String> {
    output
        .split_whitespace()
        .next()
        .map(str::to_string)
        .ok_or_else(|| ProbeError::Parse(String::from("no addresses reported")))
}

/// Active wireless association name via `iwgetid -r`.
///
/// An empty (but successful) answer means the interface is up without an
/// association and maps to a "not connected" sentinel rather than a failure.
pub fn wifi_ssid() -> ProbeResult<String> {
    let output = run_command("iwgetid", &["-r"])?;
    let ssid = output.trim();

    if ssid.is_empty() {
        return Ok(String::from("📡 Not connected to Wi-Fi"));
    }

    Ok(ssid.to_string())
}

/// Link quality for the monitored interface as a percentage.
///
/// `iwconfig` reports `Link Quality=<a>/<b>`; the probe computes `100*a/b`.
/// A missing token is reported as 0.0, not as a failure.
pub fn wifi_signal(interface: &str) -> ProbeResult<f64> {
    let output = run_command("iwconfig", &[interface])?;
    parse_link_quality(&output)
}

fn parse_link_quality(output: &str) -> ProbeResult<f64> {
    let pattern = Regex::new(r"Quality=(\d+)/(\d+)")
        .map_err(|err| ProbeError::Parse(err.to_string()))?;

    let Some(captures) = pattern.captures(output) else {
        return Ok(0.0);
    };

    let numerator: f64 = captures[1]
        .parse()
        .map_err(|_| ProbeError::Parse(format!("bad quality numerator: {}", &captures[1])))?;
    let denominator: f64 = captures[2]
        .parse()
        .map_err(|_| ProbeError::Parse(format!("bad quality denominator: {}", &captures[2])))?;

    if denominator == 0.0 {
        return Ok(0.0);
    }

    Ok(numerator / denominator * 100.0)
}

/// Cumulative received/transmitted bytes for one interface, in MiB.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterfaceTraffic {
    pub received_mb: f64,
    pub transmitted_mb: f64,
}

impl fmt::Display for InterfaceTraffic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "⬇️ {:.2} MB, ⬆️ {:.2} MB",
            self.received_mb, self.transmitted_mb
        )
    }
}

/// Byte counters for the monitored interface from `/proc/net/dev`.
pub fn interface_traffic(interface: &str) -> ProbeResult<InterfaceTraffic> {
    let table = read_pseudo_file(Path::new(NET_DEV))?;
    parse_interface_traffic(&table, interface)
}

fn parse_interface_traffic(table: &str, interface: &str) -> ProbeResult<InterfaceTraffic> {
    for line in table.lines() {
        if !line.contains(interface) {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        // field 1 is cumulative RX bytes, field 9 cumulative TX bytes
        let received: u64 = counter_field(&fields, 1)?;
        let transmitted: u64 = counter_field(&fields, 9)?;

        return Ok(InterfaceTraffic {
            received_mb: received as f64 / BYTES_PER_MIB,
            transmitted_mb: transmitted as f64 / BYTES_PER_MIB,
        });
    }

    Err(ProbeError::Parse(format!("no row for interface {interface}")))
}

fn counter_field(fields: &[&str], index: usize) -> ProbeResult<u64> {
    fields
        .get(index)
        .and_then(|field| field.parse().ok())
        .ok_or_else(|| ProbeError::Parse(format!("missing counter field {index}")))
}
