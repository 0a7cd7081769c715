//! Memory usage from `/proc/meminfo`.

use std::path::Path;

use super::{ProbeError, ProbeResult, read_pseudo_file};

const MEMINFO: &str = "/proc/meminfo";

/// Memory usage percentage: `100 * (MemTotal - MemAvailable) / MemTotal`.
pub fn usage_percent() -> ProbeResult<f64> {
    let raw = read_pseudo_file(Path::new(MEMINFO))?;
    parse_meminfo(&raw)
}

fn parse_meminfo(raw: &str) -> ProbeResult<f64> {
    let lines: Vec<&str> = raw.lines().collect();

    // the kernel's ordering is fixed: MemTotal first, MemAvailable third
    let total_kb = kb_field(lines.first().copied(), "MemTotal")?;
    let available_kb = kb_field(lines.get(2).copied(), "MemAvailable")?;

    if total_kb == 0.0 {
        return Err(ProbeError::Parse(String::from("zero total memory")));
    }

    let used_kb = total_kb - available_kb;
    Ok(used_kb / total_kb * 100.0)
}

fn kb_field(line: Option<&str>, label: &str) -> ProbeResult<f64> {
    line.and_then(|line| line.split_whitespace().nth(1))
        .and_then(|value| value.parse().ok())
        .ok_or_else(|| ProbeError::Parse(format!("missing {label} row")))
}
