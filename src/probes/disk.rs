//! Disk usage for the root mount from `df -h /`.

use super::{ProbeError, ProbeResult, run_command};

/// Usage percentage of the root filesystem.
pub fn root_usage_percent() -> ProbeResult<u8> {
    let output = run_command("df", &["-h", "/"])?;
    parse_df_output(&output)
}

fn parse_df_output(output: &str) -> ProbeResult<u8> {
    // row 1 is the header; row 2 carries the root mount,
    // with "Use%" as the 5th field
    let data_row = output
        .lines()
        .nth(1)
        .ok_or_else(|| ProbeError::Parse(String::from("missing data row")))?;

    let field = data_row
        .split_whitespace()
        .nth(4)
        .ok_or_else(|| ProbeError::Parse(String::from("missing usage field")))?;

    field
        .trim_end_matches('%')
        .parse()
        .map_err(|_| ProbeError::Parse(format!("bad usage field: {field:?}")))
}
