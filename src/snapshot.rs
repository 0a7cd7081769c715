//! Pre-reboot system snapshot.
//!
//! Overwrites one text file with four labeled sections so that the state of
//! the machine right before a reboot survives the reboot itself.

use std::path::Path;

use tracing::warn;

use crate::probes::run_command;

/// Capture uptime, disk usage, memory usage and the process list into
/// `path`, replacing any previous snapshot.
///
/// An unavailable command degrades its own section; only a failed write of
/// the snapshot file itself is an error.
pub fn save_system_snapshot(path: &Path) -> std::io::Result<()> {
    let uptime = section_output("uptime", &[]);
    let disk_usage = section_output("df", &["-h"]);
    let memory_usage = section_output("free", &["-h"]);
    let processes = section_output("ps", &["aux"]);

    let content = format!(
        "Uptime: {uptime}\n\
         Disk Usage:\n{disk_usage}\n\
         Memory Usage:\n{memory_usage}\n\
         Running Processes:\n{processes}\n"
    );

    std::fs::write(path, content)
}

fn section_output(program: &'static str, args: &[&str]) -> String {
    match run_command(program, args) {
        Ok(output) => output.trim().to_string(),
        Err(err) => {
            warn!("snapshot section '{program}' degraded: {err}");
            format!("unavailable ({err})")
        }
    }
}
