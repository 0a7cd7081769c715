//! Metric probes.
//!
//! Each probe reads one OS-level source — a pseudo-file under `/proc` or
//! `/sys`, or the captured output of a system command — and returns a typed
//! value. The live read is separated from a pure parse function over `&str`
//! so parsing can be tested against captured sample outputs instead of live
//! system state.
//!
//! Probes never panic and never abort the report: every underlying failure
//! (missing file, failed spawn, non-zero exit, parse error, empty output)
//! becomes a [`ProbeError`] that the report folds into a degraded field.

pub mod cpu;
pub mod disk;
pub mod memory;
pub mod net;
pub mod system;

use std::fmt;
use std::path::Path;
use std::process::Command;

/// Result type alias for probe operations
pub type ProbeResult<T> = Result<T, ProbeError>;

/// Why a probe could not produce a value
#[derive(Debug)]
pub enum ProbeError {
    /// Reading a pseudo-file failed
    Io(std::io::Error),

    /// A command could not be spawned or exited non-zero
    Command {
        program: &'static str,
        detail: String,
    },

    /// Output did not have the expected shape
    Parse(String),
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeError::Io(err) => write!(f, "I/O error: {}", err),
            ProbeError::Command { program, detail } => {
                write!(f, "command '{}' failed: {}", program, detail)
            }
            ProbeError::Parse(msg) => write!(f, "unexpected output shape: {}", msg),
        }
    }
}

impl std::error::Error for ProbeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProbeError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ProbeError {
    fn from(err: std::io::Error) -> Self {
        ProbeError::Io(err)
    }
}

/// Capture a command's stdout as text.
///
/// A failed spawn or a non-zero exit status counts as a probe failure; the
/// caller never sees half-parsed output from a tool that bailed out.
pub(crate) fn run_command(program: &'static str, args: &[&str]) -> ProbeResult<String> {
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|err| ProbeError::Command {
            program,
            detail: err.to_string(),
        })?;

    if !output.status.success() {
        return Err(ProbeError::Command {
            program,
            detail: format!("exited with {}", output.status),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

pub(crate) fn read_pseudo_file(path: &Path) -> ProbeResult<String> {
    Ok(std::fs::read_to_string(path)?)
}
