//! Bounded tail of the externally-appended record file.
//!
//! The file is owned by the recorder; this reader takes a fresh whole-file
//! snapshot on every invocation and keeps no offset between runs. A missing
//! file and an unreadable file are distinct conditions and render distinct
//! sentinels.

use std::io;
use std::path::Path;

/// How many trailing lines the status report shows.
pub const TAIL_LINES: usize = 5;

#[derive(Debug)]
pub enum LogTail {
    /// The last ≤ [`TAIL_LINES`] raw lines, content and order preserved
    Lines(Vec<String>),

    /// The record file does not exist (the recorder has not run yet)
    Missing,

    /// The file exists but could not be read
    Unreadable(io::Error),
}

impl LogTail {
    pub fn read(path: &Path) -> LogTail {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let lines: Vec<String> = content.lines().map(str::to_string).collect();
                let skip = lines.len().saturating_sub(TAIL_LINES);
                LogTail::Lines(lines[skip..].to_vec())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => LogTail::Missing,
            Err(err) => LogTail::Unreadable(err),
        }
    }

    pub fn render(&self) -> String {
        match self {
            LogTail::Lines(lines) if lines.is_empty() => String::from("No log data found"),
            LogTail::Lines(lines) => lines.join("\n"),
            LogTail::Missing => String::from("❌ Log file not found"),
            LogTail::Unreadable(_) => String::from("❓ Error reading log file"),
        }
    }
}
