//! Test helpers shared by the integration tests

use std::path::Path;

use pi_monitoring::config::{Config, TelegramConfig};
use pi_monitoring::recorder::{Reading, append_record};

/// A TelegramConfig pointing at an arbitrary API base (usually a mock server)
pub fn telegram_config(api_base: &str, chat_ids: &[&str]) -> TelegramConfig {
    TelegramConfig {
        token: Some("test-token".to_string()),
        chat_ids: chat_ids.iter().map(|id| id.to_string()).collect(),
        api_base: api_base.to_string(),
    }
}

/// A full Config with the file paths redirected into a test directory
pub fn test_config(record_file: &Path, snapshot_file: &Path, thermal_zone: &Path) -> Config {
    Config {
        display: Some("Test Pi".to_string()),
        interface: "wlan0".to_string(),
        record_file: record_file.to_path_buf(),
        snapshot_file: snapshot_file.to_path_buf(),
        thermal_zone: thermal_zone.to_path_buf(),
        telegram: telegram_config("http://127.0.0.1:1", &["1"]),
    }
}

/// Append `count` recorder entries with distinct timestamps
pub fn write_record_entries(path: &Path, count: usize) {
    for i in 0..count {
        let reading = Reading {
            temperature: 20.0 + i as f64,
            humidity: 40.0 + i as f64,
        };
        let timestamp = format!("2026-08-04 12:{i:02}:00");
        append_record(path, &timestamp, &reading).unwrap();
    }
}
