//! End-to-end report assembly on the host running the tests
//!
//! Whatever this machine looks like — wireless tools present or not, record
//! file there or not — the report must come out whole, with unavailable
//! probes degraded to their documented fallbacks.

use pi_monitoring::report::StatusReport;
use pi_monitoring::snapshot::save_system_snapshot;

use crate::helpers::{test_config, write_record_entries};

const FIELD_LABELS: [&str; 15] = [
    "🕒 Time:",
    "🌐 IP Address:",
    "📡 Wi-Fi SSID:",
    "📶 Wi-Fi Signal Strength:",
    "⏳ Uptime:",
    "🔥 CPU Temperature:",
    "💾 Disk Usage:",
    "📈 Memory Usage:",
    "⚙️ CPU Usage:",
    "🖥️ Active Processes:",
    "🌐 Network Traffic:",
    "📊 System Load:",
    "🖴 USB Devices:",
    "📜 Last 5 Log Entries:",
    "🔐 Last 5 Login Logs:",
];

#[test]
fn test_collect_always_renders_a_full_report() {
    let dir = tempfile::tempdir().unwrap();
    let record_file = dir.path().join("record.txt");
    let thermal_zone = dir.path().join("temp");
    std::fs::write(&thermal_zone, "43210\n").unwrap();
    write_record_entries(&record_file, 2);

    let config = test_config(&record_file, &dir.path().join("snapshot.txt"), &thermal_zone);
    let report = StatusReport::collect(&config);
    let rendered = report.render();

    for label in FIELD_LABELS {
        assert!(
            rendered.contains(label),
            "report is missing the field {label:?}:\n{rendered}"
        );
    }
}

#[test]
fn test_thermal_zone_file_feeds_the_temperature_field() {
    let dir = tempfile::tempdir().unwrap();
    let thermal_zone = dir.path().join("temp");
    std::fs::write(&thermal_zone, "43210\n").unwrap();

    let config = test_config(
        &dir.path().join("record.txt"),
        &dir.path().join("snapshot.txt"),
        &thermal_zone,
    );
    let rendered = StatusReport::collect(&config).render();

    assert!(rendered.contains("🔥 CPU Temperature: 43.21°C ❄️"));
}

#[test]
fn test_missing_record_file_degrades_only_the_log_section() {
    let dir = tempfile::tempdir().unwrap();
    let thermal_zone = dir.path().join("temp");
    std::fs::write(&thermal_zone, "43210\n").unwrap();

    let config = test_config(
        &dir.path().join("never-written.txt"),
        &dir.path().join("snapshot.txt"),
        &thermal_zone,
    );
    let rendered = StatusReport::collect(&config).render();

    assert!(rendered.contains("📜 Last 5 Log Entries:\n❌ Log file not found"));
    assert!(rendered.contains("🔥 CPU Temperature: 43.21°C ❄️"));
}

#[test]
fn test_snapshot_file_is_written_with_all_sections() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot_file = dir.path().join("pre_reboot_logs.txt");

    save_system_snapshot(&snapshot_file).unwrap();

    let content = std::fs::read_to_string(&snapshot_file).unwrap();
    for label in ["Uptime: ", "Disk Usage:", "Memory Usage:", "Running Processes:"] {
        assert!(content.contains(label), "snapshot is missing {label:?}");
    }
}
