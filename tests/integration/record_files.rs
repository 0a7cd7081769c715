//! Recorder and log-tail behavior on real files

use assert_matches::assert_matches;
use pi_monitoring::logtail::LogTail;
use pretty_assertions::assert_eq;

use crate::helpers::write_record_entries;

#[test]
fn test_tail_of_seven_entries_is_the_last_five_raw_lines() {
    let dir = tempfile::tempdir().unwrap();
    let record_file = dir.path().join("record.txt");

    // 7 entries x 4 lines = 28 lines
    write_record_entries(&record_file, 7);

    let content = std::fs::read_to_string(&record_file).unwrap();
    let all_lines: Vec<String> = content.lines().map(str::to_string).collect();
    assert_eq!(all_lines.len(), 28);

    let tail = LogTail::read(&record_file);
    let LogTail::Lines(lines) = tail else {
        panic!("expected lines from an existing record file");
    };

    assert_eq!(lines, all_lines[23..].to_vec());
    assert_eq!(
        lines.last().map(String::as_str),
        Some("---"),
        "entry separator is the final line of a complete entry"
    );
}

#[test]
fn test_missing_and_unreadable_files_render_distinct_sentinels() {
    let dir = tempfile::tempdir().unwrap();

    let missing = LogTail::read(&dir.path().join("does-not-exist.txt"));
    assert_matches!(missing, LogTail::Missing);

    // reading a directory fails with something other than NotFound
    let unreadable = LogTail::read(dir.path());
    assert_matches!(unreadable, LogTail::Unreadable(_));

    assert_eq!(missing.render(), "❌ Log file not found");
    assert_eq!(unreadable.render(), "❓ Error reading log file");
}

#[test]
fn test_recorder_entries_survive_across_invocations() {
    let dir = tempfile::tempdir().unwrap();
    let record_file = dir.path().join("record.txt");

    write_record_entries(&record_file, 2);
    let after_two = std::fs::read_to_string(&record_file).unwrap();

    write_record_entries(&record_file, 1);
    let after_three = std::fs::read_to_string(&record_file).unwrap();

    assert!(
        after_three.starts_with(&after_two),
        "appending must never rewrite earlier entries"
    );
    assert_eq!(after_three.lines().count(), 12);
}
