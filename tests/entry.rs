//! Tests for entry construction, rendering, and absent values.

mod common;

use common::{ManualClock, datetime};
use scalog::{LogEntry, Loggable};
use serde_json::{Value, json};

#[test]
fn render_uses_default_timestamp_pattern() {
    let entry = LogEntry::at(datetime(2026, 3, 7, 15, 4, 5), "disk full", "ERROR");
    assert_eq!(entry.to_string(), "[3/7/2026 3:04:05 PM] ERROR - disk full");
}

#[test]
fn render_with_custom_pattern() {
    let entry = LogEntry::at(datetime(2026, 3, 7, 9, 0, 0), "started", "INFO");
    assert_eq!(
        entry.render("%Y-%m-%d %H:%M:%S"),
        "[2026-03-07 09:00:00] INFO - started"
    );
}

#[test]
fn json_has_database_field_names() {
    let entry = LogEntry::at(datetime(2026, 3, 7, 9, 0, 0), "started", "INFO");
    let value: Value = serde_json::from_str(&entry.to_json().unwrap()).unwrap();

    assert_eq!(value["Id"], Value::Null);
    assert_eq!(value["Message"], "started");
    assert_eq!(value["Type"], "INFO");
    let date = chrono::DateTime::parse_from_rfc3339(value["Date"].as_str().unwrap()).unwrap();
    assert_eq!(date, datetime(2026, 3, 7, 9, 0, 0));
}

#[test]
fn json_line_parses_back() {
    let entry = LogEntry::at(datetime(2026, 3, 7, 9, 0, 0), "a \"quoted\" msg", "AUDIT").with_id(7);
    let parsed: LogEntry = serde_json::from_str(&entry.to_json().unwrap()).unwrap();
    assert_eq!(parsed, entry);
}

#[test]
fn capture_stamps_with_clock() {
    let clock = ManualClock::at(2026, 10, 19, 8, 30, 0);
    let entry = LogEntry::capture("hello", "INFO", &clock).unwrap();
    assert_eq!(entry.date(), datetime(2026, 10, 19, 8, 30, 0));
    assert_eq!(entry.id(), None);
    assert_eq!(entry.kind(), "INFO");
}

#[test]
fn capture_drops_absent_values() {
    let clock = ManualClock::at(2026, 10, 19, 8, 30, 0);
    assert!(LogEntry::capture(&None::<&str>, "INFO", &clock).is_none());
    assert!(LogEntry::capture(&Value::Null, "INFO", &clock).is_none());
    assert!(LogEntry::capture(&Some(None::<String>), "INFO", &clock).is_none());
}

#[test]
fn empty_message_is_still_an_entry() {
    let clock = ManualClock::at(2026, 10, 19, 8, 30, 0);
    let entry = LogEntry::capture("", "INFO", &clock).unwrap();
    assert_eq!(entry.message(), "");
}

#[test]
fn loggable_values_render_as_text() {
    assert_eq!(42_u32.to_message().as_deref(), Some("42"));
    assert_eq!(true.to_message().as_deref(), Some("true"));
    assert_eq!(Some("x").to_message().as_deref(), Some("x"));
    assert_eq!(format_args!("{}-{}", 1, 2).to_message().as_deref(), Some("1-2"));
    assert_eq!(json!("plain").to_message().as_deref(), Some("plain"));
    assert_eq!(
        json!({"code": 5}).to_message().as_deref(),
        Some(r#"{"code":5}"#)
    );
}
