//! Tests for the SQLite destination and schema bootstrap.

mod common;

use common::{Failures, ManualClock, datetime};
use rusqlite::Connection;
use scalog::output::{Output, validate_table_name};
use scalog::{DatabaseOutput, Error, LogEntry, Logger};
use std::path::Path;
use tempfile::TempDir;

/// `(type, name)` of every user object in the database, sorted by name.
fn schema_objects(path: &Path) -> Vec<(String, String)> {
    let conn = Connection::open(path).unwrap();
    let mut stmt = conn
        .prepare("SELECT type, name FROM sqlite_master WHERE name NOT LIKE 'sqlite_%' ORDER BY name")
        .unwrap();
    stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap()
}

fn db_path(dir: &TempDir) -> String {
    dir.path().join("logs.db").to_string_lossy().into_owned()
}

#[test]
fn ensure_schema_creates_table_and_routine() {
    let tmp_dir = TempDir::new().unwrap();
    let db = DatabaseOutput::new(db_path(&tmp_dir), "Logs").unwrap();

    db.ensure_schema().unwrap();

    assert_eq!(db.procedure_name(), "spLogs_NewLog");
    assert_eq!(
        schema_objects(db.path()),
        vec![
            ("table".to_string(), "Logs".to_string()),
            ("view".to_string(), "spLogs_NewLog".to_string()),
            ("trigger".to_string(), "spLogs_NewLog_Insert".to_string()),
        ]
    );
}

#[test]
fn ensure_schema_is_idempotent() {
    let tmp_dir = TempDir::new().unwrap();
    let db = DatabaseOutput::new(db_path(&tmp_dir), "Logs").unwrap();

    db.ensure_schema().unwrap();
    let before = schema_objects(db.path());
    db.ensure_schema().unwrap();

    assert_eq!(schema_objects(db.path()), before);
}

#[test]
fn round_trip_through_insert_routine() {
    let tmp_dir = TempDir::new().unwrap();
    let db = DatabaseOutput::new(db_path(&tmp_dir), "Logs").unwrap();
    db.ensure_schema().unwrap();

    let entry = LogEntry::at(datetime(2026, 10, 19, 12, 30, 15), "started", "INFO");
    db.write(&entry).unwrap();

    let rows = db.recent(10).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id(), Some(1));
    assert_eq!(rows[0].message(), entry.message());
    assert_eq!(rows[0].kind(), entry.kind());
    assert_eq!(rows[0].date(), entry.date());
}

#[test]
fn recent_returns_newest_first() {
    let tmp_dir = TempDir::new().unwrap();
    let db = DatabaseOutput::new(db_path(&tmp_dir), "Logs").unwrap();
    db.ensure_schema().unwrap();

    for msg in ["a", "b", "c"] {
        db.write(&LogEntry::at(datetime(2026, 1, 1, 0, 0, 0), msg, "INFO"))
            .unwrap();
    }

    let messages: Vec<String> = db
        .recent(2)
        .unwrap()
        .iter()
        .map(|e| e.message().to_string())
        .collect();
    assert_eq!(messages, vec!["c", "b"]);
}

#[test]
fn type_longer_than_ten_characters_is_rejected() {
    let tmp_dir = TempDir::new().unwrap();
    let db = DatabaseOutput::new(db_path(&tmp_dir), "Logs").unwrap();
    db.ensure_schema().unwrap();

    let entry = LogEntry::at(datetime(2026, 1, 1, 0, 0, 0), "x", "WAYTOOLONGLABEL");
    assert!(matches!(db.write(&entry), Err(Error::Database(_))));
    assert!(db.recent(10).unwrap().is_empty());
}

#[test]
fn table_names_must_be_plain_identifiers() {
    assert!(validate_table_name("Logs").is_ok());
    assert!(validate_table_name("app_logs_2").is_ok());
    assert!(validate_table_name("_private").is_ok());
    assert!(validate_table_name("").is_err());
    assert!(validate_table_name("2fast").is_err());
    assert!(validate_table_name("Logs\"; DROP TABLE x; --").is_err());
    assert!(validate_table_name(&"x".repeat(65)).is_err());

    assert!(matches!(
        Logger::with_database("unused.db", "bad name"),
        Err(Error::InvalidTableName(_))
    ));
}

#[test]
fn always_write_to_database_creates_named_table_and_inserts() {
    let tmp_dir = TempDir::new().unwrap();
    let path = db_path(&tmp_dir);

    let logger = Logger::with_database(&path, "AppLogs").unwrap();
    logger.wait_for_schema().unwrap();
    logger.info("started");

    let names: Vec<String> = schema_objects(Path::new(&path))
        .into_iter()
        .map(|(_, name)| name)
        .collect();
    assert!(names.contains(&"AppLogs".to_string()));
    assert!(names.contains(&"spAppLogs_NewLog".to_string()));

    let rows = logger.database_output().unwrap().recent(10).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].message(), "started");
    assert_eq!(rows[0].kind(), "INFO");
}

#[test]
fn database_only_logger_does_not_create_log_directory() {
    let tmp_dir = TempDir::new().unwrap();
    let logs_dir = tmp_dir.path().join("Logs");

    let logger = Logger::builder()
        .file()
        .base_dir(logs_dir.to_string_lossy())
        .done()
        .database(db_path(&tmp_dir))
        .always(true)
        .done()
        .build()
        .unwrap();
    logger.wait_for_schema().unwrap();
    logger.error("boom");

    assert!(!logs_dir.exists());
    assert_eq!(logger.database_output().unwrap().recent(1).unwrap()[0].kind(), "ERROR");
}

/// Writes issued before the schema exists are lost silently; the failure channel
/// is the only trace. Waiting on the bootstrap (or running it up front) closes the gap.
#[test]
fn writes_before_bootstrap_are_dropped() {
    let tmp_dir = TempDir::new().unwrap();
    let failures = Failures::default();

    let logger = Logger::builder()
        .clock(ManualClock::at(2026, 10, 19, 8, 0, 0))
        .on_failure(failures.handler())
        .database(db_path(&tmp_dir))
        .always(true)
        .bootstrap(false)
        .done()
        .build()
        .unwrap();

    // Nothing to wait for when the bootstrap was skipped
    logger.wait_for_schema().unwrap();

    logger.info("too early");
    assert_eq!(failures.messages().len(), 1);
    assert!(failures.messages()[0].starts_with("database error"));

    logger.ensure_schema().unwrap();
    logger.info("on time");

    let rows = logger.database_output().unwrap().recent(10).unwrap();
    let messages: Vec<&str> = rows.iter().map(LogEntry::message).collect();
    assert_eq!(messages, vec!["on time"]);
}

#[test]
fn bootstrap_failure_is_reported_by_wait() {
    let tmp_dir = TempDir::new().unwrap();
    // SQLite does not create missing parent directories
    let unreachable = tmp_dir.path().join("missing").join("logs.db");
    let failures = Failures::default();
    let logger = Logger::builder()
        .on_failure(failures.handler())
        .database(unreachable.to_string_lossy())
        .always(true)
        .done()
        .build()
        .unwrap();

    let outcome = logger.wait_for_schema();
    assert!(matches!(outcome, Err(Error::Bootstrap(_))));
    // Same outcome on every call
    assert!(matches!(logger.wait_for_schema(), Err(Error::Bootstrap(_))));
    assert!(logger.bootstrap().unwrap().is_finished());
    assert_eq!(failures.messages().len(), 1);

    // Log calls still don't fail
    logger.info("lost");
}

#[test]
fn bootstrap_is_not_finished_until_schema_exists() {
    let tmp_dir = TempDir::new().unwrap();
    let path = db_path(&tmp_dir);
    let logger = Logger::builder()
        .database(&path)
        .always(true)
        .done()
        .build()
        .unwrap();
    let bootstrap = logger.bootstrap().unwrap();

    std::thread::scope(|scope| {
        // A concurrent waiter holds the join handle while we poll
        let waiter = scope.spawn(|| logger.wait_for_schema());
        while !bootstrap.is_finished() {
            std::thread::yield_now();
        }
        assert_eq!(schema_objects(Path::new(&path)).len(), 3);
        waiter.join().unwrap().unwrap();
    });

    assert!(bootstrap.is_finished());
}

#[test]
fn ensure_schema_without_database_is_an_error() {
    let logger = Logger::new();
    assert!(matches!(
        logger.ensure_schema(),
        Err(Error::DatabaseNotConfigured)
    ));
    assert!(logger.wait_for_schema().is_ok());
}
