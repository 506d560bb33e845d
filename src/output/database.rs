//! SQLite table output with an operationally replaceable insert routine.
//!
//! SQLite has no stored procedures, so `sp<Table>_NewLog` is a view whose
//! `INSTEAD OF INSERT` trigger performs the real insert. Writers only ever insert
//! into the routine; operators can drop and recreate the trigger to reroute or
//! enrich rows without touching the application.

use super::Output;
use crate::entry::LogEntry;
use crate::internal;

use chrono::DateTime;
use rusqlite::types::Type;
use rusqlite::{Connection, TransactionBehavior, params};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_TABLE_NAME: &str = "Logs";

/// Longest name accepted for templating into DDL.
const MAX_TABLE_NAME_LEN: usize = 64;

/// Bootstrap and writers may overlap; wait for the lock instead of failing with `SQLITE_BUSY`.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Table names are spliced into DDL, so only plain identifiers are allowed.
///
/// # Errors
/// Returns `Error::InvalidTableName` for empty, overlong, or non-identifier names.
pub fn validate_table_name(name: &str) -> Result<(), crate::Error> {
    let mut chars = name.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    let valid_rest = chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

    if valid_start && valid_rest && name.len() <= MAX_TABLE_NAME_LEN {
        Ok(())
    } else {
        Err(crate::Error::InvalidTableName(name.to_string()))
    }
}

/// One connection per operation; no pooled handle outlives a call.
#[derive(Debug, Clone)]
pub struct DatabaseOutput {
    path: PathBuf,
    table: String,
}

impl DatabaseOutput {
    /// `connection` is a database file path; `~` is expanded.
    ///
    /// # Errors
    /// Returns `Error::InvalidTableName` if `table` is not a plain identifier.
    pub fn new(connection: impl AsRef<str>, table: impl Into<String>) -> Result<Self, crate::Error> {
        let table = table.into();
        validate_table_name(&table)?;
        Ok(Self {
            path: PathBuf::from(shellexpand::tilde(connection.as_ref()).as_ref()),
            table,
        })
    }

    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Name of the insert routine: `sp<Table>_NewLog`.
    #[must_use]
    pub fn procedure_name(&self) -> String {
        format!("sp{}_NewLog", self.table)
    }

    fn connect(&self) -> Result<Connection, crate::Error> {
        let conn = Connection::open(&self.path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(conn)
    }

    fn create_table_sql(&self) -> String {
        format!(
            r#"CREATE TABLE IF NOT EXISTS "{table}" (
    Id INTEGER PRIMARY KEY AUTOINCREMENT,
    Date TEXT NOT NULL,
    Message TEXT NOT NULL,
    Type VARCHAR(10) NOT NULL CHECK (length(Type) <= 10)
);"#,
            table = self.table
        )
    }

    fn create_procedure_sql(&self) -> String {
        format!(
            r#"CREATE VIEW IF NOT EXISTS "{proc}" AS
    SELECT Message, Date, Type, Id FROM "{table}" WHERE 0;
CREATE TRIGGER IF NOT EXISTS "{proc}_Insert"
INSTEAD OF INSERT ON "{proc}"
BEGIN
    INSERT INTO "{table}" (Message, Date, Type)
    VALUES (NEW.Message, NEW.Date, NEW.Type);
END;"#,
            proc = self.procedure_name(),
            table = self.table
        )
    }

    /// Creates the table and insert routine if absent. Idempotent.
    ///
    /// # Errors
    /// Connection or DDL failures.
    pub fn ensure_schema(&self) -> Result<(), crate::Error> {
        internal::debug(
            "DATABASE",
            &format!(
                "Ensuring table {} and routine {} in {}",
                self.table,
                self.procedure_name(),
                self.path.display()
            ),
        );
        let mut conn = self.connect()?;
        // IMMEDIATE: overlapping bootstraps queue on the busy timeout
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        tx.execute_batch(&self.create_table_sql())?;
        tx.execute_batch(&self.create_procedure_sql())?;
        tx.commit()?;
        Ok(())
    }

    /// Latest rows first, with database-assigned ids.
    ///
    /// # Errors
    /// Connection or query failures, or a stored `Date` that is not RFC 3339.
    pub fn recent(&self, limit: usize) -> Result<Vec<LogEntry>, crate::Error> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!(
            r#"SELECT Id, Date, Message, Type FROM "{}" ORDER BY Id DESC LIMIT ?1"#,
            self.table
        ))?;

        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let rows = stmt.query_map(params![limit], |row| {
            let id: i64 = row.get(0)?;
            let date: String = row.get(1)?;
            let date = DateTime::parse_from_rfc3339(&date)
                .map_err(|e| rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(e)))?;
            let message: String = row.get(2)?;
            let kind: String = row.get(3)?;
            Ok(LogEntry::at(date, message, kind).with_id(id))
        })?;

        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }
}

impl Output for DatabaseOutput {
    fn write(&self, entry: &LogEntry) -> Result<(), crate::Error> {
        internal::trace(
            "DATABASE",
            &format!("Inserting via {}", self.procedure_name()),
        );
        let conn = self.connect()?;
        conn.execute(
            &format!(
                r#"INSERT INTO "{}" (Message, Date, Type, Id) VALUES (?1, ?2, ?3, ?4)"#,
                self.procedure_name()
            ),
            params![
                entry.message(),
                entry.date().to_rfc3339(),
                entry.kind(),
                entry.id()
            ],
        )?;
        Ok(())
    }
}
