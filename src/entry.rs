//! The immutable record behind every log call, and the values that can produce one.

use crate::clock::Clock;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Matches the short date/time pattern `[10/19/2026 3:04:05 PM]` used in plain-text files.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y %-I:%M:%S %p";

/// One logged record. Field names on the wire match the database columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LogEntry {
    /// Only a database assigns this; entries built by the logger carry `None`.
    id: Option<i64>,
    date: DateTime<FixedOffset>,
    message: String,
    #[serde(rename = "Type")]
    kind: String,
}

impl LogEntry {
    /// Stamps the entry with `clock` once; the timestamp never changes afterwards.
    pub fn new(message: impl Into<String>, kind: impl Into<String>, clock: &dyn Clock) -> Self {
        Self::at(clock.now(), message, kind)
    }

    /// Builds an entry for an explicit timestamp (rows read back from a table, replayed files).
    pub fn at(
        date: DateTime<FixedOffset>,
        message: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            date,
            message: message.into(),
            kind: kind.into(),
        }
    }

    /// Absent values never become entries; `None` here means "drop the call".
    pub fn capture(value: &(impl Loggable + ?Sized), kind: &str, clock: &dyn Clock) -> Option<Self> {
        value
            .to_message()
            .map(|message| Self::new(message, kind, clock))
    }

    #[must_use]
    pub const fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub const fn id(&self) -> Option<i64> {
        self.id
    }

    #[must_use]
    pub const fn date(&self) -> DateTime<FixedOffset> {
        self.date
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Severity label, e.g. `INFO` or a caller-chosen `AUDIT`.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// `[<timestamp>] <TYPE> - <message>` with a caller-chosen strftime pattern.
    #[must_use]
    pub fn render(&self, timestamp_format: &str) -> String {
        format!(
            "[{}] {} - {}",
            self.date.format(timestamp_format),
            self.kind,
            self.message
        )
    }

    /// One-line JSON object with `Id`, `Date`, `Message`, `Type`.
    ///
    /// # Errors
    /// Returns `Error::Format` if serialization fails.
    pub fn to_json(&self) -> Result<String, crate::Error> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_TIMESTAMP_FORMAT))
    }
}

/// Anything a caller may hand to `info`/`error`. Returning `None` marks the value as
/// absent, which turns the whole call into a no-op.
pub trait Loggable {
    fn to_message(&self) -> Option<String>;
}

impl Loggable for str {
    fn to_message(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl Loggable for String {
    fn to_message(&self) -> Option<String> {
        Some(self.clone())
    }
}

impl Loggable for Cow<'_, str> {
    fn to_message(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl Loggable for fmt::Arguments<'_> {
    fn to_message(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl<T: Loggable + ?Sized> Loggable for &T {
    fn to_message(&self) -> Option<String> {
        (**self).to_message()
    }
}

impl<T: Loggable + ?Sized> Loggable for Box<T> {
    fn to_message(&self) -> Option<String> {
        (**self).to_message()
    }
}

impl<T: Loggable> Loggable for Option<T> {
    fn to_message(&self) -> Option<String> {
        self.as_ref().and_then(Loggable::to_message)
    }
}

/// JSON payloads log their compact form; `null` is absent and strings log unquoted.
impl Loggable for serde_json::Value {
    fn to_message(&self) -> Option<String> {
        match self {
            Self::Null => None,
            Self::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

macro_rules! loggable_via_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Loggable for $ty {
                fn to_message(&self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    };
}

loggable_via_display!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);
