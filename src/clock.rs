//! Time source for entry timestamps and daily file names.

use chrono::{DateTime, FixedOffset, Local, Utc};

/// Rotation depends on the calendar date; tests swap in their own clock to cross midnight.
pub trait Clock: Send + Sync {
    /// Current time, carrying the offset that file names and timestamps are rendered in.
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Wall clock in either the machine's local zone or UTC.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SystemClock {
    #[default]
    Local,
    Utc,
}

impl SystemClock {
    #[must_use]
    pub const fn from_utc_flag(use_utc: bool) -> Self {
        if use_utc { Self::Utc } else { Self::Local }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        match self {
            Self::Local => Local::now().fixed_offset(),
            Self::Utc => Utc::now().fixed_offset(),
        }
    }
}
