//! Shared fixtures for integration tests.

#![allow(dead_code)]

use chrono::{DateTime, FixedOffset, TimeZone};
use scalog::{Clock, LogEntry};
use std::sync::{Arc, Mutex};

/// Clock the test moves by hand, e.g. across midnight.
#[derive(Clone)]
pub struct ManualClock(Arc<Mutex<DateTime<FixedOffset>>>);

impl ManualClock {
    pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> Self {
        Self(Arc::new(Mutex::new(datetime(y, m, d, h, min, s))))
    }

    pub fn set(&self, time: DateTime<FixedOffset>) {
        *self.0.lock().unwrap() = time;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<FixedOffset> {
        *self.0.lock().unwrap()
    }
}

pub fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(y, m, d, h, min, s)
        .unwrap()
}

/// Collects entries handed to an observer.
#[derive(Clone, Default)]
pub struct Captured(Arc<Mutex<Vec<LogEntry>>>);

impl Captured {
    pub fn listener(&self) -> impl Fn(&LogEntry) + Send + Sync + 'static {
        let store = Arc::clone(&self.0);
        move |entry: &LogEntry| store.lock().unwrap().push(entry.clone())
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.0.lock().unwrap().clone()
    }
}

/// Collects error messages handed to a failure handler.
#[derive(Clone, Default)]
pub struct Failures(Arc<Mutex<Vec<String>>>);

impl Failures {
    pub fn handler(&self) -> impl Fn(&scalog::Error) + Send + Sync + 'static {
        let store = Arc::clone(&self.0);
        move |error: &scalog::Error| store.lock().unwrap().push(error.to_string())
    }

    pub fn messages(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}
