#![forbid(unsafe_code)]

//! `scalog` - best-effort application logger.
//!
//! Each entry goes either to a daily file (`<M>-<D>-<Y>.log` or `.json`) or to a
//! SQLite table through an insert routine named `sp<Table>_NewLog`. The choice is
//! made per write: database when forced, or when a connection is configured and
//! the environment is not development.
//!
//! Log calls never fail. Write errors go to registered failure handlers, or to
//! scalog's diagnostic channel on stderr.
//!
//! # Example
//!
//! ```no_run
//! use scalog::Logger;
//!
//! let logger = Logger::new();
//! logger.info("Application started");
//! logger.error("disk full");
//! logger.info(None::<&str>); // absent values are dropped
//! ```
//!
//! # Features
//!
//! - `cli` (default): the `scalog` command-line binary

pub mod clock;
pub mod config;
pub mod destination;
pub mod entry;
pub mod error;
pub mod internal;
pub mod level;
pub mod logger;
pub mod output;

#[cfg(feature = "cli")]
pub mod cli;

pub use clock::{Clock, SystemClock};
pub use config::Config;
pub use destination::{Destination, Environment, EnvironmentSource};
pub use entry::{LogEntry, Loggable};
pub use error::Error;
pub use level::Level;
pub use logger::{Bootstrap, Logger, LoggerBuilder};
pub use output::{
    DatabaseOutput, FileFormat, FileOutput, MirrorOutput, MirrorTarget, Output,
};
