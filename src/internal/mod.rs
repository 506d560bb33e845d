//! scalog's own diagnostic channel, where swallowed write failures and setup
//! notes end up when nobody registered a failure handler.
//!
//! Writes straight to stderr instead of through a `Logger`, so a broken file or
//! database destination can never recurse into itself. The threshold is fixed
//! once via `OnceLock`; later `init_with_level` calls are no-ops.

use crate::level::Level;
use std::io::Write;
use std::sync::OnceLock;

/// Overrides the threshold when no config sets it.
pub const DIAGNOSTICS_VARIABLE: &str = "SCALOG_DIAGNOSTICS";

static THRESHOLD: OnceLock<Level> = OnceLock::new();

/// Sets the threshold from config. First caller wins; without a call the
/// threshold comes from `SCALOG_DIAGNOSTICS`, defaulting to `warn`.
pub fn init_with_level(level: Level) {
    THRESHOLD.get_or_init(|| level);
}

fn threshold_from_env() -> Level {
    std::env::var(DIAGNOSTICS_VARIABLE)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(Level::Warn)
}

#[must_use]
pub fn threshold() -> Level {
    *THRESHOLD.get_or_init(threshold_from_env)
}

/// Diagnostics are best-effort as well; a closed stderr is ignored.
fn log(level: Level, scope: &str, msg: &str) {
    if level < threshold() {
        return;
    }
    let mut stderr = std::io::stderr().lock();
    let _ = writeln!(stderr, "scalog: [{:<5}] {scope:<8} {msg}", level.label());
}

/// Per-write path resolution and dispatch.
pub fn trace(scope: &str, msg: &str) {
    log(Level::Trace, scope, msg);
}

/// Construction, bootstrap, directory creation.
pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

/// Setup anomalies that do not stop logging.
pub fn warn(scope: &str, msg: &str) {
    log(Level::Warn, scope, msg);
}

/// Swallowed write and bootstrap failures.
pub fn error(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}
