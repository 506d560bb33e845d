//! Schema creation runs off the constructor's thread; this handle is how a caller
//! finds out when (and whether) it finished.
//!
//! A caller that never waits accepts the race: entries written before the table
//! and routine exist fail, are reported as failures, and are lost.

use super::failure::FailureChannel;
use crate::Error;
use crate::internal;
use crate::output::DatabaseOutput;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, OnceLock};
use std::thread::{self, JoinHandle};

pub struct Bootstrap {
    handle: Mutex<Option<JoinHandle<Result<(), Error>>>>,
    /// Set by the thread itself as its last step, so it stays accurate while a
    /// `wait` holds the taken handle.
    done: Arc<AtomicBool>,
    /// `Error` isn't `Clone`, so the settled outcome keeps only the message.
    outcome: OnceLock<Result<(), String>>,
}

impl Bootstrap {
    pub(crate) fn spawn(database: DatabaseOutput, failures: Arc<FailureChannel>) -> Self {
        internal::debug(
            "BOOTSTRAP",
            &format!("Starting schema bootstrap for table {}", database.table()),
        );

        let done = Arc::new(AtomicBool::new(false));
        let thread_done = Arc::clone(&done);
        let thread_failures = Arc::clone(&failures);
        let spawned = thread::Builder::new()
            .name("scalog-bootstrap".to_string())
            .spawn(move || {
                let result = database.ensure_schema();
                match &result {
                    Ok(()) => internal::debug("BOOTSTRAP", "Schema ready"),
                    Err(e) => thread_failures.report("BOOTSTRAP", e),
                }
                thread_done.store(true, Ordering::Release);
                result
            });

        match spawned {
            Ok(handle) => Self {
                handle: Mutex::new(Some(handle)),
                done,
                outcome: OnceLock::new(),
            },
            Err(e) => {
                let error = Error::from(e);
                failures.report("BOOTSTRAP", &error);
                done.store(true, Ordering::Release);
                Self {
                    handle: Mutex::new(None),
                    done,
                    outcome: OnceLock::from(Err(error.to_string())),
                }
            }
        }
    }

    /// Blocks until the bootstrap thread is done. Every call returns the same outcome.
    ///
    /// # Errors
    /// `Error::Bootstrap` if schema creation failed or the thread panicked.
    pub fn wait(&self) -> Result<(), Error> {
        let outcome = self.outcome.get_or_init(|| {
            let handle = self.handle.lock().ok().and_then(|mut slot| slot.take());
            match handle.map(JoinHandle::join) {
                Some(Ok(Ok(()))) => Ok(()),
                Some(Ok(Err(e))) => Err(e.to_string()),
                Some(Err(_)) => Err("bootstrap thread panicked".to_string()),
                None => Err("bootstrap handle unavailable".to_string()),
            }
        });
        outcome.clone().map_err(Error::Bootstrap)
    }

    /// Non-blocking check, e.g. for readiness probes.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        // A panicking thread never sets `done`; its handle still reports finished
        self.outcome.get().is_some()
            || self.done.load(Ordering::Acquire)
            || self
                .handle
                .lock()
                .is_ok_and(|slot| slot.as_ref().is_some_and(JoinHandle::is_finished))
    }
}

impl std::fmt::Debug for Bootstrap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bootstrap")
            .field("finished", &self.is_finished())
            .field("outcome", &self.outcome.get())
            .finish()
    }
}
