//! Where swallowed errors go. Log calls never return them, so this is the only
//! way a caller can opt into stricter handling.

use crate::Error;
use crate::internal;

/// Receives every error a log call or the schema bootstrap swallowed.
pub type FailureHandler = Box<dyn Fn(&Error) + Send + Sync>;

/// Shared with the bootstrap thread, hence fixed at build time.
#[derive(Default)]
pub(crate) struct FailureChannel {
    handlers: Vec<FailureHandler>,
}

impl FailureChannel {
    pub(crate) fn new(handlers: Vec<FailureHandler>) -> Self {
        Self { handlers }
    }

    /// Falls back to the diagnostic channel when nobody registered a handler.
    pub(crate) fn report(&self, scope: &str, error: &Error) {
        if self.handlers.is_empty() {
            internal::error(scope, &error.to_string());
            return;
        }
        for handler in &self.handlers {
            handler(error);
        }
    }
}
