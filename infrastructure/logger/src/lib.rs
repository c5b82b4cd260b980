use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Logger adapter that forwards domain log calls to `tracing`.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "pantry", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "pantry", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "pantry", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "pantry", "{}", message);
    }
}
