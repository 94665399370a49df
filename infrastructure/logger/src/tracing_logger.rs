use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// `Logger` port backed by the `tracing` macros.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "star_rating", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "star_rating", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "star_rating", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "star_rating", "{}", message);
    }
}
