use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "autobiography", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "autobiography", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "autobiography", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "autobiography", "{}", message);
    }
}
