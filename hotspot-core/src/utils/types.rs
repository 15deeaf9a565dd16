use std::sync::Arc;

/// Alias to a scalar floating type used for coordinates and distances.
pub type Float = f64;

/// A logger used to report progress of long running operations.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Creates a logger which ignores all messages.
pub fn create_noop_logger() -> InfoLogger {
    Arc::new(|_: &str| {})
}
