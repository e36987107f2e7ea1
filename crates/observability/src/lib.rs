//! Tracing/logging (shared setup).

pub use self::tracing::{LogConfig, LogFormat, ParseLogFormatError};

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init(config: &LogConfig) {
    tracing::init(config);
}

/// Tracing configuration (filters, layers).
pub mod tracing;
