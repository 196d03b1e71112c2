//! Process-wide logging setup for the catalog service.

/// Subscriber construction (filter, output format).
pub mod tracing;

pub use crate::tracing::{LogFormat, LogFormatError};

/// Initialize structured logging with the default settings.
///
/// Filter comes from `RUST_LOG` (default `info`), format from
/// `CATALOG_LOG_FORMAT` (default JSON). Safe to call multiple times;
/// subsequent calls are no-ops.
pub fn init() {
    let format = LogFormat::from_env().unwrap_or_default();
    crate::tracing::init_with(crate::tracing::DEFAULT_DIRECTIVE, format);
}
