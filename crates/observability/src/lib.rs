//! Tracing/logging setup shared by the millwork binaries.

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Initialize verbose, test-captured logging.
///
/// Intended for `#[test]` functions; output goes through the libtest writer.
pub fn init_test() {
    tracing::init_test();
}

/// Tracing configuration (filters, layers).
pub mod tracing;
