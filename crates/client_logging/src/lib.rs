#![deny(missing_docs)]
//! Shared logging utilities for the slidecast workspace.
//!
//! This crate provides the `client_*` logging macros used across the
//! codebase, a thread-local request-generation marker for correlating
//! dispatch and completion log lines, and a minimal test initializer for
//! the global logger.

use std::cell::Cell;

thread_local! {
    /// Thread-local storage for the generation counter of the submission
    /// currently being serviced.
    static ACTIVE_REQUEST: Cell<u64> = const { Cell::new(0) };
}

/// Records the request generation for the current thread.
/// Called by the effect runner when it dispatches a submission.
pub fn set_active_request(request_id: u64) {
    ACTIVE_REQUEST.with(|v| v.set(request_id));
}

/// Retrieves the request generation recorded for the current thread.
/// Returns 0 before any submission has been dispatched.
pub fn active_request() -> u64 {
    ACTIVE_REQUEST.with(|v| v.get())
}

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! client_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! client_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! client_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! client_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! client_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
