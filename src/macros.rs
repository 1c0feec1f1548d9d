//! Logging macros with `format!`-style message formatting.
//!
//! # Examples
//!
//! ```
//! use hierlog::info;
//!
//! let logger = hierlog::get("server").unwrap();
//!
//! info!(logger, "listening");
//!
//! let port = 8080;
//! info!(logger, "listening on port {}", port);
//! ```

/// Log a message at an explicit level with automatic formatting.
///
/// ```
/// # let logger = hierlog::get("doc.log_macro").unwrap();
/// use hierlog::{log, Level};
/// log!(logger, Level::Info, "simple message");
/// log!(logger, Level::Error, "error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Error, $($arg)+)
    };
}
