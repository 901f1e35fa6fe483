//! Build-time configuration.

use crate::logging::LogLevel;

/// Log threshold applied once `.bss` is clear. Picked with the `log-*`
/// cargo features; the finest enabled one wins.
pub const DEFAULT_LOG_LEVEL: LogLevel = if cfg!(feature = "log-trace") {
    LogLevel::Trace
} else if cfg!(feature = "log-debug") {
    LogLevel::Debug
} else if cfg!(feature = "log-warn") {
    LogLevel::Warn
} else if cfg!(feature = "log-error") {
    LogLevel::Error
} else {
    LogLevel::Info
};

/// Printed through raw `put_char` before any formatting machinery is used.
pub const BANNER: &[u8] = b"\n\nHello World!\n";
