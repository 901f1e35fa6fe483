//! Kernel log levels and record formatting.
//!
//! The level threshold is a global atomic; the `klog!` family of macros in
//! the kernel binary checks it with [`should_log`] and then hands the message
//! to [`write_record`] together with the SBI console.
//!
//! Levels, finest first:
//! - TRACE: Fine-grained debugging information
//! - DEBUG: Debugging information
//! - INFO: Informational messages
//! - WARN: Warning messages
//! - ERROR: Error messages

use core::fmt;
use core::sync::atomic::{AtomicU8, Ordering};

#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl LogLevel {
    /// Fixed-width tag written in front of every record.
    pub const fn prefix(self) -> &'static str {
        match self {
            LogLevel::Trace => "[TRACE] ",
            LogLevel::Debug => "[DEBUG] ",
            LogLevel::Info => "[INFO]  ",
            LogLevel::Warn => "[WARN]  ",
            LogLevel::Error => "[ERROR] ",
        }
    }

    const fn from_u8(v: u8) -> Self {
        match v {
            0 => LogLevel::Trace,
            1 => LogLevel::Debug,
            2 => LogLevel::Info,
            3 => LogLevel::Warn,
            _ => LogLevel::Error,
        }
    }
}

/// Global log level filter. Messages below this level are suppressed.
///
/// Non-zero initializer, so this lives in `.data` and keeps its value across
/// `.bss` clearing.
static LOG_LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Info as u8);

pub fn get_log_level() -> LogLevel {
    LogLevel::from_u8(LOG_LEVEL.load(Ordering::Relaxed))
}

pub fn set_log_level(level: LogLevel) {
    LOG_LEVEL.store(level as u8, Ordering::Relaxed);
}

#[inline]
pub fn should_log(level: LogLevel) -> bool {
    level as u8 >= LOG_LEVEL.load(Ordering::Relaxed)
}

/// Write `"<prefix><message>\n"` to `out`.
pub fn write_record<W: fmt::Write + ?Sized>(out: &mut W, level: LogLevel, args: fmt::Arguments<'_>) -> fmt::Result {
    out.write_str(level.prefix())?;
    out.write_fmt(args)?;
    out.write_str("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixes_are_same_width() {
        for l in [LogLevel::Trace, LogLevel::Debug, LogLevel::Info, LogLevel::Warn, LogLevel::Error] {
            assert_eq!(l.prefix().len(), 8);
        }
    }

    #[test]
    fn test_from_u8_saturates_at_error() {
        assert_eq!(LogLevel::from_u8(2), LogLevel::Info);
        assert_eq!(LogLevel::from_u8(4), LogLevel::Error);
        assert_eq!(LogLevel::from_u8(200), LogLevel::Error);
    }

    // Only test that touches the global threshold.
    #[test]
    fn test_threshold_filtering() {
        set_log_level(LogLevel::Warn);
        assert_eq!(get_log_level(), LogLevel::Warn);
        assert!(!should_log(LogLevel::Trace));
        assert!(!should_log(LogLevel::Info));
        assert!(should_log(LogLevel::Warn));
        assert!(should_log(LogLevel::Error));

        set_log_level(LogLevel::Trace);
        assert!(should_log(LogLevel::Trace));

        set_log_level(LogLevel::Info);
        assert!(!should_log(LogLevel::Debug));
        assert!(should_log(LogLevel::Info));
    }

    #[test]
    fn test_write_record() {
        let mut out = String::new();
        write_record(&mut out, LogLevel::Warn, format_args!("boot sp {:#x}", 0x10)).unwrap();
        assert_eq!(out, "[WARN]  boot sp 0x10\n");
    }

    #[test]
    fn test_write_record_through_console() {
        use crate::console::Console;
        use crate::testing::Recorder;

        let mut rec = Recorder::new();
        let mut con = Console::new(&mut rec);
        write_record(&mut con, LogLevel::Error, format_args!("x")).unwrap();
        assert_eq!(rec.bytes(), b"[ERROR] x\n");
    }
}
