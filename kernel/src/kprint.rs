//! Formatted console output and leveled logging over the SBI console.
//!
//! All of it goes through [`CONSOLE`], whose lock word is zero-initialized and
//! therefore lives in `.bss`: nothing here may run before `boot::early_init`.

use core::fmt::{self, Write};

use kernel_lib::console::Console;
use kernel_lib::logging::{self, LogLevel};
use spin::Mutex;

use crate::sbi::Firmware;

/// Shared console. The mutex serializes gateway use; a call must not be
/// interleaved with another on the same hart.
pub static CONSOLE: Mutex<Console<Firmware>> = Mutex::new(Console::new(Firmware));

pub fn _print(args: fmt::Arguments) {
    let _ = CONSOLE.lock().write_fmt(args);
}

pub fn _log(level: LogLevel, args: fmt::Arguments) {
    if logging::should_log(level) {
        let _ = logging::write_record(&mut *CONSOLE.lock(), level, args);
    }
}

macro_rules! println {
    () => {
        $crate::kprint::_print(format_args!("\n"))
    };
    ($($arg:tt)*) => {
        $crate::kprint::_print(format_args!("{}\n", format_args!($($arg)*)))
    };
}

/// Kernel logging with level filtering.
macro_rules! klog {
    ($level:expr, $($arg:tt)*) => {
        $crate::kprint::_log($level, format_args!($($arg)*))
    };
}

#[allow(unused_macros)]
macro_rules! ktrace {
    ($($arg:tt)*) => {
        klog!(kernel_lib::logging::LogLevel::Trace, $($arg)*)
    };
}

macro_rules! kdebug {
    ($($arg:tt)*) => {
        klog!(kernel_lib::logging::LogLevel::Debug, $($arg)*)
    };
}

macro_rules! kinfo {
    ($($arg:tt)*) => {
        klog!(kernel_lib::logging::LogLevel::Info, $($arg)*)
    };
}

#[allow(unused_macros)]
macro_rules! kwarn {
    ($($arg:tt)*) => {
        klog!(kernel_lib::logging::LogLevel::Warn, $($arg)*)
    };
}

macro_rules! kerror {
    ($($arg:tt)*) => {
        klog!(kernel_lib::logging::LogLevel::Error, $($arg)*)
    };
}
