//! Wire format of the RISC-V Supervisor Binary Interface.
//!
//! Everything here is plain data: which register carries which word on the way
//! into an `ecall`, and what the two result registers mean on the way out.
//! Issuing the trap itself is the kernel's business.

#![cfg_attr(not(test), no_std)]

use core::fmt;

/// Extension IDs (`a7`).
pub mod eid {
    /// Legacy `sbi_console_putchar(int ch)`.
    pub const LEGACY_CONSOLE_PUTCHAR: usize = 0x01;
}

/// Function IDs (`a6`).
pub mod fid {
    /// Legacy extensions ignore `a6`, but it still has to hold a defined value.
    pub const LEGACY: usize = 0;
}

/// Argument and selector words for one SBI call, in register order.
///
/// Field `n` of this struct is register `a<n>`; the firmware's trap handler
/// reads exactly those registers, so the order is part of the ABI.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct RegisterFrame {
    pub arg0: usize,         // a0
    pub arg1: usize,         // a1
    pub arg2: usize,         // a2
    pub arg3: usize,         // a3
    pub arg4: usize,         // a4
    pub arg5: usize,         // a5
    pub function_id: usize,  // a6
    pub extension_id: usize, // a7
}

impl RegisterFrame {
    /// Number of argument registers an SBI call can carry.
    pub const MAX_ARGS: usize = 6;

    /// A call with every argument register zeroed.
    #[inline]
    pub const fn new(extension_id: usize, function_id: usize) -> Self {
        Self {
            arg0: 0,
            arg1: 0,
            arg2: 0,
            arg3: 0,
            arg4: 0,
            arg5: 0,
            function_id,
            extension_id,
        }
    }

    /// A call carrying `args` in `a0..` and zero in every register after them.
    #[inline]
    pub fn with_args<const N: usize>(extension_id: usize, function_id: usize, args: [usize; N]) -> Self {
        const { assert!(N <= RegisterFrame::MAX_ARGS, "SBI calls take at most six arguments") };

        let mut slots = [0usize; Self::MAX_ARGS];
        slots[..N].copy_from_slice(&args);

        Self {
            arg0: slots[0],
            arg1: slots[1],
            arg2: slots[2],
            arg3: slots[3],
            arg4: slots[4],
            arg5: slots[5],
            function_id,
            extension_id,
        }
    }

    /// Argument words `a0..a5`.
    #[inline]
    pub const fn args(&self) -> [usize; Self::MAX_ARGS] {
        [self.arg0, self.arg1, self.arg2, self.arg3, self.arg4, self.arg5]
    }

    /// All eight words; index `n` is register `a<n>`.
    #[inline]
    pub const fn registers(&self) -> [usize; 8] {
        [
            self.arg0,
            self.arg1,
            self.arg2,
            self.arg3,
            self.arg4,
            self.arg5,
            self.function_id,
            self.extension_id,
        ]
    }
}

/// `struct sbiret`: `a0` is the status, `a1` the service-defined value.
///
/// `value` only means something when `error == 0`, and legacy extensions
/// leave it unspecified altogether.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct SbiRet {
    pub error: isize,
    pub value: isize,
}

impl SbiRet {
    #[inline]
    pub const fn new(error: isize, value: isize) -> Self {
        Self { error, value }
    }

    #[inline]
    pub const fn success(value: isize) -> Self {
        Self { error: 0, value }
    }

    #[inline]
    pub const fn is_ok(&self) -> bool {
        self.error == 0
    }

    /// Classify the status word. This is a caller-side helper; nothing on the
    /// call path itself looks at `error`.
    #[inline]
    pub fn into_result(self) -> Result<isize, SbiError> {
        match self.error {
            0 => Ok(self.value),
            code => Err(SbiError::from_code(code)),
        }
    }
}

/// Standard SBI status codes.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SbiError {
    Failed,
    NotSupported,
    InvalidParam,
    Denied,
    InvalidAddress,
    AlreadyAvailable,
    AlreadyStarted,
    AlreadyStopped,
    NoShmem,
    InvalidState,
    InvalidRange,
    Timeout,
    Io,
    /// Anything the firmware returned that the standard does not name.
    Unknown(isize),
}

impl SbiError {
    pub const fn from_code(code: isize) -> Self {
        match code {
            -1 => Self::Failed,
            -2 => Self::NotSupported,
            -3 => Self::InvalidParam,
            -4 => Self::Denied,
            -5 => Self::InvalidAddress,
            -6 => Self::AlreadyAvailable,
            -7 => Self::AlreadyStarted,
            -8 => Self::AlreadyStopped,
            -9 => Self::NoShmem,
            -10 => Self::InvalidState,
            -11 => Self::InvalidRange,
            -12 => Self::Timeout,
            -13 => Self::Io,
            other => Self::Unknown(other),
        }
    }

    pub const fn code(&self) -> isize {
        match self {
            Self::Failed => -1,
            Self::NotSupported => -2,
            Self::InvalidParam => -3,
            Self::Denied => -4,
            Self::InvalidAddress => -5,
            Self::AlreadyAvailable => -6,
            Self::AlreadyStarted => -7,
            Self::AlreadyStopped => -8,
            Self::NoShmem => -9,
            Self::InvalidState => -10,
            Self::InvalidRange => -11,
            Self::Timeout => -12,
            Self::Io => -13,
            Self::Unknown(code) => *code,
        }
    }
}

impl fmt::Display for SbiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Failed => "failed",
            Self::NotSupported => "not supported",
            Self::InvalidParam => "invalid parameter",
            Self::Denied => "denied",
            Self::InvalidAddress => "invalid address",
            Self::AlreadyAvailable => "already available",
            Self::AlreadyStarted => "already started",
            Self::AlreadyStopped => "already stopped",
            Self::NoShmem => "shared memory not available",
            Self::InvalidState => "invalid state",
            Self::InvalidRange => "invalid range",
            Self::Timeout => "timed out",
            Self::Io => "I/O error",
            Self::Unknown(_) => "unknown error",
        };
        write!(f, "{} ({})", name, self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_layout_matches_register_order() {
        let frame = RegisterFrame {
            arg0: 10,
            arg1: 11,
            arg2: 12,
            arg3: 13,
            arg4: 14,
            arg5: 15,
            function_id: 16,
            extension_id: 17,
        };
        assert_eq!(frame.registers(), [10, 11, 12, 13, 14, 15, 16, 17]);

        // repr(C): a0 at offset 0, a7 in the last word.
        let word = core::mem::size_of::<usize>();
        assert_eq!(core::mem::size_of::<RegisterFrame>(), 8 * word);
        assert_eq!(core::mem::offset_of!(RegisterFrame, arg0), 0);
        assert_eq!(core::mem::offset_of!(RegisterFrame, function_id), 6 * word);
        assert_eq!(core::mem::offset_of!(RegisterFrame, extension_id), 7 * word);
    }

    #[test]
    fn test_new_zeroes_arguments() {
        let frame = RegisterFrame::new(0x10, 3);
        assert_eq!(frame.args(), [0; 6]);
        assert_eq!(frame.function_id, 3);
        assert_eq!(frame.extension_id, 0x10);
    }

    #[test]
    fn test_with_args_fills_prefix_and_zeroes_rest() {
        let frame = RegisterFrame::with_args(eid::LEGACY_CONSOLE_PUTCHAR, fid::LEGACY, [b'A' as usize]);
        assert_eq!(frame.args(), [0x41, 0, 0, 0, 0, 0]);
        assert_eq!(frame.extension_id, 1);
        assert_eq!(frame.function_id, 0);

        let frame = RegisterFrame::with_args(7, 8, [1, 2, 3, 4, 5, 6]);
        assert_eq!(frame.registers(), [1, 2, 3, 4, 5, 6, 8, 7]);

        let frame = RegisterFrame::with_args(7, 8, []);
        assert_eq!(frame, RegisterFrame::new(7, 8));
    }

    #[test]
    fn test_sbiret_success() {
        let ret = SbiRet::success(42);
        assert!(ret.is_ok());
        assert_eq!(ret.into_result(), Ok(42));
    }

    #[test]
    fn test_sbiret_error_classification() {
        assert_eq!(SbiRet::new(-2, 0).into_result(), Err(SbiError::NotSupported));
        assert_eq!(SbiRet::new(-13, 99).into_result(), Err(SbiError::Io));
        assert_eq!(SbiRet::new(-77, 0).into_result(), Err(SbiError::Unknown(-77)));
        assert_eq!(SbiRet::new(5, 0).into_result(), Err(SbiError::Unknown(5)));
    }

    #[test]
    fn test_error_codes_round_trip_through_known_range() {
        for code in -13..=-1 {
            let err = SbiError::from_code(code);
            assert!(!matches!(err, SbiError::Unknown(_)), "code {code} should be named");
            assert_eq!(err.code(), code);
        }
    }

    #[test]
    fn test_error_display() {
        assert_eq!(SbiError::NotSupported.to_string(), "not supported (-2)");
        assert_eq!(SbiError::Unknown(-42).to_string(), "unknown error (-42)");
    }
}
