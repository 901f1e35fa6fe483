//! Console output through the legacy SBI putchar call.

use core::fmt;

use sbi_abi::{eid, fid};

use crate::gateway::{Ecall, Gateway};

/// Unbuffered console. Every byte is one gateway call, issued in order and
/// finished before the next one starts.
pub struct Console<E> {
    gateway: Gateway<E>,
}

impl<E: Ecall> Console<E> {
    pub const fn new(trap: E) -> Self {
        Self {
            gateway: Gateway::new(trap),
        }
    }

    /// Send one byte. The firmware's answer is dropped: a platform without the
    /// legacy console just shows nothing.
    #[inline]
    pub fn put_char(&mut self, ch: u8) {
        let _ = self
            .gateway
            .call(eid::LEGACY_CONSOLE_PUTCHAR, fid::LEGACY, [ch as usize]);
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.put_char(b);
        }
    }

    pub fn gateway(&mut self) -> &mut Gateway<E> {
        &mut self.gateway
    }
}

impl<E: Ecall> fmt::Write for Console<E> {
    // Bytes go out as-is; no "\n" -> "\r\n" translation.
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_bytes(s.as_bytes());
        Ok(())
    }
}
