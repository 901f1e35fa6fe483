//! SBI call gateway.
//!
//! A call is a [`RegisterFrame`] in, an [`SbiRet`] out. The only part that
//! knows about registers and the `ecall` instruction is the [`Ecall`]
//! implementation handed to [`Gateway::new`]; on hardware that is the
//! binary's `sbi::Firmware`, in tests a recorder.

use sbi_abi::{RegisterFrame, SbiRet};

/// Platform trap primitive: load `frame` into `a0..a7`, trap to the
/// firmware, return `a0`/`a1`.
///
/// Implementations must load every slot (unused ones are zero in the frame,
/// not left over from earlier code) and must not let the compiler move memory
/// accesses across the trap.
pub trait Ecall {
    fn ecall(&mut self, frame: &RegisterFrame) -> SbiRet;
}

impl<E: Ecall + ?Sized> Ecall for &mut E {
    #[inline(always)]
    fn ecall(&mut self, frame: &RegisterFrame) -> SbiRet {
        (**self).ecall(frame)
    }
}

/// Issues SBI calls through a trap primitive.
///
/// The result is handed back exactly as the firmware left it. There is no
/// retry and no mapping of `error`; see [`SbiRet::into_result`] for callers
/// that want to classify it.
pub struct Gateway<E> {
    trap: E,
}

impl<E: Ecall> Gateway<E> {
    pub const fn new(trap: E) -> Self {
        Self { trap }
    }

    /// `call(eid, fid, arg0..)`: up to six arguments, the rest are sent as zero.
    #[inline]
    pub fn call<const N: usize>(&mut self, extension_id: usize, function_id: usize, args: [usize; N]) -> SbiRet {
        self.call_frame(&RegisterFrame::with_args(extension_id, function_id, args))
    }

    #[inline]
    pub fn call_frame(&mut self, frame: &RegisterFrame) -> SbiRet {
        self.trap.ecall(frame)
    }

    pub fn into_inner(self) -> E {
        self.trap
    }
}
