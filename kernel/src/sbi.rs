// kernel/src/sbi.rs
use kernel_lib::gateway::Ecall;
use kernel_lib::{RegisterFrame, SbiRet};

/// The SBI firmware (OpenSBI on QEMU virt), reached from S-mode with `ecall`.
#[derive(Clone, Copy)]
pub struct Firmware;

impl Ecall for Firmware {
    #[inline(always)]
    fn ecall(&mut self, frame: &RegisterFrame) -> SbiRet {
        let error: isize;
        let value: isize;
        // All eight registers are bound in one asm block. No `nomem`/`readonly`:
        // the firmware may read or write any memory, so nothing is reordered
        // across the trap. a2..a7 are treated as clobbered.
        unsafe {
            core::arch::asm!(
                "ecall",
                inlateout("a0") frame.arg0 as isize => error,
                inlateout("a1") frame.arg1 as isize => value,
                inlateout("a2") frame.arg2 => _,
                inlateout("a3") frame.arg3 => _,
                inlateout("a4") frame.arg4 => _,
                inlateout("a5") frame.arg5 => _,
                inlateout("a6") frame.function_id => _,
                inlateout("a7") frame.extension_id => _,
                options(nostack)
            );
        }
        SbiRet::new(error, value)
    }
}
