//! Boot sequence, after the trampoline has set up `sp`.
//!
//! The binary's `kernel_main` is a thin shell around these: it supplies the
//! [`BootLayout`] read from the linker and the SBI-backed console.

use crate::config;
use crate::console::Console;
use crate::error::BootError;
use crate::gateway::Ecall;
use crate::layout::BootLayout;
use crate::phase::{Phase, Sequencer};
use crate::storage;

/// `Reset -> StackEstablished -> StorageZeroed`.
///
/// Only the stack and `layout` are touched until `.bss` is clear, so nothing
/// here may log, print or read a zero-initialized static.
///
/// # Safety
///
/// `layout.bss` must be the image's real `.bss`, and this must run once, before
/// any code that reads a zero-initialized static.
pub unsafe fn early_init(seq: &mut Sequencer, layout: &BootLayout) -> Result<(), BootError> {
    seq.advance(Phase::StackEstablished)?;
    storage::zero(layout.bss);
    seq.advance(Phase::StorageZeroed)?;
    Ok(())
}

/// `StorageZeroed -> Running`.
pub fn start_running(seq: &mut Sequencer) -> Result<(), BootError> {
    seq.advance(Phase::Running)?;
    Ok(())
}

/// `Running -> Idle`. After this the caller only waits.
pub fn enter_idle(seq: &mut Sequencer) -> Result<(), BootError> {
    seq.advance(Phase::Idle)?;
    Ok(())
}

/// Raw banner, one `put_char` per byte, before any `core::fmt` machinery runs.
pub fn greet<E: Ecall>(con: &mut Console<E>) {
    con.write_bytes(config::BANNER);
}
