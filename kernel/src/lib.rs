//! Kernel library - boot sequence and SBI plumbing
//!
//! Everything that does not need to execute a RISC-V instruction lives here so
//! it can be tested on the host. The trap primitive is a trait ([`gateway::Ecall`]);
//! the kernel binary supplies the `ecall` implementation, tests supply a recorder.

#![cfg_attr(not(test), no_std)]

pub mod boot;
pub mod config;
pub mod console;
pub mod error;
pub mod gateway;
pub mod layout;
pub mod logging;
pub mod phase;
pub mod storage;

#[cfg(test)]
mod testing;

pub use sbi_abi::{RegisterFrame, SbiError, SbiRet};
