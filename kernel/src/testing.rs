//! Host-side stand-in for the firmware.

use std::collections::VecDeque;

use sbi_abi::{RegisterFrame, SbiRet};

use crate::gateway::Ecall;

/// Records every frame it is asked to trap with and answers from a script,
/// falling back to success with value 0 once the script runs out.
#[derive(Default)]
pub struct Recorder {
    pub calls: Vec<RegisterFrame>,
    replies: VecDeque<SbiRet>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_replies(replies: &[SbiRet]) -> Self {
        Self {
            calls: Vec::new(),
            replies: replies.iter().copied().collect(),
        }
    }

    /// `arg0` of every recorded call, as bytes.
    pub fn bytes(&self) -> Vec<u8> {
        self.calls.iter().map(|f| f.arg0 as u8).collect()
    }
}

impl Ecall for Recorder {
    fn ecall(&mut self, frame: &RegisterFrame) -> SbiRet {
        self.calls.push(*frame);
        self.replies.pop_front().unwrap_or_default()
    }
}
