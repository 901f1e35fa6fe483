//! Boot phases and the order they must happen in.

use core::fmt;

/// `Reset -> StackEstablished -> StorageZeroed -> Running -> Idle`.
///
/// Each phase relies on what the previous one set up (a usable stack, then
/// zeroed statics), so none can be skipped or run out of order.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    Reset = 0,
    StackEstablished = 1,
    StorageZeroed = 2,
    Running = 3,
    Idle = 4,
}

impl Phase {
    pub const fn next(self) -> Option<Phase> {
        match self {
            Phase::Reset => Some(Phase::StackEstablished),
            Phase::StackEstablished => Some(Phase::StorageZeroed),
            Phase::StorageZeroed => Some(Phase::Running),
            Phase::Running => Some(Phase::Idle),
            Phase::Idle => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Phase::Reset => "reset",
            Phase::StackEstablished => "stack established",
            Phase::StorageZeroed => "storage zeroed",
            Phase::Running => "running",
            Phase::Idle => "idle",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseError {
    pub from: Phase,
    pub to: Phase,
}

impl fmt::Display for PhaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "illegal boot transition {} -> {}", self.from, self.to)
    }
}

/// Tracks the current phase. Lives on the boot stack, not in `.bss`, so
/// zeroing storage cannot rewind it.
#[derive(Debug)]
pub struct Sequencer {
    current: Phase,
}

impl Sequencer {
    pub const fn new() -> Self {
        Self { current: Phase::Reset }
    }

    #[inline]
    pub fn current(&self) -> Phase {
        self.current
    }

    /// Move to `to`, which must be exactly the next phase.
    pub fn advance(&mut self, to: Phase) -> Result<(), PhaseError> {
        if self.current.next() != Some(to) {
            return Err(PhaseError { from: self.current, to });
        }
        self.current = to;
        Ok(())
    }
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new()
    }
}
