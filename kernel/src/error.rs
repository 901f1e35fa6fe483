use core::fmt;

use crate::layout::LayoutError;
use crate::phase::PhaseError;

/// Anything that can stop the boot sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootError {
    Layout(LayoutError),
    Phase(PhaseError),
}

impl From<LayoutError> for BootError {
    fn from(value: LayoutError) -> Self {
        Self::Layout(value)
    }
}

impl From<PhaseError> for BootError {
    fn from(value: PhaseError) -> Self {
        Self::Phase(value)
    }
}

impl fmt::Display for BootError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BootError::Layout(e) => write!(f, "bad memory layout: {}", e),
            BootError::Phase(e) => write!(f, "{}", e),
        }
    }
}
