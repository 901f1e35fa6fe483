//! Memory layout handed to the boot code by the linker.
//!
//! The binary reads `_stack_top`, `__bss_start` and `__bss_end` once and
//! builds a [`BootLayout`]; everything after that takes the layout as an
//! argument instead of touching the symbols.

use core::fmt;

/// Stack alignment required by the RISC-V psABI.
pub const STACK_ALIGN: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// `end < start`.
    InvertedRegion { start: usize, end: usize },
    /// Stack top is not 16-byte aligned.
    MisalignedStack(usize),
    /// The stack's top bytes would sit inside the region that gets zeroed.
    StackInStorage { stack_top: usize },
    /// `sp` after the trampoline is not the linker's stack top.
    StackMismatch { expected: usize, observed: usize },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            LayoutError::InvertedRegion { start, end } => {
                write!(f, "region end {:#x} is below start {:#x}", end, start)
            }
            LayoutError::MisalignedStack(top) => {
                write!(f, "stack top {:#x} is not {}-byte aligned", top, STACK_ALIGN)
            }
            LayoutError::StackInStorage { stack_top } => {
                write!(f, "stack top {:#x} lies inside .bss", stack_top)
            }
            LayoutError::StackMismatch { expected, observed } => {
                write!(f, "boot sp {:#x}, expected {:#x}", observed, expected)
            }
        }
    }
}

/// Half-open address range `[start, end)`, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemRegion {
    start: usize,
    end: usize,
}

impl MemRegion {
    pub const fn new(start: usize, end: usize) -> Result<Self, LayoutError> {
        if end < start {
            return Err(LayoutError::InvertedRegion { start, end });
        }
        Ok(Self { start, end })
    }

    #[inline]
    pub const fn start(&self) -> usize {
        self.start
    }

    #[inline]
    pub const fn end(&self) -> usize {
        self.end
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub const fn contains(&self, addr: usize) -> bool {
        addr >= self.start && addr < self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootLayout {
    /// Highest stack address; the stack grows down from here.
    pub stack_top: usize,
    /// Statically allocated, uninitialized data.
    pub bss: MemRegion,
}

impl BootLayout {
    pub const fn new(stack_top: usize, bss_start: usize, bss_end: usize) -> Result<Self, LayoutError> {
        let bss = match MemRegion::new(bss_start, bss_end) {
            Ok(r) => r,
            Err(e) => return Err(e),
        };
        if stack_top % STACK_ALIGN != 0 {
            return Err(LayoutError::MisalignedStack(stack_top));
        }
        // Live stack bytes are [.., stack_top); the topmost one inside .bss
        // means the stack gets wiped.
        if bss.contains(stack_top.wrapping_sub(1)) {
            return Err(LayoutError::StackInStorage { stack_top });
        }
        Ok(Self { stack_top, bss })
    }

    /// Compare the `sp` the trampoline handed over with the linker's value.
    pub const fn check_stack(&self, observed_sp: usize) -> Result<(), LayoutError> {
        if observed_sp != self.stack_top {
            return Err(LayoutError::StackMismatch {
                expected: self.stack_top,
                observed: observed_sp,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_basic() {
        let r = MemRegion::new(0x8020_1000, 0x8020_2000).unwrap();
        assert_eq!(r.len(), 0x1000);
        assert!(!r.is_empty());
        assert!(r.contains(0x8020_1000));
        assert!(r.contains(0x8020_1fff));
        assert!(!r.contains(0x8020_2000));
    }

    #[test]
    fn test_region_empty_is_valid() {
        let r = MemRegion::new(0x8020_1000, 0x8020_1000).unwrap();
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert!(!r.contains(0x8020_1000));
    }

    #[test]
    fn test_region_inverted_rejected() {
        assert_eq!(
            MemRegion::new(0x2000, 0x1000),
            Err(LayoutError::InvertedRegion { start: 0x2000, end: 0x1000 })
        );
    }

    #[test]
    fn test_layout_stack_above_bss() {
        let l = BootLayout::new(0x8024_4000, 0x8020_3000, 0x8020_4000).unwrap();
        assert_eq!(l.stack_top, 0x8024_4000);
        assert_eq!(l.bss.len(), 0x1000);
    }

    #[test]
    fn test_layout_stack_below_bss_is_fine() {
        assert!(BootLayout::new(0x8020_3000, 0x8020_3000, 0x8020_4000).is_ok());
    }

    #[test]
    fn test_layout_stack_inside_bss_rejected() {
        assert_eq!(
            BootLayout::new(0x8020_4000, 0x8020_3000, 0x8020_4000),
            Err(LayoutError::StackInStorage { stack_top: 0x8020_4000 })
        );
        assert!(BootLayout::new(0x8020_3010, 0x8020_3000, 0x8020_4000).is_err());
    }

    #[test]
    fn test_layout_stack_overlap_edges() {
        // Top byte of the stack is the last byte of .bss.
        assert_eq!(
            BootLayout::new(0x8020_4000, 0x8020_3ff0, 0x8020_4000),
            Err(LayoutError::StackInStorage { stack_top: 0x8020_4000 })
        );
        // Top byte of the stack is the first byte of .bss.
        assert_eq!(
            BootLayout::new(0x8020_3010, 0x8020_3000, 0x8020_4000),
            Err(LayoutError::StackInStorage { stack_top: 0x8020_3010 })
        );
        // Stack top sits just above .bss.
        assert!(BootLayout::new(0x8020_4010, 0x8020_3000, 0x8020_4000).is_ok());
        // Zero top with .bss at address zero must not wrap into the region.
        assert!(BootLayout::new(0, 0, 0x100).is_ok());
    }

    #[test]
    fn test_layout_misaligned_stack_rejected() {
        assert_eq!(
            BootLayout::new(0x8024_4008, 0x8020_3000, 0x8020_4000),
            Err(LayoutError::MisalignedStack(0x8024_4008))
        );
    }

    #[test]
    fn test_layout_inverted_bss_rejected() {
        assert!(matches!(
            BootLayout::new(0x8024_4000, 0x8020_4000, 0x8020_3000),
            Err(LayoutError::InvertedRegion { .. })
        ));
    }

    #[test]
    fn test_check_stack() {
        let l = BootLayout::new(0x8024_4000, 0x8020_3000, 0x8020_4000).unwrap();
        assert_eq!(l.check_stack(0x8024_4000), Ok(()));
        assert_eq!(
            l.check_stack(0x8024_3ff0),
            Err(LayoutError::StackMismatch { expected: 0x8024_4000, observed: 0x8024_3ff0 })
        );
    }

    #[test]
    fn test_error_display() {
        let e = LayoutError::StackMismatch { expected: 0x100, observed: 0xf0 };
        assert_eq!(e.to_string(), "boot sp 0xf0, expected 0x100");
    }
}
